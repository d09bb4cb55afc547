//! Hand-rolled port doubles shared by the test modules in this crate.

use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;
use std::task::Poll;
use std::time::Duration;

use tokio::sync::Semaphore;

use restdeck_domain::error::RestDeckError;
use restdeck_domain::event::DeviceEvent;

use crate::ports::{EventPublisher, Notifier, Timer};

/// Records every notification request.
#[derive(Default)]
pub(crate) struct SpyNotifier {
    calls: Mutex<Vec<(String, String)>>,
    fail: bool,
    failures: Mutex<usize>,
}

impl SpyNotifier {
    /// Stand-in for a sink whose underlying dispatch fails on every call.
    ///
    /// The port contract makes the failure invisible to the caller: the sink
    /// swallows it and returns. Each swallowed failure is counted so a test
    /// can assert the failure path was actually taken.
    pub(crate) fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub(crate) fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of dispatches that failed and were swallowed.
    pub(crate) fn failures(&self) -> usize {
        *self.failures.lock().unwrap()
    }
}

impl Notifier for SpyNotifier {
    fn notify(&self, title: &str, message: &str) -> impl Future<Output = ()> + Send {
        let mut calls = self.calls.lock().unwrap();
        calls.push((title.to_string(), message.to_string()));
        if self.fail {
            *self.failures.lock().unwrap() += 1;
        }
        async {}
    }
}

/// Records every published event.
#[derive(Default)]
pub(crate) struct SpyPublisher {
    events: Mutex<Vec<DeviceEvent>>,
}

impl SpyPublisher {
    pub(crate) fn names(&self) -> Vec<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .map(|event| event.name.clone())
            .collect()
    }
}

impl EventPublisher for SpyPublisher {
    fn publish(&self, event: DeviceEvent) -> impl Future<Output = Result<(), RestDeckError>> + Send {
        self.events.lock().unwrap().push(event);
        async { Ok(()) }
    }
}

/// Resolves immediately, recording each requested duration.
#[derive(Default)]
pub(crate) struct InstantTimer {
    slept: Mutex<Vec<Duration>>,
}

impl InstantTimer {
    pub(crate) fn slept(&self) -> Vec<Duration> {
        self.slept.lock().unwrap().clone()
    }
}

impl Timer for InstantTimer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        let mut slept = self.slept.lock().unwrap();
        slept.push(duration);
        async {}
    }
}

/// Never resolves — lets a test cancel a run mid-wait.
pub(crate) struct PendingTimer;

impl Timer for PendingTimer {
    fn sleep(&self, _duration: Duration) -> impl Future<Output = ()> + Send {
        std::future::pending()
    }
}

/// Parks each sleep on a semaphore so a test controls when waits elapse.
///
/// Starts with zero permits; call [`GateTimer::release`] to let parked (and
/// future) sleeps complete. Requested durations are recorded up front.
pub(crate) struct GateTimer {
    gate: Semaphore,
    requests: Mutex<Vec<Duration>>,
}

impl Default for GateTimer {
    fn default() -> Self {
        Self {
            gate: Semaphore::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }
}

impl GateTimer {
    pub(crate) fn release(&self, sleeps: usize) {
        self.gate.add_permits(sleeps);
    }

    pub(crate) fn requests(&self) -> Vec<Duration> {
        self.requests.lock().unwrap().clone()
    }
}

impl Timer for GateTimer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        self.requests.lock().unwrap().push(duration);
        async {
            self.gate
                .acquire()
                .await
                .expect("gate semaphore closed")
                .forget();
        }
    }
}

/// Poll a future exactly once, returning its output if it is ready.
pub(crate) async fn poll_once<F: Future>(future: Pin<&mut F>) -> Option<F::Output> {
    let mut future = Some(future);
    std::future::poll_fn(move |cx| match future.take().unwrap().poll(cx) {
        Poll::Ready(output) => Poll::Ready(Some(output)),
        Poll::Pending => Poll::Ready(None),
    })
    .await
}

/// Poll a future until `ready` reports true, panicking after `limit` polls.
///
/// Each poll parks the future at its next pending point, so side effects of
/// earlier steps become observable between polls.
pub(crate) async fn poll_until<F: Future>(
    mut future: Pin<&mut F>,
    limit: usize,
    ready: impl Fn() -> bool,
) {
    for _ in 0..limit {
        if ready() {
            return;
        }
        assert!(
            poll_once(future.as_mut()).await.is_none(),
            "future completed before the readiness condition held"
        );
    }
    panic!("readiness condition not reached within {limit} polls");
}
