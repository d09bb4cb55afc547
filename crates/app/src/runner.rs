//! Sequence runner — executes a scripted sequence step by step.
//!
//! Steps run strictly in order on the calling task; the total latency of a run
//! is the sum of all wait durations plus incidental notification/broadcast
//! latency. There is no parallelism between steps.
//!
//! Cancellation is delivered through a [`watch`] channel and raced against the
//! in-progress sleep, so a cancel request interrupts a wait immediately rather
//! than being observed only at the next step boundary.

use std::time::Duration;

use tokio::sync::watch;

use restdeck_domain::event::DeviceEvent;
use restdeck_domain::sequence::{Sequence, Step};

use crate::ports::{EventPublisher, Notifier, Timer};

/// How a sequence execution ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every step was executed.
    Completed,
    /// A cancel signal cut the run short.
    Cancelled,
}

/// What ended a single wait step.
#[derive(Debug, PartialEq, Eq)]
enum WaitEnd {
    Elapsed,
    Interrupted,
}

/// Executes sequences against the notification, event, and timer ports.
pub struct SequenceRunner<N, P, T> {
    notifier: N,
    publisher: P,
    timer: T,
}

impl<N, P, T> SequenceRunner<N, P, T>
where
    N: Notifier,
    P: EventPublisher,
    T: Timer,
{
    /// Create a runner over the given ports.
    pub fn new(notifier: N, publisher: P, timer: T) -> Self {
        Self {
            notifier,
            publisher,
            timer,
        }
    }

    /// Execute all steps in order, without a cancellation source.
    pub async fn run(&self, sequence: &Sequence) -> Outcome {
        let (_cancel, rx) = watch::channel(false);
        self.run_with_cancel(sequence, rx).await
    }

    /// Execute all steps in order until completion or cancellation.
    ///
    /// A cancel signalled before a step starts is observed at the step
    /// boundary; one signalled during a wait interrupts the wait itself.
    /// Notification and broadcast failures never abort the run: the notifier
    /// port is infallible by contract and publish errors are dropped
    /// fire-and-forget.
    pub async fn run_with_cancel(
        &self,
        sequence: &Sequence,
        mut cancel: watch::Receiver<bool>,
    ) -> Outcome {
        for step in sequence.steps() {
            if *cancel.borrow_and_update() {
                tracing::debug!(%step, "sequence cancelled at step boundary");
                return Outcome::Cancelled;
            }
            match step {
                Step::Notify { title, message } => {
                    self.notifier.notify(title, message).await;
                }
                Step::Broadcast { event } => {
                    // Feedback delivery is cosmetic; ignore publish errors.
                    let _ = self.publisher.publish(DeviceEvent::named(event.clone())).await;
                }
                Step::Wait { millis } => {
                    let duration = Duration::from_millis(*millis);
                    if self.wait(duration, &mut cancel).await == WaitEnd::Interrupted {
                        tracing::debug!(%step, "sequence cancelled mid-wait");
                        return Outcome::Cancelled;
                    }
                }
            }
        }
        Outcome::Completed
    }

    /// Sleep for `duration` unless the cancel signal fires first.
    async fn wait(&self, duration: Duration, cancel: &mut watch::Receiver<bool>) -> WaitEnd {
        let sleep = self.timer.sleep(duration);
        tokio::pin!(sleep);
        loop {
            tokio::select! {
                () = &mut sleep => return WaitEnd::Elapsed,
                changed = cancel.changed() => {
                    // A closed channel means cancellation can no longer
                    // arrive; finish the sleep undisturbed.
                    let Ok(()) = changed else { break };
                    if *cancel.borrow_and_update() {
                        return WaitEnd::Interrupted;
                    }
                }
            }
        }
        sleep.await;
        WaitEnd::Elapsed
    }
}
