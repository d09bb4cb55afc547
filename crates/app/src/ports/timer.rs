//! Timer port — non-blocking delays between sequence steps.

use std::future::Future;
use std::time::Duration;

/// Waits without blocking the calling execution context.
///
/// The runner races the returned future against a cancellation signal, so an
/// implementation must not park the thread; tests substitute an instant or
/// hand-controlled timer.
pub trait Timer {
    /// Resolve after roughly `duration` has elapsed.
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send;
}

impl<T: Timer + Send + Sync> Timer for std::sync::Arc<T> {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        (**self).sleep(duration)
    }
}
