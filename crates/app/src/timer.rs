//! Production timer — tokio sleep behind the [`Timer`] port.

use std::future::Future;
use std::time::Duration;

use crate::ports::Timer;

/// Timer backed by the tokio runtime clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimer;

impl Timer for SystemTimer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        tokio::time::sleep(duration)
    }
}
