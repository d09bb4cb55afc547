//! Notification sink port — transient, best-effort user notifications.

use std::future::Future;

/// Requests transient, auto-dismissing notifications on behalf of an action.
///
/// Best-effort only: the future resolves once dispatch has been *requested*,
/// not delivered. Implementations swallow dispatch failures after recording a
/// diagnostic, so the port surface is infallible — a failed notification must
/// never abort a running sequence.
pub trait Notifier {
    /// Request a notification with the given title and message.
    fn notify(&self, title: &str, message: &str) -> impl Future<Output = ()> + Send;
}

impl<T: Notifier + Send + Sync> Notifier for std::sync::Arc<T> {
    fn notify(&self, title: &str, message: &str) -> impl Future<Output = ()> + Send {
        (**self).notify(title, message)
    }
}
