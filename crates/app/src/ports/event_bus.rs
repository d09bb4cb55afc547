//! Event bus port — publish/subscribe for device-feedback events.

use std::future::Future;

use restdeck_domain::error::RestDeckError;
use restdeck_domain::event::DeviceEvent;

/// Publishes device-feedback events to interested subscribers.
///
/// Delivery is fire-and-forget: no acknowledgment, no backpressure, and no
/// guarantee any listener is attached.
pub trait EventPublisher {
    /// Publish an event to all current subscribers.
    fn publish(&self, event: DeviceEvent) -> impl Future<Output = Result<(), RestDeckError>> + Send;
}

impl<T: EventPublisher + Send + Sync> EventPublisher for std::sync::Arc<T> {
    fn publish(&self, event: DeviceEvent) -> impl Future<Output = Result<(), RestDeckError>> + Send {
        (**self).publish(event)
    }
}
