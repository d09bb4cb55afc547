//! Device event — a named, payload-less feedback signal.
//!
//! Actions broadcast device events to drive cosmetic state changes on the
//! controlling surface (e.g. alternating an icon between two visual states to
//! pace a breathing cue). Delivery is fire-and-forget: no payload, no
//! acknowledgment, no delivery guarantee.

use serde::{Deserialize, Serialize};

use crate::id::EventId;
use crate::time::{Timestamp, now};

/// A named feedback signal published to device-feedback listeners.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceEvent {
    /// Unique identifier of this occurrence.
    pub id: EventId,
    /// Event name, e.g. `"breathe_state_change1"` or `"completed"`.
    pub name: String,
    /// When the event was created.
    pub timestamp: Timestamp,
}

impl DeviceEvent {
    /// Create a new event with the given name, stamped with the current time.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: EventId::new(),
            name: name.into(),
            timestamp: now(),
        }
    }
}

impl std::fmt::Display for DeviceEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
