//! # restdeck-adapter-virtual
//!
//! Virtual/demo device surface that renders device-feedback events into an
//! inspectable state, standing in for the real button/dial display (which is
//! owned by the host runtime and out of scope here).
//!
//! ## Rendered state
//!
//! | Event | Effect |
//! |-------|--------|
//! | `breathe_state_change1` | breathing glyph switches to its wide state |
//! | `breathe_state_change2` | breathing glyph switches to its narrow state |
//! | `eye_protection_reminder` | reminder pulse counter increments |
//! | `completed` | completed-segment counter increments |
//!
//! ## Dependency rule
//!
//! Depends on `restdeck-app` (event bus, event names) and `restdeck-domain`
//! only.

use std::sync::Mutex;

use tokio::sync::broadcast;

use restdeck_app::actions::COMPLETED_EVENT;
use restdeck_app::actions::breathing::{STATE_ONE_EVENT, STATE_TWO_EVENT};
use restdeck_app::actions::eye_reminder::REMINDER_EVENT;
use restdeck_domain::event::DeviceEvent;

/// The two visual states the breathing icon alternates between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreathingGlyph {
    /// Shown on the half-cycle cue.
    Wide,
    /// Shown on each pacing tick.
    Narrow,
}

/// What the simulated surface currently shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SurfaceState {
    /// Current breathing icon, once a cue has been seen.
    pub breathing_glyph: Option<BreathingGlyph>,
    /// Number of reminder pulses rendered.
    pub reminder_pulses: u64,
    /// Number of completed segments rendered.
    pub completed_segments: u64,
}

/// Simulated device surface fed from the event bus.
#[derive(Debug, Default)]
pub struct VirtualSurface {
    state: Mutex<SurfaceState>,
}

impl VirtualSurface {
    /// Snapshot of the currently rendered state.
    ///
    /// # Panics
    ///
    /// Panics if the state lock is poisoned.
    #[must_use]
    pub fn state(&self) -> SurfaceState {
        *self.state.lock().expect("surface state lock poisoned")
    }

    /// Render one event onto the surface.
    ///
    /// # Panics
    ///
    /// Panics if the state lock is poisoned.
    pub fn apply(&self, event: &DeviceEvent) {
        let mut state = self.state.lock().expect("surface state lock poisoned");
        match event.name.as_str() {
            STATE_ONE_EVENT => state.breathing_glyph = Some(BreathingGlyph::Wide),
            STATE_TWO_EVENT => state.breathing_glyph = Some(BreathingGlyph::Narrow),
            REMINDER_EVENT => state.reminder_pulses += 1,
            COMPLETED_EVENT => state.completed_segments += 1,
            other => {
                tracing::debug!(event = other, "ignoring unknown feedback event");
                return;
            }
        }
        tracing::info!(%event, "surface updated");
    }

    /// Apply every event from the bus until it closes.
    ///
    /// Lagging behind the bus only drops cosmetic frames; it is logged and
    /// rendering continues with the next event.
    pub async fn run(&self, mut receiver: broadcast::Receiver<DeviceEvent>) {
        loop {
            match receiver.recv().await {
                Ok(event) => self.apply(&event),
                Err(broadcast::error::RecvError::Lagged(missed)) => {
                    tracing::warn!(missed, "surface lagged behind the event bus");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    }
}
