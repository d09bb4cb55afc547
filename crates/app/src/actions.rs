//! Actions — the user-triggerable scripted behaviours exposed to the host.
//!
//! Every action owns its script, a run-state guard, and a sequence runner.
//! The host invokes [`Action::trigger`] on each user activation (button press)
//! and queries [`Action::display_name`] for the label to render. At most one
//! run per action instance is active at any time; what a repeat trigger does
//! while running differs per action (no-op for the exercises, toggle-off for
//! the reminder).

pub mod breathing;
pub mod eye_reminder;
pub mod yoga;

pub use breathing::BreathingAction;
pub use eye_reminder::EyeReminderAction;
pub use yoga::YogaAction;

use std::future::Future;

use restdeck_domain::error::{ActionNotFoundError, RestDeckError};
use restdeck_domain::run_state::RunState;

use crate::ports::{EventPublisher, Notifier, Timer};

/// Notification title used for device-level messages.
pub const DEVICE_TITLE: &str = "MX Master 4";

/// Terminal event broadcast when a sequence (or a segment of one) completes.
pub const COMPLETED_EVENT: &str = "completed";

/// Host-facing surface every action exposes.
pub trait Action {
    /// Stable identifier the host uses to address this action.
    fn id(&self) -> &'static str;

    /// Short human-readable description of what the action does.
    fn description(&self) -> &'static str;

    /// Label the host should currently render; may depend on run state.
    fn display_name(&self) -> String;

    /// Current run state of this instance.
    fn run_state(&self) -> RunState;

    /// Handle one user activation.
    fn trigger(&self) -> impl Future<Output = ()> + Send;
}

/// Registry entry describing one action to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionInfo {
    /// Stable identifier.
    pub id: &'static str,
    /// Current label to render.
    pub display_name: String,
    /// Short description.
    pub description: &'static str,
}

/// Owns the action instances and dispatches host calls by action id.
///
/// The registry holds the only reference to each instance, giving the
/// per-action run state a well-defined lifecycle: created here, dropped
/// when the registry is dropped.
pub struct ActionRegistry<N, P, T> {
    breathing: BreathingAction<N, P, T>,
    eye_reminder: EyeReminderAction<N, P, T>,
    yoga: YogaAction<N, P, T>,
}

impl<N, P, T> ActionRegistry<N, P, T>
where
    N: Notifier + Clone + Send + Sync,
    P: EventPublisher + Clone + Send + Sync,
    T: Timer + Clone + Send + Sync,
{
    /// Build the registry, wiring every action to the given ports.
    pub fn new(notifier: N, publisher: P, timer: T) -> Self {
        Self {
            breathing: BreathingAction::new(notifier.clone(), publisher.clone(), timer.clone()),
            eye_reminder: EyeReminderAction::new(
                notifier.clone(),
                publisher.clone(),
                timer.clone(),
            ),
            yoga: YogaAction::new(notifier, publisher, timer),
        }
    }

    /// Handle one user activation of the given action.
    ///
    /// Resolves when the triggered run ends (or immediately for a no-op or
    /// toggle-off trigger); hosts that must stay responsive spawn a task per
    /// activation.
    ///
    /// # Errors
    ///
    /// Returns [`RestDeckError::ActionNotFound`] for an unregistered id.
    pub async fn trigger(&self, action_id: &str) -> Result<(), RestDeckError> {
        match action_id {
            breathing::ID => self.breathing.trigger().await,
            eye_reminder::ID => self.eye_reminder.trigger().await,
            yoga::ID => self.yoga.trigger().await,
            _ => {
                return Err(ActionNotFoundError {
                    id: action_id.to_string(),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Label the host should render for the given action.
    ///
    /// # Errors
    ///
    /// Returns [`RestDeckError::ActionNotFound`] for an unregistered id.
    pub fn display_name(&self, action_id: &str) -> Result<String, RestDeckError> {
        match action_id {
            breathing::ID => Ok(self.breathing.display_name()),
            eye_reminder::ID => Ok(self.eye_reminder.display_name()),
            yoga::ID => Ok(self.yoga.display_name()),
            _ => Err(ActionNotFoundError {
                id: action_id.to_string(),
            }
            .into()),
        }
    }

    /// Describe every registered action, in a stable order.
    #[must_use]
    pub fn list(&self) -> Vec<ActionInfo> {
        [
            (
                self.breathing.id(),
                self.breathing.display_name(),
                self.breathing.description(),
            ),
            (
                self.eye_reminder.id(),
                self.eye_reminder.display_name(),
                self.eye_reminder.description(),
            ),
            (self.yoga.id(), self.yoga.display_name(), self.yoga.description()),
        ]
        .into_iter()
        .map(|(id, display_name, description)| ActionInfo {
            id,
            display_name,
            description,
        })
        .collect()
    }
}
