//! Sequence — the fixed ordered script an action executes per trigger.
//!
//! A sequence is an immutable list of steps: notify the user, wait a fixed
//! duration, or broadcast a named feedback event. Sequences are defined
//! statically per action and never mutated after definition.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A single scripted step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Step {
    /// Request a transient user notification.
    Notify {
        /// Notification title.
        title: String,
        /// Notification body.
        message: String,
    },
    /// Wait for a fixed duration before continuing to the next step.
    Wait {
        /// Number of milliseconds to wait.
        millis: u64,
    },
    /// Broadcast a named feedback event to device listeners.
    Broadcast {
        /// Event name, e.g. `"breathe_state_change1"`.
        event: String,
    },
}

impl Step {
    /// Build a [`Step::Notify`].
    pub fn notify(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Notify {
            title: title.into(),
            message: message.into(),
        }
    }

    /// Build a [`Step::Wait`] of whole seconds.
    #[must_use]
    pub fn wait_secs(seconds: u64) -> Self {
        Self::Wait {
            millis: seconds * 1000,
        }
    }

    /// Build a [`Step::Wait`] of milliseconds.
    #[must_use]
    pub fn wait_millis(millis: u64) -> Self {
        Self::Wait { millis }
    }

    /// Build a [`Step::Broadcast`].
    pub fn broadcast(event: impl Into<String>) -> Self {
        Self::Broadcast {
            event: event.into(),
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Notify { title, .. } => write!(f, "notify({title})"),
            Self::Wait { millis } if millis % 1000 == 0 => write!(f, "wait({}s)", millis / 1000),
            Self::Wait { millis } => write!(f, "wait({millis}ms)"),
            Self::Broadcast { event } => write!(f, "broadcast({event})"),
        }
    }
}

/// An immutable ordered script of steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sequence {
    steps: Vec<Step>,
}

impl Sequence {
    /// Build a sequence from an ordered list of steps.
    #[must_use]
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    /// The steps, in execution order.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the sequence contains no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Sum of all [`Step::Wait`] durations.
    #[must_use]
    pub fn total_wait(&self) -> Duration {
        self.steps
            .iter()
            .map(|step| match step {
                Step::Wait { millis } => Duration::from_millis(*millis),
                Step::Notify { .. } | Step::Broadcast { .. } => Duration::ZERO,
            })
            .sum()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptySequence`] for a sequence with no steps,
    /// [`ValidationError::EmptyNotificationTitle`] for a notify step without a
    /// title, or [`ValidationError::EmptyEventName`] for a broadcast step
    /// without an event name.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.steps.is_empty() {
            return Err(ValidationError::EmptySequence);
        }
        for step in &self.steps {
            match step {
                Step::Notify { title, .. } if title.is_empty() => {
                    return Err(ValidationError::EmptyNotificationTitle);
                }
                Step::Broadcast { event } if event.is_empty() => {
                    return Err(ValidationError::EmptyEventName);
                }
                Step::Notify { .. } | Step::Wait { .. } | Step::Broadcast { .. } => {}
            }
        }
        Ok(())
    }
}
