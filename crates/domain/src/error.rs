//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`RestDeckError`]
//! via `#[from]` (no `String` variants).

/// Umbrella error for the restdeck workspace.
#[derive(Debug, thiserror::Error)]
pub enum RestDeckError {
    /// A domain invariant was violated.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The requested action id is not registered.
    #[error("action not found")]
    ActionNotFound(#[from] ActionNotFoundError),

    /// An adapter failed to dispatch something to the outside world.
    #[error("dispatch error")]
    Dispatch(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Violation of a domain invariant.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A sequence must contain at least one step.
    #[error("sequence must contain at least one step")]
    EmptySequence,

    /// A notification step must carry a non-empty title.
    #[error("notification title must not be empty")]
    EmptyNotificationTitle,

    /// A broadcast step must carry a non-empty event name.
    #[error("broadcast event name must not be empty")]
    EmptyEventName,
}

/// Lookup of an unregistered action id.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("no action registered with id {id:?}")]
pub struct ActionNotFoundError {
    /// The id that was requested.
    pub id: String,
}
