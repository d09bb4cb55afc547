//! Notification adapter error types.
//!
//! Only one failure kind is modelled: the platform notification utility could
//! not be invoked. It is caught at the dispatch site, recorded in the
//! diagnostic log, and swallowed — never surfaced to the caller.

/// Errors specific to the notification adapter.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    /// The notification utility could not be spawned.
    #[error("failed to spawn notification utility {program:?}")]
    Spawn {
        /// The program that was invoked.
        program: String,
        /// The underlying OS error.
        #[source]
        source: std::io::Error,
    },
}
