//! Run state — the per-action re-entrancy guard.
//!
//! Each action instance holds exactly one `RunState`. At most one sequence
//! execution per instance is in progress at any time; a trigger that arrives
//! while `Running` is either ignored (exercise actions) or toggles the running
//! loop off (reminder action).

use serde::{Deserialize, Serialize};

/// Whether an action instance currently has a sequence execution in progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    /// No execution in progress; a trigger starts one.
    #[default]
    Idle,
    /// An execution is in progress.
    Running,
}

impl RunState {
    /// Whether this state is [`RunState::Running`].
    #[must_use]
    pub fn is_running(self) -> bool {
        matches!(self, Self::Running)
    }
}

impl std::fmt::Display for RunState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Running => write!(f, "running"),
        }
    }
}
