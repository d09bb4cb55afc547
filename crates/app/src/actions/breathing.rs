//! Breathing exercise — a fixed five-repetition script of paced device cues.
//!
//! The device alternates between two visual/haptic states to pace the user's
//! breath: a long cue opens each half-cycle, four short cues mark the seconds
//! inside it. A repeat trigger while the exercise is running is a no-op.

use std::sync::Mutex;

use restdeck_domain::run_state::RunState;
use restdeck_domain::sequence::{Sequence, Step};

use crate::ports::{EventPublisher, Notifier, Timer};
use crate::runner::SequenceRunner;

use super::{Action, COMPLETED_EVENT, DEVICE_TITLE};

/// Stable identifier of the breathing exercise.
pub const ID: &str = "breathing";

/// Cue opening each half-cycle.
pub const STATE_ONE_EVENT: &str = "breathe_state_change1";
/// Cue pacing the seconds inside a half-cycle.
pub const STATE_TWO_EVENT: &str = "breathe_state_change2";

const REPETITIONS: usize = 5;

/// Guided breathing exercise action.
pub struct BreathingAction<N, P, T> {
    runner: SequenceRunner<N, P, T>,
    sequence: Sequence,
    state: Mutex<RunState>,
}

impl<N, P, T> BreathingAction<N, P, T>
where
    N: Notifier,
    P: EventPublisher,
    T: Timer,
{
    /// Create the action over the given ports.
    pub fn new(notifier: N, publisher: P, timer: T) -> Self {
        Self {
            runner: SequenceRunner::new(notifier, publisher, timer),
            sequence: script(),
            state: Mutex::new(RunState::Idle),
        }
    }
}

impl<N, P, T> BreathingAction<N, P, T> {
    /// Claim the run slot; `false` when a run is already active.
    fn begin(&self) -> bool {
        let mut state = self.state.lock().expect("run state lock poisoned");
        if state.is_running() {
            return false;
        }
        *state = RunState::Running;
        true
    }

    fn finish(&self) {
        *self.state.lock().expect("run state lock poisoned") = RunState::Idle;
    }
}

impl<N, P, T> Action for BreathingAction<N, P, T>
where
    N: Notifier + Send + Sync,
    P: EventPublisher + Send + Sync,
    T: Timer + Send + Sync,
{
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Guides you through a calming breathing exercise"
    }

    fn display_name(&self) -> String {
        "Breathwork".to_string()
    }

    fn run_state(&self) -> RunState {
        *self.state.lock().expect("run state lock poisoned")
    }

    async fn trigger(&self) {
        if !self.begin() {
            tracing::debug!(action = ID, "trigger ignored, a run is already active");
            return;
        }
        tracing::info!(action = ID, "starting breathing exercise");
        self.runner.run(&self.sequence).await;
        self.finish();
        tracing::info!(action = ID, "breathing exercise completed");
    }
}

/// The full breathing script: intro, five repetitions of two paced
/// half-cycles, terminal event, congratulations.
fn script() -> Sequence {
    let mut steps = vec![
        Step::notify(
            DEVICE_TITLE,
            "Pick up the mouse and hold it between your hands. \
             Breathe in and out on the vibration cues. (Start in 5s)",
        ),
        Step::wait_secs(5),
    ];
    for _ in 0..REPETITIONS {
        for _ in 0..2 {
            steps.push(Step::broadcast(STATE_ONE_EVENT));
            steps.push(Step::wait_secs(1));
            for _ in 0..4 {
                steps.push(Step::broadcast(STATE_TWO_EVENT));
                steps.push(Step::wait_secs(1));
            }
        }
    }
    steps.push(Step::broadcast(COMPLETED_EVENT));
    steps.push(Step::notify(
        DEVICE_TITLE,
        "Congratulations on completing your breathing exercise :)",
    ));
    Sequence::new(steps)
}
