//! Yoga session — five desk-friendly poses, each announced and timed.
//!
//! Every pose is a notification followed by a hold period and a `completed`
//! cue on the device. A repeat trigger while the session is running is a
//! no-op.

use std::sync::Mutex;

use restdeck_domain::run_state::RunState;
use restdeck_domain::sequence::{Sequence, Step};

use crate::ports::{EventPublisher, Notifier, Timer};
use crate::runner::SequenceRunner;

use super::{Action, COMPLETED_EVENT, DEVICE_TITLE};

/// Stable identifier of the yoga session.
pub const ID: &str = "yoga";

/// Pose announcements and hold durations, in session order.
const POSES: [(&str, &str, u64); 5] = [
    (
        "Seated Twist",
        "Sit back in your chair. As you inhale, lift your arms over your head \
         and as you exhale, twist to your right, placing both hands on the \
         right armrest for support.",
        60,
    ),
    (
        "Seated Twist",
        "Now, lift your arms over your head and as you exhale, twist to your \
         left, placing both hands on the left armrest for support.",
        60,
    ),
    (
        "Shoulder Rolls",
        "As you inhale, draw your shoulders up toward your ears and bring them \
         back down. Then, on the exhale, move them down and forward. Repeat \
         this motion two more times in the same direction, then reverse it.",
        20,
    ),
    (
        "Seated Crescent Moon Pose",
        "Sitting in your desk chair, lift your arms over your head, and place \
         your palms together. Lean to the right, and hold this pose for 15 \
         seconds.",
        15,
    ),
    (
        "Seated Crescent Moon Pose",
        "Repeat for the left side now.",
        15,
    ),
];

/// Guided yoga session action.
pub struct YogaAction<N, P, T> {
    runner: SequenceRunner<N, P, T>,
    sequence: Sequence,
    state: Mutex<RunState>,
}

impl<N, P, T> YogaAction<N, P, T>
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

impl<N, P, T> YogaAction<N, P, T> {
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

impl<N, P, T> Action for YogaAction<N, P, T>
where
    N: Notifier + Send + Sync,
    P: EventPublisher + Send + Sync,
    T: Timer + Send + Sync,
{
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Guides you through a refreshing yoga session"
    }

    fn display_name(&self) -> String {
        "Yoga Training".to_string()
    }

    fn run_state(&self) -> RunState {
        *self.state.lock().expect("run state lock poisoned")
    }

    async fn trigger(&self) {
        if !self.begin() {
            tracing::debug!(action = ID, "trigger ignored, a run is already active");
            return;
        }
        tracing::info!(action = ID, "starting yoga session");
        self.runner.run(&self.sequence).await;
        self.finish();
        tracing::info!(action = ID, "yoga session completed");
    }
}

/// The full session script: intro, five announced and timed poses, each
/// ending in a `completed` cue, then congratulations.
fn script() -> Sequence {
    let mut steps = vec![
        Step::notify(DEVICE_TITLE, "Pick up the mouse and hold it between your hands."),
        Step::wait_secs(1),
    ];
    for (title, message, hold_secs) in POSES {
        steps.push(Step::notify(title, message));
        steps.push(Step::wait_secs(hold_secs));
        steps.push(Step::broadcast(COMPLETED_EVENT));
    }
    steps.push(Step::notify(
        DEVICE_TITLE,
        "Congratulations on completing your quick yoga session :)",
    ));
    Sequence::new(steps)
}
