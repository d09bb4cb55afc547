//! Eye-protection reminder — periodic look-away cues until toggled off.
//!
//! The first trigger announces the reminder pattern and starts a periodic
//! loop; a second trigger toggles the loop off. The toggle flips the label
//! immediately and cancels the loop mid-wait, so disabling does not linger
//! for the remainder of the (up to 81 s) cycle.

use std::sync::Mutex;

use tokio::sync::watch;

use restdeck_domain::run_state::RunState;
use restdeck_domain::sequence::{Sequence, Step};

use crate::ports::{EventPublisher, Notifier, Timer};
use crate::runner::{Outcome, SequenceRunner};

use super::{Action, DEVICE_TITLE};

/// Stable identifier of the eye-protection reminder.
pub const ID: &str = "eye_reminder";

/// Feedback cue driving the reminder vibration pattern.
pub const REMINDER_EVENT: &str = "eye_protection_reminder";

/// Run state plus, while running, the handle that cancels the loop.
enum ReminderState {
    Idle,
    Running { cancel: watch::Sender<bool> },
}

impl ReminderState {
    fn run_state(&self) -> RunState {
        match self {
            Self::Idle => RunState::Idle,
            Self::Running { .. } => RunState::Running,
        }
    }
}

/// Toggleable look-away reminder action.
pub struct EyeReminderAction<N, P, T> {
    runner: SequenceRunner<N, P, T>,
    prelude: Sequence,
    cycle: Sequence,
    state: Mutex<ReminderState>,
}

impl<N, P, T> EyeReminderAction<N, P, T>
where
    N: Notifier,
    P: EventPublisher,
    T: Timer,
{
    /// Create the action over the given ports.
    pub fn new(notifier: N, publisher: P, timer: T) -> Self {
        Self {
            runner: SequenceRunner::new(notifier, publisher, timer),
            prelude: prelude(),
            cycle: cycle(),
            state: Mutex::new(ReminderState::Idle),
        }
    }
}

impl<N, P, T> Action for EyeReminderAction<N, P, T>
where
    N: Notifier + Send + Sync,
    P: EventPublisher + Send + Sync,
    T: Timer + Send + Sync,
{
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Gives you gentle reminders to look away from your screen"
    }

    fn display_name(&self) -> String {
        if self.run_state().is_running() {
            "Disable Vision Guard".to_string()
        } else {
            "Vision Guard".to_string()
        }
    }

    fn run_state(&self) -> RunState {
        self.state
            .lock()
            .expect("run state lock poisoned")
            .run_state()
    }

    async fn trigger(&self) {
        let cancel_rx = {
            let mut state = self.state.lock().expect("run state lock poisoned");
            match std::mem::replace(&mut *state, ReminderState::Idle) {
                ReminderState::Running { cancel } => {
                    // Toggle off: the label flips right here; the running
                    // loop observes the signal mid-wait and stops.
                    let _ = cancel.send(true);
                    tracing::info!(action = ID, "reminders disabled");
                    return;
                }
                ReminderState::Idle => {
                    let (tx, rx) = watch::channel(false);
                    *state = ReminderState::Running { cancel: tx };
                    rx
                }
            }
        };

        tracing::info!(action = ID, "reminders enabled");
        if self.runner.run_with_cancel(&self.prelude, cancel_rx.clone()).await
            == Outcome::Cancelled
        {
            return;
        }
        while self.runner.run_with_cancel(&self.cycle, cancel_rx.clone()).await
            == Outcome::Completed
        {}
        // The toggling trigger already reset the state under the lock.
    }
}

/// One-time announcement of the reminder vibration pattern.
fn prelude() -> Sequence {
    Sequence::new(vec![
        Step::notify(
            DEVICE_TITLE,
            "Your mouse will remind you with this vibration pattern \
             and vibrate again after 20 seconds",
        ),
        Step::broadcast(REMINDER_EVENT),
        Step::wait_secs(1),
        Step::broadcast(REMINDER_EVENT),
    ])
}

/// One period of the reminder loop: look away, then look back.
fn cycle() -> Sequence {
    Sequence::new(vec![
        Step::wait_secs(60),
        Step::broadcast(REMINDER_EVENT),
        Step::wait_secs(1),
        Step::broadcast(REMINDER_EVENT),
        Step::wait_secs(20),
        Step::broadcast(REMINDER_EVENT),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{GateTimer, SpyNotifier, SpyPublisher, poll_until};
    use std::sync::Arc;
    use std::time::Duration;

    type TestAction = EyeReminderAction<Arc<SpyNotifier>, Arc<SpyPublisher>, Arc<GateTimer>>;

    fn make_action() -> (TestAction, Arc<SpyNotifier>, Arc<SpyPublisher>, Arc<GateTimer>) {
        let notifier = Arc::new(SpyNotifier::default());
        let publisher = Arc::new(SpyPublisher::default());
        let timer = Arc::new(GateTimer::default());
        let action = EyeReminderAction::new(
            Arc::clone(&notifier),
            Arc::clone(&publisher),
            Arc::clone(&timer),
        );
        (action, notifier, publisher, timer)
    }

    #[test]
    fn should_define_valid_scripts() {
        assert_eq!(prelude().validate(), Ok(()));
        assert_eq!(cycle().validate(), Ok(()));
    }

    #[test]
    fn should_script_an_81_second_cycle() {
        assert_eq!(cycle().total_wait(), Duration::from_secs(81));
        assert_eq!(prelude().total_wait(), Duration::from_secs(1));
    }

    #[tokio::test]
    async fn should_toggle_off_without_starting_a_second_loop() {
        let (action, notifier, publisher, timer) = make_action();

        let first = action.trigger();
        tokio::pin!(first);
        // Drive the run into the prelude's 1s wait.
        poll_until(first.as_mut(), 16, || !timer.requests().is_empty()).await;

        assert_eq!(action.run_state(), RunState::Running);
        assert_eq!(action.display_name(), "Disable Vision Guard");
        assert_eq!(publisher.names().len(), 1);

        // Second press: toggles off immediately.
        action.trigger().await;
        assert_eq!(action.run_state(), RunState::Idle);
        assert_eq!(action.display_name(), "Vision Guard");

        // The parked run observes the cancel mid-wait and stops; no cue is
        // broadcast and no further wait is requested.
        first.await;
        assert_eq!(publisher.names().len(), 1);
        assert_eq!(timer.requests().len(), 1);
        assert_eq!(notifier.calls().len(), 1);
    }

    #[tokio::test]
    async fn should_repeat_the_cycle_until_cancelled() {
        let (action, notifier, publisher, timer) = make_action();

        let first = action.trigger();
        tokio::pin!(first);

        // Let the prelude and one full cycle elapse: four waits in total.
        timer.release(4);
        poll_until(first.as_mut(), 64, || publisher.names().len() == 5).await;

        assert_eq!(
            timer.requests(),
            vec![
                Duration::from_secs(1),
                Duration::from_secs(60),
                Duration::from_secs(1),
                Duration::from_secs(20),
                Duration::from_secs(60),
            ]
        );
        assert_eq!(notifier.calls().len(), 1);
        assert_eq!(action.run_state(), RunState::Running);

        // Toggle off while parked in the second cycle's opening wait.
        action.trigger().await;
        first.await;

        assert_eq!(publisher.names().len(), 5);
        assert_eq!(action.run_state(), RunState::Idle);
    }

    #[tokio::test]
    async fn should_restart_after_a_completed_toggle_cycle() {
        let (action, _, publisher, timer) = make_action();

        let first = action.trigger();
        tokio::pin!(first);
        poll_until(first.as_mut(), 16, || !timer.requests().is_empty()).await;
        action.trigger().await;
        first.await;

        // A fresh trigger after toggling off starts a new run.
        let second = action.trigger();
        tokio::pin!(second);
        poll_until(second.as_mut(), 16, || timer.requests().len() == 2).await;

        assert_eq!(action.run_state(), RunState::Running);
        assert_eq!(publisher.names().len(), 2);

        action.trigger().await;
        second.await;
        assert_eq!(action.run_state(), RunState::Idle);
    }
}
