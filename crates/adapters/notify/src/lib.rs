//! # restdeck-adapter-notify
//!
//! Notification adapter — implements the `Notifier` port by invoking the
//! platform's notification utility as a detached child process, so the toast
//! outlives the dispatch call and a sequence never waits on it.
//!
//! ## Failure policy
//! Best-effort only: a failed spawn is recorded in the diagnostic log and as
//! a `tracing` warning, then swallowed. The port surface is infallible — a
//! missed notification is silently absent, the running sequence continues.
//!
//! ## Dependency rule
//! Depends on `restdeck-app` (port traits) and `restdeck-domain` only.

mod config;
mod diag_log;
mod error;

pub use config::{NotifyConfig, default_program};
pub use diag_log::DiagnosticLog;
pub use error::NotifyError;

use std::future::Future;
use std::process::Stdio;

use tokio::process::Command;

use restdeck_app::ports::Notifier;

/// Notifier dispatching through the platform notification utility.
pub struct CommandNotifier {
    program: String,
    log: DiagnosticLog,
}

impl CommandNotifier {
    /// Build a notifier from the adapter configuration.
    #[must_use]
    pub fn new(config: &NotifyConfig) -> Self {
        Self {
            program: config.program.clone(),
            log: DiagnosticLog::new(&config.log_file),
        }
    }

    /// Assemble the platform invocation for one notification.
    fn command(&self, title: &str, message: &str) -> Command {
        let mut command = Command::new(&self.program);
        command
            .args(platform_args(title, message))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        command
    }
}

impl Notifier for CommandNotifier {
    fn notify(&self, title: &str, message: &str) -> impl Future<Output = ()> + Send {
        let mut command = self.command(title, message);
        let title = title.to_string();
        async move {
            self.log.append(&format!("preparing notification: {title}"));
            match command.spawn() {
                // The child is deliberately not awaited; it shows the toast
                // and exits on its own.
                Ok(_child) => {
                    tracing::debug!(%title, "notification dispatched");
                    self.log.append("notification command dispatched");
                }
                Err(source) => {
                    let err = NotifyError::Spawn {
                        program: self.program.clone(),
                        source,
                    };
                    tracing::warn!(%title, error = %err, "notification dispatch failed");
                    self.log.append(&format!("notification dispatch failed: {err}"));
                }
            }
        }
    }
}

/// Arguments for the Linux (and other unix) notification utility.
#[cfg(all(unix, not(target_os = "macos")))]
fn platform_args(title: &str, message: &str) -> Vec<String> {
    // notify-send takes title and body as plain arguments; the 5s expiry
    // matches the balloon timeout the device software used.
    vec![
        "--expire-time".to_string(),
        "5000".to_string(),
        title.to_string(),
        message.to_string(),
    ]
}

/// Arguments for the macOS notification utility.
#[cfg(target_os = "macos")]
fn platform_args(title: &str, message: &str) -> Vec<String> {
    let escape = |text: &str| text.replace('\\', "\\\\").replace('"', "\\\"");
    vec![
        "-e".to_string(),
        format!(
            "display notification \"{}\" with title \"{}\"",
            escape(message),
            escape(title)
        ),
    ]
}

/// Arguments for the Windows notification utility.
#[cfg(windows)]
fn platform_args(title: &str, message: &str) -> Vec<String> {
    let escape = |text: &str| text.replace('\'', "''");
    vec![
        "-NoProfile".to_string(),
        "-Command".to_string(),
        format!(
            "Add-Type -AssemblyName System.Windows.Forms; \
             $icon = New-Object System.Windows.Forms.NotifyIcon; \
             $icon.Icon = [System.Drawing.SystemIcons]::Information; \
             $icon.BalloonTipTitle = '{}'; \
             $icon.BalloonTipText = '{}'; \
             $icon.Visible = $true; \
             $icon.ShowBalloonTip(5000); \
             Start-Sleep -Seconds 5; \
             $icon.Dispose()",
            escape(title),
            escape(message)
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_log_path() -> std::path::PathBuf {
        std::env::temp_dir().join(format!("restdeck-notify-{}.log", uuid::Uuid::new_v4()))
    }

    #[tokio::test]
    async fn should_swallow_spawn_failure_and_log_it() {
        let path = temp_log_path();
        let config = NotifyConfig {
            program: "restdeck-test-missing-notifier".to_string(),
            log_file: path.clone(),
        };
        let notifier = CommandNotifier::new(&config);

        notifier.notify("MX Master 4", "Get ready").await;

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("preparing notification: MX Master 4"));
        assert!(content.contains("notification dispatch failed"));
        assert!(content.contains("restdeck-test-missing-notifier"));

        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn should_keep_notifying_after_a_failure() {
        let path = temp_log_path();
        let config = NotifyConfig {
            program: "restdeck-test-missing-notifier".to_string(),
            log_file: path.clone(),
        };
        let notifier = CommandNotifier::new(&config);

        notifier.notify("MX Master 4", "first").await;
        notifier.notify("Seated Twist", "second").await;

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("preparing notification: MX Master 4"));
        assert!(content.contains("preparing notification: Seated Twist"));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn should_pass_title_and_message_to_the_utility() {
        let args = platform_args("MX Master 4", "Pick up the mouse");
        let joined = args.join(" ");
        assert!(joined.contains("MX Master 4"));
        assert!(joined.contains("Pick up the mouse"));
    }
}
