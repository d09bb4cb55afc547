//! Notification adapter configuration.

use std::path::PathBuf;

use serde::Deserialize;

/// Configuration for the notification adapter.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NotifyConfig {
    /// Notification utility to invoke. Defaults to the platform's own
    /// (`notify-send`, `osascript`, or `powershell.exe`).
    pub program: String,
    /// Path of the append-only diagnostic log.
    pub log_file: PathBuf,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            program: default_program().to_string(),
            log_file: PathBuf::from("restdeck.log"),
        }
    }
}

/// The platform's notification utility.
#[must_use]
pub fn default_program() -> &'static str {
    if cfg!(target_os = "macos") {
        "osascript"
    } else if cfg!(target_os = "windows") {
        "powershell.exe"
    } else {
        "notify-send"
    }
}
