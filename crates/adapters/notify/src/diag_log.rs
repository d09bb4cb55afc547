//! Append-only diagnostic log.
//!
//! Free-form text sink for notification dispatch diagnostics, one line per
//! entry: `"<timestamp>: <message>\n"`. Write failures are silently ignored —
//! the log must never take a sequence down with it.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use restdeck_domain::time::now;

/// Append-only text diagnostic sink.
#[derive(Debug, Clone)]
pub struct DiagnosticLog {
    path: PathBuf,
}

impl DiagnosticLog {
    /// Create a log writing to the given path. The file is created on first
    /// append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Append one timestamped line. Failures are ignored.
    pub fn append(&self, message: &str) {
        let line = format!("{}: {message}\n", now().format("%Y-%m-%d %H:%M:%S"));
        let _ = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut file| file.write_all(line.as_bytes()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_log_path() -> PathBuf {
        std::env::temp_dir().join(format!("restdeck-diag-{}.log", uuid::Uuid::new_v4()))
    }

    #[test]
    fn should_append_timestamped_lines_in_order() {
        let path = temp_log_path();
        let log = DiagnosticLog::new(&path);

        log.append("preparing notification: MX Master 4");
        log.append("notification command dispatched");

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(": preparing notification: MX Master 4"));
        assert!(lines[1].ends_with(": notification command dispatched"));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn should_ignore_write_failures() {
        let log = DiagnosticLog::new("/nonexistent-restdeck-dir/diag.log");
        log.append("this line has nowhere to go");
    }
}
