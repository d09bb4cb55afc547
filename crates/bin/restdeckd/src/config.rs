//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `restdeck.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use serde::Deserialize;

use restdeck_adapter_notify::NotifyConfig;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Event bus settings.
    pub bus: BusConfig,
    /// Notification settings.
    pub notifier: NotifyConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// In-process event bus configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct BusConfig {
    /// Broadcast channel capacity.
    pub capacity: usize,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `restdeck.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if
    /// the result fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("restdeck.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("RESTDECK_NOTIFY_PROGRAM") {
            self.notifier.program = val;
        }
        if let Ok(val) = std::env::var("RESTDECK_NOTIFY_LOG_FILE") {
            self.notifier.log_file = val.into();
        }
        if let Ok(val) = std::env::var("RESTDECK_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.bus.capacity == 0 {
            return Err(ConfigError::Validation(
                "bus capacity must be non-zero".to_string(),
            ));
        }
        if self.notifier.program.is_empty() {
            return Err(ConfigError::Validation(
                "notifier program must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for BusConfig {
    fn default() -> Self {
        Self { capacity: 256 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "restdeckd=info,restdeck=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.bus.capacity, 256);
        assert_eq!(config.logging.filter, "restdeckd=info,restdeck=info");
        assert_eq!(config.notifier.log_file, PathBuf::from("restdeck.log"));
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.bus.capacity, 256);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [bus]
            capacity = 16

            [notifier]
            program = 'my-notifier'
            log_file = '/tmp/restdeck-diag.log'

            [logging]
            filter = 'debug'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.bus.capacity, 16);
        assert_eq!(config.notifier.program, "my-notifier");
        assert_eq!(config.notifier.log_file, PathBuf::from("/tmp/restdeck-diag.log"));
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [logging]
            filter = 'trace'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.logging.filter, "trace");
        assert_eq!(config.bus.capacity, 256);
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.bus.capacity, 256);
    }

    #[test]
    fn should_reject_zero_bus_capacity() {
        let mut config = Config::default();
        config.bus.capacity = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_empty_notifier_program() {
        let mut config = Config::default();
        config.notifier.program = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_accept_defaults_as_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }
}
