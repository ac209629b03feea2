//! PresenterConfig model and validation.

use chrono::TimeZone;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%d.%m.%Y - %H:%M:%S";
pub const DEFAULT_UNKNOWN_TIME_LABEL: &str = "unknown time";
pub const DEFAULT_FUNCTION_SUFFIX: &str = ".lambda";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Presentation options. Classification rules are not configurable;
/// classifying a line stays a pure function of its text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresenterConfig {
    /// chrono format string for timestamp group keys.
    pub timestamp_format: String,

    /// Group key for records with a missing or unusable date.
    pub unknown_time_label: String,

    /// Suffix appended to extension-less source names to mark function units.
    pub function_suffix: String,
}

impl Default for PresenterConfig {
    fn default() -> Self {
        Self {
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            unknown_time_label: DEFAULT_UNKNOWN_TIME_LABEL.to_string(),
            function_suffix: DEFAULT_FUNCTION_SUFFIX.to_string(),
        }
    }
}

impl PresenterConfig {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timestamp_format.is_empty() {
            return Err(ConfigError::Invalid(
                "timestamp_format must not be empty".to_string(),
            ));
        }

        // Render a probe date so a bad chrono format fails at load time
        // instead of degrading every timestamp key at runtime.
        if let Some(probe) = chrono::Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).single() {
            use std::fmt::Write;
            let mut rendered = String::new();
            if write!(rendered, "{}", probe.format(&self.timestamp_format)).is_err() {
                return Err(ConfigError::Invalid(format!(
                    "timestamp_format {:?} is not a valid chrono format string",
                    self.timestamp_format
                )));
            }
        }

        if self.unknown_time_label.is_empty() {
            return Err(ConfigError::Invalid(
                "unknown_time_label must not be empty".to_string(),
            ));
        }
        if !self.function_suffix.starts_with('.') {
            return Err(ConfigError::Invalid(
                "function_suffix must start with '.'".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = PresenterConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.timestamp_format, "%d.%m.%Y - %H:%M:%S");
        assert_eq!(config.unknown_time_label, "unknown time");
        assert_eq!(config.function_suffix, ".lambda");
    }

    #[test]
    fn test_empty_timestamp_format_rejected() {
        let config = PresenterConfig {
            timestamp_format: String::new(),
            ..PresenterConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_bad_chrono_format_rejected() {
        let config = PresenterConfig {
            timestamp_format: "%Q".to_string(),
            ..PresenterConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_suffix_without_dot_rejected() {
        let config = PresenterConfig {
            function_suffix: "lambda".to_string(),
            ..PresenterConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: PresenterConfig =
            toml::from_str("timestamp_format = \"%H:%M:%S\"").unwrap();
        assert_eq!(config.timestamp_format, "%H:%M:%S");
        assert_eq!(config.unknown_time_label, DEFAULT_UNKNOWN_TIME_LABEL);
        assert_eq!(config.function_suffix, DEFAULT_FUNCTION_SUFFIX);
    }
}
