//! Config loading from file and environment variables.

use std::fs;
use std::path::Path;

use super::model::{ConfigError, PresenterConfig};

impl PresenterConfig {
    /// Load configuration.
    /// Priority: environment variables > config file > defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = std::env::var("LOGDECK_CONFIG_FILE")
            .unwrap_or_else(|_| "/etc/logdeck/config.toml".to_string());

        let mut config = if Path::new(&config_path).exists() {
            tracing::info!("loading configuration from {}", config_path);
            Self::from_file(&config_path)?
        } else {
            tracing::info!("config file not found at {}, using defaults", config_path);
            Self::default()
        };

        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: PresenterConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Environment variables override whatever the file provided.
    fn apply_env(&mut self) {
        if let Ok(format) = std::env::var("LOGDECK_TIMESTAMP_FORMAT") {
            self.timestamp_format = format;
        }
        if let Ok(label) = std::env::var("LOGDECK_UNKNOWN_TIME_LABEL") {
            self.unknown_time_label = label;
        }
        if let Ok(suffix) = std::env::var("LOGDECK_FUNCTION_SUFFIX") {
            self.function_suffix = suffix;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_toml_round_trip() {
        let toml_text = r#"
timestamp_format = "%Y-%m-%d %H:%M"
unknown_time_label = "no timestamp"
function_suffix = ".fn"
"#;
        let config: PresenterConfig = toml::from_str(toml_text).unwrap();
        assert_eq!(config.timestamp_format, "%Y-%m-%d %H:%M");
        assert_eq!(config.unknown_time_label, "no timestamp");
        assert_eq!(config.function_suffix, ".fn");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = PresenterConfig::from_file("/nonexistent/logdeck.toml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_bad_toml_is_parse_error() {
        let result: Result<PresenterConfig, _> = toml::from_str("timestamp_format = [1, 2]");
        assert!(result.is_err());
    }
}
