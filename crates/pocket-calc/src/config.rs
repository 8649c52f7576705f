//! Presentation configuration
//!
//! These settings only affect how the engine's output is shown: press
//! feedback, the timed error flash and thousands grouping. Engine semantics
//! are not configurable.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is not valid JSON for [`CalculatorConfig`]
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Configuration parsed but holds an unusable value
    #[error("Invalid configuration: {message}")]
    Invalid {
        /// Error message
        message: String,
    },
}

impl ConfigError {
    /// Create an invalid-value error
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }
}

/// Calculator presentation configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// How long a pressed button keeps its press animation, in milliseconds
    pub press_feedback_ms: u64,
    /// Delay before the error display clears itself (`None` disables)
    pub error_auto_clear_ms: Option<u64>,
    /// Thousands separator (`None` disables grouping)
    pub group_separator: Option<char>,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            press_feedback_ms: Self::DEFAULT_PRESS_FEEDBACK_MS,
            error_auto_clear_ms: Some(Self::DEFAULT_ERROR_AUTO_CLEAR_MS),
            group_separator: Some(','),
        }
    }
}

impl CalculatorConfig {
    /// Default press animation length
    pub const DEFAULT_PRESS_FEEDBACK_MS: u64 = 200;
    /// Default error flash length
    pub const DEFAULT_ERROR_AUTO_CLEAR_MS: u64 = 2000;

    /// Create the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the press animation length
    #[must_use]
    pub const fn with_press_feedback_ms(mut self, ms: u64) -> Self {
        self.press_feedback_ms = ms;
        self
    }

    /// Set or disable the error auto-clear delay
    #[must_use]
    pub const fn with_error_auto_clear_ms(mut self, ms: Option<u64>) -> Self {
        self.error_auto_clear_ms = ms;
        self
    }

    /// Set or disable the thousands separator
    #[must_use]
    pub const fn with_group_separator(mut self, separator: Option<char>) -> Self {
        self.group_separator = separator;
        self
    }

    /// Parse and validate a JSON configuration
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Check that the separator cannot be confused with numeral characters
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(sep) = self.group_separator {
            if sep.is_ascii_digit() || sep == '.' || sep == '-' {
                return Err(ConfigError::invalid(format!(
                    "group separator {sep:?} conflicts with numerals"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = CalculatorConfig::default();
        assert_eq!(config.press_feedback_ms, 200);
        assert_eq!(config.error_auto_clear_ms, Some(2000));
        assert_eq!(config.group_separator, Some(','));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_methods() {
        let config = CalculatorConfig::new()
            .with_press_feedback_ms(50)
            .with_error_auto_clear_ms(None)
            .with_group_separator(Some(' '));
        assert_eq!(config.press_feedback_ms, 50);
        assert_eq!(config.error_auto_clear_ms, None);
        assert_eq!(config.group_separator, Some(' '));
    }

    #[test]
    fn test_from_json_partial_uses_defaults() {
        let config = CalculatorConfig::from_json_str(r#"{"press_feedback_ms": 120}"#).unwrap();
        assert_eq!(config.press_feedback_ms, 120);
        assert_eq!(config.error_auto_clear_ms, Some(2000));
    }

    #[test]
    fn test_from_json_null_disables() {
        let config = CalculatorConfig::from_json_str(
            r#"{"error_auto_clear_ms": null, "group_separator": null}"#,
        )
        .unwrap();
        assert_eq!(config.error_auto_clear_ms, None);
        assert_eq!(config.group_separator, None);
    }

    #[test]
    fn test_from_json_malformed() {
        let err = CalculatorConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_invalid_separator_rejected() {
        let err = CalculatorConfig::from_json_str(r#"{"group_separator": "."}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
        assert!(err.to_string().contains("conflicts"));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"group_separator": "_"}}"#).unwrap();
        let config = CalculatorConfig::from_path(file.path()).unwrap();
        assert_eq!(config.group_separator, Some('_'));
    }

    #[test]
    fn test_from_missing_path() {
        let err = CalculatorConfig::from_path("/nonexistent/pocket-calc.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_serde_roundtrip_default() {
        let json = serde_json::to_string(&CalculatorConfig::default()).unwrap();
        let back: CalculatorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, CalculatorConfig::default());
    }
}
