//! Error types for the CLI

use pocket_calc::config::ConfigError;
use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// A token that is neither a key name nor made of key characters
    #[error("Unknown key: {key:?}")]
    UnknownKey {
        /// The offending key
        key: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing output failed
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Create an unknown key error
    #[must_use]
    pub fn unknown_key(key: impl Into<String>) -> Self {
        Self::UnknownKey { key: key.into() }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_key_error() {
        let err = CliError::unknown_key("q");
        assert_eq!(err.to_string(), "Unknown key: \"q\"");
    }

    #[test]
    fn test_config_error_from() {
        let err: CliError = ConfigError::invalid("bad separator").into();
        assert!(err.to_string().contains("Configuration"));
        assert!(err.to_string().contains("bad separator"));
    }

    #[test]
    fn test_io_error_from() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let cli_err: CliError = io_err.into();
        assert!(cli_err.to_string().contains("I/O"));
    }

    #[test]
    fn test_json_error_from() {
        let json_err = serde_json::from_str::<u8>("x").unwrap_err();
        let cli_err: CliError = json_err.into();
        assert!(cli_err.to_string().starts_with("Serialization error"));
    }
}
