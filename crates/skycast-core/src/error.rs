//! Application-level error type.
//!
//! Wraps the weather crate's fetch/parse errors and local failures, and
//! provides user-friendly messages suitable for display.

use thiserror::Error;

use skycast_weather::{NetworkError, ParseError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("network error: {0}")]
    Network(#[from] NetworkError),

    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// Returns a user-friendly message suitable for display.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Config(_) => "Invalid configuration. Check your settings.",
            AppError::Network(NetworkError::Timeout) => "The request timed out. Please try again.",
            AppError::Network(_) => {
                "Unable to reach the weather service. Check your internet connection."
            }
            AppError::Parse(_) => "Received an unexpected response. Please try again.",
            AppError::Io(_) => "A file operation failed. Please try again.",
            AppError::Other(_) => "An unexpected error occurred. Please try again.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_error_conversion() {
        let err: AppError = NetworkError::Timeout.into();
        assert!(matches!(err, AppError::Network(NetworkError::Timeout)));
    }

    #[test]
    fn test_user_message_for_timeout() {
        let err = AppError::Network(NetworkError::Timeout);
        assert_eq!(err.user_message(), "The request timed out. Please try again.");
    }

    #[test]
    fn test_user_message_for_config() {
        let err = AppError::Config("location: must not be empty".to_string());
        assert_eq!(err.user_message(), "Invalid configuration. Check your settings.");
    }
}
