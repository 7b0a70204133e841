//! Error types for the fetch and parse boundaries.

use thiserror::Error;

/// Errors from the HTTP boundary.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    #[error("request timed out")]
    Timeout,

    #[error("server returned {status}: {message}")]
    ServerError { status: u16, message: String },
}

impl From<reqwest::Error> for NetworkError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            NetworkError::Timeout
        } else if let Some(status) = err.status() {
            NetworkError::ServerError {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            NetworkError::ConnectionFailed(err.to_string())
        }
    }
}

/// Errors from forecast-payload parsing.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The payload is not the expected JSON shape: the daily list is
    /// absent or an entry is missing required numeric fields.
    #[error("malformed forecast payload: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A daily entry carried no condition tag at all.
    #[error("daily entry {index} has an empty weather list")]
    MissingCondition { index: usize },
}
