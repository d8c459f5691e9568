//! Error types shared across the workspace.
//!
//! The `QuoteError` enum unifies the failure cases of the quote source, the
//! favorites storage and the terminal front end, allowing crates to propagate a
//! single error type.
use std::io;

use thiserror::Error;

/// Unified error type shared by the quote browser crates.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// The remote quote API answered with a non-success status.
    #[error("Failed to fetch quotes")]
    FetchFailed,

    /// The HTTP request could not be completed (connection, TLS, body read).
    #[error("HTTP request error: {0}")]
    Request(#[from] reqwest::Error),

    /// The response body is not a valid quotes payload.
    #[error("Failed to decode quotes response: {0}")]
    Decode(String),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error originating from the standard library or files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A command typed into the terminal front end could not be understood.
    #[error("Invalid command: {0}")]
    InvalidCommand(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_failed_carries_no_detail() {
        assert_eq!(QuoteError::FetchFailed.to_string(), "Failed to fetch quotes");
    }

    #[test]
    fn test_json_error_converts() {
        let err: QuoteError = serde_json::from_str::<Vec<u64>>("[1,").unwrap_err().into();
        assert!(matches!(err, QuoteError::Json(_)));
    }
}
