//! Error types for building and sending summarization requests.

use thiserror::Error;

/// The text to summarize was empty after trimming surrounding whitespace.
///
/// Raised before any network call is attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no text to summarize")]
pub struct EmptyInput;

/// Errors that can occur while talking to the summarization endpoint.
#[derive(Debug, Error)]
pub enum SummarizeError {
    /// Endpoint was reachable and reported a failure in its payload.
    #[error("endpoint reported an error (status {status}): {message}")]
    Application { status: u16, message: String },

    /// Request exceeded the configured total timeout.
    #[error("request timed out after {seconds}s")]
    Timeout { seconds: u64 },

    /// Connection, DNS, TLS or body read failure.
    #[error("transport error: {0}")]
    Transport(reqwest::Error),

    /// Body could not be interpreted as a summary response.
    #[error("malformed response (status {status}): {reason}")]
    MalformedResponse { status: u16, reason: String },
}

impl SummarizeError {
    /// Short machine-readable classification for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            SummarizeError::Application { .. } => "application",
            SummarizeError::Timeout { .. } => "timeout",
            SummarizeError::Transport(_) => "transport",
            SummarizeError::MalformedResponse { .. } => "malformed_response",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn application_error_message_includes_status() {
        let err = SummarizeError::Application {
            status: 422,
            message: "bad input".into(),
        };
        assert_eq!(
            err.to_string(),
            "endpoint reported an error (status 422): bad input"
        );
        assert_eq!(err.kind(), "application");
    }

    #[test]
    fn timeout_kind() {
        let err = SummarizeError::Timeout { seconds: 30 };
        assert_eq!(err.kind(), "timeout");
        assert_eq!(err.to_string(), "request timed out after 30s");
    }
}
