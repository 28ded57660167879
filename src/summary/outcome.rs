//! Terminal outcomes of a summarization request and the messages shown for them.

use super::error::SummarizeError;

/// Shown when submit is attempted with blank input.
pub const PROMPT_MESSAGE: &str = "Please enter some text.";

/// Shown while a request is in flight.
pub const BUSY_MESSAGE: &str = "Summarizing...";

/// Shown when the endpoint could not be reached or answered garbage.
pub const FAILURE_MESSAGE: &str = "Failed to fetch summary. Please try again.";

/// Prefix for errors reported by the endpoint.
pub const ERROR_PREFIX: &str = "Error: ";

/// Used when the endpoint reports a failure without an `error` field.
pub const UNKNOWN_ERROR: &str = "unknown error";

/// Result of one summarization request, as seen by the presenter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryOutcome {
    Summarized(String),
    ServerError(String),
    TransportFailure,
}

impl SummaryOutcome {
    /// Message to display for this outcome.
    pub fn message(&self) -> String {
        match self {
            SummaryOutcome::Summarized(summary) => summary.clone(),
            SummaryOutcome::ServerError(message) => format!("{}{}", ERROR_PREFIX, message),
            SummaryOutcome::TransportFailure => FAILURE_MESSAGE.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SummaryOutcome::Summarized(_))
    }
}

impl From<Result<String, SummarizeError>> for SummaryOutcome {
    fn from(result: Result<String, SummarizeError>) -> Self {
        match result {
            Ok(summary) => SummaryOutcome::Summarized(summary),
            Err(SummarizeError::Application { message, .. }) => {
                SummaryOutcome::ServerError(message)
            }
            Err(
                SummarizeError::Timeout { .. }
                | SummarizeError::Transport(_)
                | SummarizeError::MalformedResponse { .. },
            ) => SummaryOutcome::TransportFailure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_is_displayed_verbatim() {
        let outcome = SummaryOutcome::Summarized("A fox runs.".into());
        assert_eq!(outcome.message(), "A fox runs.");
        assert!(outcome.is_success());
    }

    #[test]
    fn server_error_gets_prefix() {
        let outcome = SummaryOutcome::ServerError("bad input".into());
        assert_eq!(outcome.message(), "Error: bad input");
        assert!(!outcome.is_success());
    }

    #[test]
    fn transport_failure_has_fixed_message() {
        assert_eq!(
            SummaryOutcome::TransportFailure.message(),
            "Failed to fetch summary. Please try again."
        );
    }

    #[test]
    fn errors_map_to_outcomes() {
        let app: SummaryOutcome = Err(SummarizeError::Application {
            status: 500,
            message: "boom".into(),
        })
        .into();
        assert_eq!(app, SummaryOutcome::ServerError("boom".into()));

        let timeout: SummaryOutcome = Err(SummarizeError::Timeout { seconds: 1 }).into();
        assert_eq!(timeout, SummaryOutcome::TransportFailure);

        let malformed: SummaryOutcome = Err(SummarizeError::MalformedResponse {
            status: 200,
            reason: "not json".into(),
        })
        .into();
        assert_eq!(malformed, SummaryOutcome::TransportFailure);
    }
}
