//! HTTP client for the summarization endpoint.
//!
//! One call to [`SummaryClient::submit`] issues exactly one POST. Nothing is
//! retried; the configured timeout bounds how long a request may stay in
//! flight.

use std::time::{Duration, Instant};

use reqwest::{Client, StatusCode, Url};

use super::error::SummarizeError;
use super::outcome::{SummaryOutcome, UNKNOWN_ERROR};
use super::types::{SummaryRequest, SummaryResponse};

/// Client for the summarization endpoint. Cheap to clone.
#[derive(Debug, Clone)]
pub struct SummaryClient {
    client: Client,
    endpoint: Url,
    timeout: Duration,
}

impl SummaryClient {
    pub fn new(
        endpoint: Url,
        timeout: Duration,
        connect_timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()?;

        Ok(Self {
            client,
            endpoint,
            timeout,
        })
    }

    /// The configured endpoint URL.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Submit a request and classify the result into an outcome.
    pub async fn submit(&self, request: &SummaryRequest) -> SummaryOutcome {
        self.summarize(request).await.into()
    }

    /// Submit a request and return the summary text.
    pub async fn summarize(&self, request: &SummaryRequest) -> Result<String, SummarizeError> {
        tracing::debug!(
            endpoint = %self.endpoint,
            length = %request.length(),
            text_len = request.text().len(),
            "Sending summarization request"
        );

        let start = Instant::now();
        let result = self.exchange(request).await;
        let latency_ms = start.elapsed().as_millis() as u64;

        match &result {
            Ok(summary) => tracing::info!(
                latency_ms,
                summary_len = summary.len(),
                "Summarization succeeded"
            ),
            Err(err) => tracing::warn!(
                latency_ms,
                kind = err.kind(),
                error = %err,
                "Summarization failed"
            ),
        }

        result
    }

    async fn exchange(&self, request: &SummaryRequest) -> Result<String, SummarizeError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|err| self.classify(err))?;

        let status = response.status();
        let body = response.text().await.map_err(|err| self.classify(err))?;

        interpret_response(status, &body)
    }

    fn classify(&self, err: reqwest::Error) -> SummarizeError {
        if err.is_timeout() {
            SummarizeError::Timeout {
                seconds: self.timeout.as_secs(),
            }
        } else {
            SummarizeError::Transport(err)
        }
    }
}

/// Map a status and raw body to the summary text or an error.
///
/// The body must be JSON regardless of status. A 2xx body carrying only an
/// `error` field is an application error, since the reference backend
/// reports upstream failures with status 200.
fn interpret_response(status: StatusCode, body: &str) -> Result<String, SummarizeError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| SummarizeError::MalformedResponse {
            status: status.as_u16(),
            reason: format!("body is not JSON: {}", e),
        })?;
    let response = SummaryResponse::from_value(&value);

    if !status.is_success() {
        return Err(SummarizeError::Application {
            status: status.as_u16(),
            message: response.error.unwrap_or_else(|| UNKNOWN_ERROR.to_string()),
        });
    }

    match response {
        SummaryResponse {
            summary: Some(summary),
            ..
        } => Ok(summary),
        SummaryResponse {
            error: Some(message),
            ..
        } => Err(SummarizeError::Application {
            status: status.as_u16(),
            message,
        }),
        _ => Err(SummarizeError::MalformedResponse {
            status: status.as_u16(),
            reason: "neither `summary` nor `error` present".to_string(),
        }),
    }
}
