//! Summarization request/response model and the HTTP client that talks to
//! the remote summarization endpoint.
//!
//! ```text
//! text + length ──→ SummaryRequest ──→ SummaryClient::submit ──→ SummaryOutcome
//!                        │                                            │
//!                   EmptyInput                               display message
//! ```

mod client;
mod error;
mod outcome;
mod types;

pub use client::SummaryClient;
pub use error::{EmptyInput, SummarizeError};
pub use outcome::{
    SummaryOutcome, BUSY_MESSAGE, ERROR_PREFIX, FAILURE_MESSAGE, PROMPT_MESSAGE,
    UNKNOWN_ERROR,
};
pub use types::{RequestId, SummaryLength, SummaryRequest, SummaryResponse};
