use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::EmptyInput;

/// Requested summary length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SummaryLength {
    Short,
    #[default]
    Medium,
    Detailed,
}

impl SummaryLength {
    pub const ALL: [SummaryLength; 3] = [Self::Short, Self::Medium, Self::Detailed];

    /// Wire name, as sent in the request body.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Detailed => "detailed",
        }
    }

    /// Next option, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Self::Short => Self::Medium,
            Self::Medium => Self::Detailed,
            Self::Detailed => Self::Short,
        }
    }

    /// Previous option, wrapping around.
    pub fn previous(self) -> Self {
        match self {
            Self::Short => Self::Detailed,
            Self::Medium => Self::Short,
            Self::Detailed => Self::Medium,
        }
    }
}

impl fmt::Display for SummaryLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier tagging one summarization request and its completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(Uuid);

impl RequestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Body of a summarization request.
///
/// Can only be built through [`SummaryRequest::new`], so `text` is never
/// empty or padded with whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRequest {
    text: String,
    length: SummaryLength,
}

impl SummaryRequest {
    pub fn new(text: &str, length: SummaryLength) -> Result<Self, EmptyInput> {
        let text = text.trim();
        if text.is_empty() {
            return Err(EmptyInput);
        }
        Ok(Self {
            text: text.to_string(),
            length,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn length(&self) -> SummaryLength {
        self.length
    }
}

/// Body returned by the endpoint. Only `summary` and `error` are recognized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SummaryResponse {
    /// Lenient extraction from an arbitrary JSON value.
    ///
    /// Non-object values and non-string fields count as absent.
    pub fn from_value(value: &serde_json::Value) -> Self {
        let field = |name: &str| {
            value
                .get(name)
                .and_then(|v| v.as_str())
                .map(String::from)
        };
        Self {
            summary: field("summary"),
            error: field("error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn medium_is_default_length() {
        assert_eq!(SummaryLength::default(), SummaryLength::Medium);
    }

    #[test]
    fn length_cycles_both_ways() {
        for length in SummaryLength::ALL {
            assert_eq!(length.next().previous(), length);
        }
        assert_eq!(SummaryLength::Detailed.next(), SummaryLength::Short);
        assert_eq!(SummaryLength::Short.previous(), SummaryLength::Detailed);
    }

    #[test]
    fn request_trims_text() {
        let request = SummaryRequest::new("  some text \n", SummaryLength::Short).unwrap();
        assert_eq!(request.text(), "some text");
        assert_eq!(request.length(), SummaryLength::Short);
    }

    #[test]
    fn request_rejects_blank_text() {
        assert_eq!(
            SummaryRequest::new("", SummaryLength::Medium),
            Err(EmptyInput)
        );
        assert_eq!(
            SummaryRequest::new(" \t\n ", SummaryLength::Medium),
            Err(EmptyInput)
        );
    }

    #[test]
    fn request_serializes_to_wire_format() {
        let request = SummaryRequest::new("The quick brown fox...", SummaryLength::Detailed).unwrap();
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({"text": "The quick brown fox...", "length": "detailed"})
        );
    }

    #[test]
    fn response_ignores_unknown_and_non_string_fields() {
        let response = SummaryResponse::from_value(&json!({
            "summary": "A fox runs.",
            "error": 42,
            "model": "bart"
        }));
        assert_eq!(response.summary.as_deref(), Some("A fox runs."));
        assert_eq!(response.error, None);

        let response = SummaryResponse::from_value(&json!(["not", "an", "object"]));
        assert_eq!(response, SummaryResponse::default());
    }

    #[test]
    fn request_ids_are_unique() {
        assert_ne!(RequestId::new(), RequestId::new());
    }
}
