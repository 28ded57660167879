//! State for the summarizer pane.

use crate::summary::{RequestId, SummaryLength};
use crate::ui::mvi::UiState;

/// What the result area is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageKind {
    /// Nothing submitted yet.
    #[default]
    Empty,
    /// Submit was attempted with blank input.
    Prompt,
    /// A request is in flight.
    Busy,
    /// Summary returned by the endpoint.
    Summary,
    /// Error reported by the endpoint.
    Error,
    /// Endpoint unreachable or response unusable.
    Failure,
}

/// State of the summarizer pane.
///
/// Lives as long as the app does, so switching panes keeps it intact.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SummarizerState {
    /// Text being edited.
    pub input: String,
    /// Selected summary length.
    pub length: SummaryLength,
    /// Message in the result area.
    pub message: String,
    pub message_kind: MessageKind,
    /// Request currently awaiting a response, if any.
    pub in_flight: Option<RequestId>,
    /// Spinner frame while in flight.
    pub animation_tick: u8,
    /// First visible row of the result area.
    pub result_scroll: u16,
}

impl UiState for SummarizerState {}

impl SummarizerState {
    /// Fresh state with the given length preselected.
    pub fn with_length(length: SummaryLength) -> Self {
        Self {
            length,
            ..Self::default()
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Submit is enabled only while idle.
    pub fn can_submit(&self) -> bool {
        !self.is_in_flight()
    }

    /// Whether `request_id` is the request this pane is waiting for.
    pub fn is_awaiting(&self, request_id: RequestId) -> bool {
        self.in_flight == Some(request_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_idle_with_medium_length() {
        let state = SummarizerState::default();
        assert!(!state.is_in_flight());
        assert!(state.can_submit());
        assert_eq!(state.length, SummaryLength::Medium);
        assert_eq!(state.message_kind, MessageKind::Empty);
        assert!(state.message.is_empty());
    }

    #[test]
    fn with_length_preselects() {
        let state = SummarizerState::with_length(SummaryLength::Detailed);
        assert_eq!(state.length, SummaryLength::Detailed);
        assert!(state.input.is_empty());
    }

    #[test]
    fn awaiting_matches_only_in_flight_id() {
        let id = RequestId::new();
        let state = SummarizerState {
            in_flight: Some(id),
            ..SummarizerState::default()
        };
        assert!(state.is_awaiting(id));
        assert!(!state.is_awaiting(RequestId::new()));
        assert!(!state.can_submit());
    }
}
