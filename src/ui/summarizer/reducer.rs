//! Reducer for the summarizer pane.

use crate::summary::{SummaryOutcome, BUSY_MESSAGE, PROMPT_MESSAGE};
use crate::ui::mvi::Reducer;

use super::intent::SummarizerIntent;
use super::state::{MessageKind, SummarizerState};

pub struct SummarizerReducer;

impl Reducer for SummarizerReducer {
    type State = SummarizerState;
    type Intent = SummarizerIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SummarizerIntent::InsertChar(ch) => {
                state.input.push(ch);
                state
            }

            SummarizerIntent::InsertText(text) => {
                state.input.push_str(&normalize_newlines(&text));
                state
            }

            SummarizerIntent::Backspace => {
                state.input.pop();
                state
            }

            SummarizerIntent::Newline => {
                state.input.push('\n');
                state
            }

            SummarizerIntent::ClearInput => {
                state.input.clear();
                state
            }

            SummarizerIntent::NextLength => {
                state.length = state.length.next();
                state
            }

            SummarizerIntent::PreviousLength => {
                state.length = state.length.previous();
                state
            }

            // A prompt must not replace the busy message of a live request.
            SummarizerIntent::EmptyInput if state.is_in_flight() => state,
            SummarizerIntent::EmptyInput => {
                state.message = PROMPT_MESSAGE.to_string();
                state.message_kind = MessageKind::Prompt;
                state.result_scroll = 0;
                state
            }

            // At most one request in flight.
            SummarizerIntent::Started { .. } if state.is_in_flight() => state,
            SummarizerIntent::Started { request_id } => {
                state.in_flight = Some(request_id);
                state.message = BUSY_MESSAGE.to_string();
                state.message_kind = MessageKind::Busy;
                state.animation_tick = 0;
                state.result_scroll = 0;
                state
            }

            SummarizerIntent::Finished { request_id, .. } if !state.is_awaiting(request_id) => {
                state
            }
            SummarizerIntent::Finished { outcome, .. } => {
                state.in_flight = None;
                state.message = outcome.message();
                state.message_kind = match outcome {
                    SummaryOutcome::Summarized(_) => MessageKind::Summary,
                    SummaryOutcome::ServerError(_) => MessageKind::Error,
                    SummaryOutcome::TransportFailure => MessageKind::Failure,
                };
                state.result_scroll = 0;
                state
            }

            SummarizerIntent::AnimationTick => {
                if state.is_in_flight() {
                    state.animation_tick = state.animation_tick.wrapping_add(1);
                }
                state
            }

            SummarizerIntent::ScrollResultUp { rows } => {
                state.result_scroll = state.result_scroll.saturating_sub(rows);
                state
            }

            SummarizerIntent::ScrollResultDown { rows, max } => {
                state.result_scroll = state.result_scroll.saturating_add(rows).min(max);
                state
            }
        }
    }
}

/// Pasted text from some terminals uses bare `\r` line endings.
fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}
