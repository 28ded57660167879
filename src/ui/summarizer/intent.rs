//! Intents for the summarizer pane.

use crate::summary::{RequestId, SummaryOutcome};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SummarizerIntent {
    /// Typed character.
    InsertChar(char),

    /// Pasted text.
    InsertText(String),

    Backspace,

    Newline,

    ClearInput,

    NextLength,

    PreviousLength,

    /// Submit attempted with blank input.
    EmptyInput,

    /// A request was handed to the worker.
    Started { request_id: RequestId },

    /// The worker finished a request.
    Finished {
        request_id: RequestId,
        outcome: SummaryOutcome,
    },

    /// Spinner tick.
    AnimationTick,

    /// Scroll the result area back by `rows`.
    ScrollResultUp { rows: u16 },

    /// Scroll the result area forward by `rows`, stopping at `max`.
    ScrollResultDown { rows: u16, max: u16 },
}

impl Intent for SummarizerIntent {}
