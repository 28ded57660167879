//! Summarizer pane: text input, length choice, submit, and result display.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent):
//! - `state.rs` - input, selected length, displayed message, in-flight guard
//! - `intent.rs` - edits, submit lifecycle, completions
//! - `reducer.rs` - Idle → InFlight → Idle transitions
//! - `view.rs` - rendering

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::SummarizerIntent;
pub use reducer::SummarizerReducer;
pub use state::{MessageKind, SummarizerState};
pub use view::{render_summarizer, result_scroll_bounds};
