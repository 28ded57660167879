//! Pane navigation.
//!
//! Four mutually exclusive panes. The router only decides which one is
//! visible; it never touches the state behind a pane.

mod intent;
mod reducer;
mod state;

pub use intent::RouterIntent;
pub use reducer::RouterReducer;
pub use state::{Pane, RouterState};
