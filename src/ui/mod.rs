//! Interactive terminal UI.

pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod pages;
pub mod render;
pub mod router;
pub mod runtime;
pub mod summarizer;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
