//! Summarist: a terminal client for a remote text summarization endpoint.

pub mod cli;
pub mod config;
pub mod logging;
pub mod summary;
pub mod ui;
