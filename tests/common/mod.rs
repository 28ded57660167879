//! Shared test utilities.

#![allow(dead_code, unused_imports)]

pub mod mock_endpoint;

use std::net::TcpListener;
use std::path::PathBuf;
use std::time::Duration;

use summarist::config::Config;
use summarist::summary::SummaryClient;
use summarist::ui::app::{App, UiCommand};
use tempfile::TempDir;
use tokio::sync::mpsc;

/// A local URL nothing is listening on.
pub fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/summarize", port)
}

/// Client with short timeouts pointed at `url`.
pub fn client_for(url: &str) -> SummaryClient {
    client_with_timeout(url, Duration::from_secs(5))
}

pub fn client_with_timeout(url: &str, timeout: Duration) -> SummaryClient {
    SummaryClient::new(
        url.parse().expect("valid test URL"),
        timeout,
        Duration::from_secs(2),
    )
    .expect("Failed to build client")
}

/// Write `content` to a temporary config.toml.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, content).expect("Failed to write config");
    (temp_dir, path)
}

/// App wired to a command channel the test can inspect.
pub fn app_with_commands() -> (App, mpsc::Receiver<UiCommand>) {
    let mut app = App::new(&Config::default());
    let (tx, rx) = mpsc::channel(8);
    app.set_command_sender(tx);
    (app, rx)
}
