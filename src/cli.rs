//! Command-line interface and the one-shot summarize mode.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::ENDPOINT_ENV;
use crate::summary::{SummaryClient, SummaryLength, SummaryRequest, PROMPT_MESSAGE};

#[derive(Debug, Parser)]
#[command(
    name = "summarist",
    version,
    about = "Terminal client for a text summarization service"
)]
pub struct Cli {
    /// Path to the config file [default: <config dir>/summarist/config.toml]
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Summarization endpoint URL, overriding the config file
    #[arg(long, global = true, env = ENDPOINT_ENV, value_name = "URL")]
    pub endpoint: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Summarize text once and print the result
    Summarize {
        /// Summary length [default: from config, else medium]
        #[arg(short, long, value_enum)]
        length: Option<SummaryLength>,

        /// Text to summarize. Read from stdin when omitted
        text: Option<String>,
    },
}

/// How a one-shot run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnceStatus {
    Summarized,
    Failed,
    EmptyInput,
}

impl OnceStatus {
    pub fn exit_code(self) -> u8 {
        match self {
            OnceStatus::Summarized => 0,
            OnceStatus::Failed => 1,
            OnceStatus::EmptyInput => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnceReport {
    pub status: OnceStatus,
    /// Same message the interactive UI would display.
    pub message: String,
}

/// Run one request/present cycle.
pub async fn summarize_once(
    client: &SummaryClient,
    text: &str,
    length: SummaryLength,
) -> OnceReport {
    let Ok(request) = SummaryRequest::new(text, length) else {
        return OnceReport {
            status: OnceStatus::EmptyInput,
            message: PROMPT_MESSAGE.to_string(),
        };
    };

    let outcome = client.submit(&request).await;
    OnceReport {
        status: if outcome.is_success() {
            OnceStatus::Summarized
        } else {
            OnceStatus::Failed
        },
        message: outcome.message(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_summarize_with_length() {
        let cli = Cli::try_parse_from([
            "summarist",
            "--endpoint",
            "http://localhost:8000/summarize",
            "summarize",
            "--length",
            "short",
            "some text",
        ])
        .unwrap();
        assert_eq!(cli.endpoint.as_deref(), Some("http://localhost:8000/summarize"));
        match cli.command {
            Some(Command::Summarize { length, text }) => {
                assert_eq!(length, Some(SummaryLength::Short));
                assert_eq!(text.as_deref(), Some("some text"));
            }
            None => panic!("expected summarize subcommand"),
        }
    }

    #[test]
    fn rejects_unknown_length() {
        let result = Cli::try_parse_from(["summarist", "summarize", "--length", "huge", "x"]);
        assert!(result.is_err());
    }

    #[test]
    fn exit_codes_are_distinct() {
        assert_eq!(OnceStatus::Summarized.exit_code(), 0);
        assert_eq!(OnceStatus::Failed.exit_code(), 1);
        assert_eq!(OnceStatus::EmptyInput.exit_code(), 2);
    }
}
