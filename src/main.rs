use std::io::IsTerminal;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use summarist::cli::{summarize_once, Cli, Command, OnceStatus};
use summarist::config::Config;
use summarist::logging;
use summarist::summary::SummaryClient;
use summarist::ui;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Summarize { .. }) => logging::init_stderr_tracing(),
        None => logging::init_file_tracing(),
    }

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = Config::resolve(&config_path, cli.endpoint.clone())
        .context("Invalid configuration")?;
    let endpoint = config.endpoint_url(&config_path)?;
    let client = SummaryClient::new(
        endpoint,
        config.endpoint.timeout(),
        config.endpoint.connect_timeout(),
    )
    .context("Failed to build HTTP client")?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let code = match cli.command {
        Some(Command::Summarize { length, text }) => {
            let text = match text {
                Some(text) => text,
                None => read_stdin()?,
            };
            let length = length.unwrap_or(config.defaults.length);
            let report = runtime.block_on(summarize_once(&client, &text, length));
            if report.status == OnceStatus::Summarized {
                println!("{}", report.message);
            } else {
                eprintln!("{}", report.message);
            }
            ExitCode::from(report.status.exit_code())
        }
        None => {
            ui::run(&config, client, runtime.handle()).context("Terminal UI failed")?;
            ExitCode::SUCCESS
        }
    };

    // Drops a request still in flight when the user quit.
    runtime.shutdown_timeout(Duration::from_millis(250));
    Ok(code)
}

fn read_stdin() -> anyhow::Result<String> {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        eprintln!("Reading text from stdin; end with Ctrl+D.");
    }
    std::io::read_to_string(stdin).context("Failed to read text from stdin")
}
