use crate::config::Config;
use crate::summary::SummaryClient;
use crate::ui::app::{App, UiCommand};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::{RecvTimeoutError, Sender};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tracing::Instrument;

/// Commands queued ahead of the worker. Submit is guarded, so one suffices
/// in practice.
const COMMAND_QUEUE_SIZE: usize = 4;

/// Run the interactive UI until the user quits.
///
/// Requests run on `runtime`; everything else happens on the calling thread.
pub fn run(config: &Config, client: SummaryClient, runtime: &Handle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(120);
    let mut app = App::new(config);
    let events = EventHandler::new(tick_rate);

    let size = terminal.size()?;
    app.on_resize(size.width, size.height);

    let (command_tx, command_rx) = mpsc::channel(COMMAND_QUEUE_SIZE);
    app.set_command_sender(command_tx);
    let worker = runtime.spawn(request_worker(client, command_rx, events.sender()));

    tracing::info!(endpoint = %app.endpoint_label(), "UI started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(event) => apply_event(&mut app, event),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    worker.abort();
    drop(guard);
    tracing::info!("UI stopped");
    Ok(())
}

/// Route one event to the app.
pub fn apply_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::Key(key) => handle_key(app, key),
        AppEvent::Paste(text) => app.on_paste(&text),
        AppEvent::Tick => app.on_tick(),
        AppEvent::Resize(width, height) => app.on_resize(width, height),
        AppEvent::InputClosed => {
            tracing::warn!("Terminal input closed, quitting");
            app.request_quit();
        }
        AppEvent::SummaryFinished {
            request_id,
            outcome,
        } => app.on_summary_finished(request_id, outcome),
    }
}

/// Processes summarization commands one at a time and posts each outcome
/// back to the UI loop.
pub async fn request_worker(
    client: SummaryClient,
    mut commands: mpsc::Receiver<UiCommand>,
    events: Sender<AppEvent>,
) {
    while let Some(command) = commands.recv().await {
        match command {
            UiCommand::Summarize {
                request_id,
                request,
            } => {
                let span = tracing::info_span!("summarize", %request_id);
                let outcome = client.submit(&request).instrument(span).await;
                if events
                    .send(AppEvent::SummaryFinished {
                        request_id,
                        outcome,
                    })
                    .is_err()
                {
                    break;
                }
            }
        }
    }
}
