use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};

use crate::summary::{RequestId, SummaryOutcome};

pub enum AppEvent {
    Key(KeyEvent),
    Paste(String),
    Tick,
    /// Terminal was resized to `(width, height)`.
    Resize(u16, u16),
    /// The input thread stopped; no more keys will arrive.
    InputClosed,
    /// The request worker finished a summarization request.
    SummaryFinished {
        request_id: RequestId,
        outcome: SummaryOutcome,
    },
}

/// Reads terminal events on a background thread and merges them with
/// events posted by the request worker.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
    stop: Arc<AtomicBool>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            while !stop_flag.load(Ordering::Relaxed) {
                // Short poll so the stop flag is checked frequently.
                let timeout = tick_rate
                    .saturating_sub(last_tick.elapsed())
                    .min(Duration::from_millis(50));

                match event::poll(timeout) {
                    Ok(true) => {
                        if let Some(app_event) = translate(event::read()) {
                            let closed = matches!(app_event, AppEvent::InputClosed);
                            if event_tx.send(app_event).is_err() || closed {
                                break;
                            }
                        }
                    }
                    Ok(false) => {}
                    Err(err) => {
                        tracing::error!(error = %err, "Failed to poll terminal events");
                        let _ = event_tx.send(AppEvent::InputClosed);
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, tx, stop }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> mpsc::Sender<AppEvent> {
        self.tx.clone()
    }
}

/// Map one terminal read to the event the UI loop sees.
fn translate(read: io::Result<Event>) -> Option<AppEvent> {
    match read {
        Ok(Event::Key(key)) => Some(AppEvent::Key(key)),
        Ok(Event::Paste(text)) => Some(AppEvent::Paste(text)),
        Ok(Event::Resize(width, height)) => Some(AppEvent::Resize(width, height)),
        Ok(_) => None,
        Err(err) => {
            tracing::error!(error = %err, "Failed to read terminal event");
            Some(AppEvent::InputClosed)
        }
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_failure_closes_input() {
        let event = translate(Err(io::Error::other("terminal gone")));
        assert!(matches!(event, Some(AppEvent::InputClosed)));
    }

    #[test]
    fn resize_carries_new_size() {
        let event = translate(Ok(Event::Resize(80, 24)));
        assert!(matches!(event, Some(AppEvent::Resize(80, 24))));
        assert!(translate(Ok(Event::FocusGained)).is_none());
    }
}
