use crate::config::{Config, PanesConfig};
use crate::summary::{RequestId, SummaryOutcome, SummaryRequest};
use crate::ui::layout::layout_regions;
use crate::ui::mvi::Reducer;
use crate::ui::router::{Pane, RouterIntent, RouterReducer, RouterState};
use crate::ui::summarizer::{
    result_scroll_bounds, SummarizerIntent, SummarizerReducer, SummarizerState,
};
use ratatui::layout::Rect;
use tokio::sync::mpsc;

/// Work the UI hands to the async side.
#[derive(Debug)]
pub enum UiCommand {
    Summarize {
        request_id: RequestId,
        request: SummaryRequest,
    },
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    /// Visible pane (MVI pattern).
    router: RouterState,
    /// Summarizer pane state (MVI pattern). Survives pane switches.
    summarizer: SummarizerState,
    panes: PanesConfig,
    endpoint_label: String,
    command_sender: Option<UiCommandSender>,
    last_command_error: Option<String>,
    /// Last known terminal size; bounds result scrolling.
    viewport: Rect,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            should_quit: false,
            router: RouterState::default(),
            summarizer: SummarizerState::with_length(config.defaults.length),
            panes: config.panes.clone(),
            endpoint_label: config.endpoint.url.clone().unwrap_or_default(),
            command_sender: None,
            last_command_error: None,
            viewport: Rect::default(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn active_pane(&self) -> Pane {
        self.router.active
    }

    pub fn summarizer(&self) -> &SummarizerState {
        &self.summarizer
    }

    pub fn panes(&self) -> &PanesConfig {
        &self.panes
    }

    pub fn endpoint_label(&self) -> &str {
        &self.endpoint_label
    }

    pub fn last_command_error(&self) -> Option<&str> {
        self.last_command_error.as_deref()
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    pub fn navigate(&mut self, intent: RouterIntent) {
        dispatch_mvi!(self, router, RouterReducer, intent);
    }

    /// Apply an input edit to the summarizer pane.
    pub fn edit(&mut self, intent: SummarizerIntent) {
        dispatch_mvi!(self, summarizer, SummarizerReducer, intent);
    }

    pub fn on_paste(&mut self, text: &str) {
        if self.router.is_active(Pane::Summarizer) {
            self.edit(SummarizerIntent::InsertText(text.to_string()));
        }
    }

    pub fn on_resize(&mut self, width: u16, height: u16) {
        self.viewport = Rect::new(0, 0, width, height);
    }

    /// Page the result area back toward the start of the message.
    pub fn page_result_up(&mut self) {
        let (_, page) = self.result_bounds();
        self.edit(SummarizerIntent::ScrollResultUp { rows: page });
    }

    /// Page the result area toward the end of the message.
    pub fn page_result_down(&mut self) {
        let (max, page) = self.result_bounds();
        self.edit(SummarizerIntent::ScrollResultDown { rows: page, max });
    }

    fn result_bounds(&self) -> (u16, u16) {
        let (_, body, _) = layout_regions(self.viewport);
        result_scroll_bounds(body, &self.summarizer)
    }

    pub fn on_tick(&mut self) {
        if self.summarizer.is_in_flight() {
            self.edit(SummarizerIntent::AnimationTick);
        }
    }

    /// Submit the current input.
    ///
    /// Returns `true` if a request was handed to the worker. Ignored while
    /// another request is in flight; blank input shows a prompt instead.
    pub fn submit(&mut self) -> bool {
        if self.summarizer.is_in_flight() {
            tracing::debug!("Submit ignored: request already in flight");
            return false;
        }

        let request = match SummaryRequest::new(&self.summarizer.input, self.summarizer.length) {
            Ok(request) => request,
            Err(_) => {
                self.edit(SummarizerIntent::EmptyInput);
                return false;
            }
        };

        let request_id = RequestId::new();
        tracing::info!(
            %request_id,
            length = %request.length(),
            "Submitting summarization request"
        );
        self.edit(SummarizerIntent::Started { request_id });

        if !self.send_command(UiCommand::Summarize {
            request_id,
            request,
        }) {
            // Nobody will answer; resolve now instead of spinning forever.
            self.on_summary_finished(request_id, SummaryOutcome::TransportFailure);
            return false;
        }
        true
    }

    pub fn on_summary_finished(&mut self, request_id: RequestId, outcome: SummaryOutcome) {
        if !self.summarizer.is_awaiting(request_id) {
            tracing::debug!(%request_id, "Dropping stale summarization result");
            return;
        }
        self.edit(SummarizerIntent::Finished {
            request_id,
            outcome,
        });
    }

    fn send_command(&mut self, command: UiCommand) -> bool {
        let Some(sender) = &self.command_sender else {
            self.last_command_error = Some("request worker not attached".to_string());
            return false;
        };

        match sender.try_send(command) {
            Ok(()) => {
                self.last_command_error = None;
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to queue summarization request");
                self.last_command_error = Some(format!("command send failed: {}", err));
                false
            }
        }
    }
}
