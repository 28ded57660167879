//! Rendering for the summarizer pane.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::summary::SummaryLength;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, FOCUS_BORDER, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR,
    STATUS_OK,
};

use super::state::{MessageKind, SummarizerState};

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const PLACEHOLDER: &str = "Enter text to summarize...";

const CURSOR: &str = "▏";

/// Render the summarizer pane into `area`.
pub fn render_summarizer(frame: &mut Frame, area: Rect, state: &SummarizerState) {
    let [input, length, submit, result] = regions(area);

    render_input(frame, input, state);
    render_length(frame, length, state.length);
    frame.render_widget(Paragraph::new(submit_line(state)), submit);
    render_result(frame, result, state);
}

/// Input box, length group, submit button, result box.
fn regions(area: Rect) -> [Rect; 4] {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(3),
        ])
        .areas(area)
}

/// Largest useful result offset and the rows in one page, for a summarizer
/// pane drawn into `area`.
pub fn result_scroll_bounds(area: Rect, state: &SummarizerState) -> (u16, u16) {
    let inner = result_block().inner(regions(area)[3]);
    let max = max_scroll(&result_text(state), inner);
    (max, inner.height.saturating_sub(1).max(1))
}

/// Rows `text` occupies once word-wrapped to `width` columns.
fn wrapped_rows(text: &Text<'_>, width: u16) -> usize {
    Paragraph::new(text.clone())
        .wrap(Wrap { trim: false })
        .line_count(width)
}

/// Offset that brings the last wrapped row of `text` to the bottom of `inner`.
fn max_scroll(text: &Text<'_>, inner: Rect) -> u16 {
    let rows = wrapped_rows(text, inner.width);
    rows.saturating_sub(inner.height as usize)
        .min(u16::MAX as usize) as u16
}

fn render_input(frame: &mut Frame, area: Rect, state: &SummarizerState) {
    let block = Block::default()
        .title(" Text ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(FOCUS_BORDER));

    let text = if state.input.is_empty() {
        Text::from(Line::from(vec![
            Span::styled(CURSOR, Style::default().fg(HEADER_TEXT)),
            Span::styled(PLACEHOLDER, Style::default().fg(MUTED_TEXT)),
        ]))
    } else {
        let mut text = Text::styled(state.input.clone(), Style::default().fg(HEADER_TEXT));
        text.push_span(Span::styled(CURSOR, Style::default().fg(HEADER_TEXT)));
        text
    };

    // Keep the cursor row in view.
    let scroll = max_scroll(&text, block.inner(area));

    let paragraph = Paragraph::new(text)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}

fn render_length(frame: &mut Frame, area: Rect, selected: SummaryLength) {
    let block = Block::default()
        .title(" Length ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    frame.render_widget(Paragraph::new(radio_line(selected)).block(block), area);
}

/// Radio group for the three length options.
fn radio_line(selected: SummaryLength) -> Line<'static> {
    let mut spans = Vec::new();
    for length in SummaryLength::ALL {
        let (marker, style) = if length == selected {
            (
                "(•) ",
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            )
        } else {
            ("( ) ", Style::default().fg(MUTED_TEXT))
        };
        spans.push(Span::raw("  "));
        spans.push(Span::styled(format!("{}{}", marker, length), style));
    }
    Line::from(spans)
}

/// Submit button, rendered disabled while a request is in flight.
fn submit_line(state: &SummarizerState) -> Line<'static> {
    let style = if state.can_submit() {
        Style::default()
            .fg(HEADER_TEXT)
            .bg(ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(MUTED_TEXT)
            .bg(ACTIVE_HIGHLIGHT)
            .add_modifier(Modifier::DIM)
    };
    Line::from(vec![Span::raw("  "), Span::styled(" Summarize ", style)])
}

fn result_block() -> Block<'static> {
    Block::default()
        .title(" Summary ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}

fn result_text(state: &SummarizerState) -> Text<'static> {
    let style = message_style(state.message_kind);
    if state.message_kind == MessageKind::Busy {
        let spinner = SPINNER_FRAMES[(state.animation_tick as usize) % SPINNER_FRAMES.len()];
        Text::from(Line::from(vec![
            Span::styled(format!("{} ", spinner), Style::default().fg(STATUS_OK)),
            Span::styled(state.message.clone(), style),
        ]))
    } else {
        Text::styled(state.message.clone(), style)
    }
}

fn render_result(frame: &mut Frame, area: Rect, state: &SummarizerState) {
    let block = result_block();
    let text = result_text(state);
    let scroll = state.result_scroll.min(max_scroll(&text, block.inner(area)));

    let paragraph = Paragraph::new(text)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}

/// Busy messages are faded and italic; everything else is full weight.
fn message_style(kind: MessageKind) -> Style {
    match kind {
        MessageKind::Busy => Style::default()
            .fg(HEADER_TEXT)
            .add_modifier(Modifier::DIM | Modifier::ITALIC),
        MessageKind::Error | MessageKind::Failure => Style::default().fg(STATUS_ERROR),
        MessageKind::Empty | MessageKind::Prompt | MessageKind::Summary => {
            Style::default().fg(HEADER_TEXT)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::RequestId;

    #[test]
    fn radio_line_marks_selected_option() {
        let rendered: String = radio_line(SummaryLength::Short)
            .spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect();
        assert_eq!(rendered, "  (•) short  ( ) medium  ( ) detailed");
    }

    #[test]
    fn busy_message_is_faded_and_italic() {
        let style = message_style(MessageKind::Busy);
        assert!(style.add_modifier.contains(Modifier::DIM));
        assert!(style.add_modifier.contains(Modifier::ITALIC));

        let style = message_style(MessageKind::Summary);
        assert!(!style.add_modifier.contains(Modifier::DIM));
        assert!(!style.add_modifier.contains(Modifier::ITALIC));
    }

    #[test]
    fn submit_is_dimmed_while_in_flight() {
        let idle = submit_line(&SummarizerState::default());
        assert!(!idle.spans[1].style.add_modifier.contains(Modifier::DIM));

        let busy = SummarizerState {
            in_flight: Some(RequestId::new()),
            ..SummarizerState::default()
        };
        let line = submit_line(&busy);
        assert!(line.spans[1].style.add_modifier.contains(Modifier::DIM));
    }

    #[test]
    fn wrapped_rows_count_soft_wraps() {
        let text = Text::raw("word ".repeat(10));
        assert_eq!(wrapped_rows(&text, 100), 1);
        assert!(wrapped_rows(&text, 12) >= 5);
    }

    #[test]
    fn long_result_can_scroll_to_its_end() {
        let state = SummarizerState {
            message: "sentence of the summary. ".repeat(30),
            message_kind: MessageKind::Summary,
            ..SummarizerState::default()
        };
        let (max, page) = result_scroll_bounds(Rect::new(0, 0, 80, 18), &state);
        assert!(max > 0);
        assert!(page >= 1);

        let short = SummarizerState {
            message: "A fox runs.".into(),
            message_kind: MessageKind::Summary,
            ..SummarizerState::default()
        };
        assert_eq!(result_scroll_bounds(Rect::new(0, 0, 80, 18), &short).0, 0);
    }
}
