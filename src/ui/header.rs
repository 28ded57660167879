use crate::ui::router::Pane;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MUTED_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Tab bar listing the panes, with the endpoint on the right.
pub struct Header<'a> {
    active: Pane,
    endpoint: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(active: Pane, endpoint: &'a str) -> Self {
        Self { active, endpoint }
    }

    pub fn line(&self) -> Line<'static> {
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let mut spans = vec![Span::raw(" ")];

        for (i, pane) in Pane::ALL.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", separator_style));
            }
            let style = if *pane == self.active {
                Style::default()
                    .fg(HEADER_TEXT)
                    .bg(ACCENT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(MUTED_TEXT)
            };
            spans.push(Span::styled(
                format!(" F{} {} ", pane.index() + 1, pane.title()),
                style,
            ));
        }

        spans.push(Span::styled("   ", separator_style));
        spans.push(Span::styled(
            self.endpoint.to_string(),
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM),
        ));
        Line::from(spans)
    }

    pub fn widget(&self) -> Paragraph<'static> {
        Paragraph::new(self.line()).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
