//! Static informational panes.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::config::PanesConfig;
use crate::ui::router::Pane;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};

/// Heading and body for a static pane. `None` for the summarizer.
pub fn pane_content(pane: Pane, panes: &PanesConfig) -> Option<(&'static str, &str)> {
    match pane {
        Pane::Summarizer => None,
        Pane::About => Some(("About This App", panes.about.as_str())),
        Pane::Contact => Some(("Contact Us", panes.contact.as_str())),
        Pane::Profile => Some(("Get To Know Me", panes.profile.as_str())),
    }
}

pub fn render_static_pane(frame: &mut Frame, area: Rect, pane: Pane, panes: &PanesConfig) {
    let Some((heading, body)) = pane_content(pane, panes) else {
        return;
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            heading,
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    lines.extend(
        body.lines()
            .map(|line| Line::from(Span::styled(line.to_string(), Style::default().fg(HEADER_TEXT)))),
    );

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        );
    frame.render_widget(paragraph, area);
}
