use crate::ui::router::Pane;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const SUMMARIZER_HINTS: &str =
    " Enter: Send │ Alt+Enter: Newline │ ↑↓: Length │ PgUp/Dn: Scroll │ ^Q: Quit";

const PANE_HINTS: &str = " Tab/Shift+Tab: Switch pane │ F1-F4: Jump │ Ctrl+Q: Quit";

pub struct Footer {
    active: Pane,
}

impl Footer {
    pub fn new(active: Pane) -> Self {
        Self { active }
    }

    pub fn hints(&self) -> &'static str {
        match self.active {
            Pane::Summarizer => SUMMARIZER_HINTS,
            Pane::About | Pane::Contact | Pane::Profile => PANE_HINTS,
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = self.hints();
        let version = format!("v{} ", VERSION);

        // Pad by char count, not bytes: hints contain box-drawing glyphs.
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        // Hints win over the version on narrow terminals.
        let line = if hints_width + version_width <= content_width {
            Line::from(vec![
                Span::styled(hints, text_style),
                Span::styled(" ".repeat(padding), text_style),
                Span::styled(version, text_style),
            ])
        } else {
            Line::from(Span::styled(hints, text_style))
        };

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use ratatui::buffer::Buffer;
    use ratatui::widgets::Widget;

    #[test]
    fn summarizer_hints_mention_submit() {
        assert!(Footer::new(Pane::Summarizer).hints().contains("Enter: Send"));
        assert!(!Footer::new(Pane::About).hints().contains("Enter: Send"));
    }

    #[test]
    fn quit_hint_fits_eighty_columns() {
        for pane in Pane::ALL {
            let area = Rect::new(0, 0, 80, 3);
            let mut buffer = Buffer::empty(area);
            Footer::new(pane).widget(area).render(area, &mut buffer);

            let row: String = (0..area.width)
                .map(|x| buffer[(x, 1)].symbol().to_string())
                .collect();
            assert!(row.contains("Quit"), "quit hint cut off on {:?}: {}", pane, row);
        }
    }
}
