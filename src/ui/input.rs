use crate::ui::app::App;
use crate::ui::router::{Pane, RouterIntent};
use crate::ui::summarizer::SummarizerIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    // Navigation works from every pane.
    match key.code {
        KeyCode::Tab => {
            app.navigate(RouterIntent::Next);
            return;
        }
        KeyCode::BackTab => {
            app.navigate(RouterIntent::Previous);
            return;
        }
        KeyCode::F(n) => {
            if let Some(pane) = (n as usize).checked_sub(1).and_then(Pane::from_index) {
                app.navigate(RouterIntent::Select(pane));
            }
            return;
        }
        _ => {}
    }

    if app.active_pane() == Pane::Summarizer {
        handle_summarizer_key(app, key);
    }
}

fn handle_summarizer_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter if key.modifiers.intersects(KeyModifiers::ALT | KeyModifiers::SHIFT) => {
            app.edit(SummarizerIntent::Newline);
        }
        KeyCode::Enter => {
            app.submit();
        }
        KeyCode::Backspace => app.edit(SummarizerIntent::Backspace),
        KeyCode::Up | KeyCode::Left => app.edit(SummarizerIntent::PreviousLength),
        KeyCode::Down | KeyCode::Right => app.edit(SummarizerIntent::NextLength),
        KeyCode::PageUp => app.page_result_up(),
        KeyCode::PageDown => app.page_result_down(),
        KeyCode::Char(_) if is_ctrl_char(key, 'u') => app.edit(SummarizerIntent::ClearInput),
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.edit(SummarizerIntent::InsertChar(ch));
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&ch))
}
