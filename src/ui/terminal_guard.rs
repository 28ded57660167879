use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use parking_lot::Mutex;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::Arc;

/// Restores the terminal exactly once: on drop or on panic, whichever
/// comes first.
pub struct TerminalGuard {
    armed: Arc<Mutex<bool>>,
}

impl TerminalGuard {
    fn arm() -> Self {
        let armed = Arc::new(Mutex::new(true));

        let hook_armed = Arc::clone(&armed);
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            restore_once(&hook_armed);
            default_hook(info);
        }));

        Self { armed }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_once(&self.armed);
    }
}

fn restore_once(armed: &Mutex<bool>) {
    let mut armed = armed.lock();
    if !*armed {
        return;
    }
    *armed = false;

    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = stdout.execute(DisableBracketedPaste);
    let _ = stdout.execute(LeaveAlternateScreen);
    let _ = stdout.execute(Show);
}

pub fn setup_terminal() -> io::Result<(Terminal<CrosstermBackend<Stdout>>, TerminalGuard)> {
    enable_raw_mode()?;
    // Armed before anything else can fail so raw mode is always undone.
    let guard = TerminalGuard::arm();

    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableBracketedPaste)?;
    stdout.execute(Hide)?;

    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok((terminal, guard))
}
