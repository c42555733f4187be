use crossterm::tty::IsTty;
use crossterm::{execute, terminal, ExecutableCommand};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::error::{AppError, Result};

/// Fail fast when the process has no interactive terminal to render into.
/// Runs before any data file is touched.
pub fn ensure_interactive_terminal() -> Result<()> {
    if !std::io::stdout().is_tty() {
        return Err(AppError::message(
            "no interactive terminal detected. txn-insights renders with ratatui and \
             needs a TTY in raw mode; run it from a terminal emulator.",
        ));
    }
    Ok(())
}

/// RAII wrapper around raw mode and the alternate screen. Restores the
/// terminal on drop no matter how the owning screen exits.
pub struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<std::io::Stdout>>,
    restored: bool,
}

impl TerminalGuard {
    pub fn new() -> Result<Self> {
        terminal::enable_raw_mode()?;
        let mut stdout = std::io::stdout();
        execute!(stdout, terminal::EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;
        Ok(Self {
            terminal,
            restored: false,
        })
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<std::io::Stdout>> {
        &mut self.terminal
    }

    pub fn restore(&mut self) -> Result<()> {
        if !self.restored {
            self.terminal.show_cursor()?;
            self.terminal
                .backend_mut()
                .execute(terminal::LeaveAlternateScreen)?;
            terminal::disable_raw_mode()?;
            self.restored = true;
        }
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}
