//! Terminal lifecycle.
//!
//! [`TerminalManager`] puts the terminal into raw/alternate-screen mode and
//! puts it back when dropped. [`install_panic_hook`] covers the panic path,
//! where the manager's `Drop` may never run.

mod panic;
mod setup;

pub use panic::install_panic_hook;
pub use setup::{enter_tui_mode, leave_tui_mode};

use crossterm::terminal::enable_raw_mode;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

use crate::error::Result;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Owns the ratatui terminal and restores the tty on drop.
pub struct TerminalManager {
    terminal: Tui,
    restored: bool,
}

impl TerminalManager {
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        enter_tui_mode(&mut stdout)?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.clear()?;
        Ok(Self {
            terminal,
            restored: false,
        })
    }

    pub fn terminal(&mut self) -> &mut Tui {
        &mut self.terminal
    }

    /// Restore the terminal now. Later calls, including the one from `Drop`, are no-ops.
    pub fn restore(&mut self) -> Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        leave_tui_mode(self.terminal.backend_mut());
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for TerminalManager {
    fn drop(&mut self) {
        if !self.restored {
            self.restored = true;
            leave_tui_mode(&mut io::stdout());
        }
    }
}
