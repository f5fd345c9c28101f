//! Entering and leaving TUI mode.

use crossterm::{
    cursor::Show,
    event::{
        DisableBracketedPaste, EnableBracketedPaste, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Alternate screen plus bracketed paste. Keyboard enhancement flags are
/// pushed best-effort; terminals without the Kitty protocol ignore them.
pub fn enter_tui_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    execute!(writer, EnterAlternateScreen, EnableBracketedPaste)?;
    let _ = execute!(
        writer,
        PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
    );
    Ok(())
}

/// Undo [`enter_tui_mode`] and raw mode. Never fails; safe to call twice.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = execute!(writer, PopKeyboardEnhancementFlags);
    let _ = disable_raw_mode();
    let _ = execute!(writer, DisableBracketedPaste, LeaveAlternateScreen);
    // Some terminals keep the Kitty flags after leaving the alternate screen
    let _ = write!(writer, "\x1b[=0u");
    let _ = writer.flush();
    let _ = execute!(writer, Show);
}
