//! Status Indicator Component
//!
//! Spinner and success lines used by the connecting screen, the billing
//! processing step and the composing indicator.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::ui::theme::Palette;

/// Spinner animation frames
const SPINNER_FRAMES: [char; 4] = ['◐', '◓', '◑', '◒'];

/// App ticks per spinner frame
const TICKS_PER_FRAME: u64 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusIndicator {
    Spinner { message: String },
    Success { message: String },
}

impl StatusIndicator {
    pub fn spinner(message: impl Into<String>) -> Self {
        Self::Spinner {
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::Success {
            message: message.into(),
        }
    }
}

/// Spinner glyph for the given app tick.
pub fn spinner_char(tick: u64) -> char {
    SPINNER_FRAMES[((tick / TICKS_PER_FRAME) % SPINNER_FRAMES.len() as u64) as usize]
}

pub fn render_status_indicator(indicator: &StatusIndicator, tick: u64, palette: &Palette) -> Line<'static> {
    match indicator {
        StatusIndicator::Spinner { message } => Line::from(vec![
            Span::styled(format!("{} ", spinner_char(tick)), palette.accent_style()),
            Span::styled(message.clone(), Style::default().fg(palette.text)),
        ]),
        StatusIndicator::Success { message } => Line::from(vec![
            Span::styled(
                "✓ ",
                Style::default().fg(palette.credit).add_modifier(Modifier::BOLD),
            ),
            Span::styled(message.clone(), palette.heading()),
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::DARK;

    #[test]
    fn test_spinner_cycles() {
        assert_eq!(spinner_char(0), '◐');
        assert_eq!(spinner_char(2), '◓');
        assert_eq!(spinner_char(8), '◐');
    }

    #[test]
    fn test_render_spinner_text() {
        let line = render_status_indicator(&StatusIndicator::spinner("Connecting"), 0, &DARK);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "◐ Connecting");
    }

    #[test]
    fn test_render_success_text() {
        let line = render_status_indicator(&StatusIndicator::success("Done"), 0, &DARK);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "✓ Done");
    }
}
