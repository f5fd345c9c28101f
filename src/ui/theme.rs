//! Color palettes for the SoulStream UI
//!
//! Two palettes, selected by [`Theme`]. Render functions take a
//! `&Palette` rather than reaching for global colors.

use ratatui::style::{Color, Modifier, Style};

use crate::models::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub border: Color,
    pub text: Color,
    pub dim: Color,
    /// Brand indigo for highlights and the selection bar
    pub accent: Color,
    /// Hero banner and popular-plan badge
    pub accent_alt: Color,
    pub online: Color,
    pub offline: Color,
    pub credit: Color,
    pub debit: Color,
    pub star: Color,
    pub favorite: Color,
    pub warning: Color,
}

// ============================================================================
// Palettes
// ============================================================================

pub const DARK: Palette = Palette {
    background: Color::Rgb(15, 23, 42),
    surface: Color::Rgb(30, 41, 59),
    border: Color::Rgb(51, 65, 85),
    text: Color::Rgb(241, 245, 249),
    dim: Color::Rgb(148, 163, 184),
    accent: Color::Rgb(129, 140, 248),
    accent_alt: Color::Rgb(168, 85, 247),
    online: Color::Rgb(34, 197, 94),
    offline: Color::Rgb(100, 116, 139),
    credit: Color::Rgb(52, 211, 153),
    debit: Color::Rgb(248, 113, 113),
    star: Color::Rgb(250, 204, 21),
    favorite: Color::Rgb(244, 63, 94),
    warning: Color::Rgb(251, 191, 36),
};

pub const LIGHT: Palette = Palette {
    background: Color::Rgb(248, 250, 252),
    surface: Color::Rgb(255, 255, 255),
    border: Color::Rgb(203, 213, 225),
    text: Color::Rgb(30, 41, 59),
    dim: Color::Rgb(100, 116, 139),
    accent: Color::Rgb(79, 70, 229),
    accent_alt: Color::Rgb(126, 34, 206),
    online: Color::Rgb(22, 163, 74),
    offline: Color::Rgb(148, 163, 184),
    credit: Color::Rgb(5, 150, 105),
    debit: Color::Rgb(220, 38, 38),
    star: Color::Rgb(202, 138, 4),
    favorite: Color::Rgb(225, 29, 72),
    warning: Color::Rgb(217, 119, 6),
};

pub fn palette(theme: Theme) -> &'static Palette {
    match theme {
        Theme::Dark => &DARK,
        Theme::Light => &LIGHT,
    }
}

impl Palette {
    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn dim_style(&self) -> Style {
        Style::default().fg(self.dim)
    }

    pub fn heading(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::BOLD)
    }

    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn selected(&self) -> Style {
        Style::default().fg(self.text).bg(self.surface).add_modifier(Modifier::BOLD)
    }
}
