//! Dialog Frame Component
//!
//! A centered, rounded-border modal frame. Clears what is behind it and
//! returns the inner content area.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Clear},
    Frame,
};

use crate::ui::layout::{centered_rect, LayoutContext};
use crate::ui::theme::Palette;

/// Configuration for rendering a dialog frame
#[derive(Debug, Clone)]
pub struct DialogFrameConfig<'a> {
    /// Title displayed in the border
    pub title: &'a str,
    /// Content height (not including borders)
    pub content_height: u16,
    pub min_width: u16,
    pub max_width: u16,
}

impl<'a> DialogFrameConfig<'a> {
    pub fn new(title: &'a str, content_height: u16) -> Self {
        Self {
            title,
            content_height,
            min_width: 30,
            max_width: 60,
        }
    }

    pub fn min_width(mut self, width: u16) -> Self {
        self.min_width = width;
        self
    }

    pub fn max_width(mut self, width: u16) -> Self {
        self.max_width = width;
        self
    }
}

fn dialog_width(ctx: &LayoutContext, config: &DialogFrameConfig) -> u16 {
    if ctx.is_extra_small() {
        ctx.width.saturating_sub(4).min(config.max_width)
    } else if ctx.is_narrow() {
        ctx.bounded_width(80, config.min_width, config.max_width)
    } else {
        ctx.bounded_width(50, config.min_width, config.max_width)
    }
}

/// Render the frame centered in `area` and return its inner area.
pub fn render_dialog_frame(
    frame: &mut Frame,
    area: Rect,
    palette: &Palette,
    config: &DialogFrameConfig,
) -> Rect {
    let ctx = LayoutContext::from_rect(area);
    let dialog = centered_rect(area, dialog_width(&ctx, config), config.content_height + 2);

    frame.render_widget(Clear, dialog);

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", config.title),
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.accent))
        .style(Style::default().bg(palette.surface).fg(palette.text));
    let inner = block.inner(dialog);
    frame.render_widget(block, dialog);
    inner
}
