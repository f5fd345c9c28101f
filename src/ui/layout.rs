//! Responsive Layout System
//!
//! `LayoutContext` wraps the terminal dimensions and answers the sizing
//! questions render functions need: how wide a dialog may be, how many
//! cards fit, whether to drop secondary columns.

use ratatui::layout::Rect;

// ============================================================================
// Screen Size Breakpoints
// ============================================================================

/// Terminal size breakpoints
pub mod breakpoints {
    /// Extra small terminal (< 60 columns)
    pub const XS_WIDTH: u16 = 60;
    /// Small terminal (< 80 columns)
    pub const SM_WIDTH: u16 = 80;
    /// Extra small terminal height (< 16 rows)
    pub const XS_HEIGHT: u16 = 16;
    /// Small terminal height (< 24 rows)
    pub const SM_HEIGHT: u16 = 24;
}

// ============================================================================
// Layout Context
// ============================================================================

/// Terminal dimensions for responsive calculations.
///
/// ```ignore
/// let ctx = LayoutContext::from_rect(frame.area());
/// if ctx.is_narrow() {
///     // single-column cards
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutContext {
    pub width: u16,
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn from_rect(area: Rect) -> Self {
        Self::new(area.width, area.height)
    }

    /// A width as a percentage of terminal width, minimum 1.
    pub fn percent_width(&self, percentage: u16) -> u16 {
        ((self.width as u32 * percentage as u32) / 100).max(1) as u16
    }

    /// Proportional width clamped into `min..=max`.
    pub fn bounded_width(&self, percentage: u16, min: u16, max: u16) -> u16 {
        self.percent_width(percentage).clamp(min, max)
    }

    /// Less than 80 columns.
    pub fn is_narrow(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    /// Less than 24 rows.
    pub fn is_short(&self) -> bool {
        self.height < breakpoints::SM_HEIGHT
    }

    pub fn is_compact(&self) -> bool {
        self.is_narrow() || self.is_short()
    }

    pub fn is_extra_small(&self) -> bool {
        self.width < breakpoints::XS_WIDTH || self.height < breakpoints::XS_HEIGHT
    }

    /// Whether the home hero banner has room.
    pub fn show_hero(&self) -> bool {
        !self.is_short()
    }

    /// How many items of `item_height` rows fit in `available` rows.
    pub fn visible_items(available: u16, item_height: u16) -> usize {
        if item_height == 0 {
            return 0;
        }
        (available / item_height) as usize
    }
}

/// First index to draw so that `selected` stays inside a window of `visible`.
pub fn scroll_offset(selected: usize, visible: usize) -> usize {
    if visible == 0 {
        return 0;
    }
    selected.saturating_sub(visible - 1)
}

/// A `width` x `height` rect centered in `area`, clamped to fit.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_width() {
        let ctx = LayoutContext::new(100, 40);
        assert_eq!(ctx.percent_width(50), 50);
        assert_eq!(LayoutContext::new(1, 1).percent_width(10), 1);
        assert_eq!(LayoutContext::new(200, 40).bounded_width(30, 20, 50), 50);
    }

    #[test]
    fn test_size_states() {
        assert!(LayoutContext::new(70, 30).is_narrow());
        assert!(LayoutContext::new(100, 20).is_compact());
        assert!(LayoutContext::new(50, 30).is_extra_small());
        assert!(!LayoutContext::new(100, 30).is_compact());
        assert!(!LayoutContext::new(100, 20).show_hero());
    }

    #[test]
    fn test_visible_items_and_scroll() {
        assert_eq!(LayoutContext::visible_items(20, 4), 5);
        assert_eq!(LayoutContext::visible_items(20, 0), 0);
        assert_eq!(scroll_offset(2, 5), 0);
        assert_eq!(scroll_offset(7, 5), 3);
        assert_eq!(scroll_offset(3, 0), 0);
    }

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_rect(area, 40, 10), Rect::new(30, 15, 40, 10));
        assert_eq!(centered_rect(area, 200, 80), area);
    }
}
