//! Post-session summary with the review form.

use ratatui::{
    layout::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Focus};
use crate::ui::components::{render_dialog_frame, DialogFrameConfig};
use crate::ui::helpers::{key_hint, star_bar};
use crate::ui::theme::Palette;

pub fn render_summary(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let Some(summary) = app.summary.as_ref() else {
        return;
    };

    let comment = if summary.comment.is_empty() && app.focus != Focus::ReviewComment {
        Span::styled("Type to leave a comment...", palette.dim_style())
    } else {
        Span::styled(format!("“{}”", summary.comment), Style::default().fg(palette.text))
    };

    let mut hints = Vec::new();
    hints.extend(key_hint("↑/↓", "rating", palette));
    hints.extend(key_hint("enter", "submit", palette));
    hints.extend(key_hint("esc", "skip", palette));

    let lines = vec![
        Line::from(Span::styled(
            format!("Your {} session with {}", summary.mode, summary.healer.name),
            palette.dim_style(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Duration  ", palette.dim_style()),
            Span::styled(summary.duration_label(), palette.heading()),
        ]),
        Line::from(vec![
            Span::styled("Total     ", palette.dim_style()),
            Span::styled(summary.cost.to_string(), palette.accent_style()),
        ]),
        Line::from(vec![
            Span::styled("Balance   ", palette.dim_style()),
            Span::styled(app.wallet.balance().to_string(), palette.heading()),
        ]),
        Line::from(""),
        Line::from(Span::styled("How was your energy exchange?", palette.heading())),
        Line::from(Span::styled(star_bar(summary.rating), Style::default().fg(palette.star))),
        Line::from(comment),
        Line::from(""),
        Line::from(hints),
    ];

    let config = DialogFrameConfig::new("Session Complete", lines.len() as u16).min_width(44);
    let inner = render_dialog_frame(frame, area, palette, &config);
    frame.render_widget(Paragraph::new(lines), inner);

    if app.focus == Focus::ReviewComment {
        // Comment line, after the opening quote
        frame.set_cursor_position(Position::new(
            inner.x + 1 + app.input.cursor_column().min(inner.width.saturating_sub(2)),
            inner.y + 8,
        ));
    }
}
