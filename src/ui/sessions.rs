//! Chat tab: favorite guides and the last session.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::ui::home::render_healer_list;
use crate::ui::theme::Palette;

pub fn render_sessions(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    let last = match &app.last_session {
        Some(outcome) => Line::from(vec![
            Span::styled("Last session  ", palette.dim_style()),
            Span::styled(outcome.healer.name.clone(), palette.heading()),
            Span::styled(
                format!("  {} · {}", crate::session::format_elapsed(outcome.elapsed_secs), outcome.cost),
                Style::default().fg(palette.text),
            ),
        ]),
        None => Line::from(Span::styled("No sessions yet. Start one from a guide's profile.", palette.dim_style())),
    };
    frame.render_widget(
        Paragraph::new(vec![Line::from(""), last]),
        chunks[0],
    );

    let favorites = app.favorite_healers();
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("♥ Favorite guides ({})", favorites.len()),
            Style::default().fg(palette.favorite),
        ))),
        chunks[1],
    );
    render_healer_list(
        frame,
        chunks[2],
        app,
        &favorites,
        palette,
        "Tap [f] on any guide to keep them here.",
    );
}
