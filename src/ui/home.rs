//! Home and Search tabs: hero stats, search box, category chips and the
//! healer list.

use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Focus};
use crate::catalog::{CATEGORIES, GLOBAL_STATS};
use crate::ui::helpers::{healer_card, CARD_HEIGHT};
use crate::ui::layout::{scroll_offset, LayoutContext};
use crate::ui::theme::Palette;

pub fn render_home(frame: &mut Frame, area: Rect, app: &App, palette: &Palette, show_hero: bool) {
    let ctx = LayoutContext::from_rect(area);
    let hero_height = if show_hero && ctx.show_hero() { 4 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(hero_height),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    if hero_height > 0 {
        render_hero(frame, chunks[0], palette);
    }
    render_search(frame, chunks[1], app, palette);
    render_categories(frame, chunks[2], app, palette);

    let healers = app.filtered_healers();
    let summary = Line::from(vec![
        Span::styled(format!("{} guides", healers.len()), palette.dim_style()),
        Span::styled(" · ", palette.dim_style()),
        Span::styled(
            format!("{} online now", app.online_count()),
            Style::default().fg(palette.online),
        ),
    ]);
    frame.render_widget(Paragraph::new(summary), chunks[3]);

    render_healer_list(frame, chunks[4], app, &healers, palette, "No guides match your search.");
}

fn render_hero(frame: &mut Frame, area: Rect, palette: &Palette) {
    let stat = |value: String, label: &'static str| {
        vec![
            Span::styled(value, Style::default().fg(palette.text).add_modifier(Modifier::BOLD)),
            Span::styled(format!(" {}    ", label), palette.dim_style()),
        ]
    };
    let mut stats = Vec::new();
    stats.extend(stat(GLOBAL_STATS.active_sessions.to_string(), "Active Sessions"));
    stats.extend(stat(GLOBAL_STATS.countries_online.to_string(), "Nations Live"));
    stats.extend(stat(GLOBAL_STATS.healers_available.to_string(), "Healers"));

    let lines = vec![
        Line::from(Span::styled(
            "✦ LIVE UNIVERSAL ENERGY PULSE",
            Style::default().fg(palette.accent_alt).add_modifier(Modifier::BOLD),
        )),
        Line::from(stats),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.accent_alt));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_search(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let focused = app.focus == Focus::Search && app.detail.is_none();
    let border = if focused { palette.accent } else { palette.border };
    let content = if app.search.is_empty() && !focused {
        Line::from(Span::styled("Search by name, specialty or country  [/]", palette.dim_style()))
    } else {
        Line::from(Span::styled(app.search.as_str().to_string(), Style::default().fg(palette.text)))
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .title(Span::styled(" ⌕ ", palette.dim_style()));
    let inner = block.inner(area);
    frame.render_widget(Paragraph::new(content).block(block), area);

    if focused && app.session.is_none() {
        frame.set_cursor_position(Position::new(
            inner.x + app.search.cursor_column().min(inner.width.saturating_sub(1)),
            inner.y,
        ));
    }
}

fn render_categories(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let mut spans = vec![Span::styled("‹h ", palette.dim_style())];
    for (index, category) in CATEGORIES.iter().enumerate() {
        let style = if index == app.category_index {
            Style::default()
                .fg(palette.background)
                .bg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            palette.dim_style()
        };
        spans.push(Span::styled(format!(" {} ", category), style));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled("l›", palette.dim_style()));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Scrolling list of healer cards with the app selection highlighted.
pub fn render_healer_list(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    healers: &[crate::models::HealerProfile],
    palette: &Palette,
    empty_message: &str,
) {
    if healers.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(empty_message.to_string(), palette.dim_style()))),
            area,
        );
        return;
    }

    let visible = LayoutContext::visible_items(area.height, CARD_HEIGHT).max(1);
    let offset = scroll_offset(app.selected, visible);
    let lines: Vec<Line> = healers
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .flat_map(|(index, healer)| {
            healer_card(
                healer,
                index == app.selected,
                app.is_favorite(&healer.id),
                area.width as usize,
                palette,
            )
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}
