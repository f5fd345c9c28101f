//! UI rendering for SoulStream
//!
//! Layout, top to bottom:
//! - Header with the brand and wallet balance
//! - The active tab (Home, Search, Chat, Me)
//! - Bottom tab bar and a contextual key-hint line
//!
//! Overlays (healer detail, billing, session summary) draw over the tab;
//! a live session takes the whole screen.
//!
//! All render functions take `&App` and a [`theme::Palette`] chosen from the
//! app's theme.

mod billing;
pub mod components;
mod detail;
mod helpers;
mod home;
pub mod layout;
mod profile;
mod session;
mod sessions;
mod summary;
pub mod theme;

pub use layout::LayoutContext;
pub use theme::{palette, Palette, DARK, LIGHT};

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::app::{App, Focus, Overlay, Tab};
use helpers::key_hint;

// ============================================================================
// Main UI Rendering
// ============================================================================

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let palette = palette(app.theme);
    frame.render_widget(Block::default().style(palette.base()), area);

    if app.overlay() == Overlay::Session {
        session::render_session(frame, area, app, palette);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(frame, chunks[0], app, palette);
    let body = inset(chunks[1]);
    match app.tab {
        Tab::Home => home::render_home(frame, body, app, palette, true),
        Tab::Search => home::render_home(frame, body, app, palette, false),
        Tab::Sessions => sessions::render_sessions(frame, body, app, palette),
        Tab::Profile => profile::render_profile(frame, body, app, palette),
    }
    render_tab_bar(frame, chunks[2], app, palette);
    render_hints(frame, chunks[3], app, palette);

    match app.overlay() {
        Overlay::Detail => detail::render_detail(frame, area, app, palette),
        Overlay::Billing => billing::render_billing(frame, area, app, palette),
        Overlay::Summary => summary::render_summary(frame, area, app, palette),
        Overlay::Session | Overlay::None => {}
    }
}

fn inset(area: Rect) -> Rect {
    Rect {
        x: area.x + 1,
        y: area.y,
        width: area.width.saturating_sub(2),
        height: area.height,
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(20)])
        .split(area);

    let brand = Line::from(vec![
        Span::styled(" ✦ SoulStream", Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)),
        Span::styled("  Global Healing", palette.dim_style()),
    ]);
    frame.render_widget(Paragraph::new(brand), chunks[0]);

    let balance = Line::from(vec![
        Span::styled("◈ ", Style::default().fg(palette.accent_alt)),
        Span::styled(app.wallet.balance().to_string(), palette.heading()),
        Span::raw(" "),
    ]);
    frame.render_widget(
        Paragraph::new(balance).alignment(ratatui::layout::Alignment::Right),
        chunks[1],
    );
}

fn render_tab_bar(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let mut spans = vec![Span::raw(" ")];
    for (index, tab) in Tab::ALL.iter().enumerate() {
        let style = if *tab == app.tab {
            Style::default()
                .fg(palette.background)
                .bg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            palette.dim_style()
        };
        spans.push(Span::styled(format!(" {} {} ", index + 1, tab.label()), style));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_hints(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    if let Some(status) = &app.status {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!(" {}", status),
                Style::default().fg(palette.warning),
            ))),
            area,
        );
        return;
    }

    let mut spans = vec![Span::raw(" ")];
    if app.focus == Focus::Search {
        spans.extend(key_hint("enter", "done", palette));
        spans.extend(key_hint("esc", "back", palette));
    } else {
        spans.extend(key_hint("j/k", "move", palette));
        spans.extend(key_hint("enter", "profile", palette));
        spans.extend(key_hint("v/a/t", "start", palette));
        spans.extend(key_hint("f", "favorite", palette));
        spans.extend(key_hint("/", "search", palette));
        spans.extend(key_hint("b", "top up", palette));
        spans.extend(key_hint("q", "quit", palette));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
