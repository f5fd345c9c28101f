//! Call screen for a live session.

use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, Focus};
use crate::models::{SessionMode, TranscriptRole};
use crate::session::{Session, SessionPhase};
use crate::ui::components::{render_status_indicator, StatusIndicator};
use crate::ui::helpers::{key_hint, truncate, wrap_text};
use crate::ui::theme::Palette;

pub fn render_session(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let Some(session) = app.session.as_ref() else {
        return;
    };
    frame.render_widget(Clear, area);
    frame.render_widget(Block::default().style(palette.base()), area);

    if session.phase() == SessionPhase::Connecting {
        render_connecting(frame, area, session, app.tick_count, palette);
        return;
    }

    let chat_height = if session.is_chat_open() { Constraint::Min(6) } else { Constraint::Length(0) };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(if session.is_chat_open() { 3 } else { 6 }),
            chat_height,
            Constraint::Length(if session.is_chat_open() { 3 } else { 0 }),
            Constraint::Length(1),
        ])
        .split(area);

    render_call_header(frame, chunks[0], session, palette);
    render_self_view(frame, chunks[1], session, palette);
    if session.is_chat_open() {
        render_transcript(frame, chunks[2], session, app.tick_count, palette);
        render_chat_input(frame, chunks[3], app, palette);
    }
    render_controls(frame, chunks[4], session, app.focus, palette);
}

fn render_connecting(frame: &mut Frame, area: Rect, session: &Session, tick: u64, palette: &Palette) {
    let healer = session.healer();
    let lines = vec![
        Line::from(""),
        render_status_indicator(&StatusIndicator::spinner("Syncing Universal Energy"), tick, palette),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "Securing your cross-border connection with {} in {}...",
                healer.name, healer.location
            ),
            palette.dim_style(),
        )),
    ];
    let y = area.y + area.height / 3;
    let target = Rect::new(area.x, y, area.width, 4.min(area.height.saturating_sub(y - area.y)));
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(ratatui::layout::Alignment::Center)
            .wrap(Wrap { trim: true }),
        target,
    );
}

fn render_call_header(frame: &mut Frame, area: Rect, session: &Session, palette: &Palette) {
    let healer = session.healer();
    let lines = vec![
        Line::from(vec![
            Span::styled(healer.name.clone(), palette.heading()),
            Span::styled(format!("  {} session", session.mode()), palette.dim_style()),
        ]),
        Line::from(vec![
            Span::styled("● ", Style::default().fg(palette.debit)),
            Span::styled(
                session.elapsed_label(),
                Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("   {} so far · {}/min", session.running_cost(), healer.price_per_minute),
                palette.dim_style(),
            ),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_self_view(frame: &mut Frame, area: Rect, session: &Session, palette: &Palette) {
    let mut spans = Vec::new();
    if session.capture_unavailable() {
        spans.push(Span::styled("Devices unavailable · ", Style::default().fg(palette.warning)));
    }
    match session.mode() {
        SessionMode::Video => {
            let (label, color) = if session.is_camera_off() {
                ("Camera off", palette.offline)
            } else {
                ("Camera on", palette.online)
            };
            spans.push(Span::styled(label, Style::default().fg(color)));
            spans.push(Span::raw("  "));
        }
        SessionMode::Voice | SessionMode::Text => {}
    }
    if session.mode() != SessionMode::Text {
        let (label, color) = if session.is_muted() {
            ("Muted", palette.debit)
        } else {
            ("Mic live", palette.online)
        };
        spans.push(Span::styled(label, Style::default().fg(color)));
    } else {
        spans.push(Span::styled("Text only", palette.dim_style()));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border))
        .title(Span::styled(" You ", palette.dim_style()));
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_transcript(frame: &mut Frame, area: Rect, session: &Session, tick: u64, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border))
        .title(Span::styled(" Chat ", palette.dim_style()));
    let inner = block.inner(area);
    let width = inner.width as usize;

    // Rows are pre-wrapped so the scroll offset counts what is drawn
    let healer_name = session.healer().name.clone();
    let mut lines: Vec<Line> = Vec::new();
    for message in session.transcript() {
        let (who, style) = match message.role {
            TranscriptRole::User => ("You".to_string(), palette.accent_style()),
            TranscriptRole::Persona => (healer_name.clone(), palette.heading()),
        };
        lines.push(Line::from(Span::styled(truncate(&who, width), style)));
        for row in wrap_text(&message.text, width) {
            lines.push(Line::from(Span::styled(row, Style::default().fg(palette.text))));
        }
        lines.push(Line::from(""));
    }
    if session.is_composing() {
        lines.push(render_status_indicator(
            &StatusIndicator::spinner(format!("{} is reflecting...", healer_name)),
            tick,
            palette,
        ));
    }

    let overflow = lines.len().saturating_sub(inner.height as usize);
    let overflow = u16::try_from(overflow).unwrap_or(u16::MAX);
    frame.render_widget(Paragraph::new(lines).block(block).scroll((overflow, 0)), area);
}

fn render_chat_input(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let focused = app.focus == Focus::Chat;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused { palette.accent } else { palette.border }));
    let inner = block.inner(area);
    let content = if app.input.is_empty() {
        Span::styled("Share what is on your mind...", palette.dim_style())
    } else {
        Span::styled(app.input.as_str().to_string(), Style::default().fg(palette.text))
    };
    frame.render_widget(Paragraph::new(Line::from(content)).block(block), area);
    if focused {
        frame.set_cursor_position(Position::new(
            inner.x + app.input.cursor_column().min(inner.width.saturating_sub(1)),
            inner.y,
        ));
    }
}

fn render_controls(frame: &mut Frame, area: Rect, session: &Session, focus: Focus, palette: &Palette) {
    let mut spans = Vec::new();
    if focus == Focus::Chat {
        spans.extend(key_hint("enter", "send", palette));
        spans.extend(key_hint("esc", "controls", palette));
    } else {
        if session.mode() != SessionMode::Text {
            spans.extend(key_hint("m", if session.is_muted() { "unmute" } else { "mute" }, palette));
        }
        if session.mode() == SessionMode::Video {
            spans.extend(key_hint("c", "camera", palette));
        }
        spans.extend(key_hint("t", "chat", palette));
    }
    spans.extend(key_hint("ctrl+e", "end session", palette));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use ratatui::{backend::TestBackend, Terminal};

    use crate::adapters::{InMemoryStore, MockGenerator};
    use crate::app::{AppDeps, AppMessage};
    use crate::capture::SimulatedCaptureDevice;
    use crate::config::AppConfig;
    use crate::models::HealerId;
    use crate::ui::theme::DARK;

    fn screen(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| render_session(f, f.area(), app, &DARK))
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[tokio::test]
    async fn test_latest_reply_visible_after_long_wrapped_replies() {
        let deps = AppDeps {
            generator: Arc::new(MockGenerator::new()),
            capture: Arc::new(SimulatedCaptureDevice),
            store: Arc::new(InMemoryStore::new()),
        };
        let mut app = App::with_deps(AppConfig::default(), deps);
        app.start_session(&HealerId::new("h1"), SessionMode::Text);
        let id = app.session.as_ref().unwrap().id();
        app.handle_message(AppMessage::SessionConnected { session: id });

        let long = format!("{} ENDMARK", vec!["serenity"; 60].join(" "));
        let session = app.session.as_mut().unwrap();
        for (question, reply) in [("one", long.as_str()), ("two", long.as_str()), ("three", "LASTREPLY")] {
            session.submit(question).unwrap();
            session.apply_reply(reply);
        }

        let s = screen(&app, 40, 24);
        assert!(s.contains("three"), "latest user line not visible");
        assert!(s.contains("LASTREPLY"), "latest reply not visible");
    }
}
