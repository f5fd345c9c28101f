//! Me tab: wallet and recent activity.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::models::TransactionKind;
use crate::ui::helpers::{key_hint, truncate};
use crate::ui::theme::Palette;
use crate::wallet::RECENT_LIMIT;

pub fn render_profile(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(app.user.name.clone(), palette.heading()),
            Span::styled(format!("  @{}", app.user.id), palette.dim_style()),
        ]),
        Line::from(""),
        Line::from(Span::styled("WALLET BALANCE", palette.dim_style())),
        Line::from(Span::styled(
            app.wallet.balance().to_string(),
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(key_hint("b", "top up", palette)),
        Line::from(""),
        Line::from(Span::styled("Recent activity", palette.heading())),
    ];

    let recent = app.wallet.recent(RECENT_LIMIT);
    if recent.is_empty() {
        lines.push(Line::from(Span::styled("No transactions yet.", palette.dim_style())));
    }
    let width = area.width.saturating_sub(16) as usize;
    for tx in recent {
        let (arrow, color) = match tx.kind {
            TransactionKind::Credit => ("↓ ", palette.credit),
            TransactionKind::Debit => ("↑ ", palette.debit),
        };
        lines.push(Line::from(vec![
            Span::styled(arrow, Style::default().fg(color)),
            Span::styled(
                format!("{:<w$}", truncate(&tx.description, width.saturating_sub(10)), w = width.saturating_sub(10)),
                Style::default().fg(palette.text),
            ),
            Span::styled(format!("{:>10}", tx.display_amount()), Style::default().fg(color)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", tx.created_at.format("%b %d, %H:%M")),
            palette.dim_style(),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(key_hint(
        "d",
        if app.theme.is_dark() { "light mode" } else { "dark mode" },
        palette,
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
