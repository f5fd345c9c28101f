//! Top-up modal.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::billing::{BillingFlow, BillingStep, PLANS};
use crate::ui::components::{render_dialog_frame, render_status_indicator, DialogFrameConfig, StatusIndicator};
use crate::ui::helpers::key_hint;
use crate::ui::theme::Palette;

pub fn render_billing(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let Some(flow) = app.billing.as_ref() else {
        return;
    };
    let lines = match flow.step() {
        BillingStep::Selection => selection_lines(flow, palette),
        BillingStep::Processing => vec![
            Line::from(""),
            render_status_indicator(&StatusIndicator::spinner("Processing payment..."), app.tick_count, palette),
            Line::from(""),
            Line::from(Span::styled(
                "Securing your transaction with the sanctuary.",
                palette.dim_style(),
            )),
        ],
        BillingStep::Success => {
            let plan = flow.selected();
            let mut hints = Vec::new();
            hints.extend(key_hint("enter", "return to sanctuary", palette));
            vec![
                Line::from(""),
                render_status_indicator(&StatusIndicator::success("Energy Replenished"), app.tick_count, palette),
                Line::from(""),
                Line::from(Span::styled(
                    format!("{} has been added to your wallet.", plan.credit()),
                    Style::default().fg(palette.text),
                )),
                Line::from(""),
                Line::from(hints),
            ]
        }
    };

    let config = DialogFrameConfig::new("Top Up Wallet", lines.len() as u16).min_width(40);
    let inner = render_dialog_frame(frame, area, palette, &config);
    frame.render_widget(Paragraph::new(lines), inner);
}

fn selection_lines(flow: &BillingFlow, palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from("")];
    for (index, plan) in PLANS.iter().enumerate() {
        let selected = index == flow.selected_index();
        let marker = if selected { "◉ " } else { "○ " };
        let name_style = if selected { palette.selected() } else { Style::default().fg(palette.text) };
        let mut spans = vec![
            Span::styled(marker, palette.accent_style()),
            Span::styled(format!("{:<14}", plan.name), name_style),
            Span::styled(format!("{:>8}", plan.amount.to_string()), palette.heading()),
        ];
        if !plan.bonus.is_zero() {
            spans.push(Span::styled(
                format!("  +{} bonus", plan.bonus),
                Style::default().fg(palette.credit),
            ));
        }
        if plan.popular {
            spans.push(Span::styled(
                "  POPULAR",
                Style::default().fg(palette.accent_alt).add_modifier(Modifier::BOLD),
            ));
        }
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Payments are simulated. No card is charged.",
        palette.dim_style(),
    )));
    lines.push(Line::from(""));
    let mut hints = Vec::new();
    hints.extend(key_hint("j/k", "choose", palette));
    hints.extend(key_hint("enter", format!("pay {}", flow.selected().amount).as_str(), palette));
    hints.extend(key_hint("esc", "close", palette));
    lines.push(Line::from(hints));
    lines
}
