//! Healer detail overlay.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::models::HealerProfile;
use crate::ui::components::{render_dialog_frame, DialogFrameConfig};
use crate::ui::helpers::{key_hint, rating_label, star_bar};
use crate::ui::theme::Palette;

pub fn render_detail(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let Some(healer) = app.detail.as_ref().and_then(|id| app.healer(id)) else {
        return;
    };
    let config = DialogFrameConfig::new(&healer.name, area.height.saturating_sub(4).min(22))
        .min_width(40)
        .max_width(76);
    let inner = render_dialog_frame(frame, area, palette, &config);

    let lines = detail_lines(&healer, app, palette);
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn detail_lines(healer: &HealerProfile, app: &App, palette: &Palette) -> Vec<Line<'static>> {
    let favorite = app.is_favorite(&healer.id);
    let (status, status_style) = if healer.is_online {
        ("● Online now", Style::default().fg(palette.online))
    } else {
        ("○ Currently away", Style::default().fg(palette.offline))
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(healer.specialty.clone(), palette.accent_style()),
            Span::raw("  "),
            Span::styled(status, status_style),
        ]),
        Line::from(vec![
            Span::styled("★ ", Style::default().fg(palette.star)),
            Span::raw(rating_label(healer)),
            Span::styled(format!("   {}/min", healer.price_per_minute), palette.heading()),
            Span::styled(format!("   {}", healer.location), palette.dim_style()),
        ]),
        Line::from(Span::styled(
            format!("Speaks {}", healer.languages.join(", ")),
            palette.dim_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(healer.full_bio.clone(), Style::default().fg(palette.text))),
        Line::from(""),
        Line::from(Span::styled(
            format!("Practices: {}", healer.categories.join(" · ")),
            palette.dim_style(),
        )),
    ];

    if healer.intro_video.is_some() {
        lines.push(Line::from(Span::styled("▶ Intro video available", palette.dim_style())));
    }

    let reviews = app.reviews_for(&healer.id);
    if !reviews.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Your reviews", palette.heading())));
        for review in reviews.iter().rev().take(3) {
            lines.push(Line::from(vec![
                Span::styled(star_bar(review.rating), Style::default().fg(palette.star)),
                Span::raw(" "),
                Span::styled(review.comment.clone(), Style::default().fg(palette.text)),
            ]));
        }
    }

    lines.push(Line::from(""));
    let mut hints = Vec::new();
    hints.extend(key_hint("v", "video", palette));
    hints.extend(key_hint("a", "voice", palette));
    hints.extend(key_hint("t", "text", palette));
    hints.extend(key_hint("f", if favorite { "unfavorite" } else { "favorite" }, palette));
    hints.extend(key_hint("esc", "back", palette));
    lines.push(Line::from(hints));
    if favorite {
        lines.push(Line::from(Span::styled(
            "♥ In your favorites",
            Style::default().fg(palette.favorite).add_modifier(Modifier::ITALIC),
        )));
    }
    lines
}
