//! Small formatting helpers shared by the screens.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::models::{HealerProfile, StarRating};
use crate::ui::theme::Palette;

/// Rows each healer card occupies, including the spacer line.
pub const CARD_HEIGHT: u16 = 4;

/// Truncate to `max` display columns, appending `…` when cut.
pub fn truncate(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Greedy word wrap to `width` display columns. Words wider than a row are
/// split. Always returns at least one row.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }
    let mut rows = Vec::new();
    let mut row = String::new();
    let mut used = 0;
    for word in text.split_whitespace() {
        let word_width = word.width();
        let gap = usize::from(used > 0);
        if used + gap + word_width <= width {
            if gap == 1 {
                row.push(' ');
            }
            row.push_str(word);
            used += gap + word_width;
            continue;
        }
        if used > 0 {
            rows.push(std::mem::take(&mut row));
            used = 0;
        }
        for c in word.chars() {
            let w = c.width().unwrap_or(0);
            if used + w > width && used > 0 {
                rows.push(std::mem::take(&mut row));
                used = 0;
            }
            row.push(c);
            used += w;
        }
    }
    if used > 0 || rows.is_empty() {
        rows.push(row);
    }
    rows
}

/// `★★★★☆` for a 1..=5 rating.
pub fn star_bar(rating: StarRating) -> String {
    let filled = rating.get() as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// `4.9 (1240)`
pub fn rating_label(healer: &HealerProfile) -> String {
    format!("{:.1} ({})", healer.rating, healer.reviews_count)
}

/// Three-line card plus a blank spacer.
pub fn healer_card(
    healer: &HealerProfile,
    selected: bool,
    favorite: bool,
    width: usize,
    palette: &Palette,
) -> Vec<Line<'static>> {
    let marker = if selected { "▌ " } else { "  " };
    let marker_style = Style::default().fg(palette.accent);
    let name_style = if selected {
        palette.selected()
    } else {
        palette.heading()
    };
    let (dot, dot_style) = if healer.is_online {
        ("● Online", Style::default().fg(palette.online))
    } else {
        ("○ Away", Style::default().fg(palette.offline))
    };
    let heart = if favorite { " ♥" } else { "" };
    let inner = width.saturating_sub(4);

    vec![
        Line::from(vec![
            Span::styled(marker, marker_style),
            Span::styled(truncate(&healer.name, inner.saturating_sub(12)), name_style),
            Span::styled(heart, Style::default().fg(palette.favorite)),
            Span::raw("  "),
            Span::styled(dot, dot_style),
        ]),
        Line::from(vec![
            Span::styled(marker, marker_style),
            Span::styled(
                truncate(&format!("{} · {}", healer.specialty, healer.location), inner),
                palette.dim_style(),
            ),
        ]),
        Line::from(vec![
            Span::styled(marker, marker_style),
            Span::styled("★ ", Style::default().fg(palette.star)),
            Span::styled(rating_label(healer), Style::default().fg(palette.text)),
            Span::raw("   "),
            Span::styled(
                format!("{}/min", healer.price_per_minute),
                Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled(healer.language_summary(), palette.dim_style()),
        ]),
        Line::from(""),
    ]
}

/// A key hint such as `[v] video`.
pub fn key_hint(key: &str, label: &str, palette: &Palette) -> Vec<Span<'static>> {
    vec![
        Span::styled(format!("[{}]", key), palette.accent_style()),
        Span::styled(format!(" {}  ", label), palette.dim_style()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::mock_healers;
    use crate::ui::theme::DARK;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("calm", 10), "calm");
        assert_eq!(truncate("serenity", 5), "sere…");
        assert_eq!(truncate("禅禅禅", 4), "禅…");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn test_wrap_text() {
        assert_eq!(wrap_text("be here now", 7), ["be here", "now"]);
        assert_eq!(wrap_text("", 10), [""]);
        assert_eq!(wrap_text("breathe", 3), ["bre", "ath", "e"]);
        assert_eq!(wrap_text("a  b", 10), ["a b"]);
        for row in wrap_text("one two three four five six seven", 9) {
            assert!(row.width() <= 9);
        }
    }

    #[test]
    fn test_star_bar() {
        assert_eq!(star_bar(StarRating::new(3)), "★★★☆☆");
        assert_eq!(star_bar(StarRating::default()), "★★★★★");
    }

    #[test]
    fn test_card_shape() {
        let healer = &mock_healers()[0];
        let lines = healer_card(healer, true, true, 60, &DARK);
        assert_eq!(lines.len(), CARD_HEIGHT as usize);
        let first: String = lines[0].spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(first.contains("Dr. Seraphina Moon"));
        assert!(first.contains('♥'));
        assert_eq!(rating_label(healer), "4.9 (1240)");
    }
}
