//! Testimonial card renderer.
//!
//! Each card is a rounded box. Inside, from top to bottom: the rating, a
//! blank line, the quoted review wrapped to the card width, and the author
//! line pinned to the bottom.
//!
//! ```text
//! ╭──────────────────────╮
//! │ ★★★★★                │
//! │                      │
//! │ “Excelente trabajo,  │
//! │ muy profesionales.”  │
//! │                      │
//! │ (M) María García     │
//! ╰──────────────────────╯
//! ```

use crate::ui::helpers::{position_cursor, text_width, truncate, wrap_text};
use crate::ui::layout::{ColSpan, RowSpan};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::CardItem;

/// Columns taken by the frame and inner padding on each side.
const FRAME: usize = 4;

/// Smallest card that still fits a frame, the stars and the author.
const MIN_HEIGHT: usize = 4;

/// Lays out the inside of a card as exactly `height` plain lines, each at
/// most `width` columns.
///
/// The first line holds the stars and the last the author. Review text that
/// does not fit is cut with `…`.
#[must_use]
pub fn card_body(card: &CardItem, width: usize, height: usize) -> Vec<String> {
    if height == 0 {
        return vec![];
    }

    let stars = truncate(&card.stars, width);
    let author = truncate(&format!("({}) {}", card.initial, card.author), width);
    if height == 1 {
        return vec![author];
    }

    let text_rows = height.saturating_sub(4);
    let mut text = wrap_text(&format!("“{}”", card.content), width);
    if text.len() > text_rows {
        text.truncate(text_rows);
        if let Some(last) = text.last_mut() {
            let kept: String = last.chars().take(width.saturating_sub(1)).collect();
            *last = format!("{kept}…");
        }
    }

    let mut lines = Vec::with_capacity(height);
    lines.push(stars);
    if height >= 4 {
        lines.push(String::new());
    }
    lines.extend(text);
    lines.resize(height - 1, String::new());
    lines.push(author);
    lines
}

/// Renders one card into the frame.
pub fn render_card(
    out: &mut String,
    card: &CardItem,
    rows: RowSpan,
    cols: ColSpan,
    theme: &Theme,
) {
    if rows.height() < MIN_HEIGHT || cols.width <= FRAME {
        return;
    }

    let inner_width = cols.width - FRAME;
    let border_color = if card.is_lead {
        &theme.colors.card_border_active
    } else {
        &theme.colors.card_border
    };
    let border = Theme::fg(border_color);
    let horizontal = "─".repeat(cols.width - 2);

    position_cursor(out, rows.top, cols.left);
    out.push_str(&border);
    out.push_str(&format!("╭{horizontal}╮"));

    let body = card_body(card, inner_width, rows.height() - 2);
    let last = body.len().saturating_sub(1);
    for (i, line) in body.iter().enumerate() {
        let style = match i {
            0 => Theme::fg(&theme.colors.star_fg),
            i if i == last => format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.author_fg)),
            _ => format!("{}{}", Theme::italic(), Theme::fg(&theme.colors.text_normal)),
        };

        position_cursor(out, rows.top + 1 + i, cols.left);
        out.push_str(&border);
        out.push_str("│ ");
        out.push_str(&style);
        out.push_str(line);
        out.push_str(Theme::reset());
        out.push_str(&" ".repeat(inner_width - text_width(line)));
        out.push_str(&border);
        out.push_str(" │");
    }

    position_cursor(out, rows.bottom, cols.left);
    out.push_str(&format!("╰{horizontal}╯"));
    out.push_str(Theme::reset());
}
