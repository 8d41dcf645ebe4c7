//! Empty state component renderer.
//!
//! Shown instead of the carousel when no testimonials could be loaded.

use crate::ui::helpers::{centered, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the empty state message.
///
/// # Layout
///
/// ```text
/// [5 blank lines]
/// [left padding] MESSAGE [right padding]
/// [left padding] subtitle [right padding]
/// ```
pub fn render_empty_state(out: &mut String, empty: &EmptyState, theme: &Theme, cols: usize) {
    position_cursor(out, 6, 1);
    out.push_str(&Theme::fg(&theme.colors.empty_state_fg));
    out.push_str(&centered(&empty.message, cols));
    out.push_str(Theme::reset());

    position_cursor(out, 7, 1);
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(&centered(&empty.subtitle, cols));
    out.push_str(Theme::reset());
}
