//! Footer component renderer.
//!
//! Keybinding hints sit on the left, the contact link on the right. On narrow
//! panes the hints are truncated first, then the link.

use crate::ui::helpers::{position_cursor, text_width, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the footer on `row`, filling the full width.
///
/// Returns the next available row.
pub fn render_footer(
    out: &mut String,
    row: usize,
    footer: &FooterInfo,
    theme: &Theme,
    cols: usize,
) -> usize {
    let inner = cols.saturating_sub(2);
    let link = truncate(&footer.contact_link, inner);
    let link_len = text_width(&link);
    let hints = truncate(&footer.keybindings, inner.saturating_sub(link_len + 2));
    let gap = inner.saturating_sub(text_width(&hints) + link_len);

    position_cursor(out, row, 1);
    out.push(' ');
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(&hints);
    out.push_str(&" ".repeat(gap));
    out.push_str(&Theme::fg(&theme.colors.author_fg));
    out.push_str(&link);
    out.push_str(Theme::reset());
    out.push(' ');
    row + 1
}
