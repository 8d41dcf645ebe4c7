//! Composable UI component renderers.
//!
//! Each component draws one part of the pane into the frame buffer, at rows
//! taken from the [`Layout`] so that drawing and mouse hit-testing agree.
//!
//! # Components
//!
//! - [`header`]: Title bar with the current position
//! - [`cards`]: The visible testimonial window
//! - [`navigation`]: Previous/next buttons and indicator dots
//! - [`progress`]: Autoplay progress bar
//! - [`footer`]: Keybinding hints and contact link
//! - [`empty`]: Message shown when there are no testimonials

pub mod cards;
mod empty;
mod footer;
mod header;
pub mod navigation;
pub mod progress;

pub use empty::render_empty_state;

use crate::ui::helpers::position_cursor;
use crate::ui::layout::Layout;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use cards::render_card;
use footer::render_footer;
use header::render_header;
use navigation::render_navigation;
use progress::render_progress;

/// Renders a horizontal border line at `row`.
///
/// Returns the next available row.
fn render_border(out: &mut String, row: usize, color: &str, cols: usize) -> usize {
    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(color));
    out.push_str(&"─".repeat(cols));
    out.push_str(Theme::reset());
    row + 1
}

/// Renders the carousel layout.
///
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Cards]
/// [ ‹ ]   ● ○ ○ ○   [ › ]
/// [Progress bar]
/// [Border]
/// [Footer]
/// ```
pub fn render_carousel(out: &mut String, vm: &UIViewModel, layout: &Layout, theme: &Theme) {
    let cols = layout.cols;

    render_header(out, layout.header_row, &vm.header, theme, cols);
    render_border(out, layout.header_border_row, &theme.colors.border, cols);

    for (card, &columns) in vm.cards.iter().zip(&layout.card_columns) {
        render_card(out, card, layout.cards, columns, theme);
    }

    render_navigation(out, layout, &vm.indicators, theme);
    render_progress(out, layout.progress_row, &vm.progress, theme, cols);

    render_border(out, layout.footer_border_row, &theme.colors.border, cols);
    render_footer(out, layout.footer_row, &vm.footer, theme, cols);
}

/// Renders the header, the empty-state message and the footer.
pub fn render_empty(out: &mut String, vm: &UIViewModel, layout: &Layout, theme: &Theme) {
    let cols = layout.cols;

    render_header(out, layout.header_row, &vm.header, theme, cols);
    render_border(out, layout.header_border_row, &theme.colors.border, cols);
    if let Some(empty) = &vm.empty_state {
        render_empty_state(out, empty, theme, cols);
    }
    render_border(out, layout.footer_border_row, &theme.colors.border, cols);
    render_footer(out, layout.footer_row, &vm.footer, theme, cols);
}
