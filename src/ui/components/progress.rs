//! Autoplay progress bar.
//!
//! Fills left to right over one autoplay period. While autoplay is paused the
//! bar is replaced by a dimmed status label.

use crate::ui::helpers::{centered, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ProgressInfo;

/// Number of filled cells for `fraction` of a `width`-cell bar.
#[must_use]
pub fn filled_cells(fraction: f64, width: usize) -> usize {
    let cells = (fraction.clamp(0.0, 1.0) * width as f64).round();
    (cells as usize).min(width)
}

/// Renders the progress bar on `row`, inset by one column on each side.
pub fn render_progress(
    out: &mut String,
    row: usize,
    progress: &ProgressInfo,
    theme: &Theme,
    cols: usize,
) {
    let width = cols.saturating_sub(2);
    position_cursor(out, row, 2);

    if !progress.auto_playing {
        let label = if progress.hovering { "paused" } else { "resuming soon" };
        out.push_str(&Theme::fg(&theme.colors.text_dim));
        out.push_str(&centered(label, width));
        out.push_str(Theme::reset());
        return;
    }

    let filled = filled_cells(progress.fraction, width);
    out.push_str(&Theme::fg(&theme.colors.progress_fg));
    out.push_str(&"━".repeat(filled));
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(&"─".repeat(width - filled));
    out.push_str(Theme::reset());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_tracks_fraction() {
        assert_eq!(filled_cells(0.0, 40), 0);
        assert_eq!(filled_cells(0.5, 40), 20);
        assert_eq!(filled_cells(1.0, 40), 40);
        assert_eq!(filled_cells(1.7, 40), 40);
        assert_eq!(filled_cells(-0.2, 40), 0);
    }

    #[test]
    fn paused_bar_shows_label() {
        let progress = ProgressInfo {
            fraction: 0.0,
            auto_playing: false,
            hovering: true,
        };
        let mut out = String::new();
        render_progress(&mut out, 21, &progress, &Theme::default(), 40);
        assert!(out.contains("paused"));
        assert!(!out.contains('━'));
    }
}
