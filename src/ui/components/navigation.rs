//! Navigation row: previous/next buttons around the indicator dots.

use crate::ui::helpers::position_cursor;
use crate::ui::layout::Layout;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::IndicatorDot;

/// Renders the buttons and one dot per testimonial on the layout's
/// navigation row. Dot columns come from the layout so clicks line up.
pub fn render_navigation(
    out: &mut String,
    layout: &Layout,
    indicators: &[IndicatorDot],
    theme: &Theme,
) {
    let button = Theme::fg(&theme.colors.button_fg);

    position_cursor(out, layout.nav_row, layout.previous_button.left);
    out.push_str(&button);
    out.push_str(" ‹ ");

    for (dot, &col) in indicators.iter().zip(&layout.indicator_columns) {
        position_cursor(out, layout.nav_row, col);
        if dot.is_active {
            out.push_str(&Theme::fg(&theme.colors.indicator_active));
            out.push('●');
        } else {
            out.push_str(&Theme::fg(&theme.colors.indicator_inactive));
            out.push('○');
        }
    }

    position_cursor(out, layout.nav_row, layout.next_button.left);
    out.push_str(&button);
    out.push_str(" › ");
    out.push_str(Theme::reset());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dots_follow_the_current_index() {
        let layout = Layout::compute(24, 80, 1, 3);
        let dots = [
            IndicatorDot { is_active: false },
            IndicatorDot { is_active: true },
            IndicatorDot { is_active: false },
        ];
        let mut out = String::new();
        render_navigation(&mut out, &layout, &dots, &Theme::default());

        assert_eq!(out.matches('●').count(), 1);
        assert_eq!(out.matches('○').count(), 2);
        assert!(out.contains(&format!("\u{1b}[20;{}H", layout.indicator_columns[1])));
    }
}
