//! Top-level rendering coordinator.
//!
//! Rendering is a two-step process:
//!
//! 1. **View Model Computation**: `AppState` becomes a `UIViewModel` at `now`
//! 2. **Component Rendering**: components draw into one frame buffer, which is
//!    printed to stdout in a single write
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use testimonial_carousel::{initialize, Config};
//! use testimonial_carousel::ui::renderer::render_frame;
//!
//! let mut state = initialize(&Config::default(), Duration::ZERO);
//! state.apply_pane_size(24, 100, Duration::ZERO);
//! let frame = render_frame(&state, 24, 100, Duration::ZERO);
//! assert!(frame.contains("Testimonios"));
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::layout::Layout;
use std::time::Duration;

/// Renders the plugin UI at `now` to stdout.
pub fn render(state: &AppState, rows: usize, cols: usize, now: Duration) {
    print!("{}", render_frame(state, rows, cols, now));
}

/// Builds the frame for a `rows` x `cols` pane without printing it.
#[must_use]
pub fn render_frame(state: &AppState, rows: usize, cols: usize, now: Duration) -> String {
    let viewmodel = state.compute_viewmodel(now);
    let layout = state.layout.clone().unwrap_or_else(|| {
        Layout::compute(rows, cols, viewmodel.cards.len(), viewmodel.indicators.len())
    });

    let mut out = String::new();
    if viewmodel.empty_state.is_some() {
        components::render_empty(&mut out, &viewmodel, &layout, &state.theme);
    } else {
        components::render_carousel(&mut out, &viewmodel, &layout, &state.theme);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::{CarouselController, CarouselSettings};
    use crate::domain::{ContactChannel, TestimonialSet};
    use crate::ui::theme::Theme;

    fn state(cols: usize) -> AppState {
        let carousel = CarouselController::mount(
            TestimonialSet::builtin().unwrap(),
            CarouselSettings::default(),
            0.0,
            Duration::ZERO,
        );
        let mut state =
            AppState::new(Some(carousel), Theme::default(), ContactChannel::default(), 8.0);
        state.apply_pane_size(24, cols, Duration::ZERO);
        state
    }

    #[test]
    fn wide_pane_draws_three_cards() {
        let frame = render_frame(&state(140), 24, 140, Duration::ZERO);
        assert_eq!(frame.matches('╭').count(), 3);
        assert!(frame.contains("wa.me/34666754608"));
    }

    #[test]
    fn narrow_pane_draws_one_card() {
        let frame = render_frame(&state(80), 24, 80, Duration::ZERO);
        assert_eq!(frame.matches('╭').count(), 1);
        assert_eq!(frame.matches('●').count(), 1);
    }

    #[test]
    fn empty_state_replaces_cards() {
        let state = AppState::new(None, Theme::default(), ContactChannel::default(), 8.0);
        let frame = render_frame(&state, 24, 80, Duration::ZERO);
        assert!(frame.contains("No testimonials to show"));
        assert!(!frame.contains('╭'));
    }
}
