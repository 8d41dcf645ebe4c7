//! Viewport width to card count, and the wrap-around visible window.

use super::settings::{Breakpoints, MAX_VISIBLE};
use crate::domain::{Testimonial, TestimonialSet};

/// One card of the visible window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowItem<'a> {
    /// Position of the testimonial in the full set; stable key for rendering.
    pub original_index: usize,
    /// The testimonial itself.
    pub testimonial: &'a Testimonial,
}

/// Number of cards a viewport of `width` shows, before clamping to the set size.
#[must_use]
pub fn cards_for_width(width: f64, breakpoints: &Breakpoints) -> usize {
    if width < breakpoints.single_below {
        1
    } else if width < breakpoints.double_below {
        2
    } else {
        MAX_VISIBLE
    }
}

/// Number of cards shown for `width` given `item_count` items: never more
/// cards than items, never fewer than one.
#[must_use]
pub fn visible_count(width: f64, breakpoints: &Breakpoints, item_count: usize) -> usize {
    cards_for_width(width, breakpoints).min(item_count).max(1)
}

/// Indices of the `count` items starting at `start`, wrapping past the end.
#[must_use]
pub fn window_indices(start: usize, count: usize, item_count: usize) -> Vec<usize> {
    if item_count == 0 {
        return Vec::new();
    }
    (0..count).map(|offset| (start + offset) % item_count).collect()
}

/// The visible window over `items`.
#[must_use]
pub fn window<'a>(items: &'a TestimonialSet, start: usize, count: usize) -> Vec<WindowItem<'a>> {
    window_indices(start, count, items.len())
        .into_iter()
        .filter_map(|original_index| {
            items.get(original_index).map(|testimonial| WindowItem {
                original_index,
                testimonial,
            })
        })
        .collect()
}
