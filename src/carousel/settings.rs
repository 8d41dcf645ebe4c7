//! Timing, gesture and breakpoint tunables of the carousel.

use std::time::Duration;

/// Autoplay period: time between two automatic advances.
pub const AUTOPLAY_INTERVAL: Duration = Duration::from_millis(4000);

/// Delay before autoplay resumes after a click or a committed swipe.
pub const MANUAL_RESUME_DELAY: Duration = Duration::from_millis(5000);

/// Delay before autoplay resumes after a drag too short to navigate.
pub const SWIPE_RESUME_DELAY: Duration = Duration::from_millis(1000);

/// Minimum drag distance, in viewport units, that commits a swipe.
pub const SWIPE_THRESHOLD: f64 = 50.0;

/// Widths below this show a single card.
pub const SINGLE_CARD_BELOW: f64 = 768.0;

/// Widths below this (and at least [`SINGLE_CARD_BELOW`]) show two cards.
pub const TWO_CARDS_BELOW: f64 = 1024.0;

/// Most cards shown side by side.
pub const MAX_VISIBLE: usize = 3;

/// Viewport width breakpoints mapping a width to a card count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoints {
    /// Widths strictly below this show one card.
    pub single_below: f64,
    /// Widths strictly below this show two cards; wider shows three.
    pub double_below: f64,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            single_below: SINGLE_CARD_BELOW,
            double_below: TWO_CARDS_BELOW,
        }
    }
}

/// Every tunable the controller consults.
///
/// `Default` reproduces the original site's behavior; the plugin config may
/// override individual values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselSettings {
    /// Period of the autoplay interval.
    pub autoplay_interval: Duration,
    /// Resume delay after manual navigation.
    pub manual_resume_delay: Duration,
    /// Resume delay after an uncommitted drag.
    pub swipe_resume_delay: Duration,
    /// Drag distance that commits a swipe (strictly greater than).
    pub swipe_threshold: f64,
    /// Width breakpoints for the visible card count.
    pub breakpoints: Breakpoints,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            autoplay_interval: AUTOPLAY_INTERVAL,
            manual_resume_delay: MANUAL_RESUME_DELAY,
            swipe_resume_delay: SWIPE_RESUME_DELAY,
            swipe_threshold: SWIPE_THRESHOLD,
            breakpoints: Breakpoints::default(),
        }
    }
}
