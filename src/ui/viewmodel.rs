//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They contain no business logic, only display-ready data.
//!
//! # Example
//!
//! ```rust
//! use testimonial_carousel::ui::viewmodel::{CardItem, ProgressInfo};
//!
//! let card = CardItem {
//!     original_index: 2,
//!     content: "Always on time.".to_string(),
//!     author: "Local Shop".to_string(),
//!     initial: 'L',
//!     stars: "★★★★★".to_string(),
//!     is_lead: true,
//! };
//! let progress = ProgressInfo { fraction: 0.5, auto_playing: true, hovering: false };
//! assert!(card.is_lead && progress.auto_playing);
//! ```

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct UIViewModel {
    /// Header information.
    pub header: HeaderInfo,

    /// Cards of the visible window, in display order.
    pub cards: Vec<CardItem>,

    /// One dot per testimonial.
    pub indicators: Vec<IndicatorDot>,

    /// Autoplay progress bar state.
    pub progress: ProgressInfo,

    /// Footer information (keybindings, contact link).
    pub footer: FooterInfo,

    /// Set when there is nothing to show.
    pub empty_state: Option<EmptyState>,
}

/// One testimonial card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardItem {
    /// Index of the testimonial in the full set.
    pub original_index: usize,
    /// Review text.
    pub content: String,
    /// Review author.
    pub author: String,
    /// Avatar letter.
    pub initial: char,
    /// Rating drawn as stars.
    pub stars: String,
    /// Whether this is the card at the current index.
    pub is_lead: bool,
}

/// Indicator dot for one testimonial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorDot {
    /// Whether the dot belongs to the current index.
    pub is_active: bool,
}

/// Autoplay progress bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressInfo {
    /// Elapsed share of the autoplay period, `0.0..=1.0`.
    pub fraction: f64,
    /// Whether autoplay is running.
    pub auto_playing: bool,
    /// Whether autoplay is held by hover (or the pause key).
    pub hovering: bool,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
    /// Messaging link shown at the right edge.
    pub contact_link: String,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message.
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}
