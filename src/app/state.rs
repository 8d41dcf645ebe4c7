//! Application state management and view model computation.
//!
//! [`AppState`] wraps the carousel controller with everything the plugin needs
//! around it: the theme, the contact channel, the last pane geometry (for
//! mouse hit-testing) and the bookkeeping of host wake-ups.
//!
//! # Wake-ups
//!
//! Zellij timers cannot be cancelled, so the state remembers the earliest
//! wake it has already requested and only asks for a new one when something
//! earlier is needed. While autoplay runs, wakes are also requested every
//! [`PROGRESS_FRAME`] so the progress bar moves.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use testimonial_carousel::{initialize, Config};
//!
//! let mut state = initialize(&Config::default(), Duration::ZERO);
//! state.apply_pane_size(24, 140, Duration::ZERO);
//! let viewmodel = state.compute_viewmodel(Duration::ZERO);
//! assert_eq!(viewmodel.cards.len(), 3);
//! ```

use crate::app::Action;
use crate::carousel::CarouselController;
use crate::domain::ContactChannel;
use crate::ui::layout::{Hit, Layout};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    CardItem, EmptyState, FooterInfo, HeaderInfo, IndicatorDot, ProgressInfo, UIViewModel,
};
use std::time::Duration;

/// Redraw period of the progress bar while autoplay runs.
pub const PROGRESS_FRAME: Duration = Duration::from_millis(250);

/// Central application state container.
#[derive(Debug)]
pub struct AppState {
    /// The carousel, or `None` when no testimonials could be loaded.
    pub carousel: Option<CarouselController>,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Where the footer's contact link points.
    pub contact: ContactChannel,

    /// Viewport units per terminal column.
    ///
    /// Scales pane widths and drag positions so the carousel's breakpoints
    /// and swipe threshold keep their pixel-like meaning.
    pub cell_width: f64,

    /// Geometry of the last applied pane size, used for hit-testing.
    pub layout: Option<Layout>,

    pane_size: Option<(usize, usize)>,
    requested_wake: Option<Duration>,
}

impl AppState {
    /// Creates the state around an already mounted carousel.
    #[must_use]
    pub const fn new(
        carousel: Option<CarouselController>,
        theme: Theme,
        contact: ContactChannel,
        cell_width: f64,
    ) -> Self {
        Self {
            carousel,
            theme,
            contact,
            cell_width,
            layout: None,
            pane_size: None,
            requested_wake: None,
        }
    }

    /// Viewport width, in carousel units, of a pane `cols` columns wide.
    #[must_use]
    pub fn viewport_width(&self, cols: usize) -> f64 {
        cols as f64 * self.cell_width
    }

    /// Horizontal drag position of the 0-based column `col`.
    #[must_use]
    pub fn drag_position(&self, col: usize) -> f64 {
        col as f64 * self.cell_width
    }

    /// Applies a pane size: notifies the carousel of the new viewport width
    /// and recomputes the layout.
    ///
    /// Returns `false` if the size did not change.
    pub fn apply_pane_size(&mut self, rows: usize, cols: usize, now: Duration) -> bool {
        if self.pane_size == Some((rows, cols)) && self.layout.is_some() {
            return false;
        }

        let width = self.viewport_width(cols);
        let (visible, count) = self.carousel.as_mut().map_or((1, 0), |carousel| {
            carousel.resize(width, now);
            (carousel.visible_count(), carousel.items().len())
        });

        tracing::debug!(rows, cols, viewport_width = width, visible, "pane size applied");

        self.pane_size = Some((rows, cols));
        self.layout = Some(Layout::compute(rows, cols, visible, count));
        true
    }

    /// Resolves a mouse position against the last layout.
    #[must_use]
    pub fn hit_test(&self, line: isize, col: usize) -> Hit {
        self.layout
            .as_ref()
            .map_or(Hit::Outside, |layout| layout.hit_test(line, col))
    }

    /// Records that a host wake-up arrived at `now`.
    pub fn wake_delivered(&mut self, now: Duration) {
        if self.requested_wake.is_some_and(|wake| wake <= now) {
            self.requested_wake = None;
        }
    }

    /// Decides whether a new host wake-up is needed.
    ///
    /// Targets the carousel's next deadline, or the next progress frame while
    /// autoplay runs, whichever comes first. Returns `None` if a pending wake
    /// already arrives early enough.
    pub fn plan_wake(&mut self, now: Duration) -> Option<Action> {
        let carousel = self.carousel.as_ref()?;

        let mut target = carousel.next_deadline();
        if carousel.is_auto_playing() {
            let frame = now + PROGRESS_FRAME;
            target = Some(target.map_or(frame, |deadline| deadline.min(frame)));
        }
        let target = target?;

        if self
            .requested_wake
            .is_some_and(|wake| wake > now && wake <= target)
        {
            return None;
        }

        self.requested_wake = Some(target);
        let after = target.saturating_sub(now);
        tracing::trace!(after_ms = after.as_millis() as u64, "wake requested");
        Some(Action::ScheduleWake { after })
    }

    /// Computes a renderable view model at `now`.
    #[must_use]
    pub fn compute_viewmodel(&self, now: Duration) -> UIViewModel {
        let Some(carousel) = &self.carousel else {
            return UIViewModel {
                header: HeaderInfo {
                    title: " Testimonios ".to_string(),
                },
                cards: vec![],
                indicators: vec![],
                progress: ProgressInfo {
                    fraction: 0.0,
                    auto_playing: false,
                    hovering: false,
                },
                footer: self.compute_footer(false),
                empty_state: Some(EmptyState {
                    message: "No testimonials to show".to_string(),
                    subtitle: "Check the testimonials_file setting".to_string(),
                }),
            };
        };

        let current = carousel.current_index();
        let cards = carousel
            .visible_window()
            .into_iter()
            .map(|item| CardItem {
                original_index: item.original_index,
                content: item.testimonial.content.clone(),
                author: item.testimonial.author.clone(),
                initial: item.testimonial.initial(),
                stars: item.testimonial.stars(),
                is_lead: item.original_index == current,
            })
            .collect();

        let indicators = (0..carousel.items().len())
            .map(|index| IndicatorDot {
                is_active: index == current,
            })
            .collect();

        UIViewModel {
            header: HeaderInfo {
                title: format!(" Testimonios {}/{} ", current + 1, carousel.items().len()),
            },
            cards,
            indicators,
            progress: ProgressInfo {
                fraction: carousel.autoplay_progress(now),
                auto_playing: carousel.is_auto_playing(),
                hovering: carousel.is_hovering(),
            },
            footer: self.compute_footer(carousel.is_hovering()),
            empty_state: None,
        }
    }

    fn compute_footer(&self, held: bool) -> FooterInfo {
        let pause = if held { "space: resume" } else { "space: pause" };
        FooterInfo {
            keybindings: format!("h/l: browse  1-9: jump  {pause}  drag: swipe  q: quit"),
            contact_link: self.contact.chat_link(),
        }
    }
}
