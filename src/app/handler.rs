//! Event handling and state transition logic.
//!
//! The plugin runtime turns keys, mouse reports, timer wake-ups and pane
//! resizes into [`Event`]s. [`handle_event`] applies each one to the carousel
//! at the given `now`, then plans the next host wake-up.
//!
//! # Event Types
//!
//! - **Navigation**: `Next`, `Previous`, `GoTo`
//! - **Gesture**: `DragStart`, `DragMove`, `DragEnd`
//! - **Hover**: `PointerEnter`, `PointerLeave`, `TogglePause`
//! - **System**: `Resize`, `Tick`, `CloseFocus`
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use testimonial_carousel::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default(), Duration::ZERO);
//! let (render, _actions) = handle_event(&mut state, &Event::Next, Duration::from_millis(10));
//! assert!(render);
//! ```

use crate::app::{Action, AppState};
use std::time::Duration;

/// Events triggered by user input or the host.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Shows the next testimonial.
    Next,
    /// Shows the previous testimonial.
    Previous,
    /// Jumps to the testimonial at the given index.
    GoTo(usize),

    /// A drag began at horizontal position `x`, in viewport units.
    DragStart {
        /// Horizontal position.
        x: f64,
    },
    /// The dragged pointer moved to `x`.
    DragMove {
        /// Horizontal position.
        x: f64,
    },
    /// The drag was released.
    DragEnd,

    /// The pointer moved onto the carousel.
    PointerEnter,
    /// The pointer moved off the carousel.
    PointerLeave,
    /// Holds autoplay as if hovered, or releases the hold.
    TogglePause,

    /// The pane was drawn at a new size.
    Resize {
        /// Pane height.
        rows: usize,
        /// Pane width.
        cols: usize,
    },
    /// A requested wake-up arrived.
    Tick,
    /// Closes the floating pane and hides the plugin UI.
    CloseFocus,
}

/// Visible carousel state, compared before and after an event to decide
/// whether a redraw is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Snapshot {
    current_index: usize,
    auto_playing: bool,
    hovering: bool,
    visible_count: usize,
}

impl AppState {
    fn snapshot(&self) -> Option<Snapshot> {
        self.carousel.as_ref().map(|carousel| Snapshot {
            current_index: carousel.current_index(),
            auto_playing: carousel.is_auto_playing(),
            hovering: carousel.is_hovering(),
            visible_count: carousel.visible_count(),
        })
    }
}

/// Processes an event at `now`, mutates application state, and returns
/// whether to redraw along with the actions to execute.
///
/// Every event first lets the carousel fire the timers that fell due, so a
/// redraw is also requested when a late wake-up moved the carousel.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event type.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use testimonial_carousel::{handle_event, initialize, Action, Config, Event};
///
/// let mut state = initialize(&Config::default(), Duration::ZERO);
/// let (render, actions) = handle_event(&mut state, &Event::CloseFocus, Duration::ZERO);
/// assert!(!render);
/// assert_eq!(actions, vec![Action::CloseFocus]);
/// ```
pub fn handle_event(state: &mut AppState, event: &Event, now: Duration) -> (bool, Vec<Action>) {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::CloseFocus => return (false, vec![Action::CloseFocus]),
        Event::Tick => state.wake_delivered(now),
        Event::Resize { rows, cols } => {
            let resized = state.apply_pane_size(*rows, *cols, now);
            let actions = state.plan_wake(now).into_iter().collect();
            return (resized, actions);
        }
        _ => {}
    }

    let before = state.snapshot();
    let Some(carousel) = state.carousel.as_mut() else {
        tracing::debug!("no carousel mounted, event ignored");
        return (false, vec![]);
    };

    let changed = match event {
        Event::Next => {
            carousel.next(now);
            true
        }
        Event::Previous => {
            carousel.previous(now);
            true
        }
        Event::GoTo(index) => {
            if *index >= carousel.items().len() {
                tracing::debug!(index, "go-to target out of range");
                false
            } else {
                carousel.go_to(*index, now);
                true
            }
        }
        Event::DragStart { x } => {
            carousel.drag_start(*x, now);
            false
        }
        Event::DragMove { x } => {
            carousel.drag_move(*x, now);
            false
        }
        Event::DragEnd => {
            carousel.drag_end(now);
            false
        }
        Event::PointerEnter => carousel.pointer_enter(now),
        Event::PointerLeave => carousel.pointer_leave(now),
        Event::TogglePause => {
            if carousel.is_hovering() {
                carousel.pointer_leave(now)
            } else {
                carousel.pointer_enter(now)
            }
        }
        Event::Tick => {
            let fired = carousel.advance_to(now);
            tracing::trace!(advances = fired.advances, resumed = fired.resumed, "tick");
            carousel.is_auto_playing()
        }
        Event::Resize { .. } | Event::CloseFocus => false,
    };

    let should_render = changed || state.snapshot() != before;
    let actions = state.plan_wake(now).into_iter().collect();
    (should_render, actions)
}
