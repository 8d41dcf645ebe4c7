//! Drag tracking and swipe interpretation.
//!
//! ## Usage
//!
//! 1) [`GestureTracker::start`] records where the drag began.
//! 2) [`GestureTracker::update`] records the latest pointer position.
//! 3) [`GestureTracker::finish`] classifies the drag and resets the tracker.
//!
//! Positions are horizontal coordinates in viewport units. A drag from right
//! to left (positive `start - current`) past the threshold means "next".

/// Horizontal drag positions recorded between start and finish.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GestureTracker {
    start: Option<f64>,
    current: Option<f64>,
}

/// What a finished drag amounts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SwipeOutcome {
    /// Dragged right to left past the threshold.
    Next,
    /// Dragged left to right past the threshold.
    Previous,
    /// The drag moved, but not far enough to navigate.
    TooShort {
        /// `start - current` of the drag.
        distance: f64,
    },
    /// The drag started but no move was recorded.
    NoMovement,
    /// There was no drag to finish.
    NotStarted,
}

impl GestureTracker {
    /// Begins a drag at `position`, discarding any earlier move.
    pub fn start(&mut self, position: f64) {
        self.start = Some(position);
        self.current = None;
    }

    /// Records the latest position. Ignored when no drag is active.
    ///
    /// Returns `true` if the position was recorded.
    pub fn update(&mut self, position: f64) -> bool {
        if self.start.is_none() {
            return false;
        }
        self.current = Some(position);
        true
    }

    /// Returns `true` between `start` and `finish`.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.start.is_some()
    }

    /// Ends the drag, classifying it against `threshold`.
    ///
    /// Distances exactly at the threshold do not navigate. The tracker is
    /// always reset, whatever the outcome.
    pub fn finish(&mut self, threshold: f64) -> SwipeOutcome {
        let (start, current) = (self.start.take(), self.current.take());

        let Some(start) = start else {
            return SwipeOutcome::NotStarted;
        };
        let Some(current) = current else {
            return SwipeOutcome::NoMovement;
        };

        let distance = start - current;
        if distance > threshold {
            SwipeOutcome::Next
        } else if distance < -threshold {
            SwipeOutcome::Previous
        } else {
            SwipeOutcome::TooShort { distance }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drag(from: f64, to: f64) -> SwipeOutcome {
        let mut tracker = GestureTracker::default();
        tracker.start(from);
        tracker.update(to);
        tracker.finish(50.0)
    }

    #[test]
    fn right_to_left_past_threshold_is_next() {
        assert_eq!(drag(200.0, 140.0), SwipeOutcome::Next);
    }

    #[test]
    fn left_to_right_past_threshold_is_previous() {
        assert_eq!(drag(100.0, 151.0), SwipeOutcome::Previous);
    }

    #[test]
    fn threshold_itself_does_not_navigate() {
        assert_eq!(drag(100.0, 50.0), SwipeOutcome::TooShort { distance: 50.0 });
        assert_eq!(drag(50.0, 100.0), SwipeOutcome::TooShort { distance: -50.0 });
    }

    #[test]
    fn short_drag_reports_distance() {
        assert_eq!(drag(110.0, 100.0), SwipeOutcome::TooShort { distance: 10.0 });
    }

    #[test]
    fn finish_without_start_is_harmless() {
        let mut tracker = GestureTracker::default();
        assert!(!tracker.update(10.0));
        assert_eq!(tracker.finish(50.0), SwipeOutcome::NotStarted);
    }

    #[test]
    fn finish_without_move_and_reset() {
        let mut tracker = GestureTracker::default();
        tracker.start(10.0);
        assert!(tracker.is_dragging());
        assert_eq!(tracker.finish(50.0), SwipeOutcome::NoMovement);
        assert!(!tracker.is_dragging());
        assert_eq!(tracker, GestureTracker::default());
    }

    #[test]
    fn restart_discards_stale_move() {
        let mut tracker = GestureTracker::default();
        tracker.start(300.0);
        tracker.update(0.0);
        tracker.start(100.0);
        assert_eq!(tracker.finish(50.0), SwipeOutcome::NoMovement);
    }
}
