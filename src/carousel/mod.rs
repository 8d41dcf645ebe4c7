//! The carousel controller: index state, autoplay, swipe gestures and the
//! responsive visible window.
//!
//! # Time
//!
//! The controller owns no threads and registers no callbacks. Every command
//! takes `now`, the time elapsed since the carousel was mounted. Before a
//! command is applied, every timer that fell due up to `now` is fired in
//! chronological order, so a late host wake-up cannot reorder events. The
//! host learns when to wake the controller next from
//! [`CarouselController::next_deadline`].
//!
//! # Timers
//!
//! - **Autoplay**: an [`Interval`] armed while autoplay is on. Each tick
//!   advances one item and never touches the autoplay flag.
//! - **Pending resume**: a single [`OneShot`] slot. Manual navigation arms it
//!   with the long delay, an uncommitted drag with the short one. Arming
//!   replaces the previous resume, so overlapping resumes never stack.
//!
//! Both slots are cleared when the controller is unmounted or dropped.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use testimonial_carousel::carousel::{CarouselController, CarouselSettings};
//! use testimonial_carousel::TestimonialSet;
//!
//! let items = TestimonialSet::builtin().unwrap();
//! let mut carousel =
//!     CarouselController::mount(items, CarouselSettings::default(), 1280.0, Duration::ZERO);
//! assert_eq!(carousel.visible_window().len(), 3);
//!
//! carousel.next(Duration::from_millis(100));
//! assert_eq!(carousel.current_index(), 1);
//! assert!(!carousel.is_auto_playing());
//!
//! carousel.advance_to(Duration::from_millis(5100));
//! assert!(carousel.is_auto_playing());
//! ```

pub mod gesture;
pub mod settings;
pub mod timers;
pub mod viewport;

pub use gesture::{GestureTracker, SwipeOutcome};
pub use settings::{Breakpoints, CarouselSettings};
pub use timers::{Deadline, Interval, OneShot, TimerSlot};
pub use viewport::WindowItem;

use crate::domain::TestimonialSet;
use std::time::Duration;

/// Timer activity produced by one call to [`CarouselController::advance_to`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fired {
    /// Autoplay ticks that advanced the index.
    pub advances: usize,
    /// Whether a pending resume turned autoplay back on.
    pub resumed: bool,
}

impl Fired {
    /// Returns `true` if no timer fired.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.advances == 0 && !self.resumed
    }
}

/// Which timer fires next inside [`CarouselController::sync`].
enum Due {
    Resume(Duration),
    Tick,
}

/// State machine behind the testimonial carousel.
///
/// Owns the current index, the autoplay flag, the drag tracker, the viewport
/// derived card count and both timers. Nothing else writes this state.
#[derive(Debug)]
pub struct CarouselController {
    items: TestimonialSet,
    settings: CarouselSettings,
    current_index: usize,
    auto_playing: bool,
    hovering: bool,
    viewport_width: f64,
    visible_count: usize,
    gesture: GestureTracker,
    autoplay: TimerSlot<Interval>,
    pending_resume: TimerSlot<OneShot>,
    clock: Duration,
}

impl CarouselController {
    /// Mounts a carousel at `now` on a viewport `viewport_width` units wide.
    ///
    /// Starts on the first item with autoplay running.
    #[must_use]
    pub fn mount(
        items: TestimonialSet,
        settings: CarouselSettings,
        viewport_width: f64,
        now: Duration,
    ) -> Self {
        let visible_count =
            viewport::visible_count(viewport_width, &settings.breakpoints, items.len());

        let mut autoplay = TimerSlot::new("autoplay");
        autoplay.arm(Interval::starting_at(now, settings.autoplay_interval));

        tracing::debug!(
            item_count = items.len(),
            viewport_width,
            visible_count,
            "carousel mounted"
        );

        Self {
            items,
            settings,
            current_index: 0,
            auto_playing: true,
            hovering: false,
            viewport_width,
            visible_count,
            gesture: GestureTracker::default(),
            autoplay,
            pending_resume: TimerSlot::new("pending_resume"),
            clock: now,
        }
    }

    /// Tears the carousel down, cancelling the autoplay interval and any
    /// pending resume.
    pub fn unmount(mut self) {
        self.autoplay.cancel();
        self.pending_resume.cancel();
        tracing::debug!(current_index = self.current_index, "carousel unmounted");
    }

    /// Index of the first visible item.
    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current_index
    }

    /// Whether autoplay is on.
    #[must_use]
    pub const fn is_auto_playing(&self) -> bool {
        self.auto_playing
    }

    /// Whether the pointer currently rests on the carousel.
    #[must_use]
    pub const fn is_hovering(&self) -> bool {
        self.hovering
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    /// Whether a delayed resume is scheduled.
    #[must_use]
    pub const fn has_pending_resume(&self) -> bool {
        self.pending_resume.is_armed()
    }

    /// Number of items shown side by side.
    #[must_use]
    pub const fn visible_count(&self) -> usize {
        self.visible_count
    }

    /// Last viewport width passed to [`CarouselController::resize`] or `mount`.
    #[must_use]
    pub const fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    /// The full testimonial set.
    #[must_use]
    pub const fn items(&self) -> &TestimonialSet {
        &self.items
    }

    /// The settings the carousel was mounted with.
    #[must_use]
    pub const fn settings(&self) -> &CarouselSettings {
        &self.settings
    }

    /// The `visible_count` items starting at the current index, wrapping past
    /// the end of the set.
    #[must_use]
    pub fn visible_window(&self) -> Vec<WindowItem<'_>> {
        viewport::window(&self.items, self.current_index, self.visible_count)
    }

    /// Earliest time at which a timer is due, if any timer is armed.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        match (self.autoplay.due(), self.pending_resume.due()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Fraction of the current autoplay period that has elapsed at `now`,
    /// in `0.0..=1.0`. Zero while autoplay is off.
    #[must_use]
    pub fn autoplay_progress(&self, now: Duration) -> f64 {
        if !self.auto_playing {
            return 0.0;
        }
        self.autoplay.get().map_or(0.0, |interval| {
            let elapsed = now.saturating_sub(interval.last_tick());
            (elapsed.as_secs_f64() / interval.period().as_secs_f64()).clamp(0.0, 1.0)
        })
    }

    /// Fires every timer due at or before `now`.
    pub fn advance_to(&mut self, now: Duration) -> Fired {
        self.sync(now).1
    }

    /// Manual "next": advances one item, pauses autoplay and schedules the
    /// delayed resume.
    pub fn next(&mut self, now: Duration) {
        let (now, _) = self.sync(now);
        self.navigate((self.current_index + 1) % self.items.len(), now);
    }

    /// Manual "previous": steps back one item, pauses autoplay and schedules
    /// the delayed resume.
    pub fn previous(&mut self, now: Duration) {
        let (now, _) = self.sync(now);
        let len = self.items.len();
        self.navigate((self.current_index + len - 1) % len, now);
    }

    /// Jumps to `index` (taken modulo the item count), pauses autoplay and
    /// schedules the delayed resume.
    pub fn go_to(&mut self, index: usize, now: Duration) {
        let (now, _) = self.sync(now);
        self.navigate(index % self.items.len(), now);
    }

    /// Pointer entered the carousel: pause with no resume scheduled.
    ///
    /// Returns `false` if the pointer was already inside.
    pub fn pointer_enter(&mut self, now: Duration) -> bool {
        let (now, _) = self.sync(now);
        if self.hovering {
            return false;
        }
        self.hovering = true;
        self.pending_resume.cancel();
        self.set_auto_playing(false, now);
        tracing::debug!("pointer entered, autoplay paused");
        true
    }

    /// Pointer left the carousel: resume autoplay immediately.
    ///
    /// Returns `false` if the pointer was not inside.
    pub fn pointer_leave(&mut self, now: Duration) -> bool {
        let (now, _) = self.sync(now);
        if !self.hovering {
            return false;
        }
        self.hovering = false;
        self.pending_resume.cancel();
        self.set_auto_playing(true, now);
        tracing::debug!("pointer left, autoplay resumed");
        true
    }

    /// Begins a drag at `position` and pauses autoplay until the drag ends.
    pub fn drag_start(&mut self, position: f64, now: Duration) {
        let (now, _) = self.sync(now);
        self.gesture.start(position);
        self.pending_resume.cancel();
        self.set_auto_playing(false, now);
        tracing::trace!(position, "drag started");
    }

    /// Records the latest drag position. Ignored when no drag is active.
    pub fn drag_move(&mut self, position: f64, now: Duration) -> bool {
        self.sync(now);
        self.gesture.update(position)
    }

    /// Ends the drag.
    ///
    /// A swipe past the threshold navigates exactly like [`next`](Self::next)
    /// or [`previous`](Self::previous). A drag that moved too little, or not
    /// at all, leaves the index alone and resumes autoplay after the short
    /// delay. Ending a drag that never started does nothing.
    pub fn drag_end(&mut self, now: Duration) -> SwipeOutcome {
        let (now, _) = self.sync(now);
        let outcome = self.gesture.finish(self.settings.swipe_threshold);
        let len = self.items.len();

        match outcome {
            SwipeOutcome::Next => self.navigate((self.current_index + 1) % len, now),
            SwipeOutcome::Previous => self.navigate((self.current_index + len - 1) % len, now),
            SwipeOutcome::TooShort { .. } | SwipeOutcome::NoMovement => {
                self.pending_resume
                    .arm(OneShot::after(now, self.settings.swipe_resume_delay));
            }
            SwipeOutcome::NotStarted => {}
        }

        tracing::debug!(outcome = ?outcome, current_index = self.current_index, "drag ended");
        outcome
    }

    /// Applies a new viewport width. The current index is kept.
    ///
    /// Returns `true` if the number of visible items changed.
    pub fn resize(&mut self, viewport_width: f64, now: Duration) -> bool {
        self.sync(now);
        self.viewport_width = viewport_width;
        let count =
            viewport::visible_count(viewport_width, &self.settings.breakpoints, self.items.len());
        let changed = count != self.visible_count;
        if changed {
            tracing::debug!(
                viewport_width,
                from = self.visible_count,
                to = count,
                "visible count changed"
            );
        }
        self.visible_count = count;
        changed
    }

    /// Moves the clock to `now` (never backwards) and fires due timers in order.
    fn sync(&mut self, now: Duration) -> (Duration, Fired) {
        if now < self.clock {
            tracing::trace!(
                now_ms = now.as_millis() as u64,
                clock_ms = self.clock.as_millis() as u64,
                "clock went backwards, holding"
            );
        }
        let now = now.max(self.clock);
        let mut fired = Fired::default();

        loop {
            let resume_due = self.pending_resume.due().filter(|due| *due <= now);
            let tick_due = self.autoplay.due().filter(|due| *due <= now);

            let next = match (resume_due, tick_due) {
                (None, None) => break,
                (Some(resume), Some(tick)) if tick < resume => Due::Tick,
                (Some(resume), _) => Due::Resume(resume),
                (None, Some(_)) => Due::Tick,
            };

            match next {
                Due::Resume(at) => {
                    self.pending_resume.cancel();
                    fired.resumed |= self.set_auto_playing(true, at);
                }
                Due::Tick => {
                    if let Some(interval) = self.autoplay.get_mut() {
                        interval.tick();
                    }
                    self.current_index = (self.current_index + 1) % self.items.len();
                    fired.advances += 1;
                }
            }
        }

        if !fired.is_empty() {
            tracing::trace!(
                advances = fired.advances,
                resumed = fired.resumed,
                current_index = self.current_index,
                "timers fired"
            );
        }

        self.clock = now;
        (now, fired)
    }

    fn navigate(&mut self, target: usize, now: Duration) {
        self.current_index = target;
        self.set_auto_playing(false, now);
        self.pending_resume
            .arm(OneShot::after(now, self.settings.manual_resume_delay));
        tracing::debug!(current_index = target, "manual navigation");
    }

    /// Switches autoplay, arming a fresh interval when it turns on and
    /// cancelling it when it turns off. Returns `true` on a change.
    fn set_auto_playing(&mut self, on: bool, at: Duration) -> bool {
        if self.auto_playing == on {
            return false;
        }
        self.auto_playing = on;
        if on {
            self.autoplay
                .arm(Interval::starting_at(at, self.settings.autoplay_interval));
        } else {
            self.autoplay.cancel();
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Testimonial;

    const fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn items(count: usize) -> TestimonialSet {
        TestimonialSet::new(
            (0..count)
                .map(|i| Testimonial::new(format!("review {i}"), format!("author {i}"), 5))
                .collect(),
        )
        .unwrap()
    }

    fn mount(count: usize, width: f64) -> CarouselController {
        CarouselController::mount(items(count), CarouselSettings::default(), width, ms(0))
    }

    fn window(c: &CarouselController) -> Vec<usize> {
        c.visible_window().iter().map(|w| w.original_index).collect()
    }

    #[test]
    fn mounts_on_first_item_with_autoplay() {
        let c = mount(4, 1280.0);
        assert_eq!(c.current_index(), 0);
        assert!(c.is_auto_playing());
        assert_eq!(c.visible_count(), 3);
        assert_eq!(c.next_deadline(), Some(ms(4000)));
    }

    #[test]
    fn next_cycles_back_to_start() {
        for count in 1..=5 {
            let mut c = mount(count, 500.0);
            for step in 0..count {
                c.next(ms(step as u64 * 10));
            }
            assert_eq!(c.current_index(), 0, "count {count}");
        }
    }

    #[test]
    fn previous_undoes_next() {
        let mut c = mount(4, 500.0);
        c.go_to(2, ms(0));
        c.next(ms(10));
        c.previous(ms(20));
        assert_eq!(c.current_index(), 2);

        c.go_to(0, ms(30));
        c.previous(ms(40));
        assert_eq!(c.current_index(), 3);
    }

    #[test]
    fn single_item_navigation_stays_put() {
        let mut c = mount(1, 1280.0);
        c.next(ms(0));
        assert_eq!(c.current_index(), 0);
        c.previous(ms(1));
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.visible_count(), 1);
        assert_eq!(window(&c), vec![0]);
    }

    #[test]
    fn go_to_normalizes_out_of_range() {
        let mut c = mount(4, 500.0);
        c.go_to(9, ms(0));
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn window_wraps_at_end_of_list() {
        let mut c = mount(4, 1280.0);
        c.go_to(3, ms(0));
        assert_eq!(window(&c), vec![3, 0, 1]);
    }

    #[test]
    fn window_length_matches_visible_count_everywhere() {
        let mut c = mount(5, 900.0);
        for index in 0..5 {
            c.go_to(index, ms(index as u64));
            assert_eq!(c.visible_window().len(), 2);
        }
    }

    #[test]
    fn autoplay_advances_without_toggling_flag() {
        let mut c = mount(4, 500.0);

        let fired = c.advance_to(ms(3999));
        assert!(fired.is_empty());
        assert_eq!(c.current_index(), 0);

        let fired = c.advance_to(ms(4000));
        assert_eq!(fired.advances, 1);
        assert!(!fired.resumed);
        assert_eq!(c.current_index(), 1);
        assert!(c.is_auto_playing());

        c.advance_to(ms(12_000));
        assert_eq!(c.current_index(), 3);
        assert_eq!(c.next_deadline(), Some(ms(16_000)));
    }

    #[test]
    fn manual_navigation_pauses_then_resumes_after_delay() {
        let mut c = mount(4, 500.0);
        c.go_to(2, ms(1000));
        assert!(!c.is_auto_playing());
        assert_eq!(c.next_deadline(), Some(ms(6000)));

        c.advance_to(ms(5999));
        assert!(!c.is_auto_playing());
        assert_eq!(c.current_index(), 2);

        let fired = c.advance_to(ms(6000));
        assert!(fired.resumed);
        assert!(c.is_auto_playing());
        // Fresh interval: first tick one full period after the resume.
        assert_eq!(c.next_deadline(), Some(ms(10_000)));
    }

    #[test]
    fn repeated_navigation_restarts_resume_delay() {
        let mut c = mount(4, 500.0);
        c.go_to(2, ms(0));
        c.go_to(1, ms(3000));

        c.advance_to(ms(5000));
        assert!(!c.is_auto_playing(), "first resume must have been replaced");

        c.advance_to(ms(7999));
        assert!(!c.is_auto_playing());

        let fired = c.advance_to(ms(8000));
        assert!(fired.resumed);
        assert!(c.is_auto_playing());
        assert_eq!(c.current_index(), 1);
        assert!(!c.has_pending_resume());
    }

    #[test]
    fn late_wake_fires_in_order() {
        let mut c = mount(4, 500.0);
        c.next(ms(0));
        // Resume at 5000, then ticks at 9000 and 13000.
        let fired = c.advance_to(ms(13_500));
        assert!(fired.resumed);
        assert_eq!(fired.advances, 2);
        assert_eq!(c.current_index(), 3);
    }

    #[test]
    fn command_after_missed_wake_applies_due_timers_first() {
        let mut c = mount(4, 500.0);
        // Tick due at 4000 was never delivered; next() at 4500 sees it first.
        c.next(ms(4500));
        assert_eq!(c.current_index(), 2);
    }

    #[test]
    fn long_swipe_navigates_like_next() {
        let mut c = mount(4, 500.0);
        c.drag_start(200.0, ms(100));
        assert!(!c.is_auto_playing());
        assert_eq!(c.next_deadline(), None);

        c.drag_move(140.0, ms(150));
        assert_eq!(c.drag_end(ms(200)), SwipeOutcome::Next);
        assert_eq!(c.current_index(), 1);
        assert_eq!(c.next_deadline(), Some(ms(5200)));
        assert!(!c.is_dragging());
    }

    #[test]
    fn reverse_swipe_navigates_like_previous() {
        let mut c = mount(4, 500.0);
        c.drag_start(100.0, ms(0));
        c.drag_move(180.0, ms(10));
        assert_eq!(c.drag_end(ms(20)), SwipeOutcome::Previous);
        assert_eq!(c.current_index(), 3);
    }

    #[test]
    fn short_swipe_resumes_after_short_delay() {
        let mut c = mount(4, 500.0);
        c.drag_start(110.0, ms(0));
        c.drag_move(100.0, ms(10));
        assert_eq!(
            c.drag_end(ms(20)),
            SwipeOutcome::TooShort { distance: 10.0 }
        );
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.next_deadline(), Some(ms(1020)));

        c.advance_to(ms(1019));
        assert!(!c.is_auto_playing());
        c.advance_to(ms(1020));
        assert!(c.is_auto_playing());
    }

    #[test]
    fn tap_without_move_resumes_after_short_delay() {
        let mut c = mount(4, 500.0);
        c.drag_start(110.0, ms(0));
        assert_eq!(c.drag_end(ms(5)), SwipeOutcome::NoMovement);
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.next_deadline(), Some(ms(1005)));
    }

    #[test]
    fn drag_end_without_start_changes_nothing() {
        let mut c = mount(4, 500.0);
        assert!(!c.drag_move(10.0, ms(0)));
        assert_eq!(c.drag_end(ms(10)), SwipeOutcome::NotStarted);
        assert_eq!(c.current_index(), 0);
        assert!(c.is_auto_playing());
        assert!(!c.has_pending_resume());
    }

    #[test]
    fn drag_start_cancels_pending_resume() {
        let mut c = mount(4, 500.0);
        c.next(ms(0));
        c.drag_start(100.0, ms(1000));
        assert!(!c.has_pending_resume());
        c.advance_to(ms(20_000));
        assert!(!c.is_auto_playing());
    }

    #[test]
    fn hover_pauses_without_timer_and_leave_resumes_immediately() {
        let mut c = mount(4, 500.0);
        assert!(c.pointer_enter(ms(1000)));
        assert!(!c.is_auto_playing());
        assert_eq!(c.next_deadline(), None);
        assert!(!c.pointer_enter(ms(1100)));

        c.advance_to(ms(60_000));
        assert_eq!(c.current_index(), 0);

        assert!(c.pointer_leave(ms(60_000)));
        assert!(c.is_auto_playing());
        assert_eq!(c.next_deadline(), Some(ms(64_000)));
        assert!(!c.pointer_leave(ms(60_001)));
    }

    #[test]
    fn hover_cancels_manual_resume() {
        let mut c = mount(4, 500.0);
        c.next(ms(0));
        c.pointer_enter(ms(100));
        c.advance_to(ms(10_000));
        assert!(!c.is_auto_playing());
    }

    #[test]
    fn resume_while_running_keeps_single_interval() {
        let mut c = mount(4, 500.0);
        c.pointer_enter(ms(0));
        c.pointer_leave(ms(100));
        c.pointer_enter(ms(200));
        c.pointer_leave(ms(300));
        assert_eq!(c.next_deadline(), Some(ms(4300)));

        c.advance_to(ms(4300));
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn resize_keeps_index() {
        let mut c = mount(4, 500.0);
        c.go_to(3, ms(0));
        assert_eq!(c.visible_count(), 1);

        assert!(c.resize(900.0, ms(10)));
        assert_eq!(c.visible_count(), 2);
        assert_eq!(c.current_index(), 3);
        assert_eq!(window(&c), vec![3, 0]);

        assert!(!c.resize(950.0, ms(20)));
        assert!(c.resize(1500.0, ms(30)));
        assert_eq!(window(&c), vec![3, 0, 1]);
    }

    #[test]
    fn progress_tracks_autoplay_period() {
        let mut c = mount(4, 500.0);
        assert!((c.autoplay_progress(ms(1000)) - 0.25).abs() < 1e-9);
        c.advance_to(ms(4000));
        assert!((c.autoplay_progress(ms(6000)) - 0.5).abs() < 1e-9);

        c.pointer_enter(ms(6000));
        assert_eq!(c.autoplay_progress(ms(7000)), 0.0);
    }

    #[test]
    fn clock_never_moves_backwards() {
        let mut c = mount(4, 500.0);
        c.advance_to(ms(4000));
        c.next(ms(100));
        // Navigation is stamped at 4000, so the resume is due at 9000.
        assert_eq!(c.next_deadline(), Some(ms(9000)));
    }

    #[test]
    fn unmount_releases_timers() {
        let mut c = mount(4, 500.0);
        c.next(ms(0));
        assert!(c.next_deadline().is_some());
        c.unmount();
    }
}
