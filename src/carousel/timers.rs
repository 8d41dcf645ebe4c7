//! Owned timer handles on the controller's monotonic clock.
//!
//! The controller never registers callbacks with a host. It keeps its timers
//! as plain deadlines inside [`TimerSlot`]s and fires whatever is due when the
//! host reports the current time. Cancelling a timer is dropping its
//! deadline, so a host wake-up that arrives for a cancelled or replaced timer
//! finds nothing to fire.
//!
//! A slot holds at most one timer. Arming an occupied slot replaces the old
//! timer instead of stacking a second one.

use std::time::Duration;

/// Shortest accepted interval period. A zero period would fire forever
/// without the clock moving.
const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Anything with a point in time at which it fires.
pub trait Deadline {
    /// Time, since mount, at which the timer is due.
    fn due(&self) -> Duration;
}

/// A timer that fires once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OneShot {
    due: Duration,
}

impl OneShot {
    /// Creates a one-shot timer due `delay` after `now`.
    #[must_use]
    pub fn after(now: Duration, delay: Duration) -> Self {
        Self { due: now + delay }
    }
}

impl Deadline for OneShot {
    fn due(&self) -> Duration {
        self.due
    }
}

/// A repeating timer with a fixed period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    period: Duration,
    next_due: Duration,
}

impl Interval {
    /// Creates an interval whose first tick is one full period after `now`.
    #[must_use]
    pub fn starting_at(now: Duration, period: Duration) -> Self {
        let period = period.max(MIN_PERIOD);
        Self {
            period,
            next_due: now + period,
        }
    }

    /// Returns the period between ticks.
    #[must_use]
    pub const fn period(&self) -> Duration {
        self.period
    }

    /// Time of the previous tick, or of the start if it has not ticked yet.
    #[must_use]
    pub fn last_tick(&self) -> Duration {
        self.next_due.saturating_sub(self.period)
    }

    /// Consumes the current tick and schedules the next one.
    ///
    /// Returns the time the consumed tick was due.
    pub fn tick(&mut self) -> Duration {
        let fired = self.next_due;
        self.next_due += self.period;
        fired
    }
}

impl Deadline for Interval {
    fn due(&self) -> Duration {
        self.next_due
    }
}

/// Storage for at most one armed timer.
#[derive(Debug)]
pub struct TimerSlot<T: Deadline> {
    name: &'static str,
    timer: Option<T>,
}

impl<T: Deadline> TimerSlot<T> {
    /// Creates an empty slot. `name` appears in trace output only.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self { name, timer: None }
    }

    /// Arms the slot, cancelling whatever timer it held.
    ///
    /// Returns the replaced timer, if any.
    pub fn arm(&mut self, timer: T) -> Option<T> {
        let due = timer.due();
        let replaced = self.timer.replace(timer);
        tracing::trace!(
            slot = self.name,
            due_ms = due.as_millis() as u64,
            replaced = replaced.is_some(),
            "timer armed"
        );
        replaced
    }

    /// Disarms the slot. Returns the cancelled timer, if any.
    pub fn cancel(&mut self) -> Option<T> {
        let cancelled = self.timer.take();
        if cancelled.is_some() {
            tracing::trace!(slot = self.name, "timer cancelled");
        }
        cancelled
    }

    /// Returns `true` if a timer is armed.
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.timer.is_some()
    }

    /// Returns when the armed timer is due.
    #[must_use]
    pub fn due(&self) -> Option<Duration> {
        self.timer.as_ref().map(Deadline::due)
    }

    /// Returns the armed timer.
    #[must_use]
    pub const fn get(&self) -> Option<&T> {
        self.timer.as_ref()
    }

    /// Returns the armed timer mutably.
    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.timer.as_mut()
    }
}

impl<T: Deadline> Drop for TimerSlot<T> {
    fn drop(&mut self) {
        if self.cancel().is_some() {
            tracing::debug!(slot = self.name, "armed timer released on drop");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn interval_ticks_every_period() {
        let mut interval = Interval::starting_at(ms(500), ms(4000));
        assert_eq!(interval.due(), ms(4500));
        assert_eq!(interval.last_tick(), ms(500));

        assert_eq!(interval.tick(), ms(4500));
        assert_eq!(interval.due(), ms(8500));
        assert_eq!(interval.last_tick(), ms(4500));
    }

    #[test]
    fn zero_period_is_clamped() {
        let mut interval = Interval::starting_at(ms(0), Duration::ZERO);
        assert_eq!(interval.period(), MIN_PERIOD);
        assert_eq!(interval.tick(), ms(1));
        assert_eq!(interval.due(), ms(2));
    }

    #[test]
    fn arming_replaces_instead_of_stacking() {
        let mut slot = TimerSlot::new("resume");
        assert!(slot.arm(OneShot::after(ms(0), ms(5000))).is_none());

        let replaced = slot.arm(OneShot::after(ms(1000), ms(5000)));
        assert_eq!(replaced.map(|t| t.due()), Some(ms(5000)));
        assert_eq!(slot.due(), Some(ms(6000)));
    }

    #[test]
    fn cancel_empties_slot() {
        let mut slot = TimerSlot::new("autoplay");
        slot.arm(Interval::starting_at(ms(0), ms(4000)));
        assert!(slot.is_armed());

        assert!(slot.cancel().is_some());
        assert!(!slot.is_armed());
        assert_eq!(slot.due(), None);
        assert!(slot.cancel().is_none());
    }
}
