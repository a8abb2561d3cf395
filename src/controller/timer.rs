//! Repeating animation timer
//!
//! The timer is polled, not threaded: the event loop asks it whether a tick
//! is due. Owning the handle is what keeps it alive, so dropping it cancels
//! it.

use std::time::{Duration, Instant};

/// Default time between two animation ticks
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(500);

/// A fixed-interval repeating deadline
#[derive(Debug, Clone)]
pub struct AnimationTimer {
    interval: Duration,
    next_due: Instant,
}

impl AnimationTimer {
    /// Start a timer whose first tick is one interval after `now`
    pub fn start(interval: Duration, now: Instant) -> Self {
        AnimationTimer {
            interval,
            next_due: now + interval,
        }
    }

    /// Consume one tick if it is due at `now`.
    ///
    /// At most one tick fires per call; a late poll does not burst.
    pub fn fire(&mut self, now: Instant) -> bool {
        if now < self.next_due {
            return false;
        }
        self.next_due += self.interval;
        if self.next_due < now {
            self.next_due = now + self.interval;
        }
        true
    }

    /// Time left until the next tick, zero if already due
    pub fn remaining(&self, now: Instant) -> Duration {
        self.next_due.saturating_duration_since(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_per_interval() {
        let t0 = Instant::now();
        let interval = Duration::from_millis(500);
        let mut timer = AnimationTimer::start(interval, t0);

        assert!(!timer.fire(t0));
        assert!(!timer.fire(t0 + Duration::from_millis(499)));
        assert!(timer.fire(t0 + interval));
        assert!(!timer.fire(t0 + interval));
        assert!(timer.fire(t0 + interval * 2));
    }

    #[test]
    fn test_late_poll_does_not_burst() {
        let t0 = Instant::now();
        let interval = Duration::from_millis(100);
        let mut timer = AnimationTimer::start(interval, t0);

        let late = t0 + Duration::from_millis(1000);
        assert!(timer.fire(late));
        assert!(!timer.fire(late));
        assert_eq!(timer.remaining(late), interval);
    }
}
