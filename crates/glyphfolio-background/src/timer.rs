//! Repeating regeneration timer, driven by the caller's elapsed time.

use std::time::Duration;

/// Interval between batch regenerations.
pub const TICK_INTERVAL: Duration = Duration::from_millis(500);

/// A repeating timer owned by a mounted animator.
///
/// The timer does not spawn anything: the event loop reports elapsed time
/// and the timer answers whether a tick is due. Dropping it cancels it.
#[derive(Debug)]
pub struct RegenTimer {
    /// Period in milliseconds.
    period_ms: u64,
    /// Elapsed time at which the next tick fires.
    next_due_ms: u64,
}

impl RegenTimer {
    /// Start a timer whose first tick is one period after `now_ms`.
    pub fn start(now_ms: u64) -> Self {
        Self::with_period(now_ms, TICK_INTERVAL)
    }

    /// Start a timer with a custom period. A zero period is treated as 1 ms.
    pub fn with_period(now_ms: u64, period: Duration) -> Self {
        let period_ms = (period.as_millis() as u64).max(1);
        tracing::debug!(period_ms, now_ms, "regeneration timer started");
        Self {
            period_ms,
            next_due_ms: now_ms.saturating_add(period_ms),
        }
    }

    /// Consume every tick that is due at `now_ms` and report how many were.
    ///
    /// Missed ticks are counted but the schedule stays on its original
    /// grid, so a stalled loop does not drift the cadence.
    pub fn poll(&mut self, now_ms: u64) -> u64 {
        if now_ms < self.next_due_ms {
            return 0;
        }
        let missed = (now_ms - self.next_due_ms) / self.period_ms + 1;
        self.next_due_ms = self
            .next_due_ms
            .saturating_add(missed.saturating_mul(self.period_ms));
        missed
    }

    /// Elapsed time at which the next tick fires.
    pub fn next_due_ms(&self) -> u64 {
        self.next_due_ms
    }

    pub fn period(&self) -> Duration {
        Duration::from_millis(self.period_ms)
    }
}

impl Drop for RegenTimer {
    fn drop(&mut self) {
        tracing::debug!(next_due_ms = self.next_due_ms, "regeneration timer cancelled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_tick_before_period() {
        let mut timer = RegenTimer::start(1_000);
        assert_eq!(timer.poll(1_000), 0);
        assert_eq!(timer.poll(1_499), 0);
        assert_eq!(timer.next_due_ms(), 1_500);
    }

    #[test]
    fn test_tick_every_period() {
        let mut timer = RegenTimer::start(0);
        assert_eq!(timer.poll(500), 1);
        assert_eq!(timer.poll(700), 0);
        assert_eq!(timer.poll(1_000), 1);
        assert_eq!(timer.next_due_ms(), 1_500);
    }

    #[test]
    fn test_missed_ticks_keep_grid() {
        let mut timer = RegenTimer::start(0);
        assert_eq!(timer.poll(1_740), 3);
        assert_eq!(timer.next_due_ms(), 2_000);
        assert_eq!(timer.poll(2_000), 1);
    }

    #[test]
    fn test_zero_period_is_clamped() {
        let mut timer = RegenTimer::with_period(0, Duration::ZERO);
        assert_eq!(timer.period(), Duration::from_millis(1));
        assert_eq!(timer.poll(5), 5);
    }
}
