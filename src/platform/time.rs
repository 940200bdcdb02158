//! Frame pacing
//!
//! Clocks only pace the loop. Gameplay timing (spawn intervals) is counted
//! in simulated ticks, so swapping clocks never changes the game.

use std::time::{Duration, Instant};

pub trait Clock {
    /// Block until the next tick boundary
    fn advance(&mut self);
    /// Time since the clock started
    fn elapsed(&self) -> Duration;
}

/// Wall-clock pacing at a fixed rate.
///
/// Boundaries are scheduled from the start time, so a slow frame is caught
/// up instead of pushing every later frame back. A frame more than one
/// period late resets the schedule rather than bursting.
#[derive(Debug, Clone)]
pub struct FixedRateClock {
    period: Duration,
    start: Instant,
    next: Instant,
}

impl FixedRateClock {
    pub fn new(period: Duration) -> Self {
        let start = Instant::now();
        Self {
            period,
            start,
            next: start + period,
        }
    }

    /// Clock ticking `hz` times per second
    pub fn from_hz(hz: u32) -> Self {
        Self::new(Duration::from_secs_f64(1.0 / f64::from(hz.max(1))))
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

impl Clock for FixedRateClock {
    fn advance(&mut self) {
        let now = Instant::now();
        if now < self.next {
            std::thread::sleep(self.next - now);
            self.next += self.period;
        } else if now - self.next > self.period {
            log::trace!("Frame overran by {:?}; resyncing", now - self.next);
            self.next = now + self.period;
        } else {
            self.next += self.period;
        }
    }

    fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Clock that never sleeps; elapsed time is ticks x period.
/// For tests and headless runs.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    period: Duration,
    ticks: u64,
}

impl ManualClock {
    pub fn new(period: Duration) -> Self {
        Self { period, ticks: 0 }
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

impl Clock for ManualClock {
    fn advance(&mut self) {
        self.ticks += 1;
    }

    fn elapsed(&self) -> Duration {
        self.period
            .saturating_mul(u32::try_from(self.ticks).unwrap_or(u32::MAX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_counts() {
        let mut clock = ManualClock::new(Duration::from_millis(10));
        for _ in 0..25 {
            clock.advance();
        }
        assert_eq!(clock.ticks(), 25);
        assert_eq!(clock.elapsed(), Duration::from_millis(250));
    }

    #[test]
    fn test_manual_clock_saturates() {
        let clock = ManualClock {
            period: Duration::from_secs(u64::MAX / 2),
            ticks: u64::from(u32::MAX) + 7,
        };
        assert_eq!(clock.elapsed(), Duration::MAX);

        let clock = ManualClock {
            period: Duration::from_nanos(1),
            ticks: u64::from(u32::MAX) + 7,
        };
        assert_eq!(clock.elapsed(), Duration::from_nanos(u64::from(u32::MAX)));
    }

    #[test]
    fn test_fixed_rate_clock_paces() {
        let mut clock = FixedRateClock::new(Duration::from_millis(5));
        for _ in 0..4 {
            clock.advance();
        }
        assert!(clock.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn test_from_hz() {
        let clock = FixedRateClock::from_hz(50);
        assert_eq!(clock.period(), Duration::from_millis(20));
    }
}
