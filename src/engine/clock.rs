//! Fixed-interval step timing.

use crate::schema::ConfigError;

/// Accumulates elapsed time and fires at most once per call.
///
/// When a single `advance` spans several periods the accumulator drains
/// to its remainder but only one firing is reported, so a long frame
/// never bursts the simulation; the remainder carries into later calls.
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    accumulator: f32,
    period: f32,
}

impl IntervalTimer {
    /// Create a timer with the given period in seconds.
    pub fn new(period: f32) -> Result<Self, ConfigError> {
        if !(period > 0.0 && period.is_finite()) {
            return Err(ConfigError::InvalidPeriod(period));
        }
        Ok(Self {
            accumulator: 0.0,
            period,
        })
    }

    /// Current period in seconds.
    pub fn period(&self) -> f32 {
        self.period
    }

    /// Change the period; the accumulator is kept.
    pub fn set_period(&mut self, period: f32) -> Result<(), ConfigError> {
        if !(period > 0.0 && period.is_finite()) {
            return Err(ConfigError::InvalidPeriod(period));
        }
        self.period = period;
        Ok(())
    }

    /// Add `dt` seconds; returns `true` when a step is due.
    pub fn advance(&mut self, dt: f32) -> bool {
        self.accumulator += dt;
        if self.accumulator <= self.period {
            return false;
        }
        while self.accumulator > self.period {
            self.accumulator -= self.period;
        }
        if self.accumulator < 0.0 {
            self.accumulator = 0.0;
        }
        true
    }

    /// Drop any accumulated time.
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_period_rejected() {
        for period in [0.0, -1.0, f32::NAN] {
            assert!(
                IntervalTimer::new(period).is_err(),
                "period {} should be rejected",
                period
            );
        }
    }

    #[test]
    fn test_no_fire_below_period() {
        let mut timer = IntervalTimer::new(0.25).unwrap();

        assert!(!timer.advance(0.1));
        assert!(!timer.advance(0.1));
        // 0.3 accumulated: fires and carries the remainder
        assert!(timer.advance(0.1));
    }

    #[test]
    fn test_long_frame_fires_once_and_keeps_remainder() {
        let mut timer = IntervalTimer::new(0.25).unwrap();

        assert!(timer.advance(0.6));
        assert!(
            (timer.accumulator - 0.1).abs() < 1e-6,
            "expected remainder 0.1, got {}",
            timer.accumulator
        );

        // The remainder alone is below the period
        assert!(!timer.advance(0.1));
    }

    #[test]
    fn test_remainder_carries_across_calls() {
        let mut timer = IntervalTimer::new(0.25).unwrap();

        assert!(timer.advance(0.3));
        // 0.05 left over; 0.21 more crosses the threshold again
        assert!(timer.advance(0.21));
    }

    #[test]
    fn test_exact_period_does_not_fire() {
        // The threshold is strictly greater-than
        let mut timer = IntervalTimer::new(0.25).unwrap();
        assert!(!timer.advance(0.25));
        assert!(timer.advance(0.001));
    }

    #[test]
    fn test_reset_drops_accumulated_time() {
        let mut timer = IntervalTimer::new(0.25).unwrap();
        timer.advance(0.2);
        timer.reset();

        assert!(!timer.advance(0.2));
    }

    #[test]
    fn test_set_period_applies_to_next_advance() {
        let mut timer = IntervalTimer::new(1.0).unwrap();
        assert!(!timer.advance(0.3));

        timer.set_period(0.25).unwrap();
        assert!(timer.advance(0.0));
    }
}
