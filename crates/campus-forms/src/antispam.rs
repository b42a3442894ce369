// File: src/antispam.rs
// Purpose: Render-time stamp and the clock it is measured with

use std::cell::Cell;
use std::rc::Rc;

use crate::error::FormError;

/// Source of "now" in milliseconds since the Unix epoch
pub trait Clock {
    fn now_ms(&self) -> i64;
}

/// Wall clock via chrono
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Hand-driven clock for deterministic timing
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<i64>,
}

impl ManualClock {
    pub fn new(start_ms: i64) -> Self {
        Self { now: Cell::new(start_ms) }
    }

    pub fn advance(&self, ms: i64) {
        self.now.set(self.now.get() + ms);
    }

    pub fn set(&self, ms: i64) {
        self.now.set(ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> i64 {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for Rc<C> {
    fn now_ms(&self) -> i64 {
        (**self).now_ms()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> i64 {
        (**self).now_ms()
    }
}

/// Moment the form was rendered
///
/// Rejecting fast submissions is a weak control: a bot that waits
/// a couple of seconds passes. It only filters the laziest scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderStamp(i64);

impl RenderStamp {
    pub fn capture(clock: &impl Clock) -> Self {
        Self(clock.now_ms())
    }

    pub fn from_millis(ms: i64) -> Self {
        Self(ms)
    }

    pub fn millis(&self) -> i64 {
        self.0
    }

    pub fn elapsed_ms(&self, now_ms: i64) -> i64 {
        now_ms - self.0
    }

    /// Fails when fewer than `min_fill_time_ms` elapsed since render
    pub fn check(&self, now_ms: i64, min_fill_time_ms: u64) -> Result<(), FormError> {
        let elapsed_ms = self.elapsed_ms(now_ms);
        if elapsed_ms < min_fill_time_ms as i64 {
            return Err(FormError::SubmittedTooFast { elapsed_ms });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock() {
        let clock = ManualClock::new(1_000);
        clock.advance(250);
        assert_eq!(clock.now_ms(), 1_250);
        clock.set(5);
        assert_eq!(clock.now_ms(), 5);
    }

    #[test]
    fn test_stamp_threshold() {
        let clock = ManualClock::new(10_000);
        let stamp = RenderStamp::capture(&clock);
        assert_eq!(stamp.millis(), 10_000);

        assert_eq!(
            stamp.check(11_999, 2000),
            Err(FormError::SubmittedTooFast { elapsed_ms: 1_999 })
        );
        assert!(stamp.check(12_000, 2000).is_ok());
        assert!(stamp.check(30_000, 2000).is_ok());
    }

    #[test]
    fn test_system_clock_is_after_2020() {
        assert!(SystemClock.now_ms() > 1_577_836_800_000);
    }
}
