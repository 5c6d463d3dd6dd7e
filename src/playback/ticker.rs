//! Frame-rate independent step ticker.
//!
//! Converts elapsed clock time into a whole number of trajectory steps at a
//! target rate. Fractional step time is carried between calls, so the average
//! playback rate converges on the configured rate however often, or however
//! irregularly, the host calls [`Ticker::tick`].

use super::clock::{Clock, MonotonicClock};
use crate::error::SpinaError;

/// Playback rate used when nothing else is configured.
pub const DEFAULT_STEPS_PER_SECOND: f64 = 30.0;

/// Accumulating step ticker.
#[derive(Debug, Clone)]
pub struct Ticker<C: Clock = MonotonicClock> {
    clock: C,
    steps_per_second: f64,
    step_duration_ms: f64,
    accumulated_ms: f64,
    last_tick_ms: Option<f64>,
}

impl Ticker<MonotonicClock> {
    /// Ticker on the wall clock at `steps_per_second`.
    pub fn new(steps_per_second: f64) -> Result<Self, SpinaError> {
        Self::with_clock(MonotonicClock::new(), steps_per_second)
    }
}

impl Default for Ticker<MonotonicClock> {
    fn default() -> Self {
        Self {
            clock: MonotonicClock::new(),
            steps_per_second: DEFAULT_STEPS_PER_SECOND,
            step_duration_ms: 1000.0 / DEFAULT_STEPS_PER_SECOND,
            accumulated_ms: 0.0,
            last_tick_ms: None,
        }
    }
}

impl<C: Clock> Ticker<C> {
    /// Ticker reading time from `clock`.
    pub fn with_clock(
        clock: C,
        steps_per_second: f64,
    ) -> Result<Self, SpinaError> {
        validate_rate(steps_per_second)?;
        Ok(Self {
            clock,
            steps_per_second,
            step_duration_ms: 1000.0 / steps_per_second,
            accumulated_ms: 0.0,
            last_tick_ms: None,
        })
    }

    /// Number of whole steps elapsed since the previous call.
    ///
    /// The first call after construction or [`reset`](Self::reset) only
    /// seeds the clock and returns 0.
    pub fn tick(&mut self) -> usize {
        let now = self.clock.now_ms();
        // A clock reading behind the last tick counts as no elapsed time.
        let dt = self
            .last_tick_ms
            .map_or(0.0, |last| (now - last).max(0.0));
        self.last_tick_ms = Some(now);
        self.accumulated_ms += dt;

        if self.accumulated_ms < self.step_duration_ms {
            return 0;
        }
        let steps = (self.accumulated_ms / self.step_duration_ms).floor();
        self.accumulated_ms %= self.step_duration_ms;
        steps as usize
    }

    /// Change the target rate. Drops any carried fractional step time.
    pub fn set_steps_per_second(
        &mut self,
        steps_per_second: f64,
    ) -> Result<(), SpinaError> {
        validate_rate(steps_per_second)?;
        self.steps_per_second = steps_per_second;
        self.step_duration_ms = 1000.0 / steps_per_second;
        self.accumulated_ms = 0.0;
        Ok(())
    }

    /// Forget the last timestamp and carried time.
    pub fn reset(&mut self) {
        self.last_tick_ms = None;
        self.accumulated_ms = 0.0;
    }

    /// Target rate.
    pub fn steps_per_second(&self) -> f64 {
        self.steps_per_second
    }

    /// Milliseconds per step at the target rate.
    pub fn step_duration_ms(&self) -> f64 {
        self.step_duration_ms
    }

    /// Carried time not yet converted into a step.
    pub fn accumulated_ms(&self) -> f64 {
        self.accumulated_ms
    }

    /// Whether a previous tick has recorded a timestamp.
    pub fn is_seeded(&self) -> bool {
        self.last_tick_ms.is_some()
    }
}

/// Reject rates the ticker cannot divide by.
pub(crate) fn validate_rate(steps_per_second: f64) -> Result<(), SpinaError> {
    if steps_per_second.is_finite() && steps_per_second > 0.0 {
        Ok(())
    } else {
        Err(SpinaError::InvalidRate(steps_per_second))
    }
}
