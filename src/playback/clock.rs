//! Time sources for the playback ticker.
//!
//! The ticker only needs a monotonically non-decreasing millisecond reading,
//! the same contract as `performance.now()` in a browser. [`MonotonicClock`]
//! is the production source; [`ManualClock`] is driven by hand for tests and
//! deterministic headless playback.

use std::cell::Cell;
use std::rc::Rc;

use web_time::Instant;

/// A source of elapsed milliseconds.
pub trait Clock {
    /// Milliseconds since an arbitrary fixed origin.
    fn now_ms(&self) -> f64;
}

/// Wall clock backed by a monotonic [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    /// Clock whose origin is the moment of construction.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_nanos() as f64 / 1e6
    }
}

/// Hand-driven clock.
///
/// Clones share the same reading, so a test can keep one handle while the
/// ticker owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now_ms: Rc<Cell<f64>>,
}

impl ManualClock {
    /// Clock reading `0.0` ms.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the reading forward by `ms`.
    pub fn advance(&self, ms: f64) {
        self.now_ms.set(self.now_ms.get() + ms);
    }

    /// Jump to an absolute reading.
    pub fn set(&self, ms: f64) {
        self.now_ms.set(ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now_ms.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_clones_share_time() {
        let clock = ManualClock::new();
        let handle = clock.clone();
        handle.advance(16.0);
        handle.advance(4.5);
        assert_eq!(clock.now_ms(), 20.5);
        clock.set(3.0);
        assert_eq!(handle.now_ms(), 3.0);
    }

    #[test]
    fn monotonic_clock_never_goes_backwards() {
        let clock = MonotonicClock::new();
        let a = clock.now_ms();
        let b = clock.now_ms();
        assert!(a >= 0.0);
        assert!(b >= a);
    }
}
