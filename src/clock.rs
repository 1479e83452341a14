//! SimClock - fixed-step accumulator
//!
//! The host delivers frame deltas at whatever cadence its display runs;
//! the clock accumulates them and fires a generation step whenever the
//! accumulated time exceeds the step interval `1000 / speed_hz`. The
//! accumulator resets to zero when a step fires, so simulation rate is
//! independent of frame rate.

#[derive(Default)]
pub struct SimClock {
    accumulated_ms: f64,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn accumulated_ms(&self) -> f64 { self.accumulated_ms }

    pub fn advance(&mut self, dt_ms: f64) {
        self.accumulated_ms += dt_ms;
    }

    /// True when a generation step is due, resetting the accumulator.
    /// `speed_hz <= 0` means an infinite interval: the clock accumulates
    /// forever and never fires (guards the 1000/speed division).
    pub fn try_consume_step(&mut self, speed_hz: f64) -> bool {
        if speed_hz <= 0.0 {
            return false;
        }
        if self.accumulated_ms > 1000.0 / speed_hz {
            self.accumulated_ms = 0.0;
            return true;
        }
        false
    }
}
