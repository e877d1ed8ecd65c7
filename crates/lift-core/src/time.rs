//! Simulation time model.
//!
//! # Design
//!
//! Time is represented as a monotonically increasing tick counter.  The
//! mapping to simulated seconds is held in `SimClock`:
//!
//!   elapsed_secs = tick * tick_duration_secs
//!
//! Using an integer tick as the canonical time unit means the counter itself
//! never drifts; the derived seconds value carries at most one multiplication
//! worth of rounding error, absorbed everywhere by the [`approx`][crate::approx]
//! tolerance.
//!
//! The default tick duration is 0.1 s.  One tick loop iteration advances the
//! clock by exactly one tick.

use std::fmt;

/// Tracks the current tick of a run and converts it to simulated seconds.
///
/// `SimClock` is cheap to copy and intentionally holds no heap data.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// The current tick — advanced by `SimClock::advance()` each iteration.
    pub current_tick: u64,
    /// How many simulated seconds one tick represents.  Default: 0.1.
    pub tick_duration_secs: f64,
}

impl SimClock {
    /// Create a clock at tick 0 with the given resolution.
    pub fn new(tick_duration_secs: f64) -> Self {
        Self {
            current_tick: 0,
            tick_duration_secs,
        }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick += 1;
    }

    /// Elapsed simulated seconds since tick 0.
    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.current_tick as f64 * self.tick_duration_secs
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{} ({:.1}s)", self.current_tick, self.elapsed_secs())
    }
}
