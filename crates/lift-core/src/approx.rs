//! Tolerance-based float comparison.
//!
//! The simulation advances continuous quantities (elapsed seconds, wait
//! countdowns, car position) in fixed 0.1 s steps, so repeated addition
//! accumulates rounding error well below the step size.  Every equality test
//! on those quantities goes through this module with a fixed tolerance;
//! exact `==` on them is a bug.

/// Comparison tolerance for times, wait countdowns, and floor alignment.
pub const EPSILON: f64 = 1e-4;

/// `true` when `x` is within [`EPSILON`] of zero.
#[inline]
pub fn is_zeroish(x: f64) -> bool {
    x.abs() < EPSILON
}

/// `true` when `a` and `b` differ by less than [`EPSILON`].
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    is_zeroish(a - b)
}
