//! Simulation observer trait for event reporting.

use lift_core::{LiftId, Request};

use crate::SimSummary;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] as the run unfolds.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Delivery is fire-and-forget: methods
/// return nothing, must not panic, and must not try to influence the
/// simulation — they see state, they do not own it.
///
/// # Example — request counter
///
/// ```rust,ignore
/// struct RequestCounter(usize);
///
/// impl SimObserver for RequestCounter {
///     fn on_request_received(&mut self, _elapsed_secs: f64, _request: &Request) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait SimObserver {
    /// A request entered the system at its scheduled time.
    fn on_request_received(&mut self, _elapsed_secs: f64, _request: &Request) {}

    /// A lift stopped at `floor` and opened its doors for `wait_secs`.
    fn on_lift_stopped(&mut self, _elapsed_secs: f64, _lift: LiftId, _floor: i32, _wait_secs: f64) {
    }

    /// A lift left `floor` heading for `target_floor`.
    fn on_lift_departed(
        &mut self,
        _elapsed_secs: f64,
        _lift: LiftId,
        _floor: i32,
        _target_floor: i32,
    ) {
    }

    /// Called once after the run terminates.
    fn on_sim_end(&mut self, _summary: &SimSummary) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
