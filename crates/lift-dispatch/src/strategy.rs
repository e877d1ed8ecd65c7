//! The `DispatchStrategy` trait — the main extension point for dispatch
//! algorithms.

use lift_core::Request;
use lift_model::Lift;

use crate::DispatchResult;

/// Pluggable dispatch logic.
///
/// Implement this trait to decide how the fleet responds to passenger
/// requests and floor arrivals.  Implementations hold their own bookkeeping
/// (queues, assignments) keyed by [`LiftId`][lift_core::LiftId] and command
/// lifts exclusively through [`Lift::stop_and_fill`] and
/// [`Lift::set_direction`].
///
/// # Contract
///
/// - `set_direction` takes effect only after any pending door-open wait
///   completes, never instantly — plan around the delay.
/// - Never command movement while a lift's floor is undefined (it is
///   between floors); return the resulting error instead of swallowing it.
/// - A strategy that leaves a request permanently unresolved makes the run
///   non-terminating.  The engine does not detect this.
pub trait DispatchStrategy {
    /// Called exactly once per request, at its scheduled time, before any
    /// floor callback of the same tick.
    ///
    /// May command zero or more lifts, or defer the request for later.
    fn on_request(&mut self, lifts: &mut [Lift], request: &Request) -> DispatchResult<()>;

    /// Called whenever `lift`'s discrete floor is newly observed — on its
    /// very first observation at simulation start and on every arrival at a
    /// different floor, never repeatedly while it stands still.
    fn on_floor(&mut self, lift: &mut Lift, floor: i32) -> DispatchResult<()>;
}
