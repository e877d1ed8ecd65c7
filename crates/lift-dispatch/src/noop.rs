//! A no-op dispatch strategy — lifts are never commanded.

use lift_core::Request;
use lift_model::Lift;

use crate::{DispatchResult, DispatchStrategy};

/// A [`DispatchStrategy`] that ignores every request and floor arrival.
///
/// Useful as a placeholder in tests: requests are delivered and silently
/// dropped, no lift ever becomes busy, and the run ends as soon as the last
/// request has been handed over.
pub struct NoopStrategy;

impl DispatchStrategy for NoopStrategy {
    fn on_request(&mut self, _lifts: &mut [Lift], _request: &Request) -> DispatchResult<()> {
        Ok(())
    }

    fn on_floor(&mut self, _lift: &mut Lift, _floor: i32) -> DispatchResult<()> {
        Ok(())
    }
}
