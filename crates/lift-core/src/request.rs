//! Passenger travel requests.

use crate::Direction;

/// One passenger journey: appear at `from_floor` at `time_secs`, travel to
/// `to_floor`.
///
/// Requests are immutable values.  The engine consumes each exactly once at
/// its scheduled time; whichever strategy structure tracks it afterwards owns
/// it until fulfilment.  A sequence of requests handed to the engine is
/// assumed pre-sorted ascending by `time_secs` — the engine never sorts
/// (ordering violations are the data loader's to reject).
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Request {
    /// Simulated seconds from run start at which the request arrives.
    pub time_secs: f64,
    /// Floor the passenger is waiting on.
    pub from_floor: i32,
    /// Floor the passenger wants to reach.
    pub to_floor: i32,
}

impl Request {
    /// The call-button direction: `Up`/`Down`, or `Idle` for a same-floor
    /// request.
    #[inline]
    pub fn pressed_direction(&self) -> Direction {
        Direction::toward(self.from_floor, self.to_floor)
    }
}
