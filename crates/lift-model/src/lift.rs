//! The `Lift` state machine.

use lift_core::approx;
use lift_core::{Direction, Intent, LiftId, SimParams};

use crate::{LiftError, LiftEvent, LiftResult};

// ── FloorPosition ─────────────────────────────────────────────────────────────

/// The discrete floor derived from a car's continuous position.
///
/// A car has a floor only while its position is within tolerance of an exact
/// floor multiple; in motion between levels it has none.  The two-variant
/// form keeps "between floors" an explicit state rather than a sentinel
/// numeric value.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum FloorPosition {
    /// Aligned with floor `n`.
    At(i32),
    /// Strictly between two floors.
    Between,
}

impl FloorPosition {
    /// Derive the floor from a vertical position.
    ///
    /// Defined iff `y` is within [`approx::EPSILON`] of the nearest integer
    /// multiple of `floor_height` — symmetric on both sides, so a car
    /// creeping up on a basement floor resolves the same way as one
    /// descending onto it.
    pub fn from_y(y: f64, floor_height: f64) -> FloorPosition {
        let nearest = (y / floor_height).round();
        if approx::is_zeroish(y - nearest * floor_height) {
            FloorPosition::At(nearest as i32)
        } else {
            FloorPosition::Between
        }
    }

    /// The floor number, or `None` while between floors.
    #[inline]
    pub fn at(self) -> Option<i32> {
        match self {
            FloorPosition::At(floor) => Some(floor),
            FloorPosition::Between   => None,
        }
    }
}

// ── Lift ──────────────────────────────────────────────────────────────────────

/// One elevator car.
///
/// Exactly one of three modes holds at any instant:
///
/// - **waiting** — doors open, `wait_secs > 0`; the car ignores commands'
///   motion effects until the timer runs out.
/// - **moving** — `direction` is non-idle and the floor may be undefined.
/// - **idle** — neither of the above.
///
/// Fields are private: dispatch strategies command a car only through
/// [`stop_and_fill`][Lift::stop_and_fill] and
/// [`set_direction`][Lift::set_direction], and the engine advances it with
/// [`tick`][Lift::tick].
#[derive(Debug)]
pub struct Lift {
    id:     LiftId,
    params: SimParams,

    /// Continuous vertical position in metres.
    y: f64,
    /// Discrete floor derived from `y` after every tick.
    floor: FloorPosition,

    /// Actual motion this tick.
    direction: Direction,
    /// Commanded motion; becomes actual once any pending wait elapses.
    requested_direction: Direction,
    /// Destination attached to the current command.
    intent: Option<Intent>,

    /// Door-open countdown, in simulated seconds.
    wait_secs: f64,
    /// One-shot edge flag: the wait just elapsed and motion has not yet
    /// resumed.  Drives the exactly-once departure notification.
    ready: bool,
    /// An outstanding commanded destination exists.
    busy: bool,
    /// Sticky: the car has completed at least one boarding/alighting stop.
    used: bool,

    /// Notifications produced since the last drain.
    pending: Vec<LiftEvent>,
}

impl Lift {
    /// Create a car resting at `floor`.
    pub fn new(id: LiftId, floor: i32, params: SimParams) -> Self {
        Self {
            id,
            params,
            y: floor as f64 * params.floor_height_m,
            floor: FloorPosition::At(floor),
            direction: Direction::Idle,
            requested_direction: Direction::Idle,
            intent: None,
            wait_secs: 0.0,
            ready: false,
            busy: false,
            used: false,
            pending: Vec::new(),
        }
    }

    // ── Command operations (the strategy-facing surface) ──────────────────

    /// Stop at the current floor and open the doors for boarding/alighting.
    ///
    /// Clears the commanded and actual direction and the intent, starts the
    /// door-open countdown, and marks the car no longer busy.  Fails when the
    /// car is between floors — there is no floor to stop at, and a strategy
    /// issuing this is broken.
    pub fn stop_and_fill(&mut self) -> LiftResult<()> {
        let FloorPosition::At(floor) = self.floor else {
            return Err(LiftError::BetweenFloors(self.id));
        };

        self.requested_direction = Direction::Idle;
        self.intent = None;
        self.direction = Direction::Idle;
        self.wait_secs = self.params.stop_wait_secs;
        self.busy = false;
        self.used = true;

        self.pending.push(LiftEvent::Stopped {
            floor,
            wait_secs: self.wait_secs,
        });
        Ok(())
    }

    /// Command the car toward `intent.target_floor`.
    ///
    /// Takes effect on subsequent ticks, once any pending door-open wait has
    /// elapsed; nothing moves synchronously.
    pub fn set_direction(&mut self, direction: Direction, intent: Intent) {
        self.requested_direction = direction;
        self.intent = Some(intent);
        self.busy = true;
    }

    // ── Engine-facing surface ─────────────────────────────────────────────

    /// Advance the car by one tick.
    ///
    /// A waiting car only counts down its timer; the tick the timer crosses
    /// zero arms `ready`, and the first subsequent moving tick consumes it to
    /// emit the departure notification exactly once.
    pub fn tick(&mut self) {
        if self.is_waiting() {
            self.wait_secs -= self.params.tick_duration_secs;
            if !self.is_waiting() {
                self.ready = true;
            }
            return;
        }

        if self.requested_direction.is_moving() && self.ready {
            self.ready = false;
            if let (FloorPosition::At(floor), Some(intent)) = (self.floor, self.intent) {
                self.pending.push(LiftEvent::Departed {
                    floor,
                    target_floor: intent.target_floor,
                });
            }
        }

        self.direction = self.requested_direction;
        self.y += self.direction.as_f64() * self.params.speed_mps * self.params.tick_duration_secs;
        self.floor = FloorPosition::from_y(self.y, self.params.floor_height_m);
    }

    /// Take all notifications produced since the last drain, oldest first.
    pub fn drain_events(&mut self) -> Vec<LiftEvent> {
        std::mem::take(&mut self.pending)
    }

    // ── Read-only state ───────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> LiftId {
        self.id
    }

    /// Continuous vertical position in metres.
    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[inline]
    pub fn floor(&self) -> FloorPosition {
        self.floor
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    pub fn requested_direction(&self) -> Direction {
        self.requested_direction
    }

    #[inline]
    pub fn intent(&self) -> Option<Intent> {
        self.intent
    }

    /// Remaining door-open time, in simulated seconds.
    #[inline]
    pub fn wait_secs(&self) -> f64 {
        self.wait_secs
    }

    /// Doors are open and the countdown has not run out.
    #[inline]
    pub fn is_waiting(&self) -> bool {
        !approx::is_zeroish(self.wait_secs)
    }

    /// The wait just elapsed and motion has not yet resumed.
    #[inline]
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// An outstanding commanded destination exists.
    #[inline]
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// The car has ever completed a boarding/alighting stop.
    #[inline]
    pub fn is_used(&self) -> bool {
        self.used
    }
}
