//! Vertical motion primitives shared by the car model and dispatch strategies.

/// The direction a car is moving (or commanded to move).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Heading toward lower floors.
    Down,
    /// Stationary (default state).
    #[default]
    Idle,
    /// Heading toward higher floors.
    Up,
}

impl Direction {
    /// The direction from `from` toward `to`.  Equal floors yield `Idle`.
    #[inline]
    pub fn toward(from: i32, to: i32) -> Direction {
        match to.cmp(&from) {
            std::cmp::Ordering::Less    => Direction::Down,
            std::cmp::Ordering::Equal   => Direction::Idle,
            std::cmp::Ordering::Greater => Direction::Up,
        }
    }

    /// `true` for any direction that causes the car to be in motion.
    #[inline]
    pub fn is_moving(self) -> bool {
        !matches!(self, Direction::Idle)
    }

    /// Signed unit displacement per metre travelled: −1.0, 0.0, or +1.0.
    #[inline]
    pub fn as_f64(self) -> f64 {
        match self {
            Direction::Down => -1.0,
            Direction::Idle => 0.0,
            Direction::Up   => 1.0,
        }
    }

    /// Human-readable label, matching the call-button wording in log output.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Down => "down",
            Direction::Idle => "??",
            Direction::Up   => "up",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Intent ────────────────────────────────────────────────────────────────────

/// Where a moving car is currently heading.
///
/// Attached to a car by `set_direction` and cleared by the next stop; carried
/// on departure notifications so observers can report the destination.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Intent {
    pub target_floor: i32,
}
