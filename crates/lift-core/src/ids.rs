//! Strongly typed, zero-cost lift identifier.
//!
//! `LiftId` is `Copy + Ord + Hash` so it can key maps and sorted collections
//! without ceremony.  Side tables (order queues, last-observed floors) are
//! keyed by this id rather than by reference identity — a lift's position in
//! the engine's list and its id coincide at construction time.

use std::fmt;

/// Index of a lift in the engine's fleet list.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LiftId(pub u32);

impl LiftId {
    /// Sentinel meaning "no valid id" — equivalent to `u32::MAX`.
    pub const INVALID: LiftId = LiftId(u32::MAX);

    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Default for LiftId {
    /// Returns the `INVALID` sentinel so uninitialized ids are visibly invalid.
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for LiftId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LiftId({})", self.0)
    }
}

impl From<LiftId> for usize {
    #[inline(always)]
    fn from(id: LiftId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for LiftId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<LiftId, Self::Error> {
        u32::try_from(n).map(LiftId)
    }
}
