//! `lift-core` — foundational types for the `liftsim` dispatch test bench.
//!
//! This crate is a dependency of every other `lift-*` crate.  It intentionally
//! has no `lift-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`ids`]     | `LiftId`                                              |
//! | [`approx`]  | `EPSILON`, tolerance-based float comparison           |
//! | [`time`]    | `SimClock`                                            |
//! | [`params`]  | `SimParams` — the building's physical constants       |
//! | [`motion`]  | `Direction`, `Intent`                                 |
//! | [`request`] | `Request`                                             |
//! | [`rng`]     | `SimRng` (seeded placement generation)                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod approx;
pub mod ids;
pub mod motion;
pub mod params;
pub mod request;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::LiftId;
pub use motion::{Direction, Intent};
pub use params::SimParams;
pub use request::Request;
pub use rng::SimRng;
pub use time::SimClock;
