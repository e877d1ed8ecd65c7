//! `lift-model` — the physical model of one elevator car.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                      |
//! |-----------|---------------------------------------------------------------|
//! | [`lift`]  | `Lift` state machine and `FloorPosition`                      |
//! | [`event`] | `LiftEvent` — buffered stop/departure notifications           |
//! | [`error`] | `LiftError`, `LiftResult<T>`                                  |
//!
//! # Design notes
//!
//! A `Lift` is a passive machine: it holds continuous vertical position, the
//! discrete floor derived from it, a commanded direction, and a door-open
//! wait timer.  It changes state only through three entry points:
//!
//! 1. `stop_and_fill` / `set_direction` — the **only** mutations dispatch
//!    strategies are allowed to perform.
//! 2. `tick` — called by the engine once per loop iteration to advance the
//!    wait timer and kinematics.
//!
//! Notifications are not delivered synchronously; they accumulate in a
//! per-car buffer and the engine drains them (via `drain_events`) right
//! after the call that produced them, so observers see the same order a
//! synchronous callback would have produced.

pub mod error;
pub mod event;
pub mod lift;


pub use error::{LiftError, LiftResult};
pub use event::LiftEvent;
pub use lift::{FloorPosition, Lift};
