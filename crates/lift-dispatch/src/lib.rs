//! `lift-dispatch` — the dispatch strategy contract and its reference
//! implementation.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`strategy`] | `DispatchStrategy` trait                                  |
//! | [`noop`]     | `NoopStrategy` — never commands anything                  |
//! | [`naive`]    | `NaiveStrategy` — FIFO queue per lift + unassigned pool   |
//! | [`error`]    | `DispatchError`, `DispatchResult<T>`                      |
//!
//! # Design notes
//!
//! The engine calls a strategy at exactly two points: when a request arrives
//! (`on_request`) and when a lift's discrete floor is newly observed
//! (`on_floor`).  A strategy responds by commanding lifts through their two
//! mutation operations; everything else about a lift is read-only to it.
//! Commanding movement while a lift is between floors is a fatal caller
//! error and surfaces as `Err` — the engine performs no recovery.

pub mod error;
pub mod naive;
pub mod noop;
pub mod strategy;


pub use error::{DispatchError, DispatchResult};
pub use naive::NaiveStrategy;
pub use noop::NoopStrategy;
pub use strategy::DispatchStrategy;
