//! `lift-sim` — tick loop engine for the liftsim test bench.
//!
//! # Four-phase tick loop
//!
//! ```text
//! loop:
//!   ① Deliver   — pop every request due now (ε-compare, stable order) and
//!                 hand each to DispatchStrategy::on_request.
//!   ② Arrivals  — for each lift whose discrete floor is newly observed,
//!                 call DispatchStrategy::on_floor (list order).
//!   ③ Finished? — no pending requests and no busy lift → stop before
//!                 advancing time and report the passenger-time total.
//!   ④ Advance   — tick every lift in list order, advance the clock one
//!                 tick, and accumulate passenger time while any lift has
//!                 ever completed a stop.
//! ```
//!
//! The list order in phases ② and ④ is the engine's only concession to
//! "concurrency" and is part of its contract: runs are deterministic and
//! reproducible.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_dispatch::NaiveStrategy;
//! use lift_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(NaiveStrategy::new())
//!     .initial_floors(vec![0, 12, 40])
//!     .requests(requests)
//!     .build()?;
//! let summary = sim.run(&mut NoopObserver)?;
//! println!("{:.1}", summary.total_passenger_time_secs);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod queue;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use queue::RequestQueue;
pub use sim::{Sim, SimSummary};
