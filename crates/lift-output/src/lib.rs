//! `lift-output` — human-readable event logging for liftsim runs.
//!
//! Bridges the engine's [`SimObserver`][lift_sim::SimObserver] callbacks to
//! any `io::Write` sink as one line of text per notification.

pub mod console;

#[cfg(test)]
mod tests;

pub use console::ConsoleLogger;
