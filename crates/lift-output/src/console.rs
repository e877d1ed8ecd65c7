//! `ConsoleLogger<W>` — renders run notifications as text.

use std::io::{self, Write};

use lift_core::{LiftId, Request};
use lift_sim::{SimObserver, SimSummary};

/// A [`SimObserver`] that writes one human-readable line per notification.
///
/// Observer methods have no return value, so write failures are stored
/// internally; after `sim.run()` returns, check for one with
/// [`take_error`][Self::take_error].  Only the first error is kept —
/// everything after it is dropped silently.
pub struct ConsoleLogger<W: Write> {
    sink:       W,
    last_error: Option<io::Error>,
}

impl ConsoleLogger<io::Stdout> {
    /// A logger writing to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleLogger<W> {
    /// Create a logger backed by `sink`.
    pub fn new(sink: W) -> Self {
        Self { sink, last_error: None }
    }

    /// Take the stored write error (if any) after the run.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.last_error.take()
    }

    /// Unwrap the inner sink (e.g. to inspect a buffer in tests).
    pub fn into_sink(self) -> W {
        self.sink
    }

    fn log(&mut self, elapsed_secs: f64, message: std::fmt::Arguments<'_>) {
        let result = writeln!(self.sink, "{elapsed_secs:.1}: {message}");
        if let Err(e) = result {
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: Write> SimObserver for ConsoleLogger<W> {
    fn on_request_received(&mut self, elapsed_secs: f64, request: &Request) {
        self.log(
            elapsed_secs,
            format_args!(
                "Passenger on floor {} pressed {} (going to floor {})",
                request.from_floor,
                request.pressed_direction(),
                request.to_floor
            ),
        );
    }

    fn on_lift_stopped(&mut self, elapsed_secs: f64, lift: LiftId, floor: i32, wait_secs: f64) {
        self.log(
            elapsed_secs,
            format_args!("Lift {} arrived on floor {floor}; waiting for {wait_secs} seconds", lift.0),
        );
    }

    fn on_lift_departed(
        &mut self,
        elapsed_secs: f64,
        lift: LiftId,
        floor: i32,
        target_floor: i32,
    ) {
        self.log(
            elapsed_secs,
            format_args!("Lift {} leaving floor {floor}; heading to floor {target_floor}", lift.0),
        );
    }

    fn on_sim_end(&mut self, summary: &SimSummary) {
        self.log(
            summary.elapsed_secs,
            format_args!(
                "Simulation finished; total passenger time {:.1} seconds",
                summary.total_passenger_time_secs
            ),
        );
    }
}
