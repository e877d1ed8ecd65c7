//! The `Sim` struct and its tick loop.

use lift_core::{Request, SimClock, SimParams};
use lift_dispatch::DispatchStrategy;
use lift_model::{FloorPosition, Lift, LiftEvent};

use crate::{RequestQueue, SimObserver, SimResult};

// ── SimSummary ────────────────────────────────────────────────────────────────

/// The result of a completed run.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SimSummary {
    /// The dispatch-quality metric: one tick duration accumulated for every
    /// tick advanced after any lift first completed a boarding/alighting
    /// stop.  A coarse whole-run tail measure, not a per-passenger sum —
    /// comparable across strategies on the same data set.
    pub total_passenger_time_secs: f64,

    /// Simulated seconds at which the run terminated.
    pub elapsed_secs: f64,

    /// Ticks executed.
    pub ticks: u64,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The simulation runner.
///
/// `Sim<S>` owns the fleet and the pending-request sequence and drives the
/// four-phase tick loop (deliver → arrivals → finished? → advance) until no
/// pending request and no busy lift remains.  All strategy callbacks and
/// observer notifications happen synchronously inside [`run`][Sim::run];
/// nothing suspends or retries.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<S: DispatchStrategy> {
    /// Physical constants shared by the clock and every lift.
    pub params: SimParams,

    /// Simulation clock — one tick per loop iteration.
    pub clock: SimClock,

    /// The fleet, in delivery/tick order.  This order is a determinism
    /// contract, not an implementation detail.
    pub lifts: Vec<Lift>,

    /// The dispatch strategy under evaluation.
    pub strategy: S,

    /// Engine-private: requests not yet delivered.  Strategies never see
    /// this; they receive requests one at a time through `on_request`.
    requests: RequestQueue,

    /// Engine-private: last floor reported to `on_floor`, per lift, used to
    /// detect genuinely new observations.
    last_floors: Vec<Option<i32>>,

    /// Ticks accumulated into the passenger-time metric so far.
    used_ticks: u64,
}

impl<S: DispatchStrategy> Sim<S> {
    pub(crate) fn new(
        params: SimParams,
        lifts: Vec<Lift>,
        strategy: S,
        requests: Vec<Request>,
    ) -> Self {
        let lift_count = lifts.len();
        Self {
            params,
            clock: SimClock::new(params.tick_duration_secs),
            lifts,
            strategy,
            requests: RequestQueue::new(requests),
            last_floors: vec![None; lift_count],
            used_ticks: 0,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation to completion and return the summary.
    ///
    /// Terminates when the pending-request sequence is empty and no lift is
    /// busy; a strategy that never resolves an outstanding request makes
    /// this loop spin forever — that is the strategy author's obligation,
    /// not something the engine detects.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<SimSummary> {
        loop {
            let now = self.clock.elapsed_secs();

            // ── Phase 1: request delivery ─────────────────────────────────
            //
            // Every request due this tick, in original relative order,
            // strictly before any floor callback of the same iteration.
            for request in self.requests.drain_due(now) {
                observer.on_request_received(now, &request);
                self.strategy.on_request(&mut self.lifts, &request)?;
                for lift in &mut self.lifts {
                    flush_events(lift, now, observer);
                }
            }

            // ── Phase 2: floor-arrival delivery ───────────────────────────
            //
            // A lift gets a callback when its defined floor differs from the
            // last one reported — covering both the first-ever observation
            // and every new arrival.  Lifts between floors are skipped and
            // their last observation stands.
            {
                // Explicit field borrows so the borrow checker sees disjoint
                // access to the fleet and the strategy.
                let lifts = &mut self.lifts;
                let strategy = &mut self.strategy;
                let last_floors = &mut self.last_floors;

                for (i, lift) in lifts.iter_mut().enumerate() {
                    if let FloorPosition::At(floor) = lift.floor() {
                        if last_floors[i] != Some(floor) {
                            strategy.on_floor(lift, floor)?;
                            last_floors[i] = Some(floor);
                            flush_events(lift, now, observer);
                        }
                    }
                }
            }

            // ── Phase 3: termination check ────────────────────────────────
            //
            // Checked before advancing so a run that finishes at time T
            // reports T, not T plus one tick.
            if self.requests.is_empty() && !self.lifts.iter().any(Lift::is_busy) {
                break;
            }

            // ── Phase 4: advance ──────────────────────────────────────────
            for lift in &mut self.lifts {
                lift.tick();
                flush_events(lift, now, observer);
            }
            self.clock.advance();

            if self.lifts.iter().any(Lift::is_used) {
                self.used_ticks += 1;
            }
        }

        let summary = self.summary();
        observer.on_sim_end(&summary);
        Ok(summary)
    }

    /// Requests not yet delivered to the strategy.
    pub fn pending_request_count(&self) -> usize {
        self.requests.len()
    }

    fn summary(&self) -> SimSummary {
        SimSummary {
            total_passenger_time_secs: self.used_ticks as f64 * self.params.tick_duration_secs,
            elapsed_secs: self.clock.elapsed_secs(),
            ticks: self.clock.current_tick,
        }
    }
}

// ── Event forwarding ──────────────────────────────────────────────────────────

/// Drain one lift's buffered notifications into the observer.
///
/// Called immediately after every call that can produce events, before the
/// loop does anything else, so observers see the same order and timestamps
/// synchronous delivery would have produced.
fn flush_events<O: SimObserver>(lift: &mut Lift, elapsed_secs: f64, observer: &mut O) {
    for event in lift.drain_events() {
        match event {
            LiftEvent::Stopped { floor, wait_secs } => {
                observer.on_lift_stopped(elapsed_secs, lift.id(), floor, wait_secs);
            }
            LiftEvent::Departed { floor, target_floor } => {
                observer.on_lift_departed(elapsed_secs, lift.id(), floor, target_floor);
            }
        }
    }
}
