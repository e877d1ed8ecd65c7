//! Fluent builder for constructing a [`Sim`].

use lift_core::{LiftId, Request, SimParams};
use lift_dispatch::DispatchStrategy;
use lift_model::Lift;

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim<S>`].
///
/// # Required inputs
///
/// - `S: DispatchStrategy` — the algorithm under evaluation
///
/// # Optional inputs (have defaults)
///
/// | Method               | Default                          |
/// |----------------------|----------------------------------|
/// | `.params(p)`         | `SimParams::default()`           |
/// | `.initial_floors(v)` | Empty fleet                      |
/// | `.requests(v)`       | No requests                      |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(NaiveStrategy::new())
///     .initial_floors(vec![0, 25])
///     .requests(requests)
///     .build()?;
/// let summary = sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<S: DispatchStrategy> {
    strategy:       S,
    params:         Option<SimParams>,
    initial_floors: Option<Vec<i32>>,
    requests:       Option<Vec<Request>>,
}

impl<S: DispatchStrategy> SimBuilder<S> {
    /// Create a builder around the strategy under evaluation.
    pub fn new(strategy: S) -> Self {
        Self {
            strategy,
            params:         None,
            initial_floors: None,
            requests:       None,
        }
    }

    /// Override the building's physical constants.
    pub fn params(mut self, params: SimParams) -> Self {
        self.params = Some(params);
        self
    }

    /// Supply the starting floor of each lift to create, in fleet order.
    /// Lift ids are assigned from list position.
    pub fn initial_floors(mut self, floors: Vec<i32>) -> Self {
        self.initial_floors = Some(floors);
        self
    }

    /// Supply the request sequence, pre-sorted ascending by time.
    ///
    /// The engine neither validates nor re-sorts this — hand it data from
    /// `lift-data` (which does validate) or construct it sorted.
    pub fn requests(mut self, requests: Vec<Request>) -> Self {
        self.requests = Some(requests);
        self
    }

    /// Validate the parameters, create the fleet, and return a ready-to-run
    /// [`Sim`].
    pub fn build(self) -> SimResult<Sim<S>> {
        let params = self.params.unwrap_or_default();
        validate_params(&params)?;

        let lifts: Vec<Lift> = self
            .initial_floors
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(i, floor)| Lift::new(LiftId(i as u32), floor, params))
            .collect();

        Ok(Sim::new(
            params,
            lifts,
            self.strategy,
            self.requests.unwrap_or_default(),
        ))
    }
}

fn validate_params(params: &SimParams) -> SimResult<()> {
    if !(params.tick_duration_secs > 0.0) || !params.tick_duration_secs.is_finite() {
        return Err(SimError::Config(format!(
            "tick duration must be positive and finite, got {}",
            params.tick_duration_secs
        )));
    }
    if !(params.floor_height_m > 0.0) || !params.floor_height_m.is_finite() {
        return Err(SimError::Config(format!(
            "floor height must be positive and finite, got {}",
            params.floor_height_m
        )));
    }
    if params.speed_mps < 0.0 || !params.speed_mps.is_finite() {
        return Err(SimError::Config(format!(
            "speed must be non-negative and finite, got {}",
            params.speed_mps
        )));
    }
    if params.stop_wait_secs < 0.0 || !params.stop_wait_secs.is_finite() {
        return Err(SimError::Config(format!(
            "stop wait must be non-negative and finite, got {}",
            params.stop_wait_secs
        )));
    }
    Ok(())
}
