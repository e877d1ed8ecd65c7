//! The reference dispatch algorithm: first-free-lift assignment with a
//! FIFO order queue per lift and a global unassigned pool.

use std::collections::{HashMap, VecDeque};

use lift_core::{Direction, Intent, LiftId, Request};
use lift_model::{FloorPosition, Lift, LiftError};

use crate::{DispatchResult, DispatchStrategy};

// ── Order ─────────────────────────────────────────────────────────────────────

/// A request being actively tracked for one lift.
///
/// `filled` marks that the pickup leg is done: the passenger is in the car
/// and the remaining obligation is the drop-off at `request.to_floor`.
#[derive(Copy, Clone, Debug)]
struct Order {
    request: Request,
    filled:  bool,
}

impl Order {
    fn new(request: Request) -> Self {
        Self { request, filled: false }
    }

    /// Boarding and alighting both done — nothing left to do for this order.
    fn complete_at(&self, floor: i32) -> bool {
        self.filled && floor == self.request.to_floor
    }
}

// ── NaiveStrategy ─────────────────────────────────────────────────────────────

/// An extremely simple dispatch strategy: each incoming request is assigned
/// to the first non-busy lift, which then serves it to completion without
/// interruption.  Requests arriving while every lift is busy wait in a global
/// pool and are claimed by whichever lift next reaches a floor with an empty
/// queue.
#[derive(Default)]
pub struct NaiveStrategy {
    /// Per-lift FIFO order queues, keyed by id rather than reference.
    orders: HashMap<LiftId, VecDeque<Order>>,
    /// Requests no lift was free to take, oldest first.
    unassigned: VecDeque<Request>,
}

impl NaiveStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of orders currently queued for `lift`.
    pub fn order_count(&self, lift: LiftId) -> usize {
        self.orders.get(&lift).map_or(0, VecDeque::len)
    }

    /// Number of requests waiting in the unassigned pool.
    pub fn unassigned_count(&self) -> usize {
        self.unassigned.len()
    }

    /// Enqueue `request` for `lift` and start serving it: process in place
    /// when the lift already stands at the pickup floor, otherwise send it
    /// there.
    fn assign(&mut self, lift: &mut Lift, request: Request) -> DispatchResult<()> {
        self.orders
            .entry(lift.id())
            .or_default()
            .push_back(Order::new(request));

        match lift.floor() {
            FloorPosition::At(floor) if floor == request.from_floor => {
                self.run_floor_actions(lift, floor)
            }
            _ => embark(lift, request.from_floor),
        }
    }

    /// Work through everything actionable for `lift` at `floor`.
    ///
    /// Each pass inspects the head order: board at its pickup floor, alight
    /// at its drop-off floor, and when an order completes, pop it and loop —
    /// that chains same-floor pickup/drop-off pairs and immediately reveals
    /// the next order.  A lift with an empty queue first claims the oldest
    /// unassigned request.  The loop ends when nothing at this floor is
    /// actionable.
    fn run_floor_actions(&mut self, lift: &mut Lift, floor: i32) -> DispatchResult<()> {
        let Self { orders, unassigned } = self;
        let queue = orders.entry(lift.id()).or_default();

        loop {
            if queue.is_empty() {
                let Some(next) = unassigned.pop_front() else {
                    return Ok(());
                };
                queue.push_back(Order::new(next));
                if floor != next.from_floor {
                    return embark(lift, next.from_floor);
                }
                // Already standing at the pickup floor: board this pass.
            }

            let Some(order) = queue.front_mut() else {
                return Ok(());
            };

            if floor == order.request.from_floor {
                lift.stop_and_fill()?;
                embark(lift, order.request.to_floor)?;
                order.filled = true;
            } else if order.complete_at(floor) {
                lift.stop_and_fill()?;
            }

            if order.complete_at(floor) {
                queue.pop_front();
                continue;
            }
            return Ok(());
        }
    }
}

impl DispatchStrategy for NaiveStrategy {
    fn on_request(&mut self, lifts: &mut [Lift], request: &Request) -> DispatchResult<()> {
        let Some(lift) = lifts.iter_mut().find(|lift| !lift.is_busy()) else {
            self.unassigned.push_back(*request);
            return Ok(());
        };
        self.assign(lift, *request)
    }

    fn on_floor(&mut self, lift: &mut Lift, floor: i32) -> DispatchResult<()> {
        self.run_floor_actions(lift, floor)
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Command `lift` toward `target_floor`, or do nothing if it is already
/// there.  Fails when the lift is between floors — there is no current
/// floor to pick a direction from.
fn embark(lift: &mut Lift, target_floor: i32) -> DispatchResult<()> {
    let FloorPosition::At(floor) = lift.floor() else {
        return Err(LiftError::BetweenFloors(lift.id()).into());
    };

    if floor == target_floor {
        return Ok(());
    }

    lift.set_direction(Direction::toward(floor, target_floor), Intent { target_floor });
    Ok(())
}
