//! `RequestQueue` — the engine's pending-request sequence.
//!
//! # Why this exists
//!
//! Requests are handed to the engine as a timestamp-sorted sequence and must
//! be released at exactly their scheduled time, preserving relative order for
//! equal timestamps.  The queue exposes one predicate-shaped operation —
//! "remove and return everything due now" — so the tick loop never indexes
//! or splices into the sequence itself.

use std::collections::VecDeque;

use lift_core::{approx, Request};

/// FIFO of not-yet-delivered requests.
#[derive(Default)]
pub struct RequestQueue {
    inner: VecDeque<Request>,
}

impl RequestQueue {
    /// Take ownership of a pre-sorted request sequence.
    ///
    /// The engine trusts the ordering; the data loader is responsible for
    /// rejecting unsorted input.
    pub fn new(requests: Vec<Request>) -> Self {
        Self { inner: requests.into() }
    }

    /// Remove and return every request whose scheduled time matches
    /// `now_secs` within tolerance, preserving relative order.
    ///
    /// Requests that do not match stay queued, also in order.
    pub fn drain_due(&mut self, now_secs: f64) -> Vec<Request> {
        if self.inner.is_empty() {
            return Vec::new();
        }

        let mut due = Vec::new();
        let mut kept = VecDeque::with_capacity(self.inner.len());
        for request in self.inner.drain(..) {
            if approx::approx_eq(request.time_secs, now_secs) {
                due.push(request);
            } else {
                kept.push_back(request);
            }
        }
        self.inner = kept;
        due
    }

    /// Scheduled time of the oldest queued request, or `None` if empty.
    pub fn next_time_secs(&self) -> Option<f64> {
        self.inner.front().map(|r| r.time_secs)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
