//! Buffered car notifications.

/// A notification produced by a [`Lift`][crate::Lift] state change.
///
/// Events accumulate in the car's pending buffer and are drained by the
/// engine immediately after the call that produced them, then forwarded to
/// the run's observer stamped with the current elapsed time.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum LiftEvent {
    /// The car stopped at `floor` and opened its doors for `wait_secs`.
    Stopped {
        floor:     i32,
        wait_secs: f64,
    },

    /// The car left `floor`, heading for `target_floor`.
    ///
    /// Emitted exactly once per wait-release→motion transition; a car
    /// commanded to move before it has ever stopped departs silently.
    Departed {
        floor:        i32,
        target_floor: i32,
    },
}
