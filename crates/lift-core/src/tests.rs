//! Unit tests for lift-core primitives.

#[cfg(test)]
mod ids {
    use crate::LiftId;

    #[test]
    fn index_roundtrip() {
        let id = LiftId(3);
        assert_eq!(id.index(), 3);
        assert_eq!(LiftId::try_from(3usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(LiftId(0) < LiftId(1));
    }

    #[test]
    fn invalid_sentinel_is_max() {
        assert_eq!(LiftId::INVALID.0, u32::MAX);
        assert_eq!(LiftId::default(), LiftId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(LiftId(7).to_string(), "LiftId(7)");
    }
}

#[cfg(test)]
mod approx {
    use crate::approx::{approx_eq, is_zeroish, EPSILON};

    #[test]
    fn zeroish_bounds() {
        assert!(is_zeroish(0.0));
        assert!(is_zeroish(EPSILON / 2.0));
        assert!(is_zeroish(-EPSILON / 2.0));
        assert!(!is_zeroish(EPSILON));
        assert!(!is_zeroish(-EPSILON * 2.0));
    }

    #[test]
    fn absorbs_accumulated_step_error() {
        // 200 additions of 0.1 versus the exact product.
        let mut acc = 0.0;
        for _ in 0..200 {
            acc += 0.1;
        }
        assert!(approx_eq(acc, 20.0));
    }
}

#[cfg(test)]
mod time {
    use crate::approx::approx_eq;
    use crate::SimClock;

    #[test]
    fn elapsed_tracks_ticks() {
        let mut clock = SimClock::new(0.1);
        assert_eq!(clock.current_tick, 0);
        assert!(approx_eq(clock.elapsed_secs(), 0.0));
        for _ in 0..106 {
            clock.advance();
        }
        assert_eq!(clock.current_tick, 106);
        assert!(approx_eq(clock.elapsed_secs(), 10.6));
    }

    #[test]
    fn display() {
        let mut clock = SimClock::new(0.5);
        clock.advance();
        assert_eq!(clock.to_string(), "T1 (0.5s)");
    }
}

#[cfg(test)]
mod motion {
    use crate::Direction;

    #[test]
    fn toward_picks_the_shorter_sign() {
        assert_eq!(Direction::toward(0, 5), Direction::Up);
        assert_eq!(Direction::toward(5, 0), Direction::Down);
        assert_eq!(Direction::toward(2, 2), Direction::Idle);
    }

    #[test]
    fn scalar_conversion() {
        assert_eq!(Direction::Up.as_f64(), 1.0);
        assert_eq!(Direction::Down.as_f64(), -1.0);
        assert_eq!(Direction::Idle.as_f64(), 0.0);
    }

    #[test]
    fn only_idle_is_stationary() {
        assert!(Direction::Up.is_moving());
        assert!(Direction::Down.is_moving());
        assert!(!Direction::Idle.is_moving());
    }
}

#[cfg(test)]
mod request {
    use crate::{Direction, Request};

    #[test]
    fn pressed_direction_from_floors() {
        let up = Request { time_secs: 0.0, from_floor: 1, to_floor: 4 };
        let down = Request { time_secs: 0.0, from_floor: 4, to_floor: 1 };
        let noop = Request { time_secs: 0.0, from_floor: 4, to_floor: 4 };
        assert_eq!(up.pressed_direction(), Direction::Up);
        assert_eq!(down.pressed_direction(), Direction::Down);
        assert_eq!(noop.pressed_direction(), Direction::Idle);
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SimRng::new(42);
        let mut b = SimRng::new(42);
        let floors_a: Vec<i32> = (0..5).map(|_| a.gen_range(0..=50)).collect();
        let floors_b: Vec<i32> = (0..5).map(|_| b.gen_range(0..=50)).collect();
        assert_eq!(floors_a, floors_b);
        assert!(floors_a.iter().all(|&f| (0..=50).contains(&f)));
    }
}
