//! Unit tests for the console logger.

use lift_core::{LiftId, Request};
use lift_sim::{SimObserver, SimSummary};

use crate::ConsoleLogger;

fn rendered(logger: ConsoleLogger<Vec<u8>>) -> String {
    String::from_utf8(logger.into_sink()).unwrap()
}

#[test]
fn renders_request_lines_with_the_pressed_direction() {
    let mut logger = ConsoleLogger::new(Vec::new());

    logger.on_request_received(20.0, &Request { time_secs: 20.0, from_floor: 3, to_floor: 7 });
    logger.on_request_received(20.0, &Request { time_secs: 20.0, from_floor: 7, to_floor: 3 });
    logger.on_request_received(20.0, &Request { time_secs: 20.0, from_floor: 7, to_floor: 7 });

    assert_eq!(
        rendered(logger),
        "20.0: Passenger on floor 3 pressed up (going to floor 7)\n\
         20.0: Passenger on floor 7 pressed down (going to floor 3)\n\
         20.0: Passenger on floor 7 pressed ?? (going to floor 7)\n"
    );
}

#[test]
fn renders_stop_and_departure_lines() {
    let mut logger = ConsoleLogger::new(Vec::new());

    logger.on_lift_stopped(0.0, LiftId(2), 5, 10.0);
    logger.on_lift_departed(10.0, LiftId(2), 5, 9);

    assert_eq!(
        rendered(logger),
        "0.0: Lift 2 arrived on floor 5; waiting for 10 seconds\n\
         10.0: Lift 2 leaving floor 5; heading to floor 9\n"
    );
}

#[test]
fn renders_the_run_summary() {
    let mut logger = ConsoleLogger::new(Vec::new());

    logger.on_sim_end(&SimSummary {
        total_passenger_time_secs: 30.6,
        elapsed_secs: 50.6,
        ticks: 506,
    });

    assert_eq!(
        rendered(logger),
        "50.6: Simulation finished; total passenger time 30.6 seconds\n"
    );
}

#[test]
fn first_write_error_is_kept() {
    /// A sink that always fails.
    struct BrokenSink;
    impl std::io::Write for BrokenSink {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("sink closed"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let mut logger = ConsoleLogger::new(BrokenSink);
    logger.on_lift_stopped(0.0, LiftId(0), 0, 10.0);
    logger.on_lift_stopped(0.1, LiftId(0), 0, 10.0);

    let err = logger.take_error().expect("error should be stored");
    assert_eq!(err.to_string(), "sink closed");
    assert!(logger.take_error().is_none(), "error is taken once");
}
