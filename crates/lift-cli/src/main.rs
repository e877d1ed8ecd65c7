//! liftsim — run the reference dispatch strategy over a request data set.
//!
//! Usage: `liftsim [requests.csv]`
//!
//! With no argument, runs the small embedded sample data set.  Lifts start
//! on random floors drawn from a fixed seed, so repeated runs of the same
//! data set produce identical output.

use std::env;
use std::io::Cursor;
use std::path::PathBuf;

use anyhow::Result;

use lift_core::SimRng;
use lift_data::{load_requests_csv, load_requests_reader};
use lift_dispatch::NaiveStrategy;
use lift_output::ConsoleLogger;
use lift_sim::SimBuilder;

// ── Constants ─────────────────────────────────────────────────────────────────

const FLOOR_COUNT:    i32   = 50;
const LIFT_COUNT:     usize = 5;
const PLACEMENT_SEED: u64   = 42;

// ── Sample data set ───────────────────────────────────────────────────────────

// time_secs, from_floor, to_floor — sorted ascending by time.
const SAMPLE_CSV: &str = "\
0,0,5
7.5,48,0
12,10,12
12,30,30
45,5,49
60,2,25
";

fn main() -> Result<()> {
    let requests = match env::args_os().nth(1) {
        Some(path) => load_requests_csv(&PathBuf::from(path))?,
        None => load_requests_reader(Cursor::new(SAMPLE_CSV))?,
    };

    let mut rng = SimRng::new(PLACEMENT_SEED);
    let initial_floors: Vec<i32> = (0..LIFT_COUNT)
        .map(|_| rng.gen_range(0..=FLOOR_COUNT))
        .collect();

    let mut sim = SimBuilder::new(NaiveStrategy::new())
        .initial_floors(initial_floors)
        .requests(requests)
        .build()?;

    let mut logger = ConsoleLogger::stdout();
    sim.run(&mut logger)?;

    if let Some(err) = logger.take_error() {
        return Err(err.into());
    }
    Ok(())
}
