//! CSV request data-set loader.
//!
//! # CSV format
//!
//! One row per request, no header, whitespace-tolerant, blank lines skipped:
//!
//! ```csv
//! 0, 0, 5
//! 12.5, 3, 0
//! 12.5, 8, 8
//! ```
//!
//! Columns: arrival time in seconds, pickup floor, drop-off floor.  Rows
//! must be sorted ascending by time (ties keep file order) — the engine
//! relies on that ordering and never re-sorts, so an unsorted file is
//! rejected here rather than silently mis-simulated.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use lift_core::Request;

use crate::{DataError, DataResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RequestRecord {
    time_secs:  f64,
    from_floor: i32,
    to_floor:   i32,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a request sequence from a CSV file.
pub fn load_requests_csv(path: &Path) -> DataResult<Vec<Request>> {
    let file = std::fs::File::open(path).map_err(DataError::Io)?;
    load_requests_reader(file)
}

/// Like [`load_requests_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for embedded sample
/// data sets.
pub fn load_requests_reader<R: Read>(reader: R) -> DataResult<Vec<Request>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut requests: Vec<Request> = Vec::new();

    for (i, result) in csv_reader.deserialize::<RequestRecord>().enumerate() {
        let row = i + 1;
        let record = result.map_err(|e| DataError::Parse(e.to_string()))?;

        if !record.time_secs.is_finite() || record.time_secs < 0.0 {
            return Err(DataError::InvalidRequest {
                row,
                reason: format!("time must be a finite value >= 0, got {}", record.time_secs),
            });
        }
        if let Some(prev) = requests.last() {
            if record.time_secs < prev.time_secs {
                return Err(DataError::InvalidRequest {
                    row,
                    reason: format!(
                        "rows must be sorted ascending by time ({} after {})",
                        record.time_secs, prev.time_secs
                    ),
                });
            }
        }

        requests.push(Request {
            time_secs:  record.time_secs,
            from_floor: record.from_floor,
            to_floor:   record.to_floor,
        });
    }

    Ok(requests)
}
