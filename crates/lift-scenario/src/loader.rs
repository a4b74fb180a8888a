//! CSV scenario loader.
//!
//! # CSV format
//!
//! One row per passenger.  Rows sharing a `scenario` value form one
//! [`Scenario`]; scenarios are returned in order of first appearance and
//! passengers keep their row order.
//!
//! ```csv
//! scenario,start_floor,direction,destination
//! morning,0,up,7
//! morning,3,up,9
//! evening,9,down,0
//! ```
//!
//! `direction` accepts `up`/`u` or `down`/`d` (case-insensitive).  Floors are
//! not range-checked here; [`Scenario::execute`] does that against the
//! elevator it runs on.

use std::io::Read;
use std::path::Path;

use lift_core::Direction;
use serde::Deserialize;
use tracing::debug;

use crate::{Passenger, Scenario, ScenarioError, ScenarioResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct PassengerRecord {
    scenario:    String,
    start_floor: i32,
    direction:   String,
    destination: i32,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load scenarios from a CSV file.
pub fn load_scenarios_csv(path: &Path) -> ScenarioResult<Vec<Scenario>> {
    let file = std::fs::File::open(path)?;
    let scenarios = load_scenarios_reader(file)?;
    debug!(path = %path.display(), scenarios = scenarios.len(), "scenarios loaded");
    Ok(scenarios)
}

/// Like [`load_scenarios_csv`] but accepts any `Read` source.
pub fn load_scenarios_reader<R: Read>(reader: R) -> ScenarioResult<Vec<Scenario>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut scenarios: Vec<Scenario> = Vec::new();

    for (i, result) in csv_reader.deserialize::<PassengerRecord>().enumerate() {
        // Row 1 is the header.
        let line = i + 2;
        let row = result.map_err(|e| ScenarioError::Parse(e.to_string()))?;
        let passenger = Passenger::new(row.start_floor, parse_direction(&row.direction, line)?, row.destination);

        match scenarios.iter_mut().find(|s| s.name == row.scenario) {
            Some(scenario) => scenario.passengers.push(passenger),
            None => scenarios.push(Scenario::new(row.scenario).with_passenger(passenger)),
        }
    }

    Ok(scenarios)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_direction(s: &str, line: usize) -> ScenarioResult<Direction> {
    match s.parse::<Direction>() {
        Ok(d) if d.is_moving() => Ok(d),
        _ => Err(ScenarioError::Parse(format!(
            "line {line}: invalid direction {s:?}: expected \"up\" or \"down\""
        ))),
    }
}
