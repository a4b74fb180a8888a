//! Seeded random passenger scenarios.

use lift_core::{Direction, Floor, FloorRange, LiftError};

use crate::{Passenger, Scenario, ScenarioResult, ScenarioRng};

/// Draws passengers whose calls and destinations are always valid for
/// `range`: the start floor is uniform, the button is the only one present
/// at either end of the shaft (otherwise a coin flip), and the destination
/// is uniform among the floors in the chosen direction.
#[derive(Copy, Clone, Debug)]
pub struct ScenarioGenerator {
    range:      FloorRange,
    passengers: usize,
}

impl ScenarioGenerator {
    /// Fails with [`LiftError::Config`] for a single-floor building, where no
    /// hall call is valid.
    pub fn new(range: FloorRange, passengers: usize) -> ScenarioResult<Self> {
        if range.lowest == range.highest {
            return Err(LiftError::Config(format!(
                "cannot generate passengers for single-floor range {range}"
            ))
            .into());
        }
        Ok(Self { range, passengers })
    }

    pub fn passenger(&self, rng: &mut ScenarioRng) -> Passenger {
        let (lo, hi) = (self.range.lowest.0, self.range.highest.0);
        let start = rng.gen_range(lo..=hi);
        let direction = if start == lo {
            Direction::Up
        } else if start == hi {
            Direction::Down
        } else if rng.gen_bool(0.5) {
            Direction::Up
        } else {
            Direction::Down
        };
        let destination = match direction {
            Direction::Up => rng.gen_range(start + 1..=hi),
            _             => rng.gen_range(lo..start),
        };
        Passenger::new(Floor(start), direction, Floor(destination))
    }

    pub fn generate(&self, name: impl Into<String>, rng: &mut ScenarioRng) -> Scenario {
        let mut scenario = Scenario::new(name).with_description(format!(
            "{} random passengers on floors {}",
            self.passengers, self.range
        ));
        scenario.passengers = (0..self.passengers).map(|_| self.passenger(rng)).collect();
        scenario
    }
}
