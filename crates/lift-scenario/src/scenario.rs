//! Named passenger groups and their two-phase execution.

use lift_core::Floor;
use lift_sim::{Elevator, LiftObserver, RunReport};
use tracing::info;

use crate::{Passenger, ScenarioResult};

// ── Scenario ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Scenario {
    pub name:        String,
    pub description: String,
    pub passengers:  Vec<Passenger>,
}

impl Scenario {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Self::default() }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_passenger(mut self, passenger: Passenger) -> Self {
        self.passengers.push(passenger);
        self
    }

    pub fn len(&self) -> usize {
        self.passengers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passengers.is_empty()
    }

    /// Run the pickup and drop-off phases on `elevator`.
    ///
    /// Every passenger is validated against the elevator's floor range before
    /// anything is submitted, so an invalid scenario leaves the elevator
    /// untouched.  The elevator is not reset first.
    pub fn execute<O: LiftObserver>(&self, elevator: &mut Elevator<O>) -> ScenarioResult<ScenarioOutcome> {
        let range = elevator.floor_range();
        for passenger in &self.passengers {
            passenger.validate(&range)?;
        }
        info!(scenario = %self.name, passengers = self.passengers.len(), at = %elevator.current_floor(), "scenario start");

        for passenger in &self.passengers {
            elevator.submit_call(passenger.call())?;
        }
        let pickup = elevator.run();

        for passenger in &self.passengers {
            elevator.submit_destination(passenger.destination())?;
        }
        let dropoff = elevator.run();

        Ok(ScenarioOutcome { pickup, dropoff })
    }
}

// ── ScenarioOutcome ───────────────────────────────────────────────────────────

/// The two run reports produced by [`Scenario::execute`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScenarioOutcome {
    pub pickup:  RunReport,
    pub dropoff: RunReport,
}

impl ScenarioOutcome {
    /// Every stop of both phases, in order.
    pub fn stops(&self) -> Vec<Floor> {
        self.pickup.stops.iter().chain(&self.dropoff.stops).copied().collect()
    }

    pub fn final_floor(&self) -> Floor {
        self.dropoff.final_floor
    }

    pub fn distance(&self) -> u32 {
        self.pickup.distance() + self.dropoff.distance()
    }

    pub fn sweeps(&self) -> usize {
        self.pickup.sweeps + self.dropoff.sweeps
    }
}
