//! The four canned demonstration cases.
//!
//! | Key | Passengers                                      |
//! |-----|-------------------------------------------------|
//! | 1   | 0 up → 5                                        |
//! | 2   | 6 down → 1, 4 down → 1                          |
//! | 3   | 2 up → 6, 4 down → 0                            |
//! | 4   | 0 up → 5, 4 down → 0, 10 down → 0               |
//!
//! Case 4 needs a building of at least ten floors.

use lift_sim::{Elevator, LiftObserver};

use crate::{Passenger, Scenario, ScenarioOutcome, ScenarioResult};

/// All canned cases, in menu order.
pub fn canned() -> Vec<Scenario> {
    vec![
        Scenario::new("case-1")
            .with_description("Ground floor up, then floor 5")
            .with_passenger(Passenger::up(0, 5)),
        Scenario::new("case-2")
            .with_description("Floors 6 and 4 call down, both to floor 1")
            .with_passenger(Passenger::down(6, 1))
            .with_passenger(Passenger::down(4, 1)),
        Scenario::new("case-3")
            .with_description("Floor 2 up to 6, floor 4 down to ground")
            .with_passenger(Passenger::up(2, 6))
            .with_passenger(Passenger::down(4, 0)),
        Scenario::new("case-4")
            .with_description("Ground up to 5, floors 4 and 10 down to ground")
            .with_passenger(Passenger::up(0, 5))
            .with_passenger(Passenger::down(4, 0))
            .with_passenger(Passenger::down(10, 0)),
    ]
}

/// Look up a canned case by number (`"2"`) or name (`"case-2"`).
pub fn find_canned(key: &str) -> Option<Scenario> {
    let key = key.trim();
    canned()
        .into_iter()
        .find(|s| s.name == key || s.name.strip_prefix("case-") == Some(key))
}

/// Execute every canned case back to back on one elevator, without resets.
pub fn run_canned<O: LiftObserver>(elevator: &mut Elevator<O>) -> ScenarioResult<Vec<(String, ScenarioOutcome)>> {
    canned()
        .into_iter()
        .map(|scenario| {
            let outcome = scenario.execute(elevator)?;
            Ok((scenario.name, outcome))
        })
        .collect()
}
