//! Unit tests for lift-scenario.

use std::io::Cursor;

use lift_core::{Direction, Floor, FloorRange, LiftConfig, LiftError};
use lift_sim::{Elevator, ElevatorBuilder, EventLog};

use crate::{
    BatchConfig, BatchSummary, Passenger, Scenario, ScenarioError, ScenarioGenerator, ScenarioRng,
    canned, find_canned, load_scenarios_reader, run_batch, run_canned,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn floors(ns: &[i32]) -> Vec<Floor> {
    ns.iter().copied().map(Floor).collect()
}

fn elevator() -> Elevator<EventLog> {
    ElevatorBuilder::new(LiftConfig::default())
        .observer(EventLog::new())
        .build()
        .unwrap()
}

// ── Passenger / Scenario ──────────────────────────────────────────────────────

#[cfg(test)]
mod scenario_tests {
    use super::*;

    #[test]
    fn passenger_requests() {
        let p = Passenger::down(6, 1);
        assert_eq!(p.call().floor, Floor(6));
        assert_eq!(p.call().origin, Direction::Down);
        assert_eq!(p.destination().floor, Floor(1));
        assert_eq!(p.to_string(), "down at Floor 6 to Floor 1");
    }

    #[test]
    fn passenger_validation() {
        let range = FloorRange::default();
        assert!(Passenger::up(0, 5).validate(&range).is_ok());
        assert!(matches!(
            Passenger::down(0, 3).validate(&range),
            Err(LiftError::InvalidDirectionForFloor { .. })
        ));
        assert!(matches!(
            Passenger::up(2, 12).validate(&range),
            Err(LiftError::InvalidFloor { .. })
        ));
    }

    #[test]
    fn execute_runs_pickup_then_dropoff() {
        let mut elevator = elevator();
        let scenario = Scenario::new("t")
            .with_passenger(Passenger::up(2, 6))
            .with_passenger(Passenger::down(4, 0));
        let outcome = scenario.execute(&mut elevator).unwrap();
        assert_eq!(outcome.pickup.stops, floors(&[2, 4]));
        assert_eq!(outcome.dropoff.stops, floors(&[6, 0]));
        assert_eq!(outcome.stops(), floors(&[2, 4, 6, 0]));
        assert_eq!(outcome.final_floor(), Floor(0));
        // 0→2→4 (4) + 4→6→0 (8)
        assert_eq!(outcome.distance(), 12);
        assert!(elevator.is_drained());
    }

    #[test]
    fn invalid_passenger_leaves_elevator_untouched() {
        let mut elevator = elevator();
        let scenario = Scenario::new("bad")
            .with_passenger(Passenger::up(3, 7))
            .with_passenger(Passenger::down(0, 3));
        let err = scenario.execute(&mut elevator).unwrap_err();
        assert!(matches!(err, ScenarioError::Lift(LiftError::InvalidDirectionForFloor { .. })));
        assert!(elevator.queues().is_empty());
        assert!(elevator.observer().events().is_empty());
    }

    #[test]
    fn empty_scenario_does_nothing() {
        let mut elevator = elevator();
        let outcome = Scenario::new("empty").execute(&mut elevator).unwrap();
        assert!(outcome.stops().is_empty());
        assert_eq!(outcome.final_floor(), Floor::GROUND);
    }
}

// ── Catalog ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod catalog_tests {
    use super::*;

    #[test]
    fn four_cases_in_order() {
        let names: Vec<String> = canned().into_iter().map(|s| s.name).collect();
        assert_eq!(names, ["case-1", "case-2", "case-3", "case-4"]);
    }

    #[test]
    fn lookup_by_number_or_name() {
        assert_eq!(find_canned("2").unwrap().name, "case-2");
        assert_eq!(find_canned("case-4").unwrap().passengers.len(), 3);
        assert!(find_canned("5").is_none());
        assert!(find_canned("").is_none());
    }

    #[test]
    fn case_one_from_ground() {
        let mut elevator = elevator();
        let outcome = find_canned("1").unwrap().execute(&mut elevator).unwrap();
        // The ground-floor call opens the doors without a sweep.
        assert!(outcome.pickup.stops.is_empty());
        assert_eq!(elevator.observer().door_openings(), floors(&[0, 5]));
        assert_eq!(outcome.dropoff.stops, floors(&[5]));
    }

    #[test]
    fn case_two_from_ground_goes_up() {
        let mut elevator = elevator();
        let outcome = find_canned("2").unwrap().execute(&mut elevator).unwrap();
        assert_eq!(outcome.pickup.stops, floors(&[4, 6]));
        assert_eq!(outcome.dropoff.stops, floors(&[1, 1]));
    }

    #[test]
    fn back_to_back_cases_keep_state() {
        let mut elevator = elevator();
        let outcomes = run_canned(&mut elevator).unwrap();
        let stops: Vec<(Vec<Floor>, Vec<Floor>)> = outcomes
            .iter()
            .map(|(_, o)| (o.pickup.stops.clone(), o.dropoff.stops.clone()))
            .collect();
        assert_eq!(
            stops,
            vec![
                (floors(&[]), floors(&[5])),
                (floors(&[6, 4]), floors(&[1, 1])),
                (floors(&[2, 4]), floors(&[6, 0])),
                (floors(&[4, 10]), floors(&[5, 0, 0])),
            ]
        );
        assert_eq!(elevator.current_floor(), Floor(0));
        assert!(elevator.is_drained());
    }

    #[test]
    fn case_four_needs_ten_floors() {
        let mut elevator = ElevatorBuilder::new(LiftConfig::new(5)).build().unwrap();
        let err = find_canned("4").unwrap().execute(&mut elevator).unwrap_err();
        assert!(matches!(err, ScenarioError::Lift(LiftError::InvalidFloor { .. })));
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader_tests {
    use super::*;

    #[test]
    fn groups_rows_by_scenario() {
        let csv = "\
scenario,start_floor,direction,destination
morning,0,up,7
evening,9,down,0
morning,3,U,9
";
        let scenarios = load_scenarios_reader(Cursor::new(csv)).unwrap();
        assert_eq!(scenarios.len(), 2);
        assert_eq!(scenarios[0].name, "morning");
        assert_eq!(scenarios[0].passengers, vec![Passenger::up(0, 7), Passenger::up(3, 9)]);
        assert_eq!(scenarios[1].passengers, vec![Passenger::down(9, 0)]);
    }

    #[test]
    fn header_only_is_empty() {
        let csv = "scenario,start_floor,direction,destination\n";
        assert!(load_scenarios_reader(Cursor::new(csv)).unwrap().is_empty());
    }

    #[test]
    fn bad_direction_reports_line() {
        let csv = "\
scenario,start_floor,direction,destination
a,0,up,3
a,4,sideways,1
";
        match load_scenarios_reader(Cursor::new(csv)) {
            Err(ScenarioError::Parse(msg)) => assert!(msg.contains("line 3"), "{msg}"),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn idle_direction_rejected() {
        let csv = "scenario,start_floor,direction,destination\na,4,idle,1\n";
        assert!(matches!(load_scenarios_reader(Cursor::new(csv)), Err(ScenarioError::Parse(_))));
    }

    #[test]
    fn non_integer_floor_rejected() {
        let csv = "scenario,start_floor,direction,destination\na,two,up,5\n";
        assert!(matches!(load_scenarios_reader(Cursor::new(csv)), Err(ScenarioError::Parse(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = crate::load_scenarios_csv(std::path::Path::new("/nonexistent/scenarios.csv")).unwrap_err();
        assert!(matches!(err, ScenarioError::Io(_)));
    }
}

// ── Random generation ─────────────────────────────────────────────────────────

#[cfg(test)]
mod generator_tests {
    use super::*;

    #[test]
    fn generated_passengers_are_valid() {
        let range = FloorRange::default();
        let generator = ScenarioGenerator::new(range, 50).unwrap();
        let mut rng = ScenarioRng::new(7);
        for p in generator.generate("g", &mut rng).passengers {
            assert!(p.validate(&range).is_ok(), "{p}");
            match p.direction {
                Direction::Up => assert!(p.destination > p.start_floor),
                Direction::Down => assert!(p.destination < p.start_floor),
                Direction::Idle => panic!("idle passenger"),
            }
        }
    }

    #[test]
    fn same_seed_same_scenario() {
        let generator = ScenarioGenerator::new(FloorRange::default(), 10).unwrap();
        let a = generator.generate("a", &mut ScenarioRng::for_run(42, 3));
        let b = generator.generate("a", &mut ScenarioRng::for_run(42, 3));
        assert_eq!(a, b);
    }

    #[test]
    fn two_floor_building() {
        let range = FloorRange::up_to(Floor(1)).unwrap();
        let generator = ScenarioGenerator::new(range, 20).unwrap();
        let mut rng = ScenarioRng::new(1);
        for p in generator.generate("g", &mut rng).passengers {
            assert!(p == Passenger::up(0, 1) || p == Passenger::down(1, 0));
        }
    }

    #[test]
    fn single_floor_rejected() {
        let range = FloorRange::up_to(Floor::GROUND).unwrap();
        assert!(matches!(
            ScenarioGenerator::new(range, 3),
            Err(ScenarioError::Lift(LiftError::Config(_)))
        ));
    }
}

// ── Batch ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod batch_tests {
    use super::*;

    #[test]
    fn every_random_run_terminates_drained() {
        let config = BatchConfig { runs: 200, passengers: 8, seed: 2024, ..BatchConfig::default() };
        let runs = run_batch(&config).unwrap();
        assert_eq!(runs.len(), 200);
        assert!(runs.iter().all(|r| r.drained));
        assert!(runs.iter().enumerate().all(|(i, r)| r.index == i));
        // Every passenger is picked up and dropped off somewhere.
        assert!(runs.iter().all(|r| r.stops >= 1));
    }

    #[test]
    fn batch_is_reproducible() {
        let config = BatchConfig { runs: 20, seed: 9, ..BatchConfig::default() };
        assert_eq!(run_batch(&config).unwrap(), run_batch(&config).unwrap());
    }

    #[test]
    fn summary_aggregates() {
        let config = BatchConfig { runs: 10, seed: 3, ..BatchConfig::default() };
        let runs = run_batch(&config).unwrap();
        let summary = BatchSummary::from_runs(&runs);
        assert_eq!(summary.runs, 10);
        assert!(summary.all_drained);
        let total: u64 = runs.iter().map(|r| u64::from(r.distance)).sum();
        assert_eq!(summary.total_distance, total);
        assert!((summary.mean_distance - total as f64 / 10.0).abs() < 1e-9);
    }

    #[test]
    fn empty_summary() {
        let summary = BatchSummary::from_runs(&[]);
        assert_eq!(summary.runs, 0);
        assert_eq!(summary.mean_distance, 0.0);
        assert!(summary.all_drained);
    }

    #[test]
    fn invalid_config_rejected() {
        let config = BatchConfig { lift: LiftConfig::new(-3), ..BatchConfig::default() };
        assert!(matches!(run_batch(&config), Err(ScenarioError::Lift(LiftError::Config(_)))));
    }
}
