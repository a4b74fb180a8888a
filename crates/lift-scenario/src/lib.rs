//! `lift-scenario` — passenger scenarios for the `lift-sim` elevator.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`passenger`]  | `Passenger`                                               |
//! | [`scenario`]   | `Scenario`, `ScenarioOutcome`                             |
//! | [`catalog`]    | The four canned demonstration cases                       |
//! | [`loader`]     | `load_scenarios_csv`, `load_scenarios_reader`             |
//! | [`rng`]        | `ScenarioRng`                                             |
//! | [`generator`]  | `ScenarioGenerator` (seeded random passengers)            |
//! | [`batch`]      | `BatchConfig`, `run_batch`, `BatchSummary`                |
//! | [`error`]      | `ScenarioError`, `ScenarioResult<T>`                      |
//!
//! # Two-phase execution
//!
//! ```text
//! pickup:   submit every passenger's hall call → run
//! dropoff:  submit every passenger's destination → run
//! ```
//!
//! The elevator is not reset between scenarios; the caller decides.
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | `run_batch` spreads runs across a Rayon pool.           |
//! | `serde`    | Enables serde derives on `lift-core` types.             |

pub mod batch;
pub mod catalog;
pub mod error;
pub mod generator;
pub mod loader;
pub mod passenger;
pub mod rng;
pub mod scenario;

#[cfg(test)]
mod tests;

pub use batch::{BatchConfig, BatchRun, BatchSummary, run_batch};
pub use catalog::{canned, find_canned, run_canned};
pub use error::{ScenarioError, ScenarioResult};
pub use generator::ScenarioGenerator;
pub use loader::{load_scenarios_csv, load_scenarios_reader};
pub use passenger::Passenger;
pub use rng::ScenarioRng;
pub use scenario::{Scenario, ScenarioOutcome};
