//! `lift-output` — event recorders for the `lift-sim` elevator.
//!
//! Two backends are provided, one behind a Cargo feature:
//!
//! | Feature   | Backend | Files created                          |
//! |-----------|---------|----------------------------------------|
//! | *(none)*  | CSV     | `events.csv`, `run_summaries.csv`      |
//! | `sqlite`  | SQLite  | `events.db`                            |
//!
//! Both implement [`OutputWriter`] and are driven by [`OutputObserver`],
//! which implements `lift_sim::LiftObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use lift_output::{CsvWriter, OutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut elevator = ElevatorBuilder::new(config)
//!     .observer(OutputObserver::new(writer))
//!     .build()?;
//! elevator.submit_destination(7)?;
//! elevator.run();
//! elevator.observer_mut().finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::OutputObserver;
pub use row::{EventRow, RunSummaryRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
