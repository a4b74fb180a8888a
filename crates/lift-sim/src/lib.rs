//! `lift-sim` — the SCAN scheduler for a single elevator.
//!
//! # Run loop
//!
//! ```text
//! while either queue is non-empty:
//!   ① Select    — if idle: Up when the up queue has work, else Down.
//!   ② Snapshot  — copy the queued floors ahead of the car, in travel order.
//!   ③ Sweep     — for each snapshot floor: move, open doors, dequeue.
//!                 Floors added mid-sweep wait for a later sweep.
//!   ④ Switch    — opposite queue has work → reverse, else → idle.
//! ```
//!
//! A sweep whose snapshot is empty serves nothing.  If the opposite sweep has
//! nothing eligible either, its (stale) entries move to the opposite queue,
//! so the loop always terminates.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_core::{CallRequest, Floor, LiftConfig};
//! use lift_sim::{ElevatorBuilder, EventLog};
//!
//! let mut elevator = ElevatorBuilder::new(LiftConfig::default())
//!     .observer(EventLog::new())
//!     .build()?;
//! elevator.submit_call(CallRequest::up(5))?;
//! let report = elevator.run();
//! assert_eq!(report.stops, vec![Floor(5)]);
//! ```

pub mod builder;
pub mod cabin;
pub mod elevator;
pub mod error;
pub mod event;
pub mod observer;
pub mod service;


pub use builder::ElevatorBuilder;
pub use cabin::Cabin;
pub use elevator::{Elevator, RunReport};
pub use error::{SimError, SimResult};
pub use event::LiftEvent;
pub use observer::{ChainedObserver, EventLog, LiftObserver, LiftObserverExt, NoopObserver};
pub use service::{ChannelObserver, ElevatorHandle, ElevatorSnapshot, spawn_service, spawn_with_events};
