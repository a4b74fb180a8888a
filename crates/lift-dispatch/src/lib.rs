//! `lift-dispatch` — the elevator's pending-stop queues.
//!
//! # Crate layout
//!
//! | Module     | Contents                                              |
//! |------------|-------------------------------------------------------|
//! | [`queues`] | `DispatchQueues`, `Placement`, `route`                |
//!
//! # Routing model (summary)
//!
//! ```text
//! floor >  current  → up queue   (kept ascending)
//! floor <  current  → down queue (kept descending)
//! floor == current  → served on the spot, nothing queued
//! ```
//!
//! The routing decision is made once, at insertion time.  As the car moves an
//! entry can end up behind it ("stale"); the scheduler in `lift-sim` decides
//! what to do with those via [`DispatchQueues::reroute_stale`].
//!
//! Floors are not range-checked here; `lift-sim` validates before inserting.

pub mod queues;

#[cfg(test)]
mod tests;

pub use queues::{DispatchQueues, Placement, route};
