//! `lift-core` — foundational types for the `lift-sim` elevator simulator.
//!
//! This crate is a dependency of every other `lift-*` crate.  It has no
//! `lift-*` dependencies and only `thiserror` as a required external one
//! (plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`floor`]       | `Floor`, `FloorRange`                                 |
//! | [`direction`]   | `Direction` enum                                      |
//! | [`request`]     | `CallRequest`, `Destination`                          |
//! | [`config`]      | `LiftConfig`                                          |
//! | [`error`]       | `LiftError`, `LiftResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod direction;
pub mod error;
pub mod floor;
pub mod request;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::LiftConfig;
pub use direction::Direction;
pub use error::{LiftError, LiftResult};
pub use floor::{Floor, FloorRange};
pub use request::{CallRequest, Destination};
