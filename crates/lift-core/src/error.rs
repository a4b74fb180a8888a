//! Request validation and configuration errors.
//!
//! Sub-crates define their own error enums and wrap `LiftError` as one
//! variant via `#[from]`.

use thiserror::Error;

use crate::{Direction, Floor, FloorRange};

/// The error type for `lift-core` and the common base for sub-crates.
#[derive(Debug, Error)]
pub enum LiftError {
    #[error("{floor} is outside the served range {range}")]
    InvalidFloor { floor: Floor, range: FloorRange },

    #[error("cannot call {direction} from {floor}")]
    InvalidDirectionForFloor { floor: Floor, direction: Direction },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for all `lift-*` crates.
pub type LiftResult<T> = Result<T, LiftError>;
