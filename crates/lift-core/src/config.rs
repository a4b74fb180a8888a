//! Building configuration.

use crate::{Floor, FloorRange, LiftResult};

/// Top-level deployment configuration for one simulated building.
///
/// Typically loaded from a JSON file by the application crate (with the
/// `serde` feature) and passed to `lift_sim::ElevatorBuilder`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LiftConfig {
    /// Highest served floor.  The lowest is always [`Floor::GROUND`].
    /// Default: 10.
    pub max_floor: Floor,
}

impl LiftConfig {
    pub fn new(max_floor: impl Into<Floor>) -> Self {
        Self { max_floor: max_floor.into() }
    }

    /// The served range `[0, max_floor]`.
    ///
    /// Fails with [`LiftError::Config`][crate::LiftError::Config] if
    /// `max_floor` is below ground.
    pub fn floor_range(&self) -> LiftResult<FloorRange> {
        FloorRange::up_to(self.max_floor)
    }

    /// Check the configuration without building anything.
    pub fn validate(&self) -> LiftResult<()> {
        self.floor_range().map(|_| ())
    }
}

impl Default for LiftConfig {
    fn default() -> Self {
        Self { max_floor: Floor(10) }
    }
}
