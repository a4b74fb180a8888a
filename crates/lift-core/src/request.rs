//! Request values submitted to the elevator.

use std::fmt;

use crate::{Direction, Floor};

/// A hall call: someone outside the cabin pressed `origin` at `floor`.
///
/// `origin` is recorded but does not influence which sweep serves the call;
/// routing depends only on where `floor` lies relative to the car.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CallRequest {
    pub floor:  Floor,
    pub origin: Direction,
}

impl CallRequest {
    #[inline]
    pub fn new(floor: impl Into<Floor>, origin: Direction) -> Self {
        Self { floor: floor.into(), origin }
    }

    #[inline]
    pub fn up(floor: impl Into<Floor>) -> Self {
        Self::new(floor, Direction::Up)
    }

    #[inline]
    pub fn down(floor: impl Into<Floor>) -> Self {
        Self::new(floor, Direction::Down)
    }
}

impl fmt::Display for CallRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} call at {}", self.origin, self.floor)
    }
}

/// A cabin button press: a passenger inside selected `floor`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Destination {
    pub floor: Floor,
}

impl Destination {
    #[inline]
    pub fn new(floor: impl Into<Floor>) -> Self {
        Self { floor: floor.into() }
    }
}

impl From<Floor> for Destination {
    #[inline]
    fn from(floor: Floor) -> Self {
        Self { floor }
    }
}

impl From<Destination> for Floor {
    #[inline]
    fn from(d: Destination) -> Self {
        d.floor
    }
}
