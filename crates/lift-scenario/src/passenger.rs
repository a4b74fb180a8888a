//! A passenger: one hall call followed by one cabin destination.

use std::fmt;

use lift_core::{CallRequest, Destination, Direction, Floor, FloorRange, LiftResult};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Passenger {
    /// Floor where the passenger calls the car.
    pub start_floor: Floor,
    /// Hall button pressed.
    pub direction:   Direction,
    /// Floor selected after boarding.
    pub destination: Floor,
}

impl Passenger {
    pub fn new(start_floor: impl Into<Floor>, direction: Direction, destination: impl Into<Floor>) -> Self {
        Self {
            start_floor: start_floor.into(),
            direction,
            destination: destination.into(),
        }
    }

    #[inline]
    pub fn up(start_floor: impl Into<Floor>, destination: impl Into<Floor>) -> Self {
        Self::new(start_floor, Direction::Up, destination)
    }

    #[inline]
    pub fn down(start_floor: impl Into<Floor>, destination: impl Into<Floor>) -> Self {
        Self::new(start_floor, Direction::Down, destination)
    }

    /// The hall call for the pickup phase.
    #[inline]
    pub fn call(&self) -> CallRequest {
        CallRequest::new(self.start_floor, self.direction)
    }

    /// The cabin request for the drop-off phase.
    #[inline]
    pub fn destination(&self) -> Destination {
        Destination::new(self.destination)
    }

    /// Check both the call and the destination against `range`.
    ///
    /// A destination on the wrong side of the call direction is accepted,
    /// as is one equal to the start floor.
    pub fn validate(&self, range: &FloorRange) -> LiftResult<()> {
        range.check_call(&self.call())?;
        range.check_floor(self.destination)?;
        Ok(())
    }
}

impl fmt::Display for Passenger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {} to {}", self.direction, self.start_floor, self.destination)
    }
}
