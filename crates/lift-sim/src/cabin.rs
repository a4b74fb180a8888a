//! Handle to the stopped car, passed to [`LiftObserver::on_door_open`].
//!
//! [`LiftObserver::on_door_open`]: crate::LiftObserver::on_door_open

use lift_core::{Floor, FloorRange, LiftResult};
use lift_dispatch::{DispatchQueues, Placement};
use tracing::trace;

/// The car with its doors open at [`floor`][Self::floor].
///
/// Borrowed from the elevator only for the duration of one door event.
pub struct Cabin<'a> {
    floor:  Floor,
    range:  FloorRange,
    queues: &'a mut DispatchQueues,
}

impl<'a> Cabin<'a> {
    pub(crate) fn new(floor: Floor, range: FloorRange, queues: &'a mut DispatchQueues) -> Self {
        Self { floor, range, queues }
    }

    /// Floor the car is stopped at.
    #[inline]
    pub fn floor(&self) -> Floor {
        self.floor
    }

    /// Press a cabin button.
    ///
    /// Same rules as [`Elevator::submit_destination`][crate::Elevator::submit_destination]:
    /// the floor must be served, and the current floor is ignored.
    pub fn select(&mut self, floor: impl Into<Floor>) -> LiftResult<Placement> {
        let floor = self.range.check_floor(floor.into())?;
        let placement = self.queues.submit_destination(floor, self.floor);
        trace!(at = %self.floor, selected = %floor, ?placement, "cabin selection");
        Ok(placement)
    }

    /// Pending up-queue floors, ascending.
    pub fn pending_up(&self) -> &[Floor] {
        self.queues.up()
    }

    /// Pending down-queue floors, descending.
    pub fn pending_down(&self) -> &[Floor] {
        self.queues.down()
    }
}
