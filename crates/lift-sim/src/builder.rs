//! Fluent builder for constructing an [`Elevator`].

use lift_core::{Floor, LiftConfig};

use crate::{Elevator, LiftObserver, NoopObserver, SimResult};

/// Fluent builder for [`Elevator<O>`].
///
/// # Optional inputs (have defaults)
///
/// | Method              | Default                   |
/// |---------------------|---------------------------|
/// | `.observer(o)`      | [`NoopObserver`]          |
/// | `.start_floor(f)`   | `Floor::GROUND`           |
///
/// # Example
///
/// ```rust,ignore
/// let mut elevator = ElevatorBuilder::new(LiftConfig::new(20))
///     .observer(EventLog::new())
///     .start_floor(Floor(5))
///     .build()?;
/// ```
pub struct ElevatorBuilder<O: LiftObserver = NoopObserver> {
    config:      LiftConfig,
    start_floor: Floor,
    observer:    O,
}

impl ElevatorBuilder<NoopObserver> {
    pub fn new(config: LiftConfig) -> Self {
        Self {
            config,
            start_floor: Floor::GROUND,
            observer:    NoopObserver,
        }
    }
}

impl<O: LiftObserver> ElevatorBuilder<O> {
    /// Replace the observer that receives movement and door events.
    pub fn observer<P: LiftObserver>(self, observer: P) -> ElevatorBuilder<P> {
        ElevatorBuilder {
            config:      self.config,
            start_floor: self.start_floor,
            observer,
        }
    }

    /// Place the car somewhere other than the ground floor.
    ///
    /// [`Elevator::reset`] still returns it to the ground floor.
    pub fn start_floor(mut self, floor: impl Into<Floor>) -> Self {
        self.start_floor = floor.into();
        self
    }

    /// Validate the configuration and start floor and return an idle
    /// [`Elevator`] with empty queues.
    pub fn build(self) -> SimResult<Elevator<O>> {
        let range = self.config.floor_range()?;
        let floor = range.check_floor(self.start_floor)?;
        Ok(Elevator::from_parts(range, floor, self.observer))
    }
}
