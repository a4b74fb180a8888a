//! Value form of the observer callbacks.

use std::fmt;

use lift_core::{Direction, Floor};

/// One thing the elevator did, in the order it happened.
///
/// [`EventLog`][crate::EventLog] and [`ChannelObserver`][crate::ChannelObserver]
/// turn observer callbacks into these so they can be stored or sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LiftEvent {
    /// `run` was called with the car at `floor`.
    RunStarted { floor: Floor },
    /// A sweep began; `stops` is its snapshot in visiting order.
    SweepStarted { direction: Direction, stops: Vec<Floor> },
    /// The car travelled from `from` to `to` (equal for a repeated stop).
    Moved { from: Floor, to: Floor },
    /// Doors opened at `floor`.
    DoorOpened { floor: Floor },
    /// Both queues drained; the car rests at `floor`.
    Idle { floor: Floor },
}

impl LiftEvent {
    /// Short lower-case tag, used as the `kind` column in output files.
    pub fn kind(&self) -> &'static str {
        match self {
            LiftEvent::RunStarted { .. }   => "run_started",
            LiftEvent::SweepStarted { .. } => "sweep_started",
            LiftEvent::Moved { .. }        => "moved",
            LiftEvent::DoorOpened { .. }   => "door_opened",
            LiftEvent::Idle { .. }         => "idle",
        }
    }
}

impl fmt::Display for LiftEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiftEvent::RunStarted { floor } => write!(f, "Running elevator from {floor}"),
            LiftEvent::SweepStarted { direction, stops } => {
                write!(f, "Sweeping {direction} through {} stop(s)", stops.len())
            }
            LiftEvent::Moved { from, to } => write!(f, "Moving from {from} to {to}"),
            LiftEvent::DoorOpened { floor } => write!(f, "Opening doors at {floor}"),
            LiftEvent::Idle { floor } => write!(f, "Elevator is now idle at {floor}"),
        }
    }
}
