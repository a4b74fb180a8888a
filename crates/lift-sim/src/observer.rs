//! Observer trait for movement and door reporting.

use lift_core::{Direction, Floor};

use crate::{Cabin, LiftEvent};

/// Callbacks invoked by [`Elevator`][crate::Elevator] as it serves requests.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  The elevator never prints; everything a
/// console, log file or test wants to know arrives through here.
///
/// # Example — console reporter
///
/// ```rust,ignore
/// struct Console;
///
/// impl LiftObserver for Console {
///     fn on_move(&mut self, from: Floor, to: Floor) {
///         println!("Moving from {from} to {to}");
///     }
///     fn on_door_open(&mut self, floor: Floor, _cabin: &mut Cabin<'_>) {
///         println!("Opening doors at {floor}");
///     }
/// }
/// ```
pub trait LiftObserver {
    /// Called once when `run` starts, before any direction is chosen.
    fn on_run_start(&mut self, _floor: Floor) {}

    /// Called when a sweep begins.  `stops` is the sweep's snapshot, in the
    /// order the car will visit them.
    fn on_sweep_start(&mut self, _direction: Direction, _stops: &[Floor]) {}

    /// Called after the car's floor changes to `to`, before its doors open.
    fn on_move(&mut self, _from: Floor, _to: Floor) {}

    /// Called when the doors open at `floor`.
    ///
    /// `cabin` lets boarding passengers select destinations.  Selections made
    /// during a sweep are queued but not added to that sweep's snapshot.
    fn on_door_open(&mut self, _floor: Floor, _cabin: &mut Cabin<'_>) {}

    /// Called once when both queues are drained.
    fn on_idle(&mut self, _floor: Floor) {}
}

impl<O: LiftObserver + ?Sized> LiftObserver for &mut O {
    fn on_run_start(&mut self, floor: Floor) {
        (**self).on_run_start(floor);
    }

    fn on_sweep_start(&mut self, direction: Direction, stops: &[Floor]) {
        (**self).on_sweep_start(direction, stops);
    }

    fn on_move(&mut self, from: Floor, to: Floor) {
        (**self).on_move(from, to);
    }

    fn on_door_open(&mut self, floor: Floor, cabin: &mut Cabin<'_>) {
        (**self).on_door_open(floor, cabin);
    }

    fn on_idle(&mut self, floor: Floor) {
        (**self).on_idle(floor);
    }
}

/// `None` observes nothing; `Some(o)` forwards to `o`.
impl<O: LiftObserver> LiftObserver for Option<O> {
    fn on_run_start(&mut self, floor: Floor) {
        if let Some(o) = self {
            o.on_run_start(floor);
        }
    }

    fn on_sweep_start(&mut self, direction: Direction, stops: &[Floor]) {
        if let Some(o) = self {
            o.on_sweep_start(direction, stops);
        }
    }

    fn on_move(&mut self, from: Floor, to: Floor) {
        if let Some(o) = self {
            o.on_move(from, to);
        }
    }

    fn on_door_open(&mut self, floor: Floor, cabin: &mut Cabin<'_>) {
        if let Some(o) = self {
            o.on_door_open(floor, cabin);
        }
    }

    fn on_idle(&mut self, floor: Floor) {
        if let Some(o) = self {
            o.on_idle(floor);
        }
    }
}

/// A [`LiftObserver`] that does nothing.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoopObserver;

impl LiftObserver for NoopObserver {}

/// A [`LiftObserver`] that records every callback as a [`LiftEvent`].
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<LiftEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[LiftEvent] {
        &self.events
    }

    /// Floors where the doors opened, in order.
    pub fn door_openings(&self) -> Vec<Floor> {
        self.events
            .iter()
            .filter_map(|e| match e {
                LiftEvent::DoorOpened { floor } => Some(*floor),
                _ => None,
            })
            .collect()
    }

    /// `(from, to)` pairs of every move, in order.
    pub fn moves(&self) -> Vec<(Floor, Floor)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                LiftEvent::Moved { from, to } => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }

    /// `(direction, stops)` of every sweep that served at least one stop.
    pub fn sweeps(&self) -> Vec<(Direction, Vec<Floor>)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                LiftEvent::SweepStarted { direction, stops } => Some((*direction, stops.clone())),
                _ => None,
            })
            .collect()
    }

    /// Drain and return the recorded events.
    pub fn take(&mut self) -> Vec<LiftEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl LiftObserver for EventLog {
    fn on_run_start(&mut self, floor: Floor) {
        self.events.push(LiftEvent::RunStarted { floor });
    }

    fn on_sweep_start(&mut self, direction: Direction, stops: &[Floor]) {
        self.events.push(LiftEvent::SweepStarted { direction, stops: stops.to_vec() });
    }

    fn on_move(&mut self, from: Floor, to: Floor) {
        self.events.push(LiftEvent::Moved { from, to });
    }

    fn on_door_open(&mut self, floor: Floor, _cabin: &mut Cabin<'_>) {
        self.events.push(LiftEvent::DoorOpened { floor });
    }

    fn on_idle(&mut self, floor: Floor) {
        self.events.push(LiftEvent::Idle { floor });
    }
}

// ── Chained observer ──────────────────────────────────────────────────────────

/// Forwards every callback to two observers, `first` then `second`.
///
/// Both see the same [`Cabin`] on a door event, so selections made by
/// `first` are visible to `second`.  Construct with `a.then(b)`.
pub struct ChainedObserver<A: LiftObserver, B: LiftObserver> {
    pub first:  A,
    pub second: B,
}

impl<A: LiftObserver, B: LiftObserver> LiftObserver for ChainedObserver<A, B> {
    fn on_run_start(&mut self, floor: Floor) {
        self.first.on_run_start(floor);
        self.second.on_run_start(floor);
    }

    fn on_sweep_start(&mut self, direction: Direction, stops: &[Floor]) {
        self.first.on_sweep_start(direction, stops);
        self.second.on_sweep_start(direction, stops);
    }

    fn on_move(&mut self, from: Floor, to: Floor) {
        self.first.on_move(from, to);
        self.second.on_move(from, to);
    }

    fn on_door_open(&mut self, floor: Floor, cabin: &mut Cabin<'_>) {
        self.first.on_door_open(floor, cabin);
        self.second.on_door_open(floor, cabin);
    }

    fn on_idle(&mut self, floor: Floor) {
        self.first.on_idle(floor);
        self.second.on_idle(floor);
    }
}

/// Extension trait that adds `.then(other)` to any `LiftObserver`.
pub trait LiftObserverExt: LiftObserver + Sized {
    fn then<B: LiftObserver>(self, second: B) -> ChainedObserver<Self, B> {
        ChainedObserver { first: self, second }
    }
}

impl<O: LiftObserver> LiftObserverExt for O {}
