//! The `Elevator` struct and its SCAN run loop.

use lift_core::{CallRequest, Direction, Floor, FloorRange, LiftResult};
use lift_dispatch::{DispatchQueues, Placement};
use tracing::{debug, info, trace, warn};

use crate::{Cabin, LiftObserver, NoopObserver};

// ── RunReport ─────────────────────────────────────────────────────────────────

/// What one call to [`Elevator::run`] did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Floor the car was at when `run` was called.
    pub start_floor: Floor,
    /// Floor the car rests at afterwards.
    pub final_floor: Floor,
    /// Every floor the doors opened at, in order (duplicates included).
    pub stops: Vec<Floor>,
    /// Number of sweeps that served at least one stop.
    pub sweeps: usize,
}

impl RunReport {
    fn new(start_floor: Floor) -> Self {
        Self { start_floor, final_floor: start_floor, stops: Vec::new(), sweeps: 0 }
    }

    /// Floors travelled over the whole run.
    pub fn distance(&self) -> u32 {
        let mut at = self.start_floor;
        self.stops.iter().fold(0, |acc, &stop| {
            let d = at.distance(stop);
            at = stop;
            acc + d
        })
    }
}

// ── Elevator ──────────────────────────────────────────────────────────────────

/// A single elevator serving `range`, scheduled with SCAN.
///
/// One instance per simulated building, owned by whoever runs the session
/// (a scenario runner, a CLI loop, or the [`service`][crate::service] thread).
/// Movement and door events go to the owned observer `O`.
///
/// Create via [`ElevatorBuilder`][crate::ElevatorBuilder].
pub struct Elevator<O: LiftObserver = NoopObserver> {
    range:     FloorRange,
    floor:     Floor,
    direction: Direction,
    queues:    DispatchQueues,
    observer:  O,
}

impl<O: LiftObserver> Elevator<O> {
    pub(crate) fn from_parts(range: FloorRange, floor: Floor, observer: O) -> Self {
        Self {
            range,
            floor,
            direction: Direction::Idle,
            queues:    DispatchQueues::new(),
            observer,
        }
    }

    // ── Requests ──────────────────────────────────────────────────────────

    /// Accept a hall call.
    ///
    /// A call at the car's current floor opens the doors immediately and
    /// queues nothing.  Otherwise the floor is queued by its position
    /// relative to the car; `request.origin` is only validated, never used
    /// for routing.
    ///
    /// Rejected requests leave the queues untouched.
    pub fn submit_call(&mut self, request: CallRequest) -> LiftResult<Placement> {
        self.range.check_call(&request)?;
        let placement = self.queues.submit_call(&request, self.floor);
        debug!(floor = %request.floor, origin = %request.origin, ?placement, "call accepted");
        if placement == Placement::AtFloor {
            self.open_doors();
        }
        Ok(placement)
    }

    /// Accept a cabin destination.  The current floor is ignored.
    pub fn submit_destination(&mut self, floor: impl Into<Floor>) -> LiftResult<Placement> {
        let floor = self.range.check_floor(floor.into())?;
        let placement = self.queues.submit_destination(floor, self.floor);
        debug!(%floor, ?placement, "destination accepted");
        Ok(placement)
    }

    // ── Run loop ──────────────────────────────────────────────────────────

    /// Serve every queued stop, then come to rest.
    ///
    /// Returns once both queues are empty and the direction is `Idle`.
    pub fn run(&mut self) -> RunReport {
        let mut report = RunReport::new(self.floor);
        self.observer.on_run_start(self.floor);

        while !self.queues.is_empty() {
            if self.direction == Direction::Idle {
                self.direction = if self.queues.has_pending(Direction::Up) {
                    Direction::Up
                } else {
                    Direction::Down
                };
            }
            self.sweep(&mut report);
        }

        self.direction = Direction::Idle;
        report.final_floor = self.floor;
        self.observer.on_idle(self.floor);
        info!(
            floor = %self.floor,
            stops = report.stops.len(),
            sweeps = report.sweeps,
            "elevator idle"
        );
        report
    }

    /// One sweep in `self.direction`, followed by the direction switch.
    fn sweep(&mut self, report: &mut RunReport) {
        let direction = self.direction;
        let stops = self.queues.snapshot(direction, self.floor);

        if stops.is_empty() {
            // Everything queued for this direction is behind the car.  It
            // waits for a later sweep unless the opposite sweep has nothing
            // to serve either, which would never end.
            if !self.queues.has_eligible(direction.opposite(), self.floor) {
                let moved = self.queues.reroute_stale(direction, self.floor);
                warn!(%direction, at = %self.floor, ?moved, "rerouting stale stops");
            } else {
                debug!(%direction, at = %self.floor, "empty sweep");
            }
        } else {
            debug!(%direction, from = %self.floor, ?stops, "sweep start");
            self.observer.on_sweep_start(direction, &stops);
            for stop in stops {
                self.move_to(stop);
                self.open_doors();
                let removed = self.queues.remove_one(direction, stop);
                debug_assert!(removed, "snapshot stop {stop} missing from {direction} queue");
                report.stops.push(stop);
            }
            report.sweeps += 1;
        }

        let reverse = direction.opposite();
        self.direction = if self.queues.has_pending(reverse) {
            reverse
        } else {
            Direction::Idle
        };
    }

    fn move_to(&mut self, target: Floor) {
        let from = self.floor;
        self.floor = target;
        trace!(%from, to = %target, "move");
        self.observer.on_move(from, target);
    }

    fn open_doors(&mut self) {
        let Self { range, floor, queues, observer, .. } = self;
        trace!(at = %floor, "doors open");
        let mut cabin = Cabin::new(*floor, *range, queues);
        observer.on_door_open(*floor, &mut cabin);
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Return to the ground floor with nothing queued.
    pub fn reset(&mut self) {
        self.floor = Floor::GROUND;
        self.direction = Direction::Idle;
        self.queues.clear();
        debug!("elevator reset to ground");
    }

    // ── Observers ─────────────────────────────────────────────────────────

    #[inline]
    pub fn current_floor(&self) -> Floor {
        self.floor
    }

    #[inline]
    pub fn current_direction(&self) -> Direction {
        self.direction
    }

    pub fn floor_range(&self) -> FloorRange {
        self.range
    }

    /// Pending up-queue floors, ascending.
    pub fn up_queue(&self) -> &[Floor] {
        self.queues.up()
    }

    /// Pending down-queue floors, descending.
    pub fn down_queue(&self) -> &[Floor] {
        self.queues.down()
    }

    pub fn queues(&self) -> &DispatchQueues {
        &self.queues
    }

    /// `true` when nothing is queued and the car is idle.
    pub fn is_drained(&self) -> bool {
        self.queues.is_empty() && self.direction == Direction::Idle
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Consume the elevator and return its observer (e.g. to flush output).
    pub fn into_observer(self) -> O {
        self.observer
    }
}
