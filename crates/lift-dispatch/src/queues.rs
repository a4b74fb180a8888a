//! `DispatchQueues` — one ascending and one descending list of pending stops.
//!
//! Both queues are sorted `Vec`s with binary-search insertion.  The same
//! floor submitted twice is stored twice and served twice.

use lift_core::{CallRequest, Direction, Floor};

/// Where a submitted floor ends up relative to the car.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Placement {
    /// Queued for an upward sweep.
    Up,
    /// Queued for a downward sweep.
    Down,
    /// The car is already there; nothing was queued.
    AtFloor,
}

impl Placement {
    /// The sweep direction that will serve this placement, if any.
    #[inline]
    pub fn direction(self) -> Option<Direction> {
        match self {
            Placement::Up      => Some(Direction::Up),
            Placement::Down    => Some(Direction::Down),
            Placement::AtFloor => None,
        }
    }
}

/// Decide which queue `floor` belongs in while the car is at `current`.
#[inline]
pub fn route(floor: Floor, current: Floor) -> Placement {
    use std::cmp::Ordering;
    match floor.cmp(&current) {
        Ordering::Greater => Placement::Up,
        Ordering::Less    => Placement::Down,
        Ordering::Equal   => Placement::AtFloor,
    }
}

/// Pending stops, split by the sweep direction that will serve them.
///
/// Invariants:
/// - `up` is sorted ascending, `down` descending, so the front of each list
///   is the nearest stop in that direction of travel.
/// - Equal floors are adjacent; insertion order among equals is preserved.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DispatchQueues {
    up:   Vec<Floor>,
    down: Vec<Floor>,
}

impl DispatchQueues {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Submission ────────────────────────────────────────────────────────

    /// Route a hall call.  `request.origin` is not consulted.
    ///
    /// Returns [`Placement::AtFloor`] without queuing anything when the car
    /// is already at the call's floor; the caller is responsible for opening
    /// the doors in that case.
    pub fn submit_call(&mut self, request: &CallRequest, current: Floor) -> Placement {
        self.submit(request.floor, current)
    }

    /// Route a cabin destination.  A destination equal to `current` is
    /// ignored (the passenger is already there).
    pub fn submit_destination(&mut self, floor: Floor, current: Floor) -> Placement {
        self.submit(floor, current)
    }

    fn submit(&mut self, floor: Floor, current: Floor) -> Placement {
        let placement = route(floor, current);
        if let Some(direction) = placement.direction() {
            self.insert(direction, floor);
        }
        placement
    }

    /// Insert `floor` into the queue for `direction`, keeping sort order.
    ///
    /// `Direction::Idle` is ignored.
    pub fn insert(&mut self, direction: Direction, floor: Floor) {
        match direction {
            Direction::Up => {
                let at = self.up.partition_point(|&f| f <= floor);
                self.up.insert(at, floor);
            }
            Direction::Down => {
                let at = self.down.partition_point(|&f| f >= floor);
                self.down.insert(at, floor);
            }
            Direction::Idle => {}
        }
    }

    // ── Sweep support ─────────────────────────────────────────────────────

    /// The stops an upcoming sweep in `direction` will serve, in visiting
    /// order: up-queue floors `>= current` ascending, or down-queue floors
    /// `<= current` descending.
    ///
    /// The result is an owned copy.  Entries inserted after this call are not
    /// part of it.
    pub fn snapshot(&self, direction: Direction, current: Floor) -> Vec<Floor> {
        match direction {
            Direction::Up   => self.up.iter().copied().filter(|&f| f >= current).collect(),
            Direction::Down => self.down.iter().copied().filter(|&f| f <= current).collect(),
            Direction::Idle => Vec::new(),
        }
    }

    /// Whether a sweep in `direction` starting at `current` would serve
    /// anything, i.e. whether [`snapshot`](Self::snapshot) is non-empty.
    pub fn has_eligible(&self, direction: Direction, current: Floor) -> bool {
        match direction {
            Direction::Up   => self.up.last().is_some_and(|&f| f >= current),
            Direction::Down => self.down.last().is_some_and(|&f| f <= current),
            Direction::Idle => false,
        }
    }

    /// Remove a single occurrence of `floor` from the queue for `direction`.
    ///
    /// Returns `false` if the floor was not queued there.
    pub fn remove_one(&mut self, direction: Direction, floor: Floor) -> bool {
        let queue = match direction {
            Direction::Up   => &mut self.up,
            Direction::Down => &mut self.down,
            Direction::Idle => return false,
        };
        match queue.iter().position(|&f| f == floor) {
            Some(i) => {
                queue.remove(i);
                true
            }
            None => false,
        }
    }

    /// Move every entry of the `direction` queue that lies behind the car
    /// into the opposite queue, and return the moved floors.
    ///
    /// Behind means `< current` for the up queue and `> current` for the
    /// down queue.  After the move each floor is correctly placed for the
    /// car's present position.
    pub fn reroute_stale(&mut self, direction: Direction, current: Floor) -> Vec<Floor> {
        let stale: Vec<Floor> = match direction {
            Direction::Up => {
                let (stale, keep) = self.up.iter().partition(|&&f| f < current);
                self.up = keep;
                stale
            }
            Direction::Down => {
                let (stale, keep) = self.down.iter().partition(|&&f| f > current);
                self.down = keep;
                stale
            }
            Direction::Idle => return Vec::new(),
        };
        let target = direction.opposite();
        for &floor in &stale {
            self.insert(target, floor);
        }
        stale
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Up-queue contents, ascending.
    pub fn up(&self) -> &[Floor] {
        &self.up
    }

    /// Down-queue contents, descending.
    pub fn down(&self) -> &[Floor] {
        &self.down
    }

    /// Queue contents for `direction` (empty for `Idle`).
    pub fn queue(&self, direction: Direction) -> &[Floor] {
        match direction {
            Direction::Up   => &self.up,
            Direction::Down => &self.down,
            Direction::Idle => &[],
        }
    }

    /// `true` if the queue for `direction` has at least one entry.
    pub fn has_pending(&self, direction: Direction) -> bool {
        !self.queue(direction).is_empty()
    }

    /// Total entries across both queues (duplicates counted).
    pub fn len(&self) -> usize {
        self.up.len() + self.down.len()
    }

    pub fn is_empty(&self) -> bool {
        self.up.is_empty() && self.down.is_empty()
    }

    /// Drop every pending stop.
    pub fn clear(&mut self) {
        self.up.clear();
        self.down.clear();
    }
}
