//! Floor numbers and the served floor range.
//!
//! Floors are plain signed integers wrapped in a newtype so that a floor can
//! never be confused with a count or an index.  Signed storage lets
//! out-of-range input (e.g. `-1` typed at a prompt) reach [`FloorRange`]
//! validation instead of failing in an integer parse.

use std::fmt;
use std::str::FromStr;

use crate::{CallRequest, Direction, LiftError, LiftResult};

// ── Floor ─────────────────────────────────────────────────────────────────────

/// A floor number.  `Floor::GROUND` (0) is the lowest served floor.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Floor(pub i32);

impl Floor {
    pub const GROUND: Floor = Floor(0);

    #[inline]
    pub const fn new(n: i32) -> Self {
        Floor(n)
    }

    /// The raw floor number.
    #[inline]
    pub const fn number(self) -> i32 {
        self.0
    }

    /// Number of floors between `self` and `other`.
    #[inline]
    pub fn distance(self, other: Floor) -> u32 {
        self.0.abs_diff(other.0)
    }
}

impl From<i32> for Floor {
    #[inline]
    fn from(n: i32) -> Self {
        Floor(n)
    }
}

impl From<Floor> for i32 {
    #[inline]
    fn from(f: Floor) -> i32 {
        f.0
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Floor {}", self.0)
    }
}

impl FromStr for Floor {
    type Err = LiftError;

    /// Accepts an integer, or `g` / `ground` for floor 0.
    fn from_str(s: &str) -> LiftResult<Floor> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("g") || s.eq_ignore_ascii_case("ground") {
            return Ok(Floor::GROUND);
        }
        s.parse::<i32>()
            .map(Floor)
            .map_err(|_| LiftError::Parse(format!("invalid floor {s:?}: expected an integer or \"g\"")))
    }
}

// ── FloorRange ────────────────────────────────────────────────────────────────

/// The inclusive range of floors a building's elevator serves.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FloorRange {
    pub lowest:  Floor,
    pub highest: Floor,
}

impl FloorRange {
    /// Build a range, rejecting `lowest > highest`.
    pub fn new(lowest: Floor, highest: Floor) -> LiftResult<Self> {
        if lowest > highest {
            return Err(LiftError::Config(format!(
                "lowest floor {lowest} is above highest floor {highest}"
            )));
        }
        Ok(Self { lowest, highest })
    }

    /// `[Floor::GROUND, highest]`.
    pub fn up_to(highest: Floor) -> LiftResult<Self> {
        Self::new(Floor::GROUND, highest)
    }

    #[inline]
    pub fn contains(&self, floor: Floor) -> bool {
        self.lowest <= floor && floor <= self.highest
    }

    /// Number of served floors.
    #[inline]
    pub fn len(&self) -> usize {
        (self.highest.0 - self.lowest.0) as usize + 1
    }

    /// Always `false`: a validated range holds at least one floor.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// All served floors, lowest first.
    pub fn floors(&self) -> impl Iterator<Item = Floor> {
        (self.lowest.0..=self.highest.0).map(Floor)
    }

    /// Reject floors outside the range with [`LiftError::InvalidFloor`].
    pub fn check_floor(&self, floor: Floor) -> LiftResult<Floor> {
        if self.contains(floor) {
            Ok(floor)
        } else {
            Err(LiftError::InvalidFloor { floor, range: *self })
        }
    }

    /// Validate an external call: the floor must be served, the direction
    /// must be `Up` or `Down`, and there is no `Down` button on the lowest
    /// floor nor an `Up` button on the highest.
    pub fn check_call(&self, request: &CallRequest) -> LiftResult<()> {
        let floor = self.check_floor(request.floor)?;
        let valid = match request.origin {
            Direction::Up   => floor < self.highest,
            Direction::Down => floor > self.lowest,
            Direction::Idle => false,
        };
        if valid {
            Ok(())
        } else {
            Err(LiftError::InvalidDirectionForFloor { floor, direction: request.origin })
        }
    }
}

impl Default for FloorRange {
    /// Floors 0 through 10.
    fn default() -> Self {
        Self { lowest: Floor::GROUND, highest: Floor(10) }
    }
}

impl fmt::Display for FloorRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.lowest.0, self.highest.0)
    }
}
