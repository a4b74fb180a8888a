//! Car movement direction, shared by requests, queues and the scheduler.

use std::fmt;
use std::str::FromStr;

use crate::{LiftError, LiftResult};

/// Which way the car is travelling (or that it is not travelling at all).
///
/// On a [`CallRequest`][crate::CallRequest] this is the hall button the
/// passenger pressed.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    Up,
    Down,
    /// Stationary with nothing selected (default state).
    #[default]
    Idle,
}

impl Direction {
    /// `true` for `Up` and `Down`.
    #[inline]
    pub fn is_moving(self) -> bool {
        !matches!(self, Direction::Idle)
    }

    /// The reverse sweep direction.  `Idle` stays `Idle`.
    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up   => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Idle => Direction::Idle,
        }
    }

    /// Lower-case label, used for CSV columns and log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up   => "up",
            Direction::Down => "down",
            Direction::Idle => "idle",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = LiftError;

    fn from_str(s: &str) -> LiftResult<Direction> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" | "u"   => Ok(Direction::Up),
            "down" | "d" => Ok(Direction::Down),
            "idle"       => Ok(Direction::Idle),
            other => Err(LiftError::Parse(format!(
                "invalid direction {other:?}: expected \"up\" or \"down\""
            ))),
        }
    }
}
