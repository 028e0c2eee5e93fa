use std::fmt;

use gridwalk_core::Point;

/// Errors returned by validated traversal and path reconstruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// The goal is not connected to the start in the predecessor map, or the
    /// map is malformed (a chain that never reaches the start).
    Unreachable { start: Point, goal: Point },
    /// The traversal start lies outside the grid.
    OutOfBounds(Point),
    /// The traversal start is an obstacle.
    InvalidStart(Point),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreachable { start, goal } => {
                write!(f, "no path from {start} to {goal}")
            }
            Self::OutOfBounds(p) => write!(f, "start {p} is out of bounds"),
            Self::InvalidStart(p) => write!(f, "start {p} is an obstacle"),
        }
    }
}

impl std::error::Error for PathError {}
