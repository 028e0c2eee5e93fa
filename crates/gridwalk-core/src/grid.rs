//! The [`Grid`] type: a rectangular board with a set of blocked cells.
//!
//! A `Grid` is an implicit graph. Its vertices are the in-bounds cells that
//! are not obstacles, and its edges join orthogonally adjacent vertices.

use std::collections::HashSet;

use crate::geom::{Direction, Point, Range};

/// A `width` x `height` board whose origin is (0, 0), plus a set of obstacle
/// cells that cannot be entered.
///
/// The obstacle set is a plain `HashSet<Point>` exposed through
/// [`obstacles`](Self::obstacles) and [`obstacles_mut`](Self::obstacles_mut).
/// Obstacles outside the bounds are allowed and have no effect on
/// [`neighbors`](Self::neighbors).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    width: i32,
    height: i32,
    obstacles: HashSet<Point>,
}

impl Grid {
    /// Create a grid of the given dimensions with no obstacles.
    ///
    /// Non-positive dimensions produce a grid without any in-bounds cell.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            obstacles: HashSet::new(),
        }
    }

    /// Builder-style helper that adds every point of `obstacles`.
    pub fn with_obstacles(mut self, obstacles: impl IntoIterator<Item = Point>) -> Self {
        self.obstacles.extend(obstacles);
        self
    }

    /// Number of columns (x-extent).
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Number of rows (y-extent).
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The bounds as a half-open range starting at the origin.
    #[inline]
    pub fn range(&self) -> Range {
        Range::new(0, 0, self.width.max(0), self.height.max(0))
    }

    /// Whether `p` satisfies `0 <= x < width` and `0 <= y < height`.
    #[inline]
    pub fn in_bounds(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }

    /// Whether `p` is not an obstacle.
    ///
    /// This is pure set membership and does not check bounds, so an
    /// out-of-bounds point reports `true` unless it was explicitly blocked.
    #[inline]
    pub fn passable(&self, p: Point) -> bool {
        !self.obstacles.contains(&p)
    }

    /// Whether `p` can be stood on: in bounds and passable.
    #[inline]
    pub fn walkable(&self, p: Point) -> bool {
        self.in_bounds(p) && self.passable(p)
    }

    /// The walkable cells orthogonally adjacent to `p`, in the fixed order
    /// north, south, east, west (see [`Direction::ALL`]).
    ///
    /// Candidates are filtered by [`in_bounds`](Self::in_bounds) first and
    /// [`passable`](Self::passable) second; survivors keep their relative
    /// order.
    pub fn neighbors(&self, p: Point) -> Vec<Point> {
        let mut buf = Vec::with_capacity(4);
        self.neighbors_into(p, &mut buf);
        buf
    }

    /// Like [`neighbors`](Self::neighbors) but appends into `buf`, so that a
    /// search loop can reuse one allocation.
    pub fn neighbors_into(&self, p: Point, buf: &mut Vec<Point>) {
        for d in Direction::ALL {
            // A step past i32::MIN/MAX cannot land inside the grid.
            let Some(n) = p.checked_step(d) else {
                continue;
            };
            if self.in_bounds(n) && self.passable(n) {
                buf.push(n);
            }
        }
    }

    /// The obstacle set.
    #[inline]
    pub fn obstacles(&self) -> &HashSet<Point> {
        &self.obstacles
    }

    /// Mutable access to the obstacle set.
    #[inline]
    pub fn obstacles_mut(&mut self) -> &mut HashSet<Point> {
        &mut self.obstacles
    }

    /// Mark `p` as an obstacle. Returns `false` if it already was one.
    pub fn block(&mut self, p: Point) -> bool {
        self.obstacles.insert(p)
    }

    /// Clear the obstacle at `p`. Returns `false` if there was none.
    pub fn unblock(&mut self, p: Point) -> bool {
        self.obstacles.remove(&p)
    }

    /// Iterate over every walkable cell in row-major order.
    pub fn walkable_cells(&self) -> impl Iterator<Item = Point> + '_ {
        self.range().iter().filter(|&p| self.passable(p))
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let g = Grid::new(4, 3).with_obstacles([Point::new(1, 2)]);
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }
}
