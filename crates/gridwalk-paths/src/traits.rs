use gridwalk_core::{Grid, Point};

/// Minimal search interface: neighbour enumeration.
///
/// Implementations must append neighbours in a deterministic order; the
/// order decides which predecessor each cell receives during a search.
pub trait Pather {
    /// Append neighbours of `p` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// Walkable orthogonal neighbours, north, south, east, west.
impl Pather for Grid {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        self.neighbors_into(p, buf);
    }
}
