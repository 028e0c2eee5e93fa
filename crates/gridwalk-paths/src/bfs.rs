use gridwalk_core::{Grid, Point};

use crate::error::PathError;
use crate::predecessors::PredecessorMap;
use crate::queue::FifoQueue;
use crate::traits::Pather;

/// Breadth-first search from `start`, recording for every reachable cell the
/// cell it was first discovered from.
///
/// Neighbours are expanded in the order `pather` yields them (north, south,
/// east, west for a [`Grid`]), so the result is fully deterministic and the
/// predecessor chain of each cell is a shortest path back to `start`.
/// Unreachable cells are absent from the result.
///
/// `start` is not validated; see [`traverse_checked`].
pub fn traverse<P: Pather>(pather: &P, start: Point) -> PredecessorMap {
    let mut came_from = PredecessorMap::new(start);
    let mut frontier = FifoQueue::new();
    frontier.enqueue(start);

    let mut nbuf = Vec::with_capacity(4);

    while let Ok(current) = frontier.dequeue() {
        nbuf.clear();
        pather.neighbors(current, &mut nbuf);

        for &next in nbuf.iter() {
            if came_from.visit(next, current) {
                log::trace!("bfs: {next} reached from {current}");
                frontier.enqueue(next);
            }
        }
    }

    log::debug!("bfs from {start}: {} cells reached", came_from.len());
    came_from
}

/// Like [`traverse`], but first checks that `start` is inside `grid` and not
/// an obstacle.
pub fn traverse_checked(grid: &Grid, start: Point) -> Result<PredecessorMap, PathError> {
    if !grid.in_bounds(start) {
        return Err(PathError::OutOfBounds(start));
    }
    if !grid.passable(start) {
        return Err(PathError::InvalidStart(start));
    }
    Ok(traverse(grid, start))
}
