use gridwalk_core::Point;

use crate::error::PathError;
use crate::predecessors::PredecessorMap;

/// Rebuild the path from `start` to `goal`, both inclusive, by following
/// predecessors backward from `goal`.
///
/// `start` does not need to be the map's root: any cell on the chain from
/// `goal` back to the root works. If `goal == start` and `start` is in the
/// map, the result is `[start]`.
///
/// Fails with [`PathError::Unreachable`] if `goal` was never visited, if the
/// chain reaches the root (or a missing entry) without passing `start`, or if
/// the chain loops.
pub fn reconstruct_path(
    map: &PredecessorMap,
    start: Point,
    goal: Point,
) -> Result<Vec<Point>, PathError> {
    let unreachable = PathError::Unreachable { start, goal };
    if !map.contains(goal) {
        log::debug!("path to {goal}: goal was not visited");
        return Err(unreachable);
    }

    let mut path = Vec::new();
    let mut current = goal;
    while current != start {
        // A valid chain visits each cell once; more steps than cells is a loop.
        if path.len() >= map.len() {
            log::debug!("path to {goal}: predecessor chain loops");
            return Err(unreachable);
        }
        path.push(current);
        match map.get(current) {
            Some(Some(prev)) => current = prev,
            Some(None) | None => {
                log::debug!("path to {goal}: chain ends at {current} before {start}");
                return Err(unreachable);
            }
        }
    }
    path.push(start);
    path.reverse();
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line() -> PredecessorMap {
        // (0,0) <- (1,0) <- (2,0) <- (2,1)
        let mut m = PredecessorMap::new(Point::new(0, 0));
        m.visit(Point::new(1, 0), Point::new(0, 0));
        m.visit(Point::new(2, 0), Point::new(1, 0));
        m.visit(Point::new(2, 1), Point::new(2, 0));
        m
    }

    #[test]
    fn path_from_root() {
        let m = line();
        assert_eq!(
            reconstruct_path(&m, Point::new(0, 0), Point::new(2, 1)).unwrap(),
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(2, 0),
                Point::new(2, 1),
            ]
        );
    }

    #[test]
    fn start_equals_goal() {
        let m = line();
        assert_eq!(
            reconstruct_path(&m, Point::new(0, 0), Point::new(0, 0)).unwrap(),
            vec![Point::new(0, 0)]
        );
        assert_eq!(
            reconstruct_path(&m, Point::new(2, 0), Point::new(2, 0)).unwrap(),
            vec![Point::new(2, 0)]
        );
    }

    #[test]
    fn start_inside_chain() {
        let m = line();
        assert_eq!(
            reconstruct_path(&m, Point::new(1, 0), Point::new(2, 1)).unwrap(),
            vec![Point::new(1, 0), Point::new(2, 0), Point::new(2, 1)]
        );
    }

    #[test]
    fn absent_goal_is_unreachable() {
        let m = line();
        let err = reconstruct_path(&m, Point::new(0, 0), Point::new(9, 9)).unwrap_err();
        assert_eq!(
            err,
            PathError::Unreachable {
                start: Point::new(0, 0),
                goal: Point::new(9, 9),
            }
        );
    }

    #[test]
    fn start_off_chain_stops_at_root() {
        let m = line();
        let err = reconstruct_path(&m, Point::new(5, 5), Point::new(2, 1)).unwrap_err();
        assert!(matches!(err, PathError::Unreachable { .. }));
    }

    #[test]
    fn broken_chain_is_unreachable() {
        let mut m = PredecessorMap::new(Point::ZERO);
        m.visit(Point::new(3, 3), Point::new(3, 2));
        let err = m.path_to(Point::new(3, 3)).unwrap_err();
        assert!(matches!(err, PathError::Unreachable { .. }));
    }

    #[test]
    fn cyclic_chain_terminates() {
        let mut m = PredecessorMap::new(Point::ZERO);
        m.visit(Point::new(1, 1), Point::new(1, 2));
        m.visit(Point::new(1, 2), Point::new(1, 1));
        let err = m.path_to(Point::new(1, 1)).unwrap_err();
        assert_eq!(err.to_string(), "no path from (0, 0) to (1, 1)");
    }
}
