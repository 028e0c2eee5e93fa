//! Explicit adjacency-list graphs.

use std::collections::HashMap;

use gridwalk_core::Point;

use crate::traits::Pather;

/// A graph given by explicit edges between points rather than by grid
/// adjacency, e.g. a hand-built road map or portals between distant cells.
///
/// Edges are directed; [`connect`](Self::connect) adds both directions.
/// Neighbours are reported in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeGraph {
    edges: HashMap<Point, Vec<Point>>,
}

impl EdgeGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directed edge `from -> to`. Duplicate edges are ignored.
    pub fn add_edge(&mut self, from: Point, to: Point) {
        let out = self.edges.entry(from).or_default();
        if !out.contains(&to) {
            out.push(to);
        }
    }

    /// Add edges in both directions.
    pub fn connect(&mut self, a: Point, b: Point) {
        self.add_edge(a, b);
        self.add_edge(b, a);
    }

    /// Outgoing neighbours of `p`.
    pub fn edges_from(&self, p: Point) -> &[Point] {
        self.edges.get(&p).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of vertices with at least one outgoing edge.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

impl Pather for EdgeGraph {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend_from_slice(self.edges_from(p));
    }
}

impl FromIterator<(Point, Point)> for EdgeGraph {
    /// Collect directed edges.
    fn from_iter<I: IntoIterator<Item = (Point, Point)>>(iter: I) -> Self {
        let mut g = Self::new();
        for (from, to) in iter {
            g.add_edge(from, to);
        }
        g
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bfs::traverse;
    use crate::error::PathError;

    #[test]
    fn insertion_order_and_dedup() {
        let mut g = EdgeGraph::new();
        let a = Point::new(0, 0);
        g.add_edge(a, Point::new(5, 5));
        g.add_edge(a, Point::new(1, 0));
        g.add_edge(a, Point::new(5, 5));
        assert_eq!(g.edges_from(a), &[Point::new(5, 5), Point::new(1, 0)]);
        assert!(g.edges_from(Point::new(9, 9)).is_empty());
    }

    #[test]
    fn bfs_over_edges() {
        // a - b - c, plus a portal a -> d -> c
        let (a, b, c, d) = (
            Point::new(0, 0),
            Point::new(1, 0),
            Point::new(2, 0),
            Point::new(10, 10),
        );
        let mut g = EdgeGraph::new();
        g.connect(a, b);
        g.connect(b, c);
        g.add_edge(a, d);
        g.add_edge(d, c);

        let m = traverse(&g, a);
        assert_eq!(m.len(), 4);
        // b is enqueued before d, so c is first discovered from b.
        assert_eq!(m.path_to(c).unwrap(), vec![a, b, c]);
        assert_eq!(m.path_to(d).unwrap(), vec![a, d]);

        // e only has an outgoing edge, so nothing leads to it.
        let e = Point::new(-4, 2);
        g.add_edge(e, a);
        assert!(matches!(
            traverse(&g, a).path_to(e),
            Err(PathError::Unreachable { .. })
        ));
        assert_eq!(traverse(&g, e).path_to(c).unwrap(), vec![e, a, b, c]);
    }

    #[test]
    fn collect_directed_edges() {
        let g: EdgeGraph = [(Point::new(0, 0), Point::new(0, 1))].into_iter().collect();
        assert_eq!(g.len(), 1);
        assert!(!g.is_empty());
        assert!(g.edges_from(Point::new(0, 1)).is_empty());
    }
}
