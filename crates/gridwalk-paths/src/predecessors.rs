use std::collections::{HashMap, HashSet};
use std::collections::hash_map::Entry;

use gridwalk_core::Point;

use crate::error::PathError;
use crate::path::reconstruct_path;

/// The search tree produced by a traversal: for every visited cell, the cell
/// it was first reached from.
///
/// The root (the traversal start) is stored with predecessor `None`, so that
/// "visited, and is the root" stays distinct from "never visited": use
/// [`contains`](Self::contains) to test for a visit and
/// [`is_root`](Self::is_root) to test for the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredecessorMap {
    root: Point,
    came_from: HashMap<Point, Option<Point>>,
}

impl PredecessorMap {
    /// Create a map holding only `root`.
    pub fn new(root: Point) -> Self {
        let mut came_from = HashMap::new();
        came_from.insert(root, None);
        Self { root, came_from }
    }

    /// The cell the traversal started from.
    #[inline]
    pub fn root(&self) -> Point {
        self.root
    }

    /// Whether `p` was visited.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.came_from.contains_key(&p)
    }

    /// Whether `p` is the root.
    #[inline]
    pub fn is_root(&self, p: Point) -> bool {
        matches!(self.came_from.get(&p), Some(None))
    }

    /// The entry for `p`: `None` if never visited, `Some(None)` for the root,
    /// `Some(Some(q))` if `p` was first reached from `q`.
    #[inline]
    pub fn get(&self, p: Point) -> Option<Option<Point>> {
        self.came_from.get(&p).copied()
    }

    /// The predecessor of `p`, or `None` if `p` is the root or unvisited.
    #[inline]
    pub fn predecessor(&self, p: Point) -> Option<Point> {
        self.get(p).flatten()
    }

    /// Record that `p` was reached from `from`, unless `p` is already
    /// present. Returns whether the entry was added; the first recorded
    /// predecessor always wins.
    pub fn visit(&mut self, p: Point, from: Point) -> bool {
        match self.came_from.entry(p) {
            Entry::Occupied(_) => false,
            Entry::Vacant(e) => {
                e.insert(Some(from));
                true
            }
        }
    }

    /// Number of visited cells, root included.
    #[inline]
    pub fn len(&self) -> usize {
        self.came_from.len()
    }

    /// Always `false`: a map holds at least its root.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.came_from.is_empty()
    }

    /// Iterate over `(cell, predecessor)` entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Option<Point>)> + '_ {
        self.came_from.iter().map(|(&p, &from)| (p, from))
    }

    /// All visited cells in row-major order.
    pub fn cells(&self) -> Vec<Point> {
        let mut cells: Vec<Point> = self.came_from.keys().copied().collect();
        cells.sort_unstable();
        cells
    }

    /// Number of steps from the root to `p` along the recorded chain.
    ///
    /// For a map built by [`traverse`](crate::traverse) this is the BFS
    /// distance of `p`. Returns `None` if `p` was not visited or the chain is
    /// broken or cyclic.
    pub fn depth(&self, p: Point) -> Option<usize> {
        let mut current = p;
        let mut steps = 0;
        loop {
            match self.came_from.get(&current)? {
                None => return Some(steps),
                Some(prev) => {
                    steps += 1;
                    if steps >= self.came_from.len() {
                        return None;
                    }
                    current = *prev;
                }
            }
        }
    }

    /// The [`depth`](Self::depth) of every cell with an intact chain, in one
    /// pass. Each chain is walked only until it meets a cell whose depth is
    /// already known, so the whole map costs O(len).
    pub fn depths(&self) -> HashMap<Point, usize> {
        let mut depths = HashMap::with_capacity(self.came_from.len());
        let mut broken = HashSet::new();
        let mut chain = Vec::new();

        for &p in self.came_from.keys() {
            chain.clear();
            let mut current = p;
            let base = loop {
                if let Some(&d) = depths.get(&current) {
                    break Some(d);
                }
                if broken.contains(&current) || chain.len() >= self.came_from.len() {
                    break None;
                }
                match self.came_from.get(&current) {
                    None => break None,
                    Some(None) => {
                        depths.insert(current, 0);
                        break Some(0);
                    }
                    Some(Some(prev)) => {
                        chain.push(current);
                        current = *prev;
                    }
                }
            };
            match base {
                // The last cell pushed is the one adjacent to `current`.
                Some(b) => {
                    for (i, &c) in chain.iter().rev().enumerate() {
                        depths.insert(c, b + i + 1);
                    }
                }
                None => broken.extend(chain.iter().copied()),
            }
        }
        depths
    }

    /// The path from the root to `goal`. See [`reconstruct_path`].
    pub fn path_to(&self, goal: Point) -> Result<Vec<Point>, PathError> {
        reconstruct_path(self, self.root, goal)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct PredecessorMapRepr {
    root: Point,
    entries: Vec<(Point, Option<Point>)>,
}

// Serialized as a sorted entry list: JSON object keys must be strings.
#[cfg(feature = "serde")]
impl serde::Serialize for PredecessorMap {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable_by_key(|&(p, _)| p);
        PredecessorMapRepr {
            root: self.root,
            entries,
        }
        .serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PredecessorMap {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error;

        let repr = PredecessorMapRepr::deserialize(deserializer)?;
        let mut map = PredecessorMap::new(repr.root);
        let mut root_seen = false;
        for (p, from) in repr.entries {
            match from {
                Some(from) if p == repr.root => {
                    return Err(D::Error::custom(format!("root {p} has a predecessor {from}")));
                }
                Some(from) => {
                    if !map.visit(p, from) {
                        return Err(D::Error::custom(format!("duplicate entry for {p}")));
                    }
                }
                None if p != repr.root => {
                    return Err(D::Error::custom(format!(
                        "{p} has no predecessor but is not the root"
                    )));
                }
                None if root_seen => {
                    return Err(D::Error::custom(format!("duplicate entry for {p}")));
                }
                None => root_seen = true,
            }
        }
        Ok(map)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn predecessor_map_round_trip() {
        let mut m = PredecessorMap::new(Point::new(1, 1));
        m.visit(Point::new(1, 0), Point::new(1, 1));
        m.visit(Point::new(2, 0), Point::new(1, 0));
        let json = serde_json::to_string(&m).unwrap();
        let back: PredecessorMap = serde_json::from_str(&json).unwrap();
        assert_eq!(m, back);
    }

    #[test]
    fn non_root_without_predecessor_is_rejected() {
        let json = r#"{"root":{"x":0,"y":0},"entries":[[{"x":1,"y":1},null]]}"#;
        let err = serde_json::from_str::<PredecessorMap>(json).unwrap_err();
        assert!(err.to_string().contains("(1, 1) has no predecessor"), "{err}");
    }

    #[test]
    fn duplicate_entries_are_rejected() {
        let json = r#"{"root":{"x":0,"y":0},"entries":[
            [{"x":0,"y":0},null],
            [{"x":1,"y":0},{"x":0,"y":0}],
            [{"x":1,"y":0},{"x":1,"y":1}]
        ]}"#;
        let err = serde_json::from_str::<PredecessorMap>(json).unwrap_err();
        assert!(err.to_string().contains("duplicate entry for (1, 0)"), "{err}");

        let json = r#"{"root":{"x":0,"y":0},"entries":[
            [{"x":0,"y":0},null],
            [{"x":0,"y":0},null]
        ]}"#;
        assert!(serde_json::from_str::<PredecessorMap>(json).is_err());
    }

    #[test]
    fn root_with_predecessor_is_rejected() {
        let json = r#"{"root":{"x":0,"y":0},"entries":[[{"x":0,"y":0},{"x":1,"y":0}]]}"#;
        assert!(serde_json::from_str::<PredecessorMap>(json).is_err());
    }
}
