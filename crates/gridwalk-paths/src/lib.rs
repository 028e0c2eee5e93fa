//! Breadth-first search and path reconstruction on grid graphs.
//!
//! The typical flow is:
//!
//! 1. build a [`Grid`](gridwalk_core::Grid) and mark its obstacles;
//! 2. call [`traverse`] from a start cell to get a [`PredecessorMap`], the
//!    search tree of every reachable cell;
//! 3. call [`reconstruct_path`] (or [`PredecessorMap::path_to`]) to read a
//!    shortest path to any goal out of that tree.
//!
//! ```
//! use gridwalk_core::{Grid, Point};
//! use gridwalk_paths::traverse;
//!
//! let grid = Grid::new(3, 3).with_obstacles([Point::new(1, 0), Point::new(1, 1)]);
//! let tree = traverse(&grid, Point::new(0, 0));
//! let path = tree.path_to(Point::new(2, 0)).unwrap();
//! assert_eq!(path.len(), 7);
//! ```
//!
//! # Determinism
//!
//! Grid neighbours are always enumerated north, south, east, west. Search
//! ties are broken by that order, so the same grid and start always produce
//! the same tree and the same paths.
//!
//! # Other graphs
//!
//! [`traverse`] accepts any [`Pather`]. Besides [`Grid`](gridwalk_core::Grid),
//! [`EdgeGraph`] provides an explicit adjacency-list graph over points.

mod bfs;
mod distance;
mod edges;
mod error;
mod path;
mod predecessors;
mod queue;
mod traits;

pub use bfs::{traverse, traverse_checked};
pub use distance::manhattan;
pub use edges::EdgeGraph;
pub use error::PathError;
pub use path::reconstruct_path;
pub use predecessors::PredecessorMap;
pub use queue::{FifoQueue, QueueError};
pub use traits::Pather;
