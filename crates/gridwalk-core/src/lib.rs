//! **gridwalk-core** — core types for treating a 2D grid as a graph.
//!
//! This crate provides the value types used across the *gridwalk* workspace:
//! grid coordinates and directions, a rectangular [`Grid`] with a set of
//! obstacle cells, and a small text format for describing grids.

pub mod geom;
pub mod grid;
pub mod layout;

pub use geom::{Direction, Point, Range, RangeIter};
pub use grid::Grid;
pub use layout::{Layout, LayoutError};
