//! Text rendering of grids, search trees and paths.
//!
//! An [`Overlay`] selects what to show on top of a
//! [`Grid`](gridwalk_core::Grid): arrows toward each cell's predecessor,
//! BFS depths, a path, and start/destination markers. [`draw_grid`] renders
//! it as plain text and [`print_colored`] writes it to a terminal.
//!
//! | glyph | meaning |
//! |---|---|
//! | `.` | open cell |
//! | `#` | obstacle |
//! | `S` / `D` | start / destination |
//! | `@` | path |
//! | `↑↓→←` | direction of the predecessor |
//! | `0`, `1`, ... | distance from the start |

mod draw;
mod overlay;
mod term;

pub use draw::{draw_cell, draw_grid};
pub use overlay::{Glyph, Overlay};
pub use term::print_colored;
