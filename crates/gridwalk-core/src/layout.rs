//! Grids described as text.
//!
//! A [`Layout`] parses an ASCII picture into a [`Grid`] plus optional start
//! and destination markers:
//!
//! | char | meaning |
//! |---|---|
//! | `.` | open cell |
//! | `#` | obstacle |
//! | `S` | start (open) |
//! | `D` | destination (open) |
//!
//! ```text
//! S#..
//! .#.D
//! ....
//! ```

use std::fmt;

use crate::geom::Point;
use crate::grid::Grid;

const OPEN: char = '.';
const BLOCKED: char = '#';
const START: char = 'S';
const DESTINATION: char = 'D';

/// A grid parsed from text, with the markers found in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub grid: Grid,
    pub start: Option<Point>,
    pub destination: Option<Point>,
}

impl Layout {
    /// Parse a layout.
    ///
    /// Leading and trailing whitespace of the whole text is trimmed, as is a
    /// trailing `'\r'` on each line. Every line must have the same width.
    pub fn parse(s: &str) -> Result<Self, LayoutError> {
        let s = s.trim();
        let mut obstacles = Vec::new();
        let mut start = None;
        let mut destination = None;
        let mut width: Option<i32> = None;
        let mut height = 0;

        for (y, line) in s.lines().enumerate() {
            let y = y as i32;
            let line = line.strip_suffix('\r').unwrap_or(line);
            let mut x = 0;
            for ch in line.chars() {
                let p = Point::new(x, y);
                match ch {
                    OPEN => {}
                    BLOCKED => obstacles.push(p),
                    START => set_marker(&mut start, ch, p)?,
                    DESTINATION => set_marker(&mut destination, ch, p)?,
                    _ => {
                        return Err(LayoutError::InvalidRune {
                            ch,
                            pos: p,
                            content: s.to_string(),
                        });
                    }
                }
                x += 1;
            }
            match width {
                None => width = Some(x),
                Some(w) if w != x => return Err(LayoutError::InconsistentSize(s.to_string())),
                Some(_) => {}
            }
            height = y + 1;
        }

        let width = width.unwrap_or(0);
        log::debug!(
            "parsed {width}x{height} layout with {} obstacles",
            obstacles.len()
        );
        let grid = Grid::new(width, height).with_obstacles(obstacles);
        Ok(Self {
            grid,
            start,
            destination,
        })
    }

    /// Write the layout back as text, one line per row, each ending in
    /// `'\n'`. Out-of-bounds obstacles are not represented.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for y in 0..self.grid.height() {
            for x in 0..self.grid.width() {
                let p = Point::new(x, y);
                let ch = if !self.grid.passable(p) {
                    BLOCKED
                } else if self.start == Some(p) {
                    START
                } else if self.destination == Some(p) {
                    DESTINATION
                } else {
                    OPEN
                };
                out.push(ch);
            }
            out.push('\n');
        }
        out
    }
}

fn set_marker(slot: &mut Option<Point>, ch: char, p: Point) -> Result<(), LayoutError> {
    if let Some(first) = *slot {
        return Err(LayoutError::DuplicateMarker {
            ch,
            first,
            second: p,
        });
    }
    *slot = Some(p);
    Ok(())
}

/// Errors that can occur when parsing a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Lines have inconsistent widths.
    InconsistentSize(String),
    /// A character outside `.#SD` was found.
    InvalidRune {
        ch: char,
        pos: Point,
        content: String,
    },
    /// A start or destination marker appears more than once.
    DuplicateMarker { ch: char, first: Point, second: Point },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentSize(s) => write!(f, "layout: inconsistent size:\n{s}"),
            Self::InvalidRune { ch, pos, content } => {
                write!(
                    f,
                    "layout contains invalid rune \u{201c}{ch}\u{201d} at {pos}:\n{content}"
                )
            }
            Self::DuplicateMarker { ch, first, second } => {
                write!(f, "layout: marker {ch} at {first} repeated at {second}")
            }
        }
    }
}

impl std::error::Error for LayoutError {}

#[cfg(test)]
mod tests {
    use super::*;

    const DETOUR: &str = "\
S#...#.D
.#...#..
.#.#....
...#....
...#....";

    #[test]
    fn parse_markers_and_obstacles() {
        let l = Layout::parse(DETOUR).unwrap();
        assert_eq!(l.grid.width(), 8);
        assert_eq!(l.grid.height(), 5);
        assert_eq!(l.start, Some(Point::new(0, 0)));
        assert_eq!(l.destination, Some(Point::new(7, 0)));
        assert_eq!(l.grid.obstacles().len(), 8);
        assert!(!l.grid.passable(Point::new(3, 4)));
        assert!(l.grid.passable(Point::new(0, 0)));
    }

    #[test]
    fn text_round_trip() {
        let l = Layout::parse(DETOUR).unwrap();
        assert_eq!(l.to_text(), format!("{DETOUR}\n"));
    }

    #[test]
    fn crlf_lines() {
        let l = Layout::parse("S.\r\n.#\r\n").unwrap();
        assert_eq!(l.grid.width(), 2);
        assert_eq!(l.grid.height(), 2);
    }

    #[test]
    fn inconsistent_size_error() {
        let err = Layout::parse("..\n...").unwrap_err();
        assert!(matches!(err, LayoutError::InconsistentSize(_)));
    }

    #[test]
    fn invalid_rune_error() {
        let err = Layout::parse("..\n.x").unwrap_err();
        match err {
            LayoutError::InvalidRune { ch, pos, .. } => {
                assert_eq!(ch, 'x');
                assert_eq!(pos, Point::new(1, 1));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn duplicate_start_error() {
        let err = Layout::parse("S.S").unwrap_err();
        assert_eq!(
            err,
            LayoutError::DuplicateMarker {
                ch: 'S',
                first: Point::new(0, 0),
                second: Point::new(2, 0),
            }
        );
    }

    #[test]
    fn empty_text_is_empty_grid() {
        let l = Layout::parse("  \n").unwrap();
        assert!(l.grid.range().is_empty());
        assert_eq!(l.start, None);
    }
}
