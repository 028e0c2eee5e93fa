use std::collections::HashMap;

use gridwalk_core::{Direction, Grid, Point};
use gridwalk_paths::PredecessorMap;

/// What to draw on top of the bare grid.
///
/// Every layer is optional. When several apply to one cell the highest wins,
/// from low to high: open cell, arrow or depth number, path, start,
/// destination, obstacle.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overlay<'a> {
    /// Draw an arrow in each visited cell pointing at its predecessor.
    pub point_to: Option<&'a PredecessorMap>,
    /// Draw each cell's distance from the root, as computed by
    /// [`PredecessorMap::depths`]. Takes precedence over `point_to`.
    pub numbers: Option<&'a HashMap<Point, usize>>,
    pub start: Option<Point>,
    pub destination: Option<Point>,
    pub path: Option<&'a [Point]>,
}

impl<'a> Overlay<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn point_to(mut self, map: &'a PredecessorMap) -> Self {
        self.point_to = Some(map);
        self
    }

    pub fn numbers(mut self, depths: &'a HashMap<Point, usize>) -> Self {
        self.numbers = Some(depths);
        self
    }

    pub fn start(mut self, p: Point) -> Self {
        self.start = Some(p);
        self
    }

    pub fn destination(mut self, p: Point) -> Self {
        self.destination = Some(p);
        self
    }

    pub fn path(mut self, path: &'a [Point]) -> Self {
        self.path = Some(path);
        self
    }

    /// Decide what cell `p` of `grid` shows.
    pub fn glyph(&self, grid: &Grid, p: Point) -> Glyph {
        if !grid.passable(p) {
            return Glyph::Obstacle;
        }
        if self.destination == Some(p) {
            return Glyph::Destination;
        }
        if self.start == Some(p) {
            return Glyph::Start;
        }
        if self.path.is_some_and(|path| path.contains(&p)) {
            return Glyph::Path;
        }
        if let Some(depth) = self.numbers.and_then(|d| d.get(&p).copied()) {
            return Glyph::Depth(depth);
        }
        if let Some(dir) = self
            .point_to
            .and_then(|m| m.predecessor(p))
            .and_then(|prev| Direction::between(p, prev))
        {
            return Glyph::Arrow(dir);
        }
        Glyph::Open
    }
}

/// The classified content of one drawn cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Open,
    Obstacle,
    Start,
    Destination,
    Path,
    /// Points from a cell toward its predecessor.
    Arrow(Direction),
    Depth(usize),
}

impl Glyph {
    pub fn text(self) -> String {
        match self {
            Glyph::Open => ".".into(),
            Glyph::Obstacle => "#".into(),
            Glyph::Start => "S".into(),
            Glyph::Destination => "D".into(),
            Glyph::Path => "@".into(),
            Glyph::Arrow(d) => d.arrow().to_string(),
            Glyph::Depth(n) => n.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridwalk_paths::traverse;

    #[test]
    fn precedence() {
        let g = Grid::new(3, 1).with_obstacles([Point::new(2, 0)]);
        let m = traverse(&g, Point::ZERO);
        let depths = m.depths();
        let path = [Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)];
        let o = Overlay::new()
            .point_to(&m)
            .numbers(&depths)
            .path(&path)
            .start(Point::new(0, 0))
            .destination(Point::new(2, 0));
        assert_eq!(o.glyph(&g, Point::new(0, 0)), Glyph::Start);
        assert_eq!(o.glyph(&g, Point::new(1, 0)), Glyph::Path);
        assert_eq!(o.glyph(&g, Point::new(2, 0)), Glyph::Obstacle);
    }

    #[test]
    fn destination_compares_its_own_coordinate() {
        let g = Grid::new(3, 3);
        let o = Overlay::new().destination(Point::new(2, 1));
        assert_eq!(o.glyph(&g, Point::new(2, 1)), Glyph::Destination);
        assert_eq!(o.glyph(&g, Point::new(2, 0)), Glyph::Open);
        assert_eq!(o.glyph(&g, Point::new(1, 1)), Glyph::Open);
    }

    #[test]
    fn arrows_point_at_predecessor() {
        let g = Grid::new(2, 1);
        let m = traverse(&g, Point::ZERO);
        let o = Overlay::new().point_to(&m);
        assert_eq!(o.glyph(&g, Point::ZERO), Glyph::Open);
        assert_eq!(o.glyph(&g, Point::new(1, 0)), Glyph::Arrow(Direction::West));
        assert_eq!(Glyph::Arrow(Direction::West).text(), "\u{2190}");
    }

    #[test]
    fn numbers_override_arrows() {
        let g = Grid::new(3, 1);
        let m = traverse(&g, Point::ZERO);
        let depths = m.depths();
        let o = Overlay::new().point_to(&m).numbers(&depths);
        assert_eq!(o.glyph(&g, Point::new(2, 0)), Glyph::Depth(2));
        assert_eq!(o.glyph(&g, Point::ZERO), Glyph::Depth(0));
    }
}
