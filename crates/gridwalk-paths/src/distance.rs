use gridwalk_core::Point;

/// Manhattan (L1) distance between two points.
///
/// A lower bound on the hop count of any 4-connected path between them.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}
