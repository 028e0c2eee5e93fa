//! Scenario definitions shared by the demo binaries.
//!
//! A [`Scenario`] is a grid, a start and an optional goal. Scenarios come from
//! the built-in set, from JSON or text-layout files, or from a seeded random
//! generator.

use std::fmt::{self, Write as _};
use std::path::Path;
use std::{fs, io};

use gridwalk_core::{Grid, Layout, LayoutError, Point};
use gridwalk_paths::{PathError, PredecessorMap, manhattan, traverse_checked};
use gridwalk_text::{Overlay, draw_grid};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use serde::{Deserialize, Serialize};

/// One search problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub width: i32,
    pub height: i32,
    #[serde(default)]
    pub obstacles: Vec<Point>,
    pub start: Point,
    #[serde(default)]
    pub goal: Option<Point>,
}

/// The outcome of searching a [`Scenario`].
#[derive(Debug, Clone)]
pub struct Solution {
    pub tree: PredecessorMap,
    /// `None` if the scenario has no goal.
    pub path: Option<Result<Vec<Point>, PathError>>,
}

impl Scenario {
    /// 3x3 board with a two-cell wall; the search has to go around it.
    pub fn corridor() -> Self {
        Self {
            name: "corridor".into(),
            width: 3,
            height: 3,
            obstacles: vec![Point::new(1, 0), Point::new(1, 1)],
            start: Point::new(0, 0),
            goal: Some(Point::new(2, 0)),
        }
    }

    /// 8x5 board with three walls forcing a long detour.
    pub fn detour() -> Self {
        Self {
            name: "detour".into(),
            width: 8,
            height: 5,
            obstacles: [(1, 0), (1, 1), (1, 2), (3, 2), (3, 3), (3, 4), (5, 0), (5, 1)]
                .into_iter()
                .map(Point::from)
                .collect(),
            start: Point::new(0, 0),
            goal: Some(Point::new(7, 0)),
        }
    }

    /// All built-in scenarios.
    pub fn builtin() -> Vec<Self> {
        vec![Self::corridor(), Self::detour()]
    }

    /// A `width` x `height` board where each cell is blocked with probability
    /// `density`, except the top-left start and bottom-right goal.
    pub fn random(seed: u64, width: i32, height: i32, density: f64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let start = Point::new(0, 0);
        let goal = Point::new(width - 1, height - 1);
        let obstacles = Grid::new(width, height)
            .range()
            .iter()
            .filter(|&p| p != start && p != goal && rng.random_bool(density))
            .collect();
        Self {
            name: format!("random-{seed}"),
            width,
            height,
            obstacles,
            start,
            goal: Some(goal),
        }
    }

    /// Build a scenario from a text layout. The layout must mark a start.
    pub fn from_layout(name: &str, layout: &Layout) -> Result<Self, ScenarioError> {
        let start = layout.start.ok_or(ScenarioError::MissingStart)?;
        let mut obstacles: Vec<Point> = layout.grid.obstacles().iter().copied().collect();
        obstacles.sort_unstable();
        Ok(Self {
            name: name.to_string(),
            width: layout.grid.width(),
            height: layout.grid.height(),
            obstacles,
            start,
            goal: layout.destination,
        })
    }

    /// Load a scenario file: JSON if the extension is `.json`, a text layout
    /// otherwise.
    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let text = fs::read_to_string(path)?;
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let scenario = if path.extension().is_some_and(|e| e == "json") {
            serde_json::from_str(&text)?
        } else {
            Self::from_layout(&name, &Layout::parse(&text)?)?
        };
        log::debug!("loaded scenario {name} from {}", path.display());
        Ok(scenario)
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.width, self.height).with_obstacles(self.obstacles.iter().copied())
    }

    /// Search from the start and, if there is a goal, extract the path.
    pub fn solve(&self) -> Result<Solution, PathError> {
        let tree = traverse_checked(&self.grid(), self.start)?;
        let path = self.goal.map(|goal| tree.path_to(goal));
        Ok(Solution { tree, path })
    }

    /// A text report: the search tree, the distance map and the path.
    pub fn report(&self) -> Result<String, ScenarioError> {
        let grid = self.grid();
        let solution = self.solve()?;
        let mut out = String::new();

        let _ = writeln!(
            out,
            "== {} ({}x{}, start {})",
            self.name, self.width, self.height, self.start
        );
        let _ = writeln!(out, "search tree, {} cells reached:", solution.tree.len());
        let tree = Overlay::new().point_to(&solution.tree).start(self.start);
        out.push_str(&draw_grid(&grid, &tree));
        out.push_str("distances:\n");
        let depths = solution.tree.depths();
        out.push_str(&draw_grid(&grid, &Overlay::new().numbers(&depths)));

        if let (Some(goal), Some(path)) = (self.goal, &solution.path) {
            match path {
                Ok(path) => {
                    let _ = writeln!(
                        out,
                        "path to {goal}: {} hops (manhattan {}):",
                        path.len() - 1,
                        manhattan(self.start, goal)
                    );
                    let overlay = Overlay::new()
                        .path(path)
                        .start(self.start)
                        .destination(goal);
                    out.push_str(&draw_grid(&grid, &overlay));
                }
                Err(e) => {
                    let _ = writeln!(out, "{e}");
                }
            }
        }
        Ok(out)
    }
}

/// Errors from loading or solving a scenario.
#[derive(Debug)]
pub enum ScenarioError {
    Io(io::Error),
    Json(serde_json::Error),
    Layout(LayoutError),
    /// A text layout without an `S` marker.
    MissingStart,
    Path(PathError),
}

impl fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "reading scenario: {e}"),
            Self::Json(e) => write!(f, "parsing scenario: {e}"),
            Self::Layout(e) => write!(f, "{e}"),
            Self::MissingStart => write!(f, "layout has no start marker (S)"),
            Self::Path(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ScenarioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Layout(e) => Some(e),
            Self::MissingStart => None,
            Self::Path(e) => Some(e),
        }
    }
}

impl From<io::Error> for ScenarioError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for ScenarioError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<LayoutError> for ScenarioError {
    fn from(e: LayoutError) -> Self {
        Self::Layout(e)
    }
}

impl From<PathError> for ScenarioError {
    fn from(e: PathError) -> Self {
        Self::Path(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corridor_report() {
        let report = Scenario::corridor().report().unwrap();
        assert!(report.contains("S#\u{2193}\n\u{2191}#\u{2193}\n\u{2191}\u{2190}\u{2190}\n"));
        assert!(report.contains("distances:\n0#6\n1#5\n234\n"));
        assert!(report.contains("path to (2, 0): 6 hops (manhattan 2)"));
        assert!(report.contains("S#D\n@#@\n@@@\n"));
    }

    #[test]
    fn detour_path_length() {
        let solution = Scenario::detour().solve().unwrap();
        let path = solution.path.unwrap().unwrap();
        assert_eq!(path.len() - 1, 15);
        assert_eq!(solution.tree.depth(Point::new(7, 0)), Some(15));
    }

    #[test]
    fn unreachable_goal_is_reported() {
        let mut s = Scenario::corridor();
        s.obstacles.push(Point::new(0, 2));
        let report = s.report().unwrap();
        assert!(report.contains("no path from (0, 0) to (2, 0)"));
    }

    #[test]
    fn blocked_start_is_an_error() {
        let mut s = Scenario::corridor();
        s.start = Point::new(1, 1);
        assert!(matches!(
            s.report(),
            Err(ScenarioError::Path(PathError::InvalidStart(_)))
        ));
    }

    #[test]
    fn random_is_seeded() {
        let a = Scenario::random(7, 20, 10, 0.3);
        let b = Scenario::random(7, 20, 10, 0.3);
        assert_eq!(a, b);
        assert!(!a.obstacles.contains(&a.start));
        assert!(!a.obstacles.contains(&Point::new(19, 9)));
        assert!(a.solve().is_ok());
    }

    #[test]
    fn from_layout_matches_builtin() {
        let layout = Layout::parse(
            "\
S#...#.D
.#...#..
.#.#....
...#....
...#....",
        )
        .unwrap();
        let mut s = Scenario::from_layout("detour", &layout).unwrap();
        let mut expected = Scenario::detour();
        expected.obstacles.sort_unstable();
        s.obstacles.sort_unstable();
        assert_eq!(s, expected);
    }

    #[test]
    fn layout_without_start() {
        let layout = Layout::parse("..D").unwrap();
        assert!(matches!(
            Scenario::from_layout("x", &layout),
            Err(ScenarioError::MissingStart)
        ));
    }

    #[test]
    fn json_config() {
        let json = r#"{
            "name": "tiny",
            "width": 2,
            "height": 1,
            "start": { "x": 0, "y": 0 },
            "goal": { "x": 1, "y": 0 }
        }"#;
        let s: Scenario = serde_json::from_str(json).unwrap();
        assert!(s.obstacles.is_empty());
        let path = s.solve().unwrap().path.unwrap().unwrap();
        assert_eq!(path, vec![Point::new(0, 0), Point::new(1, 0)]);
    }

    #[test]
    fn load_layout_file() {
        let dir = std::env::temp_dir();
        let path = dir.join(format!("gridwalk-demo-{}.txt", std::process::id()));
        fs::write(&path, "S.\n#D\n").unwrap();
        let s = Scenario::load(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(s.goal, Some(Point::new(1, 1)));
        assert_eq!(s.obstacles, vec![Point::new(0, 1)]);
    }
}
