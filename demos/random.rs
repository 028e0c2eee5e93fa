//! Random obstacle field with the shortest path drawn in color.
//!
//! Run: cargo run --bin random [SEED]

use std::io;

use gridwalk_demos::Scenario;
use gridwalk_text::{Overlay, print_colored};

const WIDTH: i32 = 40;
const HEIGHT: i32 = 16;
const DENSITY: f64 = 0.3;

fn main() {
    env_logger::init();

    let seed = match std::env::args().nth(1).map(|s| s.parse::<u64>()) {
        None => 42,
        Some(Ok(seed)) => seed,
        Some(Err(e)) => {
            eprintln!("Error: invalid seed: {e}");
            std::process::exit(2);
        }
    };

    let scenario = Scenario::random(seed, WIDTH, HEIGHT, DENSITY);
    let solution = match scenario.solve() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let grid = scenario.grid();
    let mut overlay = Overlay::new().start(scenario.start);
    if let Some(goal) = scenario.goal {
        overlay = overlay.destination(goal);
    }
    let path = match &solution.path {
        Some(Ok(path)) => Some(path.as_slice()),
        Some(Err(e)) => {
            println!("{e}; showing the search tree instead");
            None
        }
        None => None,
    };
    overlay = match path {
        Some(path) => overlay.path(path),
        None => overlay.point_to(&solution.tree),
    };

    println!("seed {seed}, {} cells reachable", solution.tree.len());
    if let Err(e) = print_colored(&mut io::stdout(), &grid, &overlay) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
