//! Print search trees, distance maps and paths as text.
//!
//! Run: cargo run --bin scenarios [--json] [FILE...]
//!
//! Without files, the built-in scenarios are shown. A `.json` file holds a
//! serialized scenario; any other file is read as a text layout (`.#SD`).
//! With `--json`, each scenario's predecessor map is printed as JSON instead.

use std::path::Path;

use gridwalk_demos::{Scenario, ScenarioError};

fn run() -> Result<(), ScenarioError> {
    let mut json = false;
    let mut scenarios = Vec::new();
    for arg in std::env::args().skip(1) {
        if arg == "--json" {
            json = true;
        } else {
            scenarios.push(Scenario::load(Path::new(&arg))?);
        }
    }
    if scenarios.is_empty() {
        scenarios = Scenario::builtin();
    }

    for s in &scenarios {
        if json {
            let solution = s.solve()?;
            println!("{}", serde_json::to_string_pretty(&solution.tree)?);
        } else {
            println!("{}", s.report()?);
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
