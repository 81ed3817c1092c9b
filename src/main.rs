use std::io;
use std::process::ExitCode;

use serde_json::json;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use rusty_maze::{bfs, dfs, layouts, MazeError, SearchOutcome, SimulationConfig};

const DEMO_LAYOUT: &str = "map";

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("demo failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn describe(outcome: &SearchOutcome) -> serde_json::Value {
    match outcome {
        SearchOutcome::Found(route) => json!({ "Found": route }),
        SearchOutcome::NoSolution { explored } => json!({ "NoSolution": { "explored": explored } }),
    }
}

fn run() -> rusty_maze::Result<()> {
    let layout = layouts::by_name(DEMO_LAYOUT)
        .ok_or_else(|| MazeError::Config(format!("unknown layout {:?}", DEMO_LAYOUT)))?;
    let maze = layout.build()?;
    println!("Building the {} maze", layout.name);
    println!("{}", maze);

    let mut bfs_maze = maze.clone();
    let by_bfs = bfs(&mut bfs_maze)?;
    println!("Breadth-first search:");
    println!("{}", bfs_maze);
    if let Some(route) = by_bfs.route() {
        println!("Starting at {:?}", route.start);
        for direction in &route.directions {
            println!("Go {} then", direction);
        }
        println!("Arrive at your goal");
    } else {
        println!("No solution");
    }

    let mut dfs_maze = maze.clone();
    let by_dfs = dfs(&mut dfs_maze)?;
    println!("Depth-first search:");
    println!("{}", dfs_maze);

    let config = SimulationConfig {
        seed: Some(42),
        ..SimulationConfig::default()
    };
    let stats = config.run()?;
    println!(
        "{}x{} city: {}% dead ends over {} walks",
        config.blocks,
        config.blocks,
        stats.dead_end_percent(),
        stats.trials
    );

    let summary = json!({
        "layout": layout.name,
        "bfs": describe(&by_bfs),
        "dfs": describe(&by_dfs),
        "walks": stats,
    });
    println!("{}", summary);
    Ok(())
}
