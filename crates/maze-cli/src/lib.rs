//! Command implementations for the `maze` binary.
//!
//! Each command returns the text to print so that it can be tested without
//! spawning a process.

use std::fmt::Write as _;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use maze_core::{GenConfig, Maze, MazeGen, render_solution};
use maze_paths::{Outcome, Solver, SolverConfig};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Read and parse a maze from `input`, or from stdin when `input` is `-`.
pub fn read_maze(input: &Path) -> Result<Maze> {
    let text = if input == Path::new("-") {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("failed to read maze from stdin")?;
        text
    } else {
        fs::read_to_string(input).with_context(|| format!("failed to read {}", input.display()))?
    };
    text.parse()
        .with_context(|| format!("failed to parse maze from {}", input.display()))
}

/// Solve `maze` and describe the result, as an overlay plus summary or as
/// JSON.
pub fn solve(maze: &Maze, config: SolverConfig, json: bool) -> Result<String> {
    let solution = Solver::with_config(maze, config).into_solution();
    if json {
        return serde_json::to_string_pretty(&solution).context("failed to encode solution");
    }

    let mut out = render_solution(maze, &solution.path, &solution.explored);
    let outcome = match solution.outcome {
        Outcome::Found => "found",
        Outcome::Exhausted => "exhausted",
        Outcome::Truncated => "truncated",
    };
    writeln!(out, "outcome: {outcome}")?;
    match solution.path_cost() {
        Some(steps) => writeln!(out, "path: {} squares ({steps} steps)", solution.path.len())?,
        None => writeln!(out, "path: none")?,
    }
    writeln!(out, "explored: {} squares", solution.explored.len())?;
    Ok(out)
}

/// Generate a random maze. Without a seed the RNG is seeded from the OS.
pub fn generate(cfg: &GenConfig, seed: Option<u64>) -> Result<Maze> {
    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    MazeGen::new(rng)
        .generate(cfg)
        .context("failed to generate maze")
}

/// One-line description of a valid maze.
pub fn check(maze: &Maze) -> String {
    format!(
        "ok: {} maze, start {}, goal {}, {} blocked\n",
        maze.bounds(),
        maze.start(),
        maze.goal(),
        maze.blocked().count()
    )
}
