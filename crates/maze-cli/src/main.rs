use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use maze_core::GenConfig;
use maze_paths::SolverConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Solve grid mazes with deterministic A*")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve a maze and print the explored squares and path.
    Solve {
        /// Maze file, or `-` for stdin.
        input: PathBuf,
        /// Give up after expanding this many squares.
        #[arg(long)]
        max_expansions: Option<usize>,
        /// Print the solution as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Print a random maze with the start top-left and the goal bottom-right.
    Generate {
        #[arg(long, default_value_t = GenConfig::default().rows)]
        rows: i32,
        #[arg(long, default_value_t = GenConfig::default().columns)]
        columns: i32,
        /// Probability that a square is blocked.
        #[arg(long, default_value_t = GenConfig::default().density)]
        density: f64,
        /// RNG seed for reproducible output.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Validate a maze file.
    Check {
        /// Maze file, or `-` for stdin.
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Solve {
            input,
            max_expansions,
            json,
        } => {
            let maze = maze_cli::read_maze(&input)?;
            let out = maze_cli::solve(&maze, SolverConfig { max_expansions }, json)?;
            print!("{out}");
            if json {
                println!();
            }
        }
        Command::Generate {
            rows,
            columns,
            density,
            seed,
        } => {
            let cfg = GenConfig {
                rows,
                columns,
                density,
            };
            print!("{}", maze_cli::generate(&cfg, seed)?);
        }
        Command::Check { input } => {
            let maze = maze_cli::read_maze(&input)?;
            print!("{}", maze_cli::check(&maze));
        }
    }
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // Also bridges `log` records from the library crates.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();
}
