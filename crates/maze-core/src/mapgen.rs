//! Random maze generation.
//!
//! Produces uniform random obstacle fields: each square other than the
//! start (top-left) and goal (bottom-right) is blocked independently with
//! probability `density`. Generated mazes are not guaranteed solvable.

use rand::Rng;

use crate::error::{MazeError, Result};
use crate::geom::Square;
use crate::maze::{Maze, checked_bounds};

/// Parameters for [`MazeGen::generate`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenConfig {
    pub rows: i32,
    pub columns: i32,
    /// Probability (0.0–1.0) that a square is blocked.
    pub density: f64,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            rows: 10,
            columns: 20,
            density: 0.3,
        }
    }
}

/// Maze generator driven by a caller-supplied RNG.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a random maze.
    pub fn generate(&mut self, cfg: &GenConfig) -> Result<Maze> {
        if !(0.0..=1.0).contains(&cfg.density) {
            return Err(MazeError::InvalidDensity {
                density: cfg.density,
            });
        }
        let bounds = checked_bounds(cfg.rows, cfg.columns)?;

        let start = Square::ORIGIN;
        let goal = Square::new(cfg.rows - 1, cfg.columns - 1);
        let mut blocked = Vec::new();
        for s in bounds.iter() {
            if s == start || s == goal {
                continue;
            }
            if self.rng.random_bool(cfg.density) {
                blocked.push(s);
            }
        }
        Maze::new(cfg.rows, cfg.columns, start, goal, blocked)
    }
}
