//! Deterministic A* maze solving.
//!
//! [`Solver`] finds a shortest orthogonal path between the start and goal of
//! any [`SearchGrid`] (notably [`maze_core::Maze`]), reporting the path and
//! the set of squares it explored. Exploration order is fully determined:
//!
//! | Rank | Key | Smaller first |
//! |---|---|---|
//! | 1 | `f = g + h` | yes |
//! | 2 | `h` (Manhattan distance to goal) | yes |
//! | 3 | row | yes |
//! | 4 | column | yes |
//!
//! so solving the same maze twice yields identical results. The
//! breadth-first helpers ([`bfs_distance`], [`reachable`]) provide ground
//! truth for checking solver output.

mod bfs;
mod distance;
mod frontier;
mod node;
mod path;
mod solver;
mod traits;

pub use bfs::{bfs_distance, bfs_map, reachable};
pub use distance::manhattan;
pub use node::UNREACHABLE;
pub use solver::{Outcome, SearchStats, Solution, Solver, SolverConfig};
pub use traits::SearchGrid;
