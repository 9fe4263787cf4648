//! **maze-core**: the maze model used by the solver.
//!
//! This crate provides the data side of maze solving: [`Square`] and
//! [`Bounds`] geometry, the validated, immutable [`Maze`], its text form
//! (rendering via `Display`, parsing via `FromStr`), solution overlays and
//! random generation.

pub mod error;
pub mod geom;
pub mod mapgen;
pub mod maze;
mod parse;
pub mod render;

pub use error::{Endpoint, MazeError, Result};
pub use geom::{Bounds, BoundsIter, Square};
pub use mapgen::{GenConfig, MazeGen};
pub use maze::{MAX_SQUARES, Maze};
pub use render::render_solution;
