use std::fmt;

use thiserror::Error;

use crate::geom::{Bounds, Square};

/// Convenient result alias for maze construction and parsing.
pub type Result<T> = std::result::Result<T, MazeError>;

/// Which designated square a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Goal => f.write_str("goal"),
        }
    }
}

/// Errors raised while building, parsing or generating a maze.
///
/// Text positions (`line`, `column`) are zero-based and count the border.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MazeError {
    /// Row or column count is zero or negative.
    #[error("invalid maze dimensions {rows}x{columns}")]
    InvalidDimensions { rows: i32, columns: i32 },

    /// More squares than [`MAX_SQUARES`](crate::maze::MAX_SQUARES).
    #[error("{rows}x{columns} maze exceeds the limit of {max} squares")]
    TooLarge { rows: i32, columns: i32, max: usize },

    /// Start or goal lies outside the maze.
    #[error("{endpoint} square {square} is outside the {bounds} maze")]
    EndpointOutOfBounds {
        endpoint: Endpoint,
        square: Square,
        bounds: Bounds,
    },

    /// Start or goal is listed as blocked.
    #[error("{endpoint} square {square} is blocked")]
    EndpointBlocked { endpoint: Endpoint, square: Square },

    /// A blocked square lies outside the maze.
    #[error("blocked square {square} is outside the {bounds} maze")]
    BlockedOutOfBounds { square: Square, bounds: Bounds },

    /// The input text contained no maze.
    #[error("maze text is empty")]
    Empty,

    /// Lines of the maze text have different widths.
    #[error("line {line} has width {found}, expected {expected}")]
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A character outside the maze alphabet was found.
    #[error("invalid character {ch:?} at line {line}, column {column}")]
    InvalidRune {
        ch: char,
        line: usize,
        column: usize,
    },

    /// The outer ring of the maze text is not made of walls.
    #[error("border is open at line {line}, column {column}")]
    MissingBorder { line: usize, column: usize },

    /// No `S` marker.
    #[error("maze has no start square")]
    MissingStart,

    /// No `G` marker.
    #[error("maze has no goal square")]
    MissingGoal,

    /// More than one `S` marker.
    #[error("maze has a second start square at {square}")]
    DuplicateStart { square: Square },

    /// More than one `G` marker.
    #[error("maze has a second goal square at {square}")]
    DuplicateGoal { square: Square },

    /// Wall density for generation is not a probability.
    #[error("wall density {density} is not within [0, 1]")]
    InvalidDensity { density: f64 },
}
