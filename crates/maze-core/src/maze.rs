//! The [`Maze`] type: an immutable rectangular grid with a start, a goal and
//! a set of blocked squares.

use std::fmt;

use crate::error::{Endpoint, MazeError, Result};
use crate::geom::{Bounds, Square};

/// Wall rune, used for blocked squares and for the enclosing border.
pub const WALL: char = '#';
/// Start marker rune.
pub const START: char = 'S';
/// Goal marker rune.
pub const GOAL: char = 'G';
/// Open square rune.
pub const OPEN: char = ' ';

/// Largest number of squares a maze may have.
pub const MAX_SQUARES: usize = 1 << 24;

/// An immutable maze.
///
/// Blocked lookups go through a row-major bitmap, so [`is_blocked`] is O(1).
/// Squares outside the maze report as blocked: every maze is implicitly
/// enclosed by a wall border.
///
/// [`is_blocked`]: Maze::is_blocked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    bounds: Bounds,
    start: Square,
    goal: Square,
    blocked: Vec<bool>,
}

impl Maze {
    /// Create a maze after validating its invariants.
    ///
    /// Dimensions must be positive with at most [`MAX_SQUARES`] squares in
    /// total, start and goal must lie inside the maze
    /// and be open, and every blocked square must lie inside the maze.
    /// `start == goal` is allowed.
    pub fn new(
        rows: i32,
        columns: i32,
        start: Square,
        goal: Square,
        blocked: impl IntoIterator<Item = Square>,
    ) -> Result<Self> {
        let bounds = checked_bounds(rows, columns)?;
        for (endpoint, square) in [(Endpoint::Start, start), (Endpoint::Goal, goal)] {
            if !bounds.contains(square) {
                return Err(MazeError::EndpointOutOfBounds {
                    endpoint,
                    square,
                    bounds,
                });
            }
        }

        let mut bitmap = vec![false; bounds.len()];
        for square in blocked {
            let Some(i) = bounds.index(square) else {
                return Err(MazeError::BlockedOutOfBounds { square, bounds });
            };
            bitmap[i] = true;
        }

        let maze = Self {
            bounds,
            start,
            goal,
            blocked: bitmap,
        };
        for (endpoint, square) in [(Endpoint::Start, start), (Endpoint::Goal, goal)] {
            if maze.is_blocked(square) {
                return Err(MazeError::EndpointBlocked { endpoint, square });
            }
        }
        Ok(maze)
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows
    }

    /// Number of columns.
    #[inline]
    pub fn columns(&self) -> i32 {
        self.bounds.columns
    }

    /// The maze rectangle.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[inline]
    pub fn start(&self) -> Square {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Square {
        self.goal
    }

    /// Whether `s` is blocked. Out-of-bounds squares are blocked.
    #[inline]
    pub fn is_blocked(&self, s: Square) -> bool {
        match self.bounds.index(s) {
            Some(i) => self.blocked[i],
            None => true,
        }
    }

    /// Whether `s` is inside the maze and not blocked.
    #[inline]
    pub fn is_open(&self, s: Square) -> bool {
        !self.is_blocked(s)
    }

    /// Blocked squares in row-major order.
    pub fn blocked(&self) -> impl Iterator<Item = Square> + '_ {
        self.bounds.iter().filter(|&s| self.is_blocked(s))
    }

    /// Number of open squares.
    pub fn open_count(&self) -> usize {
        self.blocked.iter().filter(|&&b| !b).count()
    }

    /// The rune drawn for an in-bounds square.
    pub(crate) fn rune(&self, s: Square) -> char {
        if s == self.start {
            START
        } else if s == self.goal {
            GOAL
        } else if self.is_blocked(s) {
            WALL
        } else {
            OPEN
        }
    }

    /// Render the maze, letting `overlay` replace the rune of open squares
    /// other than the start and goal.
    pub(crate) fn render_with(&self, overlay: impl Fn(Square) -> Option<char>) -> String {
        let width = self.columns() as usize + 2;
        let mut out = String::with_capacity((width + 1) * (self.rows() as usize + 2));
        let border: String = std::iter::repeat_n(WALL, width).collect();

        out.push_str(&border);
        out.push('\n');
        for row in 0..self.rows() {
            out.push(WALL);
            for column in 0..self.columns() {
                let s = Square::new(row, column);
                let rune = self.rune(s);
                match overlay(s) {
                    Some(ch) if rune == OPEN => out.push(ch),
                    _ => out.push(rune),
                }
            }
            out.push(WALL);
            out.push('\n');
        }
        out.push_str(&border);
        out.push('\n');
        out
    }
}

/// Bounds for a `rows` by `columns` maze, if those dimensions are allowed.
pub(crate) fn checked_bounds(rows: i32, columns: i32) -> Result<Bounds> {
    let bounds = Bounds::new(rows, columns);
    if bounds.is_empty() {
        return Err(MazeError::InvalidDimensions { rows, columns });
    }
    if rows as u64 * columns as u64 > MAX_SQUARES as u64 {
        return Err(MazeError::TooLarge {
            rows,
            columns,
            max: MAX_SQUARES,
        });
    }
    Ok(bounds)
}

impl fmt::Display for Maze {
    /// Draws the maze inside a wall border, one newline-terminated line per
    /// text row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_with(|_| None))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Maze {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Maze {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
