//! Reading mazes back from their rendered text form.
//!
//! The format is exactly what [`Maze`]'s `Display` produces: a `#` border
//! around the grid, `#` for blocked squares, `S` and `G` for the start and
//! goal, and a space for open squares. The solution overlay runes `.` and
//! `+` are accepted as open squares so that rendered solutions read back as
//! the maze they were drawn from.

use std::str::FromStr;

use crate::error::{MazeError, Result};
use crate::geom::Square;
use crate::maze::{GOAL, Maze, OPEN, START, WALL};
use crate::render::{EXPLORED, PATH};

impl FromStr for Maze {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim_matches(['\n', '\r']);
        if s.is_empty() {
            return Err(MazeError::Empty);
        }

        let lines: Vec<Vec<char>> = s.lines().map(|l| l.chars().collect()).collect();
        let width = lines[0].len();
        for (line, chars) in lines.iter().enumerate() {
            if chars.len() != width {
                return Err(MazeError::InconsistentWidth {
                    line,
                    expected: width,
                    found: chars.len(),
                });
            }
        }

        let rows = lines.len() as i32 - 2;
        let columns = width as i32 - 2;
        if rows <= 0 || columns <= 0 {
            return Err(MazeError::InvalidDimensions { rows, columns });
        }

        let last_line = lines.len() - 1;
        let mut start = None;
        let mut goal = None;
        let mut blocked = Vec::new();

        for (line, chars) in lines.iter().enumerate() {
            for (column, &ch) in chars.iter().enumerate() {
                let on_border = line == 0 || line == last_line || column == 0 || column == width - 1;
                if on_border {
                    if ch != WALL {
                        return Err(MazeError::MissingBorder { line, column });
                    }
                    continue;
                }

                let square = Square::new(line as i32 - 1, column as i32 - 1);
                match ch {
                    WALL => blocked.push(square),
                    START => {
                        if start.replace(square).is_some() {
                            return Err(MazeError::DuplicateStart { square });
                        }
                    }
                    GOAL => {
                        if goal.replace(square).is_some() {
                            return Err(MazeError::DuplicateGoal { square });
                        }
                    }
                    OPEN | PATH | EXPLORED => {}
                    _ => return Err(MazeError::InvalidRune { ch, line, column }),
                }
            }
        }

        let start = start.ok_or(MazeError::MissingStart)?;
        let goal = goal.ok_or(MazeError::MissingGoal)?;
        Maze::new(rows, columns, start, goal, blocked)
    }
}
