use maze_core::{Bounds, Maze, Square};

/// What the solver needs to know about a grid.
///
/// Implementations must be pure: the solver may query the same square any
/// number of times and expects the same answer.
pub trait SearchGrid {
    /// The rectangle of valid squares.
    fn bounds(&self) -> Bounds;

    fn start(&self) -> Square;

    fn goal(&self) -> Square;

    /// Whether `s` cannot be entered. Should be O(1) or O(log n).
    fn is_blocked(&self, s: Square) -> bool;

    fn rows(&self) -> i32 {
        self.bounds().rows
    }

    fn columns(&self) -> i32 {
        self.bounds().columns
    }
}

impl SearchGrid for Maze {
    #[inline]
    fn bounds(&self) -> Bounds {
        Maze::bounds(self)
    }

    #[inline]
    fn start(&self) -> Square {
        Maze::start(self)
    }

    #[inline]
    fn goal(&self) -> Square {
        Maze::goal(self)
    }

    #[inline]
    fn is_blocked(&self, s: Square) -> bool {
        Maze::is_blocked(self, s)
    }
}
