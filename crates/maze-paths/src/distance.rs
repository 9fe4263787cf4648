use maze_core::Square;

/// Manhattan (L1) distance between two squares.
///
/// Admissible and consistent for unit-cost orthogonal moves.
#[inline]
pub fn manhattan(a: Square, b: Square) -> i32 {
    (a.row - b.row).abs() + (a.column - b.column).abs()
}
