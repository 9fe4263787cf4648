//! Geometry primitives: [`Square`] and [`Bounds`].
//!
//! Squares are addressed by `(row, column)`, rows growing downwards. A
//! [`Bounds`] is the rectangle `[0, rows) × [0, columns)` that a maze
//! occupies, with a row-major flat indexing used by the search caches.

use std::fmt;

// ---------------------------------------------------------------------------
// Square
// ---------------------------------------------------------------------------

/// A maze position. Ordered by row, then column.
///
/// Coordinates are signed so that neighbours of border squares can be
/// represented and rejected by a bounds check rather than by wrapping.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Square {
    pub row: i32,
    pub column: i32,
}

impl Square {
    /// The top-left square.
    pub const ORIGIN: Self = Self { row: 0, column: 0 };

    /// Create a new square.
    #[inline]
    pub const fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    /// Return a square shifted by (drow, dcolumn).
    #[inline]
    pub const fn shift(self, drow: i32, dcolumn: i32) -> Self {
        Self {
            row: self.row + drow,
            column: self.column + dcolumn,
        }
    }

    /// The four orthogonal neighbours, in discovery order:
    /// right, left, down, up.
    #[inline]
    pub const fn neighbors_4(self) -> [Square; 4] {
        [
            self.shift(0, 1),
            self.shift(0, -1),
            self.shift(1, 0),
            self.shift(-1, 0),
        ]
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

impl From<(i32, i32)> for Square {
    fn from((row, column): (i32, i32)) -> Self {
        Self::new(row, column)
    }
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// The rectangle `[0, rows) × [0, columns)`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub rows: i32,
    pub columns: i32,
}

impl Bounds {
    /// Create new bounds.
    #[inline]
    pub const fn new(rows: i32, columns: i32) -> Self {
        Self { rows, columns }
    }

    /// Total number of squares.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.rows as usize) * (self.columns as usize)
    }

    /// Whether the rectangle has zero or negative area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.rows <= 0 || self.columns <= 0
    }

    /// Whether `s` lies inside the rectangle.
    #[inline]
    pub fn contains(self, s: Square) -> bool {
        s.row >= 0 && s.row < self.rows && s.column >= 0 && s.column < self.columns
    }

    /// Row-major flat index of `s`, or `None` if out of bounds.
    #[inline]
    pub fn index(self, s: Square) -> Option<usize> {
        if !self.contains(s) {
            return None;
        }
        Some(s.row as usize * self.columns as usize + s.column as usize)
    }

    /// Convert a flat index back to a square.
    #[inline]
    pub fn square(self, idx: usize) -> Square {
        let w = self.columns as usize;
        Square::new((idx / w) as i32, (idx % w) as i32)
    }

    /// Row-major iterator over every square.
    #[inline]
    pub fn iter(self) -> BoundsIter {
        BoundsIter {
            bounds: self,
            next: 0,
        }
    }
}

impl IntoIterator for Bounds {
    type Item = Square;
    type IntoIter = BoundsIter;
    #[inline]
    fn into_iter(self) -> BoundsIter {
        self.iter()
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.columns)
    }
}

// ---------------------------------------------------------------------------
// BoundsIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the squares of a [`Bounds`].
#[derive(Clone, Debug)]
pub struct BoundsIter {
    bounds: Bounds,
    next: usize,
}

impl Iterator for BoundsIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        if self.next >= self.bounds.len() {
            return None;
        }
        let s = self.bounds.square(self.next);
        self.next += 1;
        Some(s)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bounds.len().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BoundsIter {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn square_ordering_is_row_major() {
        let mut v = vec![
            Square::new(1, 0),
            Square::new(0, 5),
            Square::new(0, 1),
            Square::new(2, 2),
        ];
        v.sort();
        assert_eq!(
            v,
            vec![
                Square::new(0, 1),
                Square::new(0, 5),
                Square::new(1, 0),
                Square::new(2, 2),
            ]
        );
    }

    #[test]
    fn equal_squares_are_the_same_key() {
        let mut set = HashSet::new();
        set.insert(Square::new(3, 4));
        assert!(set.contains(&Square::from((3, 4))));
        assert!(!set.insert(Square::new(3, 4)));
    }

    #[test]
    fn neighbors_follow_discovery_order() {
        let n = Square::new(2, 2).neighbors_4();
        assert_eq!(
            n,
            [
                Square::new(2, 3),
                Square::new(2, 1),
                Square::new(3, 2),
                Square::new(1, 2),
            ]
        );
    }

    #[test]
    fn bounds_contains() {
        let b = Bounds::new(2, 3);
        assert!(b.contains(Square::new(0, 0)));
        assert!(b.contains(Square::new(1, 2)));
        assert!(!b.contains(Square::new(2, 0)));
        assert!(!b.contains(Square::new(0, 3)));
        assert!(!b.contains(Square::new(-1, 0)));
        assert!(!b.contains(Square::new(0, -1)));
    }

    #[test]
    fn bounds_index_roundtrip() {
        let b = Bounds::new(4, 5);
        for s in b {
            let i = b.index(s).unwrap();
            assert_eq!(b.square(i), s);
        }
        assert_eq!(b.index(Square::new(1, 0)), Some(5));
        assert_eq!(b.index(Square::new(4, 0)), None);
    }

    #[test]
    fn bounds_iter_count() {
        let b = Bounds::new(2, 3);
        let squares: Vec<_> = b.iter().collect();
        assert_eq!(squares.len(), 6);
        assert_eq!(squares[0], Square::new(0, 0));
        assert_eq!(squares[3], Square::new(1, 0));
        assert_eq!(squares[5], Square::new(1, 2));
        assert_eq!(b.iter().len(), 6);
    }

    #[test]
    fn empty_bounds() {
        let b = Bounds::new(0, 4);
        assert!(b.is_empty());
        assert_eq!(b.len(), 0);
        assert_eq!(b.iter().count(), 0);
        assert!(Bounds::new(3, -1).is_empty());
    }

    #[test]
    fn display() {
        assert_eq!(Square::new(2, 7).to_string(), "(2, 7)");
        assert_eq!(Bounds::new(2, 13).to_string(), "2x13");
    }
}
