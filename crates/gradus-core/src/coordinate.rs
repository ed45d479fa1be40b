//! Grid coordinates.

use std::fmt::{self, Display};

/// An immutable `(row, column)` position on a grid.
///
/// Equality, ordering and hashing consider both fields; ordering is
/// row-major, which gives every coordinate collection a deterministic order.
///
/// # Examples
///
/// ```
/// use gradus_core::Coordinate;
///
/// let coordinate = Coordinate::new(2, 7);
/// assert_eq!(coordinate.row(), 2);
/// assert_eq!(coordinate.col(), 7);
/// assert_eq!(coordinate.to_string(), "(2,7)");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coordinate {
    row: usize,
    col: usize,
}

impl Coordinate {
    /// Creates a new coordinate.
    #[inline]
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the row index.
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    /// Returns the column index.
    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.col
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}
