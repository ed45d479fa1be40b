//! Error types for grid construction, mutation and parsing.

use derive_more::{Display, Error, From};

/// An error raised by [`Grid`](crate::Grid) operations.
///
/// These represent programmer errors (out-of-range arguments); they are
/// reported eagerly and never retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GridError {
    /// The requested grid size is not a perfect square.
    #[display("grid size {size} is not a positive perfect square")]
    InvalidSize {
        /// The rejected size.
        size: usize,
    },
    /// A cell value outside `0..=size`.
    #[display("value {value} is out of range 0..={size}")]
    InvalidValue {
        /// The rejected value.
        value: u8,
        /// The grid size.
        size: usize,
    },
    /// A note number outside `1..=size`.
    #[display("note number {number} is out of range 1..={size}")]
    InvalidNote {
        /// The rejected note number.
        number: u8,
        /// The grid size.
        size: usize,
    },
    /// A matrix row whose width differs from the matrix height.
    #[display("matrix row {row} has {found} values, expected {expected}")]
    RaggedMatrix {
        /// The offending row index.
        row: usize,
        /// The number of values found on that row.
        found: usize,
        /// The number of values expected per row.
        expected: usize,
    },
    /// A coordinate outside the grid extents.
    #[display("cell ({row},{col}) is out of bounds for a {size}×{size} grid")]
    OutOfBounds {
        /// The rejected row.
        row: usize,
        /// The rejected column.
        col: usize,
        /// The grid size.
        size: usize,
    },
}

/// An error raised when parsing a grid from its text representation.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum ParseGridError {
    /// The input contained no rows.
    #[display("the grid text contains no rows")]
    #[from(ignore)]
    Empty,
    /// A row holds the wrong number of values.
    #[display("row {row} has {found} values, expected {expected}")]
    #[from(ignore)]
    RowLength {
        /// The offending row index.
        row: usize,
        /// The number of values found on that row.
        found: usize,
        /// The number of values expected per row.
        expected: usize,
    },
    /// A token could not be read as a cell value.
    #[display("invalid value {token:?} on row {row}")]
    #[from(ignore)]
    InvalidToken {
        /// The offending row index.
        row: usize,
        /// The unparsable token.
        #[error(not(source))]
        token: String,
    },
    /// The parsed values did not form a valid grid.
    #[display("invalid grid: {source}")]
    Grid {
        /// The underlying grid error.
        source: GridError,
    },
}
