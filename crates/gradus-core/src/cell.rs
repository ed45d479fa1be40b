//! A single grid cell.

use crate::{Coordinate, ValueSet};

/// One cell of a [`Grid`](crate::Grid).
///
/// A cell is plain data: its coordinate, current value (`0` = empty), the
/// fixed flag marking puzzle clues, the solver candidate set, and the
/// user-facing note set. All mutation goes through [`Grid`](crate::Grid)
/// methods, which maintain the cell invariants (a non-empty cell has no
/// candidates and no notes; an empty cell never keeps a singleton candidate
/// set).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub(crate) coordinate: Coordinate,
    pub(crate) value: u8,
    pub(crate) fixed: bool,
    pub(crate) candidates: ValueSet,
    pub(crate) notes: ValueSet,
}

impl Cell {
    pub(crate) const fn empty(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            value: 0,
            fixed: false,
            candidates: ValueSet::EMPTY,
            notes: ValueSet::EMPTY,
        }
    }

    /// Returns the cell's coordinate.
    #[inline]
    #[must_use]
    pub const fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// Returns the cell's value; `0` means empty.
    #[inline]
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.value
    }

    /// Returns `true` if the cell holds a puzzle clue.
    #[inline]
    #[must_use]
    pub const fn is_fixed(&self) -> bool {
        self.fixed
    }

    /// Returns `true` if the cell has no value.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.value == 0
    }

    /// Returns the solver candidate set.
    #[inline]
    #[must_use]
    pub const fn candidates(&self) -> ValueSet {
        self.candidates
    }

    /// Returns the user note set.
    #[inline]
    #[must_use]
    pub const fn notes(&self) -> ValueSet {
        self.notes
    }
}
