//! Test support for exercising strategies on hand-built grids.
//!
//! [`StrategyTester`] wraps a [`Grid`] in a fluent assertion chain so
//! strategy tests read as: seed candidates, apply a strategy, assert the
//! resulting values and candidate sets. Every method panics on failure with
//! the caller's location, so it is only suitable for tests and benches.

use gradus_core::{Coordinate, Grid, ValueSet};

use crate::Strategy;

/// A fluent harness around one grid under test.
#[derive(Debug, Clone)]
pub struct StrategyTester {
    grid: Grid,
}

impl StrategyTester {
    /// Wraps an existing grid.
    #[must_use]
    pub const fn new(grid: Grid) -> Self {
        Self { grid }
    }

    /// Parses a grid from the text format.
    ///
    /// # Panics
    ///
    /// Panics if the text is not a valid grid.
    #[track_caller]
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        match text.parse() {
            Ok(grid) => Self::new(grid),
            Err(error) => panic!("invalid grid text: {error}"),
        }
    }

    /// Replaces a cell's candidate set.
    ///
    /// # Panics
    ///
    /// Panics if the position or a value is out of range.
    #[track_caller]
    #[must_use]
    pub fn seed(mut self, row: usize, col: usize, values: impl IntoIterator<Item = u8>) -> Self {
        let candidates = values.into_iter().collect();
        if let Err(error) = self
            .grid
            .set_candidates(Coordinate::new(row, col), candidates)
        {
            panic!("seeding ({row},{col}) failed: {error}");
        }
        self
    }

    /// Runs one strategy over the whole grid.
    ///
    /// # Panics
    ///
    /// Panics if the strategy fails.
    #[track_caller]
    #[must_use]
    pub fn apply(mut self, strategy: Strategy) -> Self {
        if let Err(error) = strategy.apply(&mut self.grid) {
            panic!("{strategy} failed: {error}");
        }
        self
    }

    /// Asserts the cell holds `value`.
    #[track_caller]
    #[must_use]
    pub fn assert_value(self, row: usize, col: usize, value: u8) -> Self {
        let found = self.grid.cell_at(Coordinate::new(row, col)).value();
        assert_eq!(found, value, "({row},{col}) holds {found}, expected {value}");
        self
    }

    /// Asserts the cell is still empty.
    #[track_caller]
    #[must_use]
    pub fn assert_empty(self, row: usize, col: usize) -> Self {
        let found = self.grid.cell_at(Coordinate::new(row, col)).value();
        assert_eq!(found, 0, "({row},{col}) holds {found}, expected empty");
        self
    }

    /// Asserts the cell's candidate set is exactly `values`.
    #[track_caller]
    #[must_use]
    pub fn assert_candidates(
        self,
        row: usize,
        col: usize,
        values: impl IntoIterator<Item = u8>,
    ) -> Self {
        let expected: ValueSet = values.into_iter().collect();
        let found = self.grid.cell_at(Coordinate::new(row, col)).candidates();
        assert_eq!(
            found, expected,
            "({row},{col}) candidates are {found:?}, expected {expected:?}"
        );
        self
    }

    /// Asserts the cell still has `value` as a candidate.
    #[track_caller]
    #[must_use]
    pub fn assert_candidate(self, row: usize, col: usize, value: u8) -> Self {
        let found = self.grid.cell_at(Coordinate::new(row, col)).candidates();
        assert!(
            found.contains(value),
            "({row},{col}) lost candidate {value}: {found:?}"
        );
        self
    }

    /// Asserts `value` is no longer a candidate of the cell.
    #[track_caller]
    #[must_use]
    pub fn assert_not_candidate(self, row: usize, col: usize, value: u8) -> Self {
        let found = self.grid.cell_at(Coordinate::new(row, col)).candidates();
        assert!(
            !found.contains(value),
            "({row},{col}) kept candidate {value}: {found:?}"
        );
        self
    }

    /// Returns the grid under test.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Consumes the tester and returns the grid.
    #[must_use]
    pub fn into_grid(self) -> Grid {
        self.grid
    }
}
