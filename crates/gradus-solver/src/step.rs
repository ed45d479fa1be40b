//! Replayable snapshots of the solving process.

use std::collections::BTreeSet;

use gradus_core::{Coordinate, Grid, ValueSet};

use crate::Strategy;

/// The value placement that triggered a [`Step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    row: usize,
    col: usize,
    value: u8,
}

impl Placement {
    pub(crate) const fn new(row: usize, col: usize, value: u8) -> Self {
        Self { row, col, value }
    }

    /// Returns the row of the placed cell.
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    /// Returns the column of the placed cell.
    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.col
    }

    /// Returns the placed value.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.value
    }
}

/// One immutable snapshot in a [`Chronology`](crate::Chronology).
///
/// Every step owns independent copies of the value matrix and the per-cell
/// candidate and note sets, so later mutation of the working grid cannot
/// corrupt recorded history. The first step of a solve has no placement and
/// no strategy; every later step records the placement that created it, the
/// strategy responsible, and the evidence cells explaining the deduction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    matrix: Vec<Vec<u8>>,
    candidates: Vec<Vec<ValueSet>>,
    notes: Vec<Vec<ValueSet>>,
    placement: Option<Placement>,
    strategy: Option<Strategy>,
    evidence: BTreeSet<Coordinate>,
}

impl Step {
    /// Captures the initial state of a solve.
    pub(crate) fn initial(grid: &Grid) -> Self {
        Self {
            matrix: grid.to_matrix(),
            candidates: candidates_matrix(grid),
            notes: notes_matrix(grid),
            placement: None,
            strategy: None,
            evidence: BTreeSet::new(),
        }
    }

    pub(crate) fn placed(
        matrix: Vec<Vec<u8>>,
        grid: &Grid,
        placement: Placement,
        strategy: Strategy,
        evidence: BTreeSet<Coordinate>,
    ) -> Self {
        Self {
            matrix,
            candidates: candidates_matrix(grid),
            notes: notes_matrix(grid),
            placement: Some(placement),
            strategy: Some(strategy),
            evidence,
        }
    }

    /// Returns the value matrix at this point of the solve.
    #[must_use]
    pub fn matrix(&self) -> &[Vec<u8>] {
        &self.matrix
    }

    /// Returns the per-cell candidate sets at this point of the solve.
    #[must_use]
    pub fn candidates(&self) -> &[Vec<ValueSet>] {
        &self.candidates
    }

    /// Returns the per-cell note sets at this point of the solve.
    #[must_use]
    pub fn notes(&self) -> &[Vec<ValueSet>] {
        &self.notes
    }

    /// Returns the placement that triggered this step, or `None` for the
    /// initial state.
    #[inline]
    #[must_use]
    pub const fn placement(&self) -> Option<Placement> {
        self.placement
    }

    /// Returns the strategy responsible for this step, or `None` for the
    /// initial state.
    #[inline]
    #[must_use]
    pub const fn strategy(&self) -> Option<Strategy> {
        self.strategy
    }

    /// Returns the cells to highlight when explaining this step.
    #[must_use]
    pub const fn evidence(&self) -> &BTreeSet<Coordinate> {
        &self.evidence
    }
}

fn candidates_matrix(grid: &Grid) -> Vec<Vec<ValueSet>> {
    let size = grid.size();
    (0..size)
        .map(|row| {
            (0..size)
                .map(|col| grid.cell_at(Coordinate::new(row, col)).candidates())
                .collect()
        })
        .collect()
}

fn notes_matrix(grid: &Grid) -> Vec<Vec<ValueSet>> {
    let size = grid.size();
    (0..size)
        .map(|row| {
            (0..size)
                .map(|col| grid.cell_at(Coordinate::new(row, col)).notes())
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_step_has_no_provenance() {
        let mut grid = Grid::default();
        grid.set_value(0, 0, 5, true).unwrap();

        let step = Step::initial(&grid);
        assert_eq!(step.matrix()[0][0], 5);
        assert!(step.placement().is_none());
        assert!(step.strategy().is_none());
        assert!(step.evidence().is_empty());
    }

    #[test]
    fn test_snapshot_is_independent_of_the_grid() {
        let mut grid = Grid::default();
        let step = Step::initial(&grid);

        grid.set_value(0, 0, 9, false).unwrap();
        assert_eq!(step.matrix()[0][0], 0);
    }
}
