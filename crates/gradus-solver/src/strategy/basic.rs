//! Candidate intersection against the missing values of each house.

use gradus_core::{Coordinate, Grid};

use crate::SolverError;
use crate::strategy::Evidence;

/// Narrows one cell's candidates by its row, column and box.
///
/// The candidate set is seeded from the row's missing values when the cell
/// has not been seeded yet, then intersected with the column's and the box's
/// missing values, committing as soon as it collapses to a single value.
/// Evidence points at the house whose missing values produced the singleton.
pub(crate) fn apply(grid: &mut Grid, coordinate: Coordinate) -> Result<Evidence, SolverError> {
    let mut evidence = Evidence::new();
    if !grid.cell_at(coordinate).is_empty() {
        return Ok(evidence);
    }
    let size = grid.size();
    let row = coordinate.row();
    let col = coordinate.col();

    let missing = grid.missing_in_row(row);
    let current = grid.candidates_at(coordinate)?;
    let mut candidates = if current.is_empty() {
        missing
    } else {
        current.intersection(missing)
    };
    if grid.set_candidates(coordinate, candidates)?.is_committed() {
        evidence.insert(coordinate, (0..size).map(|c| Coordinate::new(row, c)).collect());
        return Ok(evidence);
    }

    candidates = candidates.intersection(grid.missing_in_col(col));
    if grid.set_candidates(coordinate, candidates)?.is_committed() {
        evidence.insert(coordinate, (0..size).map(|r| Coordinate::new(r, col)).collect());
        return Ok(evidence);
    }

    candidates = candidates.intersection(grid.missing_in_box(coordinate));
    if grid.set_candidates(coordinate, candidates)?.is_committed() {
        let box_cells = grid.topology().box_of(coordinate).cells().iter().copied().collect();
        evidence.insert(coordinate, box_cells);
    }
    Ok(evidence)
}
