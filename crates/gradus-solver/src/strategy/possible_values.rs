//! Unique-home placement (hidden singles).

use gradus_core::{Coordinate, Grid, ValueSet};

use crate::SolverError;
use crate::strategy::Evidence;

/// Commits a candidate that no other cell of one of the cell's houses can
/// hold.
///
/// For each candidate of the cell, the row, the column and the box are
/// checked in turn: if every other member is either solved or unable to
/// hold the candidate, the cell is its unique home and the value is
/// committed. At most one value is placed per invocation.
pub(crate) fn apply(grid: &mut Grid, coordinate: Coordinate) -> Result<Evidence, SolverError> {
    if !grid.cell_at(coordinate).is_empty() {
        return Ok(Evidence::new());
    }
    let candidates = grid.candidates_at(coordinate)?;
    for value in candidates {
        for house in houses(grid, coordinate) {
            if house
                .iter()
                .all(|&other| other == coordinate || !can_hold(grid, other, value))
            {
                grid.set_candidates(coordinate, ValueSet::from_iter([value]))?;
                return Ok(Evidence::new());
            }
        }
    }
    Ok(Evidence::new())
}

fn houses(grid: &Grid, coordinate: Coordinate) -> [Vec<Coordinate>; 3] {
    let size = grid.size();
    let row = (0..size)
        .map(|col| Coordinate::new(coordinate.row(), col))
        .collect();
    let col = (0..size)
        .map(|r| Coordinate::new(r, coordinate.col()))
        .collect();
    let box_cells = grid.topology().box_of(coordinate).cells().to_vec();
    [row, col, box_cells]
}

/// An unseeded empty cell (no candidates yet) may still hold anything.
fn can_hold(grid: &Grid, coordinate: Coordinate, value: u8) -> bool {
    let cell = grid.cell_at(coordinate);
    cell.is_empty() && (cell.candidates().is_empty() || cell.candidates().contains(value))
}
