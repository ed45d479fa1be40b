//! Row, column and box group iteration shared by the subset strategies.

use gradus_core::{Coordinate, Grid};

/// Returns every row, column and box as an owned coordinate list, in that
/// order, each group row-major internally.
pub(crate) fn all(grid: &Grid) -> Vec<Vec<Coordinate>> {
    let size = grid.size();
    let mut groups = Vec::with_capacity(3 * size);
    for row in 0..size {
        groups.push((0..size).map(|col| Coordinate::new(row, col)).collect());
    }
    for col in 0..size {
        groups.push((0..size).map(|row| Coordinate::new(row, col)).collect());
    }
    for box_region in grid.topology().boxes() {
        groups.push(box_region.cells().to_vec());
    }
    groups
}

/// Returns `true` if the group is ready for subset deductions: no member is
/// simultaneously empty and candidate-free (such cells have not been seeded
/// yet and would make any subset count meaningless).
pub(crate) fn participates(grid: &Grid, group: &[Coordinate]) -> bool {
    group.iter().all(|&coordinate| {
        let cell = grid.cell_at(coordinate);
        !cell.is_empty() || !cell.candidates().is_empty()
    })
}
