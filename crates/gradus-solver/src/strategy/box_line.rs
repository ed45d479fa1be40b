//! Box-line reduction.

use std::collections::BTreeSet;

use gradus_core::{BoxRegion, Coordinate, Grid, Slice, ValueSet};

use crate::SolverError;
use crate::strategy::Evidence;

#[derive(Clone, Copy)]
enum Line {
    Row,
    Col,
}

/// Removes candidates confined to one slice of a box from the rest of the
/// crossing line.
///
/// For each box and each of its row and column slices: a value present in
/// every candidate-bearing cell of the slice and absent from the rest of
/// the box must lie within the slice, so it cannot appear elsewhere on the
/// full grid line the slice belongs to.
pub(crate) fn apply(grid: &mut Grid) -> Result<Evidence, SolverError> {
    let mut evidence = Evidence::new();
    let boxes = grid.topology().boxes().to_vec();
    for box_region in &boxes {
        for slice in box_region.row_slices() {
            reduce(grid, box_region, slice, Line::Row, &mut evidence)?;
        }
        for slice in box_region.col_slices() {
            reduce(grid, box_region, slice, Line::Col, &mut evidence)?;
        }
    }
    Ok(evidence)
}

fn reduce(
    grid: &mut Grid,
    box_region: &BoxRegion,
    slice: &Slice,
    line: Line,
    evidence: &mut Evidence,
) -> Result<(), SolverError> {
    // Values present in every candidate-bearing cell of the slice.
    let mut common: Option<ValueSet> = None;
    for &coordinate in slice.cells() {
        let cell = grid.cell_at(coordinate);
        if !cell.is_empty() || cell.candidates().is_empty() {
            continue;
        }
        common = Some(match common {
            Some(set) => set.intersection(cell.candidates()),
            None => cell.candidates(),
        });
    }
    let Some(common) = common else {
        return Ok(());
    };

    let mut elsewhere = ValueSet::new();
    for &coordinate in box_region.cells() {
        if !slice.cells().contains(&coordinate) {
            elsewhere = elsewhere.union(grid.cell_at(coordinate).candidates());
        }
    }
    let confined = common.difference(elsewhere);
    if confined.is_empty() {
        return Ok(());
    }

    // The line cells inside the box are exactly the slice cells.
    let slice_cells: BTreeSet<Coordinate> = slice.cells().iter().copied().collect();
    for i in 0..grid.size() {
        let target = match line {
            Line::Row => Coordinate::new(slice.line(), i),
            Line::Col => Coordinate::new(i, slice.line()),
        };
        if slice_cells.contains(&target) {
            continue;
        }
        for value in confined {
            if grid.remove_candidate(target, value)?.is_committed() {
                evidence.insert(target, slice_cells.clone());
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::Strategy;
    use crate::testing::StrategyTester;

    use super::*;

    #[test]
    fn test_removes_confined_value_from_the_rest_of_the_row() {
        // In the top-left box, 7 appears only in the row-0 slice.
        let mut tester = StrategyTester::new(Grid::default())
            .seed(0, 0, [2, 7])
            .seed(0, 1, [3, 7])
            .seed(0, 2, [2, 3, 7]);
        for row in 1..3 {
            for col in 0..3 {
                tester = tester.seed(row, col, [1, 4, 5]);
            }
        }
        let _ = tester
            .seed(0, 5, [6, 7, 8])
            .seed(0, 8, [7, 9])
            .apply(Strategy::BoxLine)
            .assert_not_candidate(0, 5, 7)
            // (0, 8) collapsed to 9 and was committed.
            .assert_value(0, 8, 9)
            // Slice cells keep the candidate.
            .assert_candidate(0, 0, 7);
    }

    #[test]
    fn test_value_present_elsewhere_in_the_box_is_kept() {
        let _ = StrategyTester::new(Grid::default())
            .seed(0, 0, [2, 7])
            .seed(0, 1, [3, 7])
            .seed(0, 2, [2, 3, 7])
            // 7 also possible in the row-1 slice of the same box.
            .seed(1, 0, [1, 7])
            .seed(0, 5, [6, 7, 8])
            // (1, 4) keeps {6, 7, 8} from being confined to a slice of the
            // top-middle box, whose other cells are unseeded.
            .seed(1, 4, [6, 7, 8])
            .apply(Strategy::BoxLine)
            .assert_candidate(0, 5, 7)
            .assert_empty(0, 0)
            .assert_candidate(0, 0, 7);
    }

    #[test]
    fn test_column_slices_reduce_the_column() {
        // In the top-left box, 4 appears only in the column-1 slice.
        let mut tester = StrategyTester::new(Grid::default())
            .seed(0, 1, [4, 8])
            .seed(1, 1, [4, 9])
            .seed(2, 1, [4, 8, 9]);
        for row in 0..3 {
            for col in [0, 2] {
                tester = tester.seed(row, col, [5, 6]);
            }
        }
        let _ = tester
            .seed(7, 1, [3, 4])
            .apply(Strategy::BoxLine)
            .assert_not_candidate(7, 1, 4)
            .assert_candidate(0, 1, 4);
    }
}
