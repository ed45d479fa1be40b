//! Naked pairs within a row, column or box.

use std::collections::BTreeSet;

use gradus_core::{Coordinate, Grid};
use tinyvec::ArrayVec;

use crate::SolverError;
use crate::strategy::{Evidence, groups};

/// Eliminates the values of a naked pair from the rest of its group.
///
/// An empty cell with exactly two candidates and exactly one other empty
/// group member holding the identical set forms the pair; both values are
/// removed from every other cell of the group.
pub(crate) fn apply(grid: &mut Grid) -> Result<Evidence, SolverError> {
    let mut evidence = Evidence::new();
    for group in groups::all(grid) {
        if !groups::participates(grid, &group) {
            continue;
        }
        for (i, &coordinate) in group.iter().enumerate() {
            let cell = grid.cell_at(coordinate);
            if !cell.is_empty() {
                continue;
            }
            let pair = cell.candidates();
            if pair.len() != 2 {
                continue;
            }

            let mut partners = ArrayVec::<[Coordinate; 4]>::new();
            for (j, &other) in group.iter().enumerate() {
                if j == i {
                    continue;
                }
                let other_cell = grid.cell_at(other);
                if other_cell.is_empty() && other_cell.candidates() == pair {
                    partners.push(other);
                    if partners.len() > 1 {
                        break;
                    }
                }
            }
            let &[partner] = partners.as_slice() else {
                continue;
            };

            let pair_cells: BTreeSet<Coordinate> = [coordinate, partner].into();
            for &other in &group {
                if other == coordinate || other == partner {
                    continue;
                }
                for value in pair {
                    if grid.remove_candidate(other, value)?.is_committed() {
                        evidence.insert(other, pair_cells.clone());
                    }
                }
            }
        }
    }
    Ok(evidence)
}

#[cfg(test)]
mod tests {
    use crate::Strategy;
    use crate::testing::StrategyTester;

    use super::*;

    fn seeded_row() -> StrategyTester {
        let mut tester = StrategyTester::new(Grid::default());
        for col in 0..9 {
            tester = tester.seed(0, col, [1, 2, 3, 4]);
        }
        tester
    }

    #[test]
    fn test_eliminates_pair_values_from_the_row() {
        let mut tester = seeded_row()
            .seed(0, 0, [1, 2])
            .seed(0, 4, [1, 2])
            .apply(Strategy::NakedCouple);
        for col in [1, 2, 3, 5, 6, 7, 8] {
            tester = tester.assert_candidates(0, col, [3, 4]);
        }
        let _ = tester.assert_candidates(0, 0, [1, 2]).assert_empty(0, 0);
    }

    #[test]
    fn test_three_identical_cells_are_not_a_pair() {
        let _ = seeded_row()
            .seed(0, 0, [1, 2])
            .seed(0, 4, [1, 2])
            .seed(0, 7, [1, 2])
            .apply(Strategy::NakedCouple)
            .assert_candidate(0, 1, 1)
            .assert_candidate(0, 1, 2);
    }

    #[test]
    fn test_unseeded_group_is_skipped() {
        // (0, 1) and the other row cells are empty with no candidates, so
        // row 0 does not participate yet.
        let _ = StrategyTester::new(Grid::default())
            .seed(0, 0, [1, 2])
            .seed(0, 4, [1, 2])
            .seed(0, 6, [1, 2, 3])
            .apply(Strategy::NakedCouple)
            .assert_candidate(0, 6, 1)
            .assert_candidate(0, 6, 2);
    }
}
