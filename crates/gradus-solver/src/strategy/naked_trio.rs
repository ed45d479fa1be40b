//! Naked triples within a row, column or box.

use std::collections::BTreeSet;

use gradus_core::{Coordinate, Grid};
use tinyvec::ArrayVec;

use crate::SolverError;
use crate::strategy::{Evidence, groups};

/// Eliminates the values of a naked triple from the rest of its group.
///
/// An empty cell with exactly two other empty group members whose candidate
/// sets are supersets of its own, and whose three-set union holds exactly
/// three values, forms the triple; those values are removed from every other
/// cell of the group.
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
            let base = cell.candidates();
            let mut union = base;

            let mut partners = ArrayVec::<[Coordinate; 4]>::new();
            for (j, &other) in group.iter().enumerate() {
                if j == i {
                    continue;
                }
                let other_cell = grid.cell_at(other);
                if other_cell.is_empty() && other_cell.candidates().is_superset(base) {
                    union = union.union(other_cell.candidates());
                    partners.push(other);
                    if partners.len() > 2 {
                        break;
                    }
                }
            }
            let &[first, second] = partners.as_slice() else {
                continue;
            };
            if union.len() != 3 {
                continue;
            }

            let trio_cells: BTreeSet<Coordinate> = [coordinate, first, second].into();
            for &other in &group {
                if trio_cells.contains(&other) {
                    continue;
                }
                for value in union {
                    if grid.remove_candidate(other, value)?.is_committed() {
                        evidence.insert(other, trio_cells.clone());
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

    fn seeded_row(values: impl IntoIterator<Item = u8> + Clone) -> StrategyTester {
        let mut tester = StrategyTester::new(Grid::default());
        for col in 0..9 {
            tester = tester.seed(0, col, values.clone());
        }
        tester
    }

    #[test]
    fn test_eliminates_triple_values_from_the_row() {
        // Baseline cells hold 1 and 3 but never all of {1, 2}, so only the
        // two intended partners are supersets of the base cell's set.
        let mut tester = seeded_row([1, 3, 4, 5])
            .seed(0, 0, [1, 2])
            .seed(0, 3, [1, 2, 3])
            .seed(0, 6, [1, 2])
            .apply(Strategy::NakedTrio);
        for col in [1, 2, 4, 5, 7, 8] {
            for value in [1, 2, 3] {
                tester = tester.assert_not_candidate(0, col, value);
            }
            tester = tester.assert_candidate(0, col, 4);
        }
        let _ = tester.assert_candidate(0, 3, 3);
    }

    #[test]
    fn test_four_superset_cells_are_not_a_triple() {
        let _ = seeded_row([1, 3, 4, 5])
            .seed(0, 0, [1, 2])
            .seed(0, 3, [1, 2, 3])
            .seed(0, 6, [1, 2, 3])
            .seed(0, 8, [1, 2])
            .apply(Strategy::NakedTrio)
            .assert_candidate(0, 1, 1);
    }

    #[test]
    fn test_union_larger_than_three_is_not_a_triple() {
        let _ = seeded_row([1, 5, 6, 7])
            .seed(0, 0, [1, 2])
            .seed(0, 3, [1, 2, 3])
            .seed(0, 6, [1, 2, 4])
            .apply(Strategy::NakedTrio)
            .assert_candidate(0, 1, 1);
    }
}
