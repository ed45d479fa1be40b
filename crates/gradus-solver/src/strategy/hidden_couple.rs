//! Hidden pairs within a row, column or box.

use std::collections::BTreeMap;

use gradus_core::{Coordinate, Grid, ValueSet};

use crate::SolverError;
use crate::strategy::{Evidence, groups};

/// Collapses the cells of a hidden pair to just the pair's two values.
///
/// Two values that each occur in exactly two cells of a group, and in the
/// same two cells, can only live there; every other candidate of those two
/// cells is discarded. The collapse itself places no value, so no evidence
/// is produced.
pub(crate) fn apply(grid: &mut Grid) -> Result<Evidence, SolverError> {
    for group in groups::all(grid) {
        let mut homes: BTreeMap<u8, Vec<Coordinate>> = BTreeMap::new();
        for &coordinate in &group {
            let cell = grid.cell_at(coordinate);
            if !cell.is_empty() {
                continue;
            }
            for value in cell.candidates() {
                homes.entry(value).or_default().push(coordinate);
            }
        }

        let pairs: Vec<(u8, &Vec<Coordinate>)> = homes
            .iter()
            .filter(|(_, cells)| cells.len() == 2)
            .map(|(&value, cells)| (value, cells))
            .collect();
        for (i, &(first, cells)) in pairs.iter().enumerate() {
            for &(second, other_cells) in &pairs[i + 1..] {
                if cells != other_cells {
                    continue;
                }
                let pair = ValueSet::from_iter([first, second]);
                for &coordinate in cells {
                    grid.set_candidates(coordinate, pair)?;
                }
            }
        }
    }
    Ok(Evidence::new())
}

#[cfg(test)]
mod tests {
    use crate::Strategy;
    use crate::testing::StrategyTester;

    use super::*;

    #[test]
    fn test_collapses_hidden_pair_cells() {
        // 8 and 9 occur only at (0, 0) and (0, 5) in row 0.
        let mut tester = StrategyTester::new(Grid::default())
            .seed(0, 0, [1, 2, 8, 9])
            .seed(0, 5, [3, 4, 8, 9]);
        for col in [1, 2, 3, 4, 6, 7, 8] {
            tester = tester.seed(0, col, [1, 2, 3, 4]);
        }
        let _ = tester
            .apply(Strategy::HiddenCouple)
            .assert_candidates(0, 0, [8, 9])
            .assert_candidates(0, 5, [8, 9])
            .assert_empty(0, 0);
    }

    #[test]
    fn test_values_in_different_cell_pairs_are_kept() {
        // 8 lives at (0, 0)/(0, 5); 9 lives at (0, 0)/(0, 7).
        let mut tester = StrategyTester::new(Grid::default())
            .seed(0, 0, [1, 2, 8, 9])
            .seed(0, 5, [3, 4, 8])
            .seed(0, 7, [3, 4, 9]);
        for col in [1, 2, 3, 4, 6, 8] {
            tester = tester.seed(0, col, [1, 2, 3, 4]);
        }
        let _ = tester
            .apply(Strategy::HiddenCouple)
            .assert_candidate(0, 0, 1);
    }

    #[test]
    fn test_value_in_three_cells_is_not_hidden() {
        let mut tester = StrategyTester::new(Grid::default())
            .seed(0, 0, [1, 2, 8, 9])
            .seed(0, 5, [3, 4, 8, 9])
            .seed(0, 6, [3, 4, 8]);
        for col in [1, 2, 3, 4, 7, 8] {
            tester = tester.seed(0, col, [1, 2, 3, 4]);
        }
        // 8 occurs in three cells, so only 9 is confined and no pair forms.
        let _ = tester
            .apply(Strategy::HiddenCouple)
            .assert_candidate(0, 0, 1);
    }
}
