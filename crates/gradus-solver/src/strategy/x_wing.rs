//! The X-Wing rectangle elimination.

use std::collections::{BTreeMap, BTreeSet};

use gradus_core::{Coordinate, Grid};

use crate::SolverError;
use crate::strategy::Evidence;

/// Applies the X-Wing pattern for every value, over rows then columns.
///
/// When a value is restricted to the same two columns in exactly two rows,
/// the four cells form a rectangle that must hold the value at two opposite
/// corners; the value is removed from both columns everywhere else. The
/// column-based form is symmetric. Evidence highlights the four corners.
pub(crate) fn apply(grid: &mut Grid) -> Result<Evidence, SolverError> {
    let mut evidence = Evidence::new();
    for value in grid.all_values() {
        scan(grid, value, Coordinate::new, &mut evidence)?;
        scan(grid, value, |line, cross| Coordinate::new(cross, line), &mut evidence)?;
    }
    Ok(evidence)
}

/// One orientation of the pattern: `at(line, cross)` maps the scanned line
/// index and the position along it to a grid coordinate.
fn scan(
    grid: &mut Grid,
    value: u8,
    at: impl Fn(usize, usize) -> Coordinate,
    evidence: &mut Evidence,
) -> Result<(), SolverError> {
    let size = grid.size();

    let mut patterns: BTreeMap<(usize, usize), Vec<usize>> = BTreeMap::new();
    for line in 0..size {
        let mut spots = Vec::new();
        for cross in 0..size {
            let cell = grid.cell_at(at(line, cross));
            if cell.is_empty() && cell.candidates().contains(value) {
                spots.push(cross);
            }
        }
        if let [a, b] = spots[..] {
            patterns.entry((a, b)).or_default().push(line);
        }
    }

    for (&(a, b), lines) in &patterns {
        let &[first, second] = lines.as_slice() else {
            continue;
        };
        let corners: BTreeSet<Coordinate> = [
            at(first, a),
            at(first, b),
            at(second, a),
            at(second, b),
        ]
        .into_iter()
        .collect();

        for line in 0..size {
            if line == first || line == second {
                continue;
            }
            for cross in [a, b] {
                if grid.remove_candidate(at(line, cross), value)?.is_committed() {
                    evidence.insert(at(line, cross), corners.clone());
                }
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
    fn test_row_pattern_clears_the_columns() {
        let tester = StrategyTester::new(Grid::default())
            // 5 is restricted to columns 2 and 6 in rows 1 and 4.
            .seed(1, 2, [5, 7])
            .seed(1, 6, [5, 8])
            .seed(4, 2, [5, 9])
            .seed(4, 6, [5, 7])
            // Other appearances of 5 in those columns.
            .seed(7, 2, [3, 5, 6])
            .seed(8, 6, [2, 5, 6])
            .apply(Strategy::XWing)
            .assert_not_candidate(7, 2, 5)
            .assert_not_candidate(8, 6, 5)
            // The rectangle corners keep the candidate.
            .assert_candidate(1, 2, 5)
            .assert_candidate(4, 6, 5);
        // Elimination only, no placements.
        assert!(!tester.grid().has_any_number());
    }

    #[test]
    fn test_three_rows_with_the_same_columns_are_not_a_pattern() {
        let mut tester = StrategyTester::new(Grid::default());
        for row in [1, 4, 7] {
            tester = tester.seed(row, 2, [5, 7]).seed(row, 6, [5, 8]);
        }
        let _ = tester
            .seed(8, 2, [3, 5, 6])
            .apply(Strategy::XWing)
            .assert_candidate(8, 2, 5);
    }

    #[test]
    fn test_column_pattern_clears_the_rows() {
        let _ = StrategyTester::new(Grid::default())
            // 3 is restricted to rows 0 and 5 in columns 1 and 7.
            .seed(0, 1, [3, 8])
            .seed(5, 1, [3, 9])
            .seed(0, 7, [3, 8])
            .seed(5, 7, [3, 9])
            .seed(0, 4, [2, 3, 6])
            .seed(5, 3, [2, 3, 6])
            .apply(Strategy::XWing)
            .assert_not_candidate(0, 4, 3)
            .assert_not_candidate(5, 3, 3)
            .assert_candidate(0, 1, 3);
    }
}
