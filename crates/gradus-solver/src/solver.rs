//! The pass loop driving the strategies.

use std::collections::BTreeSet;

use gradus_core::Grid;

use crate::{
    Chronology, SolverError, Step, Strategy,
    step::Placement,
    strategy::{Evidence, Scope},
};

/// Tuning knobs for a [`Solver`].
///
/// The defaults reproduce the standard pipeline: at most 10 passes, X-Wing
/// excluded, evidence recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    max_passes: usize,
    x_wing: bool,
    evidence: bool,
}

impl SolverConfig {
    /// The default pass cap.
    pub const DEFAULT_MAX_PASSES: usize = 10;

    /// Creates the default configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_passes: Self::DEFAULT_MAX_PASSES,
            x_wing: false,
            evidence: true,
        }
    }

    /// Sets the maximum number of passes over the grid.
    #[must_use]
    pub const fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes;
        self
    }

    /// Includes or excludes X-Wing at the end of each pass.
    #[must_use]
    pub const fn with_x_wing(mut self, x_wing: bool) -> Self {
        self.x_wing = x_wing;
        self
    }

    /// Enables or disables evidence recording on steps.
    #[must_use]
    pub const fn with_evidence(mut self, evidence: bool) -> Self {
        self.evidence = evidence;
        self
    }

    /// Returns the pass cap.
    #[must_use]
    pub const fn max_passes(&self) -> usize {
        self.max_passes
    }

    /// Returns `true` if X-Wing runs at the end of each pass.
    #[must_use]
    pub const fn x_wing(&self) -> bool {
        self.x_wing
    }

    /// Returns `true` if steps record evidence cells.
    #[must_use]
    pub const fn evidence(&self) -> bool {
        self.evidence
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs the strategy pipeline over a private copy of a grid and records
/// every placement as a [`Step`].
///
/// # Examples
///
/// ```
/// use gradus_core::Grid;
/// use gradus_solver::Solver;
///
/// let grid: Grid = "
///     0 2 3 4 5 6 7 8 9
///     4 5 6 7 8 9 1 2 3
///     7 8 9 1 2 3 4 5 6
///     2 3 4 5 6 7 8 9 1
///     5 6 7 8 9 1 2 3 4
///     8 9 1 2 3 4 5 6 7
///     3 4 5 6 7 8 9 1 2
///     6 7 8 9 1 2 3 4 5
///     9 1 2 3 4 5 6 7 8
/// "
/// .parse()?;
///
/// let chronology = Solver::new().solve(&grid);
/// assert_eq!(chronology.len(), 2);
/// let placement = chronology.steps()[1].placement().unwrap();
/// assert_eq!((placement.row(), placement.col(), placement.value()), (0, 0, 1));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    /// Creates a solver with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a solver with the given configuration.
    #[must_use]
    pub const fn with_config(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Returns the solver's configuration.
    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solves as far as the strategy pipeline reaches and returns the step
    /// history. The input grid is never mutated.
    ///
    /// This entry point is fail-soft: if a pass fails, the error is logged
    /// and a one-step chronology of the input snapshot is returned, so the
    /// caller always receives something renderable.
    #[must_use]
    pub fn solve(&self, grid: &Grid) -> Chronology {
        match self.run(grid) {
            Ok(chronology) => chronology,
            Err(error) => {
                log::error!("solving failed, returning the initial snapshot only: {error}");
                let mut chronology = Chronology::new();
                chronology.push(Step::initial(grid));
                chronology
            }
        }
    }

    fn run(&self, grid: &Grid) -> Result<Chronology, SolverError> {
        let mut work = grid.clone();
        let mut chronology = Chronology::new();
        chronology.push(Step::initial(&work));

        // Incrementally updated "previous" matrix the capture diffs against,
        // so cascaded placements within one invocation are recorded in order.
        let mut seen = work.to_matrix();

        let strategies = self.pass_strategies();
        let mut pass = 0;
        while pass < self.config.max_passes {
            if work.is_complete() && !work.has_conflicts() {
                break;
            }
            pass += 1;
            log::debug!("pass {pass}/{}", self.config.max_passes);

            for &strategy in &strategies {
                match strategy.scope() {
                    Scope::Cell => {
                        for coordinate in work.coordinates() {
                            if !work.cell_at(coordinate).is_empty() {
                                continue;
                            }
                            let evidence = strategy.apply_to_cell(&mut work, coordinate)?;
                            self.capture(&work, &mut seen, strategy, &evidence, &mut chronology);
                        }
                    }
                    Scope::Grid => {
                        let evidence = strategy.apply(&mut work)?;
                        self.capture(&work, &mut seen, strategy, &evidence, &mut chronology);
                    }
                }
            }
        }
        Ok(chronology)
    }

    /// Records one step per cell that became non-zero since the last
    /// capture, in row-major order.
    fn capture(
        &self,
        work: &Grid,
        seen: &mut [Vec<u8>],
        strategy: Strategy,
        evidence: &Evidence,
        chronology: &mut Chronology,
    ) {
        for coordinate in work.coordinates() {
            let value = work.cell_at(coordinate).value();
            if value == 0 || seen[coordinate.row()][coordinate.col()] != 0 {
                continue;
            }
            seen[coordinate.row()][coordinate.col()] = value;
            let step_evidence = if self.config.evidence {
                evidence
                    .get(&coordinate)
                    .cloned()
                    .unwrap_or_else(|| BTreeSet::from([coordinate]))
            } else {
                BTreeSet::new()
            };
            chronology.push(Step::placed(
                seen.to_vec(),
                work,
                Placement::new(coordinate.row(), coordinate.col(), value),
                strategy,
                step_evidence,
            ));
        }
    }

    fn pass_strategies(&self) -> Vec<Strategy> {
        let mut strategies = Strategy::DEFAULT_PASS.to_vec();
        if self.config.x_wing {
            strategies.push(Strategy::XWing);
        }
        strategies
    }
}

#[cfg(test)]
mod tests {
    use gradus_core::Coordinate;

    use super::*;

    const SOLVED: &str = "
        1 2 3 4 5 6 7 8 9
        4 5 6 7 8 9 1 2 3
        7 8 9 1 2 3 4 5 6
        2 3 4 5 6 7 8 9 1
        5 6 7 8 9 1 2 3 4
        8 9 1 2 3 4 5 6 7
        3 4 5 6 7 8 9 1 2
        6 7 8 9 1 2 3 4 5
        9 1 2 3 4 5 6 7 8
    ";

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn blanked(cells: &[(usize, usize)]) -> Grid {
        let grid: Grid = SOLVED.parse().unwrap();
        let mut matrix = grid.to_matrix();
        for &(row, col) in cells {
            matrix[row][col] = 0;
        }
        Grid::from_matrix(&matrix).unwrap()
    }

    #[test]
    fn test_solved_grid_yields_one_step() {
        init_logger();
        let grid: Grid = SOLVED.parse().unwrap();
        assert!(grid.is_complete());
        assert!(!grid.has_conflicts());
        assert!(grid.has_any_number());

        let chronology = Solver::new().solve(&grid);
        assert_eq!(chronology.len(), 1);
        assert!(chronology.steps()[0].placement().is_none());
    }

    #[test]
    fn test_single_missing_cell_yields_two_steps() {
        init_logger();
        let grid = blanked(&[(0, 8)]);

        let chronology = Solver::new().solve(&grid);
        assert_eq!(chronology.len(), 2);

        let step = &chronology.steps()[1];
        assert_eq!(step.strategy(), Some(Strategy::Basic));
        let placement = step.placement().unwrap();
        assert_eq!((placement.row(), placement.col(), placement.value()), (0, 8, 9));
        // The row produced the deduction.
        assert!(step.evidence().contains(&Coordinate::new(0, 0)));
        assert_eq!(step.matrix()[0][8], 9);
    }

    #[test]
    fn test_input_grid_is_never_mutated() {
        let grid = blanked(&[(0, 8)]);
        let before = grid.to_matrix();

        let _ = Solver::new().solve(&grid);
        assert_eq!(grid.to_matrix(), before);
    }

    #[test]
    fn test_fills_scattered_blanks() {
        init_logger();
        let blanks = [(0, 0), (2, 3), (4, 4), (5, 8), (7, 1), (8, 8)];
        let grid = blanked(&blanks);

        let chronology = Solver::new().solve(&grid);
        assert_eq!(chronology.len(), 1 + blanks.len());

        let last = chronology.steps().last().unwrap();
        assert!(last.matrix().iter().flatten().all(|&value| value != 0));
        let solution: Grid = SOLVED.parse().unwrap();
        assert_eq!(last.matrix(), solution.to_matrix());
    }

    #[test]
    fn test_steps_are_deduplicated() {
        let grid = blanked(&[(3, 3)]);
        let chronology = Solver::new().solve(&grid);

        for pair in chronology.steps().windows(2) {
            assert_ne!(pair[0].matrix(), pair[1].matrix());
        }
    }

    #[test]
    fn test_deterministic_chronologies() {
        let grid = blanked(&[(0, 0), (4, 4), (8, 8)]);

        let first = Solver::new().solve(&grid);
        let second = Solver::new().solve(&grid);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_grid_stops_at_the_pass_cap() {
        init_logger();
        let grid = Grid::default();

        let chronology = Solver::new().solve(&grid);
        // Nothing is deducible, so only the initial snapshot is recorded.
        assert_eq!(chronology.len(), 1);
    }

    #[test]
    fn test_evidence_can_be_disabled() {
        let grid = blanked(&[(0, 8)]);
        let solver = Solver::with_config(SolverConfig::new().with_evidence(false));

        let chronology = solver.solve(&grid);
        assert_eq!(chronology.len(), 2);
        assert!(chronology.steps()[1].evidence().is_empty());
    }

    #[test]
    fn test_x_wing_can_be_enabled() {
        let solver = Solver::with_config(SolverConfig::new().with_x_wing(true));
        assert!(solver.config().x_wing());

        let chronology = solver.solve(&blanked(&[(0, 0), (4, 4)]));
        let last = chronology.steps().last().unwrap();
        assert!(last.matrix().iter().flatten().all(|&value| value != 0));
    }

    const CLASSIC: &str = "
        5 3 0 0 7 0 0 0 0
        6 0 0 1 9 5 0 0 0
        0 9 8 0 0 0 0 6 0
        8 0 0 0 6 0 0 0 3
        4 0 0 8 0 3 0 0 1
        7 0 0 0 2 0 0 0 6
        0 6 0 0 0 0 2 8 0
        0 0 0 4 1 9 0 0 5
        0 0 0 0 8 0 0 7 9
    ";

    const CLASSIC_SOLUTION: &str = "
        5 3 4 6 7 8 9 1 2
        6 7 2 1 9 5 3 4 8
        1 9 8 3 4 2 5 6 7
        8 5 9 7 6 1 4 2 3
        4 2 6 8 5 3 7 9 1
        7 1 3 9 2 4 8 5 6
        9 6 1 5 3 7 2 8 4
        2 8 7 4 1 9 6 3 5
        3 4 5 2 8 6 1 7 9
    ";

    #[test]
    fn test_solves_classic_puzzle() {
        init_logger();
        let grid: Grid = CLASSIC.parse().unwrap();

        let chronology = Solver::new().solve(&grid);
        // 30 givens, so 51 placements after the initial snapshot.
        assert_eq!(chronology.len(), 52);

        let solution: Grid = CLASSIC_SOLUTION.parse().unwrap();
        let last = chronology.steps().last().unwrap();
        assert_eq!(last.matrix(), solution.to_matrix());
        assert!(last.placement().is_some());
    }

    #[test]
    fn test_hard_puzzle_hits_the_cap_without_conflicts() {
        init_logger();
        // Out of reach of the implemented strategies.
        let grid: Grid = "
            8 0 0 0 0 0 0 0 0
            0 0 3 6 0 0 0 0 0
            0 7 0 0 9 0 2 0 0
            0 5 0 0 0 7 0 0 0
            0 0 0 0 4 5 7 0 0
            0 0 0 1 0 0 0 3 0
            0 0 1 0 0 0 0 6 8
            0 0 8 5 0 0 0 1 0
            0 9 0 0 0 0 4 0 0
        "
        .parse()
        .unwrap();

        let chronology = Solver::new().solve(&grid);
        assert!(!chronology.is_empty());

        let last = chronology.steps().last().unwrap();
        assert!(last.matrix().iter().flatten().any(|&value| value == 0));
        let partial = Grid::from_matrix(last.matrix()).unwrap();
        assert!(!partial.has_conflicts());
    }

    #[test]
    fn test_pass_cap_is_configurable() {
        let solver = Solver::with_config(SolverConfig::new().with_max_passes(1));
        assert_eq!(solver.config().max_passes(), 1);

        let chronology = solver.solve(&blanked(&[(6, 6)]));
        assert_eq!(chronology.len(), 2);
    }
}
