//! The deduction strategies.
//!
//! Each strategy is a pure pass over a [`Grid`]: it narrows candidate sets
//! through the grid's mutation methods (so singleton collapses commit and
//! cascade immediately) and returns an [`Evidence`] map explaining every
//! placement it caused. The [`Strategy`] enum is the closed set of available
//! passes; [`Strategy::DEFAULT_PASS`] is the order the solver runs them in.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{self, Display};

use gradus_core::{Coordinate, Grid};

use crate::SolverError;

mod basic;
mod box_line;
mod groups;
mod hidden_couple;
mod naked_couple;
mod naked_trio;
mod possible_values;
mod x_wing;

/// Explanation cells per placement: maps each coordinate a strategy filled
/// to the set of cells justifying the deduction.
///
/// Placements missing from the map (for example cascaded propagation
/// commits) default to highlighting just the placed cell.
pub type Evidence = BTreeMap<Coordinate, BTreeSet<Coordinate>>;

/// Whether a strategy runs once per unsolved cell or once over the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Applied to each unsolved cell in row-major order.
    Cell,
    /// Applied to the whole grid in one invocation.
    Grid,
}

/// One of the available deduction passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Candidate intersection against the missing values of the cell's row,
    /// column and box.
    Basic,
    /// Unique-home placement: a candidate no other cell of a house can hold.
    PossibleValues,
    /// Box-line reduction: a candidate confined to one slice of a box is
    /// removed from the rest of the crossing line.
    BoxLine,
    /// Naked triples within a row, column or box.
    NakedTrio,
    /// Naked pairs within a row, column or box.
    NakedCouple,
    /// Hidden pairs within a row, column or box.
    HiddenCouple,
    /// The two-rows-by-two-columns rectangle elimination.
    XWing,
}

impl Strategy {
    /// Every available strategy, easiest first.
    pub const ALL: [Self; 7] = [
        Self::Basic,
        Self::PossibleValues,
        Self::BoxLine,
        Self::NakedTrio,
        Self::NakedCouple,
        Self::HiddenCouple,
        Self::XWing,
    ];

    /// The fixed order one solver pass applies by default. X-Wing is
    /// available but opt-in via
    /// [`SolverConfig::with_x_wing`](crate::SolverConfig::with_x_wing).
    pub const DEFAULT_PASS: [Self; 6] = [
        Self::Basic,
        Self::PossibleValues,
        Self::BoxLine,
        Self::NakedTrio,
        Self::NakedCouple,
        Self::HiddenCouple,
    ];

    /// Returns the strategy's display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::PossibleValues => "Possible Values",
            Self::BoxLine => "Box Line",
            Self::NakedTrio => "Naked Trio",
            Self::NakedCouple => "Naked Couple",
            Self::HiddenCouple => "Hidden Couple",
            Self::XWing => "X-Wing",
        }
    }

    /// Returns whether the strategy is cell-scoped or grid-scoped.
    #[must_use]
    pub const fn scope(self) -> Scope {
        match self {
            Self::Basic | Self::PossibleValues => Scope::Cell,
            Self::BoxLine
            | Self::NakedTrio
            | Self::NakedCouple
            | Self::HiddenCouple
            | Self::XWing => Scope::Grid,
        }
    }

    /// Runs the strategy over the whole grid.
    ///
    /// Cell-scoped strategies are applied to every unsolved cell in
    /// row-major order; their evidence maps are merged.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Grid`] if a candidate mutation fails.
    pub fn apply(self, grid: &mut Grid) -> Result<Evidence, SolverError> {
        match self.scope() {
            Scope::Cell => {
                let mut evidence = Evidence::new();
                for coordinate in grid.coordinates() {
                    if grid.cell_at(coordinate).is_empty() {
                        evidence.extend(self.apply_to_cell(grid, coordinate)?);
                    }
                }
                Ok(evidence)
            }
            Scope::Grid => match self {
                Self::BoxLine => box_line::apply(grid),
                Self::NakedTrio => naked_trio::apply(grid),
                Self::NakedCouple => naked_couple::apply(grid),
                Self::HiddenCouple => hidden_couple::apply(grid),
                Self::XWing => x_wing::apply(grid),
                Self::Basic | Self::PossibleValues => Ok(Evidence::new()),
            },
        }
    }

    /// Runs a cell-scoped strategy on one cell; grid-scoped strategies are
    /// a no-op here.
    pub(crate) fn apply_to_cell(
        self,
        grid: &mut Grid,
        coordinate: Coordinate,
    ) -> Result<Evidence, SolverError> {
        match self {
            Self::Basic => basic::apply(grid, coordinate),
            Self::PossibleValues => possible_values::apply(grid, coordinate),
            Self::BoxLine
            | Self::NakedTrio
            | Self::NakedCouple
            | Self::HiddenCouple
            | Self::XWing => {
                debug_assert!(false, "{} is grid-scoped", self.name());
                Ok(Evidence::new())
            }
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
