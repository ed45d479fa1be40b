//! Solver error types.

use derive_more::{Display, Error, From};
use gradus_core::GridError;

/// An error raised while a deduction pass mutates the working grid.
///
/// These never escape [`Solver::solve`](crate::Solver::solve), which logs
/// the error and falls back to a one-step chronology of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum SolverError {
    /// A grid operation failed during a pass.
    #[display("grid operation failed: {source}")]
    Grid {
        /// The underlying grid error.
        source: GridError,
    },
}
