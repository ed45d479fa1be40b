//! Rule-based sudoku solving with a replayable step history.
//!
//! The solver runs a fixed pipeline of human-style deduction strategies
//! over a private copy of a [`Grid`](gradus_core::Grid) and records every
//! value placement as a [`Step`] in a [`Chronology`], so a front end can
//! replay the solve placement by placement with the strategy and evidence
//! cells behind each one.
//!
//! # Examples
//!
//! ```
//! use gradus_core::Grid;
//! use gradus_solver::Solver;
//!
//! let grid: Grid = "
//!     0 2 3 4 5 6 7 8 9
//!     4 5 6 7 8 9 1 2 3
//!     7 8 9 1 2 3 4 5 6
//!     2 3 4 5 6 7 8 9 1
//!     5 6 7 8 9 1 2 3 4
//!     8 9 1 2 3 4 5 6 7
//!     3 4 5 6 7 8 9 1 2
//!     6 7 8 9 1 2 3 4 5
//!     9 1 2 3 4 5 6 7 8
//! "
//! .parse()?;
//!
//! let chronology = Solver::new().solve(&grid);
//! for step in &chronology {
//!     if let Some(placement) = step.placement() {
//!         println!(
//!             "{}: {} at ({}, {})",
//!             step.strategy().unwrap(),
//!             placement.value(),
//!             placement.row(),
//!             placement.col(),
//!         );
//!     }
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod chronology;
pub mod error;
pub mod solver;
pub mod step;
pub mod strategy;
pub mod testing;

pub use self::{
    chronology::Chronology,
    error::SolverError,
    solver::{Solver, SolverConfig},
    step::{Placement, Step},
    strategy::{Evidence, Scope, Strategy},
};
