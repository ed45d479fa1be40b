//! Core data model for the Gradus sudoku engine.
//!
//! This crate provides the board state shared by the solver and any front
//! end: [`Grid`] (values, fixed clues, candidates and notes), the peer
//! [`Topology`] of a grid size, and the [`ValueSet`] bitset used for
//! candidates and notes.
//!
//! The grid enforces its invariants on every mutation: committing a value
//! removes it from all peers' candidate sets, and a candidate set that
//! collapses to a single value commits that value in turn. See the
//! [`grid`] module documentation for details.
//!
//! # Examples
//!
//! ```
//! use gradus_core::Grid;
//!
//! let grid: Grid = "
//!     1 0 0 0
//!     0 2 0 0
//!     0 0 3 0
//!     0 0 0 4
//! "
//! .parse()?;
//! assert_eq!(grid.size(), 4);
//! assert!(grid.is_fixed(0, 0)?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cell;
pub mod coordinate;
pub mod error;
pub mod grid;
pub mod topology;
pub mod value_set;

pub use self::{
    cell::Cell,
    coordinate::Coordinate,
    error::{GridError, ParseGridError},
    grid::{CandidateChange, Grid},
    topology::{BoxRegion, Slice, Topology},
    value_set::ValueSet,
};
