//! The authoritative sudoku board.
//!
//! [`Grid`] owns all cells of a puzzle plus the [`Topology`] derived once for
//! its size. All mutation flows through grid methods so the cell invariants
//! hold at every moment:
//!
//! - a cell's value is within `0..=size` (`0` = empty);
//! - a non-empty cell has neither candidates nor notes;
//! - an empty cell whose candidate set collapses to a singleton is committed
//!   immediately and its value propagated to all peers.
//!
//! Propagation runs over an explicit worklist: committing a value removes it
//! from every peer's candidate set, and peers that collapse to a singleton
//! are committed and enqueued in turn. The queue draining is the termination
//! condition, so cascades never recurse.

use std::collections::VecDeque;
use std::fmt::{self, Display, Write as _};
use std::str::FromStr;

use crate::{
    Cell, Coordinate, GridError, ParseGridError, Topology, ValueSet,
    topology::integer_sqrt,
};

/// Largest supported grid size (bounded by [`ValueSet`] capacity).
pub const MAX_SIZE: usize = 25;

/// Outcome of a candidate mutation on a [`Grid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateChange {
    /// The candidate set did not change.
    Unchanged,
    /// The candidate set changed without deciding the cell.
    Updated,
    /// The set collapsed to a singleton; the value was committed and
    /// propagated through the cell's peers.
    Committed(u8),
}

impl CandidateChange {
    /// Returns `true` if the mutation committed a value.
    #[inline]
    #[must_use]
    pub const fn is_committed(self) -> bool {
        matches!(self, Self::Committed(_))
    }

    /// Returns `true` if the mutation changed the grid at all.
    #[inline]
    #[must_use]
    pub const fn is_changed(self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

/// A size×size sudoku board with candidate tracking and peer propagation.
///
/// # Examples
///
/// ```
/// use gradus_core::Grid;
///
/// let mut grid = Grid::new(9)?;
/// grid.set_value(0, 0, 5, true)?;
/// assert_eq!(grid.value(0, 0)?, 5);
/// assert!(grid.is_fixed(0, 0)?);
/// assert!(!grid.is_value_allowed(0, 3, 5)?);
/// # Ok::<(), gradus_core::GridError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
    topology: Topology,
}

impl Grid {
    /// The standard puzzle size.
    pub const DEFAULT_SIZE: usize = 9;

    /// Creates an empty grid of the given size.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidSize`] unless `size` is a positive
    /// perfect square no larger than [`MAX_SIZE`].
    pub fn new(size: usize) -> Result<Self, GridError> {
        let box_size = integer_sqrt(size);
        if size == 0 || size > MAX_SIZE || box_size * box_size != size {
            return Err(GridError::InvalidSize { size });
        }
        Ok(Self::with_valid_size(size))
    }

    fn with_valid_size(size: usize) -> Self {
        let cells = (0..size)
            .flat_map(|row| (0..size).map(move |col| Cell::empty(Coordinate::new(row, col))))
            .collect();
        Self {
            size,
            cells,
            topology: Topology::new(size),
        }
    }

    /// Creates a grid from a value matrix; `0` means empty.
    ///
    /// Loaded values are not marked fixed, matching direct user entry. Use
    /// the [`FromStr`] implementation to load clues from the text format.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidSize`] for an unsupported matrix height,
    /// [`GridError::RaggedMatrix`] when a row's width differs from the
    /// height, or [`GridError::InvalidValue`] for an out-of-range value.
    pub fn from_matrix(rows: &[Vec<u8>]) -> Result<Self, GridError> {
        let mut grid = Self::new(rows.len())?;
        for (row, values) in rows.iter().enumerate() {
            if values.len() != grid.size {
                return Err(GridError::RaggedMatrix {
                    row,
                    found: values.len(),
                    expected: grid.size,
                });
            }
            for (col, &value) in values.iter().enumerate() {
                if value != 0 {
                    grid.set_value(row, col, value, false)?;
                }
            }
        }
        Ok(grid)
    }

    /// Returns the grid size.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns the peer topology.
    #[inline]
    #[must_use]
    pub const fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Returns all cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterates over all coordinates in row-major order.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + use<> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Coordinate::new(row, col)))
    }

    /// Returns the set `{1, ..., size}`.
    #[must_use]
    pub fn all_values(&self) -> ValueSet {
        #[expect(clippy::cast_possible_truncation)]
        ValueSet::full_up_to(self.size as u8)
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if row >= self.size || col >= self.size {
            return Err(GridError::OutOfBounds {
                row,
                col,
                size: self.size,
            });
        }
        Ok(row * self.size + col)
    }

    fn check_value(&self, value: u8) -> Result<(), GridError> {
        if usize::from(value) > self.size {
            return Err(GridError::InvalidValue {
                value,
                size: self.size,
            });
        }
        Ok(())
    }

    fn check_note(&self, number: u8) -> Result<(), GridError> {
        if number == 0 || usize::from(number) > self.size {
            return Err(GridError::InvalidNote {
                number,
                size: self.size,
            });
        }
        Ok(())
    }

    /// Returns the cell at the given position.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] for coordinates outside the grid.
    pub fn cell(&self, row: usize, col: usize) -> Result<&Cell, GridError> {
        Ok(&self.cells[self.check_bounds(row, col)?])
    }

    /// Returns the cell at `coordinate`.
    ///
    /// Infallible companion to [`cell`](Self::cell) for callers iterating
    /// coordinates known to be in range.
    ///
    /// # Panics
    ///
    /// Panics if `coordinate` is outside the grid.
    #[must_use]
    pub fn cell_at(&self, coordinate: Coordinate) -> &Cell {
        assert!(
            coordinate.row() < self.size && coordinate.col() < self.size,
            "coordinate {coordinate} out of bounds"
        );
        &self.cells[coordinate.row() * self.size + coordinate.col()]
    }

    /// Returns the value at the given position; `0` means empty.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] for coordinates outside the grid.
    pub fn value(&self, row: usize, col: usize) -> Result<u8, GridError> {
        Ok(self.cell(row, col)?.value())
    }

    /// Returns `true` if the cell holds a puzzle clue.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] for coordinates outside the grid.
    pub fn is_fixed(&self, row: usize, col: usize) -> Result<bool, GridError> {
        Ok(self.cell(row, col)?.is_fixed())
    }

    /// Returns `true` if the cell has no value.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] for coordinates outside the grid.
    pub fn is_cell_empty(&self, row: usize, col: usize) -> Result<bool, GridError> {
        Ok(self.cell(row, col)?.is_empty())
    }

    /// Returns the candidate set of the cell at `coordinate`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] for coordinates outside the grid.
    pub fn candidates_at(&self, coordinate: Coordinate) -> Result<ValueSet, GridError> {
        Ok(self.cell(coordinate.row(), coordinate.col())?.candidates())
    }

    /// Returns the note set of the cell at the given position.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] for coordinates outside the grid.
    pub fn notes_at(&self, row: usize, col: usize) -> Result<ValueSet, GridError> {
        Ok(self.cell(row, col)?.notes())
    }

    /// Sets or clears a cell value.
    ///
    /// A value of `0` clears the cell together with its fixed flag,
    /// candidates and notes. A non-zero value is committed (clearing the
    /// cell's candidates and notes) and then removed from every peer's
    /// candidate set; peers collapsing to a single candidate are committed
    /// and propagated in turn.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] for coordinates outside the grid
    /// and [`GridError::InvalidValue`] for values outside `0..=size`.
    pub fn set_value(
        &mut self,
        row: usize,
        col: usize,
        value: u8,
        fixed: bool,
    ) -> Result<(), GridError> {
        let index = self.check_bounds(row, col)?;
        self.check_value(value)?;
        if value == 0 {
            let cell = &mut self.cells[index];
            cell.value = 0;
            cell.fixed = false;
            cell.candidates.clear();
            cell.notes.clear();
        } else {
            self.commit_and_propagate(Coordinate::new(row, col), value, fixed);
        }
        Ok(())
    }

    /// Clears a non-fixed cell's value and notes; fixed cells are untouched.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] for coordinates outside the grid.
    pub fn clear_value(&mut self, row: usize, col: usize) -> Result<(), GridError> {
        let index = self.check_bounds(row, col)?;
        let cell = &mut self.cells[index];
        if cell.fixed {
            return Ok(());
        }
        cell.value = 0;
        cell.notes.clear();
        Ok(())
    }

    /// Toggles a note number on a non-fixed cell; fixed cells are untouched.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] for coordinates outside the grid
    /// and [`GridError::InvalidNote`] for numbers outside `1..=size`.
    pub fn toggle_note(&mut self, row: usize, col: usize, number: u8) -> Result<(), GridError> {
        let index = self.check_bounds(row, col)?;
        self.check_note(number)?;
        let cell = &mut self.cells[index];
        if cell.fixed {
            return Ok(());
        }
        if !cell.notes.remove(number) {
            cell.notes.insert(number);
        }
        Ok(())
    }

    /// Removes all notes from a cell.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] for coordinates outside the grid.
    pub fn clear_notes(&mut self, row: usize, col: usize) -> Result<(), GridError> {
        let index = self.check_bounds(row, col)?;
        self.cells[index].notes.clear();
        Ok(())
    }

    /// Replaces the candidate set of an empty cell.
    ///
    /// A singleton set commits the value immediately. Cells that already
    /// hold a value are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] for coordinates outside the grid
    /// and [`GridError::InvalidValue`] when the set contains a value above
    /// the grid size.
    pub fn set_candidates(
        &mut self,
        coordinate: Coordinate,
        candidates: ValueSet,
    ) -> Result<CandidateChange, GridError> {
        let index = self.check_bounds(coordinate.row(), coordinate.col())?;
        if let Some(value) = candidates.difference(self.all_values()).iter().next() {
            return Err(GridError::InvalidValue {
                value,
                size: self.size,
            });
        }
        let cell = &mut self.cells[index];
        if !cell.is_empty() || cell.candidates == candidates {
            return Ok(CandidateChange::Unchanged);
        }
        if let Some(found) = candidates.as_single() {
            self.commit_and_propagate(coordinate, found, false);
            return Ok(CandidateChange::Committed(found));
        }
        cell.candidates = candidates;
        Ok(CandidateChange::Updated)
    }

    /// Removes one candidate from an empty cell.
    ///
    /// A set collapsing to a singleton commits the remaining value.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] for coordinates outside the grid
    /// and [`GridError::InvalidValue`] for values outside `1..=size`.
    pub fn remove_candidate(
        &mut self,
        coordinate: Coordinate,
        value: u8,
    ) -> Result<CandidateChange, GridError> {
        let index = self.check_bounds(coordinate.row(), coordinate.col())?;
        if value == 0 {
            return Err(GridError::InvalidValue {
                value,
                size: self.size,
            });
        }
        self.check_value(value)?;
        let cell = &mut self.cells[index];
        if !cell.is_empty() || !cell.candidates.remove(value) {
            return Ok(CandidateChange::Unchanged);
        }
        if let Some(found) = cell.candidates.as_single() {
            self.commit_and_propagate(coordinate, found, false);
            return Ok(CandidateChange::Committed(found));
        }
        Ok(CandidateChange::Updated)
    }

    /// Commits `value` at `start` and drains the propagation worklist.
    ///
    /// Peers with an empty candidate set are skipped: they have not been
    /// seeded yet and carry no information to narrow.
    fn commit_and_propagate(&mut self, start: Coordinate, value: u8, fixed: bool) {
        let size = self.size;
        let cells = &mut self.cells;
        let topology = &self.topology;

        let mut queue = VecDeque::new();
        place(cells, size, start, value, fixed);
        queue.push_back((start, value));

        while let Some((coordinate, value)) = queue.pop_front() {
            for &peer in topology.peers(coordinate) {
                let cell = &mut cells[peer.row() * size + peer.col()];
                if !cell.is_empty() || !cell.candidates.remove(value) {
                    continue;
                }
                if let Some(found) = cell.candidates.as_single() {
                    place(cells, size, peer, found, false);
                    queue.push_back((peer, found));
                }
            }
        }
    }

    /// Returns `true` if placing `value` at the position would not clash
    /// with any peer; `0` is always allowed.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] for coordinates outside the grid
    /// and [`GridError::InvalidValue`] for values above the grid size.
    pub fn is_value_allowed(&self, row: usize, col: usize, value: u8) -> Result<bool, GridError> {
        self.check_bounds(row, col)?;
        self.check_value(value)?;
        if value == 0 {
            return Ok(true);
        }
        let coordinate = Coordinate::new(row, col);
        Ok(self
            .topology
            .peers(coordinate)
            .iter()
            .all(|&peer| self.cells[peer.row() * self.size + peer.col()].value() != value))
    }

    /// Returns `true` if the cell's value clashes with a peer.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] for coordinates outside the grid.
    pub fn is_cell_in_conflict(&self, row: usize, col: usize) -> Result<bool, GridError> {
        let value = self.value(row, col)?;
        if value == 0 {
            return Ok(false);
        }
        Ok(!self.is_value_allowed(row, col, value)?)
    }

    /// Returns `true` if every cell holds a value.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Returns `true` if any cell's value clashes with a peer.
    #[must_use]
    pub fn has_conflicts(&self) -> bool {
        self.cells.iter().any(|cell| {
            cell.value() != 0
                && self
                    .topology
                    .peers(cell.coordinate())
                    .iter()
                    .any(|&peer| self.cells[peer.row() * self.size + peer.col()].value() == cell.value())
        })
    }

    /// Returns `true` if at least one cell holds a value.
    #[must_use]
    pub fn has_any_number(&self) -> bool {
        self.cells.iter().any(|cell| !cell.is_empty())
    }

    /// Returns the values not yet placed in the given row.
    ///
    /// # Panics
    ///
    /// Panics if `row` is outside the grid.
    #[must_use]
    pub fn missing_in_row(&self, row: usize) -> ValueSet {
        assert!(row < self.size, "row {row} out of bounds");
        let mut present = ValueSet::new();
        for col in 0..self.size {
            let value = self.cells[row * self.size + col].value();
            if value != 0 {
                present.insert(value);
            }
        }
        self.all_values().difference(present)
    }

    /// Returns the values not yet placed in the given column.
    ///
    /// # Panics
    ///
    /// Panics if `col` is outside the grid.
    #[must_use]
    pub fn missing_in_col(&self, col: usize) -> ValueSet {
        assert!(col < self.size, "column {col} out of bounds");
        let mut present = ValueSet::new();
        for row in 0..self.size {
            let value = self.cells[row * self.size + col].value();
            if value != 0 {
                present.insert(value);
            }
        }
        self.all_values().difference(present)
    }

    /// Returns the values not yet placed in the box containing `coordinate`.
    ///
    /// # Panics
    ///
    /// Panics if `coordinate` is outside the grid.
    #[must_use]
    pub fn missing_in_box(&self, coordinate: Coordinate) -> ValueSet {
        assert!(
            coordinate.row() < self.size && coordinate.col() < self.size,
            "coordinate {coordinate} out of bounds"
        );
        let mut present = ValueSet::new();
        for &member in self.topology.box_of(coordinate).cells() {
            let value = self.cells[member.row() * self.size + member.col()].value();
            if value != 0 {
                present.insert(value);
            }
        }
        self.all_values().difference(present)
    }

    /// Returns a deep copy of the value matrix.
    #[must_use]
    pub fn to_matrix(&self) -> Vec<Vec<u8>> {
        (0..self.size)
            .map(|row| {
                (0..self.size)
                    .map(|col| self.cells[row * self.size + col].value())
                    .collect()
            })
            .collect()
    }

    /// Renders the grid in the text format: one line per row, values
    /// separated by single spaces, `0` for empty cells.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        for row in 0..self.size {
            for col in 0..self.size {
                if col > 0 {
                    text.push(' ');
                }
                let _ = write!(text, "{}", self.cells[row * self.size + col].value());
            }
            text.push('\n');
        }
        text
    }
}

fn place(cells: &mut [Cell], size: usize, coordinate: Coordinate, value: u8, fixed: bool) {
    let cell = &mut cells[coordinate.row() * size + coordinate.col()];
    cell.value = value;
    cell.fixed = fixed;
    cell.candidates.clear();
    cell.notes.clear();
}

impl Default for Grid {
    /// Creates an empty standard 9×9 grid.
    fn default() -> Self {
        Self::with_valid_size(Self::DEFAULT_SIZE)
    }
}

/// Grids compare equal when all their values match; fixed flags, candidates
/// and notes are ignored.
impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size
            && self
                .cells
                .iter()
                .zip(&other.cells)
                .all(|(a, b)| a.value() == b.value())
    }
}

impl Eq for Grid {}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

/// Parses the text format: one line per row, whitespace-separated values,
/// `0`, `.` or `_` for empty cells. Every non-zero value becomes a fixed
/// clue, matching how saved puzzles are reloaded.
impl FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = Vec::new();
        for (row, line) in s.lines().filter(|line| !line.trim().is_empty()).enumerate() {
            let mut values = Vec::new();
            for token in line.split_whitespace() {
                let value = match token {
                    "." | "_" => 0,
                    _ => token.parse::<u8>().map_err(|_| ParseGridError::InvalidToken {
                        row,
                        token: token.to_owned(),
                    })?,
                };
                values.push(value);
            }
            rows.push(values);
        }
        if rows.is_empty() {
            return Err(ParseGridError::Empty);
        }
        let expected = rows.len();
        let mut grid = Grid::new(expected)?;
        for (row, values) in rows.iter().enumerate() {
            if values.len() != expected {
                return Err(ParseGridError::RowLength {
                    row,
                    found: values.len(),
                    expected,
                });
            }
            for (col, &value) in values.iter().enumerate() {
                if value != 0 {
                    grid.set_value(row, col, value, true)?;
                }
            }
        }
        Ok(grid)
    }
}
