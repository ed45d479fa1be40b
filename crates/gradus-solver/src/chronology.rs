//! The ordered step history of one solve.

use crate::Step;

/// An ordered, deduplicated sequence of [`Step`]s.
///
/// The first step is always the initial state of the solve. Appending a
/// step whose value matrix equals the previous step's matrix is a no-op,
/// so strategy runs that place nothing leave no trace in the history.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Chronology {
    steps: Vec<Step>,
}

impl Chronology {
    pub(crate) const fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Appends a step unless its matrix repeats the previous step's matrix.
    pub(crate) fn push(&mut self, step: Step) {
        if let Some(last) = self.steps.last()
            && last.matrix() == step.matrix()
        {
            return;
        }
        self.steps.push(step);
    }

    /// Returns the recorded steps in order.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Returns the number of recorded steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if no step has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl<'a> IntoIterator for &'a Chronology {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

#[cfg(test)]
mod tests {
    use gradus_core::Grid;

    use super::*;

    #[test]
    fn test_push_skips_identical_adjacent_matrices() {
        let mut grid = Grid::default();
        let mut chronology = Chronology::new();

        chronology.push(Step::initial(&grid));
        chronology.push(Step::initial(&grid));
        assert_eq!(chronology.len(), 1);

        grid.set_value(0, 0, 3, false).unwrap();
        chronology.push(Step::initial(&grid));
        assert_eq!(chronology.len(), 2);
    }
}
