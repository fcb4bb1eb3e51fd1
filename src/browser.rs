//! Cursor-based browsing over an enumerated solution list.
//!
//! A front-end requests the full solution list once and then walks it one
//! placement at a time with "next" and "previous", both of which wrap around
//! the ends of the list. Resetting clears the cursor without discarding the
//! list, so stepping remains usable afterwards.

use crate::board::Placement;

/// Holds a solution list and a cursor into it.
///
/// The cursor is unset when the list is empty or after [`reset`](Self::reset);
/// nothing is selected in that state. Stepping treats an unset cursor as
/// index -1 for the wrap arithmetic, so "next" from the unset state selects
/// the first solution.
#[derive(Clone, Debug)]
pub struct SolutionBrowser {
    solutions: Vec<Placement>,
    index: Option<usize>,
}

impl SolutionBrowser {
    /// Creates a browser over the given solutions. The cursor starts on the
    /// first solution, or unset when the list is empty.
    pub fn new(solutions: Vec<Placement>) -> SolutionBrowser {
        let index = if solutions.is_empty() { None } else { Some(0) };
        SolutionBrowser { solutions, index }
    }

    /// Returns the currently selected placement, if any.
    pub fn current(&self) -> Option<&Placement> {
        self.index.and_then(|index| self.solutions.get(index))
    }

    /// Returns the cursor position, if set.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Returns the number of solutions in the list.
    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    /// Returns the full solution list in search order.
    pub fn solutions(&self) -> &[Placement] {
        &self.solutions
    }

    /// Returns the 1-based display position and the total count. The position
    /// is 0 while the cursor is unset.
    pub fn position(&self) -> (usize, usize) {
        let position = self.index.map(|index| index + 1).unwrap_or(0);
        (position, self.solutions.len())
    }

    /// Advances the cursor by one solution, wrapping past the end of the
    /// list. Does nothing on an empty list.
    pub fn next(&mut self) -> Option<&Placement> {
        self.step(1)
    }

    /// Retreats the cursor by one solution, wrapping before the start of the
    /// list. Does nothing on an empty list.
    pub fn previous(&mut self) -> Option<&Placement> {
        self.step(-1)
    }

    /// Clears the cursor while leaving the solution list intact. No solution
    /// is selected until the next stepping call.
    pub fn reset(&mut self) {
        self.index = None;
    }

    fn step(&mut self, delta: isize) -> Option<&Placement> {
        if self.solutions.is_empty() {
            return None;
        }

        // An unset cursor takes part in the wrap arithmetic as index -1.
        let current = self.index.map(|index| index as isize).unwrap_or(-1);
        let stepped = (current + delta).rem_euclid(self.solutions.len() as isize) as usize;
        self.index = Some(stepped);
        self.solutions.get(stepped)
    }
}
