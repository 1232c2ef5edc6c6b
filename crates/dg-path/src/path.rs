//! The `Path` value handed from the path finder to the simulation.

use std::collections::VecDeque;

use dg_core::Cell;

/// Ordered cells from the step *after* the agent's position up to and
/// including the goal.
///
/// The simulation consumes it from the front one cell per tick, so at any
/// moment the path holds only the unconsumed remainder.  An empty path means
/// "no route known".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    cells: VecDeque<Cell>,
}

impl Path {
    /// The "no route" path.
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of steps still to take.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The next cell to step onto, without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<Cell> {
        self.cells.front().copied()
    }

    /// Consume and return the next step.
    #[inline]
    pub fn next_step(&mut self) -> Option<Cell> {
        self.cells.pop_front()
    }

    /// The final cell of the path.
    #[inline]
    pub fn goal(&self) -> Option<Cell> {
        self.cells.back().copied()
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// Drop all remaining steps.
    #[inline]
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// `true` if the path can no longer be followed as-is: it is empty, or a
    /// moving obstacle now occupies one of its remaining cells (goal
    /// included).
    ///
    /// Static obstacles are not checked; a path computed around them stays
    /// valid for the rest of the run.
    pub fn is_stale(&self, moving_obstacles: &[Cell]) -> bool {
        self.is_empty() || moving_obstacles.iter().any(|&o| self.contains(o))
    }
}

impl FromIterator<Cell> for Path {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self { cells: iter.into_iter().collect() }
    }
}

impl From<Vec<Cell>> for Path {
    fn from(cells: Vec<Cell>) -> Self {
        Self { cells: cells.into() }
    }
}
