//! Grid coordinates and the four-way move set.
//!
//! `Cell` is `Copy + Ord + Hash` so it can be used as a map key, stored in
//! sorted collections, and compared without ceremony.  Ordering is
//! lexicographic on `(x, y)`; the path search and delivery selection both rely
//! on it for deterministic tie-breaking.

use std::fmt;

/// Hash set of cells used for obstacle lookups.
#[cfg(not(feature = "fx-hash"))]
pub type CellSet = std::collections::HashSet<Cell>;

/// Hash set of cells used for obstacle lookups.
#[cfg(feature = "fx-hash")]
pub type CellSet = rustc_hash::FxHashSet<Cell>;

// ── Cell ──────────────────────────────────────────────────────────────────────

/// A single grid coordinate.  `x` grows to the right, `y` grows downward.
///
/// Coordinates are signed so that stepping off the edge produces a cell that
/// simply fails [`Grid::in_bounds`][crate::Grid::in_bounds] instead of
/// wrapping.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const ORIGIN: Cell = Cell { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan (L1) distance — the exact step count on an empty 4-connected
    /// grid.
    #[inline]
    pub fn manhattan(self, other: Cell) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// The cell one step away in `dir`.  `Direction::Stay` returns `self`.
    #[inline]
    pub fn step(self, dir: Direction) -> Cell {
        let (dx, dy) = dir.delta();
        Cell {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    /// The four orthogonal neighbours, in [`Direction::CARDINAL`] order.
    /// Some may lie outside the grid.
    #[inline]
    pub fn neighbors(self) -> [Cell; 4] {
        Direction::CARDINAL.map(|d| self.step(d))
    }
}

impl From<(i32, i32)> for Cell {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Cell { x, y }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ── Direction ─────────────────────────────────────────────────────────────────

/// A unit move on the grid, plus the null move.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Down,
    Right,
    Up,
    Left,
    Stay,
}

impl Direction {
    /// The four search edges.  No diagonals, no staying in place.
    pub const CARDINAL: [Direction; 4] = [
        Direction::Down,
        Direction::Right,
        Direction::Up,
        Direction::Left,
    ];

    /// Every move an obstacle may attempt in one tick.
    pub const ALL: [Direction; 5] = [
        Direction::Down,
        Direction::Right,
        Direction::Up,
        Direction::Left,
        Direction::Stay,
    ];

    /// `(dx, dy)` for this move.
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Down  => (0, 1),
            Direction::Right => (1, 0),
            Direction::Up    => (0, -1),
            Direction::Left  => (-1, 0),
            Direction::Stay  => (0, 0),
        }
    }
}
