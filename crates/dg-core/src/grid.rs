//! The static grid model.
//!
//! A `Grid` is nothing more than its side length: every cell inside the square
//! is legal, everything outside is not.  Obstacles are layered on top by the
//! simulation and never stored here.

use crate::Cell;

/// A square `size × size` grid.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    size: u16,
}

impl Grid {
    #[inline]
    pub const fn new(size: u16) -> Self {
        Self { size }
    }

    /// Side length in cells.
    #[inline]
    pub fn size(&self) -> u16 {
        self.size
    }

    /// Total number of cells (`size²`).
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.size as usize * self.size as usize
    }

    /// `true` iff both coordinates lie in `[0, size)`.
    #[inline]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        let n = self.size as i32;
        (0..n).contains(&cell.x) && (0..n).contains(&cell.y)
    }

    /// Dense row-major index of `cell`, for per-cell `Vec` storage.
    ///
    /// Returns `None` for out-of-bounds cells.
    #[inline]
    pub fn index(&self, cell: Cell) -> Option<usize> {
        if !self.in_bounds(cell) {
            return None;
        }
        Some(cell.y as usize * self.size as usize + cell.x as usize)
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let n = self.size as i32;
        (0..n).flat_map(move |y| (0..n).map(move |x| Cell::new(x, y)))
    }
}
