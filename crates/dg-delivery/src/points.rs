//! `DeliveryPoints` — the shrinking set of undelivered targets.
//!
//! Backed by a `BTreeSet` so iteration is always in sorted cell order.  That
//! order is what makes nearest-target tie-breaking reproducible across runs
//! and platforms.

use std::collections::BTreeSet;

use dg_core::Cell;

/// Undelivered target cells.
///
/// Created once at simulation start; elements are only ever removed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeliveryPoints {
    inner: BTreeSet<Cell>,
}

impl DeliveryPoints {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        self.inner.contains(&cell)
    }

    /// Mark `cell` as delivered.  Returns `false` if it was not outstanding.
    #[inline]
    pub fn remove(&mut self, cell: Cell) -> bool {
        self.inner.remove(&cell)
    }

    /// Outstanding targets in ascending cell order.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.inner.iter().copied()
    }
}

impl FromIterator<Cell> for DeliveryPoints {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self { inner: iter.into_iter().collect() }
    }
}
