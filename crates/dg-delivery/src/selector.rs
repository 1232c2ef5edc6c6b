//! Greedy nearest-target selection.

use dg_core::Cell;

use crate::DeliveryPoints;

/// The outstanding delivery closest to `from` by Manhattan distance.
///
/// Ties go to the smallest cell in `(x, y)` order, since that is the first
/// minimum met while iterating `points`.  Returns `None` when nothing is left
/// to deliver; callers check emptiness before asking.
pub fn nearest_target(from: Cell, points: &DeliveryPoints) -> Option<Cell> {
    points.iter().min_by_key(|p| p.manhattan(from))
}
