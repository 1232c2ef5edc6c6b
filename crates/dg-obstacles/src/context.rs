//! Read-only simulation state passed to every motion callback.

use dg_core::{Cell, CellSet, Grid};
use dg_delivery::DeliveryPoints;

/// The pre-tick state every obstacle decides against.
///
/// Built once per tick by dg-sim and shared immutably across all obstacles, so
/// no obstacle sees another's move from the same tick.
pub struct MotionContext<'a> {
    pub grid: Grid,

    /// Permanently blocked cells.
    pub static_obstacles: &'a CellSet,

    /// Undelivered targets.  Obstacles never step onto these.
    pub deliveries: &'a DeliveryPoints,

    /// The agent's cell at the start of the tick.
    pub agent: Cell,
}

impl<'a> MotionContext<'a> {
    #[inline]
    pub fn new(
        grid:             Grid,
        static_obstacles: &'a CellSet,
        deliveries:       &'a DeliveryPoints,
        agent:            Cell,
    ) -> Self {
        Self { grid, static_obstacles, deliveries, agent }
    }

    /// `true` if a moving obstacle may end the tick on `cell`.
    #[inline]
    pub fn accepts(&self, cell: Cell) -> bool {
        self.grid.in_bounds(cell)
            && !self.static_obstacles.contains(&cell)
            && !self.deliveries.contains(cell)
            && cell != self.agent
    }
}
