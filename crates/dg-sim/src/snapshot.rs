//! Read-only view of the simulation for drivers and observers.

use std::fmt;

use dg_core::{Cell, CellSet, Grid, Tick};
use dg_delivery::DeliveryPoints;
use dg_path::Path;

/// Where the agent is in its delivery cycle.
///
/// Derived from state after each tick; never stored as a separate field that
/// could drift.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Phase {
    /// A target is pending but no route to it is known (unreachable for now).
    Planning,
    /// Following a known route toward the target.
    EnRoute,
    /// A delivery was completed on the last tick.
    Arrived,
    /// Every delivery is done.  Only obstacles keep moving.
    Done,
}

/// Everything a presentation layer needs after a tick.
///
/// Borrowed from the [`Sim`][crate::Sim]; nothing here can mutate it.
#[derive(Clone, Copy)]
pub struct Snapshot<'a> {
    /// The next tick to be processed.
    pub tick:               Tick,
    pub grid:               Grid,
    pub agent:              Cell,
    pub target:             Option<Cell>,
    pub path:               &'a Path,
    pub static_obstacles:   &'a CellSet,
    pub moving_obstacles:   &'a [Cell],
    pub deliveries:         &'a DeliveryPoints,
    pub distance_traveled:  u64,
    pub deliveries_done:    u64,
    pub initial_deliveries: u64,
    pub phase:              Phase,
}

impl Snapshot<'_> {
    #[inline]
    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// `true` if `cell` is a static or moving obstacle.
    pub fn is_obstacle(&self, cell: Cell) -> bool {
        self.static_obstacles.contains(&cell) || self.moving_obstacles.contains(&cell)
    }
}

impl fmt::Display for Snapshot<'_> {
    /// The one-line stats banner: `Distance: 12  Deliveries: 2/4`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Distance: {}  Deliveries: {}/{}",
            self.distance_traveled, self.deliveries_done, self.initial_deliveries
        )
    }
}
