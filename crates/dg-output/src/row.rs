//! Plain data row types written by output backends.

use dg_core::Cell;
use dg_sim::ReplanReason;

/// Agent state after one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickRow {
    /// The tick that was just processed.
    pub tick:            u64,
    pub agent:           Cell,
    /// `None` once every delivery is done.
    pub target:          Option<Cell>,
    /// Steps left on the current route.
    pub path_len:        usize,
    pub replanned:       Option<ReplanReason>,
    pub moved:           bool,
    pub distance:        u64,
    pub deliveries_done: u64,
    pub remaining:       usize,
}

/// One completed delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryRow {
    pub tick:      u64,
    pub cell:      Cell,
    /// Deliveries still outstanding after this one.
    pub remaining: usize,
    /// Agent odometer at the moment of delivery.
    pub distance:  u64,
}
