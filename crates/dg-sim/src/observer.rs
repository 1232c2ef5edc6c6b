//! Simulation observer trait for progress reporting and data collection.

use dg_core::{Cell, Tick};
use dg_path::Path;

use crate::{ReplanReason, RunSummary, Snapshot, TickOutcome};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] and
/// [`Sim::run_ticks`][crate::Sim::run_ticks] at key points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — delivery printer
///
/// ```rust,ignore
/// struct DeliveryPrinter;
///
/// impl SimObserver for DeliveryPrinter {
///     fn on_delivery(&mut self, tick: Tick, cell: Cell, remaining: usize) {
///         println!("{tick}: delivered at {cell}, {remaining} left");
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before any processing of `tick`.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called when the path was found stale and recomputed this tick.
    ///
    /// `path` is the new path (possibly empty if the target is unreachable).
    fn on_replan(&mut self, _tick: Tick, _reason: ReplanReason, _path: &Path) {}

    /// Called when the agent completes a delivery at `cell`.
    fn on_delivery(&mut self, _tick: Tick, _cell: Cell, _remaining: usize) {}

    /// Called at the end of every tick with the full post-tick state.
    fn on_tick_end(&mut self, _outcome: &TickOutcome, _snapshot: &Snapshot<'_>) {}

    /// Called once when [`Sim::run`][crate::Sim::run] stops.
    fn on_sim_end(&mut self, _summary: &RunSummary) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
