//! `TraceObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use dg_sim::{RunSummary, SimObserver, Snapshot, TickOutcome};

use crate::row::{DeliveryRow, TickRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes one row per tick and one row per delivery to
/// any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct TraceObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> TraceObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush the writer without waiting for the sim-end hook.
    ///
    /// Drivers that step with `run_ticks` never reach that hook.
    pub fn finish(&mut self) {
        let result = self.writer.finish();
        self.store_err(result);
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for TraceObserver<W> {
    fn on_tick_end(&mut self, outcome: &TickOutcome, snapshot: &Snapshot<'_>) {
        if let Some(cell) = outcome.delivered {
            let row = DeliveryRow {
                tick:      outcome.tick.0,
                cell,
                remaining: snapshot.deliveries.len(),
                distance:  snapshot.distance_traveled,
            };
            let result = self.writer.write_delivery(&row);
            self.store_err(result);
        }

        let row = TickRow {
            tick:            outcome.tick.0,
            agent:           snapshot.agent,
            target:          snapshot.target,
            path_len:        snapshot.path.len(),
            replanned:       outcome.replanned,
            moved:           outcome.moved,
            distance:        snapshot.distance_traveled,
            deliveries_done: snapshot.deliveries_done,
            remaining:       snapshot.deliveries.len(),
        };
        let result = self.writer.write_tick(&row);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _summary: &RunSummary) {
        self.finish();
    }
}
