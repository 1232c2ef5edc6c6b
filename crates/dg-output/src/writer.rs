//! The `OutputWriter` trait implemented by trace backends.

use crate::{DeliveryRow, OutputResult, TickRow};

/// A sink for trace rows.
///
/// The observer never sees these errors directly; they are stored and
/// retrieved with [`TraceObserver::take_error`][crate::TraceObserver::take_error].
pub trait OutputWriter {
    /// Write one row describing the state after a tick.
    fn write_tick(&mut self, row: &TickRow) -> OutputResult<()>;

    /// Write one completed delivery.
    fn write_delivery(&mut self, row: &DeliveryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
