//! `dg-output` — run traces for the delivery_grid simulator.
//!
//! | Backend | Files created                     |
//! |---------|-----------------------------------|
//! | CSV     | `ticks.csv`, `deliveries.csv`     |
//!
//! Backends implement [`OutputWriter`] and are driven by [`TraceObserver`],
//! which implements `dg_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use dg_output::{CsvWriter, TraceObserver};
//!
//! let writer = CsvWriter::new(Path::new("./trace")).unwrap();
//! let mut obs = TraceObserver::new(writer);
//! sim.run(&mut obs);
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TraceObserver;
pub use row::{DeliveryRow, TickRow};
pub use writer::OutputWriter;
