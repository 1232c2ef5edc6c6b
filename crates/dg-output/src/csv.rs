//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `ticks.csv`
//! - `deliveries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;
use dg_sim::ReplanReason;

use crate::{DeliveryRow, OutputResult, TickRow};
use crate::writer::OutputWriter;

pub const TICK_HEADER: [&str; 11] = [
    "tick", "agent_x", "agent_y", "target_x", "target_y", "path_len",
    "replanned", "moved", "distance", "deliveries_done", "remaining",
];

pub const DELIVERY_HEADER: [&str; 5] = ["tick", "x", "y", "remaining", "distance"];

/// Writes a run trace to two CSV files.
pub struct CsvWriter {
    ticks:      Writer<File>,
    deliveries: Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut ticks = Writer::from_path(dir.join("ticks.csv"))?;
        ticks.write_record(TICK_HEADER)?;

        let mut deliveries = Writer::from_path(dir.join("deliveries.csv"))?;
        deliveries.write_record(DELIVERY_HEADER)?;

        Ok(Self {
            ticks,
            deliveries,
            finished: false,
        })
    }
}

fn reason_label(reason: Option<ReplanReason>) -> &'static str {
    match reason {
        None => "",
        Some(ReplanReason::NoPath) => "no_path",
        Some(ReplanReason::Blocked) => "blocked",
    }
}

impl OutputWriter for CsvWriter {
    fn write_tick(&mut self, row: &TickRow) -> OutputResult<()> {
        let (target_x, target_y) = match row.target {
            Some(t) => (t.x.to_string(), t.y.to_string()),
            None => (String::new(), String::new()),
        };
        self.ticks.write_record(&[
            row.tick.to_string(),
            row.agent.x.to_string(),
            row.agent.y.to_string(),
            target_x,
            target_y,
            row.path_len.to_string(),
            reason_label(row.replanned).to_owned(),
            (row.moved as u8).to_string(),
            row.distance.to_string(),
            row.deliveries_done.to_string(),
            row.remaining.to_string(),
        ])?;
        Ok(())
    }

    fn write_delivery(&mut self, row: &DeliveryRow) -> OutputResult<()> {
        self.deliveries.write_record(&[
            row.tick.to_string(),
            row.cell.x.to_string(),
            row.cell.y.to_string(),
            row.remaining.to_string(),
            row.distance.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.ticks.flush()?;
        self.deliveries.flush()?;
        Ok(())
    }
}
