//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `occupancy_snapshots.csv`
//! - `ride_events.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;
use log::debug;

use crate::writer::OutputWriter;
use crate::{OccupancySnapshotRow, OutputResult, RideEventRow};

/// Writes park output to two CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    events:    Writer<File>,
    finished:  bool,
}

fn opt<T: ToString>(v: Option<T>) -> String {
    v.map(|v| v.to_string()).unwrap_or_default()
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut snapshots = Writer::from_path(dir.join("occupancy_snapshots.csv"))?;
        snapshots.write_record([
            "report", "elapsed_ms", "rides_remaining", "actor", "actor_id", "state", "rider",
        ])?;

        let mut events = Writer::from_path(dir.join("ride_events.csv"))?;
        events.write_record(["seq", "elapsed_us", "event", "rider", "car", "delay_ms", "count"])?;

        debug!("writing CSV output to {}", dir.display());
        Ok(Self { snapshots, events, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[OccupancySnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.report.to_string(),
                row.elapsed_ms.to_string(),
                row.rides_remaining.to_string(),
                row.actor.to_owned(),
                row.actor_id.to_string(),
                row.state.to_owned(),
                opt(row.rider),
            ])?;
        }
        Ok(())
    }

    fn write_events(&mut self, rows: &[RideEventRow]) -> OutputResult<()> {
        for row in rows {
            self.events.write_record(&[
                row.seq.to_string(),
                row.elapsed_us.to_string(),
                row.event.to_owned(),
                opt(row.rider),
                opt(row.car),
                opt(row.delay_ms),
                opt(row.count),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.events.flush()?;
        Ok(())
    }
}
