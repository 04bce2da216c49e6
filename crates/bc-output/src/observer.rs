//! `ParkOutputObserver<W>` — bridges `ParkObserver` to an `OutputWriter`.

use bc_park::{ParkObserver, ParkSnapshot, RunSummary};

use crate::row::{OccupancySnapshotRow, RideEventRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`ParkObserver`] that writes every snapshot, then the run's journal, to
/// an [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `ParkObserver`
/// methods have no return value.  After `park.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct ParkOutputObserver<W: OutputWriter> {
    writer:     W,
    reports:    u64,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> ParkOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, reports: 0, last_error: None }
    }

    /// Take the stored write error (if any) after `park.run()` returns.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
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

    fn write_snapshot(&mut self, snapshot: &ParkSnapshot) {
        let rows = OccupancySnapshotRow::from_snapshot(self.reports, snapshot);
        self.reports += 1;
        let result = self.writer.write_snapshots(&rows);
        self.store_err(result);
    }
}

impl<W: OutputWriter> ParkObserver for ParkOutputObserver<W> {
    fn on_start(&mut self, snapshot: &ParkSnapshot) {
        self.write_snapshot(snapshot);
    }

    fn on_report(&mut self, snapshot: &ParkSnapshot) {
        self.write_snapshot(snapshot);
    }

    fn on_finish(&mut self, snapshot: &ParkSnapshot, summary: &RunSummary) {
        self.write_snapshot(snapshot);
        if !summary.events.is_empty() {
            let rows: Vec<RideEventRow> = summary.events.iter().map(RideEventRow::from).collect();
            let result = self.writer.write_events(&rows);
            self.store_err(result);
        }
        let result = self.writer.finish();
        self.store_err(result);
    }
}
