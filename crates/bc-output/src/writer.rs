//! The `OutputWriter` trait implemented by file backends.

use crate::{OccupancySnapshotRow, OutputResult, RideEventRow};

/// A sink for occupancy snapshots and journal events.
///
/// Errors never reach the park: they are stored by the observer and
/// retrieved with [`ParkOutputObserver::take_error`][crate::ParkOutputObserver::take_error].
pub trait OutputWriter {
    /// Write the rows of one snapshot.
    fn write_snapshots(&mut self, rows: &[OccupancySnapshotRow]) -> OutputResult<()>;

    /// Write journal events, in journal order.
    fn write_events(&mut self, rows: &[RideEventRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
