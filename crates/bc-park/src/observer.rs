//! Observer trait for status reporting and data collection.

use std::time::Duration;

use bc_core::{CarId, RiderId};

use crate::{JournalEntry, RiderState};

/// Best-effort occupancy view, assembled from unsynchronized reads.
///
/// Fields are read one after another while actors keep running, so the
/// snapshot may be stale or inconsistent across fields (a rider can briefly
/// appear in two seats, or riding while its car looks empty).  It is for
/// display only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParkSnapshot {
    /// Time since the park opened.
    pub elapsed:         Duration,
    pub rides_remaining: u64,
    /// Current rider of each car, indexed by `CarId::index()`.
    pub cars:            Vec<Option<RiderId>>,
    /// Coarse state of each rider, indexed by `RiderId::index()`.
    pub riders:          Vec<RiderState>,
    /// Riders in the waiting line.
    pub line_len:        usize,
}

impl ParkSnapshot {
    /// `(car, rider)` for every car with someone aboard.
    pub fn running_cars(&self) -> impl Iterator<Item = (CarId, RiderId)> + '_ {
        self.cars
            .iter()
            .enumerate()
            .filter_map(|(i, r)| r.map(|r| (CarId::from_index(i), r)))
    }

    /// `(rider, state)` for every rider.
    pub fn rider_states(&self) -> impl Iterator<Item = (RiderId, RiderState)> + '_ {
        self.riders
            .iter()
            .enumerate()
            .map(|(i, &s)| (RiderId::from_index(i), s))
    }

    pub fn count(&self, state: RiderState) -> usize {
        self.riders.iter().filter(|&&s| s == state).count()
    }
}

/// What a finished run did.  Built after every actor has been joined, so
/// unlike [`ParkSnapshot`] it is exact.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub quota:           u64,
    pub rides_completed: u64,
    pub rides_remaining: u64,
    /// Rides completed by each car, indexed by `CarId::index()`.
    pub rides_per_car:   Vec<u64>,
    /// Rides taken by each rider, indexed by `RiderId::index()`.
    pub rides_per_rider: Vec<u64>,
    pub start_signals:   u64,
    pub starts_consumed: u64,
    /// Riders still standing in line when the park closed.
    pub left_in_line:    usize,
    pub elapsed:         Duration,
    /// Empty unless `ParkConfig::record_events` was set.
    pub events:          Vec<JournalEntry>,
}

/// Callbacks invoked by [`Park::run`][crate::Park::run] on the calling
/// thread while the actors run on their own threads.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct Progress;
///
/// impl ParkObserver for Progress {
///     fn on_report(&mut self, snapshot: &ParkSnapshot) {
///         println!("{} rides left", snapshot.rides_remaining);
///     }
/// }
/// ```
pub trait ParkObserver {
    /// Called once, after every actor thread has been spawned.
    fn on_start(&mut self, _snapshot: &ParkSnapshot) {}

    /// Called every `ParkConfig::report_interval` until the park closes.
    fn on_report(&mut self, _snapshot: &ParkSnapshot) {}

    /// Called once after every actor has been joined.
    fn on_finish(&mut self, _snapshot: &ParkSnapshot, _summary: &RunSummary) {}
}

/// A [`ParkObserver`] that does nothing.
pub struct NoopObserver;

impl ParkObserver for NoopObserver {}

/// Drive two observers from one run, `.0` first.
impl<A: ParkObserver, B: ParkObserver> ParkObserver for (A, B) {
    fn on_start(&mut self, snapshot: &ParkSnapshot) {
        self.0.on_start(snapshot);
        self.1.on_start(snapshot);
    }

    fn on_report(&mut self, snapshot: &ParkSnapshot) {
        self.0.on_report(snapshot);
        self.1.on_report(snapshot);
    }

    fn on_finish(&mut self, snapshot: &ParkSnapshot, summary: &RunSummary) {
        self.0.on_finish(snapshot, summary);
        self.1.on_finish(snapshot, summary);
    }
}
