//! Plain data row types written by output backends.

use bc_park::{JournalEntry, ParkEvent, ParkSnapshot};

/// One actor's state in one report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OccupancySnapshotRow {
    /// Report number, from 0 (the start snapshot).
    pub report:          u64,
    pub elapsed_ms:      u64,
    pub rides_remaining: u64,
    /// `"car"` or `"rider"`.
    pub actor:           &'static str,
    pub actor_id:        u32,
    /// `"running"`/`"idle"` for cars, `RiderState::as_str` for riders.
    pub state:           &'static str,
    /// The car's current rider; `None` for idle cars and for rider rows.
    pub rider:           Option<u32>,
}

impl OccupancySnapshotRow {
    /// One row per car followed by one row per rider.
    pub fn from_snapshot(report: u64, snapshot: &ParkSnapshot) -> Vec<Self> {
        let base = Self {
            report,
            elapsed_ms:      snapshot.elapsed.as_millis() as u64,
            rides_remaining: snapshot.rides_remaining,
            actor:           "car",
            actor_id:        0,
            state:           "idle",
            rider:           None,
        };

        let cars = snapshot.cars.iter().enumerate().map(|(i, rider)| Self {
            actor_id: i as u32 + 1,
            state:    if rider.is_some() { "running" } else { "idle" },
            rider:    rider.map(u32::from),
            ..base
        });
        let riders = snapshot.rider_states().map(|(rider, state)| Self {
            actor:    "rider",
            actor_id: rider.into(),
            state:    state.as_str(),
            ..base
        });
        cars.chain(riders).collect()
    }
}

/// One journal entry, flattened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RideEventRow {
    pub seq:        u64,
    pub elapsed_us: u64,
    /// `ParkEvent::kind`.
    pub event:      &'static str,
    pub rider:      Option<u32>,
    pub car:        Option<u32>,
    /// Wander or bump duration, for `wandering` and `bumping`.
    pub delay_ms:   Option<u64>,
    /// Rides remaining for `ride_completed`; rides taken for the exit events.
    pub count:      Option<u64>,
}

impl From<&JournalEntry> for RideEventRow {
    fn from(entry: &JournalEntry) -> Self {
        let e = &entry.event;
        let delay_ms = match *e {
            ParkEvent::Wandering { delay, .. } | ParkEvent::Bumping { delay, .. } => {
                Some(delay.as_millis() as u64)
            }
            _ => None,
        };
        let count = match *e {
            ParkEvent::RideCompleted { remaining, .. } => Some(remaining),
            ParkEvent::RiderExited { rides, .. } | ParkEvent::CarExited { rides, .. } => Some(rides),
            _ => None,
        };
        Self {
            seq:        entry.seq,
            elapsed_us: entry.at.as_micros() as u64,
            event:      e.kind(),
            rider:      e.rider().map(u32::from),
            car:        e.car().map(u32::from),
            delay_ms,
            count,
        }
    }
}
