//! Optional record of every protocol step.
//!
//! Entries are appended in the order their actors reach the recording point,
//! and every recording point sits where it is causally ordered with its
//! counterpart in the other actor:
//!
//! ```text
//! rider                         car
//! Enqueued      ── line ──→     Loaded
//! Seated        ←─ seat gate ── (after Loaded)
//! StartSignaled ── barrier ──→  Bumping
//! RideOver      ←─ end gate ──  Unloaded
//!                               RideCompleted
//! ```
//!
//! So for any single rider its events appear in protocol order.  Ordering
//! *between* riders in the journal says nothing about line order.

use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

use bc_core::{CarId, RiderId};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ParkEvent {
    Wandering     { rider: RiderId, delay: Duration },
    Enqueued      { rider: RiderId },
    Seated        { rider: RiderId },
    StartSignaled { rider: RiderId },
    RideOver      { rider: RiderId },
    RiderExited   { rider: RiderId, rides: u64 },
    Loaded        { car: CarId, rider: RiderId },
    Bumping       { car: CarId, delay: Duration },
    Unloaded      { car: CarId, rider: RiderId },
    RideCompleted { car: CarId, remaining: u64 },
    CarExited     { car: CarId, rides: u64 },
}

impl ParkEvent {
    /// Short stable label, used as the `event` column of CSV output.
    pub fn kind(&self) -> &'static str {
        match self {
            ParkEvent::Wandering { .. }     => "wandering",
            ParkEvent::Enqueued { .. }      => "enqueued",
            ParkEvent::Seated { .. }        => "seated",
            ParkEvent::StartSignaled { .. } => "start_signaled",
            ParkEvent::RideOver { .. }      => "ride_over",
            ParkEvent::RiderExited { .. }   => "rider_exited",
            ParkEvent::Loaded { .. }        => "loaded",
            ParkEvent::Bumping { .. }       => "bumping",
            ParkEvent::Unloaded { .. }      => "unloaded",
            ParkEvent::RideCompleted { .. } => "ride_completed",
            ParkEvent::CarExited { .. }     => "car_exited",
        }
    }

    pub fn rider(&self) -> Option<RiderId> {
        match *self {
            ParkEvent::Wandering { rider, .. }
            | ParkEvent::Enqueued { rider }
            | ParkEvent::Seated { rider }
            | ParkEvent::StartSignaled { rider }
            | ParkEvent::RideOver { rider }
            | ParkEvent::RiderExited { rider, .. }
            | ParkEvent::Loaded { rider, .. }
            | ParkEvent::Unloaded { rider, .. } => Some(rider),
            _ => None,
        }
    }

    pub fn car(&self) -> Option<CarId> {
        match *self {
            ParkEvent::Loaded { car, .. }
            | ParkEvent::Bumping { car, .. }
            | ParkEvent::Unloaded { car, .. }
            | ParkEvent::RideCompleted { car, .. }
            | ParkEvent::CarExited { car, .. } => Some(car),
            _ => None,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct JournalEntry {
    /// Position in the journal, from 0.
    pub seq:   u64,
    /// Time since the park opened.
    pub at:    Duration,
    pub event: ParkEvent,
}

pub struct Journal {
    enabled: bool,
    opened:  Instant,
    entries: Mutex<Vec<JournalEntry>>,
}

impl Journal {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            opened:  Instant::now(),
            entries: Mutex::new(Vec::new()),
        }
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Append `event`.  A no-op when the journal is disabled.
    pub fn record(&self, event: ParkEvent) {
        if !self.is_enabled() {
            return;
        }
        let at = self.opened.elapsed();
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        let seq = entries.len() as u64;
        entries.push(JournalEntry { seq, at, event });
    }

    /// Time since the park opened.
    pub fn elapsed(&self) -> Duration {
        self.opened.elapsed()
    }

    /// Take every entry recorded so far, leaving the journal empty.
    pub fn drain(&self) -> Vec<JournalEntry> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::take(&mut *entries)
    }
}
