//! `GateSet` — one binary gate per rider.
//!
//! A car opens `gates[r]`; only rider `r` ever waits on it.  That indexing is
//! what guarantees a release meant for one rider can never wake another.
//! The park keeps two sets: seat gates ("you have a car") and ride-end gates
//! ("your ride is over").

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Condvar, Mutex};

use bc_core::RiderId;
use log::trace;

use crate::{Shutdown, lock, wait};

/// Why a [`GateSet::wait`] returned.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Wake {
    /// The gate was opened and has closed behind the rider.
    Opened,
    /// Shutdown was requested while the gate was still closed.
    Shutdown,
}

#[derive(Default)]
struct Gate {
    open:    Mutex<bool>,
    changed: Condvar,
}

pub struct GateSet {
    name:   &'static str,
    gates:  Box<[Gate]>,
    opened: AtomicU64,
}

impl GateSet {
    /// `riders` closed gates, labelled `name` in log and panic messages.
    pub fn new(name: &'static str, riders: usize) -> Self {
        Self {
            name,
            gates:  (0..riders).map(|_| Gate::default()).collect(),
            opened: AtomicU64::new(0),
        }
    }

    /// Release `rider`'s pending or next [`wait`](Self::wait).
    ///
    /// # Panics
    /// Panics if the gate is already open: each gate is opened at most once
    /// per cycle and the rider closes it by waiting through.
    pub fn open(&self, rider: RiderId) {
        let gate = &self.gates[rider.index()];
        let mut open = lock(&gate.open);
        assert!(!*open, "{} for {rider} opened twice", self.name);
        *open = true;
        self.opened.fetch_add(1, Ordering::Relaxed);
        trace!("{} opened for {rider}", self.name);
        gate.changed.notify_one();
    }

    /// Block `rider` until its gate opens, then close it again.
    ///
    /// An already-open gate wins over shutdown: a rider whose release has
    /// been posted always gets it.
    pub fn wait(&self, rider: RiderId, shutdown: &Shutdown) -> Wake {
        let gate = &self.gates[rider.index()];
        let mut open = lock(&gate.open);
        loop {
            if *open {
                *open = false;
                return Wake::Opened;
            }
            if shutdown.is_requested() {
                return Wake::Shutdown;
            }
            open = wait(&gate.changed, open);
        }
    }

    /// Wake every waiting rider so it can observe shutdown.
    pub fn interrupt(&self) {
        for gate in self.gates.iter() {
            drop(lock(&gate.open));
            gate.changed.notify_all();
        }
    }

    /// Whether `rider`'s gate is open and not yet waited through.
    pub fn is_open(&self, rider: RiderId) -> bool {
        *lock(&self.gates[rider.index()].open)
    }

    /// Total opens across all riders since creation.
    pub fn opened(&self) -> u64 {
        self.opened.load(Ordering::Relaxed)
    }

    pub fn len(&self) -> usize {
        self.gates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}
