//! `RideStartBarrier` — counting signal from seated riders to cars.
//!
//! Each boarded rider calls [`signal`](RideStartBarrier::signal) once; each
//! car calls [`consume`](RideStartBarrier::consume) once before bumping.
//! The barrier is shared by all cars, so a car may consume the signal of the
//! rider another car just boarded.  That is harmless only because bumping
//! does not depend on who is aboard; a rider-dependent ride would need one
//! barrier per car.

use std::sync::{Condvar, Mutex};

use crate::{Shutdown, lock, wait};

#[derive(Default)]
struct Counts {
    available: u64,
    signaled:  u64,
    consumed:  u64,
}

#[derive(Default)]
pub struct RideStartBarrier {
    counts: Mutex<Counts>,
    posted: Condvar,
}

impl RideStartBarrier {
    pub fn new() -> Self {
        Self::default()
    }

    /// A seated rider announces that its ride may begin.
    pub fn signal(&self) {
        let mut counts = lock(&self.counts);
        counts.available += 1;
        counts.signaled += 1;
        self.posted.notify_one();
    }

    /// A car waits for one start signal and takes it.
    ///
    /// Returns `false` if shutdown is requested while no signal is banked.
    /// A banked signal wins over shutdown.
    pub fn consume(&self, shutdown: &Shutdown) -> bool {
        let mut counts = lock(&self.counts);
        while counts.available == 0 {
            if shutdown.is_requested() {
                return false;
            }
            counts = wait(&self.posted, counts);
        }
        counts.available -= 1;
        counts.consumed += 1;
        debug_assert!(counts.consumed <= counts.signaled);
        true
    }

    /// Wake every car parked in [`consume`](Self::consume) so it can observe
    /// shutdown.
    pub fn interrupt(&self) {
        drop(lock(&self.counts));
        self.posted.notify_all();
    }

    /// Signals posted but not yet consumed.
    pub fn available(&self) -> u64 {
        lock(&self.counts).available
    }

    pub fn signaled(&self) -> u64 {
        lock(&self.counts).signaled
    }

    pub fn consumed(&self) -> u64 {
        lock(&self.counts).consumed
    }
}
