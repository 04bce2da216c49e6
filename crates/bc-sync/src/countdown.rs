//! `Countdown` — remaining rides before the park closes.
//!
//! # Claims
//!
//! With more than one car, "decrement after every ride" alone would let two
//! cars both start a ride when only one is left, and the second decrement
//! would take the counter below zero.  Cars therefore *claim* a ride before
//! loading a rider:
//!
//! ```text
//! claim()      remaining > claimed  → claimed += 1, go load
//!              remaining == claimed → wait (another car holds the last claims)
//!              remaining == 0       → terminal, the car exits
//!              closed               → the park is shutting down early
//! decrement()  remaining -= 1, claimed -= 1
//! ```
//!
//! Every claim is settled by exactly one decrement, so the run completes
//! exactly `quota` rides and the counter stops at zero.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Condvar, Mutex};

use log::trace;

use crate::{lock, wait};

struct Tally {
    remaining: u64,
    claimed:   u64,
    closed:    bool,
}

/// Shared remaining-ride counter.  Non-increasing; final once it reaches zero.
pub struct Countdown {
    quota:   u64,
    tally:   Mutex<Tally>,
    settled: Condvar,
    /// Lock-free copy of `remaining` for observers.  May lag the real value.
    mirror:  AtomicU64,
}

impl Countdown {
    pub fn new(quota: u64) -> Self {
        Self {
            quota,
            tally:   Mutex::new(Tally { remaining: quota, claimed: 0, closed: false }),
            settled: Condvar::new(),
            mirror:  AtomicU64::new(quota),
        }
    }

    /// Reserve one of the remaining rides for the calling car.
    ///
    /// Returns `false` once the countdown is terminal or closed.  Blocks
    /// while every remaining ride is already claimed by cars still riding.
    pub fn claim(&self) -> bool {
        let mut tally = lock(&self.tally);
        loop {
            if tally.remaining == 0 || tally.closed {
                return false;
            }
            if tally.claimed < tally.remaining {
                tally.claimed += 1;
                trace!("ride claimed ({} of {} remaining)", tally.claimed, tally.remaining);
                return true;
            }
            tally = wait(&self.settled, tally);
        }
    }

    /// Record one completed ride.  Returns the rides still remaining.
    ///
    /// # Panics
    /// Panics if no ride is claimed; only a car that claimed a ride may
    /// complete one.
    pub fn decrement(&self) -> u64 {
        let mut tally = lock(&self.tally);
        assert!(tally.claimed > 0, "countdown decremented without a claimed ride");
        tally.claimed -= 1;
        tally.remaining -= 1;
        self.mirror.store(tally.remaining, Ordering::Relaxed);
        self.settled.notify_all();
        tally.remaining
    }

    /// Refuse all further claims without completing the quota.
    ///
    /// Used when the park shuts down for any reason other than the quota
    /// running out, so cars parked in [`claim`](Self::claim) can leave.
    /// Rides already claimed may still be decremented.
    pub fn close(&self) {
        let mut tally = lock(&self.tally);
        tally.closed = true;
        self.settled.notify_all();
    }

    /// `true` once every ride of the quota has been completed.
    pub fn is_terminal(&self) -> bool {
        lock(&self.tally).remaining == 0
    }

    /// Unsynchronized read for observers.  May be momentarily stale.
    #[inline]
    pub fn remaining(&self) -> u64 {
        self.mirror.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn quota(&self) -> u64 {
        self.quota
    }
}
