//! Cooperative stop token shared by every actor.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Condvar, Mutex, PoisonError};
use std::time::Duration;

use crate::lock;

/// One-way "the park is closing" flag.
///
/// Requested once, by whichever car completes the final ride.  Actors observe
/// it only at safe points: before getting in line, while queued and not yet
/// served, and while wandering.  Nobody is ever interrupted mid-ride.
///
/// The flag is mirrored in an atomic so that hot-path checks do not touch the
/// mutex; the mutex + condvar pair only exists to wake sleeping wanderers.
#[derive(Default)]
pub struct Shutdown {
    requested: AtomicBool,
    state:     Mutex<bool>,
    wakeup:    Condvar,
}

impl Shutdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise the flag and wake everyone sleeping on it.
    ///
    /// Returns `true` for the call that actually raised it.
    pub fn request(&self) -> bool {
        let mut requested = lock(&self.state);
        if *requested {
            return false;
        }
        *requested = true;
        self.requested.store(true, Ordering::Release);
        self.wakeup.notify_all();
        true
    }

    #[inline]
    pub fn is_requested(&self) -> bool {
        self.requested.load(Ordering::Acquire)
    }

    /// Sleep for `duration`, returning early if shutdown is requested.
    ///
    /// Returns `true` if shutdown was requested before or during the sleep.
    pub fn sleep(&self, duration: Duration) -> bool {
        if duration.is_zero() {
            return self.is_requested();
        }
        let guard = lock(&self.state);
        let (guard, _timeout) = self
            .wakeup
            .wait_timeout_while(guard, duration, |requested| !*requested)
            .unwrap_or_else(PoisonError::into_inner);
        *guard
    }

    /// Block until shutdown is requested.
    pub fn wait(&self) {
        let mut requested = lock(&self.state);
        while !*requested {
            requested = crate::wait(&self.wakeup, requested);
        }
    }
}
