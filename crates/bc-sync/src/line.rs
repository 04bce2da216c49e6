//! `WaitingLine` — bounded circular FIFO of riders waiting for a car.
//!
//! # Layout
//!
//! ```text
//!           head (cars, service lock)
//!             ↓
//! slots: [ 0 | 3 | 1 | 4 | 0 ]      0 = empty slot
//!                          ↑
//!                          tail (riders, insertion lock)
//! ```
//!
//! Riders write at `tail` under the insertion lock; cars read and clear at
//! `head` under the service lock.  The two cursors live behind separate
//! mutexes so a rider getting in line never waits for a car loading, and
//! vice versa.  Slots are atomics because they are the one thing both sides
//! touch: a rider's `Release` store into a slot pairs with the serving car's
//! `Acquire` load.
//!
//! Capacity equals the rider population and every rider is in line at most
//! once, so the line can never overflow.  Both facts are asserted rather
//! than handled.

use std::sync::atomic::{AtomicBool, AtomicU32, AtomicU64, AtomicUsize, Ordering};
use std::sync::{Condvar, Mutex};

use bc_core::{CarId, RiderId};
use log::trace;

use crate::{Seat, Shutdown, lock, wait};

pub struct WaitingLine {
    slots:  Box<[AtomicU32]>,
    /// Per-rider "currently in line" flags, indexed by `RiderId::index()`.
    queued: Box<[AtomicBool]>,
    /// Insertion lock.  Guards the `tail` cursor.
    tail:   Mutex<usize>,
    /// Service lock.  Guards the `head` cursor.
    head:   Mutex<usize>,
    /// Paired with the service lock; notified on every insertion.
    filled: Condvar,
    depth:  AtomicUsize,
    served: AtomicU64,
}

impl WaitingLine {
    /// An empty line with one slot per rider of a population of `capacity`.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "waiting line needs at least one slot");
        Self {
            slots:  (0..capacity).map(|_| AtomicU32::new(0)).collect(),
            queued: (0..capacity).map(|_| AtomicBool::new(false)).collect(),
            tail:   Mutex::new(0),
            head:   Mutex::new(0),
            filled: Condvar::new(),
            depth:  AtomicUsize::new(0),
            served: AtomicU64::new(0),
        }
    }

    /// Put `rider` at the back of the line.
    ///
    /// # Panics
    /// Panics if `rider` is outside the population, is already in line, or
    /// the slot at `tail` is still occupied.
    pub fn enqueue(&self, rider: RiderId) {
        let already = self.queued[rider.index()].swap(true, Ordering::AcqRel);
        assert!(!already, "{rider} got in line twice");

        {
            let mut tail = lock(&self.tail);
            let slot = &self.slots[*tail];
            let occupant = slot.load(Ordering::Acquire);
            assert_eq!(occupant, 0, "waiting line overflow: slot {} still holds RiderId({occupant})", *tail);

            // Counted before the store so a car can never decrement first.
            let depth = self.depth.fetch_add(1, Ordering::AcqRel) + 1;
            assert!(depth <= self.slots.len(), "waiting line holds {depth} riders, capacity {}", self.slots.len());

            slot.store(rider.0, Ordering::Release);
            trace!("{rider} stored in slot {}", *tail);
            *tail = (*tail + 1) % self.slots.len();
        }

        // Passing through the service lock orders the slot store before any
        // car's next look at `head`, so a car that just found the line empty
        // is guaranteed to be parked on `filled` and receive this notify.
        drop(lock(&self.head));
        self.filled.notify_one();
    }

    /// Serve the front rider if there is one, without blocking on an empty
    /// line.
    ///
    /// The rider is recorded in `seat` before the service lock is released.
    /// The caller must then open that rider's seat gate.
    pub fn try_serve(&self, car: CarId, seat: &Seat) -> Option<RiderId> {
        let mut head = lock(&self.head);
        self.take_head(&mut head, car, seat)
    }

    /// Serve the front rider, waiting for one to arrive.
    ///
    /// Returns `None` once `shutdown` is requested, even if riders are still
    /// in line: a rider woken by shutdown has already left its gate and would
    /// never start the ride.
    pub fn serve(&self, car: CarId, seat: &Seat, shutdown: &Shutdown) -> Option<RiderId> {
        let mut head = lock(&self.head);
        loop {
            if shutdown.is_requested() {
                return None;
            }
            if let Some(rider) = self.take_head(&mut head, car, seat) {
                return Some(rider);
            }
            head = wait(&self.filled, head);
        }
    }

    /// Wake every car parked in [`serve`](Self::serve) so it can observe
    /// shutdown.
    pub fn interrupt(&self) {
        drop(lock(&self.head));
        self.filled.notify_all();
    }

    /// Called with the service lock held.
    fn take_head(&self, head: &mut usize, car: CarId, seat: &Seat) -> Option<RiderId> {
        let slot = &self.slots[*head];
        let rider = RiderId(slot.load(Ordering::Acquire)).some()?;

        slot.store(0, Ordering::Release);
        trace!("{car} took {rider} from slot {}", *head);
        *head = (*head + 1) % self.slots.len();
        self.depth.fetch_sub(1, Ordering::AcqRel);
        self.served.fetch_add(1, Ordering::Relaxed);

        // Out of the line before into the seat: never in both at once.
        self.queued[rider.index()].store(false, Ordering::Release);
        seat.assign(rider);
        Some(rider)
    }

    /// Riders currently in line.  Never exceeds [`capacity`](Self::capacity).
    #[inline]
    pub fn len(&self) -> usize {
        self.depth.load(Ordering::Acquire)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Whether `rider` is in line right now.
    #[inline]
    pub fn contains(&self, rider: RiderId) -> bool {
        self.queued[rider.index()].load(Ordering::Acquire)
    }

    /// Total riders served since the line was created.
    #[inline]
    pub fn served(&self) -> u64 {
        self.served.load(Ordering::Relaxed)
    }
}
