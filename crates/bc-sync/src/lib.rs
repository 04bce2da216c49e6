//! `bc-sync` — the synchronization primitives of the bumper-car park.
//!
//! Every shared structure the actors touch lives here as a self-contained
//! type exposing only its protocol operations.  Nothing here knows about
//! threads or actors; `bc-park` wires the pieces together.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                    |
//! |---------------|-------------------------------------------------------------|
//! | [`countdown`] | `Countdown` — remaining-ride counter with ride claims      |
//! | [`line`]      | `WaitingLine` — bounded circular FIFO of rider ids         |
//! | [`seat`]      | `Seat` — one car's current rider                            |
//! | [`gate`]      | `GateSet` — one binary gate per rider, `Wake` outcome       |
//! | [`barrier`]   | `RideStartBarrier` — counting start-of-ride signal          |
//! | [`shutdown`]  | `Shutdown` — cooperative stop token                         |
//!
//! # Lock domains
//!
//! | Lock                     | Guards                              | Taken by      |
//! |--------------------------|-------------------------------------|---------------|
//! | line insertion lock      | `tail` cursor, slot writes          | riders        |
//! | line service lock        | `head` cursor, slot clears, seats   | cars          |
//! | countdown lock           | remaining / claimed rides           | cars, riders  |
//! | one lock per gate        | that gate's open flag               | one car, one rider |
//! | barrier lock             | available start signals             | riders, cars  |
//! | shutdown lock            | the requested flag, for sleepers    | everyone      |
//!
//! No operation holds two of these at once.
//!
//! # Poisoning
//!
//! A panic while a lock is held means an invariant was already broken.
//! Locks are taken through [`lock`] / [`wait`], which recover the guard from
//! a poisoned mutex, so the panic surfaces once, as that actor's join error,
//! instead of cascading into every other actor.

pub mod barrier;
pub mod countdown;
pub mod gate;
pub mod line;
pub mod seat;
pub mod shutdown;


use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};

pub use barrier::RideStartBarrier;
pub use countdown::Countdown;
pub use gate::{GateSet, Wake};
pub use line::WaitingLine;
pub use seat::Seat;
pub use shutdown::Shutdown;

#[inline]
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[inline]
pub(crate) fn wait<'a, T>(cv: &Condvar, guard: MutexGuard<'a, T>) -> MutexGuard<'a, T> {
    cv.wait(guard).unwrap_or_else(PoisonError::into_inner)
}
