//! `Seat` — the rider currently aboard one car.

use std::sync::atomic::{AtomicU32, Ordering};

use bc_core::RiderId;

/// One car's `current_rider` cell.
///
/// Written only by its own car: [`assign`](Self::assign) while that car
/// holds the line's service lock, [`clear`](Self::clear) at unload.  Read by
/// observers without synchronization.
#[derive(Default)]
pub struct Seat(AtomicU32);

impl Seat {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put `rider` in the seat.
    ///
    /// # Panics
    /// Panics if the seat is already taken.
    pub fn assign(&self, rider: RiderId) {
        let previous = self.0.swap(rider.0, Ordering::AcqRel);
        assert_eq!(previous, 0, "seat already holds RiderId({previous}) while boarding {rider}");
    }

    /// Empty the seat, returning who was in it.
    pub fn clear(&self) -> Option<RiderId> {
        RiderId(self.0.swap(0, Ordering::AcqRel)).some()
    }

    /// Who is aboard right now, as far as an unsynchronized reader can tell.
    #[inline]
    pub fn rider(&self) -> Option<RiderId> {
        RiderId(self.0.load(Ordering::Relaxed)).some()
    }
}
