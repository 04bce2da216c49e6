//! `ParkBoard` — the observable face of the park.
//!
//! Structure-of-Arrays: one rider-state cell per rider and one [`Seat`] per
//! car, indexed by the dense id.  Each cell is written only by the actor it
//! describes; observers read every cell with relaxed loads and must accept
//! a view that is stale or momentarily inconsistent across cells.

use std::sync::atomic::{AtomicU8, Ordering};

use bc_core::{CarId, RiderId};
use bc_sync::Seat;

/// Coarse rider state, for display only.  Correctness never depends on it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum RiderState {
    Wandering = 0,
    Waiting   = 1,
    Riding    = 2,
}

impl RiderState {
    fn from_u8(raw: u8) -> Self {
        match raw {
            1 => RiderState::Waiting,
            2 => RiderState::Riding,
            _ => RiderState::Wandering,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiderState::Wandering => "wandering",
            RiderState::Waiting   => "waiting",
            RiderState::Riding    => "riding",
        }
    }
}

pub struct ParkBoard {
    riders: Box<[AtomicU8]>,
    seats:  Box<[Seat]>,
}

impl ParkBoard {
    /// Every rider wandering, every car empty.
    pub fn new(riders: usize, cars: usize) -> Self {
        Self {
            riders: (0..riders).map(|_| AtomicU8::new(RiderState::Wandering as u8)).collect(),
            seats:  (0..cars).map(|_| Seat::new()).collect(),
        }
    }

    #[inline]
    pub fn set_rider_state(&self, rider: RiderId, state: RiderState) {
        self.riders[rider.index()].store(state as u8, Ordering::Relaxed);
    }

    #[inline]
    pub fn rider_state(&self, rider: RiderId) -> RiderState {
        RiderState::from_u8(self.riders[rider.index()].load(Ordering::Relaxed))
    }

    #[inline]
    pub fn seat(&self, car: CarId) -> &Seat {
        &self.seats[car.index()]
    }

    pub fn rider_count(&self) -> usize {
        self.riders.len()
    }

    pub fn car_count(&self) -> usize {
        self.seats.len()
    }

    /// Every rider's state, indexed by `RiderId::index()`.
    pub fn rider_states(&self) -> Vec<RiderState> {
        self.riders
            .iter()
            .map(|cell| RiderState::from_u8(cell.load(Ordering::Relaxed)))
            .collect()
    }

    /// Every car's current rider, indexed by `CarId::index()`.
    pub fn occupants(&self) -> Vec<Option<RiderId>> {
        self.seats.iter().map(Seat::rider).collect()
    }
}
