//! Deterministic per-actor RNG wrapper.
//!
//! # Determinism strategy
//!
//! Each actor thread owns its own `SmallRng` seeded by:
//!
//!   seed = global_seed XOR kind_salt XOR (raw_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive ids uniformly across the seed space.  The salt
//! keeps `RiderId(1)` and `CarId(1)` from drawing the same sequence.
//!
//! Delays drawn from these generators are reproducible per actor.  The
//! interleaving of actor threads is not, so a run as a whole is not
//! deterministic; only each actor's own sequence of draws is.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{CarId, RiderId};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Which population an actor belongs to.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActorKind {
    Rider,
    Car,
}

impl ActorKind {
    fn salt(self) -> u64 {
        match self {
            ActorKind::Rider => 0x5249_4445_5200_0000, // "RIDER"
            ActorKind::Car   => 0x4341_5200_0000_0000, // "CAR"
        }
    }
}

/// Per-actor deterministic RNG.
///
/// Created by the park builder and moved into the actor's thread.  The type
/// is `Send` but not shared: each actor holds exactly one.
pub struct ActorRng(SmallRng);

impl ActorRng {
    /// Seed deterministically from the run's global seed and an actor identity.
    pub fn new(global_seed: u64, kind: ActorKind, raw_id: u32) -> Self {
        let seed = global_seed ^ kind.salt() ^ (raw_id as u64).wrapping_mul(MIXING_CONSTANT);
        ActorRng(SmallRng::seed_from_u64(seed))
    }

    pub fn for_rider(global_seed: u64, rider: RiderId) -> Self {
        Self::new(global_seed, ActorKind::Rider, rider.0)
    }

    pub fn for_car(global_seed: u64, car: CarId) -> Self {
        Self::new(global_seed, ActorKind::Car, car.0)
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
