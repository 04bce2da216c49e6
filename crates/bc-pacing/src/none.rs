//! A zero-delay pacing model.

use std::time::Duration;

use bc_core::{ActorRng, CarId, RiderId};

use crate::Pacing;

/// A [`Pacing`] that never delays.
///
/// Riders rejoin the line the moment they are released and cars unload the
/// moment their ride starts.  Useful in tests, where it drives the protocol
/// through as many interleavings as the scheduler produces.
pub struct NoPacing;

impl Pacing for NoPacing {
    fn wander_delay(&self, _rider: RiderId, _rng: &mut ActorRng) -> Duration {
        Duration::ZERO
    }

    fn bump_delay(&self, _car: CarId, _rng: &mut ActorRng) -> Duration {
        Duration::ZERO
    }
}
