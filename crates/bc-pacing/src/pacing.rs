//! The `Pacing` trait — the timing source for actor delays.

use std::time::Duration;

use bc_core::{ActorRng, CarId, RiderId};

/// Pluggable delay model.
///
/// Each actor thread calls into the same shared model with its own
/// [`ActorRng`], so draws are reproducible per actor regardless of thread
/// interleaving.
///
/// # Thread safety
///
/// One instance is shared by every rider and car thread, so implementations
/// must be `Send + Sync`.  Per-actor state belongs in the `ActorRng`, not in
/// the model.
///
/// # Example
///
/// ```rust,ignore
/// struct FixedPacing(Duration);
///
/// impl Pacing for FixedPacing {
///     fn wander_delay(&self, _rider: RiderId, _rng: &mut ActorRng) -> Duration { self.0 }
///     fn bump_delay(&self, _car: CarId, _rng: &mut ActorRng) -> Duration { self.0 }
/// }
/// ```
pub trait Pacing: Send + Sync + 'static {
    /// How long `rider` wanders the park before getting in line.
    fn wander_delay(&self, rider: RiderId, rng: &mut ActorRng) -> Duration;

    /// How long `car` bumps around once its ride has started.
    fn bump_delay(&self, car: CarId, rng: &mut ActorRng) -> Duration;
}
