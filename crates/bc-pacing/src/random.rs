//! Uniformly random delays below fixed upper bounds.

use std::time::Duration;

use bc_core::{ActorRng, CarId, ParkConfig, RiderId};

use crate::Pacing;

/// Draws each wander delay uniformly from `[0, max_wander)` and each bump
/// delay from `[0, max_bump)`.  A zero bound always yields a zero delay.
#[derive(Clone, Debug)]
pub struct RandomPacing {
    pub max_wander: Duration,
    pub max_bump:   Duration,
}

impl RandomPacing {
    pub fn new(max_wander: Duration, max_bump: Duration) -> Self {
        Self { max_wander, max_bump }
    }

    /// Use the bounds configured for the run.
    pub fn from_config(config: &ParkConfig) -> Self {
        Self::new(config.max_wander, config.max_bump)
    }
}

fn draw_below(max: Duration, rng: &mut ActorRng) -> Duration {
    if max.is_zero() {
        Duration::ZERO
    } else {
        rng.gen_range(Duration::ZERO..max)
    }
}

impl Pacing for RandomPacing {
    fn wander_delay(&self, _rider: RiderId, rng: &mut ActorRng) -> Duration {
        draw_below(self.max_wander, rng)
    }

    fn bump_delay(&self, _car: CarId, rng: &mut ActorRng) -> Duration {
        draw_below(self.max_bump, rng)
    }
}
