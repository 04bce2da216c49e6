//! Park configuration.

use std::time::Duration;

use crate::{BcError, BcResult};

/// Top-level configuration for one park run.
///
/// Typically built in code by the application, or loaded from JSON with the
/// `serde` feature, and passed to the park builder.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParkConfig {
    /// Rider population.  Also the capacity of the waiting line.
    pub riders: usize,

    /// Number of bumper cars.
    pub cars: usize,

    /// Rides to complete before the park closes.  `0` closes it immediately.
    pub ride_quota: u64,

    /// Upper bound (exclusive) of one wandering phase.
    pub max_wander: Duration,

    /// Upper bound (exclusive) of one bumping phase.
    pub max_bump: Duration,

    /// Master RNG seed for per-actor delay draws.
    pub seed: u64,

    /// How often the observer receives an occupancy snapshot.  `None` means
    /// only the start and finish hooks fire.
    pub report_interval: Option<Duration>,

    /// Record every protocol step into the run's event journal.
    pub record_events: bool,
}

impl Default for ParkConfig {
    /// Five riders, two cars, ten rides, wandering under 20 s and bumping
    /// under 4 s, with a status report every second.
    fn default() -> Self {
        Self {
            riders:          5,
            cars:            2,
            ride_quota:      10,
            max_wander:      Duration::from_secs(20),
            max_bump:        Duration::from_secs(4),
            seed:            42,
            report_interval: Some(Duration::from_secs(1)),
            record_events:   false,
        }
    }
}

impl ParkConfig {
    /// Reject configurations the ride protocol cannot run.
    ///
    /// Riders and cars must both be present: with no cars nobody is ever
    /// served, and with no riders a car holding a ride claim waits forever.
    pub fn validate(&self) -> BcResult<()> {
        if self.riders == 0 {
            return Err(BcError::Config("at least one rider is required".into()));
        }
        if self.cars == 0 {
            return Err(BcError::Config("at least one car is required".into()));
        }
        if self.riders > u32::MAX as usize || self.cars > u32::MAX as usize {
            return Err(BcError::Config("population exceeds the id space".into()));
        }
        if self.report_interval.is_some_and(|i| i.is_zero()) {
            return Err(BcError::Config("report interval must be non-zero".into()));
        }
        Ok(())
    }

    /// Capacity of the waiting line: one slot per rider.
    #[inline]
    pub fn line_capacity(&self) -> usize {
        self.riders
    }
}
