//! Fluent builder for constructing a [`Park`].

use std::sync::Arc;
use std::time::Duration;

use bc_core::ParkConfig;
use bc_pacing::Pacing;
use log::debug;

use crate::shared::Shared;
use crate::{Park, ParkResult};

/// Fluent builder for [`Park<P>`].
///
/// # Required inputs
///
/// - [`ParkConfig`] — population, quota, seed, …
/// - `P: Pacing` — how long riders wander and cars bump (e.g.
///   [`bc_pacing::RandomPacing`])
///
/// # Optional overrides
///
/// | Method                  | Default                          |
/// |-------------------------|----------------------------------|
/// | `.record_events(b)`     | `config.record_events`           |
/// | `.report_interval(i)`   | `config.report_interval`         |
///
/// # Example
///
/// ```rust,ignore
/// let pacing = RandomPacing::from_config(&config);
/// let park = ParkBuilder::new(config, pacing)
///     .record_events(true)
///     .build()?;
/// let summary = park.run(&mut NoopObserver)?;
/// ```
pub struct ParkBuilder<P: Pacing> {
    config: ParkConfig,
    pacing: P,
}

impl<P: Pacing> ParkBuilder<P> {
    pub fn new(config: ParkConfig, pacing: P) -> Self {
        Self { config, pacing }
    }

    /// Keep a journal of every protocol step, returned in the run summary.
    pub fn record_events(mut self, record: bool) -> Self {
        self.config.record_events = record;
        self
    }

    /// Override how often the observer gets a snapshot.
    pub fn report_interval(mut self, interval: Option<Duration>) -> Self {
        self.config.report_interval = interval;
        self
    }

    /// Validate the configuration and allocate the shared state.  No thread
    /// is started until [`Park::run`].
    pub fn build(self) -> ParkResult<Park<P>> {
        self.config.validate()?;

        let shared = Shared::new(&self.config);
        debug!(
            "park built: {} riders, {} cars, quota {}, line capacity {}",
            self.config.riders,
            self.config.cars,
            self.config.ride_quota,
            shared.line.capacity()
        );

        Ok(Park {
            config: self.config,
            pacing: Arc::new(self.pacing),
            shared: Arc::new(shared),
        })
    }
}
