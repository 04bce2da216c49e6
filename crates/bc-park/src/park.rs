//! `Park` — spawns the actors, drives the observer, joins everything.

use std::any::Any;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use bc_core::{ActorRng, CarId, ParkConfig, RiderId};
use bc_pacing::Pacing;
use log::{info, warn};

use crate::car::run_car;
use crate::rider::run_rider;
use crate::shared::Shared;
use crate::{ParkError, ParkObserver, ParkResult, ParkSnapshot, RunSummary};

/// A built, not yet started park.  Construct with
/// [`ParkBuilder`][crate::ParkBuilder].
pub struct Park<P: Pacing> {
    pub(crate) config: ParkConfig,
    pub(crate) pacing: Arc<P>,
    pub(crate) shared: Arc<Shared>,
}

impl<P: Pacing> Park<P> {
    pub fn config(&self) -> &ParkConfig {
        &self.config
    }

    /// Current best-effort view of the park.
    pub fn snapshot(&self) -> ParkSnapshot {
        self.shared.snapshot()
    }

    /// Run the park to completion.
    ///
    /// One thread per rider and per car; the calling thread runs the
    /// observer until the park closes, then joins every actor.  Returns once
    /// the quota is spent and every actor has exited.
    ///
    /// # Errors
    /// - [`ParkError::Spawn`] if an actor thread could not be started.  The
    ///   park is closed and the actors already running are joined first.
    /// - [`ParkError::ActorPanicked`] if any actor panicked.  The panicking
    ///   actor closes the park on its way out, so the others still exit.
    pub fn run<O: ParkObserver>(self, observer: &mut O) -> ParkResult<RunSummary> {
        let config = &self.config;
        info!(
            "park opening: {} riders, {} cars, {} rides",
            config.riders, config.cars, config.ride_quota
        );

        let mut riders = Vec::with_capacity(config.riders);
        let mut cars = Vec::with_capacity(config.cars);
        if let Err(e) = self.spawn_all(&mut riders, &mut cars) {
            self.shared.close();
            // Anything that did start must still be joined; its outcome is
            // secondary to the spawn failure.
            let _ = join_all(riders);
            let _ = join_all(cars);
            return Err(e);
        }

        observer.on_start(&self.shared.snapshot());
        match config.report_interval {
            Some(interval) => {
                while !self.shared.shutdown.sleep(interval) {
                    observer.on_report(&self.shared.snapshot());
                }
            }
            None => self.shared.shutdown.wait(),
        }

        let rides_per_rider = join_all(riders);
        let rides_per_car = join_all(cars);
        let rides_per_rider = rides_per_rider?;
        let rides_per_car = rides_per_car?;

        let shared = &self.shared;
        let summary = RunSummary {
            quota:           config.ride_quota,
            rides_completed: rides_per_car.iter().sum(),
            rides_remaining: shared.countdown.remaining(),
            rides_per_car,
            rides_per_rider,
            start_signals:   shared.start.signaled(),
            starts_consumed: shared.start.consumed(),
            left_in_line:    shared.line.len(),
            elapsed:         shared.journal.elapsed(),
            events:          shared.journal.drain(),
        };
        if summary.rides_remaining > 0 {
            warn!("park closed early with {} rides remaining", summary.rides_remaining);
        }
        info!(
            "park closed: {} rides in {:.2?}",
            summary.rides_completed, summary.elapsed
        );

        observer.on_finish(&shared.snapshot(), &summary);
        Ok(summary)
    }

    fn spawn_all(
        &self,
        riders: &mut Vec<(String, JoinHandle<u64>)>,
        cars:   &mut Vec<(String, JoinHandle<u64>)>,
    ) -> ParkResult<()> {
        let seed = self.config.seed;

        for rider in RiderId::all(self.config.riders) {
            let (park, pacing) = (Arc::clone(&self.shared), Arc::clone(&self.pacing));
            let rng = ActorRng::for_rider(seed, rider);
            riders.push(spawn(
                format!("rider-{}", u32::from(rider)),
                move || run_rider(rider, &park, &*pacing, rng),
            )?);
        }
        for car in CarId::all(self.config.cars) {
            let (park, pacing) = (Arc::clone(&self.shared), Arc::clone(&self.pacing));
            let rng = ActorRng::for_car(seed, car);
            cars.push(spawn(
                format!("car-{}", u32::from(car)),
                move || run_car(car, &park, &*pacing, rng),
            )?);
        }
        Ok(())
    }
}

fn spawn<F>(name: String, body: F) -> ParkResult<(String, JoinHandle<u64>)>
where
    F: FnOnce() -> u64 + Send + 'static,
{
    match thread::Builder::new().name(name.clone()).spawn(body) {
        Ok(handle) => Ok((name, handle)),
        Err(source) => Err(ParkError::Spawn { what: name, source }),
    }
}

/// Join every handle, in order.  All are joined even if one panicked; the
/// first panic is reported.
fn join_all(handles: Vec<(String, JoinHandle<u64>)>) -> ParkResult<Vec<u64>> {
    let mut rides = Vec::with_capacity(handles.len());
    let mut first_panic = None;
    for (name, handle) in handles {
        match handle.join() {
            Ok(n) => rides.push(n),
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                warn!("{name} panicked: {message}");
                first_panic.get_or_insert(ParkError::ActorPanicked { what: name, message });
            }
        }
    }
    match first_panic {
        Some(e) => Err(e),
        None => Ok(rides),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_owned()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_owned()
    }
}
