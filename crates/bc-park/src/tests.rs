//! Integration tests for bc-park.

use std::collections::{BTreeSet, HashMap};
use std::time::Duration;

use bc_core::{ActorRng, CarId, ParkConfig, RiderId};
use bc_pacing::{NoPacing, Pacing, RandomPacing};

use crate::{
    JournalEntry, NoopObserver, ParkBuilder, ParkError, ParkEvent, ParkObserver, ParkSnapshot,
    RiderState, RunSummary,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn config(riders: usize, cars: usize, quota: u64) -> ParkConfig {
    ParkConfig {
        riders,
        cars,
        ride_quota:      quota,
        max_wander:      Duration::from_millis(2),
        max_bump:        Duration::from_millis(2),
        seed:            7,
        report_interval: None,
        record_events:   true,
    }
}

fn run_with<P: Pacing>(config: ParkConfig, pacing: P) -> RunSummary {
    ParkBuilder::new(config, pacing)
        .build()
        .unwrap()
        .run(&mut NoopObserver)
        .unwrap()
}

fn events_of_rider(events: &[JournalEntry], rider: RiderId) -> Vec<ParkEvent> {
    events
        .iter()
        .map(|e| e.event)
        .filter(|e| match e {
            // Car-side events mention the rider but belong to the car's story.
            ParkEvent::Loaded { .. } | ParkEvent::Unloaded { .. } => false,
            e => e.rider() == Some(rider),
        })
        .collect()
}

fn events_of_car(events: &[JournalEntry], car: CarId) -> Vec<ParkEvent> {
    events.iter().map(|e| e.event).filter(|e| e.car() == Some(car)).collect()
}

// ── ParkBuilder ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn builds_with_default_config() {
        let park = ParkBuilder::new(ParkConfig::default(), NoPacing).build().unwrap();
        assert_eq!(park.config().riders, 5);
        assert_eq!(park.config().cars, 2);
    }

    #[test]
    fn zero_riders_rejected() {
        let result = ParkBuilder::new(config(0, 2, 4), NoPacing).build();
        assert!(matches!(result, Err(ParkError::Config(_))));
    }

    #[test]
    fn zero_cars_rejected() {
        let result = ParkBuilder::new(config(3, 0, 4), NoPacing).build();
        assert!(matches!(result, Err(ParkError::Config(_))));
    }

    #[test]
    fn overrides_replace_config_values() {
        let park = ParkBuilder::new(config(3, 1, 4), NoPacing)
            .record_events(false)
            .report_interval(Some(Duration::from_millis(5)))
            .build()
            .unwrap();
        assert!(!park.config().record_events);
        assert_eq!(park.config().report_interval, Some(Duration::from_millis(5)));
    }

    #[test]
    fn fresh_park_is_idle() {
        let park = ParkBuilder::new(config(4, 3, 9), NoPacing).build().unwrap();
        let snap = park.snapshot();
        assert_eq!(snap.rides_remaining, 9);
        assert_eq!(snap.line_len, 0);
        assert_eq!(snap.cars, vec![None; 3]);
        assert_eq!(snap.count(RiderState::Wandering), 4);
        assert_eq!(snap.running_cars().count(), 0);
    }
}

// ── Termination ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod termination_tests {
    use super::*;

    #[test]
    fn exactly_quota_rides_for_any_rider_count() {
        for riders in [1, 2, 5] {
            let summary = run_with(config(riders, 2, 4), NoPacing);
            assert_eq!(summary.rides_completed, 4, "riders = {riders}");
            assert_eq!(summary.rides_remaining, 0, "riders = {riders}");
            assert_eq!(summary.rides_per_car.iter().sum::<u64>(), 4);
            assert_eq!(summary.rides_per_rider.iter().sum::<u64>(), 4);
            assert_eq!(summary.rides_per_rider.len(), riders);
        }
    }

    #[test]
    fn zero_quota_closes_without_loading() {
        let summary = run_with(config(3, 2, 0), NoPacing);
        assert_eq!(summary.rides_completed, 0);
        assert_eq!(summary.rides_per_rider, vec![0; 3]);
        assert_eq!(summary.start_signals, 0);
        assert!(
            summary.events.iter().all(|e| !matches!(e.event, ParkEvent::Loaded { .. })),
            "no car may load with a zero quota"
        );
    }

    #[test]
    fn more_cars_than_riders() {
        let summary = run_with(config(2, 5, 12), NoPacing);
        assert_eq!(summary.rides_completed, 12);
        assert_eq!(summary.rides_remaining, 0);
    }

    #[test]
    fn random_pacing_completes_the_quota() {
        let cfg = config(6, 3, 25);
        let pacing = RandomPacing::from_config(&cfg);
        let summary = run_with(cfg, pacing);
        assert_eq!(summary.rides_completed, 25);
        assert_eq!(summary.rides_remaining, 0);
    }

    #[test]
    fn every_start_signal_is_consumed() {
        let summary = run_with(config(5, 2, 30), NoPacing);
        assert_eq!(summary.start_signals, 30);
        assert_eq!(summary.starts_consumed, 30);
    }
}

// ── Journal ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod journal_tests {
    use super::*;

    #[test]
    fn riders_follow_the_protocol_in_order() {
        let summary = run_with(config(4, 2, 20), NoPacing);

        for rider in RiderId::all(4) {
            let events = events_of_rider(&summary.events, rider);
            let (exit, cycle) = events.split_last().unwrap();
            assert!(
                matches!(exit, ParkEvent::RiderExited { rider: r, .. } if *r == rider),
                "{rider} must end with an exit, got {exit:?}"
            );

            // Wandering (Enqueued Seated StartSignaled RideOver Wandering)* and
            // possibly one cut-short cycle before the exit.
            let expected = ["wandering", "enqueued", "seated", "start_signaled", "ride_over"];
            for (i, e) in cycle.iter().enumerate() {
                assert_eq!(e.kind(), expected[i % expected.len()], "{rider} step {i}");
            }

            let rides = cycle.iter().filter(|e| matches!(e, ParkEvent::RideOver { .. })).count();
            assert_eq!(summary.rides_per_rider[rider.index()], rides as u64);
            assert!(matches!(exit, ParkEvent::RiderExited { rides: n, .. } if *n == rides as u64));
        }
    }

    #[test]
    fn cars_follow_the_protocol_in_order() {
        let summary = run_with(config(4, 2, 20), NoPacing);

        for car in CarId::all(2) {
            let events = events_of_car(&summary.events, car);
            let (exit, cycle) = events.split_last().unwrap();
            assert!(matches!(exit, ParkEvent::CarExited { .. }));

            let expected = ["loaded", "bumping", "unloaded", "ride_completed"];
            assert_eq!(cycle.len() % expected.len(), 0, "{car} ended mid-ride");
            for (i, e) in cycle.iter().enumerate() {
                assert_eq!(e.kind(), expected[i % expected.len()], "{car} step {i}");
            }
            assert_eq!(
                (cycle.len() / expected.len()) as u64,
                summary.rides_per_car[car.index()]
            );
        }
    }

    #[test]
    fn countdown_visits_every_value_once() {
        let summary = run_with(config(3, 3, 15), NoPacing);
        let remaining: Vec<u64> = summary
            .events
            .iter()
            .filter_map(|e| match e.event {
                ParkEvent::RideCompleted { remaining, .. } => Some(remaining),
                _ => None,
            })
            .collect();
        assert_eq!(remaining.len(), 15);
        let distinct: BTreeSet<u64> = remaining.into_iter().collect();
        assert_eq!(distinct, (0..15).collect());
    }

    #[test]
    fn no_rider_is_loaded_into_two_cars_at_once() {
        let summary = run_with(config(3, 4, 40), NoPacing);
        let mut aboard: HashMap<RiderId, CarId> = HashMap::new();
        for entry in &summary.events {
            match entry.event {
                ParkEvent::Loaded { car, rider } => {
                    if let Some(other) = aboard.insert(rider, car) {
                        panic!("{rider} loaded into {car} while still in {other}");
                    }
                }
                ParkEvent::Unloaded { car, rider } => {
                    assert_eq!(aboard.remove(&rider), Some(car));
                }
                _ => {}
            }
        }
        assert!(aboard.is_empty());
    }

    #[test]
    fn sequence_numbers_are_dense() {
        let summary = run_with(config(2, 1, 5), NoPacing);
        for (i, entry) in summary.events.iter().enumerate() {
            assert_eq!(entry.seq, i as u64);
        }
    }

    #[test]
    fn disabled_journal_stays_empty() {
        let mut cfg = config(2, 1, 5);
        cfg.record_events = false;
        let summary = run_with(cfg, NoPacing);
        assert!(summary.events.is_empty());
        assert_eq!(summary.rides_completed, 5);
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use super::*;

    #[derive(Default)]
    struct Counting {
        starts:   usize,
        reports:  usize,
        finishes: usize,
        final_snapshot: Option<ParkSnapshot>,
        rides:    u64,
    }

    impl ParkObserver for Counting {
        fn on_start(&mut self, _: &ParkSnapshot) {
            self.starts += 1;
        }

        fn on_report(&mut self, snapshot: &ParkSnapshot) {
            assert!(snapshot.line_len <= snapshot.riders.len());
            self.reports += 1;
        }

        fn on_finish(&mut self, snapshot: &ParkSnapshot, summary: &RunSummary) {
            self.finishes += 1;
            self.final_snapshot = Some(snapshot.clone());
            self.rides = summary.rides_completed;
        }
    }

    #[test]
    fn hooks_fire_around_the_run() {
        let mut obs = Counting::default();
        let cfg = config(4, 2, 10);
        let pacing = RandomPacing::from_config(&cfg);
        ParkBuilder::new(cfg, pacing)
            .report_interval(Some(Duration::from_millis(1)))
            .build()
            .unwrap()
            .run(&mut obs)
            .unwrap();

        assert_eq!(obs.starts, 1);
        assert_eq!(obs.finishes, 1);
        assert_eq!(obs.rides, 10);

        // Every actor has been joined: the final view is exact.
        let snap = obs.final_snapshot.unwrap();
        assert_eq!(snap.rides_remaining, 0);
        assert_eq!(snap.running_cars().count(), 0);
        assert_eq!(snap.count(RiderState::Wandering), 4);
    }

    #[test]
    fn pair_drives_both_observers() {
        let mut pair = (Counting::default(), Counting::default());
        ParkBuilder::new(config(2, 1, 3), NoPacing)
            .build()
            .unwrap()
            .run(&mut pair)
            .unwrap();
        assert_eq!((pair.0.starts, pair.0.finishes), (1, 1));
        assert_eq!((pair.1.starts, pair.1.finishes), (1, 1));
        assert_eq!(pair.0.rides, 3);
        assert_eq!(pair.1.rides, 3);
    }
}

// ── Failure ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod failure_tests {
    use super::*;

    /// Car 1 breaks down on its first ride.
    struct Breakdown;

    impl Pacing for Breakdown {
        fn wander_delay(&self, _: RiderId, _: &mut ActorRng) -> Duration {
            Duration::ZERO
        }

        fn bump_delay(&self, car: CarId, _: &mut ActorRng) -> Duration {
            if car == CarId(1) {
                panic!("bump motor failure");
            }
            Duration::ZERO
        }
    }

    #[test]
    fn panicking_car_closes_the_park() {
        let result = ParkBuilder::new(config(3, 2, 1_000), Breakdown)
            .build()
            .unwrap()
            .run(&mut NoopObserver);

        match result {
            Err(ParkError::ActorPanicked { what, message }) => {
                assert_eq!(what, "car-1");
                assert_eq!(message, "bump motor failure");
            }
            other => panic!("expected a panicked car, got {other:?}"),
        }
    }
}
