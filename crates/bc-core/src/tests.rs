//! Unit tests for bc-core primitives.

#[cfg(test)]
mod ids {
    use crate::{CarId, RiderId};

    #[test]
    fn index_roundtrip() {
        let id = RiderId(42);
        assert_eq!(id.index(), 41);
        assert_eq!(RiderId::from_index(41), id);
    }

    #[test]
    fn none_sentinel_is_zero() {
        assert_eq!(RiderId::NONE.0, 0);
        assert_eq!(CarId::default(), CarId::NONE);
        assert!(RiderId::NONE.is_none());
        assert_eq!(RiderId::NONE.some(), None);
        assert_eq!(RiderId(3).some(), Some(RiderId(3)));
    }

    #[test]
    #[should_panic]
    fn index_of_none_panics() {
        let _ = CarId::NONE.index();
    }

    #[test]
    fn all_is_one_based_and_dense() {
        let ids: Vec<_> = RiderId::all(3).collect();
        assert_eq!(ids, [RiderId(1), RiderId(2), RiderId(3)]);
        assert_eq!(CarId::all(0).count(), 0);
    }

    #[test]
    fn display() {
        assert_eq!(RiderId(7).to_string(), "RiderId(7)");
        assert_eq!(CarId(2).to_string(), "CarId(2)");
    }
}

#[cfg(test)]
mod rng {
    use std::time::Duration;

    use crate::{ActorRng, CarId, RiderId};

    #[test]
    fn same_seed_same_sequence() {
        let mut a = ActorRng::for_rider(7, RiderId(3));
        let mut b = ActorRng::for_rider(7, RiderId(3));
        let xs: Vec<u32> = (0..8).map(|_| a.gen_range(0..1_000)).collect();
        let ys: Vec<u32> = (0..8).map(|_| b.gen_range(0..1_000)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn riders_and_cars_with_same_raw_id_differ() {
        let mut rider = ActorRng::for_rider(7, RiderId(1));
        let mut car = ActorRng::for_car(7, CarId(1));
        let xs: Vec<u64> = (0..8).map(|_| rider.gen_range(0..u64::MAX)).collect();
        let ys: Vec<u64> = (0..8).map(|_| car.gen_range(0..u64::MAX)).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn duration_range_stays_in_bounds() {
        let mut rng = ActorRng::for_car(1, CarId(2));
        let max = Duration::from_millis(10);
        for _ in 0..100 {
            assert!(rng.gen_range(Duration::ZERO..max) < max);
        }
    }
}

#[cfg(test)]
mod config {
    use std::time::Duration;

    use crate::ParkConfig;

    #[test]
    fn default_is_the_classic_park() {
        let c = ParkConfig::default();
        assert_eq!(c.riders, 5);
        assert_eq!(c.cars, 2);
        assert_eq!(c.ride_quota, 10);
        assert_eq!(c.line_capacity(), 5);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn zero_riders_rejected() {
        let c = ParkConfig { riders: 0, ..ParkConfig::default() };
        assert!(c.validate().is_err());
    }

    #[test]
    fn zero_cars_rejected() {
        let c = ParkConfig { cars: 0, ..ParkConfig::default() };
        assert!(c.validate().is_err());
    }

    #[test]
    fn zero_report_interval_rejected() {
        let c = ParkConfig { report_interval: Some(Duration::ZERO), ..ParkConfig::default() };
        assert!(c.validate().is_err());
    }

    #[test]
    fn zero_quota_is_valid() {
        let c = ParkConfig { ride_quota: 0, ..ParkConfig::default() };
        assert!(c.validate().is_ok());
    }
}
