//! Property tests for coordinate validation, hardness normalization, and
//! payroll arithmetic.

use chrono::Weekday;
use orekeep_core::models::{parse_time, Mineral, WorkShift, Worker};
use orekeep_core::payroll;
use orekeep_core::registry::LocationRegistry;
use proptest::prelude::*;

proptest! {
    #[test]
    fn any_in_range_coordinates_roundtrip_through_the_registry(
        lat in -90.0f64..=90.0,
        lon in -180.0f64..=180.0,
    ) {
        let mut registry = LocationRegistry::new();
        let added = registry.add("Somewhere", None, lat, lon).unwrap();
        let fetched = registry.get(&added.id.0).unwrap();
        prop_assert_eq!(fetched.latitude, lat);
        prop_assert_eq!(fetched.longitude, lon);
    }

    #[test]
    fn out_of_range_latitude_is_always_rejected(
        lat in prop_oneof![90.0001f64..=1.0e6, -1.0e6f64..=-90.0001],
    ) {
        let mut registry = LocationRegistry::new();
        prop_assert!(registry.add("Somewhere", None, lat, 0.0).is_err());
    }

    #[test]
    fn hardness_bounds_are_always_ordered_after_set(
        a in 1.0f64..=10.0,
        b in 1.0f64..=10.0,
    ) {
        let mut mineral = Mineral::named("Testite");
        mineral.set_hardness(Some(a), Some(b)).unwrap();
        let (min, max) = (mineral.hardness_min().unwrap(), mineral.hardness_max().unwrap());
        prop_assert!(min <= max);
        // And the stored interval contains exactly what [min(a,b), max(a,b)] does.
        prop_assert_eq!(min, a.min(b));
        prop_assert_eq!(max, a.max(b));
    }

    #[test]
    fn weekly_pay_matches_the_direct_formula(
        start_minute in 0i64..(24 * 60 - 1),
        len in 1i64..=8 * 60,
        wage in 0.0f64..=1000.0,
    ) {
        let end_minute = (start_minute + len).min(24 * 60 - 1);
        prop_assume!(end_minute > start_minute);
        let fmt = |m: i64| format!("{}:{:02}", m / 60, m % 60);
        let shift = WorkShift::new(
            Weekday::Mon,
            parse_time(&fmt(start_minute)).unwrap(),
            parse_time(&fmt(end_minute)).unwrap(),
            "1".into(),
            wage,
        )
        .unwrap();
        let mut worker = Worker::new("1".into(), "A", "B", "p");
        worker.put_shift(shift);

        let minutes = (end_minute - start_minute) as f64;
        let expected = ((minutes / 60.0 * wage) * 100.0).round() / 100.0;
        prop_assert_eq!(payroll::weekly_pay(&worker), expected);
    }

    #[test]
    fn monthly_is_weekly_scaled_and_rounded(
        len in 1i64..=10 * 60,
        wage in 0.0f64..=500.0,
    ) {
        let fmt = |m: i64| format!("{}:{:02}", m / 60, m % 60);
        let shift = WorkShift::new(
            Weekday::Tue,
            parse_time("6:00").unwrap(),
            parse_time(&fmt(6 * 60 + len)).unwrap(),
            "1".into(),
            wage,
        )
        .unwrap();
        let mut worker = Worker::new("1".into(), "A", "B", "p");
        worker.put_shift(shift);

        let expected =
            (payroll::weekly_pay(&worker) * payroll::WEEKS_PER_MONTH * 100.0).round() / 100.0;
        prop_assert_eq!(payroll::monthly_pay_typical(&worker), expected);
    }
}
