//! Integration tests for cross-registry scheduling and payroll, driven
//! through the `Registries` facade the way a UI would drive it.

use chrono::Weekday;
use orekeep_core::error::{ErrorClass, OrekeepError};
use orekeep_core::models::{parse_time, Mineral, WorkShift};
use orekeep_core::payroll;
use orekeep_core::Registries;

fn shift(day: Weekday, start: &str, end: &str, location: &str, wage: f64) -> WorkShift {
    WorkShift::new(
        day,
        parse_time(start).unwrap(),
        parse_time(end).unwrap(),
        location.into(),
        wage,
    )
    .unwrap()
}

fn seeded() -> Registries {
    let mut reg = Registries::new();
    reg.locations
        .add("Kongsberg", Some("Silver mines".into()), 59.67, 9.65)
        .unwrap();
    reg.locations.add("Røros", None, 62.57, 11.38).unwrap();
    reg.workers.create("Astrid", "Berg", "555-0101");
    reg.workers.create("Ole", "Vik", "555-0102");
    reg
}

#[test]
fn full_week_payroll_for_one_worker() {
    let mut reg = seeded();
    reg.set_shift("1", shift(Weekday::Mon, "08:00", "16:00", "1", 200.0), true)
        .unwrap();
    reg.set_shift("1", shift(Weekday::Wed, "12:00", "18:00", "2", 250.0), true)
        .unwrap();

    let worker = reg.workers.get("1").unwrap();
    assert_eq!(payroll::weekly_hours(worker), 14.0);
    // 8h * 200 + 6h * 250 = 3100
    assert_eq!(payroll::weekly_pay(worker), 3100.00);
    assert_eq!(payroll::monthly_pay_typical(worker), 13433.33);
}

#[test]
fn replacing_a_day_keeps_exactly_the_second_shift() {
    let mut reg = seeded();
    reg.set_shift("1", shift(Weekday::Mon, "08:00", "16:00", "1", 200.0), true)
        .unwrap();
    reg.set_shift("1", shift(Weekday::Mon, "10:00", "14:00", "2", 300.0), true)
        .unwrap();

    let worker = reg.workers.get("1").unwrap();
    assert_eq!(worker.shifts().len(), 1);
    let monday = worker.shift_for(Weekday::Mon).unwrap();
    assert_eq!(monday.location().0, "2");
    assert_eq!(monday.hourly_wage(), 300.0);
}

#[test]
fn refusing_replacement_signals_duplicate_class() {
    let mut reg = seeded();
    reg.set_shift("2", shift(Weekday::Fri, "08:00", "12:00", "1", 180.0), true)
        .unwrap();
    let err = reg
        .set_shift("2", shift(Weekday::Fri, "13:00", "17:00", "1", 180.0), false)
        .unwrap_err();
    assert_eq!(err.class(), ErrorClass::Duplicate);
}

#[test]
fn both_sides_of_the_worker_location_link_agree_after_set() {
    let mut reg = seeded();
    reg.set_shift("1", shift(Weekday::Thu, "08:00", "16:00", "1", 200.0), true)
        .unwrap();

    let derived = reg.workers.workers_at("1");
    assert_eq!(derived.len(), 1);
    assert_eq!(derived[0].id.0, "1");

    let indexed = reg.locations.workers_at("1");
    assert_eq!(indexed.len(), 1);
    assert!(indexed[0].matches("1"));
}

#[test]
fn index_is_additive_only_after_shift_removal() {
    let mut reg = seeded();
    reg.set_shift("1", shift(Weekday::Thu, "08:00", "16:00", "1", 200.0), true)
        .unwrap();
    assert!(reg.workers.remove_shift("1", Weekday::Thu).unwrap());

    // Derived membership is gone; the denormalized index still lists the
    // worker until someone removes them explicitly.
    assert!(reg.workers.workers_at("1").is_empty());
    assert_eq!(reg.locations.workers_at("1").len(), 1);
    assert!(reg.locations.remove_worker_by_id("1", "1").unwrap());
    assert!(reg.locations.workers_at("1").is_empty());
}

#[test]
fn deleting_a_worker_never_reuses_their_id() {
    let mut reg = seeded();
    assert!(reg.workers.delete("2"));
    let next = reg.workers.create("Kari", "Holm", "555-0103");
    assert_eq!(next.id.0, "3");
}

#[test]
fn mineral_linked_at_location_is_the_catalog_record() {
    let mut reg = seeded();
    let id = reg.add_mineral_to("1", Mineral::named("Argentite")).unwrap();

    // Mutate through the catalog; the location's view must already see it.
    reg.minerals
        .update_by_id(id, |m| m.color = vec!["lead-grey".into()])
        .unwrap();
    let at_location = reg.locations.minerals_at(&reg.minerals, "1");
    assert_eq!(at_location.len(), 1);
    assert_eq!(at_location[0].1.color, vec!["lead-grey".to_string()]);
}

#[test]
fn linking_a_catalogued_mineral_at_two_locations_shares_one_record() {
    let mut reg = seeded();
    let id = reg.add_mineral_to("1", Mineral::named("Pyrite")).unwrap();
    reg.link_mineral("2", id).unwrap();

    reg.locations
        .update_mineral_by_name(&mut reg.minerals, "2", "pyrite", |m| {
            m.fracture = Some("uneven".into())
        })
        .unwrap();
    let seen_from_first = reg.locations.minerals_at(&reg.minerals, "1");
    assert_eq!(seen_from_first[0].1.fracture.as_deref(), Some("uneven"));
}

#[test]
fn scheduling_against_unknown_entities_reports_not_found() {
    let mut reg = seeded();
    let missing_location = reg
        .set_shift("1", shift(Weekday::Mon, "08:00", "16:00", "42", 200.0), true)
        .unwrap_err();
    assert_eq!(missing_location.class(), ErrorClass::NotFound);

    let missing_worker = reg
        .set_shift("42", shift(Weekday::Mon, "08:00", "16:00", "1", 200.0), true)
        .unwrap_err();
    assert!(matches!(missing_worker, OrekeepError::WorkerNotFound { .. }));
}
