//! Integration tests for the seed-file loaders, using real files in a
//! temporary data directory.

use std::fs;
use std::path::PathBuf;

use chrono::Weekday;
use orekeep_core::config::OrekeepConfig;
use orekeep_core::payroll;
use orekeep_core::seed;
use orekeep_core::Registries;
use tempfile::TempDir;

fn write_seed(dir: &TempDir, name: &str, content: &str) {
    fs::write(dir.path().join(name), content).unwrap();
}

fn config_for(dir: &TempDir) -> OrekeepConfig {
    OrekeepConfig::with_defaults().apply_cli(Some(PathBuf::from(dir.path())))
}

#[test]
fn loads_all_three_files() {
    let dir = TempDir::new().unwrap();
    write_seed(
        &dir,
        "locations.txt",
        "# id  name  description  lat  lon\n\
         1\tKongsberg\tSilver mines\t59,67\t9.65\n\
         2\tRøros\tCopper town\t62.57\t11.38\n",
    );
    write_seed(
        &dir,
        "minerals.txt",
        "Name\tLuster\tColor\tHardness\tFracture\n\
         Quartz\tvitreous\tclear/white\t7\tconchoidal\n\
         Fluorite\tvitreous\tpurple, green\t4-4\tuneven\n",
    );
    write_seed(
        &dir,
        "workers.txt",
        "WORKER\t10\tAstrid\tBerg\t555-0101\n\
         SHIFT\t10\tMON\t8:00\t16:00\tKongsberg\t200\n\
         SHIFT\t10\t3\t12:00\t18:00\t2\t250,5\n",
    );

    let mut registries = Registries::new();
    let summary = seed::load_all(&config_for(&dir), &mut registries).unwrap();

    assert_eq!(summary.locations.loaded, 2);
    assert_eq!(summary.minerals.loaded, 2);
    assert_eq!(summary.workers.loaded, 1);
    assert_eq!(summary.shifts.loaded, 2);

    // Decimal comma parsed, location resolved by name and by id.
    assert_eq!(registries.locations.get("1").unwrap().latitude, 59.67);
    let worker = registries.workers.get("10").unwrap();
    assert_eq!(worker.shifts().len(), 2);
    assert_eq!(
        worker.shift_for(Weekday::Wed).unwrap().hourly_wage(),
        250.5
    );
    // The shift loader linked the worker into both location indexes.
    assert_eq!(registries.locations.workers_at("1").len(), 1);
    assert_eq!(registries.locations.workers_at("2").len(), 1);
}

#[test]
fn malformed_rows_are_skipped_not_fatal() {
    let dir = TempDir::new().unwrap();
    write_seed(
        &dir,
        "locations.txt",
        "1\tKongsberg\tSilver mines\t59.67\t9.65\n\
         2\tNowhere\tBad coords\tnorth\teast\n\
         3\tOffMap\tLatitude too big\t95.0\t0.0\n\
         too few columns\n",
    );
    write_seed(&dir, "minerals.txt", "Opal\twaxy\twhite\tsoft\tconchoidal\n");
    write_seed(
        &dir,
        "workers.txt",
        "WORKER\t1\tAstrid\tBerg\t555-0101\n\
         SHIFT\t1\tMON\t16:00\t08:00\tKongsberg\t200\n\
         SHIFT\t99\tTUE\t08:00\t16:00\tKongsberg\t200\n\
         SHIFT\t1\tWED\t08:00\t16:00\tAtlantis\t200\n",
    );

    let mut registries = Registries::new();
    let summary = seed::load_all(&config_for(&dir), &mut registries).unwrap();

    assert_eq!(summary.locations.loaded, 1);
    assert_eq!(summary.locations.skipped, 3);
    assert_eq!(summary.minerals.loaded, 0);
    assert_eq!(summary.minerals.skipped, 1);
    assert_eq!(summary.workers.loaded, 1);
    // Reversed times, unknown worker, unknown location.
    assert_eq!(summary.shifts.skipped, 3);
    assert!(registries.workers.get("1").unwrap().shifts().is_empty());
}

#[test]
fn later_shift_rows_replace_earlier_ones_for_the_same_day() {
    let dir = TempDir::new().unwrap();
    write_seed(&dir, "locations.txt", "1\tKongsberg\tSilver mines\t59.67\t9.65\n");
    write_seed(&dir, "minerals.txt", "");
    write_seed(
        &dir,
        "workers.txt",
        "WORKER\t1\tAstrid\tBerg\t555-0101\n\
         SHIFT\t1\tMON\t08:00\t16:00\t1\t200\n\
         SHIFT\t1\tMonday\t10:00\t14:00\t1\t300\n",
    );

    let mut registries = Registries::new();
    seed::load_all(&config_for(&dir), &mut registries).unwrap();

    let worker = registries.workers.get("1").unwrap();
    assert_eq!(worker.shifts().len(), 1);
    assert_eq!(worker.shift_for(Weekday::Mon).unwrap().hourly_wage(), 300.0);
    // 4h * 300 = 1200/week.
    assert_eq!(payroll::weekly_pay(worker), 1200.00);
}

#[test]
fn seeded_reversed_hardness_is_stored_normalized() {
    let dir = TempDir::new().unwrap();
    write_seed(&dir, "locations.txt", "");
    write_seed(&dir, "minerals.txt", "Corundum\tadamantine\tred/blue\t9-8\tconchoidal\n");
    write_seed(&dir, "workers.txt", "");

    let mut registries = Registries::new();
    seed::load_all(&config_for(&dir), &mut registries).unwrap();

    let (_, corundum) = registries.minerals.find_by_name("Corundum").unwrap();
    assert_eq!(corundum.hardness_min(), Some(8.0));
    assert_eq!(corundum.hardness_max(), Some(9.0));
}

#[test]
fn missing_seed_files_yield_empty_registries() {
    let dir = TempDir::new().unwrap();
    let mut registries = Registries::new();
    let summary = seed::load_all(&config_for(&dir), &mut registries).unwrap();
    assert_eq!(summary.locations.loaded, 0);
    assert!(registries.locations.is_empty());
    assert!(registries.minerals.is_empty());
    assert!(registries.workers.is_empty());
}
