//! Status command implementation

use anyhow::Result;
use orekeep_core::config::OrekeepConfig;
use orekeep_core::seed::SeedSummary;
use orekeep_core::Registries;
use serde::Serialize;

use crate::output::OutputWriter;

#[derive(Serialize)]
struct StatusOutput {
    data_dir: String,
    locations: usize,
    minerals: usize,
    workers: usize,
    seed_skipped: usize,
}

pub fn execute(
    registries: &Registries,
    summary: &SeedSummary,
    config: &OrekeepConfig,
    output: &OutputWriter,
) -> Result<()> {
    let skipped = summary.locations.skipped
        + summary.minerals.skipped
        + summary.workers.skipped
        + summary.shifts.skipped;

    if output.is_json() {
        return output.result(&StatusOutput {
            data_dir: config.data_dir.value.display().to_string(),
            locations: registries.locations.len(),
            minerals: registries.minerals.len(),
            workers: registries.workers.len(),
            seed_skipped: skipped,
        });
    }

    output.section("Registries");
    output.kv("Data dir", config.data_dir.value.display());
    output.kv("Locations", registries.locations.len());
    output.kv("Minerals", registries.minerals.len());
    output.kv("Workers", registries.workers.len());

    output.section("Seed load");
    output.kv("Locations", format!("{} loaded, {} skipped", summary.locations.loaded, summary.locations.skipped));
    output.kv("Minerals", format!("{} loaded, {} skipped", summary.minerals.loaded, summary.minerals.skipped));
    output.kv("Workers", format!("{} loaded, {} skipped", summary.workers.loaded, summary.workers.skipped));
    output.kv("Shifts", format!("{} loaded, {} skipped", summary.shifts.loaded, summary.shifts.skipped));
    if skipped > 0 {
        output.warning(format!("{skipped} seed rows were skipped; see log for details"));
    }
    Ok(())
}
