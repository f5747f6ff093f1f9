//! Location inspection commands

use anyhow::Result;
use orekeep_core::Registries;

use crate::cli::LocationCommands;
use crate::output::{LocationRow, MineralRow, OutputWriter, WorkerRow};

pub fn execute(
    command: LocationCommands,
    registries: &Registries,
    output: &OutputWriter,
) -> Result<()> {
    match command {
        LocationCommands::List => {
            if output.is_json() {
                return output.result(&registries.locations.all());
            }
            output.section("Locations");
            output.table(
                registries
                    .locations
                    .all()
                    .iter()
                    .map(LocationRow::from_location)
                    .collect(),
            );
        }
        LocationCommands::Show { id } => {
            let Some(location) = registries.locations.get(&id) else {
                output.error(format!("Location not found: {id}"));
                return Ok(());
            };
            if output.is_json() {
                return output.result(location);
            }
            output.section(format!(
                "Location {} — {}",
                location.id,
                location.name.as_deref().unwrap_or("(unnamed)")
            ));
            output.kv("Latitude", location.latitude);
            output.kv("Longitude", location.longitude);
            if let Some(description) = &location.description {
                output.kv("Description", description);
            }

            output.section("Minerals found here");
            output.table(
                registries
                    .locations
                    .minerals_at(&registries.minerals, &id)
                    .iter()
                    .map(|(_, m)| MineralRow::from_mineral(m))
                    .collect(),
            );

            // Derived from current schedules, not the location's own index.
            output.section("Workers scheduled here");
            output.table(
                registries
                    .workers
                    .workers_at(&id)
                    .iter()
                    .map(|w| WorkerRow::from_worker(w))
                    .collect(),
            );
        }
    }
    Ok(())
}
