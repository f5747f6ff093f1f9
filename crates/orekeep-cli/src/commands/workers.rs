//! Worker inspection commands

use anyhow::Result;
use orekeep_core::payroll;
use orekeep_core::Registries;

use crate::cli::WorkerCommands;
use crate::output::{OutputWriter, ShiftRow, WorkerRow};

pub fn execute(
    command: WorkerCommands,
    registries: &Registries,
    output: &OutputWriter,
) -> Result<()> {
    match command {
        WorkerCommands::List => {
            if output.is_json() {
                return output.result(&registries.workers.all());
            }
            output.section("Workers");
            output.table(
                registries
                    .workers
                    .all()
                    .iter()
                    .map(WorkerRow::from_worker)
                    .collect(),
            );
        }
        WorkerCommands::Show { id } => {
            let Some(worker) = registries.workers.get(&id) else {
                output.error(format!("Worker not found: {id}"));
                return Ok(());
            };
            if output.is_json() {
                return output.result(worker);
            }
            output.section(format!("Worker {} — {}", worker.id, worker.full_name()));
            output.kv("Phone", &worker.phone);
            output.kv("Weekly hours", payroll::weekly_hours(worker));
            output.kv("Weekly pay", payroll::weekly_pay(worker));

            output.section("Schedule");
            let rows = worker
                .shifts()
                .iter()
                .map(|s| {
                    let location = registries
                        .locations
                        .get(&s.location().0)
                        .and_then(|l| l.name.clone())
                        .unwrap_or_else(|| s.location().0.clone());
                    ShiftRow {
                        day: s.day().to_string(),
                        start: s.start().format("%H:%M").to_string(),
                        end: s.end().format("%H:%M").to_string(),
                        location,
                        wage: s.hourly_wage(),
                        hours: s.hours(),
                    }
                })
                .collect();
            output.table(rows);
        }
    }
    Ok(())
}
