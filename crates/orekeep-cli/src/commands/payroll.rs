//! Payroll reporting

use anyhow::Result;
use orekeep_core::payroll;
use orekeep_core::Registries;

use crate::cli::PayrollArgs;
use crate::output::{OutputWriter, PaycheckRow};

pub fn execute(args: PayrollArgs, registries: &Registries, output: &OutputWriter) -> Result<()> {
    let rows: Vec<PaycheckRow> = match args.worker {
        Some(id) => {
            let Some(worker) = registries.workers.get(&id) else {
                output.error(format!("Worker not found: {id}"));
                return Ok(());
            };
            vec![PaycheckRow::from_worker(worker)]
        }
        None => registries
            .workers
            .all()
            .iter()
            .map(PaycheckRow::from_worker)
            .collect(),
    };

    if output.is_json() {
        return output.result(&rows);
    }
    output.section("Typical monthly paychecks (weekly pay × 52/12)");
    let total: f64 = rows.iter().map(|r| r.monthly_pay).sum();
    output.table(rows);
    output.kv("Total", format!("{:.2}", payroll_round(total)));
    Ok(())
}

fn payroll_round(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
