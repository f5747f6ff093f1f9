//! Worker seed file, line-oriented records:
//!
//! ```text
//! WORKER  id  first  last  phone
//! SHIFT   workerId  day  start  end  locationIdOrName  hourlyWage
//! ```
//!
//! Days parse by number 1-7 or by (prefix of) English name; times as `H:MM`.
//! Shift rows go through the scheduler, so the one-shift-per-weekday rule
//! applies (later rows replace earlier ones for the same day) and each shift's
//! location gets the worker in its index. Rows naming an unknown worker or
//! location are skipped.

use std::path::Path;

use tracing::warn;

use super::{content_lines, parse_decimal, split_columns, LoadStats};
use crate::error::Result;
use crate::models::{parse_time, parse_weekday, WorkShift, Worker, WorkerId};
use crate::registry::{LocationRegistry, WorkerRegistry};

pub fn load(
    path: &Path,
    locations: &mut LocationRegistry,
    workers: &mut WorkerRegistry,
) -> Result<(LoadStats, LoadStats)> {
    let mut worker_stats = LoadStats::default();
    let mut shift_stats = LoadStats::default();
    if !path.exists() {
        warn!(path = %path.display(), "worker seed file missing, nothing loaded");
        return Ok((worker_stats, shift_stats));
    }
    for line in content_lines(path)? {
        let columns = split_columns(&line);
        match columns.first().map(|c| c.to_uppercase()).as_deref() {
            Some("WORKER") => load_worker(&line, &columns, workers, &mut worker_stats),
            Some("SHIFT") => {
                load_shift(&line, &columns, locations, workers, &mut shift_stats)
            }
            _ => {
                warn!(%line, "skipping row: expected WORKER or SHIFT");
                worker_stats.skipped();
            }
        }
    }
    Ok((worker_stats, shift_stats))
}

fn load_worker(line: &str, columns: &[String], workers: &mut WorkerRegistry, stats: &mut LoadStats) {
    if columns.len() < 5 {
        warn!(%line, "skipping WORKER row: expected 5 columns");
        stats.skipped();
        return;
    }
    let id = columns[1].trim();
    if id.is_empty() {
        warn!(%line, "skipping WORKER row: blank id");
        stats.skipped();
        return;
    }
    let worker = Worker::new(
        WorkerId::from(id),
        columns[2].trim(),
        columns[3].trim(),
        columns[4].trim(),
    );
    match workers.add(worker) {
        Ok(()) => stats.loaded(),
        Err(e) => {
            warn!(%line, error = %e, "skipping WORKER row");
            stats.skipped();
        }
    }
}

fn load_shift(
    line: &str,
    columns: &[String],
    locations: &mut LocationRegistry,
    workers: &mut WorkerRegistry,
    stats: &mut LoadStats,
) {
    if columns.len() < 7 {
        warn!(%line, "skipping SHIFT row: expected 7 columns");
        stats.skipped();
        return;
    }
    let worker_id = columns[1].trim();
    let parsed = parse_weekday(&columns[2])
        .and_then(|day| Ok((day, parse_time(&columns[3])?, parse_time(&columns[4])?)));
    let (day, start, end) = match parsed {
        Ok(v) => v,
        Err(e) => {
            warn!(%line, error = %e, "skipping SHIFT row");
            stats.skipped();
            return;
        }
    };
    let Some(wage) = parse_decimal(&columns[6]) else {
        warn!(%line, "skipping SHIFT row: invalid wage");
        stats.skipped();
        return;
    };
    // The location column accepts either an id or a name.
    let Some(location_id) = locations.resolve(columns[5].trim()).map(|l| l.id.clone()) else {
        warn!(%line, "skipping SHIFT row: unknown location");
        stats.skipped();
        return;
    };
    let shift = match WorkShift::new(day, start, end, location_id, wage) {
        Ok(s) => s,
        Err(e) => {
            warn!(%line, error = %e, "skipping SHIFT row");
            stats.skipped();
            return;
        }
    };
    match workers.set_shift(locations, worker_id, shift, true) {
        Ok(_) => stats.loaded(),
        Err(e) => {
            warn!(%line, error = %e, "skipping SHIFT row");
            stats.skipped();
        }
    }
}
