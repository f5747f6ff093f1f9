//! Payroll derived from weekly schedules.
//!
//! All figures are rounded half-up to 2 decimals on the scaled integer,
//! once at the end of each calculation rather than per shift. Monthly pay is
//! "typical": weekly pay scaled by the average 52/12 weeks per month, an
//! approximation callers rely on, not a calendar-accurate sum.

use crate::models::{Worker, WorkerId};
use crate::registry::WorkerRegistry;

/// Average number of weeks in a month: 52 weeks / 12 months.
pub const WEEKS_PER_MONTH: f64 = 52.0 / 12.0;

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Total weekly hours over the worker's schedule.
///
/// Each shift satisfies `end > start` by construction; that is asserted here
/// as an internal invariant, not surfaced as a user error.
pub fn weekly_hours(worker: &Worker) -> f64 {
    let mut total = 0.0;
    for shift in worker.shifts() {
        let minutes = shift.minutes();
        debug_assert!(minutes > 0, "shift end must be after start");
        total += minutes as f64 / 60.0;
    }
    round2(total)
}

/// Weekly pay: sum of hours × hourly wage across the schedule.
pub fn weekly_pay(worker: &Worker) -> f64 {
    let mut total = 0.0;
    for shift in worker.shifts() {
        let hours = shift.minutes() as f64 / 60.0;
        total += hours * shift.hourly_wage();
    }
    round2(total)
}

/// Typical monthly pay: weekly pay × 52/12.
pub fn monthly_pay_typical(worker: &Worker) -> f64 {
    round2(weekly_pay(worker) * WEEKS_PER_MONTH)
}

/// Typical monthly paycheck for a single worker id, if registered.
pub fn paycheck_for(workers: &WorkerRegistry, worker_id: &str) -> Option<f64> {
    workers.get(worker_id).map(monthly_pay_typical)
}

/// Typical monthly paychecks for every registered worker, in listing order.
pub fn paychecks_for_all(workers: &WorkerRegistry) -> Vec<(WorkerId, f64)> {
    workers
        .all()
        .iter()
        .map(|w| (w.id.clone(), monthly_pay_typical(w)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{parse_time, WorkShift};
    use chrono::Weekday;

    fn worker_with(shifts: &[(Weekday, &str, &str, f64)]) -> Worker {
        let mut w = Worker::new("1".into(), "Astrid", "Berg", "555-0101");
        for (day, start, end, wage) in shifts {
            w.put_shift(
                WorkShift::new(
                    *day,
                    parse_time(start).unwrap(),
                    parse_time(end).unwrap(),
                    "1".into(),
                    *wage,
                )
                .unwrap(),
            );
        }
        w
    }

    #[test]
    fn single_monday_shift_pays_1600() {
        let w = worker_with(&[(Weekday::Mon, "08:00", "16:00", 200.0)]);
        assert_eq!(weekly_hours(&w), 8.0);
        assert_eq!(weekly_pay(&w), 1600.00);
    }

    #[test]
    fn typical_month_scales_by_52_over_12() {
        let w = worker_with(&[(Weekday::Mon, "08:00", "16:00", 200.0)]);
        assert_eq!(monthly_pay_typical(&w), 6933.33);
    }

    #[test]
    fn weekly_pay_rounds_once_at_the_end() {
        // Two 50-minute shifts at 100/h: exact pay is 166.666..., which must
        // round to 166.67. Per-shift rounding would give 83.33 + 83.33 = 166.66.
        let w = worker_with(&[
            (Weekday::Mon, "09:00", "09:50", 100.0),
            (Weekday::Tue, "09:00", "09:50", 100.0),
        ]);
        assert_eq!(weekly_pay(&w), 166.67);
    }

    #[test]
    fn empty_schedule_pays_nothing() {
        let w = worker_with(&[]);
        assert_eq!(weekly_hours(&w), 0.0);
        assert_eq!(weekly_pay(&w), 0.0);
        assert_eq!(monthly_pay_typical(&w), 0.0);
    }

    #[test]
    fn paychecks_for_all_covers_every_worker() {
        let mut registry = WorkerRegistry::new();
        registry.create("Astrid", "Berg", "555-0101");
        registry.create("Ole", "Vik", "555-0102");
        let checks = paychecks_for_all(&registry);
        assert_eq!(checks.len(), 2);
        assert_eq!(checks[0].0 .0, "1");
        assert!(paycheck_for(&registry, "2").is_some());
        assert!(paycheck_for(&registry, "99").is_none());
    }
}
