//! Worker registry and shift scheduler.
//!
//! Scheduling is the one cross-registry operation: setting a shift validates
//! the referenced location and adds the worker to that location's index. When
//! a multi-threaded host wraps the registries in locks, the location lock is
//! taken before the worker lock, here and everywhere else.

use chrono::Weekday;
use tracing::debug;

use super::locations::LocationRegistry;
use crate::error::{OrekeepError, Result};
use crate::ids::IdSequence;
use crate::models::{Worker, WorkShift, WorkerId};

#[derive(Debug, Default)]
pub struct WorkerRegistry {
    workers: Vec<Worker>,
    ids: IdSequence,
}

impl WorkerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct with an externally created id sequence.
    pub fn with_sequence(ids: IdSequence) -> Self {
        Self {
            workers: Vec::new(),
            ids,
        }
    }

    pub fn len(&self) -> usize {
        self.workers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workers.is_empty()
    }

    /// All workers in listing order.
    pub fn all(&self) -> &[Worker] {
        &self.workers
    }

    pub fn exists(&self, id: &str) -> bool {
        self.workers.iter().any(|w| w.id.matches(id))
    }

    pub fn get(&self, id: &str) -> Option<&Worker> {
        self.workers.iter().find(|w| w.id.matches(id))
    }

    /// Register a new worker with a generated id and an empty schedule.
    pub fn create(&mut self, first_name: &str, last_name: &str, phone: &str) -> Worker {
        let worker = Worker::new(WorkerId(self.ids.next()), first_name, last_name, phone);
        debug!(id = %worker.id, name = %worker.full_name(), "registered worker");
        self.workers.push(worker.clone());
        worker
    }

    /// Add a fully built worker, typically from seed data. Fails when the id
    /// is taken; bumps the id sequence past numeric seeded ids.
    pub fn add(&mut self, worker: Worker) -> Result<()> {
        if self.exists(&worker.id.0) {
            return Err(OrekeepError::DuplicateWorkerId {
                id: worker.id.0.clone(),
            });
        }
        if let Ok(n) = worker.id.0.parse::<u64>() {
            self.ids.bump_past(n);
        }
        self.workers.push(worker);
        Ok(())
    }

    /// Delete by id. Returns whether a worker was removed.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.workers.len();
        self.workers.retain(|w| !w.id.matches(id));
        self.workers.len() < before
    }

    /// Swap in a replacement record for the same id.
    pub fn replace(&mut self, id: &str, new_worker: Worker) -> Result<()> {
        if !new_worker.id.matches(id) {
            return Err(OrekeepError::WorkerIdMismatch {
                expected: id.to_string(),
                actual: new_worker.id.0.clone(),
            });
        }
        let slot = self
            .workers
            .iter_mut()
            .find(|w| w.id.matches(id))
            .ok_or_else(|| OrekeepError::WorkerNotFound { id: id.to_string() })?;
        *slot = new_worker;
        Ok(())
    }

    /// Apply an in-place patch to the worker with the given id.
    pub fn update(&mut self, id: &str, mutate: impl FnOnce(&mut Worker)) -> Result<()> {
        let worker = self
            .workers
            .iter_mut()
            .find(|w| w.id.matches(id))
            .ok_or_else(|| OrekeepError::WorkerNotFound { id: id.to_string() })?;
        mutate(worker);
        Ok(())
    }

    /// Workers with at least one shift at the given location. Computed from
    /// the schedules themselves, so it never drifts the way the location-side
    /// index can.
    pub fn workers_at(&self, location_id: &str) -> Vec<&Worker> {
        self.workers
            .iter()
            .filter(|w| w.works_at(location_id))
            .collect()
    }

    /// Set (upsert) the shift for the shift's weekday.
    ///
    /// The referenced location must exist. An occupied slot is replaced when
    /// `replace_if_exists` is true and reported as [`OrekeepError::ShiftDayTaken`]
    /// otherwise, leaving the existing shift untouched. On success the
    /// location's worker index is updated to include this worker (idempotent).
    /// Returns the replaced shift, if any.
    pub fn set_shift(
        &mut self,
        locations: &mut LocationRegistry,
        worker_id: &str,
        shift: WorkShift,
        replace_if_exists: bool,
    ) -> Result<Option<WorkShift>> {
        let location_id = shift.location().0.clone();
        if locations.get(&location_id).is_none() {
            return Err(OrekeepError::LocationNotFound { id: location_id });
        }
        let worker = self
            .workers
            .iter_mut()
            .find(|w| w.id.matches(worker_id))
            .ok_or_else(|| OrekeepError::WorkerNotFound {
                id: worker_id.to_string(),
            })?;
        if !replace_if_exists && worker.shift_for(shift.day()).is_some() {
            return Err(OrekeepError::ShiftDayTaken { day: shift.day() });
        }
        debug!(worker = %worker.id, day = %shift.day(), location = %location_id, "setting shift");
        let replaced = worker.put_shift(shift);
        let worker_id = worker.id.clone();
        locations.link_worker(&location_id, &worker_id)?;
        Ok(replaced)
    }

    /// Remove the shift for a weekday. Returns whether a shift was removed;
    /// errors when the worker is missing. The location index is deliberately
    /// left alone.
    pub fn remove_shift(&mut self, worker_id: &str, day: Weekday) -> Result<bool> {
        let worker = self
            .workers
            .iter_mut()
            .find(|w| w.id.matches(worker_id))
            .ok_or_else(|| OrekeepError::WorkerNotFound {
                id: worker_id.to_string(),
            })?;
        Ok(worker.remove_shift(day))
    }
}
