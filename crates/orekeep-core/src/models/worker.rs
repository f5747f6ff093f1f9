use chrono::Weekday;
use serde::{Deserialize, Serialize};

use super::shift::WorkShift;

/// Unique identifier for a worker. Decimal string from the registry sequence
/// or carried over from seed data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkerId(pub String);

impl WorkerId {
    pub fn matches(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other)
    }
}

impl std::fmt::Display for WorkerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for WorkerId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A field worker and their weekly schedule.
///
/// The shift list is private: every write path goes through [`Worker::put_shift`]
/// or [`Worker::remove_shift`], so the list never holds two shifts for the
/// same weekday. A weekday slot is therefore either empty or occupied, and
/// putting a shift into an occupied slot replaces it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Worker {
    pub id: WorkerId,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    shifts: Vec<WorkShift>,
}

impl Worker {
    pub fn new(
        id: WorkerId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone: phone.into(),
            shifts: Vec::new(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Current schedule, in insertion order.
    pub fn shifts(&self) -> &[WorkShift] {
        &self.shifts
    }

    /// The shift scheduled for `day`, if any.
    pub fn shift_for(&self, day: Weekday) -> Option<&WorkShift> {
        self.shifts.iter().find(|s| s.day() == day)
    }

    /// Upsert the shift for its weekday. Returns the replaced shift when the
    /// slot was already occupied.
    pub fn put_shift(&mut self, shift: WorkShift) -> Option<WorkShift> {
        match self.shifts.iter().position(|s| s.day() == shift.day()) {
            Some(idx) => Some(std::mem::replace(&mut self.shifts[idx], shift)),
            None => {
                self.shifts.push(shift);
                None
            }
        }
    }

    /// Clear the slot for `day`. Returns whether a shift was removed.
    pub fn remove_shift(&mut self, day: Weekday) -> bool {
        let before = self.shifts.len();
        self.shifts.retain(|s| s.day() != day);
        self.shifts.len() < before
    }

    /// Whether any shift references the given location.
    pub fn works_at(&self, location_id: &str) -> bool {
        self.shifts.iter().any(|s| s.location().matches(location_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::shift::parse_time;
    use chrono::Weekday;

    fn shift(day: Weekday, start: &str, end: &str) -> WorkShift {
        WorkShift::new(
            day,
            parse_time(start).unwrap(),
            parse_time(end).unwrap(),
            "1".into(),
            150.0,
        )
        .unwrap()
    }

    #[test]
    fn put_shift_replaces_same_weekday() {
        let mut w = Worker::new("7".into(), "Astrid", "Berg", "555-0101");
        assert!(w.put_shift(shift(Weekday::Mon, "08:00", "16:00")).is_none());
        let replaced = w.put_shift(shift(Weekday::Mon, "10:00", "18:00"));
        assert!(replaced.is_some());
        assert_eq!(w.shifts().len(), 1);
        assert_eq!(
            w.shift_for(Weekday::Mon).unwrap().start(),
            parse_time("10:00").unwrap()
        );
    }

    #[test]
    fn remove_shift_empties_the_slot() {
        let mut w = Worker::new("7".into(), "Astrid", "Berg", "555-0101");
        w.put_shift(shift(Weekday::Fri, "08:00", "12:00"));
        assert!(w.remove_shift(Weekday::Fri));
        assert!(!w.remove_shift(Weekday::Fri));
        assert!(w.shift_for(Weekday::Fri).is_none());
    }

    #[test]
    fn works_at_scans_shift_locations() {
        let mut w = Worker::new("7".into(), "Astrid", "Berg", "555-0101");
        w.put_shift(shift(Weekday::Tue, "08:00", "16:00"));
        assert!(w.works_at("1"));
        assert!(!w.works_at("2"));
    }
}
