//! Error types for orekeep

use chrono::{NaiveTime, Weekday};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrekeepError {
    // Lookup errors
    #[error("Location not found: {id}")]
    LocationNotFound { id: String },

    #[error("Worker not found: {id}")]
    WorkerNotFound { id: String },

    #[error("Mineral not found: {name}")]
    MineralNotFound { name: String },

    // Uniqueness errors
    #[error("A location named '{name}' already exists")]
    DuplicateLocationName { name: String },

    #[error("Location id '{id}' is already in use")]
    DuplicateLocationId { id: String },

    #[error("Worker id '{id}' is already in use")]
    DuplicateWorkerId { id: String },

    #[error("Mineral '{name}' is already linked at location {location}")]
    DuplicateMineralAtLocation { name: String, location: String },

    #[error("A shift for {day} is already scheduled")]
    ShiftDayTaken { day: Weekday },

    // Validation errors
    #[error("Latitude {value} outside [-90, 90]")]
    LatitudeOutOfRange { value: f64 },

    #[error("Longitude {value} outside [-180, 180]")]
    LongitudeOutOfRange { value: f64 },

    #[error("Hardness {value} outside the Mohs scale [1, 10]")]
    HardnessOutOfRange { value: f64 },

    #[error("Hourly wage must be non-negative, got {value}")]
    NegativeWage { value: f64 },

    #[error("Shift end {end} must be after start {start}")]
    ShiftEndNotAfterStart { start: NaiveTime, end: NaiveTime },

    #[error("Mineral name is required here")]
    MineralNameRequired,

    #[error("Replacement worker id '{actual}' does not match '{expected}'")]
    WorkerIdMismatch { expected: String, actual: String },

    #[error("Unrecognized weekday: '{input}'")]
    InvalidWeekday { input: String },

    #[error("Invalid time '{input}': expected H:MM")]
    InvalidTime { input: String },

    // Internal invariant errors
    #[error("Mineral index {index} out of bounds (catalog holds {len})")]
    MineralIndexOutOfBounds { index: usize, len: usize },

    #[error("Mineral record {id} missing from the registry arena")]
    MineralRecordMissing { id: u64 },

    // IO errors (seed loading)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse error taxonomy. Callers branch on this when they do not care which
/// entity or field was at fault, e.g. to decide between re-prompting and
/// aborting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// A referenced entity id or name is absent.
    NotFound,
    /// A uniqueness constraint was violated.
    Duplicate,
    /// User-supplied input was out of range or malformed.
    Validation,
    /// Internal bug class; retrying with the same input will not help.
    Invariant,
    /// Underlying IO failure while reading seed data.
    Io,
}

impl OrekeepError {
    pub fn class(&self) -> ErrorClass {
        use OrekeepError::*;
        match self {
            LocationNotFound { .. } | WorkerNotFound { .. } | MineralNotFound { .. } => {
                ErrorClass::NotFound
            }
            DuplicateLocationName { .. }
            | DuplicateLocationId { .. }
            | DuplicateWorkerId { .. }
            | DuplicateMineralAtLocation { .. }
            | ShiftDayTaken { .. } => ErrorClass::Duplicate,
            LatitudeOutOfRange { .. }
            | LongitudeOutOfRange { .. }
            | HardnessOutOfRange { .. }
            | NegativeWage { .. }
            | ShiftEndNotAfterStart { .. }
            | MineralNameRequired
            | WorkerIdMismatch { .. }
            | InvalidWeekday { .. }
            | InvalidTime { .. } => ErrorClass::Validation,
            MineralIndexOutOfBounds { .. } | MineralRecordMissing { .. } => ErrorClass::Invariant,
            Io(_) => ErrorClass::Io,
        }
    }
}

pub type Result<T> = std::result::Result<T, OrekeepError>;
