use serde::{Deserialize, Serialize};

use super::mineral::MineralId;
use super::worker::WorkerId;
use crate::error::{OrekeepError, Result};

/// Unique identifier for a location. Decimal string assigned by the registry's
/// id sequence, or carried over from seed data. Compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocationId(pub String);

impl LocationId {
    /// Case-insensitive id comparison.
    pub fn matches(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other)
    }
}

impl std::fmt::Display for LocationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for LocationId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A geological survey site.
///
/// `minerals` and `workers` hold ids, not records: the canonical mineral
/// records live in the mineral registry arena, and the worker list is a
/// denormalized index maintained when shifts are scheduled here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    /// Unique identifier, immutable once assigned.
    pub id: LocationId,

    /// Display name, unique case-insensitively among locations when present.
    pub name: Option<String>,

    /// Free-text description.
    pub description: Option<String>,

    /// Degrees north, in [-90, 90].
    pub latitude: f64,

    /// Degrees east, in [-180, 180].
    pub longitude: f64,

    /// Minerals found at this site, as links into the mineral registry arena.
    pub minerals: Vec<MineralId>,

    /// Workers with a shift here. Additive-only index: entries are added when
    /// a shift at this location is scheduled but are not pruned when the last
    /// such shift is removed. Derived membership comes from the worker
    /// registry's shift scan instead.
    pub workers: Vec<WorkerId>,
}

impl Location {
    pub fn new(
        id: LocationId,
        name: Option<String>,
        description: Option<String>,
        latitude: f64,
        longitude: f64,
    ) -> Result<Self> {
        validate_latitude(latitude)?;
        validate_longitude(longitude)?;
        Ok(Self {
            id,
            name,
            description,
            latitude,
            longitude,
            minerals: Vec::new(),
            workers: Vec::new(),
        })
    }

    /// Case-insensitive name comparison; a location with no name matches nothing.
    pub fn name_matches(&self, other: &str) -> bool {
        self.name
            .as_deref()
            .is_some_and(|n| n.eq_ignore_ascii_case(other))
    }
}

/// Patch-style update: fields left as `None` keep their current value.
#[derive(Debug, Clone, Default)]
pub struct LocationPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

pub(crate) fn validate_latitude(value: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&value) {
        return Err(OrekeepError::LatitudeOutOfRange { value });
    }
    Ok(())
}

pub(crate) fn validate_longitude(value: f64) -> Result<()> {
    if !(-180.0..=180.0).contains(&value) {
        return Err(OrekeepError::LongitudeOutOfRange { value });
    }
    Ok(())
}
