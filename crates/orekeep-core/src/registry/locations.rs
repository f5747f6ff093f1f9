//! Location registry.
//!
//! Locations link minerals by arena key into the [`MineralRegistry`] and keep
//! a denormalized list of worker ids. The worker list is additive-only: the
//! scheduler adds a worker here when a shift at this location is set, but
//! nothing prunes the entry when the last such shift goes away. Derived
//! membership comes from [`WorkerRegistry::workers_at`].
//!
//! [`MineralRegistry`]: super::minerals::MineralRegistry
//! [`WorkerRegistry::workers_at`]: super::workers::WorkerRegistry::workers_at

use tracing::debug;

use super::minerals::MineralRegistry;
use crate::error::{OrekeepError, Result};
use crate::ids::IdSequence;
use crate::models::{Location, LocationId, LocationPatch, Mineral, MineralId, WorkerId};

#[derive(Debug, Default)]
pub struct LocationRegistry {
    locations: Vec<Location>,
    ids: IdSequence,
}

impl LocationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct with an externally created id sequence.
    pub fn with_sequence(ids: IdSequence) -> Self {
        Self {
            locations: Vec::new(),
            ids,
        }
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// All locations in listing order.
    pub fn all(&self) -> &[Location] {
        &self.locations
    }

    /// Case-insensitive id lookup.
    pub fn get(&self, id: &str) -> Option<&Location> {
        self.locations.iter().find(|l| l.id.matches(id))
    }

    /// Case-insensitive name lookup.
    pub fn get_by_name(&self, name: &str) -> Option<&Location> {
        self.locations.iter().find(|l| l.name_matches(name))
    }

    /// Resolve a location by id first, then by name. Seed data references
    /// locations either way.
    pub fn resolve(&self, key: &str) -> Option<&Location> {
        self.get(key).or_else(|| self.get_by_name(key))
    }

    /// Register a new location with a generated id. A blank name is stored as
    /// no name; a non-blank name must be unique case-insensitively.
    pub fn add(
        &mut self,
        name: &str,
        description: Option<String>,
        latitude: f64,
        longitude: f64,
    ) -> Result<Location> {
        let name = match name.trim() {
            "" => None,
            n => {
                if self.get_by_name(n).is_some() {
                    return Err(OrekeepError::DuplicateLocationName {
                        name: n.to_string(),
                    });
                }
                Some(n.to_string())
            }
        };
        let location = Location::new(
            LocationId(self.ids.next()),
            name,
            description,
            latitude,
            longitude,
        )?;
        debug!(id = %location.id, name = ?location.name, "registered location");
        self.locations.push(location.clone());
        Ok(location)
    }

    /// Insert a fully built location, typically from seed data. Rejects
    /// duplicate ids and duplicate non-blank names, and bumps the id sequence
    /// past numeric seeded ids so generated ids never collide.
    pub fn insert(&mut self, location: Location) -> Result<()> {
        if self.get(&location.id.0).is_some() {
            return Err(OrekeepError::DuplicateLocationId {
                id: location.id.0.clone(),
            });
        }
        if let Some(name) = location.name.as_deref() {
            if self.get_by_name(name).is_some() {
                return Err(OrekeepError::DuplicateLocationName {
                    name: name.to_string(),
                });
            }
        }
        if let Ok(n) = location.id.0.parse::<u64>() {
            self.ids.bump_past(n);
        }
        self.locations.push(location);
        Ok(())
    }

    /// Delete by id. Returns whether a location was removed; other locations
    /// are untouched either way.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.locations.len();
        self.locations.retain(|l| !l.id.matches(id));
        self.locations.len() < before
    }

    /// Patch-style update: unset fields keep their current value. A new name
    /// must stay unique among the other locations; renaming a location to its
    /// own name (any casing) is allowed.
    pub fn update(&mut self, id: &str, patch: LocationPatch) -> Result<Location> {
        if let Some(lat) = patch.latitude {
            crate::models::location::validate_latitude(lat)?;
        }
        if let Some(lon) = patch.longitude {
            crate::models::location::validate_longitude(lon)?;
        }
        if let Some(new_name) = patch.name.as_deref() {
            let taken = self
                .locations
                .iter()
                .any(|l| !l.id.matches(id) && l.name_matches(new_name));
            if taken {
                return Err(OrekeepError::DuplicateLocationName {
                    name: new_name.to_string(),
                });
            }
        }
        let location = self
            .locations
            .iter_mut()
            .find(|l| l.id.matches(id))
            .ok_or_else(|| OrekeepError::LocationNotFound { id: id.to_string() })?;
        if let Some(name) = patch.name {
            location.name = Some(name);
        }
        if let Some(description) = patch.description {
            location.description = Some(description);
        }
        if let Some(latitude) = patch.latitude {
            location.latitude = latitude;
        }
        if let Some(longitude) = patch.longitude {
            location.longitude = longitude;
        }
        Ok(location.clone())
    }

    // -------- minerals at a location --------

    /// Minerals linked at a location, resolved through the registry arena.
    /// Empty when the location is missing or has no finds.
    pub fn minerals_at<'a>(
        &self,
        minerals: &'a MineralRegistry,
        id: &str,
    ) -> Vec<(MineralId, &'a Mineral)> {
        let Some(location) = self.get(id) else {
            return Vec::new();
        };
        location
            .minerals
            .iter()
            .filter_map(|mid| minerals.get(*mid).map(|m| (*mid, m)))
            .collect()
    }

    /// Catalogue a new mineral and link it here.
    ///
    /// The mineral must be named, and no mineral with that name may already be
    /// linked at this location. Global name uniqueness is not checked — that
    /// stays with the calling workflow, as for any other catalog add.
    pub fn add_mineral_to(
        &mut self,
        minerals: &mut MineralRegistry,
        id: &str,
        mineral: Mineral,
    ) -> Result<MineralId> {
        let name = mineral
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .ok_or(OrekeepError::MineralNameRequired)?
            .to_string();
        self.ensure_not_linked(minerals, id, &name)?;
        let mineral_id = minerals.add(mineral);
        self.location_mut(id)?.minerals.push(mineral_id);
        Ok(mineral_id)
    }

    /// Link an already catalogued mineral here. Same duplicate rules as
    /// [`add_mineral_to`](Self::add_mineral_to).
    pub fn link_mineral(
        &mut self,
        minerals: &MineralRegistry,
        id: &str,
        mineral_id: MineralId,
    ) -> Result<()> {
        let record = minerals
            .get(mineral_id)
            .ok_or(OrekeepError::MineralRecordMissing { id: mineral_id.0 })?;
        let name = record
            .name
            .clone()
            .ok_or(OrekeepError::MineralNameRequired)?;
        self.ensure_not_linked(minerals, id, &name)?;
        self.location_mut(id)?.minerals.push(mineral_id);
        Ok(())
    }

    /// Unlink the first mineral here whose name matches (case-insensitive).
    /// The catalog record itself is untouched. Returns whether a link was
    /// removed; errors only when the location is missing.
    pub fn remove_mineral_by_name(
        &mut self,
        minerals: &MineralRegistry,
        id: &str,
        name: &str,
    ) -> Result<bool> {
        let location = self.location_mut(id)?;
        let Some(pos) = location
            .minerals
            .iter()
            .position(|mid| minerals.get(*mid).is_some_and(|m| m.name_matches(name)))
        else {
            return Ok(false);
        };
        location.minerals.remove(pos);
        Ok(true)
    }

    /// Mutate the first linked mineral matching `name` through the registry.
    /// Both this location's view and the catalog see the change, since there
    /// is only one record.
    pub fn update_mineral_by_name(
        &self,
        minerals: &mut MineralRegistry,
        id: &str,
        name: &str,
        mutate: impl FnOnce(&mut Mineral),
    ) -> Result<bool> {
        let location = self
            .get(id)
            .ok_or_else(|| OrekeepError::LocationNotFound { id: id.to_string() })?;
        let Some(mineral_id) = location
            .minerals
            .iter()
            .copied()
            .find(|mid| minerals.get(*mid).is_some_and(|m| m.name_matches(name)))
        else {
            return Ok(false);
        };
        minerals.update_by_id(mineral_id, mutate)?;
        Ok(true)
    }

    // -------- workers at a location --------

    /// The denormalized worker index for a location. Empty when the location
    /// is missing. See the module docs for the staleness caveat.
    pub fn workers_at(&self, id: &str) -> &[WorkerId] {
        self.get(id).map(|l| l.workers.as_slice()).unwrap_or(&[])
    }

    /// Add a worker to the location's index. Idempotent: returns `Ok(false)`
    /// when the worker is already listed, `Ok(true)` when newly added. Errors
    /// only when the location is missing.
    pub fn link_worker(&mut self, id: &str, worker_id: &WorkerId) -> Result<bool> {
        let location = self.location_mut(id)?;
        if location.workers.iter().any(|w| w.matches(&worker_id.0)) {
            return Ok(false);
        }
        location.workers.push(worker_id.clone());
        Ok(true)
    }

    /// Remove a worker from the location's index. Returns whether an entry
    /// was removed.
    pub fn remove_worker_by_id(&mut self, id: &str, worker_id: &str) -> Result<bool> {
        let location = self.location_mut(id)?;
        let before = location.workers.len();
        location.workers.retain(|w| !w.matches(worker_id));
        Ok(location.workers.len() < before)
    }

    fn location_mut(&mut self, id: &str) -> Result<&mut Location> {
        self.locations
            .iter_mut()
            .find(|l| l.id.matches(id))
            .ok_or_else(|| OrekeepError::LocationNotFound { id: id.to_string() })
    }

    fn ensure_not_linked(
        &self,
        minerals: &MineralRegistry,
        id: &str,
        name: &str,
    ) -> Result<()> {
        let location = self
            .get(id)
            .ok_or_else(|| OrekeepError::LocationNotFound { id: id.to_string() })?;
        let linked = location
            .minerals
            .iter()
            .any(|mid| minerals.get(*mid).is_some_and(|m| m.name_matches(name)));
        if linked {
            return Err(OrekeepError::DuplicateMineralAtLocation {
                name: name.to_string(),
                location: location.id.0.clone(),
            });
        }
        Ok(())
    }
}
