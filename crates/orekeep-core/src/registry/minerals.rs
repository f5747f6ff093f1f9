//! Mineral catalog.
//!
//! The registry owns every mineral record in an arena keyed by [`MineralId`];
//! the catalog itself is an ordered list of arena keys. Locations link the
//! same keys, so a record mutated here is immediately current everywhere it
//! is linked — there are no cached copies to go stale.
//!
//! The registry deliberately does not enforce name uniqueness on `add`;
//! calling workflows check [`MineralRegistry::exists`] first. Storage and
//! validation are split on purpose.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{OrekeepError, Result};
use crate::models::{Mineral, MineralFilter, MineralId};

#[derive(Debug, Default)]
pub struct MineralRegistry {
    records: HashMap<MineralId, Mineral>,
    catalog: Vec<MineralId>,
    next_key: u64,
}

impl MineralRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    /// Append a mineral to the catalog and return its arena key.
    pub fn add(&mut self, mineral: Mineral) -> MineralId {
        self.next_key += 1;
        let id = MineralId(self.next_key);
        debug!(mineral = ?mineral.name, %id, "cataloguing mineral");
        self.records.insert(id, mineral);
        self.catalog.push(id);
        id
    }

    /// Case-insensitive name check against the catalog. Blank names never match.
    pub fn exists(&self, name: &str) -> bool {
        !name.trim().is_empty() && self.iter().any(|(_, m)| m.name_matches(name.trim()))
    }

    pub fn get(&self, id: MineralId) -> Option<&Mineral> {
        self.records.get(&id)
    }

    /// First catalogued mineral with this name (case-insensitive).
    pub fn find_by_name(&self, name: &str) -> Option<(MineralId, &Mineral)> {
        self.iter().find(|(_, m)| m.name_matches(name))
    }

    /// Catalogued minerals in listing order.
    pub fn iter(&self) -> impl Iterator<Item = (MineralId, &Mineral)> {
        self.catalog.iter().map(|id| (*id, &self.records[id]))
    }

    /// Mutate the mineral at `index` in current listing order.
    ///
    /// Positional addressing goes stale when the catalog changes between the
    /// caller's fetch and this call; an out-of-bounds index is reported as an
    /// invariant error rather than silently ignored.
    pub fn update(&mut self, index: usize, mutate: impl FnOnce(&mut Mineral)) -> Result<()> {
        let len = self.catalog.len();
        let id = *self
            .catalog
            .get(index)
            .ok_or(OrekeepError::MineralIndexOutOfBounds { index, len })?;
        self.update_by_id(id, mutate)
    }

    /// Mutate the record behind an arena key. This is the single write path
    /// for linked minerals, whichever side the caller saw the key from.
    pub fn update_by_id(&mut self, id: MineralId, mutate: impl FnOnce(&mut Mineral)) -> Result<()> {
        let record = self
            .records
            .get_mut(&id)
            .ok_or(OrekeepError::MineralRecordMissing { id: id.0 })?;
        mutate(record);
        Ok(())
    }

    /// Remove the first case-insensitive name match from the catalog.
    ///
    /// The arena record is kept: locations may still link it, and those links
    /// stay valid. Returns whether anything was removed.
    pub fn delete_by_name(&mut self, name: &str) -> bool {
        let Some(pos) = self
            .catalog
            .iter()
            .position(|id| self.records[id].name_matches(name))
        else {
            return false;
        };
        let id = self.catalog.remove(pos);
        debug!(%id, name, "removed mineral from catalog");
        true
    }

    /// Catalog sorted alphabetically by lowercased name; unnamed minerals last.
    /// The sort is stable, so equal names keep their listing order.
    pub fn sorted_by_name(&self) -> Vec<&Mineral> {
        let mut out: Vec<&Mineral> = self.iter().map(|(_, m)| m).collect();
        out.sort_by_key(|m| match m.name.as_deref() {
            Some(n) => (0u8, n.to_lowercase()),
            None => (1, String::new()),
        });
        out
    }

    /// Case-insensitive prefix search. A blank query yields nothing, not
    /// everything.
    pub fn search_by_name(&self, prefix: &str) -> Vec<&Mineral> {
        let prefix = prefix.trim();
        if prefix.is_empty() {
            return Vec::new();
        }
        let lowered = prefix.to_lowercase();
        self.iter()
            .map(|(_, m)| m)
            .filter(|m| {
                m.name
                    .as_deref()
                    .is_some_and(|n| n.to_lowercase().starts_with(&lowered))
            })
            .collect()
    }

    /// Catalogued minerals matching all supplied criteria.
    pub fn filter(&self, criteria: &MineralFilter) -> Vec<&Mineral> {
        self.iter()
            .map(|(_, m)| m)
            .filter(|m| criteria.matches(m))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_with(names: &[&str]) -> MineralRegistry {
        let mut reg = MineralRegistry::new();
        for n in names {
            reg.add(Mineral::named(*n));
        }
        reg
    }

    #[test]
    fn exists_is_case_insensitive_and_ignores_blank() {
        let reg = registry_with(&["Quartz"]);
        assert!(reg.exists("qUaRtZ"));
        assert!(!reg.exists("   "));
        assert!(!reg.exists("Topaz"));
    }

    #[test]
    fn unnamed_minerals_never_match_by_name() {
        let mut reg = MineralRegistry::new();
        reg.add(Mineral::default());
        assert!(!reg.exists(""));
        assert!(reg.find_by_name("").is_none());
    }

    #[test]
    fn update_by_stale_index_is_an_error() {
        let mut reg = registry_with(&["Quartz"]);
        assert!(reg.update(0, |m| m.fracture = Some("conchoidal".into())).is_ok());
        let err = reg.update(3, |_| {}).unwrap_err();
        assert!(matches!(
            err,
            OrekeepError::MineralIndexOutOfBounds { index: 3, len: 1 }
        ));
    }

    #[test]
    fn rejected_hardness_leaves_mixed_update_uncommitted() {
        let mut reg = MineralRegistry::new();
        let mut galena = Mineral::named("Galena");
        galena.color = vec!["gray".into()];
        reg.add(galena);

        // Edit flows validate hardness first and bail before touching the
        // rest of the record, so a bad value changes nothing.
        let mut hardness = Ok(false);
        reg.update(0, |m| {
            hardness = m.set_hardness(Some(12.0), Some(13.0));
            if hardness.is_err() {
                return;
            }
            m.color = vec!["silver".into()];
            m.fracture = Some("uneven".into());
        })
        .unwrap();

        assert!(matches!(
            hardness,
            Err(OrekeepError::HardnessOutOfRange { .. })
        ));
        let (_, m) = reg.find_by_name("Galena").unwrap();
        assert_eq!(m.color, vec!["gray".to_string()]);
        assert_eq!(m.fracture, None);
        assert_eq!(m.hardness_min(), None);
    }

    #[test]
    fn delete_by_name_removes_first_match_only() {
        let mut reg = registry_with(&["Calcite", "calcite"]);
        assert!(reg.delete_by_name("CALCITE"));
        assert_eq!(reg.len(), 1);
        assert!(reg.delete_by_name("calcite"));
        assert!(!reg.delete_by_name("calcite"));
    }

    #[test]
    fn deleted_record_stays_resolvable_by_id() {
        let mut reg = registry_with(&[]);
        let id = reg.add(Mineral::named("Galena"));
        assert!(reg.delete_by_name("Galena"));
        // A location still linking `id` must still see the record.
        assert!(reg.get(id).is_some());
        assert!(!reg.exists("Galena"));
    }

    #[test]
    fn sort_puts_unnamed_last() {
        let mut reg = registry_with(&["topaz", "Amethyst"]);
        reg.add(Mineral::default());
        reg.add(Mineral::named("Biotite"));
        let names: Vec<Option<&str>> = reg
            .sorted_by_name()
            .iter()
            .map(|m| m.name.as_deref())
            .collect();
        assert_eq!(
            names,
            vec![Some("Amethyst"), Some("Biotite"), Some("topaz"), None]
        );
    }

    #[test]
    fn blank_search_yields_nothing() {
        let reg = registry_with(&["Amethyst", "Amazonite", "Topaz"]);
        assert!(reg.search_by_name("  ").is_empty());
        let hits = reg.search_by_name("am");
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn filter_criteria_combine_with_and() {
        let mut reg = MineralRegistry::new();
        let mut quartz = Mineral::named("Rose Quartz");
        quartz.color = vec!["pink".into()];
        quartz.set_hardness(Some(7.0), Some(7.0)).unwrap();
        reg.add(quartz);
        let mut calcite = Mineral::named("Calcite");
        calcite.color = vec!["pink".into()];
        reg.add(calcite);

        let criteria = MineralFilter {
            color: Some("pink".into()),
            hardness: Some(7.0),
            ..Default::default()
        };
        let hits = reg.filter(&criteria);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name.as_deref(), Some("Rose Quartz"));
    }
}
