use serde::{Deserialize, Serialize};

use crate::error::{OrekeepError, Result};

/// Arena key for a mineral record inside the mineral registry. Stable for the
/// lifetime of the process; locations link these instead of copying records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MineralId(pub u64);

impl std::fmt::Display for MineralId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A mineral record.
///
/// Hardness bounds are kept private so every write path goes through
/// [`Mineral::set_hardness`], which enforces the Mohs range and min ≤ max.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Mineral {
    /// Unique among catalogued minerals when present (case-insensitive);
    /// uniqueness is checked by calling workflows, not by the registry.
    pub name: Option<String>,

    /// Free-text luster tags, e.g. "vitreous", "metallic".
    pub luster: Vec<String>,

    /// Free-text color tags.
    pub color: Vec<String>,

    hardness_min: Option<f64>,
    hardness_max: Option<f64>,

    /// Fracture description, e.g. "conchoidal".
    pub fracture: Option<String>,
}

impl Mineral {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Set the Mohs hardness bounds.
    ///
    /// Each bound must lie in [1, 10]. If both are present and supplied in
    /// reversed order they are swapped, and `Ok(true)` reports the swap so
    /// interactive callers can tell the user.
    pub fn set_hardness(&mut self, min: Option<f64>, max: Option<f64>) -> Result<bool> {
        for value in [min, max].into_iter().flatten() {
            if !(1.0..=10.0).contains(&value) {
                return Err(OrekeepError::HardnessOutOfRange { value });
            }
        }
        let swapped = match (min, max) {
            (Some(a), Some(b)) if a > b => {
                self.hardness_min = Some(b);
                self.hardness_max = Some(a);
                true
            }
            _ => {
                self.hardness_min = min;
                self.hardness_max = max;
                false
            }
        };
        Ok(swapped)
    }

    pub fn hardness_min(&self) -> Option<f64> {
        self.hardness_min
    }

    pub fn hardness_max(&self) -> Option<f64> {
        self.hardness_max
    }

    /// Whether `value` falls inside the closed hardness interval.
    ///
    /// Strict policy: a mineral with only one bound recorded never matches, so
    /// hardness filtering only ever reports minerals with a complete range.
    pub fn hardness_contains(&self, value: f64) -> bool {
        match (self.hardness_min, self.hardness_max) {
            (Some(min), Some(max)) => (min..=max).contains(&value),
            _ => false,
        }
    }

    /// Case-insensitive name comparison; an unnamed mineral matches nothing.
    pub fn name_matches(&self, other: &str) -> bool {
        self.name
            .as_deref()
            .is_some_and(|n| n.eq_ignore_ascii_case(other))
    }
}

/// Criteria for [`MineralRegistry::filter`](crate::registry::MineralRegistry::filter).
/// Every field is optional; `None` or blank strings are ignored and the
/// supplied criteria combine with logical AND.
#[derive(Debug, Clone, Default)]
pub struct MineralFilter {
    /// Case-insensitive substring of the name.
    pub name_contains: Option<String>,
    /// Exact (case-insensitive) match against any entry in the color list.
    pub color: Option<String>,
    /// Exact (case-insensitive) match of the fracture description.
    pub fracture: Option<String>,
    /// Mohs value that must lie within the mineral's recorded [min, max].
    pub hardness: Option<f64>,
}

impl MineralFilter {
    pub fn is_empty(&self) -> bool {
        fn blank(s: &Option<String>) -> bool {
            s.as_deref().map_or(true, |v| v.trim().is_empty())
        }
        blank(&self.name_contains)
            && blank(&self.color)
            && blank(&self.fracture)
            && self.hardness.is_none()
    }

    pub fn matches(&self, mineral: &Mineral) -> bool {
        let name_ok = match self.name_contains.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(needle) => mineral
                .name
                .as_deref()
                .is_some_and(|n| n.to_lowercase().contains(&needle.to_lowercase())),
        };
        let color_ok = match self.color.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(color) => mineral.color.iter().any(|c| c.eq_ignore_ascii_case(color)),
        };
        let fracture_ok = match self.fracture.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(fracture) => mineral
                .fracture
                .as_deref()
                .is_some_and(|f| f.eq_ignore_ascii_case(fracture)),
        };
        let hardness_ok = match self.hardness {
            None => true,
            Some(value) => mineral.hardness_contains(value),
        };
        name_ok && color_ok && fracture_ok && hardness_ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reversed_hardness_bounds_are_swapped_and_reported() {
        let mut m = Mineral::named("Quartz");
        let swapped = m.set_hardness(Some(7.5), Some(6.0)).unwrap();
        assert!(swapped);
        assert_eq!(m.hardness_min(), Some(6.0));
        assert_eq!(m.hardness_max(), Some(7.5));
    }

    #[test]
    fn hardness_outside_mohs_scale_is_rejected() {
        let mut m = Mineral::named("Mohsium");
        m.set_hardness(Some(4.0), Some(5.0)).unwrap();
        assert!(matches!(
            m.set_hardness(Some(0.5), None),
            Err(OrekeepError::HardnessOutOfRange { .. })
        ));
        assert!(matches!(
            m.set_hardness(None, Some(10.1)),
            Err(OrekeepError::HardnessOutOfRange { .. })
        ));
        // A rejected value must not clobber the stored bounds.
        assert_eq!(m.hardness_min(), Some(4.0));
        assert_eq!(m.hardness_max(), Some(5.0));
    }

    #[test]
    fn hardness_filter_needs_both_bounds() {
        let mut complete = Mineral::named("Feldspar");
        complete.set_hardness(Some(5.0), Some(7.0)).unwrap();
        assert!(complete.hardness_contains(6.0));
        assert!(!complete.hardness_contains(7.5));

        let mut half = Mineral::named("Halfspar");
        half.set_hardness(Some(5.0), None).unwrap();
        assert!(!half.hardness_contains(6.0));
    }

    #[test]
    fn blank_filter_criteria_are_ignored() {
        let mut m = Mineral::named("Amethyst");
        m.color = vec!["purple".to_string()];
        let filter = MineralFilter {
            name_contains: Some("  ".to_string()),
            color: Some("PURPLE".to_string()),
            ..Default::default()
        };
        assert!(filter.matches(&m));
    }
}
