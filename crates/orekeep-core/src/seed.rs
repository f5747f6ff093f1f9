//! Bulk seed-file loaders.
//!
//! Three line-oriented formats, one per entity type. Shared conventions:
//! blank lines and `#` comments are ignored, columns are separated by tabs or
//! runs of 2+ spaces (single spaces stay inside a field), and `,` is accepted
//! as a decimal separator. Bad rows are skipped with a warning and counted,
//! never fatal.
//!
//! Seed records are threaded through the same registry operations the rest of
//! the system uses, so they get exactly the §4-level validation and no more.

pub mod locations;
pub mod minerals;
pub mod workers;

use std::path::Path;

use crate::config::OrekeepConfig;
use crate::error::Result;
use crate::registry::Registries;

/// Per-file load counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    pub loaded: usize,
    pub skipped: usize,
}

impl LoadStats {
    pub(crate) fn loaded(&mut self) {
        self.loaded += 1;
    }

    pub(crate) fn skipped(&mut self) {
        self.skipped += 1;
    }
}

/// Counts for a full seed run.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeedSummary {
    pub minerals: LoadStats,
    pub locations: LoadStats,
    pub workers: LoadStats,
    pub shifts: LoadStats,
}

/// Load every seed file named by the configuration into the registries.
/// Locations load before workers so shift records can resolve their sites.
pub fn load_all(config: &OrekeepConfig, registries: &mut Registries) -> Result<SeedSummary> {
    let minerals = minerals::load(&config.minerals_path(), &mut registries.minerals)?;
    let locations = locations::load(&config.locations_path(), &mut registries.locations)?;
    let (workers, shifts) = workers::load(
        &config.workers_path(),
        &mut registries.locations,
        &mut registries.workers,
    )?;
    Ok(SeedSummary {
        minerals,
        locations,
        workers,
        shifts,
    })
}

/// Split a trimmed line on tabs or runs of 2+ spaces. Single spaces are part
/// of the field, so "Rose Quartz" survives as one column.
pub(crate) fn split_columns(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut gap = String::new();
    for ch in line.chars() {
        if ch == '\t' || ch == ' ' {
            gap.push(ch);
            continue;
        }
        if !gap.is_empty() {
            if gap.contains('\t') || gap.len() >= 2 {
                if !current.is_empty() {
                    fields.push(std::mem::take(&mut current));
                }
            } else {
                current.push(' ');
            }
            gap.clear();
        }
        current.push(ch);
    }
    if !current.is_empty() {
        fields.push(current);
    }
    fields
}

/// Parse a decimal number accepting `,` as the separator.
pub(crate) fn parse_decimal(raw: &str) -> Option<f64> {
    raw.trim().replace(',', ".").parse().ok()
}

/// Content lines of a seed file: trimmed, non-blank, non-comment.
pub(crate) fn content_lines(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path)?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_split_on_tabs_and_wide_gaps_only() {
        assert_eq!(
            split_columns("Rose Quartz\tpink  vitreous"),
            vec!["Rose Quartz", "pink", "vitreous"]
        );
        assert_eq!(split_columns("a   b\t\tc"), vec!["a", "b", "c"]);
        assert_eq!(split_columns("one two"), vec!["one two"]);
    }

    #[test]
    fn decimal_comma_is_accepted() {
        assert_eq!(parse_decimal("59,67"), Some(59.67));
        assert_eq!(parse_decimal(" 7.5 "), Some(7.5));
        assert_eq!(parse_decimal("7,5,0"), None);
    }
}
