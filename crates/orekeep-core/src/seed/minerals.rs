//! Mineral seed file: 5 columns `name  luster  color  hardness  fracture`.
//!
//! `luster` and `color` are `/`- or `,`-separated lists. `hardness` is blank,
//! a single value, or a `min-max` range. A header row starting with "name" is
//! skipped.

use std::path::Path;

use tracing::{info, warn};

use super::{content_lines, parse_decimal, split_columns, LoadStats};
use crate::error::Result;
use crate::models::Mineral;
use crate::registry::MineralRegistry;

pub fn load(path: &Path, registry: &mut MineralRegistry) -> Result<LoadStats> {
    let mut stats = LoadStats::default();
    if !path.exists() {
        warn!(path = %path.display(), "mineral seed file missing, nothing loaded");
        return Ok(stats);
    }
    for line in content_lines(path)? {
        let columns = split_columns(&line);
        if columns.len() < 5 {
            warn!(%line, "skipping mineral row: expected 5+ columns");
            stats.skipped();
            continue;
        }
        if columns[0].eq_ignore_ascii_case("name") {
            continue; // header row
        }

        let mut mineral = Mineral::default();
        let name = columns[0].trim();
        mineral.name = (!name.is_empty()).then(|| name.to_string());
        mineral.luster = split_list(&columns[1]);
        mineral.color = split_list(&columns[2]);

        let (min, max) = match parse_hardness(&columns[3]) {
            Ok(bounds) => bounds,
            Err(()) => {
                warn!(%line, "skipping mineral row: unparseable hardness");
                stats.skipped();
                continue;
            }
        };
        match mineral.set_hardness(min, max) {
            Ok(true) => info!(name = ?mineral.name, "hardness bounds were reversed, swapped"),
            Ok(false) => {}
            Err(e) => {
                warn!(%line, error = %e, "skipping mineral row");
                stats.skipped();
                continue;
            }
        }

        let fracture = columns[4].trim();
        mineral.fracture = (!fracture.is_empty()).then(|| fracture.to_string());

        registry.add(mineral);
        stats.loaded();
    }
    Ok(stats)
}

/// Split a list-like field on `/` or `,`, dropping empties.
fn split_list(raw: &str) -> Vec<String> {
    raw.split(['/', ','])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Blank → no bounds; `a-b` → range; single value → both bounds equal.
fn parse_hardness(raw: &str) -> std::result::Result<(Option<f64>, Option<f64>), ()> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok((None, None));
    }
    if let Some((a, b)) = raw.split_once('-') {
        match (parse_decimal(a), parse_decimal(b)) {
            (Some(min), Some(max)) => Ok((Some(min), Some(max))),
            _ => Err(()),
        }
    } else {
        match parse_decimal(raw) {
            Some(v) => Ok((Some(v), Some(v))),
            None => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hardness_accepts_blank_single_and_range() {
        assert_eq!(parse_hardness(""), Ok((None, None)));
        assert_eq!(parse_hardness("7"), Ok((Some(7.0), Some(7.0))));
        assert_eq!(parse_hardness("6,5-7"), Ok((Some(6.5), Some(7.0))));
        assert_eq!(parse_hardness("soft"), Err(()));
    }

    #[test]
    fn list_fields_split_on_slash_and_comma() {
        assert_eq!(split_list("vitreous/pearly, greasy"), vec![
            "vitreous".to_string(),
            "pearly".to_string(),
            "greasy".to_string()
        ]);
        assert!(split_list("  ").is_empty());
    }
}
