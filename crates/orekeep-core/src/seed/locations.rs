//! Location seed file: 5 columns `id  name  description  latitude  longitude`.

use std::path::Path;

use tracing::warn;

use super::{content_lines, parse_decimal, split_columns, LoadStats};
use crate::error::Result;
use crate::models::{Location, LocationId};
use crate::registry::LocationRegistry;

pub fn load(path: &Path, registry: &mut LocationRegistry) -> Result<LoadStats> {
    let mut stats = LoadStats::default();
    if !path.exists() {
        warn!(path = %path.display(), "location seed file missing, nothing loaded");
        return Ok(stats);
    }
    for line in content_lines(path)? {
        let columns = split_columns(&line);
        if columns.len() < 5 {
            warn!(%line, "skipping location row: expected 5+ columns");
            stats.skipped();
            continue;
        }
        let id = columns[0].trim();
        let name = non_blank(&columns[1]);
        let description = non_blank(&columns[2]);
        let (Some(latitude), Some(longitude)) =
            (parse_decimal(&columns[3]), parse_decimal(&columns[4]))
        else {
            warn!(%line, "skipping location row: invalid latitude/longitude");
            stats.skipped();
            continue;
        };
        let location =
            match Location::new(LocationId::from(id), name, description, latitude, longitude) {
                Ok(l) => l,
                Err(e) => {
                    warn!(%line, error = %e, "skipping location row");
                    stats.skipped();
                    continue;
                }
            };
        match registry.insert(location) {
            Ok(()) => stats.loaded(),
            Err(e) => {
                warn!(%line, error = %e, "skipping location row");
                stats.skipped();
            }
        }
    }
    Ok(stats)
}

fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
