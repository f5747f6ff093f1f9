//! Mineral catalog commands

use anyhow::Result;
use orekeep_core::models::MineralFilter;
use orekeep_core::Registries;

use crate::cli::{FilterArgs, MineralCommands};
use crate::output::{MineralRow, OutputWriter};

pub fn execute(
    command: MineralCommands,
    registries: &Registries,
    output: &OutputWriter,
) -> Result<()> {
    let minerals = &registries.minerals;
    let hits = match command {
        MineralCommands::List => minerals.iter().map(|(_, m)| m).collect(),
        MineralCommands::Sort => minerals.sorted_by_name(),
        MineralCommands::Search { prefix } => minerals.search_by_name(&prefix),
        MineralCommands::Filter(FilterArgs {
            name,
            color,
            fracture,
            hardness,
        }) => minerals.filter(&MineralFilter {
            name_contains: name,
            color,
            fracture,
            hardness,
        }),
    };

    if output.is_json() {
        return output.result(&hits);
    }
    output.section(format!("Minerals ({})", hits.len()));
    output.table(hits.into_iter().map(MineralRow::from_mineral).collect());
    Ok(())
}
