pub mod locations;
pub mod minerals;
pub mod payroll;
pub mod status;
pub mod workers;

use anyhow::Result;
use orekeep_core::config::OrekeepConfig;
use orekeep_core::seed;
use orekeep_core::Registries;

use crate::cli::{Cli, Commands};
use crate::interactive;
use crate::output::OutputWriter;

pub fn execute(cli: Cli) -> Result<()> {
    let output = OutputWriter::new(cli.json);

    let config = OrekeepConfig::with_defaults()
        .load_from_file(&cli.config)?
        .load_from_env()
        .apply_cli(cli.data_dir);

    // Registries live for one invocation; every command starts from seed data.
    let mut registries = Registries::new();
    let summary = seed::load_all(&config, &mut registries)?;

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Status => status::execute(&registries, &summary, &config, &output),
        Commands::Locations { command } => locations::execute(command, &registries, &output),
        Commands::Minerals { command } => minerals::execute(command, &registries, &output),
        Commands::Workers { command } => workers::execute(command, &registries, &output),
        Commands::Payroll(args) => payroll::execute(args, &registries, &output),
        Commands::Menu => interactive::run(&mut registries, &output),
    }
}
