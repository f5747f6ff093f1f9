use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// orekeep - survey-site registry and payroll
#[derive(Parser, Debug)]
#[command(name = "orekeep")]
#[command(about = "Registry and payroll for survey sites, minerals, and field workers", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Directory holding the seed files (overrides config file and env)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Path to the config file
    #[arg(long, global = true, default_value = "orekeep.toml")]
    pub config: PathBuf,

    /// Defaults to the interactive menu when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show registry counts and seed-load summary
    Status,

    /// Inspect locations
    Locations {
        #[command(subcommand)]
        command: LocationCommands,
    },

    /// Inspect and query the mineral catalog
    Minerals {
        #[command(subcommand)]
        command: MineralCommands,
    },

    /// Inspect workers and their schedules
    Workers {
        #[command(subcommand)]
        command: WorkerCommands,
    },

    /// Compute typical monthly paychecks
    Payroll(PayrollArgs),

    /// Run the interactive menu (the default)
    Menu,
}

#[derive(Subcommand, Debug)]
pub enum LocationCommands {
    /// List all locations
    List,
    /// Show one location with its minerals and workers
    Show {
        /// Location id
        id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum MineralCommands {
    /// List the catalog in listing order
    List,
    /// List the catalog alphabetically (unnamed minerals last)
    Sort,
    /// Case-insensitive name-prefix search
    Search {
        /// Name prefix, e.g. "am" for Amethyst and Amazonite
        prefix: String,
    },
    /// Filter by any combination of criteria (combined with AND)
    Filter(FilterArgs),
}

#[derive(clap::Args, Debug)]
pub struct FilterArgs {
    /// Substring of the name (case-insensitive)
    #[arg(long)]
    pub name: Option<String>,

    /// Exact color tag (case-insensitive)
    #[arg(long)]
    pub color: Option<String>,

    /// Exact fracture description (case-insensitive)
    #[arg(long)]
    pub fracture: Option<String>,

    /// Mohs value that must fall inside the mineral's recorded range
    #[arg(long)]
    pub hardness: Option<f64>,
}

#[derive(Subcommand, Debug)]
pub enum WorkerCommands {
    /// List all workers
    List,
    /// Show one worker with their weekly schedule
    Show {
        /// Worker id
        id: String,
    },
}

#[derive(clap::Args, Debug)]
pub struct PayrollArgs {
    /// Restrict to a single worker id; all workers when omitted
    #[arg(long)]
    pub worker: Option<String>,
}
