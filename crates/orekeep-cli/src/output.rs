use console::style;
use orekeep_core::models::{Location, Mineral, Worker};
use orekeep_core::payroll;
use serde::Serialize;
use std::fmt::Display;
use tabled::{settings::Style, Table, Tabled};

/// Output format mode
#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Human,
    Json,
}

pub struct OutputWriter {
    format: OutputFormat,
}

impl OutputWriter {
    pub fn new(json: bool) -> Self {
        Self {
            format: if json {
                OutputFormat::Json
            } else {
                OutputFormat::Human
            },
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self.format, OutputFormat::Json)
    }

    pub fn success(&self, message: impl Display) {
        match self.format {
            OutputFormat::Human => println!("{} {}", style("✓").green().bold(), message),
            OutputFormat::Json => print_status("success", message),
        }
    }

    pub fn info(&self, message: impl Display) {
        match self.format {
            OutputFormat::Human => println!("{} {}", style("ℹ").blue().bold(), message),
            OutputFormat::Json => print_status("info", message),
        }
    }

    pub fn warning(&self, message: impl Display) {
        match self.format {
            OutputFormat::Human => eprintln!("{} {}", style("⚠").yellow().bold(), message),
            OutputFormat::Json => print_status("warning", message),
        }
    }

    pub fn error(&self, message: impl Display) {
        match self.format {
            OutputFormat::Human => eprintln!("{} {}", style("✗").red().bold(), message),
            OutputFormat::Json => print_status("error", message),
        }
    }

    pub fn section(&self, title: impl Display) {
        if let OutputFormat::Human = self.format {
            println!("\n{}", style(title).bold().underlined());
        }
    }

    pub fn kv(&self, key: impl Display, value: impl Display) {
        if let OutputFormat::Human = self.format {
            println!("  {:<14} {}", style(key).dim(), value);
        }
    }

    /// Serialize a structured result; only meaningful in JSON mode.
    pub fn result<T: Serialize>(&self, value: &T) -> anyhow::Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }

    /// Render rows as a table in human mode.
    pub fn table<R: Tabled>(&self, rows: Vec<R>) {
        if rows.is_empty() {
            self.info("(nothing to show)");
            return;
        }
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{table}");
    }
}

fn print_status(status: &str, message: impl Display) {
    let output = serde_json::json!({
        "status": status,
        "message": message.to_string(),
    });
    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}

// -------- table rows --------

#[derive(Tabled)]
pub struct LocationRow {
    #[tabled(rename = "Id")]
    pub id: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Latitude")]
    pub latitude: f64,
    #[tabled(rename = "Longitude")]
    pub longitude: f64,
    #[tabled(rename = "Minerals")]
    pub minerals: usize,
    #[tabled(rename = "Workers")]
    pub workers: usize,
}

impl LocationRow {
    pub fn from_location(location: &Location) -> Self {
        Self {
            id: location.id.0.clone(),
            name: location.name.clone().unwrap_or_else(|| "(unnamed)".into()),
            latitude: location.latitude,
            longitude: location.longitude,
            minerals: location.minerals.len(),
            workers: location.workers.len(),
        }
    }
}

#[derive(Tabled)]
pub struct MineralRow {
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Luster")]
    pub luster: String,
    #[tabled(rename = "Color")]
    pub color: String,
    #[tabled(rename = "Hardness")]
    pub hardness: String,
    #[tabled(rename = "Fracture")]
    pub fracture: String,
}

impl MineralRow {
    pub fn from_mineral(mineral: &Mineral) -> Self {
        let hardness = match (mineral.hardness_min(), mineral.hardness_max()) {
            (Some(min), Some(max)) if min == max => format!("{min}"),
            (Some(min), Some(max)) => format!("{min}-{max}"),
            (Some(min), None) => format!("{min}-?"),
            (None, Some(max)) => format!("?-{max}"),
            (None, None) => "-".into(),
        };
        Self {
            name: mineral.name.clone().unwrap_or_else(|| "(unnamed)".into()),
            luster: mineral.luster.join("/"),
            color: mineral.color.join("/"),
            hardness,
            fracture: mineral.fracture.clone().unwrap_or_else(|| "-".into()),
        }
    }
}

#[derive(Tabled)]
pub struct WorkerRow {
    #[tabled(rename = "Id")]
    pub id: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Phone")]
    pub phone: String,
    #[tabled(rename = "Shifts")]
    pub shifts: usize,
}

impl WorkerRow {
    pub fn from_worker(worker: &Worker) -> Self {
        Self {
            id: worker.id.0.clone(),
            name: worker.full_name(),
            phone: worker.phone.clone(),
            shifts: worker.shifts().len(),
        }
    }
}

#[derive(Tabled)]
pub struct ShiftRow {
    #[tabled(rename = "Day")]
    pub day: String,
    #[tabled(rename = "Start")]
    pub start: String,
    #[tabled(rename = "End")]
    pub end: String,
    #[tabled(rename = "Location")]
    pub location: String,
    #[tabled(rename = "Wage/h")]
    pub wage: f64,
    #[tabled(rename = "Hours")]
    pub hours: f64,
}

#[derive(Tabled, Serialize)]
pub struct PaycheckRow {
    #[tabled(rename = "Id")]
    pub id: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Weekly hours")]
    pub weekly_hours: f64,
    #[tabled(rename = "Monthly pay (typical)")]
    pub monthly_pay: f64,
}

impl PaycheckRow {
    pub fn from_worker(worker: &Worker) -> Self {
        Self {
            id: worker.id.0.clone(),
            name: worker.full_name(),
            weekly_hours: payroll::weekly_hours(worker),
            monthly_pay: payroll::monthly_pay_typical(worker),
        }
    }
}
