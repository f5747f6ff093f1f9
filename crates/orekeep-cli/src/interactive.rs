//! Interactive menu loop over the registries.
//!
//! One session per invocation: registries are seeded at startup and live
//! until the user quits. Every mutation goes through the same registry
//! operations the one-shot commands use; errors are shown and the menu
//! continues.

use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use orekeep_core::models::{
    parse_time, parse_weekday, LocationPatch, Mineral, MineralFilter, WorkShift, Worker, WorkerId,
};
use orekeep_core::{payroll, OrekeepError, Registries};

use crate::output::{LocationRow, MineralRow, OutputWriter, PaycheckRow, WorkerRow};

pub fn run(registries: &mut Registries, output: &OutputWriter) -> Result<()> {
    let theme = ColorfulTheme::default();
    loop {
        let choice = Select::with_theme(&theme)
            .with_prompt("orekeep")
            .items(&["Locations", "Minerals", "Workers", "Payroll", "Quit"])
            .default(0)
            .interact()?;
        match choice {
            0 => locations_menu(registries, output, &theme)?,
            1 => minerals_menu(registries, output, &theme)?,
            2 => workers_menu(registries, output, &theme)?,
            3 => payroll_menu(registries, output, &theme)?,
            _ => return Ok(()),
        }
    }
}

// -------- prompt helpers --------

fn prompt(theme: &ColorfulTheme, label: &str) -> Result<String> {
    Ok(Input::<String>::with_theme(theme)
        .with_prompt(label)
        .allow_empty(true)
        .interact_text()?
        .trim()
        .to_string())
}

fn prompt_nonempty(theme: &ColorfulTheme, label: &str) -> Result<String> {
    Ok(Input::<String>::with_theme(theme)
        .with_prompt(label)
        .interact_text()?
        .trim()
        .to_string())
}

/// Blank input means "leave unset".
fn prompt_opt(theme: &ColorfulTheme, label: &str) -> Result<Option<String>> {
    let raw = prompt(theme, label)?;
    Ok((!raw.is_empty()).then_some(raw))
}

fn prompt_f64(theme: &ColorfulTheme, label: &str) -> Result<Option<f64>> {
    loop {
        let raw = prompt(theme, label)?;
        if raw.is_empty() {
            return Ok(None);
        }
        match raw.replace(',', ".").parse::<f64>() {
            Ok(v) => return Ok(Some(v)),
            Err(_) => eprintln!("Not a number, try again (blank to skip)."),
        }
    }
}

/// Split a list-like answer on `,` or `/`.
fn prompt_list(theme: &ColorfulTheme, label: &str) -> Result<Vec<String>> {
    Ok(prompt(theme, label)?
        .split(['/', ','])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect())
}

fn report(output: &OutputWriter, result: std::result::Result<String, OrekeepError>) {
    match result {
        Ok(message) => output.success(message),
        Err(e) => output.error(e),
    }
}

// -------- locations --------

fn locations_menu(
    registries: &mut Registries,
    output: &OutputWriter,
    theme: &ColorfulTheme,
) -> Result<()> {
    loop {
        let choice = Select::with_theme(theme)
            .with_prompt("Locations")
            .items(&[
                "List",
                "Show",
                "Add",
                "Update",
                "Delete",
                "Add mineral here",
                "Remove mineral here",
                "Add worker here",
                "Remove worker here",
                "Back",
            ])
            .default(0)
            .interact()?;
        match choice {
            0 => output.table(
                registries
                    .locations
                    .all()
                    .iter()
                    .map(LocationRow::from_location)
                    .collect(),
            ),
            1 => {
                let id = prompt_nonempty(theme, "Location id")?;
                match registries.locations.get(&id) {
                    Some(location) => {
                        output.table(vec![LocationRow::from_location(location)]);
                        output.table(
                            registries
                                .locations
                                .minerals_at(&registries.minerals, &id)
                                .iter()
                                .map(|(_, m)| MineralRow::from_mineral(m))
                                .collect(),
                        );
                    }
                    None => output.error(format!("Location not found: {id}")),
                }
            }
            2 => add_location(registries, output, theme)?,
            3 => update_location(registries, output, theme)?,
            4 => {
                let id = prompt_nonempty(theme, "Location id to delete")?;
                if registries.locations.delete(&id) {
                    output.success(format!("Deleted location {id}"));
                } else {
                    output.warning(format!("No location with id {id}"));
                }
            }
            5 => add_mineral_at_location(registries, output, theme)?,
            6 => {
                let id = prompt_nonempty(theme, "Location id")?;
                let name = prompt_nonempty(theme, "Mineral name to remove")?;
                match registries
                    .locations
                    .remove_mineral_by_name(&registries.minerals, &id, &name)
                {
                    Ok(true) => output.success(format!("Removed '{name}' from location {id}")),
                    Ok(false) => output.warning(format!("No mineral '{name}' at location {id}")),
                    Err(e) => output.error(e),
                }
            }
            7 => {
                let id = prompt_nonempty(theme, "Location id")?;
                let worker_id = prompt_nonempty(theme, "Worker id")?;
                match registries
                    .locations
                    .link_worker(&id, &WorkerId(worker_id.clone()))
                {
                    Ok(true) => output.success(format!("Added worker {worker_id} to {id}")),
                    Ok(false) => output.info("Worker already listed there"),
                    Err(e) => output.error(e),
                }
            }
            8 => {
                let id = prompt_nonempty(theme, "Location id")?;
                let worker_id = prompt_nonempty(theme, "Worker id")?;
                match registries.locations.remove_worker_by_id(&id, &worker_id) {
                    Ok(true) => output.success(format!("Removed worker {worker_id} from {id}")),
                    Ok(false) => output.warning("Worker was not listed there"),
                    Err(e) => output.error(e),
                }
            }
            _ => return Ok(()),
        }
    }
}

fn add_location(
    registries: &mut Registries,
    output: &OutputWriter,
    theme: &ColorfulTheme,
) -> Result<()> {
    let name = prompt_nonempty(theme, "Name")?;
    let description = prompt_opt(theme, "Description (blank for none)")?;
    let Some(latitude) = prompt_f64(theme, "Latitude [-90..90]")? else {
        output.warning("Canceled: latitude is required");
        return Ok(());
    };
    let Some(longitude) = prompt_f64(theme, "Longitude [-180..180]")? else {
        output.warning("Canceled: longitude is required");
        return Ok(());
    };
    report(
        output,
        registries
            .locations
            .add(&name, description, latitude, longitude)
            .map(|l| format!("Added location {} ({name})", l.id)),
    );
    Ok(())
}

fn update_location(
    registries: &mut Registries,
    output: &OutputWriter,
    theme: &ColorfulTheme,
) -> Result<()> {
    let id = prompt_nonempty(theme, "Location id")?;
    output.info("Blank fields keep their current value.");
    let patch = LocationPatch {
        name: prompt_opt(theme, "New name")?,
        description: prompt_opt(theme, "New description")?,
        latitude: prompt_f64(theme, "New latitude")?,
        longitude: prompt_f64(theme, "New longitude")?,
    };
    report(
        output,
        registries
            .locations
            .update(&id, patch)
            .map(|l| format!("Updated location {}", l.id)),
    );
    Ok(())
}

fn add_mineral_at_location(
    registries: &mut Registries,
    output: &OutputWriter,
    theme: &ColorfulTheme,
) -> Result<()> {
    let id = prompt_nonempty(theme, "Location id")?;
    let mode = Select::with_theme(theme)
        .with_prompt("Add mineral")
        .items(&["Select existing from catalog", "Create new", "Cancel"])
        .default(0)
        .interact()?;
    match mode {
        0 => {
            let catalog: Vec<(orekeep_core::models::MineralId, String)> = registries
                .minerals
                .iter()
                .map(|(mid, m)| (mid, m.name.clone().unwrap_or_else(|| "(unnamed)".into())))
                .collect();
            if catalog.is_empty() {
                output.warning("The catalog is empty");
                return Ok(());
            }
            let names: Vec<&str> = catalog.iter().map(|(_, n)| n.as_str()).collect();
            let picked = Select::with_theme(theme)
                .with_prompt("Mineral")
                .items(&names)
                .interact()?;
            report(
                output,
                registries
                    .link_mineral(&id, catalog[picked].0)
                    .map(|_| format!("Linked '{}' at location {id}", names[picked])),
            );
        }
        1 => {
            if let Some(mineral) = build_mineral(registries, output, theme)? {
                let name = mineral.name.clone().unwrap_or_default();
                report(
                    output,
                    registries
                        .add_mineral_to(&id, mineral)
                        .map(|_| format!("Added '{name}' at location {id}")),
                );
            }
        }
        _ => {}
    }
    Ok(())
}

// -------- minerals --------

fn minerals_menu(
    registries: &mut Registries,
    output: &OutputWriter,
    theme: &ColorfulTheme,
) -> Result<()> {
    loop {
        let choice = Select::with_theme(theme)
            .with_prompt("Minerals")
            .items(&[
                "List", "Sort", "Search", "Filter", "Add", "Update", "Delete", "Back",
            ])
            .default(0)
            .interact()?;
        match choice {
            0 => output.table(
                registries
                    .minerals
                    .iter()
                    .map(|(_, m)| MineralRow::from_mineral(m))
                    .collect(),
            ),
            1 => output.table(
                registries
                    .minerals
                    .sorted_by_name()
                    .into_iter()
                    .map(MineralRow::from_mineral)
                    .collect(),
            ),
            2 => {
                let prefix = prompt_nonempty(theme, "Name prefix")?;
                output.table(
                    registries
                        .minerals
                        .search_by_name(&prefix)
                        .into_iter()
                        .map(MineralRow::from_mineral)
                        .collect(),
                );
            }
            3 => {
                output.info("Blank criteria are ignored; the rest combine with AND.");
                let criteria = MineralFilter {
                    name_contains: prompt_opt(theme, "Name contains")?,
                    color: prompt_opt(theme, "Color (exact)")?,
                    fracture: prompt_opt(theme, "Fracture (exact)")?,
                    hardness: prompt_f64(theme, "Hardness value")?,
                };
                if criteria.is_empty() {
                    output.info("No criteria given; listing the whole catalog.");
                }
                output.table(
                    registries
                        .minerals
                        .filter(&criteria)
                        .into_iter()
                        .map(MineralRow::from_mineral)
                        .collect(),
                );
            }
            4 => {
                if let Some(mineral) = build_mineral(registries, output, theme)? {
                    let name = mineral.name.clone().unwrap_or_default();
                    registries.minerals.add(mineral);
                    output.success(format!("Added '{name}' to the catalog"));
                }
            }
            5 => update_mineral(registries, output, theme)?,
            6 => {
                let name = prompt_nonempty(theme, "Mineral name to delete")?;
                if registries.minerals.delete_by_name(&name) {
                    output.success(format!("Deleted '{name}' from the catalog"));
                } else {
                    output.warning(format!("No catalogued mineral named '{name}'"));
                }
            }
            _ => return Ok(()),
        }
    }
}

/// Prompt for a complete mineral. Name uniqueness against the catalog is
/// checked here, on the calling side; the registry itself only stores.
fn build_mineral(
    registries: &Registries,
    output: &OutputWriter,
    theme: &ColorfulTheme,
) -> Result<Option<Mineral>> {
    let name = loop {
        let candidate = prompt_nonempty(theme, "Name")?;
        if registries.minerals.exists(&candidate) {
            output.warning(format!("'{candidate}' already exists, choose another name"));
            continue;
        }
        break candidate;
    };
    let mut mineral = Mineral::named(name);
    mineral.luster = prompt_list(theme, "Luster (comma or '/' separated)")?;
    mineral.color = prompt_list(theme, "Color (comma or '/' separated)")?;
    loop {
        let min = prompt_f64(theme, "Hardness MIN (1..10, blank if unknown)")?;
        let max = prompt_f64(theme, "Hardness MAX (1..10, blank if unknown)")?;
        match mineral.set_hardness(min, max) {
            Ok(true) => {
                output.info("MIN was greater than MAX; swapped.");
                break;
            }
            Ok(false) => break,
            Err(e) => output.error(e),
        }
    }
    mineral.fracture = prompt_opt(theme, "Fracture (blank if unknown)")?;
    if Confirm::with_theme(theme)
        .with_prompt("Save this mineral?")
        .default(true)
        .interact()?
    {
        Ok(Some(mineral))
    } else {
        output.info("Canceled");
        Ok(None)
    }
}

fn update_mineral(
    registries: &mut Registries,
    output: &OutputWriter,
    theme: &ColorfulTheme,
) -> Result<()> {
    let listing: Vec<String> = registries
        .minerals
        .iter()
        .map(|(_, m)| m.name.clone().unwrap_or_else(|| "(unnamed)".into()))
        .collect();
    if listing.is_empty() {
        output.warning("The catalog is empty");
        return Ok(());
    }
    // Position in the list the user just saw is the registry index.
    let index = Select::with_theme(theme)
        .with_prompt("Mineral to update")
        .items(&listing)
        .interact()?;
    output.info("Blank fields keep their current value.");
    let luster = prompt_list(theme, "New luster")?;
    let color = prompt_list(theme, "New color")?;
    let min = prompt_f64(theme, "New hardness MIN")?;
    let max = prompt_f64(theme, "New hardness MAX")?;
    let fracture = prompt_opt(theme, "New fracture")?;

    let mut hardness_result: orekeep_core::Result<bool> = Ok(false);
    let update = registries.minerals.update(index, |m| {
        // Hardness goes first: set_hardness validates before it assigns, so a
        // rejected value leaves the whole record untouched.
        if min.is_some() || max.is_some() {
            let merged_min = min.or(m.hardness_min());
            let merged_max = max.or(m.hardness_max());
            hardness_result = m.set_hardness(merged_min, merged_max);
            if hardness_result.is_err() {
                return;
            }
        }
        if !luster.is_empty() {
            m.luster = luster.clone();
        }
        if !color.is_empty() {
            m.color = color.clone();
        }
        if fracture.is_some() {
            m.fracture = fracture.clone();
        }
    });
    match (update, hardness_result) {
        (Err(e), _) | (_, Err(e)) => output.error(e),
        (Ok(()), Ok(swapped)) => {
            if swapped {
                output.info("MIN was greater than MAX; swapped.");
            }
            output.success(format!("Updated '{}'", listing[index]));
        }
    }
    Ok(())
}

// -------- workers --------

fn workers_menu(
    registries: &mut Registries,
    output: &OutputWriter,
    theme: &ColorfulTheme,
) -> Result<()> {
    loop {
        let choice = Select::with_theme(theme)
            .with_prompt("Workers")
            .items(&[
                "List",
                "Show",
                "Add",
                "Update",
                "Delete",
                "Set shift",
                "Remove shift",
                "Back",
            ])
            .default(0)
            .interact()?;
        match choice {
            0 => output.table(
                registries
                    .workers
                    .all()
                    .iter()
                    .map(WorkerRow::from_worker)
                    .collect(),
            ),
            1 => {
                let id = prompt_nonempty(theme, "Worker id")?;
                match registries.workers.get(&id) {
                    Some(worker) => {
                        output.table(vec![WorkerRow::from_worker(worker)]);
                        output.table(vec![PaycheckRow::from_worker(worker)]);
                    }
                    None => output.error(format!("Worker not found: {id}")),
                }
            }
            2 => {
                let first = prompt_nonempty(theme, "First name")?;
                let last = prompt_nonempty(theme, "Last name")?;
                let phone = prompt_nonempty(theme, "Phone")?;
                let worker = registries.workers.create(&first, &last, &phone);
                output.success(format!("Added worker {} ({})", worker.id, worker.full_name()));
            }
            3 => {
                let id = prompt_nonempty(theme, "Worker id")?;
                output.info("Blank fields keep their current value.");
                let first = prompt_opt(theme, "New first name")?;
                let last = prompt_opt(theme, "New last name")?;
                let phone = prompt_opt(theme, "New phone")?;
                report(
                    output,
                    registries
                        .workers
                        .update(&id, |w: &mut Worker| {
                            if let Some(v) = first {
                                w.first_name = v;
                            }
                            if let Some(v) = last {
                                w.last_name = v;
                            }
                            if let Some(v) = phone {
                                w.phone = v;
                            }
                        })
                        .map(|_| format!("Updated worker {id}")),
                );
            }
            4 => {
                let id = prompt_nonempty(theme, "Worker id to delete")?;
                if registries.workers.delete(&id) {
                    output.success(format!("Deleted worker {id}"));
                } else {
                    output.warning(format!("No worker with id {id}"));
                }
            }
            5 => set_shift(registries, output, theme)?,
            6 => {
                let id = prompt_nonempty(theme, "Worker id")?;
                let day = match parse_weekday(&prompt_nonempty(theme, "Weekday (1-7 or name)")?) {
                    Ok(day) => day,
                    Err(e) => {
                        output.error(e);
                        continue;
                    }
                };
                match registries.workers.remove_shift(&id, day) {
                    Ok(true) => output.success(format!("Removed the {day} shift")),
                    Ok(false) => output.warning(format!("No shift on {day}")),
                    Err(e) => output.error(e),
                }
            }
            _ => return Ok(()),
        }
    }
}

fn set_shift(
    registries: &mut Registries,
    output: &OutputWriter,
    theme: &ColorfulTheme,
) -> Result<()> {
    let worker_id = prompt_nonempty(theme, "Worker id")?;
    let day = match parse_weekday(&prompt_nonempty(theme, "Weekday (1-7 or name)")?) {
        Ok(day) => day,
        Err(e) => {
            output.error(e);
            return Ok(());
        }
    };
    let (start, end) = match (
        parse_time(&prompt_nonempty(theme, "Start (H:MM)")?),
        parse_time(&prompt_nonempty(theme, "End (H:MM)")?),
    ) {
        (Ok(s), Ok(e)) => (s, e),
        (Err(e), _) | (_, Err(e)) => {
            output.error(e);
            return Ok(());
        }
    };
    let location_key = prompt_nonempty(theme, "Location (id or name)")?;
    let Some(location_id) = registries
        .locations
        .resolve(&location_key)
        .map(|l| l.id.clone())
    else {
        output.error(format!("Location not found: {location_key}"));
        return Ok(());
    };
    let Some(wage) = prompt_f64(theme, "Hourly wage")? else {
        output.warning("Canceled: wage is required");
        return Ok(());
    };
    let shift = match WorkShift::new(day, start, end, location_id, wage) {
        Ok(s) => s,
        Err(e) => {
            output.error(e);
            return Ok(());
        }
    };

    // Try without replacement first so an occupied day asks before clobbering.
    match registries.set_shift(&worker_id, shift.clone(), false) {
        Ok(_) => output.success(format!("Scheduled {day} for worker {worker_id}")),
        Err(OrekeepError::ShiftDayTaken { .. }) => {
            if Confirm::with_theme(theme)
                .with_prompt(format!("{day} is already scheduled. Replace it?"))
                .default(false)
                .interact()?
            {
                report(
                    output,
                    registries
                        .set_shift(&worker_id, shift, true)
                        .map(|_| format!("Replaced the {day} shift")),
                );
            } else {
                output.info("Kept the existing shift");
            }
        }
        Err(e) => output.error(e),
    }
    Ok(())
}

// -------- payroll --------

fn payroll_menu(
    registries: &mut Registries,
    output: &OutputWriter,
    theme: &ColorfulTheme,
) -> Result<()> {
    loop {
        let choice = Select::with_theme(theme)
            .with_prompt("Payroll")
            .items(&["Paycheck for one worker", "Paychecks for all", "Back"])
            .default(0)
            .interact()?;
        match choice {
            0 => {
                let id = prompt_nonempty(theme, "Worker id")?;
                match payroll::paycheck_for(&registries.workers, &id) {
                    Some(amount) => {
                        output.kv("Typical monthly pay", format!("{amount:.2}"));
                    }
                    None => output.error(format!("Worker not found: {id}")),
                }
            }
            1 => output.table(
                registries
                    .workers
                    .all()
                    .iter()
                    .map(PaycheckRow::from_worker)
                    .collect(),
            ),
            _ => return Ok(()),
        }
    }
}
