use crate::config::PlanningConfig;
use crate::model::{Employee, Preference, Roster};
use crate::schedule::Schedule;
use crate::storage;
use anyhow::Context;
use chrono::{DateTime, Utc};
use csv::{ReaderBuilder, Trim, WriterBuilder};
use serde::Serialize;
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const NAME_COLUMN: &str = "Name";
pub const EMPLOYEE_COLUMN: &str = "Employee";
/// Valeur explicite « pas de préférence », acceptée sans avertissement.
pub const NO_PREFERENCE: &str = "None";

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("cannot read input {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("missing column: {0}")]
    MissingColumn(String),
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// Résultat d'un import : personnes retenues et lignes écartées.
#[derive(Debug, Clone, Default)]
pub struct ImportReport {
    pub employees: Vec<Employee>,
    pub skipped_rows: usize,
    pub unknown_preferences: usize,
}

impl ImportReport {
    pub fn into_roster(self) -> Roster {
        Roster {
            employees: self.employees,
        }
    }
}

/// Import de personnes depuis CSV: header `Name,<jour 1>,...,<jour N>`
pub fn import_employees_csv<P: AsRef<Path>>(
    path: P,
    config: &PlanningConfig,
) -> Result<ImportReport, ImportError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ImportError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    read_employees_csv(file, config)
}

pub fn read_employees_csv<R: Read>(
    reader: R,
    config: &PlanningConfig,
) -> Result<ImportReport, ImportError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let column = |label: &str| {
        headers
            .iter()
            .position(|h| h == label)
            .ok_or_else(|| ImportError::MissingColumn(label.to_string()))
    };
    let name_col = column(NAME_COLUMN)?;
    let day_cols = config
        .days
        .iter()
        .map(|d| column(d.as_str()))
        .collect::<Result<Vec<_>, _>>()?;

    let mut report = ImportReport::default();
    let mut seen = HashSet::new();
    for (line, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let row = line + 2;
        let Some(name) = rec.get(name_col) else {
            tracing::warn!(row, fields = rec.len(), "missing name cell, row skipped");
            report.skipped_rows += 1;
            continue;
        };
        if name.is_empty() {
            tracing::debug!(row, "blank name, row skipped");
            continue;
        }
        let cells: Option<Vec<&str>> = day_cols.iter().map(|&c| rec.get(c)).collect();
        let Some(cells) = cells else {
            tracing::warn!(row, employee = name, fields = rec.len(), "missing preference cells, row skipped");
            report.skipped_rows += 1;
            continue;
        };
        if !seen.insert(name.to_string()) {
            tracing::warn!(row, employee = name, "duplicate name, row skipped");
            report.skipped_rows += 1;
            continue;
        }

        let mut preferences = Vec::with_capacity(cells.len());
        for (day, raw) in config.days.iter().zip(cells) {
            let pref = Preference::parse(raw, &config.shifts);
            if pref == Preference::NoPreference && !raw.is_empty() && raw != NO_PREFERENCE {
                tracing::warn!(row, employee = name, day = %day, value = raw, "unknown shift, treated as no preference");
                report.unknown_preferences += 1;
            }
            preferences.push(pref);
        }
        report.employees.push(Employee::new(name, preferences));
    }
    Ok(report)
}

/// Rendu CSV du planning: header `Employee,<jour 1>,...`, une ligne par personne
/// dans l'ordre courant du roster, cellule vide si non affecté.
pub fn render_schedule_csv(roster: &Roster, config: &PlanningConfig) -> anyhow::Result<String> {
    let mut w = WriterBuilder::new().has_headers(false).from_writer(Vec::new());
    let mut header = vec![EMPLOYEE_COLUMN];
    header.extend(config.days.iter().map(String::as_str));
    w.write_record(&header)?;
    for employee in &roster.employees {
        let mut row = vec![employee.name.as_str()];
        row.extend((0..config.horizon()).map(|d| employee.assigned_shift(d).unwrap_or("")));
        w.write_record(&row)?;
    }
    let bytes = w.into_inner().map_err(|e| anyhow::anyhow!("flushing csv: {e}"))?;
    Ok(String::from_utf8(bytes)?)
}

/// Export CSV atomique du planning par personne.
pub fn export_schedule_csv<P: AsRef<Path>>(
    path: P,
    roster: &Roster,
    config: &PlanningConfig,
) -> anyhow::Result<()> {
    let path = path.as_ref();
    let csv = render_schedule_csv(roster, config)?;
    storage::write_atomic(path, csv.as_bytes())
        .with_context(|| format!("writing schedule {}", path.display()))
}

#[derive(Debug, Serialize)]
struct ScheduleDocument<'a> {
    generated_at: DateTime<Utc>,
    min_employees_per_shift: usize,
    days: Vec<DayDocument<'a>>,
}

#[derive(Debug, Serialize)]
struct DayDocument<'a> {
    day: &'a str,
    shifts: Vec<ShiftDocument<'a>>,
}

#[derive(Debug, Serialize)]
struct ShiftDocument<'a> {
    shift: &'a str,
    employees: &'a [String],
    understaffed: bool,
}

/// Export JSON (jolie mise en forme) : jour -> shift -> noms.
pub fn export_schedule_json<P: AsRef<Path>>(
    path: P,
    schedule: &Schedule,
    min_per_shift: usize,
) -> anyhow::Result<()> {
    let path = path.as_ref();
    let json = render_schedule_json(schedule, min_per_shift, Utc::now())?;
    storage::write_atomic(path, json.as_bytes())
        .with_context(|| format!("writing schedule {}", path.display()))
}

pub fn render_schedule_json(
    schedule: &Schedule,
    min_per_shift: usize,
    generated_at: DateTime<Utc>,
) -> anyhow::Result<String> {
    let days = schedule
        .days()
        .iter()
        .enumerate()
        .map(|(d, day)| DayDocument {
            day,
            shifts: schedule
                .shifts()
                .iter()
                .enumerate()
                .map(|(s, shift)| {
                    let employees = schedule.assigned(d, s);
                    ShiftDocument {
                        shift,
                        employees,
                        understaffed: employees.len() < min_per_shift,
                    }
                })
                .collect(),
        })
        .collect();
    let doc = ScheduleDocument {
        generated_at,
        min_employees_per_shift: min_per_shift,
        days,
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}
