use crate::scheduler::AssignOptions;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

pub const DEFAULT_DAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];
pub const DEFAULT_SHIFTS: [&str; 3] = ["Morning", "Afternoon", "Evening"];
pub const MAX_SHIFTS_PER_EMPLOYEE: u32 = 5;
pub const MIN_EMPLOYEES_PER_SHIFT: usize = 2;
pub const DEFAULT_BACKUP_POOL: [&str; 8] =
    ["Chris", "Liz", "Ash", "Luna", "Beth", "Jeff", "Dave", "Joe"];

/// Paramètres d'une génération de planning.
///
/// L'ordre de `days` est l'ordre de traitement (et l'index des préférences) ;
/// l'ordre de `shifts` sert de priorité lors du placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanningConfig {
    pub days: Vec<String>,
    pub shifts: Vec<String>,
    pub max_shifts_per_employee: u32,
    pub min_employees_per_shift: usize,
    pub backup_pool: Vec<String>,
}

impl Default for PlanningConfig {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS.iter().map(|d| d.to_string()).collect(),
            shifts: DEFAULT_SHIFTS.iter().map(|s| s.to_string()).collect(),
            max_shifts_per_employee: MAX_SHIFTS_PER_EMPLOYEE,
            min_employees_per_shift: MIN_EMPLOYEES_PER_SHIFT,
            backup_pool: DEFAULT_BACKUP_POOL.iter().map(|n| n.to_string()).collect(),
        }
    }
}

impl PlanningConfig {
    /// Charge et valide une configuration JSON.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read(path).with_context(|| format!("reading config {}", path.display()))?;
        let config: PlanningConfig = serde_json::from_slice(&data)
            .with_context(|| format!("parsing config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        validate_labels("day", &self.days)?;
        validate_labels("shift", &self.shifts)?;
        if self.max_shifts_per_employee == 0 {
            bail!("max_shifts_per_employee must be > 0");
        }
        if self.min_employees_per_shift == 0 {
            bail!("min_employees_per_shift must be > 0");
        }
        if self.backup_pool.iter().any(|n| n.trim().is_empty()) {
            bail!("backup_pool names cannot be empty");
        }
        Ok(())
    }

    pub fn horizon(&self) -> usize {
        self.days.len()
    }

    pub fn day_index(&self, label: &str) -> Option<usize> {
        self.days.iter().position(|d| d == label)
    }

    pub fn shift_index(&self, label: &str) -> Option<usize> {
        self.shifts.iter().position(|s| s == label)
    }

    pub fn assign_options(&self) -> AssignOptions {
        AssignOptions {
            max_shifts_per_employee: self.max_shifts_per_employee,
            min_employees_per_shift: self.min_employees_per_shift,
        }
    }
}

fn validate_labels(kind: &str, labels: &[String]) -> Result<()> {
    if labels.is_empty() {
        bail!("at least one {kind} label is required");
    }
    let mut seen = HashSet::new();
    for label in labels {
        if label.trim().is_empty() {
            bail!("{kind} label cannot be empty");
        }
        if !seen.insert(label.as_str()) {
            bail!("duplicate {kind} label: {label}");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_weekly_constants() {
        let config = PlanningConfig::default();
        assert_eq!(config.horizon(), 7);
        assert_eq!(config.shifts, ["Morning", "Afternoon", "Evening"]);
        assert_eq!(config.backup_pool.len(), 8);
        config.validate().unwrap();
    }

    #[test]
    fn rejects_duplicate_shift_label() {
        let config = PlanningConfig {
            shifts: vec!["Morning".into(), "Morning".into()],
            ..PlanningConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_zero_floor() {
        let config = PlanningConfig {
            min_employees_per_shift: 0,
            ..PlanningConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: PlanningConfig =
            serde_json::from_str(r#"{ "max_shifts_per_employee": 3 }"#).unwrap();
        assert_eq!(config.max_shifts_per_employee, 3);
        assert_eq!(config.min_employees_per_shift, MIN_EMPLOYEES_PER_SHIFT);
        assert_eq!(config.horizon(), 7);
    }
}
