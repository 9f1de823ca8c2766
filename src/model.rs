use crate::config::PlanningConfig;
use crate::scheduler::SchedError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Préférence d'une personne pour un jour donné.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Preference {
    #[default]
    NoPreference,
    Prefers(String),
}

impl Preference {
    /// Interprète une cellule brute (comparaison exacte). Toute valeur hors
    /// de `shifts` (vide, "None", faute de frappe) devient `NoPreference`.
    pub fn parse(raw: &str, shifts: &[String]) -> Self {
        match shifts.iter().find(|s| s.as_str() == raw) {
            Some(shift) => Preference::Prefers(shift.clone()),
            None => Preference::NoPreference,
        }
    }

    pub fn shift(&self) -> Option<&str> {
        match self {
            Preference::Prefers(s) => Some(s.as_str()),
            Preference::NoPreference => None,
        }
    }
}

/// Membre de l'équipe et son état d'affectation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub name: String,
    pub preferences: Vec<Preference>,
    #[serde(default)]
    assigned_shifts: BTreeMap<usize, String>,
}

impl Employee {
    pub fn new<N: Into<String>>(name: N, preferences: Vec<Preference>) -> Self {
        Self {
            name: name.into(),
            preferences,
            assigned_shifts: BTreeMap::new(),
        }
    }

    /// Personne sans aucune préférence sur `horizon` jours.
    pub fn without_preferences<N: Into<String>>(name: N, horizon: usize) -> Self {
        Self::new(name, vec![Preference::NoPreference; horizon])
    }

    /// Préférence du jour `day` ; un vecteur trop court vaut `NoPreference`.
    pub fn preference(&self, day: usize) -> &Preference {
        static NONE: Preference = Preference::NoPreference;
        self.preferences.get(day).unwrap_or(&NONE)
    }

    pub fn assigned_days(&self) -> usize {
        self.assigned_shifts.len()
    }

    pub fn assigned_shift(&self, day: usize) -> Option<&str> {
        self.assigned_shifts.get(&day).map(String::as_str)
    }

    pub fn is_assigned_on(&self, day: usize) -> bool {
        self.assigned_shifts.contains_key(&day)
    }

    pub fn has_capacity(&self, max_shifts: u32) -> bool {
        self.assigned_days() < max_shifts as usize
    }

    /// Vue jour -> shift des affectations.
    pub fn assignments(&self) -> impl Iterator<Item = (usize, &str)> {
        self.assigned_shifts.iter().map(|(d, s)| (*d, s.as_str()))
    }

    /// Enregistre une affectation ; refuse un second shift le même jour.
    pub(crate) fn record_assignment(&mut self, day: usize, shift: &str) -> bool {
        if self.is_assigned_on(day) {
            return false;
        }
        self.assigned_shifts.insert(day, shift.to_string());
        true
    }
}

/// Équipe complète (déclarée + renforts).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Roster {
    pub employees: Vec<Employee>,
}

impl Roster {
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn find_by_name<'a>(&'a self, name: &str) -> Option<&'a Employee> {
        self.employees.iter().find(|e| e.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find_by_name(name).is_some()
    }

    /// Ajoute une personne ; le nom sert d'identifiant unique.
    pub fn add(&mut self, employee: Employee) -> Result<(), SchedError> {
        if employee.name.trim().is_empty() {
            return Err(SchedError::InvalidEmployee("empty name"));
        }
        if self.contains(&employee.name) {
            return Err(SchedError::DuplicateEmployee(employee.name));
        }
        self.employees.push(employee);
        Ok(())
    }

    /// Ajoute le pool de renforts (sans préférence) en fin de liste.
    /// Un nom déjà présent est ignoré. Retourne le nombre d'ajouts.
    pub fn augment_with_backup_pool(&mut self, config: &PlanningConfig) -> usize {
        let mut added = 0;
        for name in &config.backup_pool {
            let backup = Employee::without_preferences(name.clone(), config.horizon());
            match self.add(backup) {
                Ok(()) => added += 1,
                Err(err) => tracing::warn!(backup = %name, %err, "backup skipped"),
            }
        }
        added
    }
}
