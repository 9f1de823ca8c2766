use crate::config::PlanningConfig;
use serde::{Deserialize, Serialize};

/// Shift resté sous le seuil minimal après complétion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortfall {
    pub day: usize,
    pub shift: usize,
    pub assigned: usize,
    pub missing: usize,
}

/// Planning produit : jour -> shift -> noms, dans l'ordre d'affectation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    days: Vec<String>,
    shifts: Vec<String>,
    slots: Vec<Vec<Vec<String>>>,
}

impl Schedule {
    pub fn new(config: &PlanningConfig) -> Self {
        Self::with_labels(config.days.clone(), config.shifts.clone())
    }

    pub fn with_labels(days: Vec<String>, shifts: Vec<String>) -> Self {
        let slots = vec![vec![Vec::new(); shifts.len()]; days.len()];
        Self {
            days,
            shifts,
            slots,
        }
    }

    pub fn days(&self) -> &[String] {
        &self.days
    }

    pub fn shifts(&self) -> &[String] {
        &self.shifts
    }

    /// Noms affectés à `shift` le jour `day` (vide si hors bornes).
    pub fn assigned(&self, day: usize, shift: usize) -> &[String] {
        self.slots
            .get(day)
            .and_then(|d| d.get(shift))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn assigned_by_label(&self, day: &str, shift: &str) -> &[String] {
        let d = self.days.iter().position(|l| l == day);
        let s = self.shifts.iter().position(|l| l == shift);
        match (d, s) {
            (Some(d), Some(s)) => self.assigned(d, s),
            _ => &[],
        }
    }

    /// Vue inverse : (jour, shift) d'une personne, dans l'ordre des jours.
    pub fn assignments_of(&self, name: &str) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        for (d, day) in self.slots.iter().enumerate() {
            for (s, names) in day.iter().enumerate() {
                if names.iter().any(|n| n == name) {
                    out.push((d, s));
                }
            }
        }
        out
    }

    /// Itère sur (jour, shift, noms).
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &[String])> {
        self.slots.iter().enumerate().flat_map(|(d, day)| {
            day.iter()
                .enumerate()
                .map(move |(s, names)| (d, s, names.as_slice()))
        })
    }

    pub fn total_assignments(&self) -> usize {
        self.iter().map(|(_, _, names)| names.len()).sum()
    }

    pub fn shortfalls(&self, min_per_shift: usize) -> Vec<Shortfall> {
        self.iter()
            .filter(|(_, _, names)| names.len() < min_per_shift)
            .map(|(day, shift, names)| Shortfall {
                day,
                shift,
                assigned: names.len(),
                missing: min_per_shift - names.len(),
            })
            .collect()
    }

    /// Valide les listes d'une journée (une liste par shift).
    pub(crate) fn commit_day(&mut self, day: usize, lists: Vec<Vec<String>>) {
        debug_assert_eq!(lists.len(), self.shifts.len());
        if let Some(slot) = self.slots.get_mut(day) {
            *slot = lists;
        }
    }
}
