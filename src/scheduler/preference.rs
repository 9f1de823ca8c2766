use super::AssignOptions;
use crate::model::Roster;

/// Candidats par shift pour un jour : indices dans `roster.employees`,
/// dans l'ordre courant du roster. Recalculé chaque jour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceIndex {
    day: usize,
    by_shift: Vec<Vec<usize>>,
}

impl PreferenceIndex {
    pub fn build(roster: &Roster, day: usize, shifts: &[String], opts: AssignOptions) -> Self {
        let mut by_shift = vec![Vec::new(); shifts.len()];
        for (idx, employee) in roster.employees.iter().enumerate() {
            if !employee.has_capacity(opts.max_shifts_per_employee) || employee.is_assigned_on(day)
            {
                continue;
            }
            let Some(wanted) = employee.preference(day).shift() else {
                continue;
            };
            if let Some(pos) = shifts.iter().position(|s| s == wanted) {
                by_shift[pos].push(idx);
            }
        }
        Self { day, by_shift }
    }

    pub fn day(&self) -> usize {
        self.day
    }

    pub fn candidates(&self, shift: usize) -> &[usize] {
        self.by_shift.get(shift).map(Vec::as_slice).unwrap_or(&[])
    }
}
