use thiserror::Error;

/// Options d'assignation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssignOptions {
    pub max_shifts_per_employee: u32,
    pub min_employees_per_shift: usize,
}

impl Default for AssignOptions {
    fn default() -> Self {
        Self {
            max_shifts_per_employee: crate::config::MAX_SHIFTS_PER_EMPLOYEE,
            min_employees_per_shift: crate::config::MIN_EMPLOYEES_PER_SHIFT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConflictKind {
    /// plus de jours travaillés que le plafond
    OverCap,
    /// deux shifts le même jour
    DoubleAssignment,
    /// nom répété dans une même liste
    DuplicateInShift,
    /// fiche personne et planning divergent
    Mismatch,
    /// shift sous le seuil minimal (constat, pas une erreur)
    Understaffed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    pub employee: Option<String>,
    pub day: Option<usize>,
    pub shift: Option<usize>,
    pub kind: ConflictKind,
}

#[derive(Error, Debug)]
pub enum SchedError {
    #[error("duplicate employee name: {0}")]
    DuplicateEmployee(String),
    #[error("invalid employee: {0}")]
    InvalidEmployee(&'static str),
}
