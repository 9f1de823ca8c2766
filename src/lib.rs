#![forbid(unsafe_code)]
//! Planning — génération locale d'un planning hebdomadaire d'équipes (sans BD).
//!
//! - Import CSV des préférences, export CSV/JSON du planning.
//! - Placement glouton : préférences d'abord, puis complétion aléatoire jusqu'au seuil.
//! - Plafond de jours travaillés par personne, un seul shift par jour.
//! - Source aléatoire injectable pour des exécutions reproductibles.

pub mod config;
pub mod io;
pub mod model;
pub mod schedule;
pub mod scheduler;
pub mod storage;
pub mod summary;

pub use config::PlanningConfig;
pub use io::{ImportError, ImportReport};
pub use model::{Employee, Preference, Roster};
pub use schedule::{Schedule, Shortfall};
pub use scheduler::{AssignOptions, Conflict, ConflictKind, PreferenceIndex, SchedError, Scheduler};
pub use summary::{render_summary, ScheduleRenderer, TextSummary};
