mod assignment;
mod conflicts;
mod preference;
mod types;

pub use preference::PreferenceIndex;
pub use types::{AssignOptions, Conflict, ConflictKind, SchedError};

use crate::config::PlanningConfig;
use crate::model::{Employee, Roster};
use crate::schedule::Schedule;
use rand::Rng;

/// Scheduler : encapsule le Roster et la configuration de la semaine
#[derive(Debug, Default)]
pub struct Scheduler {
    roster: Roster,
    config: PlanningConfig,
}

impl Scheduler {
    pub fn new(config: PlanningConfig) -> Self {
        Self {
            roster: Roster::default(),
            config,
        }
    }

    pub fn with_roster(config: PlanningConfig, roster: Roster) -> Self {
        Self { roster, config }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn config(&self) -> &PlanningConfig {
        &self.config
    }

    pub fn into_roster(self) -> Roster {
        self.roster
    }

    pub fn add_employees(&mut self, employees: Vec<Employee>) -> Result<(), SchedError> {
        for employee in employees {
            self.roster.add(employee)?;
        }
        Ok(())
    }

    pub fn augment_with_backup_pool(&mut self) -> usize {
        self.roster.augment_with_backup_pool(&self.config)
    }

    /// Assigne toute la semaine, jour après jour, avec la source aléatoire fournie.
    /// N'échoue jamais : un shift impossible à compléter reste en sous-effectif.
    pub fn assign_week<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Schedule {
        let opts = self.config.assign_options();
        assignment::assign_week(self, opts, rng)
    }

    /// Assigne une seule journée et l'écrit dans `schedule`.
    pub fn assign_day<R: Rng + ?Sized>(
        &mut self,
        day: usize,
        schedule: &mut Schedule,
        rng: &mut R,
    ) {
        if day >= self.config.horizon() {
            return;
        }
        let opts = self.config.assign_options();
        let lists = assignment::assign_day(self, day, opts, rng);
        schedule.commit_day(day, lists);
    }

    pub fn preference_index(&self, day: usize) -> PreferenceIndex {
        PreferenceIndex::build(
            &self.roster,
            day,
            &self.config.shifts,
            self.config.assign_options(),
        )
    }

    pub fn detect_conflicts(&self, schedule: &Schedule, opts: AssignOptions) -> Vec<Conflict> {
        conflicts::detect_conflicts(self, schedule, opts)
    }
}
