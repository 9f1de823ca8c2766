use super::{preference::PreferenceIndex, AssignOptions, Scheduler};
use crate::model::Employee;
use crate::schedule::Schedule;
use rand::seq::SliceRandom;
use rand::Rng;

pub(super) fn assign_week<R: Rng + ?Sized>(
    scheduler: &mut Scheduler,
    opts: AssignOptions,
    rng: &mut R,
) -> Schedule {
    let mut schedule = Schedule::new(&scheduler.config);
    for day in 0..scheduler.config.horizon() {
        let lists = assign_day(scheduler, day, opts, rng);
        schedule.commit_day(day, lists);
    }
    tracing::info!(
        employees = scheduler.roster.len(),
        assignments = schedule.total_assignments(),
        shortfalls = schedule.shortfalls(opts.min_employees_per_shift).len(),
        "week assigned"
    );
    schedule
}

/// Une journée complète : mélange, placement préférentiel puis complétion.
/// Les fiches sont mises à jour au fil des placements.
pub(super) fn assign_day<R: Rng + ?Sized>(
    scheduler: &mut Scheduler,
    day: usize,
    opts: AssignOptions,
    rng: &mut R,
) -> Vec<Vec<String>> {
    let shifts = scheduler.config.shifts.clone();
    scheduler.roster.employees.shuffle(rng);

    let index = PreferenceIndex::build(&scheduler.roster, day, &shifts, opts);
    let employees = &mut scheduler.roster.employees;
    let mut lists: Vec<Vec<String>> = vec![Vec::new(); shifts.len()];

    for (s, shift) in shifts.iter().enumerate() {
        for &idx in index.candidates(s) {
            if lists[s].len() >= opts.min_employees_per_shift {
                break;
            }
            place(&mut employees[idx], day, shift, opts, &mut lists[s]);
        }
    }
    tracing::debug!(day, placed = lists.iter().map(Vec::len).sum::<usize>(), "preferred placement done");

    for (s, shift) in shifts.iter().enumerate() {
        while lists[s].len() < opts.min_employees_per_shift {
            let mut eligible: Vec<usize> = employees
                .iter()
                .enumerate()
                .filter(|(_, e)| {
                    e.has_capacity(opts.max_shifts_per_employee)
                        && !e.is_assigned_on(day)
                        && !lists[s].contains(&e.name)
                })
                .map(|(i, _)| i)
                .collect();
            if eligible.is_empty() {
                tracing::debug!(day, shift = %shift, assigned = lists[s].len(), "no eligible employee left");
                break;
            }
            eligible.shuffle(rng);
            place(&mut employees[eligible[0]], day, shift, opts, &mut lists[s]);
        }
    }

    lists
}

/// Revérifie plafond et affectation du jour au moment du placement.
fn place(
    employee: &mut Employee,
    day: usize,
    shift: &str,
    opts: AssignOptions,
    list: &mut Vec<String>,
) -> bool {
    if !employee.has_capacity(opts.max_shifts_per_employee) {
        return false;
    }
    if !employee.record_assignment(day, shift) {
        return false;
    }
    list.push(employee.name.clone());
    true
}
