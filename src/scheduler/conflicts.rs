use super::{AssignOptions, Conflict, ConflictKind, Scheduler};
use crate::schedule::Schedule;
use std::collections::HashSet;

pub(super) fn detect_conflicts(
    scheduler: &Scheduler,
    schedule: &Schedule,
    opts: AssignOptions,
) -> Vec<Conflict> {
    let mut out = Vec::new();

    for employee in &scheduler.roster.employees {
        if employee.assigned_days() > opts.max_shifts_per_employee as usize {
            out.push(Conflict {
                employee: Some(employee.name.clone()),
                day: None,
                shift: None,
                kind: ConflictKind::OverCap,
            });
        }

        let mut days_seen = HashSet::new();
        for (day, shift) in schedule.assignments_of(&employee.name) {
            if !days_seen.insert(day) {
                out.push(Conflict {
                    employee: Some(employee.name.clone()),
                    day: Some(day),
                    shift: Some(shift),
                    kind: ConflictKind::DoubleAssignment,
                });
            }
            let recorded = employee.assigned_shift(day);
            let expected = schedule.shifts().get(shift).map(String::as_str);
            if recorded != expected {
                out.push(Conflict {
                    employee: Some(employee.name.clone()),
                    day: Some(day),
                    shift: Some(shift),
                    kind: ConflictKind::Mismatch,
                });
            }
        }
        if days_seen.len() != employee.assigned_days() {
            out.push(Conflict {
                employee: Some(employee.name.clone()),
                day: None,
                shift: None,
                kind: ConflictKind::Mismatch,
            });
        }
    }

    for (day, shift, names) in schedule.iter() {
        let mut seen = HashSet::new();
        for name in names {
            if !seen.insert(name.as_str()) {
                out.push(Conflict {
                    employee: Some(name.clone()),
                    day: Some(day),
                    shift: Some(shift),
                    kind: ConflictKind::DuplicateInShift,
                });
            }
        }
    }

    for shortfall in schedule.shortfalls(opts.min_employees_per_shift) {
        out.push(Conflict {
            employee: None,
            day: Some(shortfall.day),
            shift: Some(shortfall.shift),
            kind: ConflictKind::Understaffed,
        });
    }

    out
}
