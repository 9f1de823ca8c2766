use crate::schedule::Schedule;
use std::fmt::Write;

/// Permet de customiser le rendu du planning (texte, Markdown, etc.).
pub trait ScheduleRenderer {
    fn render(&self, schedule: &Schedule, min_per_shift: usize) -> String;
}

/// Récapitulatif texte : une ligne par jour et par shift, les sous-effectifs marqués.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextSummary;

impl ScheduleRenderer for TextSummary {
    fn render(&self, schedule: &Schedule, min_per_shift: usize) -> String {
        let mut out = String::new();
        for (d, day) in schedule.days().iter().enumerate() {
            let _ = writeln!(out, "{day}");
            for (s, shift) in schedule.shifts().iter().enumerate() {
                let names = schedule.assigned(d, s);
                let listed = if names.is_empty() {
                    "-".to_string()
                } else {
                    names.join(", ")
                };
                let flag = if names.len() < min_per_shift {
                    format!(" (understaffed: {}/{min_per_shift})", names.len())
                } else {
                    String::new()
                };
                let _ = writeln!(out, "  {shift}: {listed}{flag}");
            }
        }
        out
    }
}

/// Rend le planning avec le renderer fourni.
pub fn render_summary(
    schedule: &Schedule,
    min_per_shift: usize,
    renderer: &dyn ScheduleRenderer,
) -> String {
    renderer.render(schedule, min_per_shift)
}
