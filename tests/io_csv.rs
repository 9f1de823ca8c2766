#![forbid(unsafe_code)]
use chrono::{TimeZone, Utc};
use planning::io::{self, ImportError};
use planning::{Employee, PlanningConfig, Preference, Scheduler};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::tempdir;

const HEADER: &str = "Name,Monday,Tuesday,Wednesday,Thursday,Friday,Saturday,Sunday";

fn read(body: &str) -> Result<planning::ImportReport, ImportError> {
    let data = format!("{HEADER}\n{body}");
    io::read_employees_csv(data.as_bytes(), &PlanningConfig::default())
}

#[test]
fn blank_and_unknown_cells_become_no_preference() {
    let report = read("Alice,Morning,,Evening,Night,None,,Afternoon\n").unwrap();
    assert_eq!(report.employees.len(), 1);
    assert_eq!(report.unknown_preferences, 1);

    let alice = &report.employees[0];
    assert_eq!(alice.name, "Alice");
    assert_eq!(alice.preferences.len(), 7);
    assert_eq!(alice.preference(0), &Preference::Prefers("Morning".into()));
    assert_eq!(alice.preference(1), &Preference::NoPreference);
    assert_eq!(alice.preference(2), &Preference::Prefers("Evening".into()));
    assert_eq!(alice.preference(3), &Preference::NoPreference);
    assert_eq!(alice.preference(4), &Preference::NoPreference);
    assert_eq!(alice.preference(6), &Preference::Prefers("Afternoon".into()));
}

#[test]
fn blank_short_and_duplicate_rows_are_skipped() {
    let report = read(
        ",Morning,Morning,Morning,Morning,Morning,Morning,Morning\n\
         Carol,Morning\n\
         Bob,Evening,Evening,Evening,Evening,Evening,Evening,Evening\n\
         Bob,Morning,,,,,,\n",
    )
    .unwrap();
    assert_eq!(report.employees.len(), 1);
    assert_eq!(report.employees[0].name, "Bob");
    assert_eq!(report.employees[0].preference(0), &Preference::Prefers("Evening".into()));
    assert_eq!(report.skipped_rows, 2);
}

#[test]
fn columns_are_matched_by_header() {
    let data = "Sunday,Saturday,Friday,Thursday,Wednesday,Tuesday,Monday,Name\n\
                Evening,,,,,,Morning,Dana\n";
    let report = io::read_employees_csv(data.as_bytes(), &PlanningConfig::default()).unwrap();
    let dana = &report.employees[0];
    assert_eq!(dana.preference(0), &Preference::Prefers("Morning".into()));
    assert_eq!(dana.preference(6), &Preference::Prefers("Evening".into()));
}

#[test]
fn header_only_gives_empty_roster() {
    let report = read("").unwrap();
    assert!(report.employees.is_empty());
    assert_eq!(report.skipped_rows, 0);
}

#[test]
fn missing_day_column_is_an_error() {
    let data = "Name,Monday,Tuesday\nAlice,Morning,Evening\n";
    let err = io::read_employees_csv(data.as_bytes(), &PlanningConfig::default()).unwrap_err();
    assert!(matches!(err, ImportError::MissingColumn(ref c) if c == "Wednesday"));
}

#[test]
fn missing_input_file_is_reported() {
    let dir = tempdir().unwrap();
    let err = io::import_employees_csv(dir.path().join("absent.csv"), &PlanningConfig::default())
        .unwrap_err();
    assert!(matches!(err, ImportError::Unreadable { .. }));
    assert!(err.to_string().contains("absent.csv"));
}

fn two_day_config() -> PlanningConfig {
    PlanningConfig {
        days: vec!["Mon".into(), "Tue".into()],
        shifts: vec!["Day".into()],
        max_shifts_per_employee: 1,
        min_employees_per_shift: 1,
        backup_pool: Vec::new(),
    }
}

fn two_day_scheduler() -> Scheduler {
    let mut s = Scheduler::new(two_day_config());
    s.add_employees(vec![
        Employee::new("Alice", vec![Preference::Prefers("Day".into()), Preference::NoPreference]),
        Employee::new("Bob", vec![Preference::NoPreference, Preference::Prefers("Day".into())]),
    ])
    .unwrap();
    s
}

#[test]
fn export_csv_lists_every_employee() {
    let mut s = two_day_scheduler();
    s.assign_week(&mut StdRng::seed_from_u64(5));

    let rendered = io::render_schedule_csv(s.roster(), s.config())
        .unwrap()
        .replace("\r\n", "\n");
    let mut lines: Vec<&str> = rendered.lines().collect();
    lines[1..].sort();
    insta::assert_snapshot!(lines.join("\n"), @r"
    Employee,Mon,Tue
    Alice,Day,
    Bob,,Day
    ");

    let dir = tempdir().unwrap();
    let path = dir.path().join("output.csv");
    io::export_schedule_csv(&path, s.roster(), s.config()).unwrap();
    let written = std::fs::read_to_string(&path).unwrap().replace("\r\n", "\n");
    assert_eq!(written, rendered);
}

#[test]
fn export_json_flags_understaffed_shifts() {
    let config = PlanningConfig {
        min_employees_per_shift: 2,
        max_shifts_per_employee: 2,
        ..two_day_config()
    };
    let mut s = Scheduler::new(config);
    s.add_employees(vec![Employee::without_preferences("Alice", 2)])
        .unwrap();
    let schedule = s.assign_week(&mut StdRng::seed_from_u64(9));

    let at = Utc.with_ymd_and_hms(2025, 10, 6, 8, 0, 0).unwrap();
    let json = io::render_schedule_json(&schedule, 2, at).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["generated_at"], "2025-10-06T08:00:00Z");
    assert_eq!(value["days"][0]["day"], "Mon");
    assert_eq!(value["days"][0]["shifts"][0]["employees"][0], "Alice");
    assert_eq!(value["days"][1]["shifts"][0]["understaffed"], true);

    let dir = tempdir().unwrap();
    let path = dir.path().join("schedule.json");
    io::export_schedule_json(&path, &schedule, 2).unwrap();
    assert!(path.exists());
}

#[test]
fn export_to_missing_directory_fails() {
    let s = two_day_scheduler();
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope").join("output.csv");
    assert!(io::export_schedule_csv(&path, s.roster(), s.config()).is_err());
}

#[test]
fn short_row_with_name_last_is_counted_as_skipped() {
    let data = "Monday,Tuesday,Wednesday,Thursday,Friday,Saturday,Sunday,Name\n\
                Morning,,,,,,,Zed\n\
                Morning,Evening\n";
    let report = io::read_employees_csv(data.as_bytes(), &PlanningConfig::default()).unwrap();
    assert_eq!(report.employees.len(), 1);
    assert_eq!(report.employees[0].name, "Zed");
    assert_eq!(report.skipped_rows, 1);
}

#[test]
fn padded_cells_are_trimmed_by_the_reader_only() {
    let report = read("  Eve , Morning ,None,,,,,\n").unwrap();
    let eve = &report.employees[0];
    assert_eq!(eve.name, "Eve");
    assert_eq!(eve.preference(0), &Preference::Prefers("Morning".into()));
    assert_eq!(eve.preference(1), &Preference::NoPreference);
    assert_eq!(report.unknown_preferences, 0);

    let shifts = PlanningConfig::default().shifts;
    assert_eq!(Preference::parse(" Morning", &shifts), Preference::NoPreference);
    assert_eq!(Preference::parse(io::NO_PREFERENCE, &shifts), Preference::NoPreference);
}

#[test]
fn export_rows_follow_final_roster_order() {
    let mut s = Scheduler::new(PlanningConfig::default());
    s.add_employees(vec![
        Employee::new("Alice", vec![Preference::Prefers("Morning".into()); 7]),
        Employee::new("Bob", vec![Preference::Prefers("Evening".into()); 7]),
    ])
    .unwrap();
    s.augment_with_backup_pool();
    s.assign_week(&mut StdRng::seed_from_u64(11));

    let rendered = io::render_schedule_csv(s.roster(), s.config()).unwrap();
    let names: Vec<&str> = rendered
        .lines()
        .skip(1)
        .map(|l| l.split(',').next().unwrap())
        .collect();
    let expected: Vec<&str> = s.roster().employees.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, expected);
    assert_eq!(names.len(), 10);
}
