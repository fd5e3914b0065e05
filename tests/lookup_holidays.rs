#![forbid(unsafe_code)]
use chrono::NaiveDate;
use escala::{
    generate, holidays_or_empty, lookup, month_view, Assignment, CsvFileHolidays, Holiday,
    JsonFileHolidays, ShiftName,
};
use std::fs;
use tempfile::tempdir;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn turnos() -> Vec<ShiftName> {
    ["Noite", "Tarde", "Manhã"]
        .iter()
        .map(|s| ShiftName::new(s).unwrap())
        .collect()
}

#[test]
fn holiday_takes_precedence_but_keeps_assignment() {
    let schedule = generate(&turnos(), 6, 1, d(2025, 1, 6));
    let holidays = vec![Holiday::new(d(2025, 4, 21), "Tiradentes", "national")];

    let info = lookup(&schedule, &holidays, d(2025, 4, 21));
    assert_eq!(info.holiday.map(|h| h.name.as_str()), Some("Tiradentes"));
    assert!(info.assignment.is_some());
    assert_eq!(info.label(), "Tiradentes");

    let info = lookup(&schedule, &holidays, d(2025, 1, 12));
    assert!(info.holiday.is_none());
    assert_eq!(info.assignment, Some(Assignment::Rest));
    assert_eq!(info.label(), "Folga");
}

#[test]
fn day_outside_schedule_has_no_assignment() {
    let schedule = generate(&turnos(), 6, 1, d(2025, 1, 6));
    let holidays = vec![Holiday::new(d(2025, 1, 1), "Confraternização mundial", "national")];
    let info = lookup(&schedule, &holidays, d(2025, 1, 1));
    assert_eq!(info.assignment, None);
    assert!(info.holiday.is_some());
    assert_eq!(lookup(&schedule, &[], d(2026, 1, 1)).label(), "");
}

#[test]
fn holiday_dates_ignore_time_of_day() {
    let raw = r#"[
        {"date": "2025-01-01", "name": "Confraternização mundial", "type": "national"},
        {"date": "2025-04-18T00:00:00", "name": "Sexta-feira Santa", "type": "national"},
        {"date": "2025-12-25T15:30:00-03:00", "name": "Natal", "type": "national"}
    ]"#;
    let holidays: Vec<Holiday> = serde_json::from_str(raw).unwrap();
    assert_eq!(holidays[0].date, d(2025, 1, 1));
    assert_eq!(holidays[1].date, d(2025, 4, 18));
    assert_eq!(holidays[2].date, d(2025, 12, 25));
    assert_eq!(holidays[2].kind, "national");
}

#[test]
fn month_view_lists_every_day() {
    let schedule = generate(&turnos(), 6, 1, d(2024, 1, 1));
    let holidays = vec![Holiday::new(d(2024, 2, 13), "Carnaval", "optional")];
    let feb = month_view(&schedule, &holidays, 2024, 2);
    assert_eq!(feb.len(), 29);
    assert_eq!(feb[0].date, d(2024, 2, 1));
    assert_eq!(feb[28].date, d(2024, 2, 29));
    assert!(feb.iter().all(|info| info.assignment.is_some()));
    assert_eq!(feb.iter().filter(|info| info.holiday.is_some()).count(), 1);
    assert!(month_view(&schedule, &holidays, 2024, 13).is_empty());
}

#[test]
fn file_sources_filter_year_and_failures_mean_no_holidays() {
    let dir = tempdir().unwrap();

    let json = dir.path().join("feriados.json");
    fs::write(
        &json,
        r#"[{"date":"2025-01-01","name":"Ano Novo","type":"national"},
            {"date":"2026-01-01","name":"Ano Novo","type":"national"}]"#,
    )
    .unwrap();
    let list = holidays_or_empty(&JsonFileHolidays::new(&json), 2025);
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].date, d(2025, 1, 1));

    let csv = dir.path().join("feriados.csv");
    fs::write(&csv, "date,name,type\n2025-11-15,Proclamação da República,national\n2025-11-20,Consciência Negra,\n").unwrap();
    let list = holidays_or_empty(&CsvFileHolidays::new(&csv), 2025);
    assert_eq!(list.len(), 2);
    assert_eq!(list[1].kind, "");

    let missing = dir.path().join("absent.json");
    assert!(holidays_or_empty(&JsonFileHolidays::new(&missing), 2025).is_empty());

    let broken = dir.path().join("broken.json");
    fs::write(&broken, "{not json").unwrap();
    assert!(holidays_or_empty(&JsonFileHolidays::new(&broken), 2025).is_empty());
}
