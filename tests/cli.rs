#![forbid(unsafe_code)]
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn cli(settings: &Path) -> Command {
    let mut cmd = Command::cargo_bin("escala-cli").unwrap();
    cmd.env_remove("ESCALA_SETTINGS").arg("--settings").arg(settings);
    cmd
}

#[test]
fn generate_with_defaults_saves_state() {
    let dir = tempdir().unwrap();
    let settings = dir.path().join("escala.json");

    cli(&settings)
        .arg("generate")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Generated 360 day(s) from 2025-01-06 to 2025-12-31",
        ));

    let saved = fs::read_to_string(&settings).unwrap();
    assert!(saved.contains("\"2025-01-12\": \"rest\""));
}

#[test]
fn duplicate_shift_is_rejected() {
    let dir = tempdir().unwrap();
    let settings = dir.path().join("escala.json");

    cli(&settings)
        .args(["add-shift", "--name", "Noite"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("shift already exists: Noite"));

    cli(&settings)
        .args(["add-shift", "--name", "Madrugada"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added shift Madrugada (4 total)"));
}

#[test]
fn removing_every_shift_warns_instead_of_crashing() {
    let dir = tempdir().unwrap();
    let settings = dir.path().join("escala.json");

    for name in ["Noite", "Tarde"] {
        cli(&settings)
            .args(["remove-shift", "--name", name])
            .assert()
            .success();
    }
    cli(&settings)
        .args(["remove-shift", "--name", "Manhã"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "add at least one shift to generate a schedule",
        ));
}

#[test]
fn day_uses_week_anchor_rotation() {
    let dir = tempdir().unwrap();
    let settings = dir.path().join("escala.json");

    cli(&settings)
        .args(["day", "--date", "2025-01-13", "--base", "2025-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "2025-01-13 Tarde (anchor 2025-01-06)",
        ));

    cli(&settings)
        .args(["day", "--date", "2025-01-03", "--base", "2025-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-01-03 -"));

    for loose in ["2025-1-13", "+2025-01-13", "25-01-13"] {
        cli(&settings)
            .args(["day", "--date", loose])
            .assert()
            .failure()
            .stderr(predicate::str::contains("expected YYYY-MM-DD"));
    }
}

#[test]
fn show_merges_holidays() {
    let dir = tempdir().unwrap();
    let settings = dir.path().join("escala.json");
    let holidays = dir.path().join("feriados.json");
    fs::write(
        &holidays,
        r#"[{"date":"2025-04-21","name":"Tiradentes","type":"national"}]"#,
    )
    .unwrap();

    cli(&settings)
        .args(["show", "--date", "2025-04-21", "--holidays"])
        .arg(&holidays)
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-04-21 | Noite | Tiradentes (national)"));

    // fichier absent : aucun férié, pas d'erreur
    cli(&settings)
        .args(["show", "--date", "2025-01-12", "--holidays", "absent.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-01-12 | Folga"));
}

#[test]
fn export_csv_lists_schedule() {
    let dir = tempdir().unwrap();
    let settings = dir.path().join("escala.json");
    let out = dir.path().join("escala.csv");

    cli(&settings)
        .args(["cadence", "--work", "5", "--rest", "2"])
        .assert()
        .success();
    cli(&settings)
        .arg("export")
        .arg("--out-csv")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 360 day(s)"));

    let csv = fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = csv.lines().take(8).collect();
    assert_eq!(
        lines,
        [
            "date,kind,shift",
            "2025-01-06,shift,Noite",
            "2025-01-07,shift,Noite",
            "2025-01-08,shift,Noite",
            "2025-01-09,shift,Noite",
            "2025-01-10,shift,Noite",
            "2025-01-11,rest,",
            "2025-01-12,rest,",
        ]
    );
}
