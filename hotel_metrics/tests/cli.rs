use std::process::{Command, Output};
use std::str;

use tempfile::TempDir;

fn run(db: &str, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hotel-insights"))
        .env("HOTEL_INSIGHTS_DATABASE_URL", db)
        .env_remove("HOTEL_INSIGHTS_DEFAULT_ROOMS")
        .env("RUST_LOG", "off")
        .args(args)
        .output()
        .expect("spawn hotel-insights")
}

fn stdout(out: &Output) -> &str {
    str::from_utf8(&out.stdout).unwrap()
}

#[test]
fn record_then_export_round_trips_through_the_binary() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("cli.db");
    let db = db.to_str().unwrap();

    let init = run(db, &["init"]);
    assert!(init.status.success(), "{}", String::from_utf8_lossy(&init.stderr));
    assert!(stdout(&init).starts_with("30 day(s) stored"), "{}", stdout(&init));

    let rec = run(
        db,
        &[
            "record",
            "--date",
            "2020-01-01",
            "--occupancy",
            "60",
            "--adr",
            "220",
            "--competitor",
            "215",
        ],
    );
    assert!(rec.status.success(), "{}", String::from_utf8_lossy(&rec.stderr));
    assert_eq!(stdout(&rec).trim(), "Saved 2020-01-01: RevPAR 132.00, revenue 6600.00");

    let export = run(db, &["export"]);
    assert!(export.status.success());
    let csv = stdout(&export);
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("id,data,quartos_totais,ocupacao_pct,adr,concorrente_adr,revpar,receita")
    );
    // oldest first, so the back-dated record leads
    assert!(lines.next().unwrap().contains(",2020-01-01,50,60.0,220.0,215.0,"));
    assert_eq!(lines.count(), 30);
}

#[test]
fn invalid_record_exits_with_error_and_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("cli.db");
    let db = db.to_str().unwrap();

    let rec = run(db, &["record", "--date", "2020-01-01", "--occupancy", "140"]);
    assert!(!rec.status.success());
    let stderr = String::from_utf8_lossy(&rec.stderr);
    assert!(stderr.contains("occupancy must be between 0 and 100"), "{stderr}");

    let export = run(db, &["export"]);
    assert!(!stdout(&export).contains("2020-01-01"));
}

#[test]
fn simulate_prints_projection_and_advice() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("unused.db");

    let out = run(
        db.to_str().unwrap(),
        &["simulate", "--adr", "250", "--occupancy", "50", "--rooms", "50"],
    );
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains("Projected revenue: 6250.00"), "{text}");
    assert!(text.contains("STABLE"), "{text}");
    assert!(!db.exists(), "simulate must not create the database");
}

#[test]
fn unreachable_database_aborts_with_initialization_error() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("no_such_dir").join("cli.db");

    for args in [&["init"][..], &["list"][..], &["record", "--occupancy", "60"][..]] {
        let out = run(db.to_str().unwrap(), args);
        assert!(!out.status.success(), "{args:?} should fail");
        let stderr = String::from_utf8_lossy(&out.stderr);
        assert!(
            stderr.contains("critical error while initializing the database"),
            "{args:?}: {stderr}"
        );
        assert!(stdout(&out).is_empty(), "{args:?}: {}", stdout(&out));
    }
    assert!(!db.exists());
}
