use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn verdant(tmp: &Path) -> Command {
    let mut cmd = Command::cargo_bin("verdant").expect("verdant binary");
    cmd.env("VERDANT_HOME", tmp)
        .env("VERDANT_DB", tmp.join("grow.sqlite"))
        .env("VERDANT_CONFIG_PATH", tmp.join("verdant.toml"));
    cmd
}

fn archive_one_plant(tmp: &Path) {
    verdant(tmp)
        .args([
            "add-plant",
            "--name",
            "Blue Dream #1",
            "--tent",
            "Tent A",
            "--planted-date",
            "2024-01-15",
        ])
        .assert()
        .success();
    verdant(tmp)
        .args([
            "log",
            "--plant",
            "1",
            "--activity",
            "feeding",
            "--description",
            "bloom nutrients",
            "--ph",
            "6.1",
            "--ec",
            "1.8",
            "--logged-at",
            "2024-02-01T08:00:00Z",
        ])
        .assert()
        .success();
    verdant(tmp)
        .args([
            "archive",
            "--plant",
            "1",
            "--reason",
            "harvested",
            "--harvest-date",
            "2024-04-20",
        ])
        .assert()
        .success();
}

#[test]
fn restore_produces_a_new_plant_with_reduced_logs() {
    let tmp = tempdir().expect("tempdir");
    archive_one_plant(tmp.path());

    verdant(tmp.path())
        .args(["restore", "--grow", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("new_plant_id=2"))
        .stdout(predicate::str::contains("plant_name=Blue Dream #1"));

    let conn = rusqlite::Connection::open(tmp.path().join("grow.sqlite")).unwrap();
    let (count, ph): (i64, Option<f64>) = conn
        .query_row(
            "SELECT COUNT(*), MAX(ph) FROM activity_logs WHERE plant_id = 2",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .unwrap();
    assert_eq!(count, 1, "restored log count equals archived log count");
    assert_eq!(ph, None, "measurement fields do not survive a restore");

    let grows: i64 = conn
        .query_row("SELECT COUNT(*) FROM archived_grows", [], |r| r.get(0))
        .unwrap();
    assert_eq!(grows, 0, "the archive record is consumed by the restore");
}

#[test]
fn restoring_an_unknown_grow_exits_not_found() {
    let tmp = tempdir().expect("tempdir");
    archive_one_plant(tmp.path());

    verdant(tmp.path())
        .args(["restore", "--grow", "9"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("archived grow not found: 9"));
}

#[test]
fn configured_default_stage_applies_to_stageless_snapshots() {
    let tmp = tempdir().expect("tempdir");
    std::fs::write(
        tmp.path().join("verdant.toml"),
        "[restore]\ndefault_stage = \"flowering\"\n",
    )
    .expect("write config");
    archive_one_plant(tmp.path());

    // Wipe the snapshot's stage so the restore has to fall back.
    let conn = rusqlite::Connection::open(tmp.path().join("grow.sqlite")).unwrap();
    conn.execute("UPDATE archived_grows SET final_stage = NULL WHERE id = 1", [])
        .unwrap();
    drop(conn);

    verdant(tmp.path())
        .args(["restore", "--grow", "1"])
        .assert()
        .success();

    let conn = rusqlite::Connection::open(tmp.path().join("grow.sqlite")).unwrap();
    let stage: String = conn
        .query_row("SELECT stage FROM plants WHERE id = 2", [], |r| r.get(0))
        .unwrap();
    assert_eq!(stage, "flowering");
}
