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

/// Create and immediately archive the `id`-th plant. Reusing a name is fine
/// across calls: the previous holder was deleted by its archive.
fn archive_plant(tmp: &Path, id: &str, name: &str, planted: &str) {
    verdant(tmp)
        .args([
            "add-plant",
            "--name",
            name,
            "--tent",
            "Tent A",
            "--planted-date",
            planted,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("plant_id={id}")));
    verdant(tmp)
        .args([
            "archive",
            "--plant",
            id,
            "--reason",
            "harvested",
            "--harvest-date",
            "2024-04-20",
        ])
        .assert()
        .success();
}

#[test]
fn export_groups_shared_keys_into_one_cycle() {
    let tmp = tempdir().expect("tempdir");
    archive_plant(tmp.path(), "1", "Blue Dream #1", "2024-01-15");
    archive_plant(tmp.path(), "2", "Blue Dream #1", "2024-01-15");
    archive_plant(tmp.path(), "3", "Blue Dream #1", "2024-02-01");

    let assert = verdant(tmp.path())
        .args(["export", "--tent", "Tent A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tent: Tent A"))
        .stdout(predicate::str::contains("Total Cycles: 2"))
        .stdout(predicate::str::contains(
            "=== Grow Cycle: Tent_A_2024_02_01_Blue_Dream__1 ===",
        ));

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(
        stdout
            .matches("=== Grow Cycle: Tent_A_2024_01_15_Blue_Dream__1 ===")
            .count(),
        1,
        "plants sharing a key appear under one cycle header"
    );
    assert!(
        !stdout.contains("Environment Data for this Cycle:"),
        "a cycle with no environment rows omits that subsection"
    );
}

#[test]
fn export_writes_to_a_file_when_asked() {
    let tmp = tempdir().expect("tempdir");
    archive_plant(tmp.path(), "1", "Blue Dream #1", "2024-01-15");

    let out = tmp.path().join("tent-a.txt");
    verdant(tmp.path())
        .args(["export", "--tent", "Tent A", "--out"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("written="));

    let document = std::fs::read_to_string(&out).expect("export file");
    assert!(document.starts_with("Grow Cycle Archive Export\n"));
    assert!(document.contains("Plants in this Cycle:"));
}

#[test]
fn export_of_an_unarchived_tent_exits_not_found() {
    let tmp = tempdir().expect("tempdir");
    archive_plant(tmp.path(), "1", "Blue Dream #1", "2024-01-15");

    verdant(tmp.path())
        .args(["export", "--tent", "Tent Z"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("no archived grows for tent: Tent Z"));
}

#[test]
fn cycles_prints_the_grouped_archive_as_json() {
    let tmp = tempdir().expect("tempdir");
    archive_plant(tmp.path(), "1", "Blue Dream #1", "2024-01-15");

    let assert = verdant(tmp.path())
        .args(["cycles", "--tent", "Tent A"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    let cycle = parsed
        .get("Tent_A_2024_01_15_Blue_Dream__1")
        .expect("cycle key present");
    assert_eq!(cycle["plants"][0]["name"], "Blue Dream #1");
}
