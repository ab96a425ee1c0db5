use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn scribble(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("scribble").unwrap();
    cmd.env("SCRIBBLE_HOME", home.path())
        .env_remove("SCRIBBLE_LOG")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn empty_list_on_fresh_home() {
    let home = tempfile::tempdir().unwrap();
    scribble(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes yet."));
}

#[test]
fn create_then_list() {
    let home = tempfile::tempdir().unwrap();
    scribble(&home)
        .args(["create", "Buy", "milk", "-c", "two litres"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note created: Buy milk"))
        .stdout(predicate::str::contains("1. Buy milk two litres"));

    assert!(home.path().join("notes.json").exists());

    scribble(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Buy milk"));
}

#[test]
fn blank_create_is_silent() {
    let home = tempfile::tempdir().unwrap();
    scribble(&home)
        .args(["create", "   "])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note created").not())
        .stdout(predicate::str::contains("No notes yet."));
}

#[test]
fn delete_restore_cycle() {
    let home = tempfile::tempdir().unwrap();
    scribble(&home).args(["create", "A"]).assert().success();
    scribble(&home).args(["create", "B"]).assert().success();

    scribble(&home)
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note deleted (1): B"))
        .stdout(predicate::str::contains("Trash: 1"));

    scribble(&home)
        .arg("trash")
        .assert()
        .success()
        .stdout(predicate::str::contains("d1. B"));

    scribble(&home)
        .args(["restore", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note restored (d1): B"))
        .stdout(predicate::str::contains("1. B"));
}

#[test]
fn stale_index_is_a_quiet_noop() {
    let home = tempfile::tempdir().unwrap();
    scribble(&home).args(["create", "Only"]).assert().success();
    scribble(&home)
        .args(["delete", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note deleted").not())
        .stdout(predicate::str::contains("1. Only"));
}

#[test]
fn bad_range_fails() {
    let home = tempfile::tempdir().unwrap();
    scribble(&home)
        .args(["delete", "3-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid range"));
}

#[test]
fn huge_ranges_only_touch_existing_notes() {
    let home = tempfile::tempdir().unwrap();
    scribble(&home).args(["create", "A"]).assert().success();
    scribble(&home).args(["create", "B"]).assert().success();

    scribble(&home)
        .args(["view", "1-99999999999999"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 B"))
        .stdout(predicate::str::contains("2 A"));

    scribble(&home)
        .args(["delete", "2-18446744073709551615"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note deleted (2): A"))
        .stdout(predicate::str::contains("1. B"));
}

#[test]
fn edit_in_place() {
    let home = tempfile::tempdir().unwrap();
    scribble(&home).args(["create", "Old", "-c", "body"]).assert().success();
    scribble(&home)
        .args(["edit", "1", "-t", "New"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note updated (1): New"));

    scribble(&home)
        .args(["view", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 New"))
        .stdout(predicate::str::contains("body"));
}

#[test]
fn purge_all_with_yes() {
    let home = tempfile::tempdir().unwrap();
    scribble(&home).args(["create", "Doomed"]).assert().success();
    scribble(&home).args(["delete", "1"]).assert().success();

    scribble(&home)
        .args(["purge", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Purged (d1): Doomed"))
        .stdout(predicate::str::contains("Trash is empty."));
}

#[test]
fn purge_all_declined_keeps_trash() {
    let home = tempfile::tempdir().unwrap();
    scribble(&home).args(["create", "Kept"]).assert().success();
    scribble(&home).args(["delete", "1"]).assert().success();

    scribble(&home)
        .arg("purge")
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Aborted."));

    scribble(&home)
        .arg("trash")
        .assert()
        .success()
        .stdout(predicate::str::contains("Kept"));
}

#[test]
fn expired_trash_is_swept_at_startup() {
    let home = tempfile::tempdir().unwrap();
    fs::write(
        home.path().join("deletedNotes.json"),
        r#"[
            {"title":"ancient","content":"","createdAt":"2020-01-01T00:00:00Z","deletedAt":"2020-01-02T00:00:00Z"}
        ]"#,
    )
    .unwrap();

    scribble(&home)
        .arg("trash")
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 1 expired note(s)"))
        .stdout(predicate::str::contains("Trash is empty."));

    let trash = fs::read_to_string(home.path().join("deletedNotes.json")).unwrap();
    assert_eq!(trash.trim(), "[]");
}

#[test]
fn purge_all_confirmed_on_stdin() {
    let home = tempfile::tempdir().unwrap();
    scribble(&home).args(["create", "Gone"]).assert().success();
    scribble(&home).args(["delete", "1"]).assert().success();

    scribble(&home)
        .arg("purge")
        .write_stdin("y\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Permanently delete all 1 note(s)"))
        .stdout(predicate::str::contains("Purged (d1): Gone"));
}

#[test]
fn theme_toggle_persists() {
    let home = tempfile::tempdir().unwrap();
    scribble(&home)
        .arg("theme")
        .assert()
        .success()
        .stdout(predicate::str::contains("theme = light"));

    scribble(&home)
        .args(["theme", "toggle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme set to dark"));

    scribble(&home)
        .arg("theme")
        .assert()
        .success()
        .stdout(predicate::str::contains("theme = dark"));
}

#[test]
fn config_set_and_show() {
    let home = tempfile::tempdir().unwrap();
    scribble(&home)
        .args(["config", "trash_retention_days", "7"])
        .assert()
        .success();

    scribble(&home)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("trash_retention_days = 7"))
        .stdout(predicate::str::contains("autosave_delay_ms = 1000"));

    scribble(&home)
        .args(["config", "nope", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn oversized_retention_is_rejected() {
    let home = tempfile::tempdir().unwrap();
    scribble(&home)
        .args(["config", "trash_retention_days", "100000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("between 1 and 36500"));

    scribble(&home)
        .args(["config", "trash_retention_days", "30"])
        .assert()
        .success();
}

#[test]
fn hand_edited_retention_out_of_bounds_falls_back() {
    let home = tempfile::tempdir().unwrap();
    fs::write(
        home.path().join("config.json"),
        r#"{"trash_retention_days": 4000000000}"#,
    )
    .unwrap();
    fs::write(
        home.path().join("deletedNotes.json"),
        r#"[
            {"title":"ancient","content":"","createdAt":"2020-01-01T00:00:00Z","deletedAt":"2020-01-02T00:00:00Z"}
        ]"#,
    )
    .unwrap();

    scribble(&home)
        .arg("trash")
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 1 expired note(s)"));

    scribble(&home)
        .args(["config", "trash_retention_days"])
        .assert()
        .success()
        .stdout(predicate::str::contains("trash_retention_days = 30"));
}

#[test]
fn compose_saves_once_when_input_ends() {
    let home = tempfile::tempdir().unwrap();
    scribble(&home)
        .arg("compose")
        .write_stdin("Standup\nship the release\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Note created: Standup"));

    let notes = fs::read_to_string(home.path().join("notes.json")).unwrap();
    assert!(notes.contains("ship the release"));
}

#[test]
fn data_flag_overrides_env() {
    let home = tempfile::tempdir().unwrap();
    let other = tempfile::tempdir().unwrap();
    scribble(&home)
        .args(["--data", other.path().to_str().unwrap(), "create", "Elsewhere"])
        .assert()
        .success();

    assert!(other.path().join("notes.json").exists());
    assert!(!home.path().join("notes.json").exists());
}
