use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::{Value, json};
use tempfile::tempdir;

fn write_fixture(dir: &Path, fixture: &Value) -> PathBuf {
    let path = dir.join("fixture.json");
    fs::write(&path, serde_json::to_string_pretty(fixture).unwrap()).unwrap();
    path
}

fn tenants() -> Value {
    json!({ "acme": { "Locations": { "items": [{ "uuid": "l1", "name": "Photos" }] } } })
}

#[test]
fn test_duplicate_sign_in_imports_once() {
    let home = tempdir().unwrap();
    let fixture = write_fixture(
        home.path(),
        &json!({
            "groups": ["acme"],
            "tenants": tenants(),
            "notifications": [
                { "state": "signedIn", "session": "ana" },
                { "state": "signedIn", "session": "ana" },
                { "state": "signedOut" }
            ]
        }),
    );

    let output = cargo_bin_cmd!("tagdeck")
        .env("TAGDECK_HOME", home.path())
        .args(["auth", "replay"])
        .arg(&fixture)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.matches("add_locations [Photos] override=false").count(), 1);
    assert_eq!(stdout.matches("init_app").count(), 1);
    assert!(stdout.contains("(no change)"));
    assert!(stdout.contains("logged_in none"));
    assert!(stdout.ends_with("final: signed out\n"));
}

#[test]
fn test_fresh_session_handle_imports_again() {
    let home = tempdir().unwrap();
    let fixture = write_fixture(
        home.path(),
        &json!({
            "groups": ["acme"],
            "tenants": tenants(),
            "notifications": [
                { "state": "signedIn", "session": "ana" },
                { "state": "signedIn", "session": "ana", "fresh": true }
            ]
        }),
    );

    let output = cargo_bin_cmd!("tagdeck")
        .env("TAGDECK_HOME", home.path())
        .args(["auth", "replay"])
        .arg(&fixture)
        .output()
        .unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.matches("add_locations [Photos]").count(), 2);
    assert!(stdout.ends_with("final: signed in\n"));
}

#[test]
fn test_missing_query_document_still_signs_in() {
    let home = tempdir().unwrap();
    let fixture = write_fixture(
        home.path(),
        &json!({
            "groups": ["acme"],
            "queries": false,
            "tenants": tenants(),
            "notifications": [{ "state": "signedIn", "session": "ana" }]
        }),
    );

    cargo_bin_cmd!("tagdeck")
        .env("TAGDECK_HOME", home.path())
        .args(["auth", "replay"])
        .arg(&fixture)
        .assert()
        .success()
        .stdout(predicate::str::contains("logged_in ana"))
        .stdout(predicate::str::contains("init_app"))
        .stdout(predicate::str::contains("add_locations").not());
}

#[test]
fn test_fetch_failure_still_signs_in() {
    let home = tempdir().unwrap();
    let fixture = write_fixture(
        home.path(),
        &json!({
            "groups": ["acme"],
            "fail_fetch": "503 Service Unavailable",
            "notifications": [{ "state": "signedIn", "session": "ana" }]
        }),
    );

    cargo_bin_cmd!("tagdeck")
        .env("TAGDECK_HOME", home.path())
        .args(["auth", "replay"])
        .arg(&fixture)
        .assert()
        .success()
        .stdout(predicate::str::contains("logged_in ana"))
        .stdout(predicate::str::contains("add_locations").not())
        .stderr(predicate::str::contains("tenant bootstrap failed"));
}

#[test]
fn test_verbose_logs_replay_progress_to_stderr() {
    let home = tempdir().unwrap();
    let fixture = write_fixture(
        home.path(),
        &json!({
            "groups": ["acme"],
            "tenants": tenants(),
            "notifications": [{ "state": "signedIn", "session": "ana" }]
        }),
    );

    cargo_bin_cmd!("tagdeck")
        .env("TAGDECK_HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("TAGDECK_LOG")
        .args(["-v", "auth", "replay"])
        .arg(&fixture)
        .assert()
        .success()
        .stderr(predicate::str::contains("replaying auth notifications"))
        .stderr(predicate::str::contains("notification settled"))
        .stdout(predicate::str::contains("final: signed in"));
}
