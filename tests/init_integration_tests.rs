//! Integration tests for the `init` command.

mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn init_creates_default_config_file() {
    let fixture = TestFixture::new();

    artie!()
        .current_dir(fixture.path())
        .args(["init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ File .artierc.json created!"));

    let content = std::fs::read_to_string(fixture.path().join(".artierc.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value["includes"][0], "**/*.ts");
    assert_eq!(
        value["options"]["defaultThresholds"]["levels"],
        serde_json::json!(["OK", "WARNING", "CRITICAL"])
    );
    assert_eq!(value["options"]["metrics"]["cbo"]["enabled"], true);

    let positions: Vec<usize> = ["\"lcom\"", "\"wmc\"", "\"rfc\"", "\"cbo\""]
        .iter()
        .map(|key| content.find(key).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn init_creates_config_at_custom_path() {
    let fixture = TestFixture::new();
    let custom_path = fixture.path().join("custom.json");

    artie!()
        .current_dir(fixture.path())
        .args(["init", "--output", custom_path.to_str().unwrap()])
        .assert()
        .success();

    assert!(custom_path.exists());
    assert!(!fixture.path().join(".artierc.json").exists());
}

#[test]
fn init_warns_and_keeps_existing_config() {
    let fixture = TestFixture::new();
    fixture.create_config("{ \"mine\": true }");

    artie!()
        .current_dir(fixture.path())
        .args(["init"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "⚠️  The file .artierc.json already exists on the current directory.",
        ));

    let content = std::fs::read_to_string(fixture.path().join(".artierc.json")).unwrap();
    assert_eq!(content, "{ \"mine\": true }");
}

#[test]
fn init_force_overwrites_existing_config() {
    let fixture = TestFixture::new();
    fixture.create_config("{}");

    artie!()
        .current_dir(fixture.path())
        .args(["init", "--force"])
        .assert()
        .success();

    let content = std::fs::read_to_string(fixture.path().join(".artierc.json")).unwrap();
    assert!(content.contains("defaultThresholds"));
}

#[test]
fn init_quiet_prints_nothing() {
    let fixture = TestFixture::new();

    artie!()
        .current_dir(fixture.path())
        .args(["--quiet", "init"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn generated_config_is_usable_by_run() {
    let fixture = TestFixture::new();
    fixture.create_tsconfig();
    fixture.create_file("src/app.ts", "export class App {\n  start() {}\n}\n");

    artie!().current_dir(fixture.path()).args(["init"]).assert().success();

    artie!()
        .current_dir(fixture.path())
        .args(["run", "--color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains("📊 CBO Metrics:"))
        .stdout(predicate::str::contains("📊 WMC Metrics:"));
}
