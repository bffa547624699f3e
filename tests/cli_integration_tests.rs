//! Integration tests for top-level command handling.

mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn unknown_command_prints_warning_and_succeeds() {
    let fixture = TestFixture::new();

    artie!()
        .current_dir(fixture.path())
        .args(["explode"])
        .assert()
        .success()
        .stdout(predicate::str::contains("⚠️  Invalid command"));
}

#[test]
fn missing_command_prints_warning_and_succeeds() {
    artie!()
        .assert()
        .success()
        .stdout(predicate::str::contains("⚠️  Invalid command"));
}

#[test]
fn help_lists_commands() {
    artie!()
        .args(["help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("run"));
}

#[test]
fn version_flag_prints_version() {
    artie!()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn verbose_logging_goes_to_stderr() {
    let fixture = TestFixture::new();
    fixture.create_config(common::REPORT_ALL_CONFIG);
    fixture.create_tsconfig();
    fixture.create_file("a.ts", "function a() {}\n");

    artie!()
        .current_dir(fixture.path())
        .env_remove("RUST_LOG")
        .args(["-vv", "run", "--format", "json"])
        .assert()
        .success()
        .stderr(predicate::str::contains("discovered"));
}
