//! Integration tests for top-level CLI behavior and the `list` command.

mod common;

use common::{CLEAN_PIPELINE, TestFixture};
use predicates::prelude::*;

#[test]
fn help_lists_subcommands_and_exit_codes() {
    pipeline_audit!()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("2 - Configuration or runtime error"));
}

#[test]
fn version_flag() {
    pipeline_audit!()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pipeline-audit"));
}

#[test]
fn unknown_format_is_usage_error() {
    pipeline_audit!()
        .args(["check", "--format", "sarif"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown output format"));
}

#[test]
fn list_prints_numbered_checklist() {
    let fixture = TestFixture::new();

    pipeline_audit!()
        .current_dir(fixture.path())
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("File Structure"))
        .stdout(predicate::str::contains("1.1   balanced-delimiters"))
        .stdout(predicate::str::contains("2.1   token-references"))
        .stdout(predicate::str::contains("4.3   quote-balance"));
}

#[test]
fn list_reflects_local_config() {
    let fixture = TestFixture::new();
    fixture.create_config("[decommission]\ntoken = \"qa3\"\n");

    pipeline_audit!()
        .current_dir(fixture.path())
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Complete qa3 removal"));
}

#[test]
fn debug_logging_reports_each_check() {
    let fixture = TestFixture::new();
    fixture.create_pipeline(CLEAN_PIPELINE);

    pipeline_audit!()
        .current_dir(fixture.path())
        .env_remove("RUST_LOG")
        .args(["check", "-vv", "--no-config"])
        .assert()
        .success()
        .stderr(predicate::str::contains("running check 3.3 (variable-assignments)"));
}

#[test]
fn default_verbosity_is_silent_on_stderr() {
    let fixture = TestFixture::new();
    fixture.create_pipeline(CLEAN_PIPELINE);

    pipeline_audit!()
        .current_dir(fixture.path())
        .env_remove("RUST_LOG")
        .args(["check", "--no-config"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
