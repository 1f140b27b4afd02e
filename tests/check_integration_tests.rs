//! Integration tests for the `check` command.

mod common;

use common::{CLEAN_PIPELINE, TestFixture};
use predicates::prelude::*;

// =============================================================================
// Verdict and exit codes
// =============================================================================

#[test]
fn clean_pipeline_passes() {
    let fixture = TestFixture::new();
    fixture.create_pipeline(CLEAN_PIPELINE);

    pipeline_audit!()
        .current_dir(fixture.path())
        .args(["check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("   Size: 64 lines"))
        .stdout(predicate::str::contains("✓ AUDIT PASSED"))
        .stdout(predicate::str::contains("CRITICAL ERRORS (0):"));
}

#[test]
fn leftover_token_fails_with_line_numbers() {
    let fixture = TestFixture::new();
    fixture.create_pipeline(&CLEAN_PIPELINE.replace("RELEASE = 'web'", "RELEASE = 'web-DEV2'"));

    pipeline_audit!()
        .current_dir(fixture.path())
        .args(["check"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("✗ FAIL - Found dev2 references on 1 line(s):"))
        .stdout(predicate::str::contains("  Line 7: RELEASE = 'web-DEV2'..."))
        .stdout(predicate::str::contains("dev2 references still exist (lines 7)"))
        .stdout(predicate::str::contains("✗ AUDIT FAILED"));
}

#[test]
fn token_in_comment_is_ignored() {
    let fixture = TestFixture::new();
    fixture.create_pipeline(&CLEAN_PIPELINE.replace(
        "    agent any\n",
        "    agent any\n    // dev2 was decommissioned\n",
    ));

    pipeline_audit!()
        .current_dir(fixture.path())
        .args(["check"])
        .assert()
        .success();
}

#[test]
fn missing_environment_case_fails() {
    let fixture = TestFixture::new();
    let content = CLEAN_PIPELINE
        .replace("case 'mde':", "case 'qa':")
        .replace("'dev1', 'mde', 'staging'", "'dev1', 'qa', 'staging'");
    fixture.create_pipeline(&content);

    pipeline_audit!()
        .current_dir(fixture.path())
        .args(["check"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Missing mde case"))
        .stdout(predicate::str::contains("Missing ENV choices: ['mde']"));
}

#[test]
fn warnings_do_not_fail() {
    let fixture = TestFixture::new();
    fixture.create_pipeline(CLEAN_PIPELINE);
    fixture.create_config("[retention]\nexpected_switches = 4\n");

    pipeline_audit!()
        .current_dir(fixture.path())
        .args(["check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unexpected number of switch statements: 3"));
}

#[test]
fn missing_target_exits_one_with_message() {
    let fixture = TestFixture::new();

    pipeline_audit!()
        .current_dir(fixture.path())
        .args(["check", "--no-config"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("✖ FileNotFound: File not found: Jenkinsfile"));
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn target_comes_from_config() {
    let fixture = TestFixture::new();
    fixture.create_file("ci/Jenkinsfile.deploy", CLEAN_PIPELINE);
    fixture.create_config("target = \"ci/Jenkinsfile.deploy\"\n");

    pipeline_audit!()
        .current_dir(fixture.path())
        .args(["check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Jenkinsfile.deploy"));
}

#[test]
fn positional_path_overrides_config_target() {
    let fixture = TestFixture::new();
    let path = fixture.create_file("other/Jenkinsfile", CLEAN_PIPELINE);
    fixture.create_config("target = \"missing/Jenkinsfile\"\n");

    pipeline_audit!()
        .current_dir(fixture.path())
        .arg("check")
        .arg(&path)
        .assert()
        .success();
}

#[test]
fn token_flag_overrides_config() {
    let fixture = TestFixture::new();
    fixture.create_pipeline(&CLEAN_PIPELINE.replace("RELEASE = 'web'", "RELEASE = 'web-qa3'"));

    pipeline_audit!()
        .current_dir(fixture.path())
        .args(["check", "--token", "qa3"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("qa3 references still exist"));
}

#[test]
fn invalid_config_exits_two() {
    let fixture = TestFixture::new();
    fixture.create_pipeline(CLEAN_PIPELINE);
    fixture.create_config("[decommission\ntoken = ");

    pipeline_audit!()
        .current_dir(fixture.path())
        .args(["check"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("TomlParse"));
}

#[test]
fn invalid_section_pattern_exits_two() {
    let fixture = TestFixture::new();
    fixture.create_pipeline(CLEAN_PIPELINE);
    fixture.create_config(
        "[structure]\nrequired_sections = [{ name = \"broken\", pattern = 'agent(' }]\n",
    );

    pipeline_audit!()
        .current_dir(fixture.path())
        .args(["check"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("InvalidPattern"));
}

#[test]
fn no_config_ignores_local_file() {
    let fixture = TestFixture::new();
    fixture.create_pipeline(CLEAN_PIPELINE);
    fixture.create_config("[decommission\n");

    pipeline_audit!()
        .current_dir(fixture.path())
        .args(["check", "--no-config"])
        .assert()
        .success();
}

// =============================================================================
// Output
// =============================================================================

#[test]
fn json_output_is_parseable() {
    let fixture = TestFixture::new();
    fixture.create_pipeline(&CLEAN_PIPELINE.replace("'mde', 'staging']", "'dev2', 'mde', 'staging']"));

    let output = pipeline_audit!()
        .current_dir(fixture.path())
        .args(["check", "--format", "json"])
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["passed"], false);
    assert_eq!(json["summary"]["critical"], 2);
    assert_eq!(json["summary"]["checks_total"], 13);
    assert_eq!(json["findings"][0]["check"], "token-references");
    assert_eq!(json["findings"][0]["lines"][0], 4);
    assert_eq!(json["findings"][1]["message"], "dev2 in ENV choices");
}

#[test]
fn output_file_receives_uncolored_report() {
    let fixture = TestFixture::new();
    fixture.create_pipeline(CLEAN_PIPELINE);

    pipeline_audit!()
        .current_dir(fixture.path())
        .args(["--color", "always", "check", "--output", "reports/audit.txt"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let report = std::fs::read_to_string(fixture.path().join("reports/audit.txt")).unwrap();
    assert!(report.contains("AUDIT PASSED"));
    assert!(!report.contains("\x1b["));
}

#[test]
fn quiet_suppresses_report_but_keeps_exit_code() {
    let fixture = TestFixture::new();
    fixture.create_pipeline(&CLEAN_PIPELINE.replace("pipeline {", "pipeline ("));

    pipeline_audit!()
        .current_dir(fixture.path())
        .args(["check", "--quiet"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty());
}

#[test]
fn repeated_runs_are_identical() {
    let fixture = TestFixture::new();
    fixture.create_pipeline(CLEAN_PIPELINE);

    let run = || {
        pipeline_audit!()
            .current_dir(fixture.path())
            .args(["check", "--format", "json"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone()
    };
    assert_eq!(run(), run());
}
