use std::path::PathBuf;

use super::*;
use crate::checker::{Category, Severity};

fn sample_report() -> AuditReport {
    let mut choices = CheckOutcome::new("choice-parameter", Category::Decommission, "ENV parameter choices");
    choices.number = "2.2".to_string();
    choices.note("Choices: 'dev1', 'dev2'");
    choices.fail("dev2 present in ENV choices", Severity::Critical, "dev2 in ENV choices");
    choices.fail(
        "Missing expected choices: ['mde', 'staging']",
        Severity::Error,
        "Missing ENV choices: ['mde', 'staging']",
    );

    let mut closures = CheckOutcome::new("closures", Category::Syntax, "Groovy closures");
    closures.number = "4.2".to_string();
    closures.pass("Closure syntax appears valid");

    AuditReport {
        target: PathBuf::from("ci/Jenkinsfile"),
        lines: 120,
        fingerprint: "deadbeef".to_string(),
        outcomes: vec![choices, closures],
    }
}

fn render(report: &AuditReport) -> serde_json::Value {
    let output = JsonFormatter.format(report).unwrap();
    serde_json::from_str(&output).unwrap()
}

#[test]
fn summary_counts_findings_by_severity() {
    let json = render(&sample_report());

    assert_eq!(json["target"], "ci/Jenkinsfile");
    assert_eq!(json["lines"], 120);
    assert_eq!(json["fingerprint"], "deadbeef");
    assert_eq!(json["passed"], false);
    assert_eq!(json["summary"]["critical"], 1);
    assert_eq!(json["summary"]["errors"], 1);
    assert_eq!(json["summary"]["warnings"], 0);
    assert_eq!(json["summary"]["checks_passed"], 1);
    assert_eq!(json["summary"]["checks_total"], 2);
}

#[test]
fn checks_keep_number_category_and_events() {
    let json = render(&sample_report());
    let check = &json["checks"][0];

    assert_eq!(check["id"], "choice-parameter");
    assert_eq!(check["number"], "2.2");
    assert_eq!(check["category"], "decommission");
    assert_eq!(check["events"][0]["kind"], "note");
    assert_eq!(check["events"][1]["kind"], "fail");
}

#[test]
fn findings_are_flattened_in_check_order() {
    let json = render(&sample_report());
    let findings = json["findings"].as_array().unwrap();

    assert_eq!(findings.len(), 2);
    assert_eq!(findings[0]["severity"], "critical");
    assert_eq!(findings[0]["check"], "choice-parameter");
    assert_eq!(findings[1]["severity"], "error");
    assert!(findings[0].get("lines").is_none());
}

#[test]
fn passing_report_is_marked_passed() {
    let mut report = sample_report();
    report.outcomes.remove(0);
    let json = render(&report);
    assert_eq!(json["passed"], true);
    assert!(json["findings"].as_array().unwrap().is_empty());
}
