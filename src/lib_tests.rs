use std::path::PathBuf;

use super::*;
use crate::checker::{Category, CheckOutcome, Severity};

fn report_with(severity: Option<Severity>) -> AuditReport {
    let mut outcome = CheckOutcome::new("pipeline-block", Category::Structure, "Pipeline block");
    if let Some(severity) = severity {
        outcome.fail("problem", severity, "problem");
    }
    AuditReport {
        target: PathBuf::from("Jenkinsfile"),
        lines: 1,
        fingerprint: String::new(),
        outcomes: vec![outcome],
    }
}

#[test]
fn exit_codes_are_distinct() {
    assert_ne!(EXIT_SUCCESS, EXIT_AUDIT_FAILED);
    assert_ne!(EXIT_SUCCESS, EXIT_CONFIG_ERROR);
    assert_ne!(EXIT_AUDIT_FAILED, EXIT_CONFIG_ERROR);
}

#[test]
fn exit_code_follows_blocking_findings() {
    assert_eq!(exit_code_for(&report_with(None)), EXIT_SUCCESS);
    assert_eq!(exit_code_for(&report_with(Some(Severity::Warning))), EXIT_SUCCESS);
    assert_eq!(exit_code_for(&report_with(Some(Severity::Error))), EXIT_AUDIT_FAILED);
    assert_eq!(exit_code_for(&report_with(Some(Severity::Critical))), EXIT_AUDIT_FAILED);
}
