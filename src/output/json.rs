use serde::Serialize;

use crate::checker::{AuditReport, CheckOutcome, Finding};
use crate::error::Result;

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    target: String,
    lines: usize,
    fingerprint: &'a str,
    passed: bool,
    summary: Summary,
    checks: &'a [CheckOutcome],
    findings: Vec<&'a Finding>,
}

#[derive(Serialize)]
struct Summary {
    critical: usize,
    errors: usize,
    warnings: usize,
    checks_passed: usize,
    checks_total: usize,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &AuditReport) -> Result<String> {
        let output = JsonOutput {
            target: report.target().display().to_string(),
            lines: report.lines,
            fingerprint: &report.fingerprint,
            passed: report.is_success(),
            summary: Summary {
                critical: report.critical().len(),
                errors: report.errors().len(),
                warnings: report.warnings().len(),
                checks_passed: report.checks_passed(),
                checks_total: report.outcomes.len(),
            },
            checks: &report.outcomes,
            findings: report.findings().collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
