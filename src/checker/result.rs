use std::path::{Path, PathBuf};

use serde::Serialize;

use super::Category;

/// How much a finding matters for the verdict.
///
/// Ordered from least to most severe so that `max()` yields the worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Annotates the report, never fails the run.
    Warning,
    /// Fails the run.
    Error,
    /// Fails the run; reported first.
    Critical,
}

impl Severity {
    /// Critical and error findings fail the audit.
    #[must_use]
    pub const fn is_blocking(self) -> bool {
        matches!(self, Self::Critical | Self::Error)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
            Self::Critical => write!(f, "critical"),
        }
    }
}

/// An observation recorded by a check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub severity: Severity,
    /// Id of the check that produced it.
    pub check: &'static str,
    pub message: String,
    /// 1-based line numbers, for line-anchored findings.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub lines: Vec<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Note,
    Pass,
    Fail,
    Warn,
}

/// One narration line of a check, in the order it was produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    pub kind: EventKind,
    pub message: String,
}

/// Everything a single check observed about the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    pub id: &'static str,
    /// Position in the checklist, e.g. `"2.1"`. Assigned by the auditor.
    pub number: String,
    pub category: Category,
    pub title: String,
    /// Summary flag for the human report; the verdict only looks at findings.
    pub passed: bool,
    pub events: Vec<Event>,
    pub findings: Vec<Finding>,
}

impl CheckOutcome {
    #[must_use]
    pub fn new(id: &'static str, category: Category, title: impl Into<String>) -> Self {
        Self {
            id,
            number: String::new(),
            category,
            title: title.into(),
            passed: true,
            events: Vec::new(),
            findings: Vec::new(),
        }
    }

    fn push_event(&mut self, kind: EventKind, message: impl Into<String>) {
        self.events.push(Event {
            kind,
            message: message.into(),
        });
    }

    pub fn note(&mut self, message: impl Into<String>) {
        self.push_event(EventKind::Note, message);
    }

    pub fn pass(&mut self, message: impl Into<String>) {
        self.push_event(EventKind::Pass, message);
    }

    /// Report a failure and record a blocking finding.
    pub fn fail(&mut self, detail: impl Into<String>, severity: Severity, finding: impl Into<String>) {
        self.fail_at(detail, severity, finding, Vec::new());
    }

    /// Like [`fail`](Self::fail), anchored to 1-based line numbers.
    pub fn fail_at(
        &mut self,
        detail: impl Into<String>,
        severity: Severity,
        finding: impl Into<String>,
        lines: Vec<usize>,
    ) {
        self.passed = false;
        self.push_event(EventKind::Fail, detail);
        self.record(severity, finding, lines);
    }

    /// Report an anomaly that is recorded as a warning but does not fail the check.
    pub fn warn(&mut self, detail: impl Into<String>, finding: impl Into<String>) {
        self.push_event(EventKind::Warn, detail);
        self.record(Severity::Warning, finding, Vec::new());
    }

    fn record(&mut self, severity: Severity, message: impl Into<String>, lines: Vec<usize>) {
        self.findings.push(Finding {
            severity,
            check: self.id,
            message: message.into(),
            lines,
        });
    }

    #[must_use]
    pub fn has_blocking_findings(&self) -> bool {
        self.findings.iter().any(|f| f.severity.is_blocking())
    }
}

/// Outcome of a full audit run over one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditReport {
    pub target: PathBuf,
    pub lines: usize,
    /// Hex SHA-256 of the audited text.
    pub fingerprint: String,
    pub outcomes: Vec<CheckOutcome>,
}

impl AuditReport {
    #[must_use]
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// All findings in check order.
    pub fn findings(&self) -> impl Iterator<Item = &Finding> {
        self.outcomes.iter().flat_map(|o| o.findings.iter())
    }

    #[must_use]
    pub fn findings_with(&self, severity: Severity) -> Vec<&Finding> {
        self.findings().filter(|f| f.severity == severity).collect()
    }

    #[must_use]
    pub fn critical(&self) -> Vec<&Finding> {
        self.findings_with(Severity::Critical)
    }

    #[must_use]
    pub fn errors(&self) -> Vec<&Finding> {
        self.findings_with(Severity::Error)
    }

    #[must_use]
    pub fn warnings(&self) -> Vec<&Finding> {
        self.findings_with(Severity::Warning)
    }

    /// True iff no critical or error finding was recorded.
    #[must_use]
    pub fn is_success(&self) -> bool {
        !self.outcomes.iter().any(CheckOutcome::has_blocking_findings)
    }

    #[must_use]
    pub fn checks_passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }

    /// Worst severity recorded, if any.
    #[must_use]
    pub fn worst_severity(&self) -> Option<Severity> {
        self.findings().map(|f| f.severity).max()
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
