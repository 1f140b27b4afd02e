mod auditor;
mod decommission;
mod result;
mod retention;
mod structure;
mod syntax;

pub use auditor::Auditor;
pub use decommission::{CaseBranches, ChoiceParameter, DerivedFileReferences, TokenReferences};
pub use result::{AuditReport, CheckOutcome, Event, EventKind, Finding, Severity};
pub use retention::{CaseBlockStatus, RetainedEnvironments, SwitchStatements, VariableAssignments};
pub use structure::{BalancedDelimiters, PipelineBlock, RequiredSections};
pub use syntax::{Closures, Interpolation, QuoteBalance};

use regex::Regex;
use serde::Serialize;

use crate::document::Document;
use crate::error::{AuditError, Result};

/// Checklist group a check reports under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Structure,
    Decommission,
    Environment,
    Syntax,
}

impl Category {
    pub const ALL: [Self; 4] = [
        Self::Structure,
        Self::Decommission,
        Self::Environment,
        Self::Syntax,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Structure => "File Structure",
            Self::Decommission => "Decommissioning",
            Self::Environment => "Environment Configuration",
            Self::Syntax => "Syntax Validation",
        }
    }

    /// 1-based position used in check numbers.
    #[must_use]
    pub const fn ordinal(self) -> usize {
        match self {
            Self::Structure => 1,
            Self::Decommission => 2,
            Self::Environment => 3,
            Self::Syntax => 4,
        }
    }
}

/// A single side-effect-free rule evaluated against the whole document.
pub trait Check {
    /// Stable kebab-case identifier, used in findings and JSON output.
    fn id(&self) -> &'static str;

    fn title(&self) -> String;

    fn category(&self) -> Category;

    /// Evaluate the rule. Never fails: problems become findings.
    fn run(&self, doc: &Document) -> CheckOutcome;

    /// Fresh outcome pre-filled with this check's metadata.
    fn outcome(&self) -> CheckOutcome {
        CheckOutcome::new(self.id(), self.category(), self.title())
    }
}

/// Compile a pattern, mapping failures to `InvalidPattern`.
pub(crate) fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| AuditError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// `case '<name>':` as written in the pipeline.
pub(crate) fn case_label(name: &str) -> String {
    format!("case '{name}':")
}

/// Whether the trimmed line starts with any of the comment markers.
pub(crate) fn is_comment(line: &str, markers: &[String]) -> bool {
    let trimmed = line.trim();
    markers.iter().any(|m| trimmed.starts_with(m.as_str()))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
