use crate::config::Config;
use crate::document::Document;
use crate::error::Result;

use super::{
    AuditReport, BalancedDelimiters, CaseBranches, Category, Check, ChoiceParameter, Closures,
    DerivedFileReferences, Interpolation, PipelineBlock, QuoteBalance, RequiredSections,
    RetainedEnvironments, SwitchStatements, TokenReferences, VariableAssignments,
};

/// Runs the fixed, ordered checklist against a document.
pub struct Auditor {
    checks: Vec<Box<dyn Check>>,
}

impl Auditor {
    /// Build the checklist from configuration.
    ///
    /// # Errors
    /// Returns `InvalidPattern` if a configured pattern does not compile.
    pub fn from_config(config: &Config) -> Result<Self> {
        let checks: Vec<Box<dyn Check>> = vec![
            Box::new(BalancedDelimiters),
            Box::new(PipelineBlock::new()?),
            Box::new(RequiredSections::new(&config.structure)?),
            Box::new(TokenReferences::new(&config.decommission)),
            Box::new(ChoiceParameter::new(config)?),
            Box::new(CaseBranches::new(&config.decommission)?),
            Box::new(DerivedFileReferences::new(&config.decommission)?),
            Box::new(RetainedEnvironments::new(&config.retention)),
            Box::new(SwitchStatements::new(&config.retention)?),
            Box::new(VariableAssignments::new(&config.retention)?),
            Box::new(Interpolation::new()?),
            Box::new(Closures::new()?),
            Box::new(QuoteBalance),
        ];
        Ok(Self { checks })
    }

    /// Checks in run order, each paired with its `"<category>.<position>"` number.
    pub fn checklist(&self) -> impl Iterator<Item = (String, &dyn Check)> {
        let mut positions = [0usize; Category::ALL.len()];
        self.checks.iter().map(move |check| {
            let category = check.category();
            let slot = &mut positions[category.ordinal() - 1];
            *slot += 1;
            (format!("{}.{}", category.ordinal(), slot), check.as_ref())
        })
    }

    /// Run every check in order. Never fails; problems are findings.
    #[must_use]
    pub fn audit(&self, doc: &Document) -> AuditReport {
        let outcomes = self
            .checklist()
            .map(|(number, check)| {
                log::debug!("running check {number} ({})", check.id());
                let mut outcome = check.run(doc);
                outcome.number = number;
                log::debug!(
                    "check {} finished: passed={}, findings={}",
                    outcome.number,
                    outcome.passed,
                    outcome.findings.len()
                );
                outcome
            })
            .collect();

        AuditReport {
            target: doc.path().to_path_buf(),
            lines: doc.line_count(),
            fingerprint: doc.fingerprint(),
            outcomes,
        }
    }
}

#[cfg(test)]
#[path = "auditor_tests.rs"]
mod tests;
