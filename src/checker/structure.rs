use regex::Regex;

use crate::config::StructureConfig;
use crate::document::Document;
use crate::error::Result;

use super::{Category, Check, CheckOutcome, Severity, compile};

/// Delimiter pairs counted across the whole document.
const DELIMITERS: [(&str, char, char); 3] = [
    ("Braces", '{', '}'),
    ("Parentheses", '(', ')'),
    ("Square brackets", '[', ']'),
];

/// Opening and closing counts of each delimiter kind must match.
///
/// Counting is purely textual: delimiters inside strings and comments count too.
#[derive(Debug, Default, Clone, Copy)]
pub struct BalancedDelimiters;

impl Check for BalancedDelimiters {
    fn id(&self) -> &'static str {
        "balanced-delimiters"
    }

    fn title(&self) -> String {
        "Balanced delimiters".to_string()
    }

    fn category(&self) -> Category {
        Category::Structure
    }

    fn run(&self, doc: &Document) -> CheckOutcome {
        let mut outcome = self.outcome();
        let content = doc.content();

        for (name, open, close) in DELIMITERS {
            let open_count = content.matches(open).count();
            let close_count = content.matches(close).count();

            if open_count == close_count {
                outcome.note(format!("{name}: {open_count} pairs"));
            } else {
                outcome.fail(
                    format!("{name} unbalanced: {open_count} opening, {close_count} closing"),
                    Severity::Critical,
                    format!("Unbalanced {}", name.to_lowercase()),
                );
            }
        }

        if outcome.passed {
            outcome.pass("All delimiters properly balanced");
        }
        outcome
    }
}

/// The top-level `pipeline { ... }` block must exist.
#[derive(Debug, Clone)]
pub struct PipelineBlock {
    pattern: Regex,
}

impl PipelineBlock {
    /// # Errors
    /// Never in practice; the pattern is constant.
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: compile(r"pipeline\s*\{")?,
        })
    }
}

impl Check for PipelineBlock {
    fn id(&self) -> &'static str {
        "pipeline-block"
    }

    fn title(&self) -> String {
        "Pipeline structure".to_string()
    }

    fn category(&self) -> Category {
        Category::Structure
    }

    fn run(&self, doc: &Document) -> CheckOutcome {
        let mut outcome = self.outcome();
        if self.pattern.is_match(doc.content()) {
            outcome.pass("Pipeline block found");
        } else {
            outcome.fail("Missing pipeline block", Severity::Critical, "No pipeline block");
        }
        outcome
    }
}

/// Each configured section pattern must match somewhere; a miss is an error.
#[derive(Debug, Clone)]
pub struct RequiredSections {
    sections: Vec<(String, Regex)>,
}

impl RequiredSections {
    /// # Errors
    /// Returns `InvalidPattern` if a configured pattern is not a valid regex.
    pub fn new(config: &StructureConfig) -> Result<Self> {
        let sections = config
            .required_sections
            .iter()
            .map(|rule| Ok((rule.name.clone(), compile(&rule.pattern)?)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { sections })
    }
}

impl Check for RequiredSections {
    fn id(&self) -> &'static str {
        "required-sections"
    }

    fn title(&self) -> String {
        "Required sections".to_string()
    }

    fn category(&self) -> Category {
        Category::Structure
    }

    fn run(&self, doc: &Document) -> CheckOutcome {
        let mut outcome = self.outcome();

        for (name, pattern) in &self.sections {
            if pattern.is_match(doc.content()) {
                outcome.note(format!("✓ {name}"));
            } else {
                outcome.fail(
                    format!("Missing {name}"),
                    Severity::Error,
                    format!("Missing {name}"),
                );
            }
        }

        if outcome.passed {
            outcome.pass("All required sections present");
        }
        outcome
    }
}

#[cfg(test)]
#[path = "structure_tests.rs"]
mod tests;
