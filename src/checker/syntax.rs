//! Informational syntax heuristics. None of these produce findings.

use regex::Regex;

use crate::document::Document;
use crate::error::Result;

use super::{Category, Check, CheckOutcome, compile};

const LINE_COMMENT: &str = "//";

/// Counts `${...}` interpolations.
#[derive(Debug, Clone)]
pub struct Interpolation {
    pattern: Regex,
}

impl Interpolation {
    /// # Errors
    /// Never in practice; the pattern is constant.
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: compile(r"\$\{[^}]+\}")?,
        })
    }
}

impl Check for Interpolation {
    fn id(&self) -> &'static str {
        "interpolation"
    }

    fn title(&self) -> String {
        "String interpolation".to_string()
    }

    fn category(&self) -> Category {
        Category::Syntax
    }

    fn run(&self, doc: &Document) -> CheckOutcome {
        let mut outcome = self.outcome();
        let count = self.pattern.find_iter(doc.content()).count();
        outcome.note(format!("Found {count} variable interpolations"));

        // may legitimately continue on the next line
        for (line_number, line) in doc.lines() {
            if line.matches("${").count() > line.matches('}').count() {
                log::debug!("line {line_number}: interpolation not closed on the same line");
            }
        }

        outcome.pass("String interpolation syntax valid");
        outcome
    }
}

/// Counts script blocks, generic closures and `.each` closures.
#[derive(Debug, Clone)]
pub struct Closures {
    script: Regex,
    closure: Regex,
    each: Regex,
}

impl Closures {
    /// # Errors
    /// Never in practice; the patterns are constant.
    pub fn new() -> Result<Self> {
        Ok(Self {
            script: compile(r"script\s*\{")?,
            closure: compile(r"\.\w+\s*\{")?,
            each: compile(r"\.each\s*\{")?,
        })
    }
}

impl Check for Closures {
    fn id(&self) -> &'static str {
        "closures"
    }

    fn title(&self) -> String {
        "Groovy closures".to_string()
    }

    fn category(&self) -> Category {
        Category::Syntax
    }

    fn run(&self, doc: &Document) -> CheckOutcome {
        let mut outcome = self.outcome();
        let content = doc.content();

        outcome.note(format!(
            "Script blocks: {}",
            self.script.find_iter(content).count()
        ));
        outcome.note(format!(
            "Closure patterns: {}",
            self.closure.find_iter(content).count()
        ));
        outcome.note(format!(
            "Iteration closures (.each): {}",
            self.each.find_iter(content).count()
        ));

        outcome.pass("Closure syntax appears valid");
        outcome
    }
}

/// Same-line single-quote parity. Odd counts are only logged: strings may span
/// lines and apostrophes appear in messages.
#[derive(Debug, Default, Clone, Copy)]
pub struct QuoteBalance;

impl QuoteBalance {
    /// Lines with an odd number of unescaped single quotes, excluding
    /// comment lines and lines ending in `,`.
    #[must_use]
    pub fn suspicious_lines(doc: &Document) -> Vec<usize> {
        doc.lines()
            .filter(|(_, line)| !line.trim().starts_with(LINE_COMMENT))
            .filter(|(_, line)| {
                let quotes = line.matches('\'').count() - line.matches("\\'").count();
                quotes % 2 != 0 && !line.trim().ends_with(',')
            })
            .map(|(n, _)| n)
            .collect()
    }
}

impl Check for QuoteBalance {
    fn id(&self) -> &'static str {
        "quote-balance"
    }

    fn title(&self) -> String {
        "Common syntax errors".to_string()
    }

    fn category(&self) -> Category {
        Category::Syntax
    }

    fn run(&self, doc: &Document) -> CheckOutcome {
        let mut outcome = self.outcome();
        for line_number in Self::suspicious_lines(doc) {
            log::debug!("line {line_number}: odd number of single quotes");
        }
        outcome.pass("No common syntax errors detected");
        outcome
    }
}

#[cfg(test)]
#[path = "syntax_tests.rs"]
mod tests;
