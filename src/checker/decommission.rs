//! Checks that the decommissioned environment is gone from the pipeline.

use regex::Regex;

use crate::config::{Config, DecommissionConfig};
use crate::document::Document;
use crate::error::Result;

use super::{Category, Check, CheckOutcome, Severity, compile, is_comment};

/// Case-insensitive line scan for the token, skipping comment lines.
#[derive(Debug, Clone)]
pub struct TokenReferences {
    token: String,
    comment_markers: Vec<String>,
    preview_lines: usize,
    preview_width: usize,
}

impl TokenReferences {
    #[must_use]
    pub fn new(config: &DecommissionConfig) -> Self {
        Self {
            token: config.normalized_token(),
            comment_markers: config.comment_markers.clone(),
            preview_lines: config.preview_lines,
            preview_width: config.preview_width,
        }
    }

    /// `(line_number, trimmed_line)` for every non-comment line containing the token.
    #[must_use]
    pub fn matching_lines<'a>(&self, doc: &'a Document) -> Vec<(usize, &'a str)> {
        doc.lines()
            .filter(|(_, line)| line.to_lowercase().contains(&self.token))
            .filter(|(_, line)| !is_comment(line, &self.comment_markers))
            .map(|(n, line)| (n, line.trim()))
            .collect()
    }

    fn preview(&self, line: &str) -> String {
        line.chars().take(self.preview_width).collect()
    }
}

impl Check for TokenReferences {
    fn id(&self) -> &'static str {
        "token-references"
    }

    fn title(&self) -> String {
        format!("Complete {} removal", self.token)
    }

    fn category(&self) -> Category {
        Category::Decommission
    }

    fn run(&self, doc: &Document) -> CheckOutcome {
        let mut outcome = self.outcome();
        let matches = self.matching_lines(doc);

        if matches.is_empty() {
            outcome.pass(format!("No {} references found", self.token));
            return outcome;
        }

        outcome.fail_at(
            format!(
                "Found {} references on {} line(s):",
                self.token,
                matches.len()
            ),
            Severity::Critical,
            format!("{} references still exist", self.token),
            matches.iter().map(|(n, _)| *n).collect(),
        );
        for (line_number, line) in matches.iter().take(self.preview_lines) {
            outcome.note(format!("  Line {line_number}: {}...", self.preview(line)));
        }
        outcome
    }
}

/// The governing choice parameter must no longer offer the token and must
/// still offer every expected choice.
#[derive(Debug, Clone)]
pub struct ChoiceParameter {
    token: String,
    parameter: String,
    expected: Vec<String>,
    pattern: Regex,
}

impl ChoiceParameter {
    /// # Errors
    /// Returns `InvalidPattern` if the choice pattern cannot be compiled.
    pub fn new(config: &Config) -> Result<Self> {
        let parameter = config.parameter.name.clone();
        let pattern = compile(&format!(
            r"choice\s*\(\s*name:\s*'{}',\s*choices:\s*\[(.*?)\]",
            regex::escape(&parameter)
        ))?;
        Ok(Self {
            token: config.decommission.normalized_token(),
            parameter,
            expected: config.parameter.expected_choices.clone(),
            pattern,
        })
    }

    /// The raw text between the choice list brackets, if the parameter is defined.
    #[must_use]
    pub fn choices<'a>(&self, doc: &'a Document) -> Option<&'a str> {
        self.pattern
            .captures(doc.content())
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

impl Check for ChoiceParameter {
    fn id(&self) -> &'static str {
        "choice-parameter"
    }

    fn title(&self) -> String {
        format!("{} parameter choices", self.parameter)
    }

    fn category(&self) -> Category {
        Category::Decommission
    }

    fn run(&self, doc: &Document) -> CheckOutcome {
        let mut outcome = self.outcome();
        let param = &self.parameter;
        let token = &self.token;

        let Some(choices) = self.choices(doc) else {
            outcome.fail(
                format!("{param} parameter definition not found"),
                Severity::Error,
                format!("No {param} parameter"),
            );
            return outcome;
        };
        outcome.note(format!("Choices: {choices}"));

        if choices.contains(&format!("'{token}'")) || choices.contains(&format!("\"{token}\"")) {
            outcome.fail(
                format!("{token} still in {param} choices"),
                Severity::Critical,
                format!("{token} in {param} choices"),
            );
            return outcome;
        }

        let missing: Vec<&str> = self
            .expected
            .iter()
            .filter(|choice| !choices.contains(&format!("'{choice}'")))
            .map(String::as_str)
            .collect();
        if !missing.is_empty() {
            let list = format!("['{}']", missing.join("', '"));
            outcome.fail(
                format!("Missing expected choices: {list}"),
                Severity::Error,
                format!("Missing {param} choices: {list}"),
            );
            return outcome;
        }

        outcome.pass(format!("{param} parameter correctly defined without {token}"));
        outcome
    }
}

/// No `case '<token>':` branch may remain in any switch.
#[derive(Debug, Clone)]
pub struct CaseBranches {
    token: String,
    pattern: Regex,
}

impl CaseBranches {
    /// # Errors
    /// Returns `InvalidPattern` if the case pattern cannot be compiled.
    pub fn new(config: &DecommissionConfig) -> Result<Self> {
        let token = config.normalized_token();
        Ok(Self {
            pattern: compile(&format!(
                r#"case\s+['"]{}['"]:"#,
                regex::escape(&token)
            ))?,
            token,
        })
    }
}

impl Check for CaseBranches {
    fn id(&self) -> &'static str {
        "case-branches"
    }

    fn title(&self) -> String {
        format!("Case statements for {}", self.token)
    }

    fn category(&self) -> Category {
        Category::Decommission
    }

    fn run(&self, doc: &Document) -> CheckOutcome {
        let mut outcome = self.outcome();
        let count = self.pattern.find_iter(doc.content()).count();

        if count == 0 {
            outcome.pass(format!("No {} case statements found", self.token));
        } else {
            outcome.fail(
                format!("Found {count} {} case statement(s)", self.token),
                Severity::Critical,
                format!("{} case statements exist", self.token),
            );
        }
        outcome
    }
}

/// Files named after the token (e.g. `dev2.yaml`) must not be referenced.
#[derive(Debug, Clone)]
pub struct DerivedFileReferences {
    token: String,
    files: Vec<(String, Regex)>,
}

impl DerivedFileReferences {
    /// # Errors
    /// Returns `InvalidPattern` if a file pattern cannot be compiled.
    pub fn new(config: &DecommissionConfig) -> Result<Self> {
        let token = config.normalized_token();
        let files = config
            .derived_extensions
            .iter()
            .map(|ext| {
                let name = format!("{token}.{ext}");
                let pattern = compile(&regex::escape(&name))?;
                Ok((name, pattern))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { token, files })
    }
}

impl Check for DerivedFileReferences {
    fn id(&self) -> &'static str {
        "derived-file-reference"
    }

    fn title(&self) -> String {
        match self.files.as_slice() {
            [(name, _)] => format!("{name} file reference"),
            _ => format!("{} file references", self.token),
        }
    }

    fn category(&self) -> Category {
        Category::Decommission
    }

    fn run(&self, doc: &Document) -> CheckOutcome {
        let mut outcome = self.outcome();

        for (name, pattern) in &self.files {
            if pattern.is_match(doc.content()) {
                outcome.fail(
                    format!("Reference to {name} still exists"),
                    Severity::Critical,
                    format!("{name} reference exists"),
                );
            } else {
                outcome.note(format!("✓ no {name} reference"));
            }
        }

        if outcome.passed {
            outcome.pass(format!("No {} file references found", self.token));
        }
        outcome
    }
}

#[cfg(test)]
#[path = "decommission_tests.rs"]
mod tests;
