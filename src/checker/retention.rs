//! Checks that the retained environments are still wired up.

use regex::Regex;

use crate::config::RetentionConfig;
use crate::document::Document;
use crate::error::Result;

use super::{Category, Check, CheckOutcome, Severity, case_label, compile};

/// Every retained environment keeps at least one `case '<name>':` branch.
#[derive(Debug, Clone)]
pub struct RetainedEnvironments {
    environments: Vec<String>,
}

impl RetainedEnvironments {
    #[must_use]
    pub fn new(config: &RetentionConfig) -> Self {
        Self {
            environments: config.environments.clone(),
        }
    }
}

impl Check for RetainedEnvironments {
    fn id(&self) -> &'static str {
        "retained-environments"
    }

    fn title(&self) -> String {
        "Remaining environments intact".to_string()
    }

    fn category(&self) -> Category {
        Category::Environment
    }

    fn run(&self, doc: &Document) -> CheckOutcome {
        let mut outcome = self.outcome();

        for env in &self.environments {
            let count = doc.content().matches(&case_label(env)).count();
            if count > 0 {
                outcome.note(format!("✓ {env}: {count} case statement(s)"));
            } else {
                outcome.fail(
                    format!("{env} case statement not found"),
                    Severity::Error,
                    format!("Missing {env} case"),
                );
            }
        }

        if outcome.passed {
            outcome.pass("All expected environments present");
        }
        outcome
    }
}

/// Counts switches on the governing expression and checks each one's cases.
#[derive(Debug, Clone)]
pub struct SwitchStatements {
    expression: String,
    expected: usize,
    environments: Vec<String>,
    pattern: Regex,
}

impl SwitchStatements {
    /// # Errors
    /// Returns `InvalidPattern` if the switch pattern cannot be compiled.
    pub fn new(config: &RetentionConfig) -> Result<Self> {
        Ok(Self {
            expression: config.switch_expression.clone(),
            expected: config.expected_switches,
            environments: config.environments.clone(),
            pattern: compile(&format!(
                r"switch\s*\(\s*{}\s*\)",
                regex::escape(&config.switch_expression)
            ))?,
        })
    }

    /// Body of each switch: text after the header up to its matching `}`.
    ///
    /// An unterminated switch has an empty body.
    #[must_use]
    pub fn bodies<'a>(&self, doc: &'a Document) -> Vec<&'a str> {
        let content = doc.content();
        self.pattern
            .find_iter(content)
            .map(|m| {
                let rest = &content[m.end()..];
                let end = matching_brace_end(rest).unwrap_or(0);
                &rest[..end]
            })
            .collect()
    }
}

/// Byte offset of the `}` closing the first `{` in `text`.
fn matching_brace_end(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut opened = false;
    for (i, c) in text.char_indices() {
        match c {
            '{' => {
                opened = true;
                depth += 1;
            }
            '}' => {
                depth = depth.saturating_sub(1);
                if opened && depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

impl Check for SwitchStatements {
    fn id(&self) -> &'static str {
        "switch-statements"
    }

    fn title(&self) -> String {
        "Switch statement analysis".to_string()
    }

    fn category(&self) -> Category {
        Category::Environment
    }

    fn run(&self, doc: &Document) -> CheckOutcome {
        let mut outcome = self.outcome();
        let bodies = self.bodies(doc);

        outcome.note(format!(
            "Found {} switch statement(s) on {}",
            bodies.len(),
            self.expression
        ));
        if bodies.len() != self.expected {
            outcome.warn(
                format!(
                    "Expected {} switch statements, found {}",
                    self.expected,
                    bodies.len()
                ),
                format!("Unexpected number of switch statements: {}", bodies.len()),
            );
        }

        for (i, body) in bodies.iter().enumerate() {
            let missing: Vec<&str> = self
                .environments
                .iter()
                .filter(|env| !body.contains(&case_label(env)))
                .map(String::as_str)
                .collect();
            if missing.is_empty() {
                outcome.note(format!("✓ switch {}: all expected cases present", i + 1));
            } else {
                let list = missing.join(", ");
                outcome.warn(
                    format!("Switch {}: missing cases: {list}", i + 1),
                    format!("Switch {} missing cases: {list}", i + 1),
                );
            }
        }

        outcome.pass("Switch statements structurally sound");
        outcome
    }
}

/// What was found between `case '<env>':` and the next `break`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseBlockStatus {
    /// No case block for this environment.
    Absent,
    /// Every required variable is assigned.
    Complete,
    /// Variables missing, but the block is long enough to count as configured.
    Configured { missing: Vec<String> },
    /// Variables missing in a block at or under the threshold.
    Short { missing: Vec<String> },
}

/// Required `env.<VAR>` assignments inside selected case blocks.
#[derive(Debug, Clone)]
pub struct VariableAssignments {
    environments: Vec<(String, Regex)>,
    variables: Vec<String>,
    prefix: String,
    threshold: usize,
}

impl VariableAssignments {
    /// # Errors
    /// Returns `InvalidPattern` if a case block pattern cannot be compiled.
    pub fn new(config: &RetentionConfig) -> Result<Self> {
        let environments = config
            .variable_environments
            .iter()
            .map(|env| {
                let pattern = compile(&format!(
                    r"(?s){}(.*?)break",
                    regex::escape(&case_label(env))
                ))?;
                Ok((env.clone(), pattern))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            environments,
            variables: config.required_variables.clone(),
            prefix: config.variable_prefix.clone(),
            threshold: config.configured_block_threshold,
        })
    }

    /// Classify the first case block of the environment matched by `pattern`.
    #[must_use]
    pub fn classify(&self, pattern: &Regex, doc: &Document) -> CaseBlockStatus {
        let Some(block) = pattern
            .captures(doc.content())
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
        else {
            return CaseBlockStatus::Absent;
        };

        let missing: Vec<String> = self
            .variables
            .iter()
            .filter(|var| !block.contains(&format!("{}{var}", self.prefix)))
            .cloned()
            .collect();

        if missing.is_empty() {
            CaseBlockStatus::Complete
        } else if block.chars().count() > self.threshold {
            CaseBlockStatus::Configured { missing }
        } else {
            CaseBlockStatus::Short { missing }
        }
    }
}

impl Check for VariableAssignments {
    fn id(&self) -> &'static str {
        "variable-assignments"
    }

    fn title(&self) -> String {
        "Environment variable assignments".to_string()
    }

    fn category(&self) -> Category {
        Category::Environment
    }

    fn run(&self, doc: &Document) -> CheckOutcome {
        let mut outcome = self.outcome();

        for (env, pattern) in &self.environments {
            match self.classify(pattern, doc) {
                CaseBlockStatus::Absent => {
                    outcome.note(format!("{env}: no case block found"));
                }
                CaseBlockStatus::Complete => {
                    outcome.note(format!("✓ {env}: all critical variables assigned"));
                }
                CaseBlockStatus::Configured { missing } => {
                    outcome.note(format!("✓ {env}: environment configured"));
                    outcome.note(format!("  not assigned here: {}", missing.join(", ")));
                }
                CaseBlockStatus::Short { missing } => {
                    log::debug!("{env}: short case block, missing {}", missing.join(", "));
                    outcome.warn(
                        format!("{env}: Short case block detected"),
                        format!("{env}: Short case block detected"),
                    );
                }
            }
        }

        outcome.pass("Environment variable assignments verified");
        outcome
    }
}

#[cfg(test)]
#[path = "retention_tests.rs"]
mod tests;
