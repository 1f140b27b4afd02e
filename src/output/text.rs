use std::io::Write;

use indexmap::IndexMap;

use crate::checker::{AuditReport, Category, CheckOutcome, EventKind, Finding};
use crate::error::Result;

use super::{ColorMode, OutputFormatter, ansi};

const RULE_WIDTH: usize = 70;

pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn banner(&self, title: &str, output: &mut Vec<u8>) {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(output, "{rule}").ok();
        writeln!(output, "{}", self.colorize(title, ansi::BOLD)).ok();
        writeln!(output, "{rule}").ok();
    }

    fn format_outcome(&self, outcome: &CheckOutcome, output: &mut Vec<u8>) {
        writeln!(output).ok();
        writeln!(output, "Test {}: {}", outcome.number, outcome.title).ok();

        for event in &outcome.events {
            let line = match event.kind {
                EventKind::Note => format!("   {}", event.message),
                EventKind::Pass => self.colorize(&format!("✓ PASS - {}", event.message), ansi::GREEN),
                EventKind::Fail => self.colorize(&format!("✗ FAIL - {}", event.message), ansi::RED),
                EventKind::Warn => {
                    self.colorize(&format!("⚠ WARNING - {}", event.message), ansi::YELLOW)
                }
            };
            writeln!(output, "{line}").ok();
        }
    }

    fn format_bucket(&self, heading: &str, color: &str, findings: &[&Finding], output: &mut Vec<u8>) {
        writeln!(
            output,
            "{}",
            self.colorize(&format!("{heading} ({}):", findings.len()), color)
        )
        .ok();
        if findings.is_empty() {
            writeln!(output, "  (none)").ok();
        }
        for finding in findings {
            if finding.lines.is_empty() {
                writeln!(output, "  • {}", finding.message).ok();
            } else {
                let lines: Vec<String> = finding.lines.iter().map(ToString::to_string).collect();
                writeln!(output, "  • {} (lines {})", finding.message, lines.join(", ")).ok();
            }
        }
    }

    fn format_summary(&self, report: &AuditReport, output: &mut Vec<u8>) {
        writeln!(output).ok();
        self.banner("AUDIT SUMMARY", output);
        writeln!(
            output,
            "Checks passed: {}/{}",
            report.checks_passed(),
            report.outcomes.len()
        )
        .ok();
        writeln!(output).ok();

        self.format_bucket("CRITICAL ERRORS", ansi::RED, &report.critical(), output);
        self.format_bucket("ERRORS", ansi::RED, &report.errors(), output);
        self.format_bucket("WARNINGS", ansi::YELLOW, &report.warnings(), output);
        writeln!(output).ok();

        let verdict = if report.is_success() {
            self.colorize("✓ AUDIT PASSED: no critical issues or errors", ansi::GREEN)
        } else {
            let blocking = report.critical().len() + report.errors().len();
            self.colorize(
                &format!("✗ AUDIT FAILED: {blocking} blocking issue(s) must be fixed"),
                ansi::RED,
            )
        };
        writeln!(output, "{verdict}").ok();
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &AuditReport) -> Result<String> {
        let mut output = Vec::new();

        self.banner("PIPELINE AUDIT", &mut output);
        writeln!(output, "   File: {}", report.target().display()).ok();
        writeln!(output, "   Size: {} lines", report.lines).ok();

        let mut by_category: IndexMap<Category, Vec<&CheckOutcome>> = IndexMap::new();
        for outcome in &report.outcomes {
            by_category.entry(outcome.category).or_default().push(outcome);
        }

        for (category, outcomes) in &by_category {
            writeln!(output).ok();
            writeln!(
                output,
                "{}",
                self.colorize(&format!("Category: {}", category.label()), ansi::CYAN)
            )
            .ok();
            writeln!(output, "{}", "-".repeat(RULE_WIDTH)).ok();
            for outcome in outcomes {
                self.format_outcome(outcome, &mut output);
            }
        }

        self.format_summary(report, &mut output);

        Ok(String::from_utf8_lossy(&output).to_string())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
