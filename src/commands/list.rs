use std::fmt::Write;

use crate::checker::Auditor;
use crate::cli::{Cli, ListArgs};
use crate::output::ErrorOutput;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::context::{color_choice_to_mode, load_config};

#[must_use]
pub fn run_list(args: &ListArgs, cli: &Cli) -> i32 {
    match run_list_impl(args, cli) {
        Ok(listing) => {
            print!("{listing}");
            EXIT_SUCCESS
        }
        Err(e) => {
            ErrorOutput::new(color_choice_to_mode(cli.color)).print_audit_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Render the checklist as configured, one check per line.
///
/// # Errors
/// Returns an error if the configuration cannot be loaded or a pattern is invalid.
pub fn run_list_impl(args: &ListArgs, cli: &Cli) -> Result<String> {
    let config = load_config(args.config.as_deref(), cli.no_config)?.config;
    let auditor = Auditor::from_config(&config)?;
    Ok(format_checklist(&auditor))
}

#[must_use]
pub fn format_checklist(auditor: &Auditor) -> String {
    let mut listing = String::new();
    let mut current = None;
    for (number, check) in auditor.checklist() {
        if current != Some(check.category()) {
            current = Some(check.category());
            let _ = writeln!(listing, "{}", check.category().label());
        }
        let _ = writeln!(listing, "  {number:<5} {:<24} {}", check.id(), check.title());
    }
    listing
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
