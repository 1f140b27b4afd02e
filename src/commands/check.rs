use crate::checker::{AuditReport, Auditor};
use crate::cli::{CheckArgs, Cli};
use crate::config::{Config, validate_config};
use crate::document::Document;
use crate::output::{ColorMode, ErrorOutput};
use crate::{EXIT_AUDIT_FAILED, EXIT_CONFIG_ERROR, exit_code_for};

use super::context::{color_choice_to_mode, load_config, write_output};

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            ErrorOutput::new(color_choice_to_mode(cli.color)).print_audit_error(&e);
            if e.is_target_error() {
                EXIT_AUDIT_FAILED
            } else {
                EXIT_CONFIG_ERROR
            }
        }
    }
}

pub(crate) fn run_check_impl(args: &CheckArgs, cli: &Cli) -> crate::Result<i32> {
    // 1. Load configuration
    let mut config = load_config(args.config.as_deref(), cli.no_config)?.config;

    // 2. Apply CLI argument overrides
    apply_cli_overrides(&mut config, args);
    validate_config(&config)?;

    // 3. Build the checklist before touching the target so pattern errors surface first
    let auditor = Auditor::from_config(&config)?;

    // 4. Audit
    let document = Document::load(&config.target)?;
    let report = auditor.audit(&document);
    log_verdict(&report);

    // 5. Render; never color a report written to a file
    let mode = if args.output.is_some() {
        ColorMode::Never
    } else {
        color_choice_to_mode(cli.color)
    };
    let content = args.format.formatter(mode).format(&report)?;
    write_output(args.output.as_deref(), &content, cli.quiet)?;

    Ok(exit_code_for(&report))
}

pub(crate) fn apply_cli_overrides(config: &mut Config, args: &CheckArgs) {
    if let Some(path) = &args.path {
        config.target.clone_from(path);
    }
    if let Some(token) = &args.token {
        config.decommission.token.clone_from(token);
    }
}

fn log_verdict(report: &AuditReport) {
    log::info!(
        "{}: {} critical, {} error(s), {} warning(s)",
        report.target().display(),
        report.critical().len(),
        report.errors().len(),
        report.warnings().len()
    );
    if let Some(worst) = report.worst_severity() {
        log::debug!("worst finding severity: {worst}");
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
