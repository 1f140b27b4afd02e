use std::fs;

use crate::cli::InitArgs;
use crate::error::AuditError;
use crate::output::print_error_full;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

#[must_use]
pub fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            let suggestion = (args.output.exists() && !args.force).then_some("use --force to overwrite");
            print_error_full(e.error_type(), &e.to_string(), None, suggestion);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Writes the default configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(AuditError::Config(format!(
            "Configuration file already exists: {}",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# pipeline-audit configuration file
# Every key is optional; the values below are the built-in defaults.

version = "1"

# Pipeline file to audit (the positional argument of `check` overrides this)
target = "Jenkinsfile"

[structure]
# Sections whose absence is an error (patterns are regular expressions)
required_sections = [
    { name = "agent declaration", pattern = 'agent\s+any' },
    { name = "parameters block", pattern = 'parameters\s*\{' },
    { name = "environment block", pattern = 'environment\s*\{' },
    { name = "stages block", pattern = 'stages\s*\{' },
]

[decommission]
# Environment being removed; any remaining reference is critical
token = "dev2"
# Lines starting with these markers (after trimming) are ignored
comment_markers = ["//", "*"]
# `<token>.<ext>` file references are critical
derived_extensions = ["yaml"]
# How many matching lines to preview, and how many characters of each
preview_lines = 5
preview_width = 60

[parameter]
# Choice parameter selecting the environment
name = "ENV"
expected_choices = ["dev1", "mde", "staging"]

[retention]
# Environments that must keep a `case '<name>':` branch
environments = ["dev1", "mde", "staging"]
switch_expression = "params.ENV"
expected_switches = 3

# Case blocks that must assign every required variable
variable_environments = ["dev1", "staging"]
required_variables = ["NAMESPACE", "AWS_PROFILE", "EKS_CLUSTER_NAME", "ECR_REGISTRY"]
variable_prefix = "env."

# Case blocks longer than this many characters count as configured
# even when a required variable is missing from them
configured_block_threshold = 50
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
