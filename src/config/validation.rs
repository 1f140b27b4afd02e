use indexmap::IndexSet;

use crate::error::{AuditError, Result};

use super::Config;
use super::model::CONFIG_VERSION;

/// Reject configurations the checks cannot run against.
///
/// Regex compilation errors are reported later, when the auditor compiles
/// its patterns.
///
/// # Errors
/// Returns `AuditError::Config` describing the first problem found.
pub fn validate_config(config: &Config) -> Result<()> {
    match &config.version {
        None => {}
        Some(v) if v == CONFIG_VERSION => {}
        Some(v) => {
            return Err(AuditError::Config(format!(
                "Unsupported config version '{v}'. Only version '{CONFIG_VERSION}' is supported."
            )));
        }
    }

    if config.decommission.token.trim().is_empty() {
        return Err(AuditError::Config(
            "decommission.token must not be empty".to_string(),
        ));
    }

    if config
        .decommission
        .comment_markers
        .iter()
        .any(|marker| marker.trim().is_empty())
    {
        return Err(AuditError::Config(
            "decommission.comment_markers must not contain an empty marker".to_string(),
        ));
    }

    if config.parameter.name.trim().is_empty() {
        return Err(AuditError::Config(
            "parameter.name must not be empty".to_string(),
        ));
    }

    let token = config.decommission.token.to_lowercase();
    if let Some(env) = config
        .retention
        .environments
        .iter()
        .find(|env| env.to_lowercase() == token)
    {
        return Err(AuditError::Config(format!(
            "retention.environments lists '{env}', which is the decommissioned token"
        )));
    }

    check_unique("retention.environments", &config.retention.environments)?;
    check_unique(
        "retention.variable_environments",
        &config.retention.variable_environments,
    )?;
    check_unique(
        "retention.required_variables",
        &config.retention.required_variables,
    )?;

    Ok(())
}

fn check_unique(field: &str, values: &[String]) -> Result<()> {
    let mut seen = IndexSet::new();
    for value in values {
        if !seen.insert(value.as_str()) {
            return Err(AuditError::Config(format!(
                "{field} contains '{value}' more than once"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
