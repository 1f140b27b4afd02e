pub mod checker;
pub mod cli;
pub mod commands;
pub mod config;
pub mod document;
pub mod error;
pub mod output;

pub use error::{AuditError, Result};

use checker::AuditReport;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_AUDIT_FAILED: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

/// Process exit status for a finished audit: success iff nothing blocking was found.
#[must_use]
pub fn exit_code_for(report: &AuditReport) -> i32 {
    if report.is_success() {
        EXIT_SUCCESS
    } else {
        EXIT_AUDIT_FAILED
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
