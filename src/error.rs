use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuditError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Failed to read file: {}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid regex pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl AuditError {
    /// Short label used as the heading of stderr error output.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) => "Config",
            Self::FileNotFound { .. } => "FileNotFound",
            Self::FileRead { .. } => "FileRead",
            Self::InvalidPattern { .. } => "InvalidPattern",
            Self::Io(_) => "IO",
            Self::TomlParse(_) => "TomlParse",
            Self::JsonSerialize(_) => "JsonSerialize",
        }
    }

    /// Actionable hint for the user, if one applies.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::FileNotFound { .. } => {
                Some("pass the pipeline file as an argument or set `target` in .pipeline-audit.toml")
            }
            Self::InvalidPattern { .. } => {
                Some("check the `structure.required_sections` patterns in your configuration")
            }
            Self::TomlParse(_) => Some("run `pipeline-audit init` to generate a valid configuration"),
            _ => None,
        }
    }

    /// Whether this error means the audit target itself is unusable.
    ///
    /// Such errors fail the audit (exit 1) instead of being reported as
    /// configuration errors (exit 2).
    #[must_use]
    pub const fn is_target_error(&self) -> bool {
        matches!(self, Self::FileNotFound { .. } | Self::FileRead { .. })
    }
}

pub type Result<T> = std::result::Result<T, AuditError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
