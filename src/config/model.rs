use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Supported config version.
pub const CONFIG_VERSION: &str = "1";

/// Default pipeline file audited when neither CLI nor config names one.
pub const DEFAULT_TARGET: &str = "Jenkinsfile";

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Config schema version. `None` means current.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Path of the pipeline file to audit, relative to the working directory.
    #[serde(default = "default_target")]
    pub target: PathBuf,

    #[serde(default)]
    pub structure: StructureConfig,

    #[serde(default)]
    pub decommission: DecommissionConfig,

    #[serde(default)]
    pub parameter: ParameterConfig,

    #[serde(default)]
    pub retention: RetentionConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: None,
            target: default_target(),
            structure: StructureConfig::default(),
            decommission: DecommissionConfig::default(),
            parameter: ParameterConfig::default(),
            retention: RetentionConfig::default(),
        }
    }
}

/// Required pipeline sections [structure].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StructureConfig {
    /// Sections whose absence is an error. Patterns are regexes.
    #[serde(default = "default_required_sections")]
    pub required_sections: Vec<SectionRule>,
}

impl Default for StructureConfig {
    fn default() -> Self {
        Self {
            required_sections: default_required_sections(),
        }
    }
}

/// A named regex that must match somewhere in the document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SectionRule {
    pub name: String,
    pub pattern: String,
}

impl SectionRule {
    #[must_use]
    pub fn new(name: &str, pattern: &str) -> Self {
        Self {
            name: name.to_string(),
            pattern: pattern.to_string(),
        }
    }
}

/// The removed environment [decommission].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DecommissionConfig {
    /// Environment identifier that must no longer appear.
    #[serde(default = "default_token")]
    pub token: String,

    /// Trimmed lines starting with one of these are ignored by the line scan.
    #[serde(default = "default_comment_markers")]
    pub comment_markers: Vec<String>,

    /// Extensions of per-environment files, e.g. `dev2.yaml`.
    #[serde(default = "default_derived_extensions")]
    pub derived_extensions: Vec<String>,

    /// Maximum number of matching lines previewed in the report.
    #[serde(default = "default_preview_lines")]
    pub preview_lines: usize,

    /// Maximum characters shown per previewed line.
    #[serde(default = "default_preview_width")]
    pub preview_width: usize,
}

impl Default for DecommissionConfig {
    fn default() -> Self {
        Self {
            token: default_token(),
            comment_markers: default_comment_markers(),
            derived_extensions: default_derived_extensions(),
            preview_lines: default_preview_lines(),
            preview_width: default_preview_width(),
        }
    }
}

impl DecommissionConfig {
    /// Token as every check matches it: trimmed and lowercased.
    #[must_use]
    pub fn normalized_token(&self) -> String {
        self.token.trim().to_lowercase()
    }
}

/// The choice parameter that selects an environment [parameter].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParameterConfig {
    #[serde(default = "default_parameter_name")]
    pub name: String,

    /// Choices that must remain listed.
    #[serde(default = "default_environments")]
    pub expected_choices: Vec<String>,
}

impl Default for ParameterConfig {
    fn default() -> Self {
        Self {
            name: default_parameter_name(),
            expected_choices: default_environments(),
        }
    }
}

/// Environments that must stay configured [retention].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RetentionConfig {
    /// Each needs at least one `case '<name>':` branch.
    #[serde(default = "default_environments")]
    pub environments: Vec<String>,

    /// Expression switched on, e.g. `params.ENV`.
    #[serde(default = "default_switch_expression")]
    pub switch_expression: String,

    /// Number of switch statements expected on `switch_expression`.
    #[serde(default = "default_expected_switches")]
    pub expected_switches: usize,

    /// Environments whose case blocks are checked for variable assignments.
    #[serde(default = "default_variable_environments")]
    pub variable_environments: Vec<String>,

    #[serde(default = "default_required_variables")]
    pub required_variables: Vec<String>,

    /// Prefix of an assignment target, e.g. `env.` in `env.NAMESPACE = ...`.
    #[serde(default = "default_variable_prefix")]
    pub variable_prefix: String,

    /// Case blocks longer than this many characters count as configured even
    /// when a required variable is missing; shorter ones are warned about.
    #[serde(default = "default_configured_block_threshold")]
    pub configured_block_threshold: usize,
}

impl Default for RetentionConfig {
    fn default() -> Self {
        Self {
            environments: default_environments(),
            switch_expression: default_switch_expression(),
            expected_switches: default_expected_switches(),
            variable_environments: default_variable_environments(),
            required_variables: default_required_variables(),
            variable_prefix: default_variable_prefix(),
            configured_block_threshold: default_configured_block_threshold(),
        }
    }
}

fn default_target() -> PathBuf {
    PathBuf::from(DEFAULT_TARGET)
}

fn default_required_sections() -> Vec<SectionRule> {
    vec![
        SectionRule::new("agent declaration", r"agent\s+any"),
        SectionRule::new("parameters block", r"parameters\s*\{"),
        SectionRule::new("environment block", r"environment\s*\{"),
        SectionRule::new("stages block", r"stages\s*\{"),
    ]
}

fn default_token() -> String {
    "dev2".to_string()
}

fn default_comment_markers() -> Vec<String> {
    vec!["//".to_string(), "*".to_string()]
}

fn default_derived_extensions() -> Vec<String> {
    vec!["yaml".to_string()]
}

const fn default_preview_lines() -> usize {
    5
}

const fn default_preview_width() -> usize {
    60
}

fn default_parameter_name() -> String {
    "ENV".to_string()
}

fn default_environments() -> Vec<String> {
    vec!["dev1".to_string(), "mde".to_string(), "staging".to_string()]
}

fn default_switch_expression() -> String {
    "params.ENV".to_string()
}

const fn default_expected_switches() -> usize {
    3
}

fn default_variable_environments() -> Vec<String> {
    vec!["dev1".to_string(), "staging".to_string()]
}

fn default_required_variables() -> Vec<String> {
    vec![
        "NAMESPACE".to_string(),
        "AWS_PROFILE".to_string(),
        "EKS_CLUSTER_NAME".to_string(),
        "ECR_REGISTRY".to_string(),
    ]
}

fn default_variable_prefix() -> String {
    "env.".to_string()
}

const fn default_configured_block_threshold() -> usize {
    50
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
