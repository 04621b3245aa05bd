//! Engine configuration.
//!
//! The engine itself is a set of pure functions; the configuration only
//! carries the few caller-selectable knobs: a decision-rule override and the
//! certificate-expiry warning window.

use serde::{Deserialize, Serialize};

use crate::model::DecisionRule;

/// Error type for configuration validation.
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

/// Options for a whole-snapshot assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssessmentConfig {
    /// Override the decision rule recorded in the snapshot, if set
    pub decision_rule_override: Option<DecisionRule>,
    /// Days before certificate expiry at which a weight is flagged as
    /// expiring soon
    pub expiry_warning_days: u64,
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self {
            decision_rule_override: None,
            expiry_warning_days: 30,
        }
    }
}

impl Validatable for AssessmentConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.expiry_warning_days > 3650 {
            errors.push(ConfigError {
                field: "expiry_warning_days".to_string(),
                message: format!(
                    "{} days is beyond the supported horizon (max 3650)",
                    self.expiry_warning_days
                ),
            });
        }
        errors
    }
}
