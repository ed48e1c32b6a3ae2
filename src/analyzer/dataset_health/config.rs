//! Configuration for Dataset health diagnosis.

use super::types::Severity;
use serde::{Deserialize, Serialize};

/// Configuration for the rule evaluator.
///
/// The default configuration suppresses nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagnoseConfig {
    /// Minimum severity to report (default: Info)
    pub min_severity: Severity,

    /// Rules to ignore (by rule id)
    pub ignore_rules: Vec<String>,
}

impl Default for DiagnoseConfig {
    fn default() -> Self {
        Self {
            min_severity: Severity::Info,
            ignore_rules: Vec::new(),
        }
    }
}

impl DiagnoseConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum severity threshold.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.min_severity = severity;
        self
    }

    /// Add a rule to ignore.
    pub fn ignore_rule(mut self, rule: impl Into<String>) -> Self {
        self.ignore_rules.push(rule.into());
        self
    }

    /// Check if a rule should be ignored.
    pub fn should_ignore_rule(&self, rule: &str) -> bool {
        self.ignore_rules.iter().any(|r| r.eq_ignore_ascii_case(rule))
    }

    /// Check if a finding of this severity should be reported.
    pub fn reports(&self, severity: Severity) -> bool {
        severity >= self.min_severity
    }
}
