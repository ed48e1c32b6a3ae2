//! Diagnostic rules for Fluid Datasets.
//!
//! Each rule lives in its own module and contributes one [`Rule`] record to
//! the static registry. A rule is plain data: its id, severity, component
//! label, suggestion and a check function that inspects the graph and
//! returns the evidence when the rule fires. Checks never fail; a check that
//! needs a part of the graph that is absent simply does not fire.

mod dataset_not_bound;
mod fuse_missing;
mod master_not_ready;
mod pvc_not_bound;
mod runtime_missing;
mod worker_partially_ready;

use crate::analyzer::dataset_health::types::{Evidence, FailureHint, ResourceGraph, Severity};

// ============================================================================
// Rule Record
// ============================================================================

/// A single diagnostic rule.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    /// Stable rule identifier
    pub id: &'static str,
    pub severity: Severity,
    /// Owning component label
    pub component: &'static str,
    pub description: &'static str,
    pub suggestion: &'static str,
    /// Returns the evidence when the rule fires
    pub check: fn(&ResourceGraph) -> Option<Evidence>,
}

impl Rule {
    /// Evaluate this rule against a graph.
    pub fn evaluate(&self, graph: &ResourceGraph) -> Option<FailureHint> {
        (self.check)(graph).map(|evidence| FailureHint {
            id: self.id.to_string(),
            severity: self.severity,
            component: self.component.to_string(),
            evidence,
            suggestion: self.suggestion.to_string(),
            context: None,
        })
    }
}

// ============================================================================
// Rule Codes
// ============================================================================

/// Rule id constants. These are stable across versions.
pub mod codes {
    pub const DATASET_NOT_BOUND: &str = "DATASET_NOT_BOUND";
    pub const RUNTIME_MISSING: &str = "RUNTIME_MISSING";
    pub const MASTER_NOT_READY: &str = "MASTER_NOT_READY";
    pub const WORKER_PARTIALLY_READY: &str = "WORKER_PARTIALLY_READY";
    pub const FUSE_MISSING: &str = "FUSE_MISSING";
    pub const PVC_NOT_BOUND: &str = "PVC_NOT_BOUND";
}

// ============================================================================
// Rule Registry
// ============================================================================

static RULES: [Rule; 6] = [
    dataset_not_bound::RULE,
    runtime_missing::RULE,
    master_not_ready::RULE,
    worker_partially_ready::RULE,
    fuse_missing::RULE,
    pvc_not_bound::RULE,
];

/// Get all rules in registration order.
pub fn all_rules() -> &'static [Rule] {
    &RULES
}

/// Get rule description by id.
pub fn rule_description(id: &str) -> &'static str {
    RULES
        .iter()
        .find(|r| r.id == id)
        .map(|r| r.description)
        .unwrap_or("Unknown rule")
}

/// Evidence detail for a component's readiness.
fn ready_detail(ready: u32, replicas: u32) -> String {
    format!("Ready replicas: {}/{}", ready, replicas)
}
