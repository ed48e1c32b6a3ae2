//! DATASET_NOT_BOUND: the Dataset has not been bound to a runtime.

use super::{Rule, codes};
use crate::analyzer::dataset_health::types::{Evidence, ResourceGraph, Severity};

pub(super) const RULE: Rule = Rule {
    id: codes::DATASET_NOT_BOUND,
    severity: Severity::Critical,
    component: "Dataset",
    description: "Dataset is not bound",
    suggestion: "Check if a Runtime with the same name exists and is compatible.",
    check,
};

fn check(graph: &ResourceGraph) -> Option<Evidence> {
    let dataset = graph.dataset.as_ref()?;
    if dataset.is_bound() {
        return None;
    }

    Some(Evidence::new(
        "Dataset",
        dataset.name.clone(),
        format!("Phase: {}, Status: {}", dataset.phase, dataset.status),
    ))
}
