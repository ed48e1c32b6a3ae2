//! RUNTIME_MISSING: no runtime of any known kind exists for the Dataset.

use super::{Rule, codes};
use crate::analyzer::dataset_health::types::{Evidence, ResourceGraph, Severity};

pub(super) const RULE: Rule = Rule {
    id: codes::RUNTIME_MISSING,
    severity: Severity::Critical,
    component: "Runtime",
    description: "No runtime found for the dataset",
    suggestion: "Create a Runtime CR (e.g., AlluxioRuntime, JindoRuntime) matching the Dataset.",
    check,
};

fn check(graph: &ResourceGraph) -> Option<Evidence> {
    if graph.runtime.is_some() {
        return None;
    }

    Some(Evidence::new(
        "Runtime",
        graph.dataset_name(),
        "Runtime object is missing from graph.",
    ))
}
