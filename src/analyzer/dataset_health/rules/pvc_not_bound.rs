//! PVC_NOT_BOUND: the Dataset's PersistentVolumeClaim is not bound.

use super::{Rule, codes};
use crate::analyzer::dataset_health::types::{Evidence, ResourceGraph, Severity};

pub(super) const RULE: Rule = Rule {
    id: codes::PVC_NOT_BOUND,
    severity: Severity::Critical,
    component: "Infrastructure/PVC",
    description: "PersistentVolumeClaim is not bound",
    suggestion: "Check PersistentVolume availability or StorageClass configuration.",
    check,
};

fn check(graph: &ResourceGraph) -> Option<Evidence> {
    let pvc = graph.pvc()?;
    if pvc.is_bound() {
        return None;
    }

    Some(Evidence::new(
        "PersistentVolumeClaim",
        pvc.name.clone(),
        format!("Status: {}", pvc.status),
    ))
}
