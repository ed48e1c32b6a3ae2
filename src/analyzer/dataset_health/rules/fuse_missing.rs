//! FUSE_MISSING: the fuse daemon is desired on nodes but none of its pods are ready.

use super::{Rule, codes, ready_detail};
use crate::analyzer::dataset_health::types::{Evidence, ResourceGraph, Severity};

pub(super) const RULE: Rule = Rule {
    id: codes::FUSE_MISSING,
    severity: Severity::Warning,
    component: "Runtime/Fuse",
    description: "Fuse daemon is desired but has no ready pods",
    suggestion: "Check DaemonSet node selectors and tolerations. Ensure nodes have capacity.",
    check,
};

fn check(graph: &ResourceGraph) -> Option<Evidence> {
    let fuse = graph.fuse()?;
    // A fuse scaled to zero is intentional, not missing
    if fuse.ready > 0 || fuse.replicas == 0 {
        return None;
    }

    Some(Evidence::new(
        "DaemonSet",
        fuse.name.clone(),
        ready_detail(fuse.ready, fuse.replicas),
    ))
}
