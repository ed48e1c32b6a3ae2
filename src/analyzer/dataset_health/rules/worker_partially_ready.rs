//! WORKER_PARTIALLY_READY: fewer runtime workers are ready than desired.

use super::{Rule, codes, ready_detail};
use crate::analyzer::dataset_health::types::{Evidence, ResourceGraph, Severity};

pub(super) const RULE: Rule = Rule {
    id: codes::WORKER_PARTIALLY_READY,
    severity: Severity::Warning,
    component: "Runtime/Worker",
    description: "Runtime workers are partially ready",
    suggestion: "Check individual Worker pods for OOMKilled or CrashLoopBackOff.",
    check,
};

fn check(graph: &ResourceGraph) -> Option<Evidence> {
    let worker = graph.worker()?;
    if worker.ready >= worker.replicas {
        return None;
    }

    // Workers may run as either workload kind
    let kind = worker
        .workload
        .map(|w| w.as_str())
        .unwrap_or("StatefulSet/DaemonSet");
    Some(Evidence::new(
        kind,
        worker.name.clone(),
        ready_detail(worker.ready, worker.replicas),
    ))
}
