//! MASTER_NOT_READY: the runtime master is not fully ready.

use super::{Rule, codes, ready_detail};
use crate::analyzer::dataset_health::types::{Evidence, ResourceGraph, Severity, WorkloadKind};

pub(super) const RULE: Rule = Rule {
    id: codes::MASTER_NOT_READY,
    severity: Severity::Critical,
    component: "Runtime/Master",
    description: "Runtime master is not fully ready",
    suggestion: "Check Master pod logs for startup errors or scheduling issues.",
    check,
};

fn check(graph: &ResourceGraph) -> Option<Evidence> {
    let master = graph.master()?;
    if master.ready == master.replicas {
        return None;
    }

    let kind = master.workload.unwrap_or(WorkloadKind::StatefulSet);
    Some(Evidence::new(
        kind.as_str(),
        master.name.clone(),
        ready_detail(master.ready, master.replicas),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::dataset_health::types::{
        ComponentInfo, DatasetInfo, RuntimeInfo, RuntimeKind,
    };

    fn graph_with_master(ready: u32, replicas: u32) -> ResourceGraph {
        ResourceGraph::new(DatasetInfo::new("demo", "default", "Bound")).with_runtime(
            RuntimeInfo::new("demo", RuntimeKind::Alluxio, "Ready")
                .with_master(ComponentInfo::new("demo-master", ready, replicas)),
        )
    }

    #[test]
    fn test_fires_when_counts_differ() {
        let evidence = check(&graph_with_master(0, 1)).unwrap();
        assert_eq!(evidence.kind, "StatefulSet");
        assert_eq!(evidence.detail, "Ready replicas: 0/1");
    }

    #[test]
    fn test_more_ready_than_desired_fires() {
        assert!(check(&graph_with_master(2, 1)).is_some());
    }

    #[test]
    fn test_ready_master_passes() {
        assert!(check(&graph_with_master(1, 1)).is_none());
        assert!(check(&graph_with_master(0, 0)).is_none());
    }
}
