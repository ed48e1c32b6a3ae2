//! Prebuilt resource graphs for mock mode.
//!
//! Each scenario is a named, self-contained graph for the dataset
//! `demo-data`, useful for demos and for exercising the rule set without a
//! cluster.

use super::types::{
    ComponentInfo, DatasetInfo, InfrastructureInfo, PodInfo, ResourceGraph, RuntimeInfo,
    RuntimeKind, VolumeInfo, WorkloadKind,
};

/// Dataset name used by every scenario.
pub const DEMO_DATASET: &str = "demo-data";

/// Scenario used when `--mock` is given without `--scenario`.
pub const DEFAULT_SCENARIO: &str = "healthy";

/// A named mock scenario.
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    pub name: &'static str,
    pub description: &'static str,
    build: fn() -> ResourceGraph,
}

impl Scenario {
    /// Build a fresh copy of the scenario's graph.
    pub fn graph(&self) -> ResourceGraph {
        (self.build)()
    }
}

static SCENARIOS: [Scenario; 7] = [
    Scenario {
        name: "healthy",
        description: "A fully functional Dataset with ready Runtime and Infrastructure.",
        build: healthy,
    },
    Scenario {
        name: "missing-runtime",
        description: "Dataset created but no runtime associated.",
        build: missing_runtime,
    },
    Scenario {
        name: "partial-ready",
        description: "One worker pod is failing (2/3 Ready).",
        build: partial_ready,
    },
    Scenario {
        name: "missing-fuse",
        description: "Fuse daemonset has 0 ready replicas.",
        build: missing_fuse,
    },
    Scenario {
        name: "failed-pods",
        description: "Multiple components failing simultaneously.",
        build: failed_pods,
    },
    Scenario {
        name: "pvc-pending",
        description: "PersistentVolumeClaim is Pending and no worker is ready.",
        build: pvc_pending,
    },
    Scenario {
        name: "scaled-down-fuse",
        description: "Fuse daemonset is scheduled on no nodes; nothing is wrong.",
        build: scaled_down_fuse,
    },
];

/// All scenarios, in listing order.
pub fn all_scenarios() -> &'static [Scenario] {
    &SCENARIOS
}

/// Find a scenario by name.
pub fn scenario(name: &str) -> Option<&'static Scenario> {
    SCENARIOS.iter().find(|s| s.name == name)
}

pub fn scenario_names() -> Vec<&'static str> {
    SCENARIOS.iter().map(|s| s.name).collect()
}

// ============================================================================
// Graph builders
// ============================================================================

fn component(suffix: &str, ready: u32, replicas: u32, workload: WorkloadKind) -> ComponentInfo {
    ComponentInfo::new(format!("{}-{}", DEMO_DATASET, suffix), ready, replicas)
        .with_workload(workload)
}

fn master(ready: u32, replicas: u32) -> ComponentInfo {
    component("master", ready, replicas, WorkloadKind::StatefulSet)
}

fn worker(ready: u32, replicas: u32) -> ComponentInfo {
    component("worker", ready, replicas, WorkloadKind::StatefulSet)
}

fn fuse(ready: u32, replicas: u32) -> ComponentInfo {
    component("fuse", ready, replicas, WorkloadKind::DaemonSet)
}

fn bound_dataset() -> DatasetInfo {
    DatasetInfo::new(DEMO_DATASET, "default", "Bound")
}

fn bound_claim() -> InfrastructureInfo {
    InfrastructureInfo {
        pvc: Some(VolumeInfo::new(DEMO_DATASET, "Bound")),
        pv: Some(VolumeInfo::new(format!("default-{}", DEMO_DATASET), "Bound")),
    }
}

fn healthy() -> ResourceGraph {
    ResourceGraph::new(bound_dataset())
        .with_runtime(
            RuntimeInfo::new(DEMO_DATASET, RuntimeKind::Alluxio, "Ready")
                .with_master(master(1, 1))
                .with_worker(worker(3, 3))
                .with_fuse(fuse(5, 5)),
        )
        .with_infrastructure(bound_claim())
}

fn missing_runtime() -> ResourceGraph {
    ResourceGraph::new(DatasetInfo::new(DEMO_DATASET, "default", "NotReady"))
}

fn partial_ready() -> ResourceGraph {
    let pods = vec![
        PodInfo::new("demo-data-worker-0", "Running", "2d"),
        PodInfo::new("demo-data-worker-1", "Running", "2d"),
        PodInfo::new("demo-data-worker-2", "CrashLoopBackOff", "2d")
            .with_restarts(14)
            .with_last_state("OOMKilled"),
    ];

    ResourceGraph::new(bound_dataset())
        .with_runtime(
            RuntimeInfo::new(DEMO_DATASET, RuntimeKind::Alluxio, "PartialReady")
                .with_master(master(1, 1))
                .with_worker(worker(2, 3).with_pods(pods))
                .with_fuse(fuse(5, 5)),
        )
        .with_infrastructure(bound_claim())
}

fn missing_fuse() -> ResourceGraph {
    ResourceGraph::new(bound_dataset())
        .with_runtime(
            RuntimeInfo::new(DEMO_DATASET, RuntimeKind::Alluxio, "Ready")
                .with_master(master(1, 1))
                .with_worker(worker(3, 3))
                .with_fuse(fuse(0, 5)),
        )
        .with_infrastructure(bound_claim())
}

fn failed_pods() -> ResourceGraph {
    ResourceGraph::new(bound_dataset())
        .with_runtime(
            RuntimeInfo::new(DEMO_DATASET, RuntimeKind::Jindo, "NotReady")
                .with_master(master(0, 1))
                .with_worker(worker(1, 3))
                .with_fuse(fuse(2, 2)),
        )
        .with_infrastructure(bound_claim())
}

fn pvc_pending() -> ResourceGraph {
    ResourceGraph::new(bound_dataset())
        .with_runtime(
            RuntimeInfo::new(DEMO_DATASET, RuntimeKind::Alluxio, "NotReady")
                .with_master(master(1, 1))
                .with_worker(worker(0, 1))
                .with_fuse(fuse(1, 1)),
        )
        .with_infrastructure(InfrastructureInfo {
            pvc: Some(VolumeInfo::new(DEMO_DATASET, "Pending")),
            pv: None,
        })
}

fn scaled_down_fuse() -> ResourceGraph {
    ResourceGraph::new(bound_dataset())
        .with_runtime(
            RuntimeInfo::new(DEMO_DATASET, RuntimeKind::JuiceFs, "Ready")
                .with_worker(component("worker", 2, 2, WorkloadKind::DaemonSet))
                .with_fuse(fuse(0, 0)),
        )
        .with_infrastructure(bound_claim())
}
