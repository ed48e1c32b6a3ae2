use fluid_introspector::analyzer::dataset_health::{
    ComponentInfo, DatasetInfo, HEALTHY_SUMMARY, InfrastructureInfo, ResourceGraph, RuntimeInfo,
    RuntimeKind, Severity, VolumeInfo, codes, diagnose,
};
use proptest::prelude::*;
use proptest::test_runner::Config;

fn phase() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Bound".to_string()),
        Just("bound".to_string()),
        Just("NotReady".to_string()),
        Just("Pending".to_string()),
        Just(String::new()),
    ]
}

fn component(suffix: &'static str) -> impl Strategy<Value = Option<ComponentInfo>> {
    proptest::option::of((0u32..5, 0u32..5)).prop_map(move |counts| {
        counts.map(|(ready, replicas)| ComponentInfo::new(format!("demo-{suffix}"), ready, replicas))
    })
}

fn runtime() -> impl Strategy<Value = Option<RuntimeInfo>> {
    proptest::option::of((component("master"), component("worker"), component("fuse"))).prop_map(
        |parts| {
            parts.map(|(master, worker, fuse)| {
                let mut runtime = RuntimeInfo::new("demo", RuntimeKind::Alluxio, "Ready");
                runtime.master = master;
                runtime.worker = worker;
                runtime.fuse = fuse;
                runtime
            })
        },
    )
}

fn infrastructure() -> impl Strategy<Value = Option<InfrastructureInfo>> {
    proptest::option::of(proptest::option::of(phase())).prop_map(|infra| {
        infra.map(|pvc| InfrastructureInfo {
            pvc: pvc.map(|status| VolumeInfo::new("demo", status)),
            pv: None,
        })
    })
}

fn graph() -> impl Strategy<Value = ResourceGraph> {
    (
        proptest::option::of(phase()),
        runtime(),
        infrastructure(),
    )
        .prop_map(|(phase, runtime, infrastructure)| ResourceGraph {
            dataset: phase.map(|p| DatasetInfo::new("demo", "default", p)),
            runtime,
            infrastructure,
        })
}

proptest! {
    #![proptest_config(Config::with_cases(256))]

    #[test]
    fn healthy_iff_no_findings(graph in graph()) {
        let result = diagnose(&graph);
        prop_assert_eq!(result.is_healthy, result.failure_hints.is_empty());
        prop_assert_eq!(result.is_healthy, result.summary == HEALTHY_SUMMARY);
    }

    #[test]
    fn diagnosis_is_deterministic(graph in graph()) {
        let first = diagnose(&graph);
        let second = diagnose(&graph);
        prop_assert_eq!(first.summary, second.summary);
        prop_assert_eq!(first.failure_hints, second.failure_hints);
    }

    #[test]
    fn findings_are_ordered_by_severity(graph in graph()) {
        let result = diagnose(&graph);
        let ranks: Vec<u8> = result.failure_hints.iter().map(|h| h.severity.rank()).collect();
        prop_assert!(ranks.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn runtime_missing_tracks_runtime_absence(graph in graph()) {
        let result = diagnose(&graph);
        prop_assert_eq!(result.has_finding(codes::RUNTIME_MISSING), graph.runtime.is_none());
    }

    #[test]
    fn fuse_fires_only_with_desired_and_zero_ready(ready in 0u32..4, replicas in 0u32..4) {
        let graph = ResourceGraph::new(DatasetInfo::new("demo", "default", "Bound")).with_runtime(
            RuntimeInfo::new("demo", RuntimeKind::Thin, "Ready")
                .with_fuse(ComponentInfo::new("demo-fuse", ready, replicas)),
        );
        let fired = diagnose(&graph).has_finding(codes::FUSE_MISSING);
        prop_assert_eq!(fired, ready == 0 && replicas > 0);
    }
}

#[test]
fn test_missing_runtime_with_bound_dataset() {
    let graph = ResourceGraph::new(DatasetInfo::new("demo", "default", "Bound"));
    let result = diagnose(&graph);

    assert_eq!(result.failure_hints.len(), 1);
    let hint = &result.failure_hints[0];
    assert_eq!(hint.id, codes::RUNTIME_MISSING);
    assert_eq!(hint.severity, Severity::Critical);
    assert_eq!(hint.evidence.name, "demo");
}

#[test]
fn test_missing_runtime_with_unbound_dataset() {
    let graph = ResourceGraph::new(DatasetInfo::new("demo", "default", "NotReady"));
    let result = diagnose(&graph);

    assert!(result.has_finding(codes::RUNTIME_MISSING));
    assert!(result.has_finding(codes::DATASET_NOT_BOUND));
    assert_eq!(result.summary, "Found 2 issues: 2 critical, 0 warnings.");
}

#[test]
fn test_complex_failure_orders_pvc_first() {
    let graph = ResourceGraph::new(DatasetInfo::new("demo", "default", "Bound"))
        .with_runtime(
            RuntimeInfo::new("demo", RuntimeKind::Alluxio, "NotReady")
                .with_worker(ComponentInfo::new("demo-worker", 0, 1)),
        )
        .with_infrastructure(InfrastructureInfo {
            pvc: Some(VolumeInfo::new("demo", "Pending")),
            pv: None,
        });

    let ids: Vec<String> = diagnose(&graph)
        .failure_hints
        .into_iter()
        .map(|h| h.id)
        .collect();
    assert_eq!(ids, vec![codes::PVC_NOT_BOUND, codes::WORKER_PARTIALLY_READY]);
}
