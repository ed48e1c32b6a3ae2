use std::path::PathBuf;
use std::time::Duration;

use fluid_introspector::analyzer::dataset_health::{
    ComponentState, DatasetStatus, FixtureStore, MapperError, ObjectRef, ObjectStore,
    ResourceMapper, RuntimeKind, StoreError, WorkloadKind, codes, diagnose,
};
use serde_json::Value;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// A store whose reads never complete.
struct StalledStore;

impl ObjectStore for StalledStore {
    fn get(
        &self,
        _object: &ObjectRef,
    ) -> impl std::future::Future<Output = Result<Option<Value>, StoreError>> + Send {
        std::future::pending()
    }
}

#[tokio::test]
async fn test_degraded_fixture_maps_and_diagnoses() {
    let store = FixtureStore::from_file(&fixture("degraded_dataset.yaml"), "ml").unwrap();
    let graph = ResourceMapper::new(store)
        .map_dataset("imagenet", "ml")
        .await
        .unwrap();

    let dataset = graph.dataset.as_ref().unwrap();
    assert_eq!(dataset.status, DatasetStatus::Bound);
    assert_eq!(dataset.reason.as_deref(), Some("DatasetReady"));
    assert_eq!(dataset.labels.get("team").map(String::as_str), Some("vision"));

    let runtime = graph.runtime.as_ref().unwrap();
    assert_eq!(runtime.kind, RuntimeKind::Alluxio);
    assert_eq!(graph.worker().unwrap().state, ComponentState::PartialReady);
    assert_eq!(graph.fuse().unwrap().ready_ratio(), "4/4");

    let result = diagnose(&graph);
    let ids: Vec<&str> = result.failure_hints.iter().map(|h| h.id.as_str()).collect();
    assert_eq!(ids, vec![codes::PVC_NOT_BOUND, codes::WORKER_PARTIALLY_READY]);
    assert_eq!(result.summary, "Found 2 issues: 1 critical, 1 warnings.");
}

#[tokio::test]
async fn test_healthy_fixture_with_daemonset_workers() {
    let store = FixtureStore::from_file(&fixture("healthy_dataset.yaml"), "default").unwrap();
    let graph = ResourceMapper::new(store)
        .map_dataset("logs", "default")
        .await
        .unwrap();

    let worker = graph.worker().unwrap();
    assert_eq!(worker.workload, Some(WorkloadKind::DaemonSet));
    assert_eq!(worker.state, ComponentState::Ready);
    assert_eq!(graph.fuse().unwrap().state, ComponentState::ComponentsScaledDown);
    assert!(graph.master().is_none());

    let infra = graph.infrastructure.as_ref().unwrap();
    assert_eq!(infra.pv.as_ref().map(|pv| pv.name.as_str()), Some("default-logs"));

    assert!(diagnose(&graph).is_healthy);
}

#[tokio::test]
async fn test_wrong_namespace_is_dataset_not_found() {
    let store = FixtureStore::from_file(&fixture("healthy_dataset.yaml"), "default").unwrap();
    let err = ResourceMapper::new(store)
        .map_dataset("logs", "other")
        .await
        .unwrap_err();
    assert!(matches!(err, MapperError::DatasetNotFound { .. }));
}

#[tokio::test]
async fn test_mapping_times_out() {
    let err = ResourceMapper::new(StalledStore)
        .map_dataset_with_timeout("demo", "default", Duration::from_millis(20))
        .await
        .unwrap_err();

    match err {
        MapperError::Timeout { namespace, name, timeout } => {
            assert_eq!(namespace, "default");
            assert_eq!(name, "demo");
            assert_eq!(timeout, Duration::from_millis(20));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_store_can_be_borrowed() {
    let store = FixtureStore::from_file(&fixture("healthy_dataset.yaml"), "default").unwrap();
    let first = ResourceMapper::new(&store).map_dataset("logs", "default").await.unwrap();
    let second = ResourceMapper::new(&store).map_dataset("logs", "default").await.unwrap();
    assert_eq!(first, second);
}
