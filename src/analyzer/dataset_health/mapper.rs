//! Discovery of a Dataset's resources.
//!
//! [`ResourceMapper::map_dataset`] performs a bounded sequence of point reads
//! against an [`ObjectStore`] and assembles a [`ResourceGraph`]:
//!
//! 1. the `Dataset` custom resource (not found is fatal),
//! 2. the first runtime kind that exists under the same name, tried in
//!    [`RuntimeKind::PRIORITY`] order (none found leaves the runtime absent),
//! 3. the runtime's `<name>-master`, `<name>-worker` and `<name>-fuse`
//!    workloads (missing ones are left absent),
//! 4. the PersistentVolumeClaim named after the dataset, and the
//!    PersistentVolume it is bound to.
//!
//! Only "not found" is treated as absence. Any other read failure aborts the
//! whole mapping, so a partial graph is never handed to the evaluator.

use super::store::{ObjectRef, ObjectStore, StoreError};
use super::types::{
    ComponentInfo, DatasetInfo, InfrastructureInfo, ResourceGraph, RuntimeInfo, RuntimeKind,
    VolumeInfo, WorkloadKind,
};
use k8s_openapi::api::apps::v1::{DaemonSet, StatefulSet};
use k8s_openapi::api::core::v1::{PersistentVolume, PersistentVolumeClaim};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

/// Phase recorded for a Dataset whose status has no phase yet.
const DEFAULT_DATASET_PHASE: &str = "NotReady";

/// Phase recorded for a claim whose status has no phase yet.
const DEFAULT_CLAIM_PHASE: &str = "Pending";

/// Error type for mapping operations.
#[derive(Debug, thiserror::Error)]
pub enum MapperError {
    #[error("dataset {namespace}/{name} not found")]
    DatasetNotFound { namespace: String, name: String },

    #[error("failed to {operation}: {source}")]
    ReadFailure {
        operation: &'static str,
        object: String,
        #[source]
        source: StoreError,
    },

    #[error("mapping dataset {namespace}/{name} timed out after {}s", .timeout.as_secs())]
    Timeout {
        namespace: String,
        name: String,
        timeout: Duration,
    },
}

/// Builds a [`ResourceGraph`] for a Dataset from an object store.
pub struct ResourceMapper<S> {
    store: S,
}

impl<S: ObjectStore> ResourceMapper<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Discover the Dataset and all related resources.
    pub async fn map_dataset(
        &self,
        name: &str,
        namespace: &str,
    ) -> Result<ResourceGraph, MapperError> {
        let dataset = self.map_dataset_cr(name, namespace).await?;
        let runtime = self.discover_runtime(name, namespace).await?;
        let infrastructure = self.discover_infrastructure(name, namespace).await?;

        Ok(ResourceGraph {
            dataset: Some(dataset),
            runtime,
            infrastructure: Some(infrastructure),
        })
    }

    /// Like [`Self::map_dataset`], failing with [`MapperError::Timeout`]
    /// when discovery does not finish in time.
    pub async fn map_dataset_with_timeout(
        &self,
        name: &str,
        namespace: &str,
        timeout: Duration,
    ) -> Result<ResourceGraph, MapperError> {
        tokio::time::timeout(timeout, self.map_dataset(name, namespace))
            .await
            .map_err(|_| MapperError::Timeout {
                namespace: namespace.to_string(),
                name: name.to_string(),
                timeout,
            })?
    }

    // ------------------------------------------------------------------------
    // Dataset
    // ------------------------------------------------------------------------

    async fn map_dataset_cr(&self, name: &str, namespace: &str) -> Result<DatasetInfo, MapperError> {
        let object = ObjectRef::dataset(namespace, name);
        let Some(value) = self.read(&object, "get dataset").await? else {
            return Err(MapperError::DatasetNotFound {
                namespace: namespace.to_string(),
                name: name.to_string(),
            });
        };

        let phase = match nested_str(&value, "/status/phase") {
            Some(phase) if !phase.is_empty() => phase.to_string(),
            _ => DEFAULT_DATASET_PHASE.to_string(),
        };

        let mut info = DatasetInfo::new(
            nested_str(&value, "/metadata/name").unwrap_or(name),
            nested_str(&value, "/metadata/namespace").unwrap_or(namespace),
            phase,
        );
        info.reason = latest_condition_reason(&value);
        if let Some(labels) = value.pointer("/metadata/labels").and_then(Value::as_object) {
            info.labels = labels
                .iter()
                .filter_map(|(k, v)| v.as_str().map(|v| (k.clone(), v.to_string())))
                .collect();
        }

        log::debug!(
            "Dataset {}/{} phase={} status={}",
            namespace,
            name,
            info.phase,
            info.status
        );
        Ok(info)
    }

    // ------------------------------------------------------------------------
    // Runtime
    // ------------------------------------------------------------------------

    async fn discover_runtime(
        &self,
        name: &str,
        namespace: &str,
    ) -> Result<Option<RuntimeInfo>, MapperError> {
        for kind in RuntimeKind::PRIORITY {
            let object = ObjectRef::runtime(kind.kind(), namespace, name);
            log::debug!("Probing {}", object);

            if let Some(value) = self.read(&object, "discover runtime").await? {
                log::info!("Found {} for dataset {}/{}", kind, namespace, name);
                return self.map_runtime(&value, kind, name, namespace).await.map(Some);
            }
        }

        log::debug!("No runtime found for dataset {}/{}", namespace, name);
        Ok(None)
    }

    async fn map_runtime(
        &self,
        value: &Value,
        kind: RuntimeKind,
        name: &str,
        namespace: &str,
    ) -> Result<RuntimeInfo, MapperError> {
        let runtime_name = nested_str(value, "/metadata/name").unwrap_or(name);
        let phase = nested_str(value, "/status/phase").unwrap_or_default();

        let mut info = RuntimeInfo::new(runtime_name, kind, phase);
        info.master = self.discover_master(runtime_name, namespace).await?;
        info.worker = self.discover_worker(runtime_name, namespace).await?;
        info.fuse = self.discover_fuse(runtime_name, namespace).await?;
        Ok(info)
    }

    async fn discover_master(
        &self,
        runtime: &str,
        namespace: &str,
    ) -> Result<Option<ComponentInfo>, MapperError> {
        let name = format!("{}-master", runtime);
        let object = ObjectRef::stateful_set(namespace, &name);
        Ok(self
            .read_typed::<StatefulSet>(&object, "get master statefulset")
            .await?
            .map(|sts| stateful_set_component(&name, &sts)))
    }

    /// Workers run as a StatefulSet, or as a DaemonSet when no StatefulSet
    /// exists. Only "not found" falls through to the DaemonSet lookup.
    async fn discover_worker(
        &self,
        runtime: &str,
        namespace: &str,
    ) -> Result<Option<ComponentInfo>, MapperError> {
        let name = format!("{}-worker", runtime);

        let object = ObjectRef::stateful_set(namespace, &name);
        if let Some(sts) = self
            .read_typed::<StatefulSet>(&object, "get worker statefulset")
            .await?
        {
            return Ok(Some(stateful_set_component(&name, &sts)));
        }

        let object = ObjectRef::daemon_set(namespace, &name);
        Ok(self
            .read_typed::<DaemonSet>(&object, "get worker daemonset")
            .await?
            .map(|ds| daemon_set_component(&name, &ds)))
    }

    async fn discover_fuse(
        &self,
        runtime: &str,
        namespace: &str,
    ) -> Result<Option<ComponentInfo>, MapperError> {
        let name = format!("{}-fuse", runtime);
        let object = ObjectRef::daemon_set(namespace, &name);
        Ok(self
            .read_typed::<DaemonSet>(&object, "get fuse daemonset")
            .await?
            .map(|ds| daemon_set_component(&name, &ds)))
    }

    // ------------------------------------------------------------------------
    // Infrastructure
    // ------------------------------------------------------------------------

    async fn discover_infrastructure(
        &self,
        name: &str,
        namespace: &str,
    ) -> Result<InfrastructureInfo, MapperError> {
        let mut infra = InfrastructureInfo::default();

        let object = ObjectRef::persistent_volume_claim(namespace, name);
        let Some(pvc) = self
            .read_typed::<PersistentVolumeClaim>(&object, "get persistentvolumeclaim")
            .await?
        else {
            log::debug!("No PersistentVolumeClaim {}/{}", namespace, name);
            return Ok(infra);
        };

        let phase = pvc
            .status
            .as_ref()
            .and_then(|s| s.phase.clone())
            .unwrap_or_else(|| DEFAULT_CLAIM_PHASE.to_string());
        let volume_name = pvc
            .spec
            .as_ref()
            .and_then(|s| s.volume_name.clone())
            .filter(|v| !v.is_empty());
        infra.pvc = Some(VolumeInfo::new(
            pvc.metadata.name.unwrap_or_else(|| name.to_string()),
            phase,
        ));

        if let Some(volume_name) = volume_name {
            let object = ObjectRef::persistent_volume(&volume_name);
            infra.pv = self
                .read_typed::<PersistentVolume>(&object, "get persistentvolume")
                .await?
                .map(|pv| {
                    let phase = pv
                        .status
                        .and_then(|s| s.phase)
                        .unwrap_or_default();
                    VolumeInfo::new(pv.metadata.name.unwrap_or(volume_name), phase)
                });
        }

        Ok(infra)
    }

    // ------------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------------

    async fn read(
        &self,
        object: &ObjectRef,
        operation: &'static str,
    ) -> Result<Option<Value>, MapperError> {
        self.store
            .get(object)
            .await
            .map_err(|source| MapperError::ReadFailure {
                operation,
                object: object.to_string(),
                source,
            })
    }

    async fn read_typed<K: DeserializeOwned>(
        &self,
        object: &ObjectRef,
        operation: &'static str,
    ) -> Result<Option<K>, MapperError> {
        let Some(value) = self.read(object, operation).await? else {
            log::debug!("{} not found", object);
            return Ok(None);
        };

        serde_json::from_value(value)
            .map(Some)
            .map_err(|e| MapperError::ReadFailure {
                operation,
                object: object.to_string(),
                source: StoreError::Decode {
                    object: object.to_string(),
                    message: e.to_string(),
                },
            })
    }
}

// ============================================================================
// Helper functions
// ============================================================================

fn nested_str<'a>(value: &'a Value, pointer: &str) -> Option<&'a str> {
    value.pointer(pointer).and_then(Value::as_str)
}

/// Reason of the most recent status condition, if any.
fn latest_condition_reason(value: &Value) -> Option<String> {
    value
        .pointer("/status/conditions")
        .and_then(Value::as_array)
        .and_then(|conditions| conditions.last())
        .and_then(|c| c.get("reason"))
        .and_then(Value::as_str)
        .filter(|r| !r.is_empty())
        .map(str::to_string)
}

/// Kubernetes counts are i32; negative values are treated as zero.
fn count(value: i32) -> u32 {
    u32::try_from(value).unwrap_or(0)
}

/// Desired replicas (default 1 when unset) and ready replicas.
fn stateful_set_component(name: &str, sts: &StatefulSet) -> ComponentInfo {
    let replicas = sts.spec.as_ref().and_then(|s| s.replicas).unwrap_or(1);
    let ready = sts
        .status
        .as_ref()
        .and_then(|s| s.ready_replicas)
        .unwrap_or(0);
    ComponentInfo::new(name, count(ready), count(replicas)).with_workload(WorkloadKind::StatefulSet)
}

/// Scheduled-node count and ready-node count.
fn daemon_set_component(name: &str, ds: &DaemonSet) -> ComponentInfo {
    let (desired, ready) = ds
        .status
        .as_ref()
        .map(|s| (s.desired_number_scheduled, s.number_ready))
        .unwrap_or((0, 0));
    ComponentInfo::new(name, count(ready), count(desired)).with_workload(WorkloadKind::DaemonSet)
}
