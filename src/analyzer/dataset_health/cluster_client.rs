//! Live Kubernetes object store.
//!
//! Connects to a cluster via kubeconfig and serves point reads through the
//! dynamic API, so Fluid custom resources and built-in workloads are fetched
//! the same way.
//!
//! # Prerequisites
//!
//! - Valid kubeconfig (uses default context or specified context)
//! - RBAC permissions to get Datasets, Runtimes, StatefulSets, DaemonSets,
//!   PersistentVolumeClaims and PersistentVolumes
//!
//! # Example
//!
//! ```rust,ignore
//! use fluid_introspector::analyzer::dataset_health::{ClusterStore, ResourceMapper};
//!
//! let store = ClusterStore::new().await?;
//! let graph = ResourceMapper::new(store).map_dataset("demo-data", "default").await?;
//! ```

use super::store::{ObjectRef, ObjectStore, StoreError};
use kube::{
    Client, Config,
    api::Api,
    core::{ApiResource, DynamicObject, GroupVersionKind},
};
use std::future::Future;

/// Object store backed by a live Kubernetes API server.
#[derive(Clone)]
pub struct ClusterStore {
    client: Client,
}

impl ClusterStore {
    /// Create a store using the default kubeconfig.
    pub async fn new() -> Result<Self, StoreError> {
        install_crypto_provider();
        let config = Config::infer().await?;
        let client = Client::try_from(config)?;
        Ok(Self { client })
    }

    /// Create a store with a specific kubeconfig context.
    pub async fn with_context(context: &str) -> Result<Self, StoreError> {
        install_crypto_provider();
        let kubeconfig = kube::config::Kubeconfig::read()?;
        let config = Config::from_custom_kubeconfig(
            kubeconfig,
            &kube::config::KubeConfigOptions {
                context: Some(context.to_string()),
                ..Default::default()
            },
        )
        .await?;
        let client = Client::try_from(config)?;
        Ok(Self { client })
    }

    fn api_for(&self, object: &ObjectRef) -> Api<DynamicObject> {
        let gvk = GroupVersionKind::gvk(&object.group, &object.version, &object.kind);
        let resource = ApiResource::from_gvk(&gvk);
        match &object.namespace {
            Some(ns) => Api::namespaced_with(self.client.clone(), ns, &resource),
            None => Api::all_with(self.client.clone(), &resource),
        }
    }

    async fn fetch(&self, object: &ObjectRef) -> Result<Option<serde_json::Value>, StoreError> {
        let api = self.api_for(object);
        let found = api
            .get_opt(&object.name)
            .await
            .map_err(|e| StoreError::ApiError {
                object: object.to_string(),
                message: e.to_string(),
            })?;

        found
            .map(|obj| {
                serde_json::to_value(obj).map_err(|e| StoreError::Decode {
                    object: object.to_string(),
                    message: e.to_string(),
                })
            })
            .transpose()
    }
}

impl ObjectStore for ClusterStore {
    fn get(
        &self,
        object: &ObjectRef,
    ) -> impl Future<Output = Result<Option<serde_json::Value>, StoreError>> + Send {
        self.fetch(object)
    }
}

/// Install the rustls crypto provider (required for TLS connections to the K8s API).
fn install_crypto_provider() {
    let _ = rustls::crypto::ring::default_provider().install_default();
}
