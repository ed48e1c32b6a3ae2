//! Object store abstraction used by the resource mapper.
//!
//! The mapper only ever needs point reads: one object by group, version,
//! kind, namespace and name. A live cluster ([`super::ClusterStore`]) and an
//! in-memory fixture set ([`super::FixtureStore`]) both implement
//! [`ObjectStore`], returning `Ok(None)` when the object does not exist.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::future::Future;

/// Fluid custom resource API group.
pub const FLUID_GROUP: &str = "data.fluid.io";
/// Fluid custom resource API version.
pub const FLUID_VERSION: &str = "v1alpha1";

/// Error type for object store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to create Kubernetes client: {0}")]
    ClientCreation(#[from] kube::Error),

    #[error("Failed to infer Kubernetes config: {0}")]
    ConfigError(#[from] kube::config::InferConfigError),

    #[error("Failed to read kubeconfig: {0}")]
    KubeconfigError(#[from] kube::config::KubeconfigError),

    #[error("API request for {object} failed: {message}")]
    ApiError { object: String, message: String },

    #[error("Failed to decode {object}: {message}")]
    Decode { object: String, message: String },
}

/// Coordinates of a single Kubernetes object.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectRef {
    /// API group ("" for the core group)
    pub group: String,
    pub version: String,
    pub kind: String,
    /// `None` for cluster-scoped objects
    pub namespace: Option<String>,
    pub name: String,
}

impl ObjectRef {
    pub fn new(
        group: impl Into<String>,
        version: impl Into<String>,
        kind: impl Into<String>,
        namespace: Option<&str>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            version: version.into(),
            kind: kind.into(),
            namespace: namespace.map(str::to_string),
            name: name.into(),
        }
    }

    /// Build a reference from an `apiVersion` string ("apps/v1", "v1").
    pub fn from_api_version(
        api_version: &str,
        kind: impl Into<String>,
        namespace: Option<&str>,
        name: impl Into<String>,
    ) -> Self {
        let (group, version) = match api_version.split_once('/') {
            Some((group, version)) => (group, version),
            None => ("", api_version),
        };
        Self::new(group, version, kind, namespace, name)
    }

    pub fn dataset(namespace: &str, name: &str) -> Self {
        Self::new(FLUID_GROUP, FLUID_VERSION, "Dataset", Some(namespace), name)
    }

    pub fn runtime(kind: &str, namespace: &str, name: &str) -> Self {
        Self::new(FLUID_GROUP, FLUID_VERSION, kind, Some(namespace), name)
    }

    pub fn stateful_set(namespace: &str, name: &str) -> Self {
        Self::new("apps", "v1", "StatefulSet", Some(namespace), name)
    }

    pub fn daemon_set(namespace: &str, name: &str) -> Self {
        Self::new("apps", "v1", "DaemonSet", Some(namespace), name)
    }

    pub fn persistent_volume_claim(namespace: &str, name: &str) -> Self {
        Self::new("", "v1", "PersistentVolumeClaim", Some(namespace), name)
    }

    pub fn persistent_volume(name: &str) -> Self {
        Self::new("", "v1", "PersistentVolume", None, name)
    }

    /// The `apiVersion` string for this reference.
    pub fn api_version(&self) -> String {
        if self.group.is_empty() {
            self.version.clone()
        } else {
            format!("{}/{}", self.group, self.version)
        }
    }
}

impl fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(ns) => write!(f, "{} {}/{}", self.kind, ns, self.name),
            None => write!(f, "{} {}", self.kind, self.name),
        }
    }
}

/// Point-read access to Kubernetes objects.
///
/// Implementations return `Ok(None)` when the object does not exist, and an
/// error for every other failure.
pub trait ObjectStore: Send + Sync {
    /// Fetch a single object as schema-less JSON.
    fn get(
        &self,
        object: &ObjectRef,
    ) -> impl Future<Output = Result<Option<serde_json::Value>, StoreError>> + Send;
}

impl<S: ObjectStore> ObjectStore for &S {
    fn get(
        &self,
        object: &ObjectRef,
    ) -> impl Future<Output = Result<Option<serde_json::Value>, StoreError>> + Send {
        (**self).get(object)
    }
}
