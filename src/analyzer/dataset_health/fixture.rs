//! In-memory object store backed by Kubernetes manifests.
//!
//! Used in place of a live cluster for tests and for `fluidctl inspect
//! --fixture <FILE>`. Objects are keyed by their [`ObjectRef`], derived from
//! `apiVersion`, `kind`, `metadata.namespace` and `metadata.name`.

use super::store::{ObjectRef, ObjectStore, StoreError};
use serde::Deserialize;
use std::collections::HashMap;
use std::future::Future;
use std::path::Path;

/// Error type for loading fixtures.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse fixture YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Fixture document {index} is missing `{field}`")]
    MissingField { index: usize, field: &'static str },
}

/// An object store holding a fixed set of objects.
#[derive(Debug, Clone, Default)]
pub struct FixtureStore {
    objects: HashMap<ObjectRef, serde_json::Value>,
    failures: HashMap<ObjectRef, String>,
}

impl FixtureStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object under an explicit reference.
    pub fn insert(&mut self, object: ObjectRef, value: serde_json::Value) {
        self.objects.insert(object, value);
    }

    /// Add an object, builder style.
    pub fn with_object(mut self, object: ObjectRef, value: serde_json::Value) -> Self {
        self.insert(object, value);
        self
    }

    /// Make every read of `object` fail with a non-not-found error.
    pub fn with_failure(mut self, object: ObjectRef, message: impl Into<String>) -> Self {
        self.failures.insert(object, message.into());
        self
    }

    /// Add a full manifest, deriving its reference from the manifest itself.
    pub fn insert_manifest(&mut self, manifest: serde_json::Value) -> Option<ObjectRef> {
        let api_version = manifest.get("apiVersion")?.as_str()?;
        let kind = manifest.get("kind")?.as_str()?;
        let metadata = manifest.get("metadata")?;
        let name = metadata.get("name")?.as_str()?;
        let namespace = metadata.get("namespace").and_then(|n| n.as_str());

        let object = ObjectRef::from_api_version(api_version, kind, namespace, name);
        self.objects.insert(object.clone(), manifest);
        Some(object)
    }

    /// Load every document of a multi-document YAML string.
    ///
    /// Namespaced kinds without `metadata.namespace` are placed in
    /// `default_namespace`.
    pub fn from_yaml_str(content: &str, default_namespace: &str) -> Result<Self, FixtureError> {
        let mut store = Self::new();

        for (index, document) in serde_yaml::Deserializer::from_str(content).enumerate() {
            let mut manifest = serde_json::Value::deserialize(document)?;
            if manifest.is_null() {
                continue;
            }

            let kind = manifest
                .get("kind")
                .and_then(|k| k.as_str())
                .ok_or(FixtureError::MissingField { index, field: "kind" })?;
            let cluster_scoped = kind == "PersistentVolume";

            let metadata = manifest
                .get_mut("metadata")
                .and_then(|m| m.as_object_mut())
                .ok_or(FixtureError::MissingField { index, field: "metadata" })?;
            if !cluster_scoped && !metadata.contains_key("namespace") {
                metadata.insert(
                    "namespace".to_string(),
                    serde_json::Value::String(default_namespace.to_string()),
                );
            }

            if store.insert_manifest(manifest).is_none() {
                return Err(FixtureError::MissingField {
                    index,
                    field: "apiVersion/metadata.name",
                });
            }
        }

        Ok(store)
    }

    /// Load a multi-document YAML manifest file.
    pub fn from_file(path: &Path, default_namespace: &str) -> Result<Self, FixtureError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content, default_namespace)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl ObjectStore for FixtureStore {
    fn get(
        &self,
        object: &ObjectRef,
    ) -> impl Future<Output = Result<Option<serde_json::Value>, StoreError>> + Send {
        let result = match self.failures.get(object) {
            Some(message) => Err(StoreError::ApiError {
                object: object.to_string(),
                message: message.clone(),
            }),
            None => Ok(self.objects.get(object).cloned()),
        };
        std::future::ready(result)
    }
}
