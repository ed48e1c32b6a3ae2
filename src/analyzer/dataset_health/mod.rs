//! Fluid Dataset Health Diagnosis
//!
//! Explains why a Fluid `Dataset` is not serving data. Diagnosis happens in
//! two independent stages:
//!
//! 1. **Discovery**: the [`ResourceMapper`] reads the Dataset, its Runtime,
//!    the Runtime's Master/Worker/Fuse workloads and the backing storage from
//!    an [`ObjectStore`] and normalizes them into a [`ResourceGraph`].
//! 2. **Evaluation**: [`diagnose`] runs every registered rule over the graph
//!    and returns a [`DiagnosticResult`] with ordered findings and a summary.
//!
//! Evaluation is a pure function of the graph, so graphs can equally come
//! from a live cluster ([`ClusterStore`]), from manifests on disk
//! ([`FixtureStore`]) or from a prebuilt [`scenarios`] entry.
//!
//! # Example
//!
//! ```rust,ignore
//! use fluid_introspector::analyzer::dataset_health::{
//!     ClusterStore, ResourceMapper, diagnose, format_result, OutputFormat,
//! };
//!
//! let store = ClusterStore::new().await?;
//! let graph = ResourceMapper::new(store).map_dataset("demo-data", "default").await?;
//! let result = diagnose(&graph);
//! format_result(&result, OutputFormat::Tree);
//! ```
//!
//! # Rules
//!
//! | Id                       | Severity | Component          |
//! |--------------------------|----------|--------------------|
//! | `DATASET_NOT_BOUND`      | Critical | Dataset            |
//! | `RUNTIME_MISSING`        | Critical | Runtime            |
//! | `MASTER_NOT_READY`       | Critical | Runtime/Master     |
//! | `WORKER_PARTIALLY_READY` | Warning  | Runtime/Worker     |
//! | `FUSE_MISSING`           | Warning  | Runtime/Fuse       |
//! | `PVC_NOT_BOUND`          | Critical | Infrastructure/PVC |

// ============================================================================
// Core modules
// ============================================================================

/// Core data types.
pub mod types;

/// Rule suppression settings.
pub mod config;

/// Diagnostic rules.
pub mod rules;

/// Rule evaluation.
pub mod evaluator;

/// Output formatting (tree, wide, JSON, YAML).
pub mod formatter;

// ============================================================================
// Discovery
// ============================================================================

/// Object store abstraction.
pub mod store;

/// Live cluster object store.
pub mod cluster_client;

/// In-memory object store.
pub mod fixture;

/// Resource graph discovery.
pub mod mapper;

/// Prebuilt mock graphs.
pub mod scenarios;

// ============================================================================
// Re-exports
// ============================================================================

pub use cluster_client::ClusterStore;
pub use config::DiagnoseConfig;
pub use evaluator::{HEALTHY_SUMMARY, diagnose, diagnose_with_config, summarize};
pub use fixture::{FixtureError, FixtureStore};
pub use formatter::{OutputFormat, format_result, format_result_to_string};
pub use mapper::{MapperError, ResourceMapper};
pub use rules::{Rule, all_rules, codes, rule_description};
pub use scenarios::{Scenario, all_scenarios, scenario, scenario_names};
pub use store::{ObjectRef, ObjectStore, StoreError};
pub use types::{
    ComponentInfo, ComponentState, DatasetInfo, DatasetStatus, DiagnosticResult, Evidence,
    FailureHint, InfrastructureInfo, PodInfo, ResourceGraph, RuntimeInfo, RuntimeKind, Severity,
    VolumeInfo, WorkloadKind,
};
