//! Core types for Fluid Dataset health diagnosis.
//!
//! The [`ResourceGraph`] is the normalized, point-in-time snapshot of a
//! Dataset, its Runtime and the backing storage. The [`DiagnosticResult`] is
//! what the rule evaluator produces from it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

// ============================================================================
// Severity
// ============================================================================

/// Severity levels for diagnostic findings.
///
/// Ordered from most severe to least severe: `Critical > Warning > Info`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Severity {
    /// The dataset cannot serve data until this is fixed
    #[serde(alias = "critical")]
    Critical,
    /// Degraded, but the dataset may still be usable
    #[serde(alias = "warning")]
    Warning,
    /// Informational
    #[default]
    #[serde(alias = "info")]
    Info,
}

impl Severity {
    /// Parse a severity from a string (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "critical" => Some(Self::Critical),
            "warning" => Some(Self::Warning),
            "info" => Some(Self::Info),
            _ => None,
        }
    }

    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::Warning => "Warning",
            Self::Info => "Info",
        }
    }

    /// Numeric rank used for ordering findings (higher is more severe).
    pub fn rank(&self) -> u8 {
        match self {
            Self::Critical => 3,
            Self::Warning => 2,
            Self::Info => 1,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Ord for Severity {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl PartialOrd for Severity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================================
// Dataset
// ============================================================================

/// Derived binding status of a Dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DatasetStatus {
    Bound,
    NotBound,
}

impl DatasetStatus {
    /// Derive the status from the raw upstream phase.
    ///
    /// A dataset is `Bound` iff its phase case-insensitively equals `Bound`.
    pub fn from_phase(phase: &str) -> Self {
        if phase.eq_ignore_ascii_case("Bound") {
            Self::Bound
        } else {
            Self::NotBound
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bound => "Bound",
            Self::NotBound => "NotBound",
        }
    }
}

impl fmt::Display for DatasetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Details about the Dataset custom resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetInfo {
    pub name: String,
    pub namespace: String,
    /// Derived from `phase`
    pub status: DatasetStatus,
    /// Raw upstream phase (e.g., "Bound", "NotReady", "Pending")
    pub phase: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
}

impl DatasetInfo {
    /// Create a dataset record, deriving `status` from `phase`.
    pub fn new(
        name: impl Into<String>,
        namespace: impl Into<String>,
        phase: impl Into<String>,
    ) -> Self {
        let phase = phase.into();
        Self {
            name: name.into(),
            namespace: namespace.into(),
            status: DatasetStatus::from_phase(&phase),
            phase,
            reason: None,
            labels: BTreeMap::new(),
        }
    }

    pub fn is_bound(&self) -> bool {
        self.status == DatasetStatus::Bound
    }
}

// ============================================================================
// Runtime
// ============================================================================

/// The closed set of runtime kinds, in discovery priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuntimeKind {
    #[serde(rename = "AlluxioRuntime")]
    Alluxio,
    #[serde(rename = "JindoRuntime")]
    Jindo,
    #[serde(rename = "JuiceFSRuntime")]
    JuiceFs,
    #[serde(rename = "ThinRuntime")]
    Thin,
}

impl RuntimeKind {
    /// Lookup order used during discovery.
    pub const PRIORITY: [RuntimeKind; 4] = [Self::Alluxio, Self::Jindo, Self::JuiceFs, Self::Thin];

    /// The Kubernetes kind of the runtime custom resource.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Alluxio => "AlluxioRuntime",
            Self::Jindo => "JindoRuntime",
            Self::JuiceFs => "JuiceFSRuntime",
            Self::Thin => "ThinRuntime",
        }
    }
}

impl fmt::Display for RuntimeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind())
    }
}

/// Details about the Runtime custom resource bound to a Dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuntimeInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: RuntimeKind,
    pub phase: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub master: Option<ComponentInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub worker: Option<ComponentInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuse: Option<ComponentInfo>,
}

impl RuntimeInfo {
    pub fn new(name: impl Into<String>, kind: RuntimeKind, phase: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            phase: phase.into(),
            master: None,
            worker: None,
            fuse: None,
        }
    }

    pub fn with_master(mut self, master: ComponentInfo) -> Self {
        self.master = Some(master);
        self
    }

    pub fn with_worker(mut self, worker: ComponentInfo) -> Self {
        self.worker = Some(worker);
        self
    }

    pub fn with_fuse(mut self, fuse: ComponentInfo) -> Self {
        self.fuse = Some(fuse);
        self
    }
}

// ============================================================================
// Components
// ============================================================================

/// Readiness state of a runtime component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentState {
    Ready,
    PartialReady,
    NotReady,
    ComponentsScaledDown,
}

impl ComponentState {
    /// Derive the state from ready and desired counts.
    pub fn derive(ready: u32, replicas: u32) -> Self {
        if replicas == 0 {
            Self::ComponentsScaledDown
        } else if ready == replicas {
            Self::Ready
        } else if ready > 0 {
            Self::PartialReady
        } else {
            Self::NotReady
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ready => "Ready",
            Self::PartialReady => "PartialReady",
            Self::NotReady => "NotReady",
            Self::ComponentsScaledDown => "ComponentsScaledDown",
        }
    }
}

impl fmt::Display for ComponentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Workload kind backing a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkloadKind {
    StatefulSet,
    DaemonSet,
}

impl WorkloadKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StatefulSet => "StatefulSet",
            Self::DaemonSet => "DaemonSet",
        }
    }
}

/// A runtime component (Master, Worker or Fuse).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentInfo {
    pub name: String,
    /// Desired count
    pub replicas: u32,
    /// Ready count
    pub ready: u32,
    pub state: ComponentState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workload: Option<WorkloadKind>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pods: Vec<PodInfo>,
}

impl ComponentInfo {
    /// Create a component, deriving `state` from the counts.
    pub fn new(name: impl Into<String>, ready: u32, replicas: u32) -> Self {
        Self {
            name: name.into(),
            replicas,
            ready,
            state: ComponentState::derive(ready, replicas),
            workload: None,
            pods: Vec::new(),
        }
    }

    pub fn with_workload(mut self, workload: WorkloadKind) -> Self {
        self.workload = Some(workload);
        self
    }

    pub fn with_pods(mut self, pods: Vec<PodInfo>) -> Self {
        self.pods = pods;
        self
    }

    /// "ready/replicas", as shown in evidence and reports.
    pub fn ready_ratio(&self) -> String {
        format!("{}/{}", self.ready, self.replicas)
    }
}

/// A single pod within a component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PodInfo {
    pub name: String,
    /// Pod phase or container waiting reason (e.g., "Running", "CrashLoopBackOff")
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node: Option<String>,
    pub restarts: u32,
    pub age: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_state: Option<String>,
}

impl PodInfo {
    pub fn new(name: impl Into<String>, status: impl Into<String>, age: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: status.into(),
            node: None,
            restarts: 0,
            age: age.into(),
            last_state: None,
        }
    }

    pub fn with_restarts(mut self, restarts: u32) -> Self {
        self.restarts = restarts;
        self
    }

    pub fn with_last_state(mut self, last_state: impl Into<String>) -> Self {
        self.last_state = Some(last_state.into());
        self
    }
}

// ============================================================================
// Infrastructure
// ============================================================================

/// Storage objects backing a Dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InfrastructureInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pvc: Option<VolumeInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pv: Option<VolumeInfo>,
}

/// A PersistentVolumeClaim or PersistentVolume with its phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeInfo {
    pub name: String,
    /// Phase string (e.g., "Bound", "Pending")
    pub status: String,
}

impl VolumeInfo {
    pub fn new(name: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: status.into(),
        }
    }

    pub fn is_bound(&self) -> bool {
        self.status.eq_ignore_ascii_case("Bound")
    }
}

// ============================================================================
// Resource Graph
// ============================================================================

/// Point-in-time snapshot of a Dataset and its related resources.
///
/// `runtime: None` means no runtime was found; it is domain data, not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceGraph {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset: Option<DatasetInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<RuntimeInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub infrastructure: Option<InfrastructureInfo>,
}

impl ResourceGraph {
    pub fn new(dataset: DatasetInfo) -> Self {
        Self {
            dataset: Some(dataset),
            runtime: None,
            infrastructure: None,
        }
    }

    pub fn with_runtime(mut self, runtime: RuntimeInfo) -> Self {
        self.runtime = Some(runtime);
        self
    }

    pub fn with_infrastructure(mut self, infrastructure: InfrastructureInfo) -> Self {
        self.infrastructure = Some(infrastructure);
        self
    }

    /// Name of the dataset, or an empty string when the graph has none.
    pub fn dataset_name(&self) -> &str {
        self.dataset.as_ref().map(|d| d.name.as_str()).unwrap_or_default()
    }

    pub fn master(&self) -> Option<&ComponentInfo> {
        self.runtime.as_ref().and_then(|r| r.master.as_ref())
    }

    pub fn worker(&self) -> Option<&ComponentInfo> {
        self.runtime.as_ref().and_then(|r| r.worker.as_ref())
    }

    pub fn fuse(&self) -> Option<&ComponentInfo> {
        self.runtime.as_ref().and_then(|r| r.fuse.as_ref())
    }

    pub fn pvc(&self) -> Option<&VolumeInfo> {
        self.infrastructure.as_ref().and_then(|i| i.pvc.as_ref())
    }
}

// ============================================================================
// Findings
// ============================================================================

/// Concrete data supporting a finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evidence {
    /// Object kind (e.g., "Dataset", "StatefulSet")
    pub kind: String,
    /// Subject name
    pub name: String,
    pub detail: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub logs: Vec<String>,
}

impl Evidence {
    pub fn new(
        kind: impl Into<String>,
        name: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
            detail: detail.into(),
            logs: Vec::new(),
        }
    }
}

/// A detected issue with severity and a remediation suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureHint {
    /// Stable rule identifier (e.g., "DATASET_NOT_BOUND")
    pub id: String,
    pub severity: Severity,
    /// Owning component label (e.g., "Runtime/Worker")
    pub component: String,
    pub evidence: Evidence,
    pub suggestion: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl FailureHint {
    /// Deterministic report order: severity descending, then component,
    /// then evidence subject name.
    pub fn report_order(&self, other: &Self) -> Ordering {
        other
            .severity
            .rank()
            .cmp(&self.severity.rank())
            .then_with(|| self.component.cmp(&other.component))
            .then_with(|| self.evidence.name.cmp(&other.evidence.name))
    }
}

/// Overall health assessment of a Dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticResult {
    pub timestamp: DateTime<Utc>,
    pub is_healthy: bool,
    pub summary: String,
    pub failure_hints: Vec<FailureHint>,
    pub resource_graph: ResourceGraph,
}

impl DiagnosticResult {
    /// Get the maximum severity among findings.
    pub fn max_severity(&self) -> Option<Severity> {
        self.failure_hints.iter().map(|h| h.severity).max()
    }

    pub fn has_finding(&self, id: &str) -> bool {
        self.failure_hints.iter().any(|h| h.id == id)
    }
}
