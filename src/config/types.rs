use crate::analyzer::dataset_health::DiagnoseConfig;
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub inspect: InspectConfig,
    pub diagnose: DiagnoseConfig,
}

/// Defaults for `fluidctl inspect`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InspectConfig {
    /// Namespace used when `-n` is omitted
    pub namespace: String,
    /// tree | wide | json | yaml
    pub output: String,
    /// Deadline for mapping a dataset
    pub timeout_secs: u64,
    /// Kubeconfig context (current context when unset)
    pub context: Option<String>,
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            namespace: "default".to_string(),
            output: "tree".to_string(),
            timeout_secs: 30,
            context: None,
        }
    }
}
