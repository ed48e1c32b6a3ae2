//! Handler for the `inspect dataset` command.
//!
//! Builds a resource graph from one of three sources and diagnoses it:
//! - `--mock`: a built-in scenario graph
//! - `--fixture <FILE>`: manifests read through the fixture store
//! - otherwise: the live cluster through the kubeconfig

use crate::analyzer::dataset_health::{
    ClusterStore, DiagnoseConfig, DiagnosticResult, FixtureStore, OutputFormat, ResourceGraph,
    ResourceMapper, diagnose_with_config, format_result, scenario, scenario_names,
    scenarios::DEFAULT_SCENARIO,
};
use crate::error::{FluidctlError, Result};
use colored::Colorize;
use std::path::PathBuf;
use std::time::Duration;

/// Options for the inspect command, after config defaults are applied
#[derive(Debug, Clone)]
pub struct InspectOptions {
    pub namespace: String,
    pub format: OutputFormat,
    /// Diagnose a scenario instead of reading objects
    pub mock: bool,
    /// Scenario name (defaults to "healthy")
    pub scenario: Option<String>,
    /// Manifest file to read objects from
    pub fixture: Option<PathBuf>,
    /// Kubeconfig context (current context when unset)
    pub context: Option<String>,
    pub timeout: Duration,
    pub diagnose: DiagnoseConfig,
}

impl Default for InspectOptions {
    fn default() -> Self {
        Self {
            namespace: "default".to_string(),
            format: OutputFormat::Tree,
            mock: false,
            scenario: None,
            fixture: None,
            context: None,
            timeout: Duration::from_secs(30),
            diagnose: DiagnoseConfig::default(),
        }
    }
}

/// Handle the `inspect dataset` command.
pub async fn handle_inspect_dataset(name: &str, options: InspectOptions) -> Result<()> {
    let result = inspect_dataset(name, &options).await?;

    if options.mock && options.format.is_human() {
        let description = options
            .scenario
            .as_deref()
            .and_then(scenario)
            .or_else(|| scenario(DEFAULT_SCENARIO))
            .map(|s| s.description)
            .unwrap_or_default();
        println!(
            "{} {}",
            "[MOCK MODE]".yellow().bold(),
            format!("Scenario: {}", description).dimmed()
        );
    }

    format_result(&result, options.format);
    Ok(())
}

/// Build and diagnose the graph for a dataset without printing anything.
pub async fn inspect_dataset(name: &str, options: &InspectOptions) -> Result<DiagnosticResult> {
    let graph = if options.mock {
        mock_graph(options.scenario.as_deref())?
    } else if let Some(path) = &options.fixture {
        log::info!("Reading objects from {}", path.display());
        let store = FixtureStore::from_file(path, &options.namespace)?;
        ResourceMapper::new(store)
            .map_dataset_with_timeout(name, &options.namespace, options.timeout)
            .await?
    } else {
        let store = match &options.context {
            Some(context) => ClusterStore::with_context(context).await?,
            None => ClusterStore::new().await?,
        };
        ResourceMapper::new(store)
            .map_dataset_with_timeout(name, &options.namespace, options.timeout)
            .await?
    };

    Ok(diagnose_with_config(&graph, &options.diagnose))
}

fn mock_graph(name: Option<&str>) -> Result<ResourceGraph> {
    let name = name.unwrap_or(DEFAULT_SCENARIO);
    let found = scenario(name).ok_or_else(|| FluidctlError::ScenarioNotFound {
        name: name.to_string(),
        available: scenario_names().join(", "),
    })?;

    log::info!("Using mock scenario '{}'", found.name);
    Ok(found.graph())
}
