//! # fluid-introspector
//!
//! A diagnostic engine for Fluid Datasets on Kubernetes. It discovers the
//! resources behind a Dataset (its Runtime, the Runtime's Master, Worker and
//! Fuse workloads, and the backing PersistentVolumeClaim), then runs a fixed
//! rule set over them to explain why the Dataset is not serving data.
//!
//! ## Example
//!
//! ```rust
//! use fluid_introspector::analyzer::dataset_health::{diagnose, scenario};
//!
//! let graph = scenario("partial-ready").unwrap().graph();
//! let result = diagnose(&graph);
//! assert!(!result.is_healthy);
//! assert_eq!(result.failure_hints[0].id, "WORKER_PARTIALLY_READY");
//! ```

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;

pub use error::{FluidctlError, Result};
pub use handlers::*;

use analyzer::dataset_health::OutputFormat;
use cli::{Cli, Commands, InspectTarget};
use std::time::Duration;

/// The current version of the CLI tool
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run a parsed command line, with config defaults applied.
pub async fn run_command(cli: Cli, config: config::types::Config) -> Result<()> {
    match cli.command {
        Commands::Inspect {
            target:
                InspectTarget::Dataset {
                    name,
                    namespace,
                    output,
                    mock,
                    scenario,
                    fixture,
                    context,
                    timeout,
                    ignore_rules,
                },
        } => {
            let format: OutputFormat = match output {
                Some(format) => format.into(),
                None => OutputFormat::parse(&config.inspect.output).ok_or_else(|| {
                    FluidctlError::InvalidArgument(format!(
                        "unknown output format '{}' in config",
                        config.inspect.output
                    ))
                })?,
            };

            let diagnose = ignore_rules
                .into_iter()
                .fold(config.diagnose, |acc, rule| acc.ignore_rule(rule));

            let options = InspectOptions {
                namespace: namespace.unwrap_or(config.inspect.namespace),
                format,
                mock,
                scenario,
                fixture,
                context: context.or(config.inspect.context),
                timeout: Duration::from_secs(timeout.unwrap_or(config.inspect.timeout_secs)),
                diagnose,
            };
            handlers::handle_inspect_dataset(&name, options).await
        }
        Commands::Scenarios => handlers::handle_scenarios(),
        Commands::Version => handlers::handle_version(),
    }
}
