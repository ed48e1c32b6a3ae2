use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fluidctl")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Diagnose why a Fluid Dataset is not serving data")]
#[command(long_about = "Inspects a Fluid Dataset, its Runtime (Master, Worker, Fuse) and its storage claim, then explains what is wrong and how to fix it. Works against a live cluster, a manifest fixture file, or built-in mock scenarios.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Inspect a Fluid resource and diagnose its health
    Inspect {
        #[command(subcommand)]
        target: InspectTarget,
    },

    /// List the built-in mock scenarios
    Scenarios,

    /// Print version information
    Version,
}

#[derive(Subcommand)]
pub enum InspectTarget {
    /// Diagnose a Dataset and its Runtime
    Dataset {
        /// Name of the Dataset
        #[arg(value_name = "NAME")]
        name: String,

        /// Namespace of the Dataset (config default: "default")
        #[arg(short, long)]
        namespace: Option<String>,

        /// Output format
        #[arg(short, long, value_enum)]
        output: Option<OutputFormat>,

        /// Diagnose a built-in scenario instead of a cluster
        #[arg(long, conflicts_with = "fixture")]
        mock: bool,

        /// Scenario to use with --mock (see `fluidctl scenarios`)
        #[arg(long, requires = "mock")]
        scenario: Option<String>,

        /// Read objects from a multi-document YAML manifest file
        #[arg(long, value_name = "FILE")]
        fixture: Option<PathBuf>,

        /// Kubeconfig context to use
        #[arg(long)]
        context: Option<String>,

        /// Deadline in seconds for resource discovery
        #[arg(long, value_name = "SECS")]
        timeout: Option<u64>,

        /// Ignore a rule by id (repeatable)
        #[arg(long = "ignore-rule", value_name = "ID")]
        ignore_rules: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Tree,
    Wide,
    Json,
    Yaml,
}

impl From<OutputFormat> for crate::analyzer::dataset_health::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Tree => Self::Tree,
            OutputFormat::Wide => Self::Wide,
            OutputFormat::Json => Self::Json,
            OutputFormat::Yaml => Self::Yaml,
        }
    }
}

impl Cli {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let level = match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };

        env_logger::Builder::from_default_env()
            .filter_level(level)
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_inspect_dataset() {
        let cli = Cli::parse_from([
            "fluidctl", "-vv", "inspect", "dataset", "demo", "-n", "fluid", "-o", "json",
            "--ignore-rule", "FUSE_MISSING", "--ignore-rule", "PVC_NOT_BOUND",
        ]);
        assert_eq!(cli.verbose, 2);

        let Commands::Inspect {
            target: InspectTarget::Dataset { name, namespace, output, ignore_rules, mock, .. },
        } = cli.command
        else {
            panic!("expected inspect dataset");
        };
        assert_eq!(name, "demo");
        assert_eq!(namespace.as_deref(), Some("fluid"));
        assert_eq!(output, Some(OutputFormat::Json));
        assert_eq!(ignore_rules, vec!["FUSE_MISSING", "PVC_NOT_BOUND"]);
        assert!(!mock);
    }

    #[test]
    fn test_scenario_requires_mock() {
        let result = Cli::try_parse_from([
            "fluidctl", "inspect", "dataset", "demo", "--scenario", "healthy",
        ]);
        assert!(result.is_err());
    }
}
