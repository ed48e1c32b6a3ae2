//! Output formatting for diagnostic results.
//!
//! Supports multiple output formats: tree, wide, JSON and YAML.

use crate::analyzer::dataset_health::types::{
    ComponentInfo, ComponentState, DiagnosticResult, FailureHint, ResourceGraph, Severity,
    VolumeInfo,
};
use colored::Colorize;
use serde::{Deserialize, Serialize};

const RULE: &str =
    "═══════════════════════════════════════════════════════════════════════════════";

// ============================================================================
// Output Format
// ============================================================================

/// Output format for diagnostic results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Findings plus the resource tree (default)
    #[default]
    Tree,
    /// Tree plus pod records and storage objects
    Wide,
    Json,
    Yaml,
}

impl OutputFormat {
    /// Parse from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "tree" => Some(Self::Tree),
            "wide" => Some(Self::Wide),
            "json" => Some(Self::Json),
            "yaml" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// Whether this format is meant for humans rather than tools.
    pub fn is_human(&self) -> bool {
        matches!(self, Self::Tree | Self::Wide)
    }
}

// ============================================================================
// Formatting Functions
// ============================================================================

/// Format a diagnostic result to string.
pub fn format_result_to_string(result: &DiagnosticResult, format: OutputFormat) -> String {
    match format {
        OutputFormat::Tree => format_tree(result, false),
        OutputFormat::Wide => format_tree(result, true),
        OutputFormat::Json => format_json(result),
        OutputFormat::Yaml => format_yaml(result),
    }
}

/// Format and print a diagnostic result.
pub fn format_result(result: &DiagnosticResult, format: OutputFormat) {
    println!("{}", format_result_to_string(result, format));
}

// ============================================================================
// Tree Format
// ============================================================================

fn format_tree(result: &DiagnosticResult, wide: bool) -> String {
    let mut output = String::new();

    output.push_str(&format!("\n{}\n", RULE.bright_blue()));
    output.push_str(&format!(
        "{}\n",
        "🩺 DIAGNOSTIC REPORT".bright_white().bold()
    ));
    output.push_str(&format!("{}\n\n", RULE.bright_blue()));

    if let Some(dataset) = &result.resource_graph.dataset {
        output.push_str(&format!(
            "{} {}/{}\n",
            "Dataset:".dimmed(),
            dataset.namespace,
            dataset.name.bright_white()
        ));
    }

    let health = match result.max_severity() {
        None => "✓ Healthy".green().bold(),
        Some(Severity::Critical) => "❌ Unhealthy".red().bold(),
        Some(_) => "⚠ Unhealthy".yellow().bold(),
    };
    output.push_str(&format!("{} {}\n", "Health: ".dimmed(), health));
    output.push_str(&format!("{} {}\n", "Summary:".dimmed(), result.summary));
    output.push_str(&format!(
        "{} {}\n",
        "Checked:".dimmed(),
        result.timestamp.to_rfc3339().dimmed()
    ));

    if !result.failure_hints.is_empty() {
        output.push_str(&format!("\n{}\n", "┌─ Findings ".bright_blue()));
        for hint in &result.failure_hints {
            output.push_str(&format_hint(hint));
        }
        output.push_str(&format!("{}\n", "└─".bright_blue()));
    }

    output.push_str(&format!("\n{}\n", "┌─ Resource Graph ".bright_blue()));
    output.push_str(&format_graph(&result.resource_graph, wide));
    output.push_str(&format!("{}\n", "└─".bright_blue()));

    output
}

fn severity_icon(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "❌",
        Severity::Warning => "⚠ ",
        Severity::Info => "ℹ ",
    }
}

fn format_hint(hint: &FailureHint) -> String {
    let severity = match hint.severity {
        Severity::Critical => hint.severity.as_str().bright_red(),
        Severity::Warning => hint.severity.as_str().yellow(),
        Severity::Info => hint.severity.as_str().blue(),
    };

    let mut output = format!(
        "│\n│ {} {} {} {}\n",
        severity_icon(hint.severity),
        format!("[{}]", hint.component).bright_cyan(),
        hint.id.bright_white().bold(),
        severity.bold()
    );
    output.push_str(&format!(
        "│   {} {} {}: {}\n",
        "Evidence:".dimmed(),
        hint.evidence.kind.cyan(),
        hint.evidence.name,
        hint.evidence.detail
    ));
    for line in &hint.evidence.logs {
        output.push_str(&format!("│     {}\n", line.dimmed()));
    }
    if let Some(context) = &hint.context {
        output.push_str(&format!("│   {} {}\n", "Context:".dimmed(), context));
    }
    output.push_str(&format!(
        "│   {} {}\n",
        "Suggestion:".dimmed(),
        hint.suggestion.green()
    ));
    output
}

fn format_graph(graph: &ResourceGraph, wide: bool) -> String {
    let mut output = String::new();

    match &graph.dataset {
        Some(dataset) => output.push_str(&format!(
            "│ Dataset {} ({}, phase {})\n",
            dataset.name.bright_white(),
            dataset.status,
            dataset.phase
        )),
        None => output.push_str(&format!("│ {}\n", "Dataset (unknown)".dimmed())),
    }

    match &graph.runtime {
        Some(runtime) => {
            output.push_str(&format!(
                "│ └─ {} {} ({})\n",
                runtime.kind.to_string().cyan(),
                runtime.name,
                runtime.phase
            ));

            let components: Vec<(&str, &ComponentInfo)> = [
                ("Master", runtime.master.as_ref()),
                ("Worker", runtime.worker.as_ref()),
                ("Fuse", runtime.fuse.as_ref()),
            ]
            .into_iter()
            .filter_map(|(role, c)| c.map(|c| (role, c)))
            .collect();

            if components.is_empty() {
                output.push_str(&format!("│    └─ {}\n", "no components found".dimmed()));
            }
            for (i, (role, component)) in components.iter().enumerate() {
                let last = i + 1 == components.len();
                output.push_str(&format_component(role, component, last, wide));
            }
        }
        None => output.push_str(&format!("│ └─ {}\n", "❌ no runtime found".red())),
    }

    if wide {
        output.push_str(&format_infrastructure(graph));
    }

    output
}

fn format_component(role: &str, component: &ComponentInfo, last: bool, wide: bool) -> String {
    let (icon, state) = match component.state {
        ComponentState::Ready => ("✓", component.state.as_str().green()),
        ComponentState::ComponentsScaledDown => ("✓", component.state.as_str().dimmed()),
        ComponentState::PartialReady => ("⚠", component.state.as_str().yellow()),
        ComponentState::NotReady => ("❌", component.state.as_str().red()),
    };
    let branch = if last { "└─" } else { "├─" };

    let mut output = format!(
        "│    {} {} {:<6} {} {} {}\n",
        branch,
        icon,
        role,
        component.name,
        component.ready_ratio().bright_white(),
        state
    );

    if wide {
        let indent = if last { "      " } else { "   │  " };
        if let Some(workload) = component.workload {
            output.push_str(&format!(
                "│    {} {} {}\n",
                indent,
                "Workload:".dimmed(),
                workload.as_str()
            ));
        }
        for pod in &component.pods {
            let status = if pod.status == "Running" {
                pod.status.green()
            } else {
                pod.status.red()
            };
            output.push_str(&format!(
                "│    {} {} {} restarts={} age={}",
                indent,
                pod.name,
                status,
                pod.restarts,
                pod.age
            ));
            if let Some(node) = &pod.node {
                output.push_str(&format!(" node={}", node));
            }
            if let Some(last_state) = &pod.last_state {
                output.push_str(&format!(" last={}", last_state));
            }
            output.push('\n');
        }
    }

    output
}

fn format_infrastructure(graph: &ResourceGraph) -> String {
    let mut output = format!("│ {}\n", "Infrastructure".bright_white());
    let pvc = graph.pvc();
    let pv = graph.infrastructure.as_ref().and_then(|i| i.pv.as_ref());

    output.push_str(&format!("│ ├─ {}\n", format_volume("PVC", pvc)));
    output.push_str(&format!("│ └─ {}\n", format_volume("PV ", pv)));
    output
}

fn format_volume(label: &str, volume: Option<&VolumeInfo>) -> String {
    match volume {
        Some(v) => {
            let status = if v.is_bound() {
                v.status.green()
            } else {
                v.status.red()
            };
            format!("{} {} {}", label, v.name, status)
        }
        None => format!("{} {}", label, "(none)".dimmed()),
    }
}

// ============================================================================
// JSON Format
// ============================================================================

fn format_json(result: &DiagnosticResult) -> String {
    serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
}

// ============================================================================
// YAML Format
// ============================================================================

fn format_yaml(result: &DiagnosticResult) -> String {
    serde_yaml::to_string(result).unwrap_or_else(|_| "".to_string())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::dataset_health::evaluator::diagnose;
    use crate::analyzer::dataset_health::scenarios::scenario;

    fn result_for(name: &str) -> DiagnosticResult {
        diagnose(&scenario(name).unwrap().graph())
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!(OutputFormat::parse("tree"), Some(OutputFormat::Tree));
        assert_eq!(OutputFormat::parse("WIDE"), Some(OutputFormat::Wide));
        assert_eq!(OutputFormat::parse("json"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::parse("yaml"), Some(OutputFormat::Yaml));
        assert_eq!(OutputFormat::parse("table"), None);
        assert!(OutputFormat::Wide.is_human());
        assert!(!OutputFormat::Json.is_human());
    }

    #[test]
    fn test_format_json_field_names() {
        let json = format_json(&result_for("partial-ready"));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        for field in ["timestamp", "isHealthy", "summary", "failureHints", "resourceGraph"] {
            assert!(value.get(field).is_some(), "missing {}", field);
        }
        assert_eq!(value["isHealthy"], false);
        assert_eq!(value["failureHints"][0]["id"], "WORKER_PARTIALLY_READY");
    }

    #[test]
    fn test_format_yaml() {
        let yaml = format_yaml(&result_for("healthy"));
        assert!(yaml.contains("isHealthy: true"));
    }

    #[test]
    fn test_tree_names_every_finding() {
        let result = result_for("failed-pods");
        let tree = format_tree(&result, false);
        assert!(tree.contains("DIAGNOSTIC REPORT"));
        for hint in &result.failure_hints {
            assert!(tree.contains(&hint.id), "missing {}", hint.id);
        }
        assert!(tree.contains("demo-data-master"));
    }

    #[test]
    fn test_tree_without_runtime() {
        let tree = format_tree(&result_for("missing-runtime"), false);
        assert!(tree.contains("no runtime found"));
        assert!(tree.contains("RUNTIME_MISSING"));
    }

    #[test]
    fn test_health_line_follows_worst_finding() {
        assert!(format_tree(&result_for("healthy"), false).contains("✓ Healthy"));
        assert!(format_tree(&result_for("partial-ready"), false).contains("⚠ Unhealthy"));
        assert!(format_tree(&result_for("pvc-pending"), false).contains("❌ Unhealthy"));
    }

    #[test]
    fn test_wide_lists_pods_and_infrastructure() {
        let result = result_for("partial-ready");
        let wide = format_tree(&result, true);
        assert!(wide.contains("demo-data-worker-2"));
        assert!(wide.contains("CrashLoopBackOff"));
        assert!(wide.contains("Infrastructure"));

        let tree = format_tree(&result, false);
        assert!(!tree.contains("demo-data-worker-2"));
    }
}
