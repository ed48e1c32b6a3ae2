//! Rule evaluation.
//!
//! [`diagnose`] runs every registered rule against a [`ResourceGraph`],
//! orders the findings deterministically and summarises them. It is a total
//! function: any graph, however sparse, yields a result.

use super::config::DiagnoseConfig;
use super::rules::all_rules;
use super::types::{DiagnosticResult, FailureHint, ResourceGraph, Severity};
use chrono::Utc;

/// Summary sentence for a graph without findings.
pub const HEALTHY_SUMMARY: &str = "Dataset is healthy and all components are ready.";

/// Diagnose a graph with every rule enabled.
pub fn diagnose(graph: &ResourceGraph) -> DiagnosticResult {
    diagnose_with_config(graph, &DiagnoseConfig::default())
}

/// Diagnose a graph, dropping findings the config suppresses.
pub fn diagnose_with_config(graph: &ResourceGraph, config: &DiagnoseConfig) -> DiagnosticResult {
    let mut hints: Vec<FailureHint> = all_rules()
        .iter()
        .filter(|rule| !config.should_ignore_rule(rule.id))
        .filter_map(|rule| rule.evaluate(graph))
        .filter(|hint| config.reports(hint.severity))
        .collect();

    // Stable: equal keys keep registration order
    hints.sort_by(FailureHint::report_order);

    log::debug!(
        "Diagnosed dataset '{}': {} finding(s)",
        graph.dataset_name(),
        hints.len()
    );

    DiagnosticResult {
        timestamp: Utc::now(),
        is_healthy: hints.is_empty(),
        summary: summarize(&hints),
        failure_hints: hints,
        resource_graph: graph.clone(),
    }
}

/// Build the summary sentence for a set of findings.
pub fn summarize(hints: &[FailureHint]) -> String {
    if hints.is_empty() {
        return HEALTHY_SUMMARY.to_string();
    }

    let critical = hints
        .iter()
        .filter(|h| h.severity == Severity::Critical)
        .count();
    let warnings = hints
        .iter()
        .filter(|h| h.severity == Severity::Warning)
        .count();

    format!(
        "Found {} issues: {} critical, {} warnings.",
        hints.len(),
        critical,
        warnings
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::dataset_health::rules::codes;
    use crate::analyzer::dataset_health::types::{
        ComponentInfo, DatasetInfo, Evidence, InfrastructureInfo, RuntimeInfo, RuntimeKind,
        VolumeInfo,
    };

    fn healthy_runtime() -> RuntimeInfo {
        RuntimeInfo::new("demo", RuntimeKind::Alluxio, "Ready")
            .with_master(ComponentInfo::new("demo-master", 1, 1))
            .with_worker(ComponentInfo::new("demo-worker", 3, 3))
            .with_fuse(ComponentInfo::new("demo-fuse", 5, 5))
    }

    fn bound_pvc(status: &str) -> InfrastructureInfo {
        InfrastructureInfo {
            pvc: Some(VolumeInfo::new("demo", status)),
            pv: None,
        }
    }

    fn ids(result: &DiagnosticResult) -> Vec<&str> {
        result.failure_hints.iter().map(|h| h.id.as_str()).collect()
    }

    #[test]
    fn test_healthy_graph() {
        let graph = ResourceGraph::new(DatasetInfo::new("demo", "default", "Bound"))
            .with_runtime(healthy_runtime())
            .with_infrastructure(bound_pvc("Bound"));

        let result = diagnose(&graph);
        assert!(result.is_healthy);
        assert!(result.failure_hints.is_empty());
        assert_eq!(result.summary, HEALTHY_SUMMARY);
    }

    #[test]
    fn test_severity_orders_before_registration() {
        let graph = ResourceGraph::new(DatasetInfo::new("demo", "default", "Bound"))
            .with_runtime(
                RuntimeInfo::new("demo", RuntimeKind::Alluxio, "Ready")
                    .with_worker(ComponentInfo::new("demo-worker", 0, 1)),
            )
            .with_infrastructure(bound_pvc("Pending"));

        let result = diagnose(&graph);
        assert_eq!(
            ids(&result),
            vec![codes::PVC_NOT_BOUND, codes::WORKER_PARTIALLY_READY]
        );
        assert_eq!(result.summary, "Found 2 issues: 1 critical, 1 warnings.");
    }

    #[test]
    fn test_component_breaks_severity_ties() {
        // Dataset < Infrastructure/PVC < Runtime/Master, regardless of registration order
        let graph = ResourceGraph::new(DatasetInfo::new("demo", "default", "Pending"))
            .with_runtime(
                RuntimeInfo::new("demo", RuntimeKind::Alluxio, "NotReady")
                    .with_master(ComponentInfo::new("demo-master", 0, 1)),
            )
            .with_infrastructure(bound_pvc("Lost"));

        let result = diagnose(&graph);
        assert_eq!(
            ids(&result),
            vec![
                codes::DATASET_NOT_BOUND,
                codes::PVC_NOT_BOUND,
                codes::MASTER_NOT_READY
            ]
        );
    }

    #[test]
    fn test_config_suppresses_rules() {
        let graph = ResourceGraph::new(DatasetInfo::new("demo", "default", "NotReady"));
        let config = DiagnoseConfig::new().ignore_rule(codes::RUNTIME_MISSING);

        let result = diagnose_with_config(&graph, &config);
        assert_eq!(ids(&result), vec![codes::DATASET_NOT_BOUND]);

        let config = config.ignore_rule(codes::DATASET_NOT_BOUND);
        let result = diagnose_with_config(&graph, &config);
        assert!(result.is_healthy);
        assert_eq!(result.summary, HEALTHY_SUMMARY);
    }

    #[test]
    fn test_min_severity_filters_warnings() {
        let graph = ResourceGraph::new(DatasetInfo::new("demo", "default", "Bound")).with_runtime(
            RuntimeInfo::new("demo", RuntimeKind::Alluxio, "Ready")
                .with_worker(ComponentInfo::new("demo-worker", 1, 3)),
        );
        let config = DiagnoseConfig::new().with_severity(Severity::Critical);
        assert!(diagnose_with_config(&graph, &config).is_healthy);
    }

    #[test]
    fn test_summary_counts_info_in_total_only() {
        let hint = |severity| FailureHint {
            id: "X".to_string(),
            severity,
            component: "C".to_string(),
            evidence: Evidence::new("K", "n", "d"),
            suggestion: String::new(),
            context: None,
        };
        let hints = vec![
            hint(Severity::Critical),
            hint(Severity::Info),
            hint(Severity::Warning),
        ];
        assert_eq!(summarize(&hints), "Found 3 issues: 1 critical, 1 warnings.");
    }
}
