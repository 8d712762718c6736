//! Report generation modules for different output formats
//!
//! This module contains report generators for various output formats:
//! - human: Human-readable console output
//! - json: JSON format for programmatic use
//! - junit: JUnit XML format for CI/CD integration
//! - github: GitHub Actions workflow annotations
//! - components: strongly connected components, human or JSON

pub mod components;
pub mod github;
pub mod human;
pub mod json;
pub mod junit;

use crate::detector::GraphCycles;
use crate::error::CyclesError;

/// Common trait for all report generators
pub trait ReportGenerator {
    /// Generate a report from per-graph detection results
    fn generate_report(&self, results: &[GraphCycles]) -> Result<String, CyclesError>;
}

// Re-export for convenience
pub use components::ComponentsReportGenerator;
pub use github::GitHubReportGenerator;
pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;
pub use junit::JunitReportGenerator;

/// Sum of cycles over all graphs
pub(crate) fn total_cycles(results: &[GraphCycles]) -> usize {
    results.iter().map(GraphCycles::cycle_count).sum()
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::detector::{DetectorOptions, GraphCycles, detect};
    use crate::graph::{GraphModel, NamedGraph};

    pub fn detect_named(name: &str, adjacency: &[(&str, &[&str])]) -> GraphCycles {
        let model = GraphModel::from_adjacency(
            adjacency
                .iter()
                .map(|(vertex, successors)| (*vertex, successors.iter().copied())),
        )
        .unwrap();
        let named = NamedGraph {
            name: name.to_string(),
            model,
        };
        detect(&named, DetectorOptions::default()).unwrap()
    }

    /// One cyclic graph and one acyclic graph
    pub fn sample_results() -> Vec<GraphCycles> {
        vec![
            detect_named(
                "ring",
                &[("a", &["b"]), ("b", &["c", "a"]), ("c", &["a"])],
            ),
            detect_named("chain", &[("x", &["y"]), ("y", &[])]),
        ]
    }
}
