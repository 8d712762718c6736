//! JSON format report generation

use serde_json::json;

use super::{ReportGenerator, total_cycles};
use crate::detector::GraphCycles;
use crate::error::CyclesError;

pub struct JsonReportGenerator;

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(&self, results: &[GraphCycles]) -> Result<String, CyclesError> {
        let graphs: Vec<_> = results
            .iter()
            .map(|result| {
                json!({
                    "name": result.name(),
                    "vertex_count": result.vertex_count(),
                    "edge_count": result.edge_count(),
                    "cycle_count": result.cycle_count(),
                    "cycles": result.cycles(),
                })
            })
            .collect();

        let total = total_cycles(results);
        let report = json!({
            "has_cycles": total > 0,
            "total_cycles": total,
            "graphs": graphs,
        });

        serde_json::to_string_pretty(&report).map_err(CyclesError::Json)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    use super::*;
    use crate::reports::fixtures::sample_results;

    #[test]
    fn test_json_report_structure() {
        let report = JsonReportGenerator::new()
            .generate_report(&sample_results())
            .unwrap();
        let parsed: Value = serde_json::from_str(&report).unwrap();

        assert_eq!(parsed["has_cycles"], true);
        assert_eq!(parsed["total_cycles"], 2);

        let ring = &parsed["graphs"][0];
        assert_eq!(ring["name"], "ring");
        assert_eq!(ring["vertex_count"], 3);
        assert_eq!(ring["edge_count"], 4);
        assert_eq!(ring["cycle_count"], 2);
        assert_eq!(
            ring["cycles"],
            serde_json::json!([["a", "b", "c", "a"], ["a", "b", "a"]])
        );

        let chain = &parsed["graphs"][1];
        assert_eq!(chain["cycle_count"], 0);
        assert_eq!(chain["cycles"], serde_json::json!([]));
    }

    #[test]
    fn test_json_report_without_cycles() {
        let report = JsonReportGenerator::new().generate_report(&[]).unwrap();
        let parsed: Value = serde_json::from_str(&report).unwrap();

        assert_eq!(parsed["has_cycles"], false);
        assert_eq!(parsed["total_cycles"], 0);
        assert_eq!(parsed["graphs"], serde_json::json!([]));
    }
}
