//! Strongly connected component listings

use std::fmt::Write;

use console::style;
use serde_json::json;

use super::ReportGenerator;
use crate::cli::ListFormat;
use crate::detector::GraphCycles;
use crate::error::CyclesError;
use crate::utils::string::pluralize;

pub struct ComponentsReportGenerator {
    format: ListFormat,
}

impl ComponentsReportGenerator {
    pub fn new(format: ListFormat) -> Self {
        Self { format }
    }

    fn human(&self, results: &[GraphCycles]) -> Result<String, CyclesError> {
        let mut output = String::new();

        for result in results {
            let components = result.components();
            let cyclic = components.iter().filter(|c| c.cyclic).count();

            writeln!(
                output,
                "\n{}",
                style(format!("--- Components of Graph: {} ---", result.name())).bold()
            )?;
            writeln!(
                output,
                "{} strongly connected {}, {} can hold cycles",
                components.len(),
                pluralize("component", components.len()),
                cyclic
            )?;

            for (i, component) in components.iter().enumerate() {
                let marker = if component.cyclic {
                    style("🔁").yellow().to_string()
                } else {
                    style("·").dim().to_string()
                };
                writeln!(
                    output,
                    "  {} Component {}: {{{}}}",
                    marker,
                    i + 1,
                    component.members.join(", ")
                )?;
            }
        }

        Ok(output)
    }

    fn json(&self, results: &[GraphCycles]) -> Result<String, CyclesError> {
        let graphs: Vec<_> = results
            .iter()
            .map(|result| {
                json!({
                    "name": result.name(),
                    "vertex_count": result.vertex_count(),
                    "edge_count": result.edge_count(),
                    "components": result.components(),
                })
            })
            .collect();

        serde_json::to_string_pretty(&json!({ "graphs": graphs })).map_err(CyclesError::Json)
    }
}

impl ReportGenerator for ComponentsReportGenerator {
    fn generate_report(&self, results: &[GraphCycles]) -> Result<String, CyclesError> {
        match self.format {
            ListFormat::Human => self.human(results),
            ListFormat::Json => self.json(results),
        }
    }
}
