//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::{ReportGenerator, total_cycles};
use crate::detector::GraphCycles;
use crate::error::CyclesError;
use crate::utils::string::pluralize;

pub struct HumanReportGenerator {
    max_cycles: Option<usize>,
}

impl HumanReportGenerator {
    pub fn new(max_cycles: Option<usize>) -> Self {
        Self { max_cycles }
    }

    fn write_graph(&self, output: &mut String, result: &GraphCycles) -> Result<(), CyclesError> {
        writeln!(
            output,
            "\n{}",
            style(format!("--- Processing Graph: {} ---", result.name())).bold()
        )?;
        writeln!(
            output,
            "Total Unique Elementary Cycles: {}",
            result.cycle_count()
        )?;

        let limit = self.max_cycles.unwrap_or(usize::MAX);
        for (i, cycle) in result.cycles().iter().take(limit).enumerate() {
            writeln!(output, "Cycle {}: {}", i + 1, cycle)?;
        }

        if limit < result.cycle_count() {
            writeln!(
                output,
                "{} Showing {} of {} cycles. Use --max-cycles to see more.",
                style("ℹ️").blue(),
                style(limit).yellow(),
                style(result.cycle_count()).yellow()
            )?;
        }

        Ok(())
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_report(&self, results: &[GraphCycles]) -> Result<String, CyclesError> {
        let mut output = String::new();

        for result in results {
            self.write_graph(&mut output, result)?;
        }

        let total = total_cycles(results);
        if total == 0 {
            write!(
                output,
                "\n{} No elementary cycles found in {} {}.\n",
                style("✅").green().bold(),
                results.len(),
                pluralize("graph", results.len())
            )?;
        } else {
            write!(
                output,
                "\n{} Found {} elementary {} across {} {}.\n",
                style("🔁").yellow().bold(),
                style(total).red().bold(),
                pluralize("cycle", total),
                results.len(),
                pluralize("graph", results.len())
            )?;
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::fixtures::sample_results;

    #[test]
    fn test_lists_every_cycle_per_graph() {
        let report = HumanReportGenerator::new(None)
            .generate_report(&sample_results())
            .unwrap();

        assert!(report.contains("--- Processing Graph: ring ---"));
        assert!(report.contains("Total Unique Elementary Cycles: 2\n"));
        assert!(report.contains("Cycle 1: a -> b -> c -> a\n"));
        assert!(report.contains("Cycle 2: a -> b -> a\n"));
        assert!(report.contains("--- Processing Graph: chain ---"));
        assert!(report.contains("Total Unique Elementary Cycles: 0\n"));
        assert!(!report.contains("Showing"));
    }

    #[test]
    fn test_max_cycles_truncates() {
        let report = HumanReportGenerator::new(Some(1))
            .generate_report(&sample_results())
            .unwrap();

        assert!(report.contains("Cycle 1: a -> b -> c -> a\n"));
        assert!(!report.contains("Cycle 2:"));
        assert!(report.contains("Showing"));
        assert!(report.contains("Use --max-cycles to see more."));
    }

    #[test]
    fn test_no_graphs() {
        let report = HumanReportGenerator::new(None).generate_report(&[]).unwrap();
        assert!(report.contains("No elementary cycles found in 0 graphs."));
    }
}
