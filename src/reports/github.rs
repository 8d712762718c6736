//! GitHub Actions format report generation

use std::fmt::Write;

use super::{ReportGenerator, total_cycles};
use crate::detector::GraphCycles;
use crate::error::CyclesError;
use crate::utils::string::pluralize;

pub struct GitHubReportGenerator;

impl Default for GitHubReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl GitHubReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

/// Workflow commands end at a newline and treat `%` as an escape
fn escape_data(text: &str) -> String {
    text.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Property values additionally reserve `:` and `,`
fn escape_property(text: &str) -> String {
    escape_data(text).replace(':', "%3A").replace(',', "%2C")
}

impl ReportGenerator for GitHubReportGenerator {
    fn generate_report(&self, results: &[GraphCycles]) -> Result<String, CyclesError> {
        let mut output = String::new();

        let total = total_cycles(results);
        if total == 0 {
            writeln!(
                output,
                "::notice title=Elementary Cycles::No elementary cycles found in {} {} ✅",
                results.len(),
                pluralize("graph", results.len())
            )?;
            return Ok(output);
        }

        writeln!(
            output,
            "::error title=Elementary Cycles::Found {} elementary {}",
            total,
            pluralize("cycle", total)
        )?;

        for result in results.iter().filter(|r| r.has_cycles()) {
            let name = escape_property(result.name());
            for (i, cycle) in result.cycles().iter().enumerate() {
                writeln!(
                    output,
                    "::warning title={} cycle {}::{}",
                    name,
                    i + 1,
                    escape_data(&cycle.to_path_string())
                )?;
            }
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::fixtures::{detect_named, sample_results};

    #[test]
    fn test_annotations_for_cycles() {
        let report = GitHubReportGenerator::new()
            .generate_report(&sample_results())
            .unwrap();

        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(
            lines,
            vec![
                "::error title=Elementary Cycles::Found 2 elementary cycles",
                "::warning title=ring cycle 1::a -> b -> c -> a",
                "::warning title=ring cycle 2::a -> b -> a",
            ]
        );
    }

    #[test]
    fn test_notice_without_cycles() {
        let result = detect_named("chain", &[("x", &["y"]), ("y", &[])]);
        let report = GitHubReportGenerator::new().generate_report(&[result]).unwrap();

        assert!(report.starts_with("::notice title=Elementary Cycles::No elementary cycles found in 1 graph"));
    }

    #[test]
    fn test_escapes_property_values() {
        assert_eq!(escape_property("a:b,c%"), "a%3Ab%2Cc%25");
        assert_eq!(escape_data("line\nbreak"), "line%0Abreak");
    }
}
