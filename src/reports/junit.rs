//! JUnit XML format report generation

use std::fmt::Write;

use super::ReportGenerator;
use crate::detector::GraphCycles;
use crate::error::CyclesError;

pub struct JunitReportGenerator;

impl Default for JunitReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JunitReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

impl ReportGenerator for JunitReportGenerator {
    fn generate_report(&self, results: &[GraphCycles]) -> Result<String, CyclesError> {
        let mut output = String::new();
        let failures = results.iter().filter(|r| r.has_cycles()).count();

        writeln!(output, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(
            output,
            r#"<testsuites name="elementary-cycles" tests="{}" failures="{}">"#,
            results.len(),
            failures
        )?;
        writeln!(
            output,
            r#"  <testsuite name="elementary-cycles" tests="{}" failures="{}">"#,
            results.len(),
            failures
        )?;

        for result in results {
            let name = xml_escape(result.name());

            if !result.has_cycles() {
                writeln!(
                    output,
                    r#"    <testcase name="{name}" classname="elementary-cycles" />"#
                )?;
                continue;
            }

            writeln!(
                output,
                r#"    <testcase name="{name}" classname="elementary-cycles">"#
            )?;
            writeln!(
                output,
                r#"      <failure message="{} elementary cycles found">"#,
                result.cycle_count()
            )?;
            for (i, cycle) in result.cycles().iter().enumerate() {
                writeln!(
                    output,
                    "Cycle {}: {}",
                    i + 1,
                    xml_escape(&cycle.to_path_string())
                )?;
            }
            writeln!(output, r#"      </failure>"#)?;
            writeln!(output, r#"    </testcase>"#)?;
        }

        writeln!(output, r#"  </testsuite>"#)?;
        writeln!(output, r#"</testsuites>"#)?;

        Ok(output)
    }
}
