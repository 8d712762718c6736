//! Enumerate command executor

use console::style;
use miette::{Result, WrapErr};

use super::load_graphs;
use crate::cli::OutputFormat;
use crate::config::EnumerateConfig;
use crate::detector::detect;
use crate::executors::CommandExecutor;
use crate::progress::ProgressReporter;
use crate::reports::{
    GitHubReportGenerator, HumanReportGenerator, JsonReportGenerator, JunitReportGenerator,
    ReportGenerator, total_cycles,
};

pub struct EnumerateExecutor;

impl CommandExecutor for EnumerateExecutor {
    type Config = EnumerateConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Enumerating elementary cycles in {}...\n",
            style("🔁").cyan(),
            style(config.input.path.display()).bold()
        );

        // Create progress reporter if we're in an interactive terminal
        let mut progress = ProgressReporter::for_terminal();

        let graphs = load_graphs(&config.input, progress.as_mut())
            .wrap_err("Failed to load graphs")?;

        if let Some(p) = progress.as_mut() {
            p.start_enumeration(graphs.len());
        }

        let options = config.detector_options();
        let mut results = Vec::with_capacity(graphs.len());
        for graph in &graphs {
            results.push(detect(graph, options)?);
            if let Some(p) = progress.as_ref() {
                p.update_enumeration(&graph.name);
            }
        }

        let total = total_cycles(&results);
        if let Some(p) = progress.as_mut() {
            p.finish_enumeration(total);
        }

        // Generate report based on format
        let report = match config.format {
            OutputFormat::Human => HumanReportGenerator::new(config.max_cycles).generate_report(&results),
            OutputFormat::Json => JsonReportGenerator::new().generate_report(&results),
            OutputFormat::Junit => JunitReportGenerator::new().generate_report(&results),
            OutputFormat::GitHub => GitHubReportGenerator::new().generate_report(&results),
        }
        .wrap_err("Failed to generate report")?;

        print!("{report}");

        // Exit with error code if cycles found and requested
        if config.error_on_cycles && total > 0 {
            std::process::exit(1);
        }

        Ok(())
    }
}
