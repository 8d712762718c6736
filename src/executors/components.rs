//! Components command executor

use console::style;
use miette::{Result, WrapErr};

use super::load_graphs;
use crate::config::ComponentsConfig;
use crate::detector::{GraphCycles, components_of};
use crate::executors::CommandExecutor;
use crate::reports::{ComponentsReportGenerator, ReportGenerator};

pub struct ComponentsExecutor;

impl CommandExecutor for ComponentsExecutor {
    type Config = ComponentsConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Decomposing graphs in {} into strongly connected components...\n",
            style("🧩").cyan(),
            style(config.input.path.display()).bold()
        );

        let graphs = load_graphs(&config.input, None).wrap_err("Failed to load graphs")?;
        let results: Vec<GraphCycles> = graphs.iter().map(components_of).collect();

        let report = ComponentsReportGenerator::new(config.format)
            .generate_report(&results)
            .wrap_err("Failed to generate report")?;

        print!("{report}");
        Ok(())
    }
}
