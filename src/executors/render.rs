//! Render command executor

use std::fs::File;
use std::io::{self, BufWriter, Write};

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use super::load_graphs;
use crate::cli::GraphFormat;
use crate::config::RenderOptions;
use crate::detector::enumerate;
use crate::error::CyclesError;
use crate::executors::CommandExecutor;
use crate::graph::GraphRenderer;

pub struct RenderExecutor;

impl CommandExecutor for RenderExecutor {
    type Config = RenderOptions;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Rendering {} graph...",
            style("📊").cyan(),
            format!("{:?}", config.format).to_lowercase()
        );

        let graphs = load_graphs(&config.input, None).wrap_err("Failed to load graphs")?;
        if graphs.is_empty() {
            return Ok(());
        }

        // Mermaid and DOT documents describe a single graph
        if config.format != GraphFormat::Ascii && graphs.len() > 1 {
            let names: Vec<&str> = graphs.iter().map(|g| g.name.as_str()).collect();
            return Err(CyclesError::ConfigurationError {
                message: format!(
                    "{:?} output holds one graph, but {} were selected ({}); pick one with --graph",
                    config.format,
                    graphs.len(),
                    names.join(", ")
                ),
            }
            .into());
        }

        let renderer = GraphRenderer::new(config.highlight_cycles);

        // Determine output destination
        let mut output_writer: Box<dyn io::Write> =
            if let Some(output_path) = config.output.as_ref() {
                Box::new(BufWriter::new(
                    File::create(output_path)
                        .into_diagnostic()
                        .wrap_err_with(|| {
                            format!("Failed to create output file '{}'", output_path.display())
                        })?,
                ))
            } else {
                Box::new(io::stdout())
            };

        for graph in &graphs {
            let cycles = if config.highlight_cycles {
                enumerate(&graph.model)
            } else {
                Vec::new()
            };

            match config.format {
                GraphFormat::Ascii => renderer
                    .render_ascii(&graph.name, &graph.model, &cycles, output_writer.as_mut())
                    .wrap_err("Failed to render ASCII graph")?,
                GraphFormat::Mermaid => renderer
                    .render_mermaid(&graph.name, &graph.model, &cycles, output_writer.as_mut())
                    .wrap_err("Failed to render Mermaid graph")?,
                GraphFormat::Dot => renderer
                    .render_dot(&graph.name, &graph.model, &cycles, output_writer.as_mut())
                    .wrap_err("Failed to render DOT graph")?,
            }
        }

        output_writer
            .flush()
            .into_diagnostic()
            .wrap_err("Failed to flush rendered graph")?;

        if let Some(output_path) = config.output {
            eprintln!(
                "{} Graph written to {}",
                style("✓").green(),
                style(output_path.display()).bold()
            );
        }

        Ok(())
    }
}
