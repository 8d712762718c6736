//! Command executors that handle the actual logic for each command

pub mod components;
pub mod enumerate;
pub mod render;

use console::style;
use miette::{Result, WrapErr};
use tracing::debug;

use crate::config::InputConfig;
use crate::graph::NamedGraph;
use crate::progress::ProgressReporter;
use crate::toml_parser::GraphsFile;

/// Trait for command executors
pub trait CommandExecutor {
    type Config;

    /// Execute the command with the given configuration
    fn execute(config: Self::Config) -> Result<()>;
}

/// Read the input file and build the selected graphs, in document order
pub(crate) fn load_graphs(
    input: &InputConfig,
    mut progress: Option<&mut ProgressReporter>,
) -> Result<Vec<NamedGraph>> {
    if let Some(p) = progress.as_deref_mut() {
        p.start_loading(&input.path);
    }

    let file = GraphsFile::parse_file(&input.path)?;
    let graphs = file
        .select(&input.graphs)?
        .into_iter()
        .map(|definition| {
            definition
                .to_named_graph(input.dangling)
                .wrap_err_with(|| format!("Failed to build graph '{}'", definition.name))
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(
        path = %input.path.display(),
        graphs = graphs.len(),
        dangling = %input.dangling,
        "built graphs"
    );

    match progress {
        Some(p) => p.finish_loading(graphs.len()),
        None if graphs.is_empty() => {
            eprintln!("{} No graphs selected", style("ℹ").blue());
        }
        None => {}
    }

    Ok(graphs)
}
