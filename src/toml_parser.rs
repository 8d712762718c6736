//! Reads named graphs from a TOML document
//!
//! ```toml
//! [graphs.pipeline]
//! parse = ["check"]
//! check = ["parse", "emit"]
//! emit = []
//! ```
//!
//! Each sub-table of `graphs` is one graph. Keys are source vertices and
//! values are arrays of successor tokens, which may be strings or integers.
//! Document order of graphs, vertices and successors is preserved.

use std::path::Path;

use miette::{NamedSource, SourceSpan};
use serde::Deserialize;
use tracing::debug;

use crate::constants::input::GRAPHS_TABLE;
use crate::error::{CyclesError, TomlParseError};
use crate::graph::{DanglingEdgePolicy, GraphModel, NamedGraph};

/// A successor entry as written in the document
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum VertexToken {
    Name(String),
    Number(i64),
}

impl VertexToken {
    pub fn into_name(self) -> String {
        match self {
            VertexToken::Name(name) => name,
            VertexToken::Number(number) => number.to_string(),
        }
    }
}

/// One graph as declared in the document, not yet validated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphDefinition {
    pub name: String,
    pub adjacency: Vec<(String, Vec<String>)>,
}

impl GraphDefinition {
    /// Build the graph model, resolving dangling edges with `policy`
    pub fn to_named_graph(&self, policy: DanglingEdgePolicy) -> Result<NamedGraph, CyclesError> {
        let model = self
            .adjacency
            .iter()
            .fold(
                GraphModel::builder()
                    .with_name(&self.name)
                    .with_dangling_policy(policy),
                |builder, (vertex, successors)| builder.add_vertex(vertex, successors),
            )
            .build()?;

        Ok(NamedGraph {
            name: self.name.clone(),
            model,
        })
    }
}

/// All graphs declared in one document, in document order
#[derive(Debug, Clone, Default)]
pub struct GraphsFile {
    graphs: Vec<GraphDefinition>,
}

impl GraphsFile {
    pub fn parse_file(path: &Path) -> Result<Self, CyclesError> {
        let content = std::fs::read_to_string(path).map_err(|e| CyclesError::FileReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let file = Self::parse_str(&content, &path.display().to_string())?;
        debug!(path = %path.display(), graphs = file.len(), "loaded graphs file");
        Ok(file)
    }

    /// Parse a document; `origin` names it in diagnostics
    pub fn parse_str(content: &str, origin: &str) -> Result<Self, CyclesError> {
        let mut document: toml::Table = toml::from_str(content).map_err(|e| {
            let span = e
                .span()
                .map(|span| SourceSpan::new(span.start.into(), span.end - span.start));

            CyclesError::TomlParseError(Box::new(TomlParseError {
                file: origin.to_string(),
                source_code: NamedSource::new(origin, content.to_string()),
                span,
                source: e,
            }))
        })?;

        let graphs = match document.remove(GRAPHS_TABLE) {
            Some(toml::Value::Table(graphs)) => graphs,
            Some(_) => {
                return Err(CyclesError::ConfigurationError {
                    message: format!("'{GRAPHS_TABLE}' in '{origin}' must be a table"),
                });
            }
            None => {
                return Err(CyclesError::ConfigurationError {
                    message: format!("no [{GRAPHS_TABLE}] table found in '{origin}'"),
                });
            }
        };

        let graphs = graphs
            .into_iter()
            .map(|(name, value)| Self::parse_graph(name, value))
            .collect::<Result<_, _>>()?;

        Ok(Self { graphs })
    }

    fn parse_graph(name: String, value: toml::Value) -> Result<GraphDefinition, CyclesError> {
        let toml::Value::Table(table) = value else {
            return Err(CyclesError::ConfigurationError {
                message: format!(
                    "graph '{name}' must be a table mapping each vertex to its successors"
                ),
            });
        };

        let adjacency = table
            .into_iter()
            .map(|(vertex, successors)| -> Result<(String, Vec<String>), CyclesError> {
                if !successors.is_array() {
                    return Err(CyclesError::ConfigurationError {
                        message: format!(
                            "successors of '{vertex}' in graph '{name}' must be an array"
                        ),
                    });
                }

                let tokens = successors.try_into::<Vec<VertexToken>>().map_err(|_| {
                    CyclesError::ConfigurationError {
                        message: format!(
                            "successors of '{vertex}' in graph '{name}' must be strings or integers"
                        ),
                    }
                })?;

                let successors = tokens.into_iter().map(VertexToken::into_name).collect();
                Ok((vertex, successors))
            })
            .collect::<Result<_, _>>()?;

        Ok(GraphDefinition { name, adjacency })
    }

    pub fn graphs(&self) -> &[GraphDefinition] {
        &self.graphs
    }

    pub fn len(&self) -> usize {
        self.graphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graphs.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&GraphDefinition> {
        self.graphs.iter().find(|graph| graph.name == name)
    }

    /// The graphs named in `names`, in document order; all graphs when
    /// `names` is empty
    pub fn select(&self, names: &[String]) -> Result<Vec<&GraphDefinition>, CyclesError> {
        if let Some(unknown) = names.iter().find(|name| self.get(name).is_none()) {
            let available: Vec<&str> = self.graphs.iter().map(|g| g.name.as_str()).collect();
            return Err(CyclesError::ConfigurationError {
                message: format!(
                    "unknown graph '{unknown}' (available: {})",
                    available.join(", ")
                ),
            });
        }

        Ok(self
            .graphs
            .iter()
            .filter(|graph| names.is_empty() || names.contains(&graph.name))
            .collect())
    }
}
