//! # Graph Model and Rendering Module
//!
//! This module holds the immutable graph the cycle search runs on, and the
//! renderers that visualise it.
//!
//! ## Components
//!
//! ### Graph Model
//! - **GraphModel**: vertex names plus an ordered successor list per vertex
//! - **GraphModelBuilder**: resolves names to [`VertexId`]s, collapses
//!   parallel edges and applies the [`DanglingEdgePolicy`]
//!
//! ### Graph Rendering
//! - **GraphRenderer**: renders a graph as ASCII, Mermaid or DOT, optionally
//!   highlighting the vertices and edges that lie on elementary cycles
//!
//! ## Example
//!
//! ```
//! use elementary_cycles::detector::enumerate;
//! use elementary_cycles::graph::{GraphModel, GraphRenderer};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let graph = GraphModel::from_adjacency([
//!     ("parse", vec!["check"]),
//!     ("check", vec!["parse", "emit"]),
//!     ("emit", vec![]),
//! ])?;
//!
//! let cycles = enumerate(&graph);
//! assert_eq!(cycles.len(), 1);
//!
//! let renderer = GraphRenderer::new(true);
//! let mut output = Vec::new();
//! renderer.render_dot("pipeline", &graph, &cycles, &mut output)?;
//!
//! let dot_output = String::from_utf8(output)?;
//! assert!(dot_output.contains("digraph"));
//! assert!(dot_output.contains("\"check\" -> \"parse\""));
//! # Ok(())
//! # }
//! ```

mod model;
mod renderer;
mod types;

pub use model::{GraphModel, GraphModelBuilder};
pub use renderer::GraphRenderer;
pub use types::{DanglingEdgePolicy, NamedGraph, VertexId};
