use std::collections::HashSet;
use std::io::Write;

use miette::Result;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;

use crate::detector::ElementaryCycle;
use crate::error::CyclesError;
use crate::graph::GraphModel;

// Blue-Orange Accessible Palette
mod colors {
    pub const NORMAL_NODE_FILL: &str = "#E3F2FD"; // Light blue
    pub const NORMAL_NODE_STROKE: &str = "#1976D2"; // Medium blue
    pub const CYCLE_NODE_FILL: &str = "#FFF3E0"; // Light orange
    pub const CYCLE_NODE_STROKE: &str = "#F57C00"; // Vibrant orange
    pub const NORMAL_EDGE: &str = "#64B5F6"; // Soft blue
    pub const CYCLE_EDGE: &str = "#FF6500"; // Deep orange
}

// Helper macro for write operations that converts IO errors
macro_rules! writeln_out {
    ($dst:expr) => {
        writeln!($dst).map_err(CyclesError::from)
    };
    ($dst:expr, $($arg:tt)*) => {
        writeln!($dst, $($arg)*).map_err(CyclesError::from)
    };
}

/// Vertices and edges that lie on at least one elementary cycle
struct CycleMembership<'a> {
    vertices: HashSet<&'a str>,
    edges: HashSet<(&'a str, &'a str)>,
}

impl<'a> CycleMembership<'a> {
    fn new(cycles: &'a [ElementaryCycle]) -> Self {
        let mut vertices = HashSet::new();
        let mut edges = HashSet::new();
        for cycle in cycles {
            vertices.extend(cycle.path().iter().map(String::as_str));
            edges.extend(cycle.edges());
        }
        Self { vertices, edges }
    }

    fn has_vertex(&self, name: &str) -> bool {
        self.vertices.contains(name)
    }

    fn has_edge(&self, from: &str, to: &str) -> bool {
        self.edges.contains(&(from, to))
    }
}

pub struct GraphRenderer {
    highlight_cycles: bool,
}

impl GraphRenderer {
    pub fn new(highlight_cycles: bool) -> Self {
        Self { highlight_cycles }
    }

    pub fn render_ascii(
        &self,
        name: &str,
        graph: &GraphModel,
        cycles: &[ElementaryCycle],
        output: &mut dyn Write,
    ) -> Result<()> {
        if graph.is_empty() {
            writeln_out!(output, "Graph '{}' has no vertices to visualize", name)?;
            return Ok(());
        }

        writeln_out!(output, "\n📊 Graph: {}\n", name)?;

        let membership = CycleMembership::new(cycles);

        for vertex in graph.vertices() {
            let vertex_name = graph.name(vertex);

            if membership.has_vertex(vertex_name) && self.highlight_cycles {
                writeln_out!(output, "┌─────────────────────────────────────┐")?;
                writeln_out!(output, "│ {} ⚠️  IN CYCLE", vertex_name)?;
                writeln_out!(output, "└─────────────────────────────────────┘")?;
            } else {
                writeln_out!(output, "{}", vertex_name)?;
            }

            let successors = graph.successors(vertex);
            if successors.is_empty() {
                writeln_out!(output, "  └── (no successors)")?;
            }

            for (i, &successor) in successors.iter().enumerate() {
                let successor_name = graph.name(successor);
                let prefix = if i == successors.len() - 1 {
                    "└──"
                } else {
                    "├──"
                };
                let cycle_marker =
                    if self.highlight_cycles && membership.has_edge(vertex_name, successor_name) {
                        " ⚠️  [CYCLE]"
                    } else {
                        ""
                    };

                writeln_out!(output, "  {} → {}{}", prefix, successor_name, cycle_marker)?;
            }

            writeln_out!(output)?;
        }

        if !cycles.is_empty() && self.highlight_cycles {
            writeln_out!(output, "⚠️  = Part of an elementary cycle")?;
        }

        Ok(())
    }

    pub fn render_mermaid(
        &self,
        name: &str,
        graph: &GraphModel,
        cycles: &[ElementaryCycle],
        output: &mut dyn Write,
    ) -> Result<()> {
        let digraph = graph.to_digraph();
        let membership = CycleMembership::new(cycles);

        writeln_out!(output, "---")?;
        writeln_out!(output, "title: {}", self.mermaid_label(name))?;
        writeln_out!(output, "---")?;
        writeln_out!(output, "graph LR")?;

        for node in digraph.node_indices() {
            let vertex_name = &digraph[node];
            writeln_out!(
                output,
                "    {}[\"{}\"]",
                self.mermaid_id(node),
                self.mermaid_label(vertex_name)
            )?;

            let (fill, stroke, width) = if self.highlight_cycles && membership.has_vertex(vertex_name)
            {
                (colors::CYCLE_NODE_FILL, colors::CYCLE_NODE_STROKE, 3)
            } else {
                (colors::NORMAL_NODE_FILL, colors::NORMAL_NODE_STROKE, 2)
            };
            writeln_out!(
                output,
                "    style {} fill:{},stroke:{},stroke-width:{}px",
                self.mermaid_id(node),
                fill,
                stroke,
                width
            )?;
        }

        writeln_out!(output)?;

        // linkStyle addresses edges by declaration order, which is edge index order
        for (link_index, edge) in digraph.edge_references().enumerate() {
            let source = &digraph[edge.source()];
            let target = &digraph[edge.target()];
            writeln_out!(
                output,
                "    {} --> {}",
                self.mermaid_id(edge.source()),
                self.mermaid_id(edge.target())
            )?;

            let color = if self.highlight_cycles && membership.has_edge(source, target) {
                colors::CYCLE_EDGE
            } else {
                colors::NORMAL_EDGE
            };
            writeln_out!(
                output,
                "    linkStyle {} stroke:{},stroke-width:2px",
                link_index,
                color
            )?;
        }

        Ok(())
    }

    pub fn render_dot(
        &self,
        name: &str,
        graph: &GraphModel,
        cycles: &[ElementaryCycle],
        output: &mut dyn Write,
    ) -> Result<()> {
        let digraph = graph.to_digraph();
        let membership = CycleMembership::new(cycles);

        writeln_out!(output, "digraph \"{}\" {{", self.dot_escape(name))?;
        writeln_out!(output, "    rankdir=LR;")?;
        writeln_out!(output, "    node [shape=box, style=rounded];")?;
        writeln_out!(output)?;

        for node in digraph.node_indices() {
            let vertex_name = &digraph[node];
            let (fill_color, stroke_color) =
                if self.highlight_cycles && membership.has_vertex(vertex_name) {
                    (colors::CYCLE_NODE_FILL, colors::CYCLE_NODE_STROKE)
                } else {
                    (colors::NORMAL_NODE_FILL, colors::NORMAL_NODE_STROKE)
                };

            writeln_out!(
                output,
                r#"    "{}" [style=filled, fillcolor="{}", color="{}", penwidth=2];"#,
                self.dot_escape(vertex_name),
                fill_color,
                stroke_color
            )?;
        }

        writeln_out!(output)?;

        for edge in digraph.edge_references() {
            let source = &digraph[edge.source()];
            let target = &digraph[edge.target()];

            if self.highlight_cycles && membership.has_edge(source, target) {
                writeln_out!(
                    output,
                    r#"    "{}" -> "{}" [color="{}", penwidth=3];"#,
                    self.dot_escape(source),
                    self.dot_escape(target),
                    colors::CYCLE_EDGE
                )?;
            } else {
                writeln_out!(
                    output,
                    r#"    "{}" -> "{}" [color="{}", penwidth=2];"#,
                    self.dot_escape(source),
                    self.dot_escape(target),
                    colors::NORMAL_EDGE
                )?;
            }
        }

        writeln_out!(output, "}}")?;
        Ok(())
    }

    fn mermaid_id(&self, node: NodeIndex) -> String {
        format!("v{}", node.index())
    }

    fn mermaid_label(&self, name: &str) -> String {
        name.replace('"', "#quot;")
    }

    fn dot_escape(&self, name: &str) -> String {
        name.replace('\\', "\\\\").replace('"', "\\\"")
    }
}
