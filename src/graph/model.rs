use std::collections::{HashMap, HashSet};

use petgraph::graph::{DiGraph, NodeIndex};
use tracing::{debug, warn};

use super::types::{DanglingEdgePolicy, VertexId};
use crate::error::CyclesError;

const ANONYMOUS_GRAPH: &str = "<anonymous>";

/// Immutable vertex set plus an ordered successor list per vertex
///
/// Every edge endpoint is guaranteed to be a vertex of the model: dangling
/// edges are resolved by [`GraphModelBuilder::build`] according to its
/// [`DanglingEdgePolicy`], and parallel edges are collapsed there as well, so
/// each successor list holds distinct vertices in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct GraphModel {
    names: Vec<String>,
    index: HashMap<String, VertexId>,
    successors: Vec<Vec<VertexId>>,
}

impl GraphModel {
    pub fn builder() -> GraphModelBuilder {
        GraphModelBuilder::new()
    }

    /// Build a model from `(vertex, successors)` pairs, rejecting dangling
    /// edges
    ///
    /// ```
    /// use elementary_cycles::graph::GraphModel;
    ///
    /// let graph = GraphModel::from_adjacency([("a", vec!["b"]), ("b", vec!["a"])]).unwrap();
    /// assert_eq!(graph.vertex_count(), 2);
    /// assert_eq!(graph.edge_count(), 2);
    /// ```
    pub fn from_adjacency<I, K, V, S>(adjacency: I) -> Result<Self, CyclesError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: IntoIterator<Item = S>,
        S: Into<String>,
    {
        adjacency
            .into_iter()
            .fold(GraphModelBuilder::new(), |builder, (vertex, successors)| {
                builder.add_vertex(vertex, successors)
            })
            .build()
    }

    pub fn vertex_count(&self) -> usize {
        self.names.len()
    }

    pub fn edge_count(&self) -> usize {
        self.successors.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// All vertex ids in insertion order
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.names.len()).map(VertexId)
    }

    pub fn name(&self, vertex: VertexId) -> &str {
        &self.names[vertex.0]
    }

    pub fn id(&self, name: &str) -> Option<VertexId> {
        self.index.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn successors(&self, vertex: VertexId) -> &[VertexId] {
        &self.successors[vertex.0]
    }

    pub fn has_self_loop(&self, vertex: VertexId) -> bool {
        self.successors[vertex.0].contains(&vertex)
    }

    /// A petgraph view of the model; node `i` is vertex `i`, edges keep
    /// successor order
    pub fn to_digraph(&self) -> DiGraph<String, ()> {
        let mut digraph = DiGraph::with_capacity(self.vertex_count(), self.edge_count());
        let nodes: Vec<NodeIndex> = self
            .names
            .iter()
            .map(|name| digraph.add_node(name.clone()))
            .collect();

        for vertex in self.vertices() {
            for &successor in self.successors(vertex) {
                digraph.add_edge(nodes[vertex.0], nodes[successor.0], ());
            }
        }

        digraph
    }
}

/// Collects vertices and edges in declaration order and resolves them into a
/// [`GraphModel`]
pub struct GraphModelBuilder {
    name: Option<String>,
    dangling_policy: DanglingEdgePolicy,
    declared: Vec<(String, Vec<String>)>,
    position: HashMap<String, usize>,
}

impl Default for GraphModelBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphModelBuilder {
    pub fn new() -> Self {
        Self {
            name: None,
            dangling_policy: DanglingEdgePolicy::default(),
            declared: Vec::new(),
            position: HashMap::new(),
        }
    }

    /// Name used in error messages and logs
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_dangling_policy(mut self, policy: DanglingEdgePolicy) -> Self {
        self.dangling_policy = policy;
        self
    }

    /// Declare a vertex with its successors; declaring the same vertex again
    /// appends to its successor list
    pub fn add_vertex<K, V, S>(mut self, vertex: K, successors: V) -> Self
    where
        K: Into<String>,
        V: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let slot = self.slot(vertex.into());
        self.declared[slot]
            .1
            .extend(successors.into_iter().map(Into::into));
        self
    }

    /// Add a single edge, declaring `from` if needed; `to` must be declared
    /// separately
    pub fn add_edge(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        let slot = self.slot(from.into());
        self.declared[slot].1.push(to.into());
        self
    }

    fn slot(&mut self, vertex: String) -> usize {
        if let Some(&slot) = self.position.get(&vertex) {
            return slot;
        }
        let slot = self.declared.len();
        self.position.insert(vertex.clone(), slot);
        self.declared.push((vertex, Vec::new()));
        slot
    }

    pub fn build(self) -> Result<GraphModel, CyclesError> {
        let graph_name = self.name.as_deref().unwrap_or(ANONYMOUS_GRAPH);

        let mut names = Vec::with_capacity(self.declared.len());
        let mut index = HashMap::with_capacity(self.declared.len());
        for (vertex, _) in &self.declared {
            index.insert(vertex.clone(), VertexId(names.len()));
            names.push(vertex.clone());
        }

        let mut successors = Vec::with_capacity(self.declared.len());
        for (vertex, targets) in &self.declared {
            let mut seen = HashSet::with_capacity(targets.len());
            let mut resolved = Vec::with_capacity(targets.len());

            for target in targets {
                match index.get(target) {
                    Some(&id) if seen.insert(id) => resolved.push(id),
                    Some(_) => {
                        debug!(graph = graph_name, from = %vertex, to = %target, "collapsing parallel edge");
                    }
                    None => match self.dangling_policy {
                        DanglingEdgePolicy::Reject => {
                            return Err(CyclesError::DanglingEdge {
                                graph: graph_name.to_string(),
                                from: vertex.clone(),
                                to: target.clone(),
                            });
                        }
                        DanglingEdgePolicy::Drop => {
                            warn!(graph = graph_name, from = %vertex, to = %target, "dropping edge to undeclared vertex");
                        }
                    },
                }
            }

            successors.push(resolved);
        }

        Ok(GraphModel {
            names,
            index,
            successors,
        })
    }
}
