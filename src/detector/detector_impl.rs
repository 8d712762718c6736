use std::cmp::Reverse;
use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use miette::{Result, WrapErr};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};

use super::scc::{Component, decompose};
use super::search::{CycleEnumerator, Deadline};
use crate::error::CyclesError;
use crate::graph::{GraphModel, NamedGraph, VertexId};

/// A closed vertex sequence whose first and last entries match
///
/// No vertex other than the first repeats. A self-loop is `[v, v]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ElementaryCycle {
    vertices: Vec<String>,
}

impl ElementaryCycle {
    pub(crate) fn new(vertices: Vec<String>) -> Self {
        Self { vertices }
    }

    /// Close an open path by repeating its first vertex
    pub fn from_path<S: Into<String>>(path: impl IntoIterator<Item = S>) -> Self {
        let mut vertices: Vec<String> = path.into_iter().map(Into::into).collect();
        if let Some(first) = vertices.first().cloned() {
            vertices.push(first);
        }
        Self { vertices }
    }

    /// The closed sequence, first vertex repeated at the end
    pub fn vertices(&self) -> &[String] {
        &self.vertices
    }

    /// The open sequence, each vertex once
    pub fn path(&self) -> &[String] {
        &self.vertices[..self.vertices.len().saturating_sub(1)]
    }

    /// Number of edges on the cycle
    pub fn len(&self) -> usize {
        self.path().len()
    }

    pub fn is_empty(&self) -> bool {
        self.path().is_empty()
    }

    pub fn is_self_loop(&self) -> bool {
        self.len() == 1
    }

    pub fn contains(&self, vertex: &str) -> bool {
        self.path().iter().any(|v| v == vertex)
    }

    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.vertices
            .windows(2)
            .map(|pair| (pair[0].as_str(), pair[1].as_str()))
    }

    /// The open path rotated to start at its smallest vertex
    ///
    /// Two cycles are rotations of each other exactly when their canonical
    /// forms are equal.
    pub fn canonical(&self) -> Vec<String> {
        let path = self.path();
        let start = path
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.cmp(b))
            .map_or(0, |(i, _)| i);

        path[start..].iter().chain(&path[..start]).cloned().collect()
    }

    /// `A -> B -> A`
    pub fn to_path_string(&self) -> String {
        crate::utils::string::arrow_path(&self.vertices)
    }
}

impl fmt::Display for ElementaryCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path_string())
    }
}

/// A strongly connected component described by vertex names
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentSummary {
    pub members: Vec<String>,
    pub cyclic: bool,
}

/// Everything reports need about one named graph
#[derive(Debug, Clone)]
pub struct GraphCycles {
    name: String,
    vertex_count: usize,
    edge_count: usize,
    components: Vec<ComponentSummary>,
    cycles: Vec<ElementaryCycle>,
}

impl GraphCycles {
    pub fn new(
        name: impl Into<String>,
        graph: &GraphModel,
        components: Vec<ComponentSummary>,
        cycles: Vec<ElementaryCycle>,
    ) -> Self {
        Self {
            name: name.into(),
            vertex_count: graph.vertex_count(),
            edge_count: graph.edge_count(),
            components,
            cycles,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn components(&self) -> &[ComponentSummary] {
        &self.components
    }

    pub fn cycles(&self) -> &[ElementaryCycle] {
        &self.cycles
    }

    pub fn cycle_count(&self) -> usize {
        self.cycles.len()
    }

    pub fn has_cycles(&self) -> bool {
        !self.cycles.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DetectorOptions {
    /// Search components concurrently on the rayon pool
    pub parallel: bool,
    /// Abort once enumeration has run this long
    pub deadline: Option<Duration>,
}

/// Finds every elementary cycle of a graph
///
/// The graph is split into strongly connected components first; only
/// components that can hold a cycle are searched, each with its own
/// Szwarcfiter–Lauer search. Cycles come out grouped by component in
/// discovery order, whether or not the search ran in parallel.
pub struct CycleDetector {
    options: DetectorOptions,
    components: Vec<Component>,
    cycles: Vec<ElementaryCycle>,
}

impl Default for CycleDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl CycleDetector {
    pub fn new() -> Self {
        Self::with_options(DetectorOptions::default())
    }

    pub fn with_options(options: DetectorOptions) -> Self {
        Self {
            options,
            components: Vec::new(),
            cycles: Vec::new(),
        }
    }

    /// Detect all elementary cycles in `graph`, replacing earlier results
    ///
    /// On error the results of the previous successful run are kept.
    pub fn detect_cycles(&mut self, graph: &GraphModel) -> Result<()> {
        let components = decompose(graph);

        let qualifying: Vec<&Component> = components
            .iter()
            .filter(|component| component.can_contain_cycles(graph))
            .collect();

        debug!(
            components = components.len(),
            qualifying = qualifying.len(),
            parallel = self.options.parallel,
            "decomposed graph"
        );

        let deadline = self.options.deadline.map(Deadline::after);
        let search = |component: &&Component| -> Result<Vec<ElementaryCycle>, CyclesError> {
            let order = start_order(graph, component);
            let enumerator = CycleEnumerator::new(graph);
            match &deadline {
                Some(deadline) => enumerator.enumerate_within(&order, deadline),
                None => Ok(enumerator.enumerate(&order)),
            }
        };

        let per_component: Vec<Vec<ElementaryCycle>> = if self.options.parallel {
            qualifying.par_iter().map(search).collect::<Result<Vec<_>, _>>()
        } else {
            qualifying.iter().map(search).collect::<Result<Vec<_>, _>>()
        }
        .wrap_err("Failed to enumerate cycles in a strongly connected component")?;

        self.cycles = per_component.into_iter().flatten().collect();
        self.components = components;
        info!(cycles = self.cycles.len(), "enumerated elementary cycles");

        Ok(())
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Get all detected cycles
    pub fn cycles(&self) -> &[ElementaryCycle] {
        &self.cycles
    }

    pub fn has_cycles(&self) -> bool {
        !self.cycles.is_empty()
    }

    pub fn cycle_count(&self) -> usize {
        self.cycles.len()
    }

    /// Component summaries by vertex name, in discovery order
    pub fn component_summaries(&self, graph: &GraphModel) -> Vec<ComponentSummary> {
        summarize_components(graph, &self.components)
    }

    pub fn into_cycles(self) -> Vec<ElementaryCycle> {
        self.cycles
    }
}

/// Describe `components` by vertex name
pub fn summarize_components(
    graph: &GraphModel,
    components: &[Component],
) -> Vec<ComponentSummary> {
    components
        .iter()
        .map(|component| ComponentSummary {
            members: component
                .members()
                .iter()
                .map(|&v| graph.name(v).to_string())
                .collect(),
            cyclic: component.can_contain_cycles(graph),
        })
        .collect()
}

/// Component vertices by descending in-degree inside the component
///
/// The sort is stable, so tied vertices keep the order in which Tarjan
/// popped them into the component.
pub fn start_order(graph: &GraphModel, component: &Component) -> Vec<VertexId> {
    let mut in_degree: HashMap<VertexId, usize> =
        component.members().iter().map(|&v| (v, 0)).collect();

    for &vertex in component.members() {
        for successor in graph.successors(vertex) {
            if let Some(degree) = in_degree.get_mut(successor) {
                *degree += 1;
            }
        }
    }

    let mut order = component.members().to_vec();
    order.sort_by_key(|v| Reverse(in_degree[v]));
    order
}

/// Every elementary cycle of `graph`, each exactly once
///
/// Sequential and without a deadline; cannot fail on a built
/// [`GraphModel`].
pub fn enumerate(graph: &GraphModel) -> Vec<ElementaryCycle> {
    let enumerator = CycleEnumerator::new(graph);
    decompose(graph)
        .iter()
        .filter(|component| component.can_contain_cycles(graph))
        .flat_map(|component| enumerator.enumerate(&start_order(graph, component)))
        .collect()
}

/// Run detection on a named graph and collect what reports need
pub fn detect(graph: &NamedGraph, options: DetectorOptions) -> Result<GraphCycles> {
    let mut detector = CycleDetector::with_options(options);
    detector
        .detect_cycles(&graph.model)
        .wrap_err_with(|| format!("Failed to detect cycles in graph '{}'", graph.name))?;

    let components = detector.component_summaries(&graph.model);
    Ok(GraphCycles::new(
        &graph.name,
        &graph.model,
        components,
        detector.into_cycles(),
    ))
}

/// Decompose a named graph without enumerating its cycles
pub fn components_of(graph: &NamedGraph) -> GraphCycles {
    let components = summarize_components(&graph.model, &decompose(&graph.model));
    debug!(graph = %graph.name, components = components.len(), "decomposed graph");
    GraphCycles::new(&graph.name, &graph.model, components, Vec::new())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn fixture_b() -> GraphModel {
        GraphModel::from_adjacency([
            ("1", vec!["2"]),
            ("2", vec!["1", "3"]),
            ("3", vec!["4", "5"]),
            ("4", vec!["5"]),
            ("5", vec!["3", "6"]),
            ("6", vec![]),
        ])
        .unwrap()
    }

    #[test]
    fn test_cycle_accessors() {
        let cycle = ElementaryCycle::from_path(["b", "c", "a"]);

        assert_eq!(cycle.vertices(), ["b", "c", "a", "b"]);
        assert_eq!(cycle.path(), ["b", "c", "a"]);
        assert_eq!(cycle.len(), 3);
        assert!(!cycle.is_self_loop());
        assert!(cycle.contains("a"));
        assert!(!cycle.contains("z"));
        assert_eq!(
            cycle.edges().collect::<Vec<_>>(),
            vec![("b", "c"), ("c", "a"), ("a", "b")]
        );
        assert_eq!(cycle.canonical(), vec!["a", "b", "c"]);
        assert_eq!(cycle.to_string(), "b -> c -> a -> b");
    }

    #[test]
    fn test_self_loop_cycle() {
        let cycle = ElementaryCycle::from_path(["x"]);

        assert_eq!(cycle.vertices(), ["x", "x"]);
        assert!(cycle.is_self_loop());
        assert_eq!(cycle.canonical(), vec!["x"]);
    }

    #[test]
    fn test_cycle_serializes_as_closed_sequence() {
        let cycle = ElementaryCycle::from_path(["a", "b"]);
        assert_eq!(serde_json::to_string(&cycle).unwrap(), r#"["a","b","a"]"#);
    }

    #[test]
    fn test_start_order_by_in_degree() {
        let graph = fixture_b();
        let components = decompose(&graph);
        let big = components.iter().find(|c| c.len() == 3).unwrap();

        let order: Vec<&str> = start_order(&graph, big)
            .into_iter()
            .map(|v| graph.name(v))
            .collect();
        assert_eq!(order, vec!["5", "4", "3"]);
    }

    #[test]
    fn test_detector_on_two_components() {
        let graph = fixture_b();
        let mut detector = CycleDetector::new();
        detector.detect_cycles(&graph).unwrap();

        let paths: Vec<String> = detector
            .cycles()
            .iter()
            .map(ElementaryCycle::to_path_string)
            .collect();
        assert_eq!(paths, vec!["5 -> 3 -> 4 -> 5", "5 -> 3 -> 5", "2 -> 1 -> 2"]);
        assert_eq!(detector.cycle_count(), 3);
        assert_eq!(detector.components().len(), 3);
    }

    #[test]
    fn test_detect_cycles_resets_previous_results() {
        let mut detector = CycleDetector::new();
        detector.detect_cycles(&fixture_b()).unwrap();
        assert!(detector.has_cycles());

        let acyclic = GraphModel::from_adjacency([("a", vec!["b"]), ("b", vec![])]).unwrap();
        detector.detect_cycles(&acyclic).unwrap();
        assert!(!detector.has_cycles());
        assert_eq!(detector.components().len(), 2);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let graph = fixture_b();
        let mut parallel = CycleDetector::with_options(DetectorOptions {
            parallel: true,
            deadline: None,
        });
        parallel.detect_cycles(&graph).unwrap();

        assert_eq!(parallel.cycles(), enumerate(&graph).as_slice());
    }

    #[test]
    fn test_zero_deadline_fails() {
        let mut detector = CycleDetector::with_options(DetectorOptions {
            parallel: false,
            deadline: Some(Duration::ZERO),
        });

        let err = detector.detect_cycles(&fixture_b()).unwrap_err();
        assert!(err.chain().any(|cause| cause.to_string().contains("time limit")));
    }

    #[test]
    fn test_failed_detection_keeps_previous_results() {
        let mut detector = CycleDetector::with_options(DetectorOptions {
            parallel: false,
            deadline: Some(Duration::ZERO),
        });

        let acyclic = GraphModel::from_adjacency([("a", vec!["b"]), ("b", vec![])]).unwrap();
        detector.detect_cycles(&acyclic).unwrap();

        assert!(detector.detect_cycles(&fixture_b()).is_err());
        assert_eq!(detector.components().len(), 2);
        assert_eq!(detector.cycle_count(), 0);
    }

    #[test]
    fn test_zero_deadline_on_acyclic_graph_succeeds() {
        let graph = GraphModel::from_adjacency([("a", vec!["b"]), ("b", vec![])]).unwrap();
        let mut detector = CycleDetector::with_options(DetectorOptions {
            parallel: false,
            deadline: Some(Duration::ZERO),
        });

        detector.detect_cycles(&graph).unwrap();
        assert_eq!(detector.cycle_count(), 0);
    }

    #[test]
    fn test_components_of_skips_enumeration() {
        let named = NamedGraph {
            name: "fixture_b".to_string(),
            model: fixture_b(),
        };

        let result = components_of(&named);
        assert_eq!(result.components().len(), 3);
        assert_eq!(result.cycle_count(), 0);
    }

    #[test]
    fn test_detect_summarizes_named_graph() {
        let named = NamedGraph {
            name: "fixture_b".to_string(),
            model: fixture_b(),
        };

        let result = detect(&named, DetectorOptions::default()).unwrap();
        assert_eq!(result.name(), "fixture_b");
        assert_eq!(result.vertex_count(), 6);
        assert_eq!(result.edge_count(), 8);
        assert_eq!(result.cycle_count(), 3);
        assert_eq!(
            result.components(),
            [
                ComponentSummary {
                    members: vec!["6".to_string()],
                    cyclic: false,
                },
                ComponentSummary {
                    members: vec!["5".to_string(), "4".to_string(), "3".to_string()],
                    cyclic: true,
                },
                ComponentSummary {
                    members: vec!["2".to_string(), "1".to_string()],
                    cyclic: true,
                },
            ]
        );
    }
}
