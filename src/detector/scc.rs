//! Strongly connected component decomposition
//!
//! Tarjan's algorithm on an explicit frame stack. Components come out in the
//! order Tarjan completes them, with members in pop order.

use crate::graph::{GraphModel, VertexId};

const UNVISITED: usize = usize::MAX;

/// One strongly connected component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    members: Vec<VertexId>,
}

impl Component {
    pub(crate) fn new(members: Vec<VertexId>) -> Self {
        Self { members }
    }

    pub fn members(&self) -> &[VertexId] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, vertex: VertexId) -> bool {
        self.members.contains(&vertex)
    }

    /// A component can hold an elementary cycle when it has at least two
    /// vertices, or a single vertex with a self-loop
    pub fn can_contain_cycles(&self, graph: &GraphModel) -> bool {
        match self.members.as_slice() {
            [] => false,
            [only] => graph.has_self_loop(*only),
            _ => true,
        }
    }
}

struct Frame {
    vertex: VertexId,
    cursor: usize,
}

struct Tarjan<'g> {
    graph: &'g GraphModel,
    index: Vec<usize>,
    lowlink: Vec<usize>,
    on_stack: Vec<bool>,
    stack: Vec<VertexId>,
    next_index: usize,
    components: Vec<Component>,
}

impl<'g> Tarjan<'g> {
    fn new(graph: &'g GraphModel) -> Self {
        let n = graph.vertex_count();
        Self {
            graph,
            index: vec![UNVISITED; n],
            lowlink: vec![UNVISITED; n],
            on_stack: vec![false; n],
            stack: Vec::with_capacity(n),
            next_index: 0,
            components: Vec::new(),
        }
    }

    fn visit(&mut self, vertex: VertexId) {
        let v = vertex.index();
        self.index[v] = self.next_index;
        self.lowlink[v] = self.next_index;
        self.next_index += 1;
        self.stack.push(vertex);
        self.on_stack[v] = true;
    }

    fn run(mut self) -> Vec<Component> {
        let graph = self.graph;
        let mut frames: Vec<Frame> = Vec::new();

        for root in graph.vertices() {
            if self.index[root.index()] != UNVISITED {
                continue;
            }

            self.visit(root);
            frames.push(Frame {
                vertex: root,
                cursor: 0,
            });

            while let Some(frame) = frames.last_mut() {
                let vertex = frame.vertex;
                let v = vertex.index();

                if let Some(&successor) = graph.successors(vertex).get(frame.cursor) {
                    frame.cursor += 1;
                    let w = successor.index();

                    if self.index[w] == UNVISITED {
                        self.visit(successor);
                        frames.push(Frame {
                            vertex: successor,
                            cursor: 0,
                        });
                    } else if self.on_stack[w] {
                        self.lowlink[v] = self.lowlink[v].min(self.index[w]);
                    }
                    continue;
                }

                frames.pop();

                if self.lowlink[v] == self.index[v] {
                    self.pop_component(vertex);
                }

                if let Some(parent) = frames.last() {
                    let p = parent.vertex.index();
                    self.lowlink[p] = self.lowlink[p].min(self.lowlink[v]);
                }
            }
        }

        self.components
    }

    fn pop_component(&mut self, root: VertexId) {
        let mut members = Vec::new();
        while let Some(member) = self.stack.pop() {
            self.on_stack[member.index()] = false;
            members.push(member);
            if member == root {
                break;
            }
        }
        self.components.push(Component::new(members));
    }
}

/// Partition the vertices of `graph` into strongly connected components
///
/// Roots are tried in insertion order. Every vertex appears in exactly one
/// component.
pub fn decompose(graph: &GraphModel) -> Vec<Component> {
    Tarjan::new(graph).run()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn names(graph: &GraphModel, components: &[Component]) -> Vec<Vec<String>> {
        components
            .iter()
            .map(|c| {
                c.members()
                    .iter()
                    .map(|&v| graph.name(v).to_string())
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_empty_graph_has_no_components() {
        assert!(decompose(&GraphModel::default()).is_empty());
    }

    #[test]
    fn test_chain_gives_singletons_in_completion_order() {
        let graph = GraphModel::from_adjacency([
            ("a", vec!["b"]),
            ("b", vec!["c"]),
            ("c", vec![]),
        ])
        .unwrap();

        assert_eq!(
            names(&graph, &decompose(&graph)),
            vec![vec!["c"], vec!["b"], vec!["a"]]
        );
    }

    #[test]
    fn test_two_components_joined_by_bridge() {
        let graph = GraphModel::from_adjacency([
            ("1", vec!["2"]),
            ("2", vec!["1", "3"]),
            ("3", vec!["4", "5"]),
            ("4", vec!["5"]),
            ("5", vec!["3", "6"]),
            ("6", vec![]),
        ])
        .unwrap();

        let components = decompose(&graph);
        assert_eq!(
            names(&graph, &components),
            vec![
                vec!["6"],
                vec!["5", "4", "3"],
                vec!["2", "1"],
            ]
        );

        let qualifying: Vec<usize> = components
            .iter()
            .filter(|c| c.can_contain_cycles(&graph))
            .map(Component::len)
            .collect();
        assert_eq!(qualifying, vec![3, 2]);
    }

    #[test]
    fn test_singleton_qualifies_only_with_self_loop() {
        let graph = GraphModel::from_adjacency([
            ("looped", vec!["looped", "plain"]),
            ("plain", vec![]),
        ])
        .unwrap();

        let components = decompose(&graph);
        assert_eq!(components.len(), 2);

        let looped = graph.id("looped").unwrap();
        let with_loop = components.iter().find(|c| c.contains(looped)).unwrap();
        let without_loop = components.iter().find(|c| !c.contains(looped)).unwrap();

        assert!(with_loop.can_contain_cycles(&graph));
        assert!(!without_loop.can_contain_cycles(&graph));
    }

    #[test]
    fn test_long_chain_does_not_overflow() {
        let n = 200_000;
        let builder = (0..n).fold(GraphModel::builder(), |builder, i| {
            let successors: Vec<String> = if i + 1 < n {
                vec![(i + 1).to_string()]
            } else {
                vec!["0".to_string()]
            };
            builder.add_vertex(i.to_string(), successors)
        });
        let graph = builder.build().unwrap();

        let components = decompose(&graph);
        assert_eq!(components.len(), 1);
        assert_eq!(components[0].len(), n);
    }
}
