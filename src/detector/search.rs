//! Szwarcfiter–Lauer backtracking search over one strongly connected
//! component
//!
//! Edges that cannot lead back onto the current path are removed from the
//! working adjacency and recorded in a per-vertex blocking list. When a
//! vertex turns out to lie on a cycle after all, `unmark` restores the edges
//! blocked behind it, transitively. A `q` threshold on stack positions keeps
//! rotations of an already reported cycle from being reported again.
//!
//! Both the search and the restoration run on explicit stacks and visit
//! vertices in the same order a recursive formulation would.

use std::collections::HashMap;
use std::convert::Infallible;
use std::mem;
use std::time::{Duration, Instant};

use tracing::trace;

use super::ElementaryCycle;
use crate::error::CyclesError;
use crate::graph::{GraphModel, VertexId};

/// Checked once per successor iteration
trait SearchBudget {
    type Error;

    fn check(&self) -> Result<(), Self::Error>;
}

struct Unbounded;

impl SearchBudget for Unbounded {
    type Error = Infallible;

    fn check(&self) -> Result<(), Infallible> {
        Ok(())
    }
}

/// Wall-clock limit for a search
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    expires_at: Option<Instant>,
    limit: Duration,
}

impl Deadline {
    /// A deadline `limit` from now; a limit too large to represent never
    /// expires
    pub fn after(limit: Duration) -> Self {
        Self {
            expires_at: Instant::now().checked_add(limit),
            limit,
        }
    }

    pub fn limit(&self) -> Duration {
        self.limit
    }

    pub fn is_expired(&self) -> bool {
        self.expires_at
            .is_some_and(|expires_at| Instant::now() >= expires_at)
    }
}

impl SearchBudget for Deadline {
    type Error = CyclesError;

    fn check(&self) -> Result<(), CyclesError> {
        if self.is_expired() {
            return Err(CyclesError::DeadlineExceeded {
                limit_ms: self.limit.as_millis(),
            });
        }
        Ok(())
    }
}

/// Enumerates the elementary cycles of the subgraph induced by one component
pub struct CycleEnumerator<'g> {
    graph: &'g GraphModel,
}

impl<'g> CycleEnumerator<'g> {
    pub fn new(graph: &'g GraphModel) -> Self {
        Self { graph }
    }

    /// Run the search over the subgraph induced by `start_order`, trying
    /// roots in that order
    ///
    /// `start_order` must list each vertex of the component exactly once.
    pub fn enumerate(&self, start_order: &[VertexId]) -> Vec<ElementaryCycle> {
        let Ok(cycles) = self.run(start_order, &Unbounded);
        cycles
    }

    /// Like [`enumerate`](Self::enumerate), aborting with
    /// [`CyclesError::DeadlineExceeded`] once `deadline` passes
    pub fn enumerate_within(
        &self,
        start_order: &[VertexId],
        deadline: &Deadline,
    ) -> Result<Vec<ElementaryCycle>, CyclesError> {
        self.run(start_order, deadline)
    }

    fn run<B: SearchBudget>(
        &self,
        start_order: &[VertexId],
        budget: &B,
    ) -> Result<Vec<ElementaryCycle>, B::Error> {
        let mut context = SearchContext::new(self.graph, start_order);

        for root in 0..context.vertices.len() {
            if !context.reach[root] {
                trace!(root = self.graph.name(context.vertices[root]), "starting search");
                context.search(root, budget)?;
            }
        }

        Ok(context.cycles)
    }
}

struct Frame {
    vertex: usize,
    q: usize,
    successors: Vec<usize>,
    cursor: usize,
    found: bool,
}

/// Per-component search state, indexed by local vertex index
struct SearchContext<'g> {
    graph: &'g GraphModel,
    vertices: Vec<VertexId>,
    adjacency: Vec<Vec<usize>>,
    blocked: Vec<Vec<usize>>,
    mark: Vec<bool>,
    reach: Vec<bool>,
    position: Vec<usize>,
    stack: Vec<usize>,
    cycles: Vec<ElementaryCycle>,
    sentinel: usize,
}

impl<'g> SearchContext<'g> {
    fn new(graph: &'g GraphModel, start_order: &[VertexId]) -> Self {
        let n = start_order.len();
        let local: HashMap<VertexId, usize> = start_order
            .iter()
            .enumerate()
            .map(|(i, &vertex)| (vertex, i))
            .collect();

        let adjacency = start_order
            .iter()
            .map(|&vertex| {
                graph
                    .successors(vertex)
                    .iter()
                    .filter_map(|successor| local.get(successor).copied())
                    .collect()
            })
            .collect();

        Self {
            graph,
            vertices: start_order.to_vec(),
            adjacency,
            blocked: vec![Vec::new(); n],
            mark: vec![false; n],
            reach: vec![false; n],
            position: vec![n + 1; n],
            stack: Vec::with_capacity(n),
            cycles: Vec::new(),
            sentinel: n + 1,
        }
    }

    fn search<B: SearchBudget>(&mut self, root: usize, budget: &B) -> Result<(), B::Error> {
        let mut frames = vec![self.open(root, 0)];

        while let Some(frame) = frames.last_mut() {
            if let Some(&w) = frame.successors.get(frame.cursor) {
                frame.cursor += 1;
                budget.check()?;

                let v = frame.vertex;
                if !self.adjacency[v].contains(&w) {
                    continue;
                }

                if !self.mark[w] {
                    let q = frame.q;
                    let child = self.open(w, q);
                    frames.push(child);
                } else if self.position[w] <= frame.q {
                    self.record(w);
                    frame.found = true;
                } else {
                    self.block(v, w);
                }
                continue;
            }

            let (v, found) = (frame.vertex, frame.found);
            frames.pop();
            self.close(v, found);

            if let Some(parent) = frames.last_mut() {
                if found {
                    parent.found = true;
                } else {
                    self.block(parent.vertex, v);
                }
            }
        }

        Ok(())
    }

    fn open(&mut self, v: usize, q: usize) -> Frame {
        self.mark[v] = true;
        self.stack.push(v);
        let t = self.stack.len();
        self.position[v] = t;

        Frame {
            vertex: v,
            q: if self.reach[v] { q } else { t },
            successors: self.adjacency[v].clone(),
            cursor: 0,
            found: false,
        }
    }

    fn close(&mut self, v: usize, found: bool) {
        self.stack.pop();
        if found {
            self.unmark(v);
        }
        self.reach[v] = true;
        self.position[v] = self.sentinel;
    }

    /// Record the path from `w` to the top of the stack, closed by `w`
    fn record(&mut self, w: usize) {
        let start = self.position[w] - 1;
        let path: Vec<String> = self.stack[start..]
            .iter()
            .chain(std::iter::once(&w))
            .map(|&local| self.graph.name(self.vertices[local]).to_string())
            .collect();

        trace!(cycle = %path.join(" -> "), "found cycle");
        self.cycles.push(ElementaryCycle::new(path));
    }

    /// Remove `v -> w` from the working adjacency and remember it behind `w`
    fn block(&mut self, v: usize, w: usize) {
        self.blocked[w].push(v);
        if let Some(slot) = self.adjacency[v].iter().position(|&x| x == w) {
            self.adjacency[v].remove(slot);
        }
    }

    /// Unmark `x` and restore every edge blocked behind it, unmarking the
    /// restored predecessors that are still marked
    fn unmark(&mut self, x: usize) {
        self.mark[x] = false;
        let mut pending = vec![(x, mem::take(&mut self.blocked[x]).into_iter())];

        while let Some((target, predecessors)) = pending.last_mut() {
            let target = *target;
            let Some(y) = predecessors.next() else {
                pending.pop();
                continue;
            };

            debug_assert!(!self.adjacency[y].contains(&target));
            self.adjacency[y].push(target);

            if self.mark[y] {
                self.mark[y] = false;
                pending.push((y, mem::take(&mut self.blocked[y]).into_iter()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn paths(cycles: &[ElementaryCycle]) -> Vec<String> {
        cycles.iter().map(ElementaryCycle::to_path_string).collect()
    }

    fn ids(graph: &GraphModel, names: &[&str]) -> Vec<VertexId> {
        names.iter().map(|name| graph.id(name).unwrap()).collect()
    }

    #[test]
    fn test_self_loop() {
        let graph = GraphModel::from_adjacency([("a", vec!["a"])]).unwrap();
        let cycles = CycleEnumerator::new(&graph).enumerate(&ids(&graph, &["a"]));

        assert_eq!(paths(&cycles), vec!["a -> a"]);
    }

    #[test]
    fn test_two_cycle_reported_once() {
        let graph = GraphModel::from_adjacency([("a", vec!["b"]), ("b", vec!["a"])]).unwrap();
        let cycles = CycleEnumerator::new(&graph).enumerate(&ids(&graph, &["a", "b"]));

        assert_eq!(paths(&cycles), vec!["a -> b -> a"]);
    }

    #[test]
    fn test_start_order_picks_rotation() {
        let graph = GraphModel::from_adjacency([
            ("a", vec!["b"]),
            ("b", vec!["c"]),
            ("c", vec!["a"]),
        ])
        .unwrap();
        let cycles = CycleEnumerator::new(&graph).enumerate(&ids(&graph, &["c", "a", "b"]));

        assert_eq!(paths(&cycles), vec!["c -> a -> b -> c"]);
    }

    #[test]
    fn test_restores_blocked_edges() {
        // 4 -> 3 is blocked while 3 is still on the path; 1 -> 4 -> 3 -> 1
        // is only found after unmarking 3 restores it.
        let graph = GraphModel::from_adjacency([
            ("1", vec!["2", "3", "4"]),
            ("2", vec!["3"]),
            ("3", vec!["1", "4"]),
            ("4", vec!["3"]),
        ])
        .unwrap();
        let cycles = CycleEnumerator::new(&graph).enumerate(&ids(&graph, &["1", "2", "3", "4"]));

        assert_eq!(
            paths(&cycles),
            vec![
                "1 -> 2 -> 3 -> 1",
                "3 -> 4 -> 3",
                "1 -> 3 -> 1",
                "1 -> 4 -> 3 -> 1",
            ]
        );
    }

    #[test]
    fn test_only_edges_inside_component_are_followed() {
        let graph = GraphModel::from_adjacency([
            ("a", vec!["b", "out"]),
            ("b", vec!["a"]),
            ("out", vec!["a"]),
        ])
        .unwrap();
        let cycles = CycleEnumerator::new(&graph).enumerate(&ids(&graph, &["a", "b"]));

        assert_eq!(paths(&cycles), vec!["a -> b -> a"]);
    }

    #[test]
    fn test_expired_deadline_aborts() {
        let graph = GraphModel::from_adjacency([("a", vec!["b"]), ("b", vec!["a"])]).unwrap();
        let deadline = Deadline::after(Duration::ZERO);

        let err = CycleEnumerator::new(&graph)
            .enumerate_within(&ids(&graph, &["a", "b"]), &deadline)
            .unwrap_err();
        assert!(matches!(err, CyclesError::DeadlineExceeded { limit_ms: 0 }));
    }

    #[test]
    fn test_generous_deadline_matches_unbounded() {
        let graph = GraphModel::from_adjacency([
            ("a", vec!["b", "c"]),
            ("b", vec!["c", "a"]),
            ("c", vec!["a"]),
        ])
        .unwrap();
        let order = ids(&graph, &["a", "c", "b"]);
        let enumerator = CycleEnumerator::new(&graph);

        let bounded = enumerator
            .enumerate_within(&order, &Deadline::after(Duration::from_secs(60)))
            .unwrap();
        assert_eq!(paths(&bounded), paths(&enumerator.enumerate(&order)));
    }

    #[test]
    fn test_huge_deadline_never_expires() {
        let deadline = Deadline::after(Duration::MAX);
        assert!(!deadline.is_expired());
        assert_eq!(deadline.limit(), Duration::MAX);
    }
}
