//! Helpers shared by the integration tests

#![allow(dead_code)]

use std::collections::BTreeSet;

use elementary_cycles::detector::ElementaryCycle;
use elementary_cycles::graph::{GraphModel, VertexId};

/// Rotation-normalised form of every cycle, keeping duplicates visible
pub fn canonical_multiset(cycles: &[ElementaryCycle]) -> Vec<Vec<String>> {
    let mut canonical: Vec<Vec<String>> = cycles.iter().map(ElementaryCycle::canonical).collect();
    canonical.sort();
    canonical
}

/// Every elementary cycle by exhaustive search, rotation-normalised
///
/// Each cycle is found from its smallest vertex id only.
pub fn brute_force(graph: &GraphModel) -> BTreeSet<Vec<String>> {
    fn extend(
        graph: &GraphModel,
        start: VertexId,
        path: &mut Vec<VertexId>,
        found: &mut BTreeSet<Vec<String>>,
    ) {
        let Some(&last) = path.last() else {
            return;
        };
        for &next in graph.successors(last) {
            if next == start {
                let names: Vec<&str> = path.iter().map(|&v| graph.name(v)).collect();
                found.insert(ElementaryCycle::from_path(names).canonical());
            } else if next > start && !path.contains(&next) {
                path.push(next);
                extend(graph, start, path, found);
                path.pop();
            }
        }
    }

    let mut found = BTreeSet::new();
    for start in graph.vertices() {
        extend(graph, start, &mut vec![start], &mut found);
    }
    found
}

/// Assert the structural properties every reported cycle must have
pub fn assert_well_formed(graph: &GraphModel, cycles: &[ElementaryCycle]) {
    for cycle in cycles {
        let vertices = cycle.vertices();
        assert!(vertices.len() >= 2, "cycle too short: {cycle}");
        assert_eq!(vertices.first(), vertices.last(), "cycle not closed: {cycle}");

        let distinct: BTreeSet<&String> = cycle.path().iter().collect();
        assert_eq!(distinct.len(), cycle.len(), "vertex repeats in {cycle}");

        for (from, to) in cycle.edges() {
            let from = graph.id(from).expect("cycle vertex exists");
            let to = graph.id(to).expect("cycle vertex exists");
            assert!(
                graph.successors(from).contains(&to),
                "edge {from} -> {to} of {cycle} is not in the graph"
            );
        }
    }
}

/// A graph on vertices `v0..vn` from an adjacency matrix
pub fn graph_from_matrix(matrix: &[Vec<bool>]) -> GraphModel {
    GraphModel::from_adjacency(matrix.iter().enumerate().map(|(i, row)| {
        let successors: Vec<String> = row
            .iter()
            .enumerate()
            .filter(|&(_, &edge)| edge)
            .map(|(j, _)| format!("v{j}"))
            .collect();
        (format!("v{i}"), successors)
    }))
    .expect("matrix graphs have no dangling edges")
}
