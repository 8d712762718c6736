//! # Cycle Detection Module
//!
//! This module enumerates every elementary cycle of a [`GraphModel`]
//! exactly once.
//!
//! ## Algorithm
//!
//! The graph is first split into strongly connected components with
//! Tarjan's algorithm in O(V + E). Every cycle lies inside one component, so
//! components that cannot hold a cycle (a single vertex without a self-loop)
//! are skipped. Each remaining component is searched with the
//! Szwarcfiter–Lauer algorithm, whose edge blocking and restoration keep the
//! work per reported cycle bounded.
//!
//! Start vertices are tried in order of descending in-degree inside the
//! component.
//!
//! ## Key Components
//!
//! - **scc::decompose**: iterative Tarjan decomposition
//! - **search::CycleEnumerator**: the backtracking search over one component
//! - **CycleDetector**: drives both, optionally in parallel and under a
//!   deadline
//! - **ElementaryCycle**: a closed vertex sequence
//!
//! ## Example
//!
//! ```
//! use elementary_cycles::detector::CycleDetector;
//! use elementary_cycles::graph::GraphModel;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let graph = GraphModel::from_adjacency([
//!     ("a", vec!["b"]),
//!     ("b", vec!["a", "c"]),
//!     ("c", vec!["c"]),
//! ])?;
//!
//! let mut detector = CycleDetector::new();
//! detector.detect_cycles(&graph)?;
//!
//! assert_eq!(detector.cycle_count(), 2);
//! let paths: Vec<String> = detector.cycles().iter().map(|c| c.to_path_string()).collect();
//! assert_eq!(paths, ["c -> c", "b -> a -> b"]);
//! # Ok(())
//! # }
//! ```
//!
//! [`GraphModel`]: crate::graph::GraphModel

mod detector_impl;
pub mod scc;
pub mod search;

pub use detector_impl::*;
