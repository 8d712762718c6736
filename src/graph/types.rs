//! Core graph types
//!
//! This module contains the small value types shared by the graph model, the
//! decomposer and the search.

use std::fmt;

/// Compact vertex identifier, assigned in insertion order
///
/// Ids are only meaningful for the [`GraphModel`](super::GraphModel) that
/// produced them. Ordering follows insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub(crate) usize);

impl VertexId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What to do with an edge whose target is not a declared vertex
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum DanglingEdgePolicy {
    /// Fail the build with [`CyclesError::DanglingEdge`](crate::error::CyclesError::DanglingEdge)
    #[default]
    Reject,
    /// Drop the edge and log a warning
    Drop,
}

impl fmt::Display for DanglingEdgePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DanglingEdgePolicy::Reject => write!(f, "reject"),
            DanglingEdgePolicy::Drop => write!(f, "drop"),
        }
    }
}

/// A graph model together with the name it was declared under
#[derive(Debug, Clone)]
pub struct NamedGraph {
    pub name: String,
    pub model: super::GraphModel,
}
