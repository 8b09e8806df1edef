//! A directed, non-negatively weighted graph with label-addressed vertices
//! and single-pair shortest-path queries.
//!
//! A [`graphs::hash_graph::HashGraph`] is built once from a vertex
//! collection and an edge collection, validated eagerly, and read-only
//! afterwards. Queries cover vertex and edge enumeration, adjacency, direct
//! edge weights and Dijkstra shortest paths. "No direct edge" and "no path"
//! are ordinary `Ok(None)` outcomes; [`GraphError`] is reserved for
//! malformed input.

use thiserror::Error;

use crate::graphs::{vertex::Vertex, Weight};

pub mod graphs;
pub mod queue;
pub mod search;

/// Errors raised by graph construction and queries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An edge carries a negative weight.
    #[error("edge {0} -> {1} has negative weight {2}")]
    InvalidEdge(Vertex, Vertex, Weight),

    /// An edge endpoint is missing from the supplied vertex collection.
    #[error("edge {0} -> {1} references a vertex outside the graph")]
    InvalidVertex(Vertex, Vertex),

    /// A second edge with the same source and destination, any weight.
    #[error("duplicate edge {0} -> {1}")]
    DuplicateEdge(Vertex, Vertex),

    /// A query named a vertex the graph does not contain.
    #[error("unknown vertex {0}")]
    UnknownVertex(Vertex),
}

pub type Result<T> = std::result::Result<T, GraphError>;
