use serde::{Deserialize, Serialize};

use crate::graphs::{vertex::Vertex, Weight};

/// The result of a shortest-path query: the route from source to target
/// inclusive, and its total weight. Produced fresh per query, never stored
/// by the graph.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    pub vertices: Vec<Vertex>,
    pub weight: Weight,
}
