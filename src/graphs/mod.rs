use self::{edge::DirectedWeightedEdge, vertex::Vertex};

pub mod edge;
pub mod graph_functions;
pub mod hash_graph;
pub mod vertex;

/// Signed so that negative candidate weights are representable up to the
/// construction-time validation boundary.
pub type Weight = i32;

pub trait Graph: Send + Sync {
    fn number_of_vertices(&self) -> usize;

    fn number_of_edges(&self) -> usize;

    fn contains_vertex(&self, vertex: &Vertex) -> bool;

    fn vertices<'a>(&'a self) -> Box<dyn Iterator<Item = &'a Vertex> + 'a>;

    /// Outgoing edges of `source`, empty for vertices the graph does not
    /// contain.
    fn out_edges<'a>(
        &'a self,
        source: &Vertex,
    ) -> Box<dyn Iterator<Item = &'a DirectedWeightedEdge> + 'a>;
}
