use ahash::{HashMap, HashMapExt, HashSet, HashSetExt};
use serde::{Deserialize, Serialize};

use super::{
    edge::{DirectedEdge, DirectedWeightedEdge},
    vertex::Vertex,
    Graph, Weight,
};
use crate::{
    search::{dijkstra, path::Path},
    GraphError, Result,
};

/// An immutable directed graph over label-addressed vertices.
///
/// All indexes are built by [`HashGraph::new`] and never mutated afterwards,
/// so a shared reference may be used from any number of threads. The graph
/// owns clones of every vertex and edge it accepts; mutating the caller-held
/// originals after construction cannot reach it.
#[derive(Clone, Serialize, Deserialize)]
pub struct HashGraph {
    edges: HashSet<DirectedWeightedEdge>,
    out_vertices: HashMap<Vertex, HashSet<Vertex>>,
    out_edges: HashMap<Vertex, HashSet<DirectedWeightedEdge>>,
}

impl HashGraph {
    /// Builds and validates a graph from a vertex and an edge collection.
    ///
    /// Each candidate edge is checked in a fixed order: weight, endpoint
    /// membership, duplicate endpoints. The first violation aborts the whole
    /// construction, no partial graph is returned.
    pub fn new(
        vertices: impl IntoIterator<Item = Vertex>,
        edges: impl IntoIterator<Item = DirectedWeightedEdge>,
    ) -> Result<HashGraph> {
        let mut graph = HashGraph {
            edges: HashSet::new(),
            out_vertices: HashMap::new(),
            out_edges: HashMap::new(),
        };

        // Every supplied vertex gets an adjacency entry, including vertices
        // no edge ever leaves. Isolated vertices stay enumerable and
        // queryable this way.
        for vertex in vertices {
            graph.out_vertices.entry(vertex.clone()).or_default();
            graph.out_edges.entry(vertex).or_default();
        }

        let mut accepted = HashSet::new();
        for edge in edges {
            graph.add_edge(edge, &mut accepted)?;
        }

        Ok(graph)
    }

    fn add_edge(
        &mut self,
        edge: DirectedWeightedEdge,
        accepted: &mut HashSet<DirectedEdge>,
    ) -> Result<()> {
        if edge.weight() < 0 {
            return Err(GraphError::InvalidEdge(
                edge.tail().clone(),
                edge.head().clone(),
                edge.weight(),
            ));
        }

        if !self.out_edges.contains_key(edge.tail()) || !self.out_edges.contains_key(edge.head()) {
            return Err(GraphError::InvalidVertex(
                edge.tail().clone(),
                edge.head().clone(),
            ));
        }

        if !accepted.insert(edge.unweighted()) {
            return Err(GraphError::DuplicateEdge(
                edge.tail().clone(),
                edge.head().clone(),
            ));
        }

        self.out_vertices
            .entry(edge.tail().clone())
            .or_default()
            .insert(edge.head().clone());
        self.out_edges
            .entry(edge.tail().clone())
            .or_default()
            .insert(edge.clone());
        self.edges.insert(edge);

        Ok(())
    }

    /// The de-duplicated set of all accepted edges.
    pub fn edges(&self) -> &HashSet<DirectedWeightedEdge> {
        &self.edges
    }

    /// The vertices directly reachable from `vertex` via one edge. Empty for
    /// a known vertex without outgoing edges.
    pub fn adjacent_vertices(&self, vertex: &Vertex) -> Result<&HashSet<Vertex>> {
        self.out_vertices
            .get(vertex)
            .ok_or_else(|| GraphError::UnknownVertex(vertex.clone()))
    }

    /// The weight of the direct edge `tail -> head`, or `None` when the two
    /// vertices are known but not directly connected.
    pub fn edge_cost(&self, tail: &Vertex, head: &Vertex) -> Result<Option<Weight>> {
        let out_edges = self
            .out_edges
            .get(tail)
            .ok_or_else(|| GraphError::UnknownVertex(tail.clone()))?;
        if !self.out_edges.contains_key(head) {
            return Err(GraphError::UnknownVertex(head.clone()));
        }

        Ok(out_edges
            .iter()
            .find(|edge| edge.head() == head)
            .map(DirectedWeightedEdge::weight))
    }

    /// The minimum-weight route from `source` to `target`, or `None` when
    /// `target` is unreachable.
    pub fn shortest_path(&self, source: &Vertex, target: &Vertex) -> Result<Option<Path>> {
        dijkstra::shortest_path(self, source, target)
    }
}

impl Graph for HashGraph {
    fn number_of_vertices(&self) -> usize {
        self.out_vertices.len()
    }

    fn number_of_edges(&self) -> usize {
        self.edges.len()
    }

    fn contains_vertex(&self, vertex: &Vertex) -> bool {
        self.out_vertices.contains_key(vertex)
    }

    fn vertices<'a>(&'a self) -> Box<dyn Iterator<Item = &'a Vertex> + 'a> {
        Box::new(self.out_vertices.keys())
    }

    fn out_edges<'a>(
        &'a self,
        source: &Vertex,
    ) -> Box<dyn Iterator<Item = &'a DirectedWeightedEdge> + 'a> {
        match self.out_edges.get(source) {
            Some(edges) => Box::new(edges.iter()),
            None => Box::new(std::iter::empty()),
        }
    }
}
