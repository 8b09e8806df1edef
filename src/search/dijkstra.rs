use super::{dijkstra_data::DijkstraData, path::Path};
use crate::{
    graphs::{vertex::Vertex, Graph},
    GraphError, Result,
};

/// Computes the minimum-weight route from `source` to `target`.
///
/// Both endpoints must be contained in the graph. `source == target` yields
/// the trivial single-vertex path of weight 0 without running the search.
/// An unreachable target is an ordinary `Ok(None)` outcome.
pub fn shortest_path(graph: &dyn Graph, source: &Vertex, target: &Vertex) -> Result<Option<Path>> {
    if !graph.contains_vertex(source) {
        return Err(GraphError::UnknownVertex(source.clone()));
    }
    if !graph.contains_vertex(target) {
        return Err(GraphError::UnknownVertex(target.clone()));
    }

    if source == target {
        return Ok(Some(Path {
            vertices: vec![source.clone()],
            weight: 0,
        }));
    }

    let data = single_source(graph, source);
    Ok(data.get_path(target))
}

/// Runs Dijkstra from `source` until the queue is exhausted. There is no
/// early exit on reaching a particular target; simplicity over saved
/// iterations for single-pair queries.
pub fn single_source(graph: &dyn Graph, source: &Vertex) -> DijkstraData {
    let mut data = DijkstraData::new(source);

    while let Some(vertex) = data.pop() {
        for edge in graph.out_edges(&vertex) {
            data.update(&vertex, edge.head(), edge.weight());
        }
    }

    data
}
