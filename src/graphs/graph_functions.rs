use ahash::{HashSet, HashSetExt};
use itertools::Itertools;
use rand::prelude::*;

use super::{edge::DirectedWeightedEdge, hash_graph::HashGraph, vertex::Vertex, Graph, Weight};
use crate::search::path::Path;

/// Checks that `path` is a real route in `graph`: consecutive vertices are
/// connected by edges and the edge weights sum to the path weight.
pub fn validate_path(graph: &dyn Graph, path: &Path) -> Result<(), String> {
    if path.vertices.is_empty() {
        return Err("path is empty".to_string());
    }

    let mut true_weight = 0;
    for (tail, head) in path.vertices.iter().tuple_windows() {
        match graph.out_edges(tail).find(|edge| edge.head() == head) {
            Some(edge) => true_weight += edge.weight(),
            None => return Err(format!("no edge between {} and {} found", tail, head)),
        }
    }

    if true_weight != path.weight {
        return Err("wrong path weight".to_string());
    }

    Ok(())
}

/// Generates a valid random graph with vertices `v0` .. `v{n-1}` and at most
/// `number_of_edges` distinct edges with weights below 100. Used by the
/// property tests; `number_of_vertices` must be at least 1.
pub fn random_graph(
    number_of_vertices: usize,
    number_of_edges: usize,
    rng: &mut impl Rng,
) -> HashGraph {
    let vertices: Vec<Vertex> = (0..number_of_vertices)
        .map(|i| Vertex::new(format!("v{}", i)))
        .collect();

    let mut seen = HashSet::new();
    let mut edges = Vec::new();
    for _ in 0..number_of_edges {
        let tail = vertices.choose(rng).unwrap().clone();
        let head = vertices.choose(rng).unwrap().clone();
        if seen.insert((tail.clone(), head.clone())) {
            let weight: Weight = rng.gen_range(0..100);
            edges.push(DirectedWeightedEdge::new(tail, head, weight));
        }
    }

    HashGraph::new(vertices, edges).expect("generated edges are valid")
}
