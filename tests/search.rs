use rand::{rngs::StdRng, SeedableRng};
use simple_paths::{
    graphs::{
        edge::DirectedWeightedEdge,
        graph_functions::{random_graph, validate_path},
        hash_graph::HashGraph,
        vertex::Vertex,
        Graph,
    },
    search::path::Path,
    GraphError,
};

fn vertex(label: &str) -> Vertex {
    Vertex::new(label)
}

fn edge(tail: &str, head: &str, weight: i32) -> DirectedWeightedEdge {
    DirectedWeightedEdge::new(vertex(tail), vertex(head), weight)
}

fn abc_graph() -> HashGraph {
    HashGraph::new(
        [vertex("A"), vertex("B"), vertex("C")],
        [edge("A", "B", 1), edge("B", "C", 2), edge("A", "C", 5)],
    )
    .unwrap()
}

#[test]
fn takes_the_cheaper_indirect_route() {
    let graph = abc_graph();
    let path = graph
        .shortest_path(&vertex("A"), &vertex("C"))
        .unwrap()
        .unwrap();
    assert_eq!(path.vertices, vec![vertex("A"), vertex("B"), vertex("C")]);
    assert_eq!(path.weight, 3);
}

#[test]
fn source_equals_target() {
    let graph = abc_graph();
    let path = graph
        .shortest_path(&vertex("A"), &vertex("A"))
        .unwrap()
        .unwrap();
    assert_eq!(
        path,
        Path {
            vertices: vec![vertex("A")],
            weight: 0
        }
    );
}

#[test]
fn unreachable_target_is_no_path_not_an_error() {
    let graph = HashGraph::new([vertex("A"), vertex("B")], []).unwrap();
    assert_eq!(graph.shortest_path(&vertex("A"), &vertex("B")).unwrap(), None);
}

#[test]
fn edges_only_connect_in_their_direction() {
    let graph = HashGraph::new([vertex("A"), vertex("B")], [edge("B", "A", 1)]).unwrap();
    assert_eq!(graph.shortest_path(&vertex("A"), &vertex("B")).unwrap(), None);
    assert!(graph
        .shortest_path(&vertex("B"), &vertex("A"))
        .unwrap()
        .is_some());
}

#[test]
fn unknown_endpoints_are_errors() {
    let graph = abc_graph();
    assert_eq!(
        graph.shortest_path(&vertex("A"), &vertex("X")).err(),
        Some(GraphError::UnknownVertex(vertex("X")))
    );
    assert_eq!(
        graph.shortest_path(&vertex("X"), &vertex("A")).err(),
        Some(GraphError::UnknownVertex(vertex("X")))
    );
}

#[test]
fn zero_weight_edges_are_traversed() {
    let graph = HashGraph::new(
        [vertex("A"), vertex("B"), vertex("C")],
        [edge("A", "B", 0), edge("B", "C", 0)],
    )
    .unwrap();
    let path = graph
        .shortest_path(&vertex("A"), &vertex("C"))
        .unwrap()
        .unwrap();
    assert_eq!(path.weight, 0);
    assert_eq!(path.vertices.len(), 3);
}

#[test]
fn weights_near_the_maximum_do_not_overflow() {
    let graph = HashGraph::new(
        [vertex("A"), vertex("B"), vertex("C")],
        [edge("A", "B", 2_000_000_000), edge("B", "C", 2_000_000_000)],
    )
    .unwrap();

    // the A -> B leg is representable and must still be found
    let path = graph
        .shortest_path(&vertex("A"), &vertex("B"))
        .unwrap()
        .unwrap();
    assert_eq!(path.weight, 2_000_000_000);

    // the full route exceeds the weight domain; it saturates into the
    // infinite sentinel and reads as unreachable instead of wrapping
    assert_eq!(graph.shortest_path(&vertex("A"), &vertex("C")).unwrap(), None);
}

#[test]
fn large_representable_totals_are_exact() {
    let graph = HashGraph::new(
        [vertex("A"), vertex("B"), vertex("C")],
        [edge("A", "B", 2_000_000_000), edge("B", "C", 100_000_000)],
    )
    .unwrap();

    let path = graph
        .shortest_path(&vertex("A"), &vertex("C"))
        .unwrap()
        .unwrap();
    assert_eq!(path.weight, 2_100_000_000);
    assert_eq!(path.vertices.len(), 3);
}

#[test]
fn found_paths_are_valid_routes() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..10 {
        let graph = random_graph(30, 120, &mut rng);
        let vertices: Vec<Vertex> = graph.vertices().cloned().collect();

        for source in &vertices {
            for target in &vertices {
                let Some(path) = graph.shortest_path(source, target).unwrap() else {
                    continue;
                };
                validate_path(&graph, &path).unwrap();
                assert_eq!(path.vertices.first(), Some(source));
                assert_eq!(path.vertices.last(), Some(target));
            }
        }
    }
}

#[test]
fn never_worse_than_the_direct_edge() {
    let mut rng = StdRng::seed_from_u64(7);
    let graph = random_graph(40, 200, &mut rng);
    let vertices: Vec<Vertex> = graph.vertices().cloned().collect();

    for source in &vertices {
        for target in &vertices {
            if let Some(direct) = graph.edge_cost(source, target).unwrap() {
                let path = graph
                    .shortest_path(source, target)
                    .unwrap()
                    .expect("a direct edge implies reachability");
                assert!(path.weight <= direct);
            }
        }
    }
}

#[test]
fn prefix_weights_are_monotone() {
    let mut rng = StdRng::seed_from_u64(13);
    let graph = random_graph(25, 100, &mut rng);
    let vertices: Vec<Vertex> = graph.vertices().cloned().collect();

    for source in &vertices {
        for target in &vertices {
            let Some(path) = graph.shortest_path(source, target).unwrap() else {
                continue;
            };
            for intermediate in &path.vertices {
                let prefix = graph
                    .shortest_path(source, intermediate)
                    .unwrap()
                    .expect("every vertex on a shortest path is reachable");
                assert!(prefix.weight <= path.weight);
            }
        }
    }
}
