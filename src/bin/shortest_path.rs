use std::{fs::read_to_string, path::PathBuf, process::exit};

use clap::Parser;
use itertools::Itertools;
use simple_paths::graphs::{
    edge::DirectedWeightedEdge, hash_graph::HashGraph, vertex::Vertex, Weight,
};

/// Answers a single shortest-path query over a graph read from text files
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File with whitespace separated vertex labels
    #[arg(short, long)]
    vertices: PathBuf,

    /// File with whitespace separated source destination weight triples
    #[arg(short, long)]
    edges: PathBuf,

    /// Source vertex label
    #[arg(short, long)]
    source: String,

    /// Target vertex label
    #[arg(short, long)]
    target: String,

    /// Print the result as JSON instead of plain text
    #[arg(long)]
    json: bool,
}

fn main() {
    let args = Args::parse();

    let vertices = read_vertices(&args.vertices);
    let edges = read_edges(&args.edges);

    let graph = match HashGraph::new(vertices, edges) {
        Ok(graph) => graph,
        Err(error) => {
            eprintln!("invalid graph: {}", error);
            exit(1);
        }
    };

    let source = Vertex::new(args.source);
    let target = Vertex::new(args.target);

    match graph.shortest_path(&source, &target) {
        Ok(Some(path)) => {
            if args.json {
                println!("{}", serde_json::to_string(&path).unwrap());
            } else {
                let route = path.vertices.iter().map(Vertex::label).join(" -> ");
                println!("{} (weight {})", route, path.weight);
            }
        }
        Ok(None) => println!("no path from {} to {}", source, target),
        Err(error) => {
            eprintln!("{}", error);
            exit(1);
        }
    }
}

fn read_vertices(file: &PathBuf) -> Vec<Vertex> {
    read_to_string(file)
        .unwrap_or_else(|_| panic!("unable to read {}", file.display()))
        .split_whitespace()
        .map(Vertex::new)
        .collect()
}

fn read_edges(file: &PathBuf) -> Vec<DirectedWeightedEdge> {
    read_to_string(file)
        .unwrap_or_else(|_| panic!("unable to read {}", file.display()))
        .split_whitespace()
        .tuples()
        .map(|(tail, head, weight)| {
            let weight: Weight = weight
                .parse()
                .unwrap_or_else(|_| panic!("unable to parse weight {}", weight));
            DirectedWeightedEdge::new(Vertex::new(tail), Vertex::new(head), weight)
        })
        .collect()
}
