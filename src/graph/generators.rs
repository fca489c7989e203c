use ordered_float::OrderedFloat;
use rand::prelude::*;

use crate::graph::AdjacencyGraph;

/// Generates a random directed graph with roughly `edge_factor * n` edges and
/// uniform weights in [1, 100). Self-loops are skipped. Node IDs are 0..n.
pub fn generate_random_graph(
    n: usize,
    edge_factor: f64,
) -> AdjacencyGraph<u32, OrderedFloat<f64>> {
    let mut graph = AdjacencyGraph::new();
    let mut rng = rand::thread_rng();

    for v in 0..n {
        graph.add_node(v as u32);
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n) as u32;
        let v = rng.gen_range(0..n) as u32;
        // Avoid self-loops and ensure positive weights
        if u != v {
            let weight = OrderedFloat(rng.gen_range(1.0..100.0));
            graph.add_edge(u, v, weight);
        }
    }

    graph
}

/// Generates a random connected undirected graph: a random spanning tree plus
/// `extra_edges` additional undirected edges with integer weights in [1, 20].
pub fn generate_connected_graph(n: usize, extra_edges: usize) -> AdjacencyGraph<u32, u64> {
    let mut graph = AdjacencyGraph::new();
    let mut rng = rand::thread_rng();

    for v in 0..n {
        graph.add_node(v as u32);
    }

    // Spanning tree: attach each node to a random earlier one
    for v in 1..n {
        let u = rng.gen_range(0..v);
        let weight = rng.gen_range(1..=20);
        graph.add_undirected_edge(u as u32, v as u32, weight);
    }

    for _ in 0..extra_edges {
        let u = rng.gen_range(0..n) as u32;
        let v = rng.gen_range(0..n) as u32;
        if u != v {
            let weight = rng.gen_range(1..=20);
            graph.add_undirected_edge(u, v, weight);
        }
    }

    graph
}
