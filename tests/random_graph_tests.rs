use ordered_float::OrderedFloat;
use sssp_stepper::graph::generators::{generate_connected_graph, generate_random_graph};
use sssp_stepper::graph::Graph;
use sssp_stepper::{AdjacencyGraph, ShortestPathEngine};

const INF: u64 = u64::MAX / 2;

// Bellman-Ford reference: V-1 relaxation passes over the full edge list, with
// early exit once a pass changes nothing. Only used to cross-check the engine.
fn bellman_ford(n: usize, edges: &[(usize, usize, u64)], source: usize) -> Vec<u64> {
    let mut dist = vec![INF; n];
    dist[source] = 0;

    for _ in 1..n.max(2) {
        let mut updated = false;
        for &(u, v, weight) in edges {
            if dist[u] != INF {
                let candidate = dist[u].saturating_add(weight);
                if candidate < dist[v] {
                    dist[v] = candidate;
                    updated = true;
                }
            }
        }
        if !updated {
            break;
        }
    }

    dist
}

fn edge_list(graph: &AdjacencyGraph<u32, u64>) -> Vec<(usize, usize, u64)> {
    let mut edges = Vec::new();
    for node in graph.nodes() {
        for (neighbor, weight) in graph.neighbors(&node) {
            edges.push((node as usize, neighbor as usize, weight));
        }
    }
    edges
}

#[test]
fn engine_matches_bellman_ford_on_random_connected_graphs() {
    for _ in 0..20 {
        let n = 30;
        let graph = generate_connected_graph(n, 40);
        let edges = edge_list(&graph);

        let mut engine = ShortestPathEngine::new(graph, 0).unwrap();
        let result = engine.run_to_completion();

        let reference = bellman_ford(n, &edges, 0);
        for v in 0..n {
            let engine_dist = result.distances[&(v as u32)];
            let reference_dist = if reference[v] == INF {
                None
            } else {
                Some(reference[v])
            };
            assert_eq!(engine_dist, reference_dist, "distance mismatch at node {v}");
        }
    }
}

#[test]
fn every_settled_node_has_a_reconstructible_shortest_path() {
    let graph = generate_connected_graph(25, 30);
    let mut engine = ShortestPathEngine::new(graph, 0).unwrap();
    let result = engine.run_to_completion();

    for v in 0..25u32 {
        let distance = match result.distances[&v] {
            Some(d) => d,
            None => continue,
        };

        let path = engine.reconstruct_path(&v).unwrap();
        assert_eq!(path.first(), Some(&0));
        assert_eq!(path.last(), Some(&v));

        // The hop weights along the reconstructed path must sum to the
        // reported distance.
        let mut total = 0;
        for pair in path.windows(2) {
            total += engine.graph().edge_weight(&pair[0], &pair[1]).unwrap();
        }
        assert_eq!(total, distance, "path weight mismatch for node {v}");
    }
}

#[test]
fn float_weighted_graphs_settle_in_nondecreasing_distance_order() {
    let graph = generate_random_graph(50, 3.0);
    let mut engine = ShortestPathEngine::new(graph, 0).unwrap();
    let result = engine.run_to_completion();

    // Dijkstra settles nodes in nondecreasing distance order; the trace must
    // reflect that for float weights too.
    let mut last = OrderedFloat(0.0);
    for settlement in &result.trace {
        assert!(
            settlement.distance >= last,
            "settlement order regressed: {:?} after {:?}",
            settlement.distance,
            last
        );
        last = settlement.distance;
    }
}
