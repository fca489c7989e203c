//! Console rendition of a shortest-path run: drives the engine to completion
//! over a fixed six-node graph and prints every relaxation decision, then the
//! final distance table and the reconstructed path to the farthest node.

use colored::Colorize;
use sssp_stepper::{AdjacencyGraph, NeighborEvent, ShortestPathEngine};

fn example_graph() -> AdjacencyGraph<&'static str, u64> {
    let mut graph = AdjacencyGraph::new();
    graph.add_edge("A", "B", 5);
    graph.add_edge("A", "C", 1);
    graph.add_edge("B", "A", 5);
    graph.add_edge("B", "C", 2);
    graph.add_edge("B", "D", 1);
    graph.add_edge("C", "A", 1);
    graph.add_edge("C", "B", 2);
    graph.add_edge("C", "D", 4);
    graph.add_edge("C", "E", 8);
    graph.add_edge("D", "B", 1);
    graph.add_edge("D", "C", 4);
    graph.add_edge("D", "E", 3);
    graph.add_edge("D", "F", 6);
    graph.add_edge("E", "C", 8);
    graph.add_edge("E", "D", 3);
    graph.add_edge("F", "D", 6);
    graph
}

fn main() {
    env_logger::init();

    let source = "A";
    let mut engine =
        ShortestPathEngine::new(example_graph(), source).expect("source is in the graph");

    println!("Starting at node '{}'\n", source.bold());

    let result = engine.run_to_completion();

    for settlement in &result.trace {
        println!(
            "Processing node: {} (accumulated distance: {})",
            settlement.node.yellow().bold(),
            settlement.distance
        );
        for event in &settlement.events {
            match event {
                NeighborEvent::Improved {
                    to,
                    old_distance,
                    new_distance,
                    ..
                } => {
                    let old = old_distance
                        .map(|d| d.to_string())
                        .unwrap_or_else(|| "inf".to_string());
                    println!(
                        "  Updating distance of {}: {} -> {}",
                        to.green(),
                        old,
                        new_distance
                    );
                }
                NeighborEvent::NotBetter {
                    node,
                    current_distance,
                } => {
                    println!(
                        "  Not updating {}, current distance: {}",
                        node, current_distance
                    );
                }
                NeighborEvent::AlreadySettled { node } => {
                    println!("  Skipping {}, already settled", node.dimmed());
                }
            }
        }
        println!();
    }

    println!("Final distances from the source:");
    let mut distances: Vec<_> = result.distances.iter().collect();
    distances.sort_by_key(|(node, _)| *node);
    for (node, distance) in distances {
        let shown = distance
            .map(|d| d.to_string())
            .unwrap_or_else(|| "inf".to_string());
        println!("  {}: {}", node, shown);
    }

    match engine.reconstruct_path(&"F") {
        Ok(path) => println!("\nPath to F: {}", path.join(" -> ").cyan()),
        Err(err) => println!("\nNo path to F: {}", err),
    }
}
