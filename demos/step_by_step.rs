//! Interactive-style stepper: advances the engine one settlement at a time
//! over a fixed six-node graph and renders the snapshot after every step the
//! way a graphical frontend would color its nodes (current node highlighted,
//! settled nodes marked). Finishes by dumping the final snapshot as JSON.

use colored::Colorize;
use sssp_stepper::{AdjacencyGraph, RunState, ShortestPathEngine, StepResult};

fn example_graph() -> AdjacencyGraph<&'static str, u64> {
    let mut graph = AdjacencyGraph::new();
    graph.add_edge("A", "B", 2);
    graph.add_edge("A", "C", 5);
    graph.add_edge("B", "A", 2);
    graph.add_edge("B", "C", 6);
    graph.add_edge("B", "D", 1);
    graph.add_edge("C", "A", 5);
    graph.add_edge("C", "B", 6);
    graph.add_edge("C", "D", 3);
    graph.add_edge("C", "E", 8);
    graph.add_edge("D", "B", 1);
    graph.add_edge("D", "C", 3);
    graph.add_edge("D", "E", 4);
    graph.add_edge("D", "F", 2);
    graph.add_edge("E", "C", 8);
    graph.add_edge("E", "D", 4);
    graph.add_edge("E", "F", 1);
    graph.add_edge("F", "D", 2);
    graph.add_edge("F", "E", 1);
    graph
}

type DemoEngine = ShortestPathEngine<AdjacencyGraph<&'static str, u64>, &'static str, u64>;

fn render(engine: &DemoEngine, current: &str) {
    let snapshot = engine.snapshot();
    for node in ["A", "B", "C", "D", "E", "F"] {
        let label = snapshot
            .distances
            .get(&node)
            .copied()
            .flatten()
            .map(|d| d.to_string())
            .unwrap_or_else(|| "inf".to_string());
        let shown = if node == current {
            format!("[{node} {label}]").yellow().bold().to_string()
        } else if snapshot.visited.contains(&node) {
            format!("({node} {label})").green().to_string()
        } else {
            format!(" {node} {label} ").normal().to_string()
        };
        print!("{shown} ");
    }
    println!("   frontier: {}", snapshot.frontier_len);
}

fn main() {
    env_logger::init();

    let mut engine =
        ShortestPathEngine::new(example_graph(), "A").expect("source is in the graph");

    let mut steps = 0;
    while engine.run_state() != RunState::Finished {
        match engine.step() {
            StepResult::Settled(settlement) => {
                steps += 1;
                print!("step {steps}: ");
                render(&engine, settlement.node);
            }
            StepResult::Exhausted => println!("no more reachable nodes"),
            StepResult::Finished => break,
        }
    }

    println!("\nall nodes settled after {steps} steps");
    println!(
        "final snapshot: {}",
        serde_json::to_string_pretty(&engine.snapshot()).expect("snapshot serializes")
    );
}
