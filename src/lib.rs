//! Stepwise single-source shortest paths (Dijkstra with lazy deletion).
//!
//! This library computes shortest paths from one source over a small weighted
//! graph with non-negative edge weights, and exposes the algorithm's progress
//! incrementally: the engine can be driven one node settlement at a time with
//! [`ShortestPathEngine::step`], or to completion with
//! [`ShortestPathEngine::run_to_completion`], emitting a structured trace
//! event for every relaxation decision either way.
//!
//! Presentation concerns (console output, rendering) live outside the crate
//! and consume the trace events and [`engine::Snapshot`] views.

pub mod data_structures;
pub mod engine;
pub mod graph;

pub use engine::{
    NeighborEvent, RunResult, RunState, Settlement, ShortestPathEngine, Snapshot, StepResult,
};
/// Re-export main types for convenient use
pub use graph::adjacency::AdjacencyGraph;

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("source node not found in graph")]
    InvalidSource,

    #[error("no path from the source to the requested node")]
    Unreachable,

    #[error("run has not finished; predecessors may still change")]
    NotFinished,
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
