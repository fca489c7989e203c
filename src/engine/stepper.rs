use std::collections::{HashMap, HashSet};

use log::{debug, trace};
use num_traits::Zero;

use crate::data_structures::Frontier;
use crate::engine::trace::{NeighborEvent, RunResult, RunState, Settlement, Snapshot, StepResult};
use crate::graph::{Graph, NodeId, Weight};
use crate::{Error, Result};

/// Dijkstra's algorithm as an explicit state machine.
///
/// The engine owns the graph, the tentative-distance table, the predecessor
/// table, the visited set, and a priority frontier with lazy deletion of
/// stale entries. It can be driven one node settlement at a time with
/// [`step`](Self::step) or to completion with
/// [`run_to_completion`](Self::run_to_completion); both modes produce the
/// identical trace.
///
/// Single-threaded and synchronous: one run at a time, callers needing
/// concurrent access serialize externally.
#[derive(Debug)]
pub struct ShortestPathEngine<G, N, W>
where
    G: Graph<N, W>,
    N: NodeId,
    W: Weight,
{
    graph: G,
    source: N,
    distances: HashMap<N, Option<W>>,
    predecessors: HashMap<N, Option<N>>,
    visited: HashSet<N>,
    frontier: Frontier<N, W>,
    run_state: RunState,
}

impl<G, N, W> ShortestPathEngine<G, N, W>
where
    G: Graph<N, W>,
    N: NodeId,
    W: Weight,
{
    /// Creates an engine for one run from `source`. Fails with
    /// [`Error::InvalidSource`] if the source is not a node of the graph; no
    /// partial state is retained in that case.
    pub fn new(graph: G, source: N) -> Result<Self> {
        if !graph.has_node(&source) {
            return Err(Error::InvalidSource);
        }

        let mut engine = ShortestPathEngine {
            graph,
            source,
            distances: HashMap::new(),
            predecessors: HashMap::new(),
            visited: HashSet::new(),
            frontier: Frontier::new(),
            run_state: RunState::NotStarted,
        };
        engine.reset();
        Ok(engine)
    }

    /// Discards all run state and reinitializes for a fresh run from the same
    /// source: source distance 0, every other node at infinity, `(0, source)`
    /// on the frontier. Safe between completed or abandoned runs.
    pub fn reset(&mut self) {
        self.distances = self.graph.nodes().map(|n| (n, None)).collect();
        self.predecessors = self.graph.nodes().map(|n| (n, None)).collect();
        self.visited.clear();
        self.frontier.clear();

        self.distances.insert(self.source.clone(), Some(W::zero()));
        self.frontier.push(self.source.clone(), W::zero());
        self.run_state = RunState::NotStarted;

        debug!("initialized run from {:?}", self.source);
    }

    /// Advances the algorithm by exactly one node settlement.
    ///
    /// After the run has finished this is an idempotent no-op returning
    /// [`StepResult::Finished`], so caller loops need no separate guard.
    pub fn step(&mut self) -> StepResult<N, W> {
        if self.run_state == RunState::Finished {
            return StepResult::Finished;
        }
        self.run_state = RunState::Running;

        // Lazy deletion: pop until we find a node that is not settled yet.
        // Stale entries for already-settled nodes are discarded silently.
        let (node, distance) = loop {
            match self.frontier.pop() {
                Some((node, distance)) => {
                    if !self.visited.contains(&node) {
                        break (node, distance);
                    }
                    trace!("discarding stale frontier entry for {:?}", node);
                }
                None => {
                    self.run_state = RunState::Finished;
                    debug!("frontier exhausted, run finished");
                    return StepResult::Exhausted;
                }
            }
        };

        // Settle the node: its distance is now final, because every node
        // popped earlier had distance <= `distance` and weights are
        // non-negative.
        self.visited.insert(node.clone());
        debug!("settled {:?} at {:?}", node, distance);

        let mut events = Vec::new();
        for (neighbor, weight) in self.graph.neighbors(&node) {
            if self.visited.contains(&neighbor) {
                trace!("  {:?}: already settled", neighbor);
                events.push(NeighborEvent::AlreadySettled { node: neighbor });
                continue;
            }

            let candidate = distance + weight;
            match self.distances.get(&neighbor).copied().flatten() {
                Some(current) if candidate >= current => {
                    trace!("  {:?}: keeping {:?}", neighbor, current);
                    events.push(NeighborEvent::NotBetter {
                        node: neighbor,
                        current_distance: current,
                    });
                }
                old_distance => {
                    trace!("  {:?}: {:?} -> {:?}", neighbor, old_distance, candidate);
                    self.distances.insert(neighbor.clone(), Some(candidate));
                    self.predecessors.insert(neighbor.clone(), Some(node.clone()));
                    self.frontier.push(neighbor.clone(), candidate);
                    events.push(NeighborEvent::Improved {
                        from: node.clone(),
                        to: neighbor,
                        old_distance,
                        new_distance: candidate,
                    });
                }
            }
        }

        if self.frontier.is_empty() {
            self.run_state = RunState::Finished;
            debug!("frontier empty after settlement, run finished");
        }

        StepResult::Settled(Settlement {
            node,
            distance,
            events,
            run_state: self.run_state,
        })
    }

    /// Runs `step()` until the run finishes, accumulating the full trace.
    ///
    /// Produces exactly the trace external repeated `step()` calls would; the
    /// two driving modes share the same state machine.
    pub fn run_to_completion(&mut self) -> RunResult<N, W> {
        let mut trace = Vec::new();
        loop {
            match self.step() {
                StepResult::Settled(settlement) => trace.push(settlement),
                StepResult::Exhausted | StepResult::Finished => break,
            }
        }

        RunResult {
            trace,
            distances: self.distances.clone(),
            predecessors: self.predecessors.clone(),
        }
    }

    /// Walks the predecessor table backward from `target` and returns the
    /// node sequence from the source to `target` inclusive.
    ///
    /// Fails with [`Error::NotFinished`] while the run is still in progress
    /// (predecessors may still change) and with [`Error::Unreachable`] if
    /// `target` was never settled.
    pub fn reconstruct_path(&self, target: &N) -> Result<Vec<N>> {
        if self.run_state != RunState::Finished {
            return Err(Error::NotFinished);
        }
        if self.distance(target).is_none() {
            return Err(Error::Unreachable);
        }

        let mut path = vec![target.clone()];
        let mut current = target.clone();
        while current != self.source {
            match self.predecessors.get(&current).cloned().flatten() {
                Some(prev) => {
                    path.push(prev.clone());
                    current = prev;
                }
                // A finite distance guarantees a chain back to the source; a
                // gap means the table was never filled for this node.
                None => return Err(Error::Unreachable),
            }
        }
        path.reverse();
        Ok(path)
    }

    /// Read-only view of the current tables for presentation layers.
    pub fn snapshot(&self) -> Snapshot<N, W> {
        Snapshot {
            distances: self.distances.clone(),
            predecessors: self.predecessors.clone(),
            visited: self.visited.clone(),
            frontier_len: self.frontier.len(),
            run_state: self.run_state,
        }
    }

    /// Current best-known distance to `node`, `None` while at infinity
    pub fn distance(&self, node: &N) -> Option<W> {
        self.distances.get(node).copied().flatten()
    }

    /// Current run state
    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    /// The source node of this run
    pub fn source(&self) -> &N {
        &self.source
    }

    /// The graph this engine runs over
    pub fn graph(&self) -> &G {
        &self.graph
    }
}
