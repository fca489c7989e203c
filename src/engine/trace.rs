use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::graph::{NodeId, Weight};

/// Lifecycle of one run. `Finished` is terminal; a finished engine only
/// leaves it through `reset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RunState {
    NotStarted,
    Running,
    Finished,
}

/// One relaxation decision, recorded per neighbor of the settled node in
/// adjacency order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum NeighborEvent<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// A shorter path through the settled node was found; distance and
    /// predecessor were updated together and the node was re-pushed onto the
    /// frontier. `old_distance` is `None` when the node was still at infinity.
    Improved {
        from: N,
        to: N,
        old_distance: Option<W>,
        new_distance: W,
    },

    /// The neighbor is already settled; its distance is frozen.
    AlreadySettled { node: N },

    /// The candidate distance through the settled node did not beat the
    /// neighbor's current tentative distance.
    NotBetter { node: N, current_distance: W },
}

/// The record of one node settlement: the node, its now-final distance, and
/// the relaxation decisions for each of its neighbors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settlement<N, W>
where
    N: NodeId,
    W: Weight,
{
    pub node: N,
    pub distance: W,
    pub events: Vec<NeighborEvent<N, W>>,
    /// Run state after this settlement was applied
    pub run_state: RunState,
}

/// Outcome of a single `step()` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum StepResult<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// One node was settled and its edges relaxed
    Settled(Settlement<N, W>),

    /// The frontier drained without yielding an unsettled node; the run just
    /// transitioned to `Finished`
    Exhausted,

    /// The run was already finished; nothing was mutated
    Finished,
}

/// Everything `run_to_completion` produces: the full ordered trace plus the
/// final distance and predecessor tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunResult<N, W>
where
    N: NodeId,
    W: Weight,
{
    pub trace: Vec<Settlement<N, W>>,
    pub distances: HashMap<N, Option<W>>,
    pub predecessors: HashMap<N, Option<N>>,
}

/// Read-only view of the engine mid-run, for presentation layers to render
/// labels and coloring without mutating engine state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot<N, W>
where
    N: NodeId,
    W: Weight,
{
    pub distances: HashMap<N, Option<W>>,
    pub predecessors: HashMap<N, Option<N>>,
    pub visited: HashSet<N>,
    pub frontier_len: usize,
    pub run_state: RunState,
}
