use std::fmt::Debug;
use std::hash::Hash;

use num_traits::Zero;

/// Bound alias for node identifiers: opaque, comparable, hashable values
/// (short strings, integers, ...).
pub trait NodeId: Clone + Eq + Hash + Debug {}

impl<T> NodeId for T where T: Clone + Eq + Hash + Debug {}

/// Bound alias for edge weights. `Zero` supplies the additive identity and
/// addition; `Ord` is what makes the frontier orderable, so float weights go
/// through `ordered_float::OrderedFloat`.
pub trait Weight: Copy + Ord + Zero + Debug {}

impl<T> Weight for T where T: Copy + Ord + Zero + Debug {}

/// Trait representing a weighted directed graph, read-only during a run.
///
/// Undirected edges are represented as a symmetric pair of directed entries
/// supplied by the caller; the engine never infers symmetry. Both `nodes` and
/// `neighbors` must iterate in a deterministic, reproducible order for a given
/// graph value, since trace reproducibility depends on it.
pub trait Graph<N, W>: Debug
where
    N: NodeId,
    W: Weight,
{
    /// Returns the number of nodes in the graph
    fn node_count(&self) -> usize;

    /// Returns the number of directed edge entries in the graph
    fn edge_count(&self) -> usize;

    /// Returns true if the node exists in the graph
    fn has_node(&self, node: &N) -> bool;

    /// Returns an iterator over all nodes, in insertion order
    fn nodes(&self) -> Box<dyn Iterator<Item = N> + '_>;

    /// Returns an iterator over the outgoing edges of a node, in adjacency
    /// order
    fn neighbors(&self, node: &N) -> Box<dyn Iterator<Item = (N, W)> + '_>;

    /// Gets the weight of an edge if it exists
    fn edge_weight(&self, from: &N, to: &N) -> Option<W>;
}
