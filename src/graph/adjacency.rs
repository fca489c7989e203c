use std::collections::HashMap;

use num_traits::Zero;

use crate::graph::traits::{Graph, NodeId, Weight};

/// An adjacency-list graph keyed by opaque node identifiers.
///
/// Nodes keep their insertion order and every adjacency list keeps the order
/// its edges were added in, so two graphs built by the same sequence of calls
/// iterate identically.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Nodes in insertion order
    order: Vec<N>,

    /// Outgoing edges for each node: node -> [(target, weight)]
    edges: HashMap<N, Vec<(N, W)>>,
}

impl<N, W> AdjacencyGraph<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        AdjacencyGraph {
            order: Vec::new(),
            edges: HashMap::new(),
        }
    }

    /// Registers a node with no edges. Returns false if it already existed.
    pub fn add_node(&mut self, node: N) -> bool {
        if self.edges.contains_key(&node) {
            return false;
        }
        self.order.push(node.clone());
        self.edges.insert(node, Vec::new());
        true
    }

    /// Adds a directed edge, registering either endpoint if it is new.
    /// Rejects negative weights and returns false without touching the graph.
    pub fn add_edge(&mut self, from: N, to: N, weight: W) -> bool {
        if weight < W::zero() {
            return false;
        }

        self.add_node(from.clone());
        self.add_node(to.clone());

        // Adjacency lists are append-only; a duplicate edge gets its weight
        // updated in place so iteration order stays stable.
        if let Some(list) = self.edges.get_mut(&from) {
            if let Some(edge) = list.iter_mut().find(|(target, _)| *target == to) {
                edge.1 = weight;
            } else {
                list.push((to, weight));
            }
        }
        true
    }

    /// Adds the symmetric pair of directed edges for an undirected edge.
    pub fn add_undirected_edge(&mut self, a: N, b: N, weight: W) -> bool {
        self.add_edge(a.clone(), b.clone(), weight) && self.add_edge(b, a, weight)
    }

    /// Validate that the graph doesn't have negative weights
    pub fn validate_non_negative(&self) -> bool {
        self.edges
            .values()
            .all(|list| list.iter().all(|(_, weight)| *weight >= W::zero()))
    }
}

impl<N, W> Graph<N, W> for AdjacencyGraph<N, W>
where
    N: NodeId,
    W: Weight,
{
    fn node_count(&self) -> usize {
        self.order.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.values().map(|list| list.len()).sum()
    }

    fn has_node(&self, node: &N) -> bool {
        self.edges.contains_key(node)
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = N> + '_> {
        Box::new(self.order.iter().cloned())
    }

    fn neighbors(&self, node: &N) -> Box<dyn Iterator<Item = (N, W)> + '_> {
        if let Some(list) = self.edges.get(node) {
            Box::new(list.iter().cloned())
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn edge_weight(&self, from: &N, to: &N) -> Option<W> {
        self.edges
            .get(from)?
            .iter()
            .find(|(target, _)| target == to)
            .map(|(_, weight)| *weight)
    }
}
