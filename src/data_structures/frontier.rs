use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// A priority frontier for shortest-path search: a min-heap of
/// (distance-at-insertion, node) entries.
///
/// The frontier may hold stale duplicate entries for a node pushed at several
/// different distances; staleness is resolved lazily by the caller, which
/// discards popped entries for nodes it has already settled. Entries with
/// equal distance pop in insertion order (each push is tagged with a monotone
/// sequence number), so traces are reproducible without an `Ord` bound on the
/// node type.
#[derive(Debug)]
pub struct Frontier<N, W>
where
    N: Debug,
    W: Ord + Copy + Debug,
{
    heap: BinaryHeap<Entry<N, W>>,
    next_seq: u64,
}

#[derive(Debug)]
struct Entry<N, W> {
    distance: W,
    seq: u64,
    node: N,
}

impl<N, W: Ord> PartialEq for Entry<N, W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N, W: Ord> Eq for Entry<N, W> {}

impl<N, W: Ord> PartialOrd for Entry<N, W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N, W: Ord> Ord for Entry<N, W> {
    // Reversed so the BinaryHeap pops the smallest (distance, seq) first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .cmp(&self.distance)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<N, W> Frontier<N, W>
where
    N: Debug,
    W: Ord + Copy + Debug,
{
    /// Creates a new empty frontier
    pub fn new() -> Self {
        Frontier {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Returns true if the frontier holds no entries
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries, stale duplicates included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes a node with its tentative distance at insertion time
    pub fn push(&mut self, node: N, distance: W) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry {
            distance,
            seq,
            node,
        });
    }

    /// Removes and returns the entry with the smallest distance
    pub fn pop(&mut self) -> Option<(N, W)> {
        self.heap
            .pop()
            .map(|entry| (entry.node, entry.distance))
    }

    /// Clears all entries and resets the insertion sequence
    pub fn clear(&mut self) {
        self.heap.clear();
        self.next_seq = 0;
    }
}

impl<N, W> Default for Frontier<N, W>
where
    N: Debug,
    W: Ord + Copy + Debug,
{
    fn default() -> Self {
        Frontier::new()
    }
}
