use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::node::{NodeId, NodeKey, SearchNode};

/// Heap entry: a snapshot of a node's key and cost at push time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    key: NodeKey,
    g: i32,
    id: NodeId,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest key first.
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.g.cmp(&self.g))
            .then_with(|| other.id.cmp(&self.id))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The open set, ranked by [`NodeKey`].
///
/// `BinaryHeap` has no decrease-key, so an improved node is pushed again and
/// the outdated entry is dropped when it reaches the top. An entry is live
/// while its node is still open and still has the g it was pushed with.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Entry>,
}

impl Frontier {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Push (or re-push after an improvement) the node `id`.
    pub(crate) fn push(&mut self, id: NodeId, node: &SearchNode) {
        self.heap.push(Entry {
            key: node.key(),
            g: node.g(),
            id,
        });
    }

    /// The best live node, discarding stale entries on the way.
    pub(crate) fn peek(&mut self, nodes: &[SearchNode]) -> Option<NodeId> {
        while let Some(top) = self.heap.peek() {
            let node = &nodes[top.id];
            if node.open && node.g() == top.g {
                return Some(top.id);
            }
            self.heap.pop();
        }
        None
    }

    /// Remove and return the best live node.
    pub(crate) fn pop(&mut self, nodes: &[SearchNode]) -> Option<NodeId> {
        let id = self.peek(nodes)?;
        self.heap.pop();
        Some(id)
    }

    /// Number of heap entries, stale ones included.
    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}
