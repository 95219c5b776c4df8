use crate::search::{
    frontiers::{Frontier, FrontierKey},
    NodeId,
};
use priority_queue::PriorityQueue;
use std::cmp::Reverse;

/// Pops the entry with the smallest key. Node ids grow with insertion, so
/// adding the id to the priority makes equal keys pop oldest first.
///
/// Every insertion is a fresh node, so a state whose cost improves is
/// pushed again rather than updated in place. The search discards the
/// outdated entry when it is eventually popped.
#[derive(Debug, Default)]
pub struct PriorityFrontier {
    queue: PriorityQueue<NodeId, Reverse<(FrontierKey, NodeId)>>,
}

impl PriorityFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for PriorityFrontier {
    fn push(&mut self, node_id: NodeId, key: FrontierKey) {
        self.queue.push(node_id, Reverse((key, node_id)));
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop().map(|(node_id, _)| node_id)
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}
