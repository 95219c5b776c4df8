use crate::search::{
    frontiers::{Frontier, FrontierKey},
    NodeId,
};
use std::collections::VecDeque;

/// First in, first out. Gives breadth-first order.
#[derive(Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<NodeId>,
}

impl FifoFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for FifoFrontier {
    fn push(&mut self, node_id: NodeId, _key: FrontierKey) {
        self.queue.push_back(node_id);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}
