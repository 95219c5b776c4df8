use crate::search::{
    frontiers::{Frontier, FrontierKey},
    NodeId,
};

/// Last in, first out. Gives depth-first order. The depth of each entry is
/// kept on its search node.
#[derive(Debug, Default)]
pub struct LifoFrontier {
    stack: Vec<NodeId>,
}

impl LifoFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for LifoFrontier {
    fn push(&mut self, node_id: NodeId, _key: FrontierKey) {
        self.stack.push(node_id);
    }

    /// Pushed in reverse so that the first generated successor is the next
    /// one popped.
    fn push_batch(&mut self, entries: Vec<(NodeId, FrontierKey)>) {
        self.stack
            .extend(entries.into_iter().rev().map(|(node_id, _)| node_id));
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }
}
