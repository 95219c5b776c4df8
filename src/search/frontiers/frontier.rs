use crate::search::{HeuristicValue, NodeId};
use std::fmt::Debug;

/// The priority of a frontier entry. Entries are popped in ascending
/// `(primary, secondary)` order; frontiers without priorities ignore it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct FrontierKey {
    pub primary: HeuristicValue,
    pub secondary: HeuristicValue,
}

impl FrontierKey {
    pub fn new(primary: HeuristicValue, secondary: HeuristicValue) -> Self {
        Self { primary, secondary }
    }
}

/// How a node's g and h values turn into its frontier key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontierOrdering {
    /// No key, the frontier's container discipline decides.
    Insertion,
    /// Ascending g.
    Cost,
    /// Ascending h.
    Heuristic,
    /// Ascending f = g + h, ties broken by ascending g.
    Combined,
}

impl FrontierOrdering {
    pub fn key(&self, g: HeuristicValue, h: HeuristicValue) -> FrontierKey {
        match self {
            FrontierOrdering::Insertion => FrontierKey::default(),
            FrontierOrdering::Cost => FrontierKey::new(g, (0.).into()),
            FrontierOrdering::Heuristic => FrontierKey::new(h, (0.).into()),
            FrontierOrdering::Combined => FrontierKey::new(g + h, g),
        }
    }

    /// Whether keys depend on the heuristic at all.
    pub fn uses_heuristic(&self) -> bool {
        matches!(
            self,
            FrontierOrdering::Heuristic | FrontierOrdering::Combined
        )
    }
}

/// The open list of a search: nodes that have been generated but not yet
/// expanded.
pub trait Frontier: Debug {
    fn push(&mut self, node_id: NodeId, key: FrontierKey);

    /// Insert the successors of one expansion, given in generation order.
    /// The default implementation pushes them one by one.
    fn push_batch(&mut self, entries: Vec<(NodeId, FrontierKey)>) {
        for (node_id, key) in entries {
            self.push(node_id, key);
        }
    }

    fn pop(&mut self) -> Option<NodeId>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
