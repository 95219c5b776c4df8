use crate::search::{Action, HeuristicValue};
use ordered_float::Float;

/// Index of a node in its [`SearchSpace`](super::SearchSpace). Ids are
/// handed out in insertion order, starting from 0 for the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn new(id: usize) -> Self {
        Self(id)
    }

    #[inline(always)]
    pub fn id(&self) -> usize {
        self.0
    }
}

/// Parent id of the root node.
pub const NO_NODE: NodeId = NodeId(usize::MAX);

/// The status of a search node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchNodeStatus {
    /// New node, not yet opened
    New,
    /// Node is in the open list
    Open,
    /// Node has been expanded
    Closed,
}

/// A [`SearchNode`] is a node in the search tree. It holds what the search
/// knows about one occurrence of a state: how it was reached and what it
/// cost. Several nodes may hold the same state.
#[derive(Debug, Clone)]
pub struct SearchNode {
    node_id: NodeId,
    status: SearchNodeStatus,
    /// Accumulated cost from the root.
    g: HeuristicValue,
    /// Heuristic estimate of the remaining cost, zero when the search does
    /// not use a heuristic.
    h: HeuristicValue,
    /// Action that led to this node, `None` for the root.
    action: Option<Action>,
    parent_id: NodeId,
    /// Number of moves from the root.
    depth: usize,
}

impl SearchNode {
    /// Create the root of a search tree. For all other nodes see
    /// [`SearchNode::new_with_parent`].
    pub fn new_without_parent(node_id: NodeId) -> Self {
        Self {
            node_id,
            status: SearchNodeStatus::New,
            g: HeuristicValue::infinity(),
            h: HeuristicValue::infinity(),
            action: None,
            parent_id: NO_NODE,
            depth: 0,
        }
    }

    pub fn new_with_parent(node_id: NodeId, parent: &SearchNode, action: Action) -> Self {
        Self {
            node_id,
            status: SearchNodeStatus::New,
            g: HeuristicValue::infinity(),
            h: HeuristicValue::infinity(),
            action: Some(action),
            parent_id: parent.node_id,
            depth: parent.depth + 1,
        }
    }

    pub fn open(&mut self, g: HeuristicValue, h: HeuristicValue) {
        self.status = SearchNodeStatus::Open;
        self.g = g;
        self.h = h;
    }

    pub fn close(&mut self) {
        debug_assert_eq!(
            self.status,
            SearchNodeStatus::Open,
            "Node must be open to close it"
        );
        self.status = SearchNodeStatus::Closed;
    }

    pub fn get_status(&self) -> SearchNodeStatus {
        self.status
    }

    pub fn get_node_id(&self) -> NodeId {
        self.node_id
    }

    pub fn get_g(&self) -> HeuristicValue {
        self.g
    }

    pub fn get_h(&self) -> HeuristicValue {
        self.h
    }

    pub fn get_action(&self) -> Option<Action> {
        self.action
    }

    pub fn get_parent_id(&self) -> NodeId {
        self.parent_id
    }

    pub fn get_depth(&self) -> usize {
        self.depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_links_to_parent() {
        let mut root = SearchNode::new_without_parent(NodeId::new(0));
        root.open((0.).into(), (4.).into());
        assert_eq!(root.get_g().into_inner(), 0.);
        assert_eq!(root.get_h().into_inner(), 4.);
        assert_eq!(root.get_parent_id(), NO_NODE);

        let child = SearchNode::new_with_parent(NodeId::new(1), &root, Action::Left);
        assert_eq!(child.get_parent_id(), NodeId::new(0));
        assert_eq!(child.get_depth(), 1);
        assert_eq!(child.get_action(), Some(Action::Left));
        assert_eq!(child.get_status(), SearchNodeStatus::New);
    }

    #[test]
    fn open_then_close() {
        let mut node = SearchNode::new_without_parent(NodeId::new(0));
        node.open((3.).into(), (2.).into());
        assert_eq!(node.get_status(), SearchNodeStatus::Open);
        node.close();
        assert_eq!(node.get_status(), SearchNodeStatus::Closed);
    }
}
