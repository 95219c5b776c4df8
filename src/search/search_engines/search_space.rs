use crate::search::{
    search_engines::{NodeId, SearchNode, SearchNodeStatus, NO_NODE},
    Action, HeuristicValue, PuzzleState, SolutionPath,
};
use segvec::{Linear, SegVec};
use std::collections::HashMap;

/// What the search knows about a state across all nodes that hold it.
#[derive(Debug, Clone, Copy)]
struct StateRecord {
    /// Cheapest g of any node holding this state.
    best_g: HeuristicValue,
    /// Heuristic value, computed once per state.
    h: HeuristicValue,
    /// Whether some node holding this state has been expanded.
    closed: bool,
}

/// A [`SearchSpace`] owns the search tree of a single search. Nodes live in
/// an arena and refer to their parents by [`NodeId`], so the tree holds no
/// reference cycles and is freed in one go when the search returns.
///
/// Unlike nodes, states are registered once. The registry remembers the
/// cheapest cost seen for each state, which is what lets a popped node be
/// recognised as superseded.
#[derive(Debug)]
pub struct SearchSpace {
    root_node_id: NodeId,
    nodes: SegVec<SearchNode, Linear>,
    states: SegVec<PuzzleState, Linear>,
    registered_states: HashMap<PuzzleState, StateRecord>,
}

impl SearchSpace {
    /// Create a search space holding only the root, opened with g = 0.
    pub fn new(initial_state: PuzzleState, h: HeuristicValue) -> Self {
        let mut nodes = SegVec::new();
        let mut states = SegVec::new();
        let mut registered_states = HashMap::new();

        let root_node_id = NodeId::new(0);
        let mut root_node = SearchNode::new_without_parent(root_node_id);
        root_node.open((0.).into(), h);
        registered_states.insert(
            initial_state,
            StateRecord {
                best_g: (0.).into(),
                h,
                closed: false,
            },
        );
        nodes.push(root_node);
        states.push(initial_state);

        Self {
            root_node_id,
            nodes,
            states,
            registered_states,
        }
    }

    /// Add a new open node for `state`, reached from `parent_id` via
    /// `action` at cost `g`. The state's best known cost is lowered to `g`
    /// if it improves on it.
    pub fn insert_node(
        &mut self,
        state: PuzzleState,
        action: Action,
        parent_id: NodeId,
        g: HeuristicValue,
        h: HeuristicValue,
    ) -> NodeId {
        let node_id = NodeId::new(self.nodes.len());
        let mut node = SearchNode::new_with_parent(node_id, self.get_node(parent_id), action);
        node.open(g, h);
        self.nodes.push(node);
        self.states.push(state);

        self.registered_states
            .entry(state)
            .and_modify(|record| {
                if g < record.best_g {
                    record.best_g = g;
                }
            })
            .or_insert(StateRecord {
                best_g: g,
                h,
                closed: false,
            });
        node_id
    }

    /// Mark a node as expanded.
    pub fn close(&mut self, node_id: NodeId) {
        self.get_node_mut(node_id).close();
        let state = *self.get_state(node_id);
        if let Some(record) = self.registered_states.get_mut(&state) {
            record.closed = true;
        }
    }

    /// Whether any node has ever held this state.
    pub fn is_registered(&self, state: &PuzzleState) -> bool {
        self.registered_states.contains_key(state)
    }

    /// Whether any node holding this state has been expanded.
    pub fn is_closed(&self, state: &PuzzleState) -> bool {
        self.registered_states
            .get(state)
            .is_some_and(|record| record.closed)
    }

    pub fn best_g(&self, state: &PuzzleState) -> Option<HeuristicValue> {
        self.registered_states.get(state).map(|record| record.best_g)
    }

    /// The heuristic value recorded when the state was first registered.
    pub fn cached_h(&self, state: &PuzzleState) -> Option<HeuristicValue> {
        self.registered_states.get(state).map(|record| record.h)
    }

    /// A node is stale once a cheaper node for the same state has been
    /// inserted. Stale nodes are left in the frontier and skipped on pop.
    pub fn is_stale(&self, node_id: NodeId) -> bool {
        let node = self.get_node(node_id);
        if node.get_status() == SearchNodeStatus::Closed {
            return true;
        }
        self.best_g(self.get_state(node_id))
            .is_some_and(|best_g| best_g < node.get_g())
    }

    /// Walk the parent links from `node_id` back to the root. Works for any
    /// node, not only goal nodes.
    pub fn extract_path(&self, node_id: NodeId) -> SolutionPath {
        let mut states = vec![];
        let mut actions = vec![];
        let mut current_node = self.get_node(node_id);
        loop {
            states.push(*self.get_state(current_node.get_node_id()));
            match current_node.get_action() {
                Some(action) => actions.push(action),
                None => break,
            }
            if NO_NODE == current_node.get_parent_id() {
                break;
            }
            current_node = self.get_node(current_node.get_parent_id());
        }
        states.reverse();
        actions.reverse();
        SolutionPath::new(states, actions).expect("Extracted path is never empty")
    }

    #[inline(always)]
    pub fn get_root_node(&self) -> &SearchNode {
        self.get_node(self.root_node_id)
    }

    #[inline(always)]
    pub fn get_node(&self, node_id: NodeId) -> &SearchNode {
        self.nodes.get(node_id.id()).expect("Invalid node id")
    }

    #[inline(always)]
    pub fn get_node_mut(&mut self, node_id: NodeId) -> &mut SearchNode {
        self.nodes.get_mut(node_id.id()).expect("Invalid node id")
    }

    #[inline(always)]
    pub fn get_state(&self, node_id: NodeId) -> &PuzzleState {
        self.states.get(node_id.id()).expect("Invalid node id")
    }

    /// Number of nodes in the tree, including stale ones.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Number of distinct states seen.
    pub fn num_states(&self) -> usize {
        self.registered_states.len()
    }
}
