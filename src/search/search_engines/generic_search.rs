//! The search loop shared by all engines. An engine is nothing more than a
//! frontier, a key rule and a duplicate policy plugged into this loop.

use crate::search::{
    costs::CostFunction,
    frontiers::{Frontier, FrontierOrdering},
    heuristics::Heuristic,
    search_engines::{
        SearchOutcome, SearchResult, SearchSpace, SearchStatistics, TerminationCondition,
    },
    HeuristicValue, PuzzleState,
};
use rand::RngCore;
use tracing::debug;

/// What to do with a successor whose state has been seen before.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Drop it. States are marked as seen when first inserted.
    SkipSeen,
    /// Insert it again if it is strictly cheaper than every earlier node for
    /// the same state, leaving the older entries to be discarded on pop.
    ReopenOnCheaper,
}

pub struct SearchParameters<'a> {
    pub ordering: FrontierOrdering,
    pub policy: DuplicatePolicy,
    pub cost_function: &'a dyn CostFunction,
    pub heuristic: &'a mut dyn Heuristic,
    /// Nodes at this depth are goal-tested but not expanded.
    pub depth_bound: Option<usize>,
    /// Shuffles successors when present.
    pub rng: Option<&'a mut dyn RngCore>,
    pub termination: TerminationCondition,
}

pub struct GenericSearch<'a, F: Frontier> {
    frontier: F,
    parameters: SearchParameters<'a>,
}

impl<'a, F: Frontier> GenericSearch<'a, F> {
    pub fn new(frontier: F, parameters: SearchParameters<'a>) -> Self {
        Self {
            frontier,
            parameters,
        }
    }

    fn evaluate(
        &mut self,
        state: &PuzzleState,
        statistics: &mut SearchStatistics,
    ) -> HeuristicValue {
        if !self.parameters.ordering.uses_heuristic() {
            return (0.).into();
        }
        statistics.increment_evaluated_nodes();
        self.parameters.heuristic.evaluate(state)
    }

    pub fn run(mut self, initial_state: &PuzzleState) -> SearchResult {
        let mut statistics = SearchStatistics::new();
        let root_h = self.evaluate(initial_state, &mut statistics);
        let mut search_space = SearchSpace::new(*initial_state, root_h);
        let root_id = search_space.get_root_node().get_node_id();
        self.frontier
            .push(root_id, self.parameters.ordering.key((0.).into(), root_h));

        loop {
            self.parameters.termination.log_if_needed();
            if let Some(outcome) = self.parameters.termination.should_terminate() {
                debug!(?outcome, "search terminated early");
                return self.finish(SearchResult::unsolved(outcome, &statistics), &statistics);
            }

            let Some(node_id) = self.frontier.pop() else {
                break;
            };
            if search_space.is_stale(node_id) {
                statistics.increment_stale_entries();
                continue;
            }
            statistics.increment_visited_nodes();

            let node = search_space.get_node(node_id);
            let g_value = node.get_g();
            let depth = node.get_depth();
            statistics.register_heuristic_value(node.get_h());
            let state = *search_space.get_state(node_id);

            if state.is_goal() {
                let path = search_space.extract_path(node_id);
                let result = SearchResult::solved(path, g_value.into_inner(), &statistics);
                return self.finish(result, &statistics);
            }

            search_space.close(node_id);
            if self
                .parameters
                .depth_bound
                .is_some_and(|bound| depth >= bound)
            {
                continue;
            }

            let successors = match self.parameters.rng.as_deref_mut() {
                Some(rng) => state.shuffled_successors(rng),
                None => state.successors(),
            };
            statistics.increment_generated_successors(successors.len());

            let mut children = Vec::with_capacity(successors.len());
            for (action, successor) in successors {
                let child_g = g_value + self.parameters.cost_function.cost(&state, action);
                let admitted = match self.parameters.policy {
                    DuplicatePolicy::SkipSeen => !search_space.is_registered(&successor),
                    DuplicatePolicy::ReopenOnCheaper => search_space
                        .best_g(&successor)
                        .map_or(true, |best_g| child_g < best_g),
                };
                if !admitted {
                    continue;
                }

                let child_h = match search_space.cached_h(&successor) {
                    Some(h_value) => {
                        if search_space.is_closed(&successor) {
                            statistics.increment_reopened_nodes();
                        }
                        h_value
                    }
                    None => self.evaluate(&successor, &mut statistics),
                };
                let child_id =
                    search_space.insert_node(successor, action, node_id, child_g, child_h);
                children.push((child_id, self.parameters.ordering.key(child_g, child_h)));
            }
            statistics.increment_generated_nodes(children.len());
            self.frontier.push_batch(children);
        }

        self.finish(
            SearchResult::unsolved(SearchOutcome::Exhausted, &statistics),
            &statistics,
        )
    }

    fn finish(&mut self, result: SearchResult, statistics: &SearchStatistics) -> SearchResult {
        statistics.finalise_search();
        self.parameters.termination.finalise();
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        search::{
            costs::CenterSurchargeCost,
            frontiers::{FrontierKey, PriorityFrontier},
            heuristics::ZeroHeuristic,
            search_engines::NodeId,
        },
        test_utils::*,
    };
    use std::{cell::Cell, rc::Rc};

    /// Priority frontier that counts successful pops.
    #[derive(Debug)]
    struct CountingFrontier {
        inner: PriorityFrontier,
        pops: Rc<Cell<u64>>,
    }

    impl Frontier for CountingFrontier {
        fn push(&mut self, node_id: NodeId, key: FrontierKey) {
            self.inner.push(node_id, key);
        }

        fn pop(&mut self) -> Option<NodeId> {
            let popped = self.inner.pop();
            if popped.is_some() {
                self.pops.set(self.pops.get() + 1);
            }
            popped
        }

        fn len(&self) -> usize {
            self.inner.len()
        }
    }

    fn cost_ordered_search<F: Frontier>(policy: DuplicatePolicy, frontier: F) -> SearchResult {
        let cost_function = CenterSurchargeCost::default();
        let mut heuristic = ZeroHeuristic::new();
        let parameters = SearchParameters {
            ordering: FrontierOrdering::Cost,
            policy,
            cost_function: &cost_function,
            heuristic: &mut heuristic,
            depth_bound: None,
            rng: None,
            termination: TerminationCondition::unlimited(),
        };
        GenericSearch::new(frontier, parameters).run(&deep_state())
    }

    #[test]
    fn stale_pops_are_not_counted_as_visits() {
        let pops = Rc::new(Cell::new(0));
        let frontier = CountingFrontier {
            inner: PriorityFrontier::new(),
            pops: pops.clone(),
        };
        let result = cost_ordered_search(DuplicatePolicy::ReopenOnCheaper, frontier);
        assert!(result.is_solved());
        assert!(result.stale_entries() > 0);
        assert_eq!(result.nodes_visited() + result.stale_entries(), pops.get());
    }

    #[test]
    fn reopen_on_cheaper_supersedes_queued_entries() {
        let reopen =
            cost_ordered_search(DuplicatePolicy::ReopenOnCheaper, PriorityFrontier::new());
        let skip = cost_ordered_search(DuplicatePolicy::SkipSeen, PriorityFrontier::new());
        assert!(reopen.is_solved());
        assert!(skip.is_solved());

        // a state first queued at a high cost is queued again once a cheaper
        // route turns up, and the older entry is dropped on pop
        assert!(reopen.stale_entries() > 0);
        // each state is queued at most once when seen states are skipped
        assert_eq!(skip.stale_entries(), 0);
        assert!(reopen.cost() <= skip.cost());
    }
}
