//! A solution path is the sequence of states a search walked from the
//! initial state to a goal, together with the actions taken between them.

use crate::search::{costs::CostFunction, Action, HeuristicValue, PuzzleState};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolutionPath {
    states: Vec<PuzzleState>,
    actions: Vec<Action>,
}

impl SolutionPath {
    /// Build a path from its states and the actions between them. Returns
    /// `None` unless there is at least one state and exactly one action
    /// fewer than states.
    pub fn new(states: Vec<PuzzleState>, actions: Vec<Action>) -> Option<Self> {
        if states.is_empty() || states.len() != actions.len() + 1 {
            return None;
        }
        Some(Self { states, actions })
    }

    pub fn states(&self) -> &[PuzzleState] {
        &self.states
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Number of states on the path, including the initial state. Never
    /// zero.
    pub fn num_states(&self) -> usize {
        self.states.len()
    }

    /// Number of moves on the path.
    pub fn num_steps(&self) -> usize {
        self.actions.len()
    }

    pub fn initial_state(&self) -> &PuzzleState {
        &self.states[0]
    }

    pub fn final_state(&self) -> &PuzzleState {
        &self.states[self.states.len() - 1]
    }

    /// Price the path with a cost function after the fact, summing the cost
    /// of each move from the state it was taken in.
    pub fn cost_under(&self, cost_function: &dyn CostFunction) -> HeuristicValue {
        self.states
            .iter()
            .zip(self.actions.iter())
            .map(|(state, &action)| cost_function.cost(state, action))
            .fold((0.).into(), |total, cost| total + cost)
    }

    /// All states joined by `|`, each written as comma-separated tiles.
    pub fn to_compact_string(&self) -> String {
        self.states
            .iter()
            .map(|state| state.to_string())
            .collect::<Vec<_>>()
            .join("|")
    }
}
