use crate::search::{Heuristic, HeuristicValue, PuzzleState};

/// Used by engines that do not order their frontier by an estimate.
#[derive(Clone, Debug, Default)]
pub struct ZeroHeuristic {}

impl ZeroHeuristic {
    pub fn new() -> Self {
        ZeroHeuristic {}
    }
}

impl Heuristic for ZeroHeuristic {
    fn evaluate(&mut self, _state: &PuzzleState) -> HeuristicValue {
        (0.).into()
    }
}
