use crate::search::{costs::CostFunction, Action, HeuristicValue, PuzzleState};

/// Every move has the same price.
#[derive(Debug, Clone)]
pub struct FlatCost {
    cost: HeuristicValue,
}

impl FlatCost {
    pub fn new(cost: f64) -> Self {
        Self { cost: cost.into() }
    }
}

impl Default for FlatCost {
    fn default() -> Self {
        Self::new(2.)
    }
}

impl CostFunction for FlatCost {
    fn cost(&self, _from: &PuzzleState, _action: Action) -> HeuristicValue {
        self.cost
    }
}

/// One unit per move. Engines that do not price moves use this, so their
/// accumulated cost is the number of steps taken.
#[derive(Debug, Clone, Default)]
pub struct UnitCost;

impl CostFunction for UnitCost {
    fn cost(&self, _from: &PuzzleState, _action: Action) -> HeuristicValue {
        (1.).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn flat_cost_ignores_the_move() {
        let cost = FlatCost::default();
        for action in Action::ALL {
            assert_eq!(cost.cost(&solved_state(), action).into_inner(), 2.);
        }
        assert_eq!(UnitCost.cost(&solved_state(), Action::Up).into_inner(), 1.);
    }
}
