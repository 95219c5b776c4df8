use crate::search::{costs::CostFunction, Action, HeuristicValue, PuzzleState};

/// Prices a move by the axis the blank travels along.
#[derive(Debug, Clone)]
pub struct AxisWeightedCost {
    vertical: HeuristicValue,
    horizontal: HeuristicValue,
}

impl AxisWeightedCost {
    pub fn new(vertical: f64, horizontal: f64) -> Self {
        Self {
            vertical: vertical.into(),
            horizontal: horizontal.into(),
        }
    }

    pub fn vertical_cheap() -> Self {
        Self::new(2., 3.)
    }

    pub fn horizontal_cheap() -> Self {
        Self::new(3., 2.)
    }
}

impl CostFunction for AxisWeightedCost {
    fn cost(&self, _from: &PuzzleState, action: Action) -> HeuristicValue {
        if action.is_vertical() {
            self.vertical
        } else {
            self.horizontal
        }
    }
}
