use crate::search::{
    action::NUM_CELLS,
    costs::{AxisWeightedCost, CostFunction},
    Action, HeuristicValue, PuzzleState,
};

const CENTER_CELL: usize = NUM_CELLS / 2;

/// Charges a surcharge for moves that leave the blank in the center cell.
/// The blank position is taken after the move. All other moves fall back to
/// the vertical-cheap prices.
#[derive(Debug, Clone)]
pub struct CenterSurchargeCost {
    surcharge: HeuristicValue,
    fallback: AxisWeightedCost,
}

impl CenterSurchargeCost {
    pub fn new(surcharge: f64, fallback: AxisWeightedCost) -> Self {
        Self {
            surcharge: surcharge.into(),
            fallback,
        }
    }
}

impl Default for CenterSurchargeCost {
    fn default() -> Self {
        Self::new(5., AxisWeightedCost::vertical_cheap())
    }
}

impl CostFunction for CenterSurchargeCost {
    fn cost(&self, from: &PuzzleState, action: Action) -> HeuristicValue {
        match action.target_index(from.blank_index()) {
            Some(CENTER_CELL) => self.surcharge,
            _ => self.fallback.cost(from, action),
        }
    }
}
