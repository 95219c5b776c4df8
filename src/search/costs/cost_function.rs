use crate::search::{
    costs::{AxisWeightedCost, CenterSurchargeCost, FlatCost},
    Action, HeuristicValue, PuzzleState,
};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

pub trait CostFunction: Debug {
    /// The cost of applying `action` to the state `from`. Must be
    /// non-negative.
    fn cost(&self, from: &PuzzleState, action: Action) -> HeuristicValue;
}

#[derive(
    clap::ValueEnum,
    strum_macros::Display,
    strum_macros::EnumIter,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[clap(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum CostFunctionName {
    #[clap(help = "Every move costs 2.")]
    Flat,
    #[clap(help = "Vertical moves cost 2, horizontal moves cost 3.")]
    VerticalCheap,
    #[clap(help = "Vertical moves cost 3, horizontal moves cost 2.")]
    HorizontalCheap,
    #[clap(help = "Moves that leave the blank in the center cost 5, \
        all others are priced as vertical-cheap.")]
    CenterSurcharge,
}

impl CostFunctionName {
    pub fn create(&self) -> Box<dyn CostFunction> {
        match self {
            CostFunctionName::Flat => Box::new(FlatCost::default()),
            CostFunctionName::VerticalCheap => Box::new(AxisWeightedCost::vertical_cheap()),
            CostFunctionName::HorizontalCheap => Box::new(AxisWeightedCost::horizontal_cheap()),
            CostFunctionName::CenterSurcharge => Box::new(CenterSurchargeCost::default()),
        }
    }

    /// The short label used in experiment tables.
    pub fn label(&self) -> &'static str {
        match self {
            CostFunctionName::Flat => "C1",
            CostFunctionName::VerticalCheap => "C2",
            CostFunctionName::HorizontalCheap => "C3",
            CostFunctionName::CenterSurcharge => "C4",
        }
    }
}
