use crate::search::{
    heuristics::{GridDistance, MisplacedTiles},
    PuzzleState,
};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

pub type HeuristicValue = OrderedFloat<f64>;

pub trait Heuristic: Debug {
    /// Estimate the remaining cost from the given state to a goal.
    fn evaluate(&mut self, state: &PuzzleState) -> HeuristicValue;
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
pub enum HeuristicName {
    #[clap(help = "Twice the number of tiles out of their canonical place.")]
    MisplacedTiles,
    #[clap(help = "Twice the summed Manhattan distance of each tile to its \
        nearest goal cell.")]
    GridDistance,
}

impl HeuristicName {
    pub fn create(&self) -> Box<dyn Heuristic> {
        match self {
            HeuristicName::MisplacedTiles => Box::new(MisplacedTiles::default()),
            HeuristicName::GridDistance => Box::new(GridDistance::default()),
        }
    }

    /// The short label used in experiment tables.
    pub fn label(&self) -> &'static str {
        match self {
            HeuristicName::MisplacedTiles => "H1",
            HeuristicName::GridDistance => "H2",
        }
    }
}
