mod grid_distance;
mod heuristic;
mod misplaced_tiles;
mod zero_heuristic;

pub use grid_distance::GridDistance;
pub use heuristic::{Heuristic, HeuristicName, HeuristicValue};
pub use misplaced_tiles::MisplacedTiles;
pub use zero_heuristic::ZeroHeuristic;
