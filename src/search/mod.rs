mod action;
pub mod costs;
mod error;
pub mod frontiers;
mod goal;
pub mod heuristics;
mod path;
pub mod search_engines;
pub mod states;
mod validate;
mod verbosity;

pub use action::{Action, GRID_WIDTH, NUM_CELLS};
pub use costs::{CostFunction, CostFunctionName};
pub use error::{ConfigurationError, SearchError, StateError};
pub use goal::{goal_cells, goal_states, is_goal_tiles};
pub use heuristics::{Heuristic, HeuristicName, HeuristicValue};
pub use path::SolutionPath;
pub use search_engines::{
    search, NodeId, SearchConfig, SearchEngine, SearchEngineName, SearchNode, SearchOutcome,
    SearchResult, SearchSpace, SearchStatistics, TerminationCondition, DEFAULT_DEPTH_BOUND,
};
pub use states::PuzzleState;
pub use validate::validate;
pub use verbosity::Verbosity;
