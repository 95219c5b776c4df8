mod generic_search;
mod search_engine;
mod search_node;
mod search_space;
mod search_statistics;
mod termination_condition;

use generic_search::{DuplicatePolicy, GenericSearch, SearchParameters};
pub use search_engine::{
    search, SearchConfig, SearchEngine, SearchEngineName, SearchOutcome, SearchResult,
    DEFAULT_DEPTH_BOUND,
};
pub use search_node::{NodeId, SearchNode, SearchNodeStatus, NO_NODE};
pub use search_space::SearchSpace;
pub use search_statistics::SearchStatistics;
pub use termination_condition::TerminationCondition;
