use crate::search::search_engines::SearchEngineName;
use thiserror::Error;

/// Errors raised when a board does not describe a valid puzzle
/// configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    #[error("expected 9 tiles, got {got}")]
    WrongLength { got: usize },

    #[error("tile {tile} is out of range (expected 0 to 8)")]
    TileOutOfRange { tile: u8 },

    #[error("tile {tile} appears more than once")]
    DuplicateTile { tile: u8 },

    #[error("cannot parse '{token}' as a tile")]
    Unparsable { token: String },
}

/// Errors raised when a search is configured with the wrong set of
/// strategies for its engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("{engine} requires a cost function")]
    MissingCostFunction { engine: SearchEngineName },

    #[error("{engine} requires a heuristic")]
    MissingHeuristic { engine: SearchEngineName },

    #[error("{engine} does not take a cost function")]
    UnexpectedCostFunction { engine: SearchEngineName },

    #[error("{engine} does not take a heuristic")]
    UnexpectedHeuristic { engine: SearchEngineName },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("invalid state: {0}")]
    InvalidState(#[from] StateError),

    #[error("invalid configuration: {0}")]
    Configuration(#[from] ConfigurationError),
}
