use crate::search::SearchError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExperimentError {
    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid experiment config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("invalid time limit: {0}")]
    TimeLimit(#[from] humantime::DurationError),

    #[error(transparent)]
    Search(#[from] SearchError),
}

impl ExperimentError {
    pub(crate) fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            operation: operation.into(),
            source,
        }
    }
}
