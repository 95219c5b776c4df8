mod config;
mod error;
mod records;
mod runner;
mod summary;

pub use config::{ExperimentConfig, ExperimentPart};
pub use error::ExperimentError;
pub use records::{ExperimentRecord, RecordWriter, CSV_HEADER};
pub use runner::{run_experiments, ExperimentRunner};
pub use summary::{AlgorithmSummary, ExperimentSummary};
