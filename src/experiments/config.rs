use crate::{
    experiments::ExperimentError,
    search::search_engines::DEFAULT_DEPTH_BOUND,
};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf, time::Duration};

/// The four comparisons an experiment batch can run.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum ExperimentPart {
    /// Breadth-first vs depth-first vs uniform-cost, under every cost
    /// function.
    Part1,
    /// Uniform-cost vs A* with every heuristic.
    Part2,
    /// Greedy vs A*.
    Part3,
    /// Breadth-first and depth-first with shuffled successor order.
    Part4,
}

impl ExperimentPart {
    pub const ALL: [ExperimentPart; 4] = [
        ExperimentPart::Part1,
        ExperimentPart::Part2,
        ExperimentPart::Part3,
        ExperimentPart::Part4,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ExperimentPart::Part1 => "Part1",
            ExperimentPart::Part2 => "Part2",
            ExperimentPart::Part3 => "Part3",
            ExperimentPart::Part4 => "Part4",
        }
    }
}

fn default_seed() -> u64 {
    42
}

fn default_output() -> PathBuf {
    PathBuf::from("results.csv")
}

fn default_runs_per_part() -> usize {
    30
}

fn default_randomized_runs() -> usize {
    15
}

fn default_randomized_repetitions() -> usize {
    10
}

fn default_parts() -> Vec<ExperimentPart> {
    ExperimentPart::ALL.to_vec()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ExperimentConfig {
    /// Seed for initial states and successor shuffling.
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Where the CSV rows are written.
    #[serde(default = "default_output")]
    pub output: PathBuf,
    /// Initial states drawn for each of parts 1 to 3.
    #[serde(default = "default_runs_per_part")]
    pub runs_per_part: usize,
    /// Initial states drawn for part 4.
    #[serde(default = "default_randomized_runs")]
    pub randomized_runs: usize,
    /// Shuffled searches per initial state in part 4.
    #[serde(default = "default_randomized_repetitions")]
    pub randomized_repetitions: usize,
    /// Depth bound for depth-first search. Ignored when `unbounded-depth` is
    /// set.
    #[serde(default)]
    pub depth_bound: Option<usize>,
    #[serde(default)]
    pub unbounded_depth: bool,
    /// Draw initial states as random walks of this many moves from the goal
    /// instead of uniformly among solvable boards.
    #[serde(default)]
    pub scramble_moves: Option<usize>,
    /// Per-search time limit in humantime notation, e.g. `"30s"`.
    #[serde(default)]
    pub time_limit: Option<String>,
    #[serde(default = "default_parts")]
    pub parts: Vec<ExperimentPart>,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            output: default_output(),
            runs_per_part: default_runs_per_part(),
            randomized_runs: default_randomized_runs(),
            randomized_repetitions: default_randomized_repetitions(),
            depth_bound: None,
            unbounded_depth: false,
            scramble_moves: None,
            time_limit: None,
            parts: default_parts(),
        }
    }
}

impl ExperimentConfig {
    pub fn from_toml(text: &str) -> Result<Self, ExperimentError> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, ExperimentError> {
        let text = fs::read_to_string(path)
            .map_err(|e| ExperimentError::io(format!("read {}", path.display()), e))?;
        Self::from_toml(&text)
    }

    /// The depth bound handed to depth-first search.
    pub fn effective_depth_bound(&self) -> Option<usize> {
        if self.unbounded_depth {
            None
        } else {
            Some(self.depth_bound.unwrap_or(DEFAULT_DEPTH_BOUND))
        }
    }

    pub fn parsed_time_limit(&self) -> Result<Option<Duration>, ExperimentError> {
        self.time_limit
            .as_deref()
            .map(humantime::parse_duration)
            .transpose()
            .map_err(ExperimentError::from)
    }
}
