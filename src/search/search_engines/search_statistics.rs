use crate::search::HeuristicValue;
use ordered_float::Float;
use std::time::Instant;
use tracing::info;

#[derive(Debug)]
pub struct SearchStatistics {
    /// Number of nodes popped and goal-tested, stale entries excluded
    visited_nodes: u64,
    /// Number of successors inserted into the frontier
    generated_nodes: u64,
    /// Number of successors produced by the move generator, including those
    /// dropped as duplicates
    generated_successors: u64,
    /// Number of heuristic evaluations
    evaluated_nodes: u64,
    /// Number of states inserted again after having been expanded
    reopened_nodes: u64,
    /// Number of popped entries discarded because a cheaper node for the
    /// same state was known
    stale_entries: u64,
    /// Best heuristic value found so far
    best_heuristic_value: HeuristicValue,
    /// Time when the search started
    search_start_time: Instant,
    /// Time when the last log was printed, used for periodic logging
    last_log_time: Instant,
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchStatistics {
    pub fn new() -> Self {
        info!("starting search");
        Self {
            visited_nodes: 0,
            generated_nodes: 0,
            generated_successors: 0,
            evaluated_nodes: 0,
            reopened_nodes: 0,
            stale_entries: 0,
            best_heuristic_value: HeuristicValue::infinity(),
            search_start_time: Instant::now(),
            last_log_time: Instant::now(),
        }
    }

    pub fn register_heuristic_value(&mut self, heuristic_value: HeuristicValue) {
        if heuristic_value < self.best_heuristic_value {
            self.best_heuristic_value = heuristic_value;
            tracing::debug!(best_heuristic_value = self.best_heuristic_value.into_inner());
        }
    }

    pub fn increment_visited_nodes(&mut self) {
        self.visited_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_generated_nodes(&mut self, num_nodes: usize) {
        self.generated_nodes += num_nodes as u64;
        self.log_if_needed();
    }

    pub fn increment_generated_successors(&mut self, num_successors: usize) {
        self.generated_successors += num_successors as u64;
    }

    pub fn increment_evaluated_nodes(&mut self) {
        self.evaluated_nodes += 1;
    }

    pub fn increment_reopened_nodes(&mut self) {
        self.reopened_nodes += 1;
    }

    pub fn increment_stale_entries(&mut self) {
        self.stale_entries += 1;
        self.log_if_needed();
    }

    pub fn visited_nodes(&self) -> u64 {
        self.visited_nodes
    }

    pub fn generated_nodes(&self) -> u64 {
        self.generated_nodes
    }

    pub fn generated_successors(&self) -> u64 {
        self.generated_successors
    }

    pub fn evaluated_nodes(&self) -> u64 {
        self.evaluated_nodes
    }

    pub fn reopened_nodes(&self) -> u64 {
        self.reopened_nodes
    }

    pub fn stale_entries(&self) -> u64 {
        self.stale_entries
    }

    fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed().as_secs() > 10 {
            self.last_log_time = Instant::now();
            self.log();
        }
    }

    fn log(&self) {
        info!(
            visited_nodes = self.visited_nodes,
            generated_nodes = self.generated_nodes,
            generated_successors = self.generated_successors,
            evaluated_nodes = self.evaluated_nodes,
            reopened_nodes = self.reopened_nodes,
            stale_entries = self.stale_entries,
            best_heuristic_value = self.best_heuristic_value.into_inner(),
        );
    }

    pub fn finalise_search(&self) {
        info!("finalising search");
        self.log();
        info!(search_duration = self.search_start_time.elapsed().as_secs_f64());
    }
}
