use crate::{
    experiments::{
        ExperimentConfig, ExperimentError, ExperimentPart, ExperimentRecord, ExperimentSummary,
        RecordWriter,
    },
    search::{
        states::{random_solvable_state, scrambled_state},
        CostFunctionName, HeuristicName, PuzzleState, SearchConfig, SearchEngineName,
        SearchResult,
    },
};
use rand::{rngs::SmallRng, SeedableRng};
use std::{io::Write, time::Duration};
use strum::IntoEnumIterator;

/// Runs the configured experiment parts, streaming every row to the CSV
/// output as it is produced.
#[derive(Debug)]
pub struct ExperimentRunner<'a, W: Write> {
    config: &'a ExperimentConfig,
    depth_bound: Option<usize>,
    time_limit: Option<Duration>,
    rng: SmallRng,
    writer: RecordWriter<W>,
    records: Vec<ExperimentRecord>,
}

impl<'a, W: Write> ExperimentRunner<'a, W> {
    pub fn new(
        config: &'a ExperimentConfig,
        writer: RecordWriter<W>,
    ) -> Result<Self, ExperimentError> {
        Ok(Self {
            config,
            depth_bound: config.effective_depth_bound(),
            time_limit: config.parsed_time_limit()?,
            rng: SmallRng::seed_from_u64(config.seed),
            writer,
            records: Vec::new(),
        })
    }

    /// Run every configured part in order, returning the rows and the
    /// flushed output.
    pub fn run(mut self) -> Result<(Vec<ExperimentRecord>, W), ExperimentError> {
        for part in self.config.parts.clone() {
            let before = self.records.len();
            tracing::info!("running {}", part.label());
            match part {
                ExperimentPart::Part1 => self.run_uninformed()?,
                ExperimentPart::Part2 => self.run_ucs_vs_astar()?,
                ExperimentPart::Part3 => self.run_greedy_vs_astar()?,
                ExperimentPart::Part4 => self.run_randomized()?,
            }
            tracing::info!(
                "{} finished with {} rows",
                part.label(),
                self.records.len() - before
            );
        }
        let output = self.writer.finish()?;
        Ok((self.records, output))
    }

    fn initial_state(&mut self) -> PuzzleState {
        match self.config.scramble_moves {
            Some(moves) => scrambled_state(&mut self.rng, moves),
            None => random_solvable_state(&mut self.rng),
        }
    }

    fn search(
        &mut self,
        config: SearchConfig,
        state: &PuzzleState,
    ) -> Result<SearchResult, ExperimentError> {
        let config = config
            .with_depth_bound(self.depth_bound)
            .with_time_limit(self.time_limit);
        let result = config.search(state, &mut self.rng)?;
        tracing::debug!(
            "{} on {}: {:?}, cost {}, {} visited",
            config.engine,
            state,
            result.outcome(),
            result.cost(),
            result.nodes_visited()
        );
        Ok(result)
    }

    fn push(&mut self, record: ExperimentRecord) -> Result<(), ExperimentError> {
        self.writer.write(&record)?;
        self.records.push(record);
        Ok(())
    }

    /// One row for a search that ran under `cost`.
    fn record_direct(
        &mut self,
        part: ExperimentPart,
        algorithm: &str,
        cost: CostFunctionName,
        heuristic: Option<HeuristicName>,
        state: PuzzleState,
        result: &SearchResult,
    ) -> Result<(), ExperimentError> {
        self.push(ExperimentRecord::new(
            part.label(),
            algorithm,
            cost.label(),
            heuristic.map(|h| h.label().to_string()),
            state,
            result,
            result.cost(),
        ))
    }

    /// One row per cost function for a search that ignores costs, each
    /// scoring the found path after the fact.
    fn record_scored(
        &mut self,
        part: ExperimentPart,
        algorithm: &str,
        heuristic: Option<HeuristicName>,
        state: PuzzleState,
        result: &SearchResult,
    ) -> Result<(), ExperimentError> {
        for cost in CostFunctionName::iter() {
            let cost_function = cost.create();
            let path_cost = result.path().map_or(f64::INFINITY, |path| {
                path.cost_under(cost_function.as_ref()).into_inner()
            });
            self.push(ExperimentRecord::new(
                part.label(),
                algorithm,
                cost.label(),
                heuristic.map(|h| h.label().to_string()),
                state,
                result,
                path_cost,
            ))?;
        }
        Ok(())
    }

    fn run_ucs(
        &mut self,
        part: ExperimentPart,
        state: PuzzleState,
    ) -> Result<(), ExperimentError> {
        for cost in CostFunctionName::iter() {
            let config = SearchConfig::new(SearchEngineName::Ucs).with_cost(cost);
            let result = self.search(config, &state)?;
            self.record_direct(part, SearchEngineName::Ucs.label(), cost, None, state, &result)?;
        }
        Ok(())
    }

    fn run_astar(
        &mut self,
        part: ExperimentPart,
        state: PuzzleState,
    ) -> Result<(), ExperimentError> {
        for cost in CostFunctionName::iter() {
            for heuristic in HeuristicName::iter() {
                let config = SearchConfig::new(SearchEngineName::Astar)
                    .with_cost(cost)
                    .with_heuristic(heuristic);
                let result = self.search(config, &state)?;
                self.record_direct(
                    part,
                    SearchEngineName::Astar.label(),
                    cost,
                    Some(heuristic),
                    state,
                    &result,
                )?;
            }
        }
        Ok(())
    }

    fn run_uninformed(&mut self) -> Result<(), ExperimentError> {
        let part = ExperimentPart::Part1;
        for _ in 0..self.config.runs_per_part {
            let state = self.initial_state();
            for engine in [SearchEngineName::Bfs, SearchEngineName::Dfs] {
                let result = self.search(SearchConfig::new(engine), &state)?;
                self.record_scored(part, engine.label(), None, state, &result)?;
            }
            self.run_ucs(part, state)?;
        }
        Ok(())
    }

    fn run_ucs_vs_astar(&mut self) -> Result<(), ExperimentError> {
        let part = ExperimentPart::Part2;
        for _ in 0..self.config.runs_per_part {
            let state = self.initial_state();
            self.run_ucs(part, state)?;
            self.run_astar(part, state)?;
        }
        Ok(())
    }

    fn run_greedy_vs_astar(&mut self) -> Result<(), ExperimentError> {
        let part = ExperimentPart::Part3;
        for _ in 0..self.config.runs_per_part {
            let state = self.initial_state();
            for heuristic in HeuristicName::iter() {
                let config = SearchConfig::new(SearchEngineName::Greedy).with_heuristic(heuristic);
                let result = self.search(config, &state)?;
                self.record_scored(
                    part,
                    SearchEngineName::Greedy.label(),
                    Some(heuristic),
                    state,
                    &result,
                )?;
            }
            self.run_astar(part, state)?;
        }
        Ok(())
    }

    fn run_randomized(&mut self) -> Result<(), ExperimentError> {
        let part = ExperimentPart::Part4;
        for _ in 0..self.config.randomized_runs {
            let state = self.initial_state();
            for _ in 0..self.config.randomized_repetitions {
                for engine in [SearchEngineName::Bfs, SearchEngineName::Dfs] {
                    let config = SearchConfig::new(engine).with_randomize(true);
                    let result = self.search(config, &state)?;
                    let algorithm = format!("{}-rand", engine.label());
                    self.record_scored(part, &algorithm, None, state, &result)?;
                }
            }
        }
        Ok(())
    }
}

/// Run the batch described by `config`, writing rows to `config.output`.
pub fn run_experiments(config: &ExperimentConfig) -> Result<ExperimentSummary, ExperimentError> {
    let writer = RecordWriter::create(&config.output)?;
    let (records, _) = ExperimentRunner::new(config, writer)?.run()?;
    tracing::info!(
        "wrote {} rows to {}",
        records.len(),
        config.output.display()
    );
    Ok(ExperimentSummary::from_records(&records))
}
