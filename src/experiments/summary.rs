use crate::experiments::ExperimentRecord;
use itertools::Itertools;
use serde::Serialize;
use std::fmt::{self, Display, Formatter};

/// Cost statistics for one (part, algorithm) group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlgorithmSummary {
    pub part: String,
    pub algorithm: String,
    /// Rows in the group, solved or not.
    pub runs: usize,
    /// Rows that reached a goal; the cost statistics cover only these.
    pub solved: usize,
    pub mean_cost: Option<f64>,
    pub min_cost: Option<f64>,
    pub max_cost: Option<f64>,
}

impl AlgorithmSummary {
    fn from_group(part: String, algorithm: String, records: &[&ExperimentRecord]) -> Self {
        let costs: Vec<f64> = records
            .iter()
            .filter(|record| record.is_solved())
            .map(|record| record.cost)
            .collect();
        let mean_cost = if costs.is_empty() {
            None
        } else {
            Some(costs.iter().sum::<f64>() / costs.len() as f64)
        };
        Self {
            part,
            algorithm,
            runs: records.len(),
            solved: costs.len(),
            mean_cost,
            min_cost: costs.iter().copied().reduce(f64::min),
            max_cost: costs.iter().copied().reduce(f64::max),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExperimentSummary {
    groups: Vec<AlgorithmSummary>,
}

impl ExperimentSummary {
    pub fn from_records(records: &[ExperimentRecord]) -> Self {
        let groups = records
            .iter()
            .into_group_map_by(|record| (record.part.clone(), record.algorithm.clone()))
            .into_iter()
            .sorted_by(|(a, _), (b, _)| a.cmp(b))
            .map(|((part, algorithm), group)| {
                AlgorithmSummary::from_group(part, algorithm, &group)
            })
            .collect();
        Self { groups }
    }

    pub fn groups(&self) -> &[AlgorithmSummary] {
        &self.groups
    }

    pub fn get(&self, part: &str, algorithm: &str) -> Option<&AlgorithmSummary> {
        self.groups
            .iter()
            .find(|group| group.part == part && group.algorithm == algorithm)
    }
}

fn format_cost(cost: Option<f64>) -> String {
    cost.map_or_else(|| "-".to_string(), |cost| format!("{:.2}", cost))
}

impl Display for ExperimentSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<6} {:<10} {:>6} {:>6} {:>10} {:>8} {:>8}",
            "part", "algorithm", "runs", "solved", "mean", "min", "max"
        )?;
        for group in &self.groups {
            writeln!(
                f,
                "{:<6} {:<10} {:>6} {:>6} {:>10} {:>8} {:>8}",
                group.part,
                group.algorithm,
                group.runs,
                group.solved,
                format_cost(group.mean_cost),
                format_cost(group.min_cost),
                format_cost(group.max_cost),
            )?;
        }
        Ok(())
    }
}
