use crate::{
    experiments::ExperimentError,
    search::{PuzzleState, SearchResult, SolutionPath},
};
use serde::Serialize;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

pub const CSV_HEADER: [&str; 10] = [
    "Part",
    "Algorithm",
    "CostFunction",
    "Heuristic",
    "InitialState",
    "Path",
    "PathLength",
    "Cost",
    "NodesGenerated",
    "NodesVisited",
];

/// One row of experiment output: a single search scored under a single cost
/// function.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperimentRecord {
    pub part: String,
    pub algorithm: String,
    pub cost_function: String,
    pub heuristic: Option<String>,
    pub initial_state: PuzzleState,
    pub path: Option<SolutionPath>,
    pub path_length: usize,
    /// Infinite when the search did not reach a goal.
    pub cost: f64,
    pub nodes_generated: u64,
    pub nodes_visited: u64,
}

impl ExperimentRecord {
    pub fn new(
        part: impl Into<String>,
        algorithm: impl Into<String>,
        cost_function: impl Into<String>,
        heuristic: Option<String>,
        initial_state: PuzzleState,
        result: &SearchResult,
        cost: f64,
    ) -> Self {
        Self {
            part: part.into(),
            algorithm: algorithm.into(),
            cost_function: cost_function.into(),
            heuristic,
            initial_state,
            path: result.path().cloned(),
            path_length: result.path_length(),
            cost,
            nodes_generated: result.nodes_generated(),
            nodes_visited: result.nodes_visited(),
        }
    }

    pub fn is_solved(&self) -> bool {
        self.path.is_some()
    }

    fn fields(&self) -> [String; 10] {
        [
            self.part.clone(),
            self.algorithm.clone(),
            self.cost_function.clone(),
            self.heuristic.clone().unwrap_or_default(),
            self.initial_state.to_string(),
            self.path
                .as_ref()
                .map(SolutionPath::to_compact_string)
                .unwrap_or_default(),
            self.path_length.to_string(),
            if self.cost.is_finite() {
                self.cost.to_string()
            } else {
                String::new()
            },
            self.nodes_generated.to_string(),
            self.nodes_visited.to_string(),
        ]
    }
}

/// Quote a field if it holds a separator, a quote or a line break.
fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn write_row<W: Write>(writer: &mut W, fields: &[impl AsRef<str>]) -> std::io::Result<()> {
    let line = fields
        .iter()
        .map(|f| escape_field(f.as_ref()))
        .collect::<Vec<_>>()
        .join(",");
    writeln!(writer, "{}", line)
}

/// Streams records as CSV rows, header first.
#[derive(Debug)]
pub struct RecordWriter<W: Write> {
    inner: BufWriter<W>,
}

impl RecordWriter<File> {
    pub fn create(path: &Path) -> Result<Self, ExperimentError> {
        let file = File::create(path)
            .map_err(|e| ExperimentError::io(format!("create {}", path.display()), e))?;
        Self::new(file)
    }
}

impl<W: Write> RecordWriter<W> {
    pub fn new(writer: W) -> Result<Self, ExperimentError> {
        let mut inner = BufWriter::new(writer);
        write_row(&mut inner, &CSV_HEADER)
            .map_err(|e| ExperimentError::io("write csv header", e))?;
        Ok(Self { inner })
    }

    pub fn write(&mut self, record: &ExperimentRecord) -> Result<(), ExperimentError> {
        write_row(&mut self.inner, &record.fields())
            .map_err(|e| ExperimentError::io("write csv record", e))
    }

    pub fn finish(mut self) -> Result<W, ExperimentError> {
        self.inner
            .flush()
            .map_err(|e| ExperimentError::io("flush csv output", e))?;
        self.inner
            .into_inner()
            .map_err(|e| ExperimentError::io("flush csv output", e.into_error()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        search::{CostFunctionName, SearchConfig, SearchEngineName},
        test_utils::*,
    };

    fn record() -> ExperimentRecord {
        let state = one_move_state();
        let result = run(
            &SearchConfig::new(SearchEngineName::Ucs).with_cost(CostFunctionName::Flat),
            &state,
        );
        ExperimentRecord::new("Part1", "A3", "C1", None, state, &result, result.cost())
    }

    #[test]
    fn escape_field_quotes_separators() {
        assert_eq!(escape_field("A1"), "A1");
        assert_eq!(escape_field("1,2"), "\"1,2\"");
        assert_eq!(escape_field("a\"b"), "\"a\"\"b\"");
    }

    #[test]
    fn writes_header_and_rows() {
        let mut writer = RecordWriter::new(Vec::new()).unwrap();
        writer.write(&record()).unwrap();
        let output = String::from_utf8(writer.finish().unwrap()).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], CSV_HEADER.join(","));
        let record = record();
        assert_eq!(
            lines[1],
            format!(
                "Part1,A3,C1,,\"1,2,3,4,5,0,7,8,6\",\
                 \"1,2,3,4,5,0,7,8,6|1,2,3,4,5,6,7,8,0\",2,2,{},{}",
                record.nodes_generated, record.nodes_visited
            )
        );
    }

    #[test]
    fn unsolved_record_leaves_cost_empty() {
        let state = unsolvable_state();
        let result = run(
            &SearchConfig::new(SearchEngineName::Dfs).with_depth_bound(Some(0)),
            &state,
        );
        let record =
            ExperimentRecord::new("Part1", "A2", "C1", None, state, &result, result.cost());
        assert!(!record.is_solved());
        let fields = record.fields();
        assert_eq!(fields[5], "");
        assert_eq!(fields[6], "0");
        assert_eq!(fields[7], "");
    }

    #[test]
    fn create_writes_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.csv");
        let mut writer = RecordWriter::create(&path).unwrap();
        writer.write(&record()).unwrap();
        writer.finish().unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("Part,Algorithm,"));
        assert_eq!(text.lines().count(), 2);
    }
}
