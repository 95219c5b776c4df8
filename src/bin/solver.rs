use clap::Parser;
use puzzlesearch::search::{
    states::random_solvable_state, validate, CostFunctionName, HeuristicName, PuzzleState,
    SearchConfig, SearchEngineName, SearchResult, Verbosity, DEFAULT_DEPTH_BOUND,
};
use rand::{rngs::SmallRng, SeedableRng};
use std::{process::ExitCode, time::Duration};
use tracing::info;

#[derive(Parser)]
#[command(version)]
/// Solve a single 8-puzzle board.
struct Cli {
    #[arg(
        help = "The initial board, as nine digits (\"123456780\") or nine \
        comma-separated tiles, with 0 for the blank",
        required_unless_present = "random",
        id = "TILES"
    )]
    initial_state: Option<PuzzleState>,
    #[arg(
        help = "Start from a random solvable board instead",
        short = 'r',
        long = "random",
        conflicts_with = "TILES"
    )]
    random: bool,
    #[arg(
        help = "The seed for random boards and successor shuffling",
        short = 's',
        long = "seed",
        id = "SEED",
        default_value_t = 0
    )]
    seed: u64,
    #[arg(
        value_enum,
        help = "The search engine to use",
        short = 'e',
        long = "engine",
        id = "ENGINE",
        default_value_t = SearchEngineName::Astar
    )]
    search_engine_name: SearchEngineName,
    #[arg(
        value_enum,
        help = "The cost function, needed by ucs and astar",
        long = "cost",
        id = "COST"
    )]
    cost_function_name: Option<CostFunctionName>,
    #[arg(
        value_enum,
        help = "The heuristic, needed by greedy and astar",
        long = "heuristic",
        id = "HEURISTIC"
    )]
    heuristic_name: Option<HeuristicName>,
    #[arg(
        help = "The depth bound for dfs",
        short = 'd',
        long = "depth-bound",
        id = "DEPTH",
        default_value_t = DEFAULT_DEPTH_BOUND
    )]
    depth_bound: usize,
    #[arg(help = "Run dfs without a depth bound", long = "no-depth-bound")]
    unbounded: bool,
    #[arg(help = "Shuffle successor order", long = "randomize")]
    randomize: bool,
    #[arg(
        help = "Give up after this long, e.g. \"30s\"",
        short = 't',
        long = "time-limit",
        id = "TIME_LIMIT",
        value_parser = humantime::parse_duration
    )]
    time_limit: Option<Duration>,
    #[arg(
        help = "Give up once the process uses this much memory",
        long = "memory-limit",
        id = "MEMORY_LIMIT_MB"
    )]
    memory_limit_mb: Option<usize>,
    #[arg(help = "Print the result as JSON", long = "json")]
    json: bool,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
    #[arg(help = "Whether to use coloured output", short = 'c', long = "colour")]
    colour: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level: tracing::Level = cli.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let mut rng = SmallRng::seed_from_u64(cli.seed);
    let initial_state = match cli.initial_state {
        Some(state) => state,
        None => random_solvable_state(&mut rng),
    };
    info!("initial state {}", initial_state);

    let mut config = SearchConfig::new(cli.search_engine_name)
        .with_randomize(cli.randomize)
        .with_depth_bound((!cli.unbounded).then_some(cli.depth_bound))
        .with_time_limit(cli.time_limit)
        .with_memory_limit_mb(cli.memory_limit_mb);
    config.cost = cli.cost_function_name;
    config.heuristic = cli.heuristic_name;

    let result = match config.search(&initial_state, &mut rng) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Some(path) = result.path() {
        match validate(path, &initial_state) {
            Ok(()) => info!("path is valid"),
            Err(e) => {
                eprintln!("path is invalid: {}", e);
                return ExitCode::FAILURE;
            }
        }
    }

    if cli.json {
        match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        print_result(&result);
    }

    if result.is_solved() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(2)
    }
}

fn print_result(result: &SearchResult) {
    match result.path() {
        Some(path) => {
            println!("Solution found:");
            for (step, state) in path.states().iter().enumerate() {
                match step.checked_sub(1).map(|i| path.actions()[i]) {
                    Some(action) => println!("{}. {}", step, action),
                    None => println!("start"),
                }
                println!("{}", state.to_grid_string());
            }
            println!("Path length: {}", result.path_length());
            println!("Cost: {}", result.cost());
        }
        None => println!("No solution found: {:?}", result.outcome()),
    }
    println!("Nodes generated: {}", result.nodes_generated());
    println!("Nodes visited: {}", result.nodes_visited());
}
