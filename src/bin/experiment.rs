use clap::Parser;
use puzzlesearch::{
    experiments::{run_experiments, ExperimentConfig},
    search::Verbosity,
};
use std::{path::PathBuf, process::ExitCode};
use tracing::info;

#[derive(Parser)]
#[command(version)]
/// Run a batch of 8-puzzle search experiments and write the results as CSV.
struct Cli {
    #[arg(help = "The TOML experiment config; defaults are used when omitted")]
    config: Option<PathBuf>,
    #[arg(
        help = "The output CSV file, overriding the config",
        short = 'o',
        long = "output",
        id = "OUTPUT"
    )]
    output: Option<PathBuf>,
    #[arg(
        help = "The seed, overriding the config",
        short = 's',
        long = "seed",
        id = "SEED"
    )]
    seed: Option<u64>,
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

    let mut config = match cli.config.as_deref().map(ExperimentConfig::from_path) {
        Some(Ok(config)) => config,
        Some(Err(e)) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
        None => ExperimentConfig::default(),
    };
    if let Some(output) = cli.output {
        config.output = output;
    }
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    info!("experiment config {:?}", config);

    match run_experiments(&config) {
        Ok(summary) => {
            print!("{}", summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
