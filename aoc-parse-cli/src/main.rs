//! AOC Parse - Command-line interface for checking puzzle input against a grammar

mod cli;
mod config;
mod error;
mod executor;
mod grammar;
mod output;

use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use executor::Executor;
use output::OutputFormatter;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;
    init_tracing(config.log_level);

    info!(
        path = %config.input_path.display(),
        grammar = ?config.grammar,
        keep_going = config.keep_going,
        "parsing input"
    );

    let formatter = OutputFormatter::new(config.quiet);
    let results = Executor::new(&config).execute(|result| formatter.print_result(result))?;
    formatter.print_summary(&results);

    match results.iter().filter(|r| r.answer.is_err()).count() {
        0 => Ok(()),
        failed => Err(CliError::Failures(failed)),
    }
}

/// Log to stderr at `level`, unless RUST_LOG says otherwise
fn init_tracing(level: LevelFilter) {
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true),
        )
        .with(filter)
        .init();
}
