//! Configuration resolution from CLI args

use crate::cli::{Args, Grammar};
use crate::error::CliError;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

/// Resolved runtime configuration
pub struct Config {
    /// Path the input was read from
    pub input_path: PathBuf,
    /// Contents of the input file
    pub input: String,
    /// Grammar to check the input against
    pub grammar: Grammar,
    /// Whether to continue past failing lines
    pub keep_going: bool,
    /// Quiet mode
    pub quiet: bool,
    /// Log level used unless RUST_LOG overrides it
    pub log_level: LevelFilter,
}

impl Config {
    /// Build config from CLI args, reading the input file
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let input = std::fs::read_to_string(&args.input).map_err(|source| CliError::Input {
            path: args.input.clone(),
            source,
        })?;

        Ok(Config {
            input_path: args.input,
            input,
            grammar: args.grammar,
            keep_going: args.keep_going,
            quiet: args.quiet,
            log_level: log_level(args.verbose),
        })
    }
}

/// Map the number of -v flags to a log level
fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}
