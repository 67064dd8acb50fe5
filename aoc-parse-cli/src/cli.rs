//! CLI argument parsing using clap

use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// Grammar the input file is checked against
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum Grammar {
    /// A single line of `L`/`R` directions
    Directions,
    /// One `AAA = (BBB, CCC)` node per line
    Nodes,
    /// Directions, a blank line, then node lines (default)
    #[default]
    Network,
}

/// Parse Advent of Code puzzle input with typed parser combinators
#[derive(Parser, Debug)]
#[command(name = "aoc-parse", about = "Check puzzle input against a line grammar", version)]
pub struct Args {
    /// Puzzle input file
    pub input: PathBuf,

    /// Grammar to parse the input with
    #[arg(short, long, value_enum, default_value = "network")]
    pub grammar: Grammar,

    /// Report failing lines and continue instead of stopping at the first one
    #[arg(short, long)]
    pub keep_going: bool,

    /// Quiet mode - only output parsed values
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
