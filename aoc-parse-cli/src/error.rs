//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// The input file could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A grammar could not be built
    #[error("Grammar error: {0}")]
    Composition(#[from] aoc_parser::CompositionError),

    /// A line of the input did not match the grammar
    #[error("Line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: aoc_parser::ParseError,
    },

    /// A required section of the input is absent
    #[error("Missing {0} section in input")]
    MissingSection(&'static str),

    /// Lines failed while running with --keep-going
    #[error("{0} line(s) failed to parse")]
    Failures(usize),
}
