//! Line-by-line executor for checking input against a grammar

use crate::cli::Grammar;
use crate::config::Config;
use crate::error::CliError;
use crate::grammar::{InputGrammar, NodeShape, first_content_line, input_grammar, split_network};
use aoc_parser::{ParseError, Parser};
use chrono::TimeDelta;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Result from parsing a single line
pub struct LineResult {
    /// 1-based line number in the input file
    pub line: usize,
    pub answer: Result<String, ParseError>,
    pub parse_duration: TimeDelta,
}

/// Runs the configured grammar over the input
pub struct Executor<'c> {
    config: &'c Config,
}

impl<'c> Executor<'c> {
    pub fn new(config: &'c Config) -> Self {
        Self { config }
    }

    /// Parse every line, handing each result to `on_result` as soon as it is known
    ///
    /// Without `--keep-going` the first failing line aborts the run with
    /// [`CliError::Line`]. With it, failures are logged and recorded.
    pub fn execute(
        &self,
        on_result: impl FnMut(&LineResult),
    ) -> Result<Vec<LineResult>, CliError> {
        let grammar = input_grammar()?;
        let input = self.config.input.as_str();
        let mut run = Run {
            keep_going: self.config.keep_going,
            on_result,
            results: Vec::new(),
        };

        match self.config.grammar {
            Grammar::Directions => {
                run.record(first_content_line(input), || {
                    grammar.directions(input).map(str::to_string)
                })?;
            }
            Grammar::Nodes => run.node_lines(&grammar, input, 1)?,
            Grammar::Network => {
                let (directions, nodes, first_node_line) =
                    split_network(input).ok_or(CliError::MissingSection("node"))?;
                run.record(first_content_line(directions), || {
                    grammar.directions(directions).map(str::to_string)
                })?;
                run.node_lines(&grammar, nodes, first_node_line)?;
            }
        }

        let failed = run.results.iter().filter(|r| r.answer.is_err()).count();
        info!(lines = run.results.len(), failed, "finished parsing");
        Ok(run.results)
    }
}

struct Run<F> {
    keep_going: bool,
    on_result: F,
    results: Vec<LineResult>,
}

impl<F: FnMut(&LineResult)> Run<F> {
    fn node_lines<N>(
        &mut self,
        grammar: &InputGrammar<N>,
        block: &str,
        first_line: usize,
    ) -> Result<(), CliError>
    where
        N: for<'a> Parser<'a, Output = NodeShape<'a>>,
    {
        for (idx, text) in block.lines().enumerate() {
            if text.trim().is_empty() {
                continue;
            }
            self.record(first_line + idx, || {
                grammar.node(text).map(|node| node.to_string())
            })?;
        }
        Ok(())
    }

    fn record(
        &mut self,
        line: usize,
        parse: impl FnOnce() -> Result<String, ParseError>,
    ) -> Result<(), CliError> {
        let start = Instant::now();
        let answer = parse();
        let parse_duration = TimeDelta::from_std(start.elapsed()).unwrap_or(TimeDelta::MAX);

        match &answer {
            Ok(value) => debug!(line, %value, "parsed line"),
            Err(err) if self.keep_going => warn!(line, error = %err, "line failed to parse"),
            Err(err) => {
                return Err(CliError::Line {
                    line,
                    source: err.clone(),
                });
            }
        }

        let result = LineResult {
            line,
            answer,
            parse_duration,
        };
        (self.on_result)(&result);
        self.results.push(result);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tracing::level_filters::LevelFilter;

    fn config(grammar: Grammar, input: &str, keep_going: bool) -> Config {
        Config {
            input_path: PathBuf::from("input.txt"),
            input: input.to_string(),
            grammar,
            keep_going,
            quiet: true,
            log_level: LevelFilter::WARN,
        }
    }

    fn answers(results: &[LineResult]) -> Vec<(usize, Option<&str>)> {
        results
            .iter()
            .map(|r| (r.line, r.answer.as_deref().ok()))
            .collect()
    }

    #[test]
    fn test_network() {
        let config = config(
            Grammar::Network,
            "RL\n\nAAA = (BBB, CCC)\nBBB = (DDD, EEE)\n",
            false,
        );
        let results = Executor::new(&config).execute(|_| {}).unwrap();
        assert_eq!(
            answers(&results),
            vec![
                (1, Some("RL")),
                (3, Some("AAA -> (BBB, CCC)")),
                (4, Some("BBB -> (DDD, EEE)")),
            ]
        );
    }

    #[test]
    fn test_network_crlf_line_numbers() {
        let config = config(
            Grammar::Network,
            "LLR\r\n\r\nAAA = (BBB, BBB)\r\nBBB = (AAA, ZZZ)\r\n",
            false,
        );
        let results = Executor::new(&config).execute(|_| {}).unwrap();
        assert_eq!(
            answers(&results),
            vec![
                (1, Some("LLR")),
                (3, Some("AAA -> (BBB, BBB)")),
                (4, Some("BBB -> (AAA, ZZZ)")),
            ]
        );
    }

    #[test]
    fn test_network_without_nodes() {
        let config = config(Grammar::Network, "LLR\n", false);
        let err = Executor::new(&config).execute(|_| {}).err().unwrap();
        assert!(matches!(err, CliError::MissingSection("node")));
    }

    #[test]
    fn test_network_with_empty_directions_keeps_line_numbers() {
        let config = config(Grammar::Network, "\n\nAAA = (BBB, CCC)\n", true);
        let results = Executor::new(&config).execute(|_| {}).unwrap();
        assert_eq!(
            answers(&results),
            vec![(1, None), (3, Some("AAA -> (BBB, CCC)"))]
        );
    }

    #[test]
    fn test_directions_failure_reports_its_own_line() {
        let config = config(
            Grammar::Network,
            "\nLX\n\nAAA = (BBB, CCC)\n",
            false,
        );
        let err = Executor::new(&config).execute(|_| {}).err().unwrap();
        assert!(matches!(err, CliError::Line { line: 2, .. }));
    }

    #[test]
    fn test_leading_blank_lines_shift_every_line() {
        let config = config(
            Grammar::Network,
            "\nLR\n\nAAA = (BBB, CCC)\n",
            false,
        );
        let results = Executor::new(&config).execute(|_| {}).unwrap();
        assert_eq!(
            answers(&results),
            vec![(2, Some("LR")), (4, Some("AAA -> (BBB, CCC)"))]
        );
    }

    #[test]
    fn test_directions_only() {
        let config = config(Grammar::Directions, "LRRL\n", false);
        let results = Executor::new(&config).execute(|_| {}).unwrap();
        assert_eq!(answers(&results), vec![(1, Some("LRRL"))]);
    }

    #[test]
    fn test_stops_at_first_failure() {
        let config = config(
            Grammar::Nodes,
            "AAA = (BBB, CCC)\nBBB = DDD\nCCC = (x, y)\n",
            false,
        );
        let mut seen = Vec::new();
        let err = Executor::new(&config)
            .execute(|r| seen.push(r.line))
            .err()
            .unwrap();

        assert_eq!(seen, vec![1]);
        match err {
            CliError::Line { line, source } => {
                assert_eq!(line, 2);
                assert_eq!(
                    source,
                    ParseError::UnexpectedCharacter {
                        expected: "(".to_string(),
                        found: "D".to_string()
                    }
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_keep_going_records_failures() {
        let config = config(
            Grammar::Nodes,
            "AAA = (BBB, CCC)\n\nBBB = DDD\nCCC = (x, y)\n",
            true,
        );
        let mut streamed = 0;
        let results = Executor::new(&config).execute(|_| streamed += 1).unwrap();

        assert_eq!(streamed, 3);
        assert_eq!(
            answers(&results),
            vec![
                (1, Some("AAA -> (BBB, CCC)")),
                (3, None),
                (4, Some("CCC -> (x, y)")),
            ]
        );
    }
}
