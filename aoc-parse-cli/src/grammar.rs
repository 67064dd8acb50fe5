//! Line grammars for network-style puzzle input
//!
//! ```text
//! LLR
//!
//! AAA = (BBB, BBB)
//! BBB = (AAA, ZZZ)
//! ```

use aoc_parser::{
    CompositionError, Pair, ParseError, Parser, Pattern, Single, character, end_of_input,
    pattern, sequence, skip, whitespace, word,
};

/// Shape produced by the node line parser
pub type NodeShape<'a> = Pair<Single<&'a str>, Pair<Single<&'a str>, Single<&'a str>>>;

/// A node with its left and right neighbours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node<'a> {
    pub name: &'a str,
    pub left: &'a str,
    pub right: &'a str,
}

impl std::fmt::Display for Node<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> ({}, {})", self.name, self.left, self.right)
    }
}

/// Parser for a complete `AAA = (BBB, CCC)` line
pub fn node_line() -> impl for<'a> Parser<'a, Output = NodeShape<'a>> {
    let children = sequence((
        skip(character('(')),
        word(),
        skip(character(',')),
        skip(whitespace()),
        word(),
        skip(character(')')),
    ));
    sequence((
        word(),
        skip(whitespace()),
        skip(character('=')),
        skip(whitespace()),
        children,
        end_of_input(),
    ))
}

/// Parsers for every section of the input, built once
pub struct InputGrammar<N> {
    directions: Pattern,
    node: N,
}

/// Build the grammar
pub fn input_grammar()
-> Result<InputGrammar<impl for<'a> Parser<'a, Output = NodeShape<'a>>>, CompositionError> {
    Ok(InputGrammar {
        directions: pattern("directions", "[LR]+")?,
        node: node_line(),
    })
}

impl<N> InputGrammar<N>
where
    N: for<'a> Parser<'a, Output = NodeShape<'a>>,
{
    /// Parse the directions line; surrounding whitespace is ignored
    pub fn directions<'a>(&self, text: &'a str) -> Result<&'a str, ParseError> {
        self.directions.parse_complete(text.trim())
    }

    /// Parse one node line; trailing whitespace is ignored
    pub fn node<'a>(&self, line: &'a str) -> Result<Node<'a>, ParseError> {
        let (name, (left, right)) = self.node.parse_complete(line.trim_end())?;
        Ok(Node { name, left, right })
    }
}

/// Split network input into the directions block and the node block
///
/// Also returns the 1-based line number the node block starts on. `None` if
/// there is no blank line between the two blocks.
pub fn split_network(input: &str) -> Option<(&str, &str, usize)> {
    let (idx, separator_len) = input
        .find("\n\n")
        .map(|idx| (idx, 2))
        .or_else(|| input.find("\r\n\r\n").map(|idx| (idx, 4)))?;
    let directions = &input[..idx];
    let nodes = &input[idx + separator_len..];
    // an empty directions block still occupies line 1
    let first_node_line = directions.split('\n').count() + 2;
    Some((directions, nodes, first_node_line))
}

/// 1-based line of the first non-blank line in `block`, or 1 if there is none
pub fn first_content_line(block: &str) -> usize {
    block
        .lines()
        .position(|line| !line.trim().is_empty())
        .map_or(1, |idx| idx + 1)
}
