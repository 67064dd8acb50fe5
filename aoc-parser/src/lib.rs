//! Advent of Code Input Parser Library
//!
//! Small, typed parser combinators for the fixed-grammar lines found in
//! Advent of Code puzzle inputs. Parsers are built once out of smaller
//! parsers, then run on each input line.
//!
//! # Overview
//!
//! This library provides:
//! - Primitive parsers: [`character`], [`literal`], [`take_while1`] and its
//!   conveniences [`word`], [`whitespace`], [`digits`], plus [`number`],
//!   [`pattern`] and [`end_of_input`]
//! - Combinators: [`skip`], [`combine`], [`sequence`] and [`map`]
//! - Runtime-assembled parsers in [`dynamic`]
//!
//! # Quick Example
//!
//! ```
//! use aoc_parser::{Parser, character, sequence, skip, whitespace, word};
//!
//! let pair = sequence((
//!     skip(character('(')),
//!     word(),
//!     skip(character(',')),
//!     skip(whitespace()),
//!     word(),
//!     skip(character(')')),
//! ));
//! let node = sequence((
//!     word(),
//!     skip(whitespace()),
//!     skip(character('=')),
//!     skip(whitespace()),
//!     pair,
//! ));
//!
//! let parsed = node.run("LRL = (MCG, TRC)").unwrap();
//! assert_eq!(parsed.value, ("LRL", ("MCG", "TRC")));
//! assert_eq!(parsed.residue, "");
//! ```
//!
//! # Key Concepts
//!
//! ## Result Shapes
//!
//! Every parser's [`Parser::Output`] is a [`Shape`]: [`Skipped`], [`Single`]
//! or [`Pair`]. Sequencing merges shapes by one rule (see [`Merge`]):
//! skipped values disappear, a lone value stays unwrapped, and two values
//! become a pair. The composed type is computed by the compiler, and
//! [`ShapeKind::combine`] is the same rule at runtime.
//!
//! ## Right-Nested Sequences
//!
//! [`sequence`] folds from the right, so three or more values nest to the
//! right: `(a, (b, c))`. Sequences are never flattened into wider tuples.
//!
//! ## Failures
//!
//! Parsing is fail-fast: the first failing parser ends the whole parse with a
//! [`ParseError`] quoting what was expected and what was found. Mistakes made
//! while building a parser are reported separately as [`CompositionError`].
//! Leftover input is not an error unless asked for, through
//! [`Parser::parse_complete`] or [`end_of_input`].

mod combinators;
mod error;
mod parser;
mod primitives;
mod sequence;
mod shape;

pub mod dynamic;

// Re-export public API
pub use combinators::{Combine, Map, Skip, combine, map, skip};
pub use error::{CompositionError, ParseError};
pub use parser::{ParseResult, Parsed, Parser};
pub use primitives::{
    Character, EndOfInput, Literal, Number, Pattern, TakeWhile1, character, digits, end_of_input,
    literal, number, pattern, take_while1, whitespace, word,
};
pub use sequence::{Sequence, sequence};
pub use shape::{Carries, Merge, Pair, Shape, ShapeKind, Single, Skipped, merged_kind};
