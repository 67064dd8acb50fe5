//! Parsers assembled at runtime from a list
//!
//! The typed API in the crate root tracks result shapes at compile time, which
//! requires the grammar to be known when the program is compiled. When the
//! list of parsers is only known at runtime, [`DynParser`] offers the same
//! primitives and combinators with a tagged result, [`Tokens`], whose shape is
//! checked at runtime by the same rule ([`ShapeKind::combine`]).

use crate::error::{CompositionError, ParseError};
use crate::parser::{ParseResult, Parsed, Parser};
use crate::primitives::{Character, EndOfInput, Literal, Number, Pattern, TakeWhile1};
use crate::shape::ShapeKind;

/// Value produced by a [`DynParser`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tokens<'a> {
    /// No value: produced by skipped parsers
    Nothing,
    /// A single character
    Char(char),
    /// A slice of the input
    Text(&'a str),
    /// A parsed number
    Number(u64),
    /// Two values in input order
    Pair(Box<Tokens<'a>>, Box<Tokens<'a>>),
}

impl<'a> Tokens<'a> {
    /// Runtime shape of this value
    pub fn kind(&self) -> ShapeKind {
        match self {
            Tokens::Nothing => ShapeKind::NoValue,
            Tokens::Pair(..) => ShapeKind::Pair,
            Tokens::Char(_) | Tokens::Text(_) | Tokens::Number(_) => ShapeKind::Single,
        }
    }

    /// Merge two sequenced values by the shape rule
    pub fn merge(self, other: Tokens<'a>) -> Tokens<'a> {
        match (self.kind().carries_value(), other.kind().carries_value()) {
            (false, _) => other,
            (_, false) => self,
            (true, true) => Tokens::Pair(Box::new(self), Box::new(other)),
        }
    }

    /// Split a pair into its two halves
    pub fn into_pair(self) -> Option<(Tokens<'a>, Tokens<'a>)> {
        match self {
            Tokens::Pair(first, second) => Some((*first, *second)),
            _ => None,
        }
    }

    /// The text of a `Text` value
    pub fn as_text(&self) -> Option<&'a str> {
        match self {
            Tokens::Text(text) => Some(*text),
            _ => None,
        }
    }
}

/// A parser whose structure is decided at runtime
#[derive(Debug, Clone)]
pub enum DynParser {
    /// See [`character`](crate::character)
    Character(Character),
    /// See [`literal`](crate::literal)
    Literal(Literal),
    /// See [`take_while1`](crate::take_while1)
    TakeWhile1(TakeWhile1),
    /// See [`number`](crate::number)
    Number(Number),
    /// See [`pattern`](crate::pattern)
    Pattern(Pattern),
    /// See [`end_of_input`](crate::end_of_input)
    EndOfInput,
    /// See [`skip`](crate::skip)
    Skip(Box<DynParser>),
    /// See [`combine`](crate::combine)
    Combine(Box<DynParser>, Box<DynParser>),
}

impl DynParser {
    /// Parse a prefix of `input`
    pub fn parse<'a>(&self, input: &'a str) -> ParseResult<'a, Tokens<'a>> {
        match self {
            DynParser::Character(parser) => Ok(parser.run(input)?.map_value(Tokens::Char)),
            DynParser::Literal(parser) => Ok(parser.run(input)?.map_value(Tokens::Text)),
            DynParser::TakeWhile1(parser) => Ok(parser.run(input)?.map_value(Tokens::Text)),
            DynParser::Number(parser) => Ok(parser.run(input)?.map_value(Tokens::Number)),
            DynParser::Pattern(parser) => Ok(parser.run(input)?.map_value(Tokens::Text)),
            DynParser::EndOfInput => {
                EndOfInput.parse(input)?;
                Ok(Parsed::new(Tokens::Nothing, input))
            }
            DynParser::Skip(inner) => {
                let parsed = inner.parse(input)?;
                Ok(Parsed::new(Tokens::Nothing, parsed.residue))
            }
            DynParser::Combine(first, second) => {
                let first = first.parse(input)?;
                let second = second.parse(first.residue)?;
                Ok(Parsed::new(first.value.merge(second.value), second.residue))
            }
        }
    }

    /// Parse all of `input`, failing if anything is left over
    pub fn parse_complete<'a>(&self, input: &'a str) -> Result<Tokens<'a>, ParseError> {
        let parsed = self.parse(input)?;
        if parsed.residue.is_empty() {
            Ok(parsed.value)
        } else {
            Err(ParseError::trailing(parsed.residue))
        }
    }

    /// Shape this parser will produce on success
    pub fn kind(&self) -> ShapeKind {
        match self {
            DynParser::EndOfInput | DynParser::Skip(_) => ShapeKind::NoValue,
            DynParser::Combine(first, second) => first.kind().combine(second.kind()),
            _ => ShapeKind::Single,
        }
    }

    /// Discard this parser's value
    pub fn skipped(self) -> DynParser {
        DynParser::Skip(Box::new(self))
    }
}

impl From<Character> for DynParser {
    fn from(parser: Character) -> Self {
        DynParser::Character(parser)
    }
}

impl From<Literal> for DynParser {
    fn from(parser: Literal) -> Self {
        DynParser::Literal(parser)
    }
}

impl From<TakeWhile1> for DynParser {
    fn from(parser: TakeWhile1) -> Self {
        DynParser::TakeWhile1(parser)
    }
}

impl From<Number> for DynParser {
    fn from(parser: Number) -> Self {
        DynParser::Number(parser)
    }
}

impl From<Pattern> for DynParser {
    fn from(parser: Pattern) -> Self {
        DynParser::Pattern(parser)
    }
}

impl From<EndOfInput> for DynParser {
    fn from(_: EndOfInput) -> Self {
        DynParser::EndOfInput
    }
}

/// Discard the value of `parser`
pub fn skip(parser: impl Into<DynParser>) -> DynParser {
    parser.into().skipped()
}

/// Run `first`, then `second` on its residue
pub fn combine(first: impl Into<DynParser>, second: impl Into<DynParser>) -> DynParser {
    DynParser::Combine(Box::new(first.into()), Box::new(second.into()))
}

/// Right-fold [`combine`] over `parsers`
///
/// Fewer than two parsers is a configuration error rather than a silent
/// pass-through.
///
/// ```
/// use aoc_parser::dynamic::{self, Tokens};
/// use aoc_parser::{CompositionError, character, word};
///
/// let pair = dynamic::sequence(vec![
///     word().into(),
///     dynamic::skip(character('-')),
///     word().into(),
/// ])
/// .unwrap();
/// let tokens = pair.parse_complete("ab-cd").unwrap();
/// assert_eq!(tokens.into_pair(), Some((Tokens::Text("ab"), Tokens::Text("cd"))));
///
/// let err = dynamic::sequence(vec![word().into()]).unwrap_err();
/// assert!(matches!(err, CompositionError::TooFewParsers(1)));
/// ```
pub fn sequence(parsers: Vec<DynParser>) -> Result<DynParser, CompositionError> {
    if parsers.len() < 2 {
        return Err(CompositionError::TooFewParsers(parsers.len()));
    }
    let mut parsers = parsers.into_iter().rev();
    let last = parsers.next().ok_or(CompositionError::TooFewParsers(0))?;
    Ok(parsers.fold(last, |folded, parser| combine(parser, folded)))
}
