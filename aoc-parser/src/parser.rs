//! Core parser trait and parse outcome types

use crate::combinators::{Combine, Map, Skip};
use crate::error::ParseError;
use crate::shape::Shape;

/// A successful parse: the produced value and the unconsumed rest of the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parsed<'a, T> {
    /// The produced value
    pub value: T,
    /// The suffix of the input the parser did not consume
    pub residue: &'a str,
}

impl<'a, T> Parsed<'a, T> {
    /// Create a parse outcome
    pub fn new(value: T, residue: &'a str) -> Self {
        Self { value, residue }
    }

    /// Transform the value, keeping the residue
    pub fn map_value<U>(self, f: impl FnOnce(T) -> U) -> Parsed<'a, U> {
        Parsed {
            value: f(self.value),
            residue: self.residue,
        }
    }
}

/// Outcome of running a parser: success or a diagnostic, never both
pub type ParseResult<'a, T> = Result<Parsed<'a, T>, ParseError>;

/// Trait for parsing a prefix of an input string
///
/// Parsers are immutable: a parser is built once and may be run any number of
/// times, on any number of inputs, from any number of threads.
///
/// `Output` is the [`Shape`] of what the parser produces, which is what lets
/// [`combine`](crate::combine) and [`sequence`](crate::sequence) compute the
/// shape of a composed result at compile time.
///
/// Any `fn(&str) -> ParseResult<'_, S>` is a parser as well.
///
/// # Example
///
/// ```
/// use aoc_parser::{Parser, ParseResult, Parsed, Single};
///
/// fn first_char(input: &str) -> ParseResult<'_, Single<Option<char>>> {
///     let mut chars = input.chars();
///     let c = chars.next();
///     Ok(Parsed::new(Single(c), chars.as_str()))
/// }
///
/// let parsed = first_char.run("xyz").unwrap();
/// assert_eq!(parsed.value, Some('x'));
/// assert_eq!(parsed.residue, "yz");
/// ```
pub trait Parser<'a> {
    /// Shape of the produced value
    type Output: Shape;

    /// Parse a prefix of `input`
    fn parse(&self, input: &'a str) -> ParseResult<'a, Self::Output>;

    /// Parse a prefix of `input` and unwrap the shape into its plain value
    fn run(&self, input: &'a str) -> ParseResult<'a, <Self::Output as Shape>::Value> {
        self.parse(input).map(|parsed| parsed.map_value(Shape::into_value))
    }

    /// Parse all of `input`, failing if anything is left over
    fn parse_complete(&self, input: &'a str) -> Result<<Self::Output as Shape>::Value, ParseError> {
        let parsed = self.run(input)?;
        if parsed.residue.is_empty() {
            Ok(parsed.value)
        } else {
            Err(ParseError::trailing(parsed.residue))
        }
    }

    /// Discard this parser's value, see [`skip`](crate::skip)
    fn skipped(self) -> Skip<Self>
    where
        Self: Sized,
    {
        Skip::new(self)
    }

    /// Run `next` after this parser, see [`combine`](crate::combine)
    fn then<P>(self, next: P) -> Combine<Self, P>
    where
        Self: Sized,
    {
        Combine::new(self, next)
    }

    /// Transform the produced value, see [`map`](crate::map)
    fn map<F, U>(self, f: F) -> Map<Self, F, U>
    where
        Self: Sized,
        F: Fn(<Self::Output as Shape>::Value) -> U,
    {
        Map::new(self, f)
    }
}

impl<'a, F, S> Parser<'a> for F
where
    F: Fn(&'a str) -> ParseResult<'a, S>,
    S: Shape,
{
    type Output = S;

    fn parse(&self, input: &'a str) -> ParseResult<'a, Self::Output> {
        self(input)
    }
}
