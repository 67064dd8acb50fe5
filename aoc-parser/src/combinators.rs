//! Combinators that build a parser out of other parsers

use std::marker::PhantomData;

use crate::parser::{ParseResult, Parsed, Parser};
use crate::shape::{Merge, Shape, Single, Skipped};

/// Parser that discards the value of its inner parser, see [`skip`]
#[derive(Debug, Clone, Copy)]
pub struct Skip<P> {
    inner: P,
}

impl<P> Skip<P> {
    pub(crate) fn new(inner: P) -> Self {
        Self { inner }
    }
}

/// Run `parser` for its consumption only
///
/// Consumption and failures are exactly those of `parser`; on success the
/// value is replaced by [`Skipped`], which [`combine`] then drops from the
/// composed result.
pub fn skip<P>(parser: P) -> Skip<P> {
    Skip::new(parser)
}

impl<'a, P: Parser<'a>> Parser<'a> for Skip<P> {
    type Output = Skipped;

    fn parse(&self, input: &'a str) -> ParseResult<'a, Self::Output> {
        let parsed = self.inner.parse(input)?;
        Ok(Parsed::new(Skipped, parsed.residue))
    }
}

/// Parser that runs two parsers one after the other, see [`combine`]
#[derive(Debug, Clone, Copy)]
pub struct Combine<P1, P2> {
    first: P1,
    second: P2,
}

impl<P1, P2> Combine<P1, P2> {
    pub(crate) fn new(first: P1, second: P2) -> Self {
        Self { first, second }
    }
}

/// Run `first`, then `second` on whatever `first` left over
///
/// Fails with the first failure; `second` is never run if `first` fails. The
/// two values are merged by the shape rule (see [`Merge`]):
///
/// ```
/// use aoc_parser::{Parser, character, combine, skip, word};
///
/// let both = combine(word(), character('!'));
/// assert_eq!(both.run("hey!").unwrap().value, ("hey", '!'));
///
/// let one = combine(word(), skip(character('!')));
/// assert_eq!(one.run("hey!").unwrap().value, "hey");
///
/// let none = combine(skip(word()), skip(character('!')));
/// assert_eq!(none.run("hey!").unwrap().value, ());
/// ```
pub fn combine<P1, P2>(first: P1, second: P2) -> Combine<P1, P2> {
    Combine::new(first, second)
}

impl<'a, P1, P2> Parser<'a> for Combine<P1, P2>
where
    P1: Parser<'a>,
    P2: Parser<'a>,
    P1::Output: Merge<P2::Output>,
{
    type Output = <P1::Output as Merge<P2::Output>>::Output;

    fn parse(&self, input: &'a str) -> ParseResult<'a, Self::Output> {
        let first = self.first.parse(input)?;
        let second = self.second.parse(first.residue)?;
        Ok(Parsed::new(first.value.merge(second.value), second.residue))
    }
}

/// Parser that transforms the value of its inner parser, see [`map`]
pub struct Map<P, F, U> {
    inner: P,
    f: F,
    _output: PhantomData<fn() -> U>,
}

impl<P, F, U> Map<P, F, U> {
    pub(crate) fn new(inner: P, f: F) -> Self {
        Self {
            inner,
            f,
            _output: PhantomData,
        }
    }
}

impl<P: Clone, F: Clone, U> Clone for Map<P, F, U> {
    fn clone(&self) -> Self {
        Self::new(self.inner.clone(), self.f.clone())
    }
}

impl<P: std::fmt::Debug, F, U> std::fmt::Debug for Map<P, F, U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Map").field("inner", &self.inner).finish_non_exhaustive()
    }
}

/// Apply `f` to the plain value produced by `parser`
///
/// The result is always a single value, so a mapped pair takes part in
/// further sequencing as one value.
///
/// ```
/// use aoc_parser::{Parser, character, map, number, sequence, skip};
///
/// let point = map(
///     sequence((number(), skip(character(',')), number())),
///     |(x, y)| x * y,
/// );
/// assert_eq!(point.run("6,7").unwrap().value, 42);
/// ```
pub fn map<'a, P, F, U>(parser: P, f: F) -> Map<P, F, U>
where
    P: Parser<'a>,
    F: Fn(<P::Output as Shape>::Value) -> U,
{
    Map::new(parser, f)
}

impl<'a, P, F, U> Parser<'a> for Map<P, F, U>
where
    P: Parser<'a>,
    F: Fn(<P::Output as Shape>::Value) -> U,
{
    type Output = Single<U>;

    fn parse(&self, input: &'a str) -> ParseResult<'a, Self::Output> {
        let parsed = self.inner.run(input)?;
        Ok(parsed.map_value(|value| Single((self.f)(value))))
    }
}
