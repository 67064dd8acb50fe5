//! Result shapes and the rule for merging them
//!
//! Every parser declares the shape of what it produces:
//!
//! - [`Skipped`]: nothing (the parser was wrapped by [`skip`](crate::skip))
//! - [`Single`]: exactly one value
//! - [`Pair`]: two data-carrying shapes, in input order
//!
//! Sequencing two parsers merges their shapes through [`Merge`]. The four
//! `Merge` impls are the shape rule itself:
//!
//! | left      | right     | merged        |
//! |-----------|-----------|---------------|
//! | `Skipped` | `Skipped` | `Skipped`     |
//! | `Skipped` | `B`       | `B`           |
//! | `A`       | `Skipped` | `A`           |
//! | `A`       | `B`       | `Pair<A, B>`  |
//!
//! The same table exists at runtime as [`ShapeKind::combine`], and every shape
//! type reports its [`ShapeKind`] through [`Shape::KIND`], so the two can be
//! checked against each other.

/// Runtime tag for a result shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// The parser produced nothing
    NoValue,
    /// The parser produced one value
    Single,
    /// The parser produced an ordered pair of values
    Pair,
}

impl ShapeKind {
    /// Merge the kinds of two sequenced results
    pub const fn combine(self, other: ShapeKind) -> ShapeKind {
        match (self, other) {
            (ShapeKind::NoValue, ShapeKind::NoValue) => ShapeKind::NoValue,
            (ShapeKind::NoValue, kind) | (kind, ShapeKind::NoValue) => kind,
            _ => ShapeKind::Pair,
        }
    }

    /// Whether a result of this kind carries data
    pub const fn carries_value(self) -> bool {
        !matches!(self, ShapeKind::NoValue)
    }
}

/// A result shape that can be unwrapped into a plain Rust value
pub trait Shape {
    /// The runtime tag of this shape
    const KIND: ShapeKind;

    /// The plain value this shape unwraps to
    type Value;

    /// Unwrap the shape, e.g. `Pair(Single(a), Single(b))` into `(a, b)`
    fn into_value(self) -> Self::Value;
}

/// Marker for shapes that carry data (`Single` and `Pair`)
///
/// Sealed: `Skipped` must never carry data, otherwise the `Merge` impls would
/// overlap.
pub trait Carries: Shape + sealed::Sealed {}

mod sealed {
    pub trait Sealed {}

    impl<T> Sealed for super::Single<T> {}
    impl<A, B> Sealed for super::Pair<A, B> {}
}

/// The "no value" marker produced by skipped parsers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Skipped;

/// A single produced value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Single<T>(pub T);

/// Two produced values in input order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pair<A, B>(pub A, pub B);

impl Shape for Skipped {
    const KIND: ShapeKind = ShapeKind::NoValue;
    type Value = ();

    fn into_value(self) -> Self::Value {}
}

impl<T> Shape for Single<T> {
    const KIND: ShapeKind = ShapeKind::Single;
    type Value = T;

    fn into_value(self) -> Self::Value {
        self.0
    }
}

impl<A: Carries, B: Carries> Shape for Pair<A, B> {
    const KIND: ShapeKind = ShapeKind::Pair;
    type Value = (A::Value, B::Value);

    fn into_value(self) -> Self::Value {
        (self.0.into_value(), self.1.into_value())
    }
}

impl<T> Carries for Single<T> {}
impl<A: Carries, B: Carries> Carries for Pair<A, B> {}

/// Merge the result of a parser with the result of the parser after it
pub trait Merge<Rhs: Shape>: Shape {
    /// Shape of the merged result
    type Output: Shape;

    /// Merge two results in input order
    fn merge(self, rhs: Rhs) -> Self::Output;
}

impl Merge<Skipped> for Skipped {
    type Output = Skipped;

    fn merge(self, _rhs: Skipped) -> Self::Output {
        Skipped
    }
}

impl<B: Carries> Merge<B> for Skipped {
    type Output = B;

    fn merge(self, rhs: B) -> Self::Output {
        rhs
    }
}

impl<A: Carries> Merge<Skipped> for A {
    type Output = A;

    fn merge(self, _rhs: Skipped) -> Self::Output {
        self
    }
}

impl<A: Carries, B: Carries> Merge<B> for A {
    type Output = Pair<A, B>;

    fn merge(self, rhs: B) -> Self::Output {
        Pair(self, rhs)
    }
}

/// Kind of the shape produced by merging `A` with `B`, computed by the type system
pub const fn merged_kind<A, B>() -> ShapeKind
where
    A: Merge<B>,
    B: Shape,
{
    <A::Output as Shape>::KIND
}
