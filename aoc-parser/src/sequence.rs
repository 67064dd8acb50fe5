//! N-ary sequencing over tuples of parsers

use crate::combinators::Combine;

/// A tuple of two or more parsers that can be folded into one parser
///
/// Implemented for tuples of 2 to 12 elements. The fold runs from the right:
/// `(p1, p2, p3)` becomes `combine(p1, combine(p2, p3))`, so three or more
/// value-producing parsers produce right-nested pairs `(a, (b, c))`.
///
/// There is no impl for 1-tuples: a single parser should be used directly.
///
/// ```compile_fail
/// use aoc_parser::{sequence, word};
///
/// let lonely = sequence((word(),));
/// ```
pub trait Sequence {
    /// The composed parser
    type Parser;

    /// Fold the tuple into one parser
    fn into_parser(self) -> Self::Parser;
}

/// Compose a tuple of parsers into one that runs them left to right
///
/// ```
/// use aoc_parser::{Parser, character, sequence, skip, whitespace, word};
///
/// let pair = sequence((
///     skip(character('(')),
///     word(),
///     skip(character(',')),
///     skip(whitespace()),
///     word(),
///     skip(character(')')),
/// ));
/// let parsed = pair.run("(MCG, TRC)").unwrap();
/// assert_eq!(parsed.value, ("MCG", "TRC"));
/// assert_eq!(parsed.residue, "");
/// ```
pub fn sequence<S: Sequence>(parsers: S) -> S::Parser {
    parsers.into_parser()
}

impl<P0, P1> Sequence for (P0, P1) {
    type Parser = Combine<P0, P1>;

    fn into_parser(self) -> Self::Parser {
        Combine::new(self.0, self.1)
    }
}

macro_rules! impl_sequence {
    ($first:ident $second:ident) => {};
    ($head:ident $($tail:ident)+) => {
        #[allow(non_snake_case)]
        impl<$head, $($tail),+> Sequence for ($head, $($tail),+)
        where
            ($($tail,)+): Sequence,
        {
            type Parser = Combine<$head, <($($tail,)+) as Sequence>::Parser>;

            fn into_parser(self) -> Self::Parser {
                let ($head, $($tail),+) = self;
                Combine::new($head, ($($tail,)+).into_parser())
            }
        }

        impl_sequence!($($tail)+);
    };
}

impl_sequence!(P0 P1 P2 P3 P4 P5 P6 P7 P8 P9 P10 P11);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{Parsed, Parser};
    use crate::primitives::{character, digits, number, whitespace, word};
    use crate::shape::{Pair, Single, Skipped};
    use crate::skip;

    #[test]
    fn test_two_parsers() {
        let parsed = sequence((word(), digits())).parse("ab12").unwrap();
        assert_eq!(parsed, Parsed::new(Pair(Single("ab"), Single("12")), ""));
    }

    #[test]
    fn test_all_skipped() {
        let parsed = sequence((skip(word()), skip(whitespace()), skip(word())))
            .parse("ab cd!")
            .unwrap();
        assert_eq!(parsed, Parsed::new(Skipped, "!"));
    }

    #[test]
    fn test_single_producer_is_unwrapped() {
        let parsed = sequence((skip(character('#')), number(), skip(character(':'))))
            .parse("#12:x")
            .unwrap();
        assert_eq!(parsed, Parsed::new(Single(12), "x"));
    }

    #[test]
    fn test_producers_nest_to_the_right() {
        let four = sequence((
            word(),
            skip(character(' ')),
            word(),
            skip(character(' ')),
            word(),
            skip(character(' ')),
            word(),
        ));
        let parsed = four.run("a b c d").unwrap();
        assert_eq!(parsed.value, ("a", ("b", ("c", "d"))));
    }

    #[test]
    fn test_twelve_parsers() {
        let twelve = sequence((
            character('a'),
            character('b'),
            character('c'),
            character('d'),
            character('e'),
            character('f'),
            character('g'),
            character('h'),
            character('i'),
            character('j'),
            character('k'),
            character('l'),
        ));
        let parsed = twelve.run("abcdefghijklm").unwrap();
        assert_eq!(parsed.residue, "m");
        assert_eq!(parsed.value.0, 'a');
        assert_eq!(parsed.value.1.1.1.1.1.1.1.1.1.1.1, 'l');
    }

    #[test]
    fn test_sequence_is_reusable() {
        let line = sequence((word(), skip(character('=')), number()));
        assert_eq!(line.run("a=1").unwrap().value, ("a", 1));
        assert_eq!(line.run("b=22").unwrap().value, ("b", 22));
        assert!(line.run("c=").is_err());
    }
}
