//! Primitive parsers that consume a prefix of the input directly

use regex::Regex;

use crate::error::{CompositionError, ParseError};
use crate::parser::{ParseResult, Parsed, Parser};
use crate::shape::{Single, Skipped};

/// Parser for one specific character, see [`character`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Character {
    expected: char,
}

/// Parse exactly the character `expected`
///
/// ```
/// use aoc_parser::{Parser, character};
///
/// let parsed = character('(').run("(MCG").unwrap();
/// assert_eq!((parsed.value, parsed.residue), ('(', "MCG"));
/// assert!(character('(').run("").is_err());
/// ```
pub fn character(expected: char) -> Character {
    Character { expected }
}

impl<'a> Parser<'a> for Character {
    type Output = Single<char>;

    fn parse(&self, input: &'a str) -> ParseResult<'a, Self::Output> {
        let mut chars = input.chars();
        match chars.next() {
            Some(c) if c == self.expected => Ok(Parsed::new(Single(c), chars.as_str())),
            Some(c) => Err(ParseError::unexpected(self.expected, &input[..c.len_utf8()])),
            None => Err(ParseError::unexpected(self.expected, "")),
        }
    }
}

/// Parser for an exact string, see [`literal`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    expected: String,
}

/// Parse exactly the string `expected`
pub fn literal(expected: impl Into<String>) -> Literal {
    Literal {
        expected: expected.into(),
    }
}

impl<'a> Parser<'a> for Literal {
    type Output = Single<&'a str>;

    fn parse(&self, input: &'a str) -> ParseResult<'a, Self::Output> {
        match input.strip_prefix(self.expected.as_str()) {
            Some(residue) => {
                let (matched, _) = input.split_at(self.expected.len());
                Ok(Parsed::new(Single(matched), residue))
            }
            None => {
                // quote as many characters as the literal has
                let width = self.expected.chars().count();
                let found_len = input
                    .char_indices()
                    .nth(width)
                    .map_or(input.len(), |(idx, _)| idx);
                Err(ParseError::unexpected(self.expected.as_str(), &input[..found_len]))
            }
        }
    }
}

/// Parser for the longest non-empty prefix matching a predicate, see [`take_while1`]
#[derive(Debug, Clone, Copy)]
pub struct TakeWhile1 {
    name: &'static str,
    predicate: fn(char) -> bool,
}

/// Parse the longest prefix whose characters all satisfy `predicate`
///
/// Matching zero characters is a failure, so every success consumes input.
/// `name` is quoted in the [`ParseError::EmptyMatch`] diagnostic.
pub fn take_while1(name: &'static str, predicate: fn(char) -> bool) -> TakeWhile1 {
    TakeWhile1 { name, predicate }
}

impl<'a> Parser<'a> for TakeWhile1 {
    type Output = Single<&'a str>;

    fn parse(&self, input: &'a str) -> ParseResult<'a, Self::Output> {
        let end = input
            .char_indices()
            .find(|&(_, c)| !(self.predicate)(c))
            .map_or(input.len(), |(idx, _)| idx);
        if end == 0 {
            return Err(ParseError::empty_match(self.name, input));
        }
        let (matched, residue) = input.split_at(end);
        Ok(Parsed::new(Single(matched), residue))
    }
}

/// Parse a run of ASCII letters
///
/// ```
/// use aoc_parser::{Parser, word};
///
/// let parsed = word().run("abc123").unwrap();
/// assert_eq!((parsed.value, parsed.residue), ("abc", "123"));
/// ```
pub fn word() -> TakeWhile1 {
    take_while1("word", |c| c.is_ascii_alphabetic())
}

/// Parse a run of whitespace
pub fn whitespace() -> TakeWhile1 {
    take_while1("whitespace", char::is_whitespace)
}

/// Parse a run of ASCII digits
pub fn digits() -> TakeWhile1 {
    take_while1("digits", |c| c.is_ascii_digit())
}

/// Parser for an unsigned decimal number, see [`number`]
#[derive(Debug, Clone, Copy)]
pub struct Number {
    digits: TakeWhile1,
}

/// Parse a run of ASCII digits as a `u64`
pub fn number() -> Number {
    Number {
        digits: take_while1("number", |c| c.is_ascii_digit()),
    }
}

impl<'a> Parser<'a> for Number {
    type Output = Single<u64>;

    fn parse(&self, input: &'a str) -> ParseResult<'a, Self::Output> {
        let Parsed {
            value: Single(digits),
            residue,
        } = self.digits.parse(input)?;
        let value = digits.parse().map_err(|_| ParseError::NumberOutOfRange {
            digits: digits.to_string(),
        })?;
        Ok(Parsed::new(Single(value), residue))
    }
}

/// Parser for a non-empty regular expression match at the start of the input
#[derive(Debug, Clone)]
pub struct Pattern {
    name: &'static str,
    regex: Regex,
}

/// Build a parser for the regular expression `pattern`, anchored at the start of the input
///
/// ```
/// use aoc_parser::{Parser, pattern};
///
/// let directions = pattern("directions", "[LR]+").unwrap();
/// let parsed = directions.run("LRRL\n").unwrap();
/// assert_eq!((parsed.value, parsed.residue), ("LRRL", "\n"));
/// ```
pub fn pattern(name: &'static str, pattern: &str) -> Result<Pattern, CompositionError> {
    let regex = Regex::new(&format!("^(?:{})", pattern))
        .map_err(|source| CompositionError::InvalidPattern { name, source })?;
    Ok(Pattern { name, regex })
}

impl<'a> Parser<'a> for Pattern {
    type Output = Single<&'a str>;

    fn parse(&self, input: &'a str) -> ParseResult<'a, Self::Output> {
        match self.regex.find(input) {
            Some(found) if !found.is_empty() => {
                let (matched, residue) = input.split_at(found.end());
                Ok(Parsed::new(Single(matched), residue))
            }
            _ => Err(ParseError::empty_match(self.name, input)),
        }
    }
}

/// Parser that only succeeds on empty input, see [`end_of_input`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EndOfInput;

/// Require that nothing is left to parse
pub fn end_of_input() -> EndOfInput {
    EndOfInput
}

impl<'a> Parser<'a> for EndOfInput {
    type Output = Skipped;

    fn parse(&self, input: &'a str) -> ParseResult<'a, Self::Output> {
        if input.is_empty() {
            Ok(Parsed::new(Skipped, input))
        } else {
            Err(ParseError::trailing(input))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_match() {
        let parsed = character('=').parse("= (").unwrap();
        assert_eq!(parsed, Parsed::new(Single('='), " ("));
    }

    #[test]
    fn test_character_mismatch_quotes_found() {
        let err = character(',').parse("X, Y").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnexpectedCharacter {
                expected: ",".to_string(),
                found: "X".to_string()
            }
        );
    }

    #[test]
    fn test_character_multibyte() {
        let parsed = character('é').parse("éa").unwrap();
        assert_eq!(parsed, Parsed::new(Single('é'), "a"));
        let err = character('a').parse("éa").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedCharacter { found, .. } if found == "é"));
    }

    #[test]
    fn test_literal_match() {
        let parsed = literal(", ").parse(", TRC)").unwrap();
        assert_eq!(parsed, Parsed::new(Single(", "), "TRC)"));
    }

    #[test]
    fn test_literal_mismatch_quotes_same_length_prefix() {
        let err = literal("Game").parse("Gamma 1").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnexpectedCharacter {
                expected: "Game".to_string(),
                found: "Gamm".to_string()
            }
        );
    }

    #[test]
    fn test_literal_on_short_input() {
        let err = literal("Game").parse("Ga").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedCharacter { found, .. } if found == "Ga"));
    }

    #[test]
    fn test_word_stops_at_non_letter() {
        let parsed = word().parse("abc123").unwrap();
        assert_eq!(parsed, Parsed::new(Single("abc"), "123"));
    }

    #[test]
    fn test_word_consumes_everything() {
        let parsed = word().parse("LRL").unwrap();
        assert_eq!(parsed, Parsed::new(Single("LRL"), ""));
    }

    #[test]
    fn test_word_empty_match_is_error() {
        let err = word().parse("123abc").unwrap_err();
        assert_eq!(
            err,
            ParseError::EmptyMatch {
                name: "word",
                found: "123abc".to_string()
            }
        );
    }

    #[test]
    fn test_whitespace_mixed() {
        let parsed = whitespace().parse(" \t\nx").unwrap();
        assert_eq!(parsed, Parsed::new(Single(" \t\n"), "x"));
    }

    #[test]
    fn test_digits() {
        let parsed = digits().parse("42 red").unwrap();
        assert_eq!(parsed, Parsed::new(Single("42"), " red"));
    }

    #[test]
    fn test_number() {
        let parsed = number().parse("1234,5").unwrap();
        assert_eq!(parsed, Parsed::new(Single(1234), ",5"));
    }

    #[test]
    fn test_number_out_of_range() {
        let err = number().parse("99999999999999999999999").unwrap_err();
        assert!(matches!(err, ParseError::NumberOutOfRange { .. }));
    }

    #[test]
    fn test_number_requires_digits() {
        let err = number().parse("-3").unwrap_err();
        assert!(matches!(err, ParseError::EmptyMatch { name: "number", .. }));
    }

    #[test]
    fn test_pattern_anchored_at_start() {
        let directions = pattern("directions", "[LR]+").unwrap();
        let err = directions.parse("xLR").unwrap_err();
        assert!(matches!(err, ParseError::EmptyMatch { name: "directions", .. }));
    }

    #[test]
    fn test_pattern_alternation_is_anchored_as_a_whole() {
        let seeds = pattern("label", "seeds|soil").unwrap();
        assert!(seeds.parse("xsoil").is_err());
        assert_eq!(seeds.parse("soil:").unwrap(), Parsed::new(Single("soil"), ":"));
    }

    #[test]
    fn test_pattern_empty_match_is_error() {
        let maybe = pattern("maybe", "a*").unwrap();
        assert!(maybe.parse("bbb").is_err());
    }

    #[test]
    fn test_invalid_pattern() {
        let err = pattern("broken", "[").unwrap_err();
        assert!(matches!(err, CompositionError::InvalidPattern { name: "broken", .. }));
    }

    #[test]
    fn test_end_of_input() {
        assert_eq!(end_of_input().parse("").unwrap(), Parsed::new(Skipped, ""));
        let err = end_of_input().parse(")").unwrap_err();
        assert_eq!(
            err,
            ParseError::TrailingInput {
                found: ")".to_string()
            }
        );
    }

    #[test]
    fn test_empty_input_fails_everywhere() {
        assert!(character('a').parse("").is_err());
        assert!(literal("a").parse("").is_err());
        assert!(word().parse("").is_err());
        assert!(whitespace().parse("").is_err());
        assert!(digits().parse("").is_err());
        assert!(number().parse("").is_err());
    }
}
