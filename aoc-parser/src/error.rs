//! Error types for the parser library

use thiserror::Error;

/// Longest piece of remaining input quoted in a diagnostic
const SNIPPET_CHARS: usize = 32;

/// Error type for a parser failing on its input
///
/// Every variant quotes what was actually present where the parser failed,
/// since the residue is the only position information available.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A character or literal did not match the start of the input
    #[error("Expected '{expected}', found {}", quote(.found))]
    UnexpectedCharacter {
        /// The character or literal the parser was configured with
        expected: String,
        /// The same-length prefix actually present
        found: String,
    },
    /// A longest-prefix match consumed nothing
    #[error("Could not parse {name} from {}", quote(.found))]
    EmptyMatch {
        /// Semantic name of the predicate, e.g. "word"
        name: &'static str,
        /// Snippet of the input the match was attempted on
        found: String,
    },
    /// A digit run does not fit the target integer type
    #[error("Number {digits} is out of range")]
    NumberOutOfRange {
        /// The digits that were matched
        digits: String,
    },
    /// Input remained where the end of input was required
    #[error("Expected end of input, found {}", quote(.found))]
    TrailingInput {
        /// Snippet of the leftover input
        found: String,
    },
}

impl ParseError {
    pub(crate) fn unexpected(expected: impl Into<String>, found: &str) -> Self {
        ParseError::UnexpectedCharacter {
            expected: expected.into(),
            found: found.to_string(),
        }
    }

    pub(crate) fn empty_match(name: &'static str, input: &str) -> Self {
        ParseError::EmptyMatch {
            name,
            found: snippet(input),
        }
    }

    pub(crate) fn trailing(input: &str) -> Self {
        ParseError::TrailingInput {
            found: snippet(input),
        }
    }
}

/// Error type for building a parser, independent of any input
#[derive(Debug, Clone, Error)]
pub enum CompositionError {
    /// A sequence was requested from fewer than two parsers
    #[error("Can't sequence {0} parser(s): at least two are required, use a single parser directly")]
    TooFewParsers(usize),
    /// A pattern parser was given an invalid regular expression
    #[error("Invalid pattern for {name}: {source}")]
    InvalidPattern {
        /// Semantic name of the pattern
        name: &'static str,
        #[source]
        source: regex::Error,
    },
}

/// First few characters of `input`, marked when truncated
pub(crate) fn snippet(input: &str) -> String {
    match input.char_indices().nth(SNIPPET_CHARS) {
        Some((cut, _)) => format!("{}...", &input[..cut]),
        None => input.to_string(),
    }
}

fn quote(found: &str) -> String {
    if found.is_empty() {
        "end of input".to_string()
    } else {
        format!("'{}'", found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snippet_short_input_untouched() {
        assert_eq!(snippet("LRL = (MCG, TRC)"), "LRL = (MCG, TRC)");
    }

    #[test]
    fn test_snippet_truncates_long_input() {
        let input = "A".repeat(40);
        let expected = format!("{}...", "A".repeat(SNIPPET_CHARS));
        assert_eq!(snippet(&input), expected);
    }

    #[test]
    fn test_snippet_respects_char_boundaries() {
        let input = "é".repeat(SNIPPET_CHARS + 1);
        assert_eq!(snippet(&input), format!("{}...", "é".repeat(SNIPPET_CHARS)));
    }

    #[test]
    fn test_display_names_expected_and_found() {
        let err = ParseError::unexpected("(", "X");
        assert_eq!(err.to_string(), "Expected '(', found 'X'");

        let err = ParseError::empty_match("word", "123");
        assert_eq!(err.to_string(), "Could not parse word from '123'");
    }

    #[test]
    fn test_display_end_of_input() {
        let err = ParseError::unexpected(",", "");
        assert_eq!(err.to_string(), "Expected ',', found end of input");
    }

    #[test]
    fn test_composition_error_display() {
        let err = CompositionError::TooFewParsers(1);
        assert!(err.to_string().contains("at least two"));
    }
}
