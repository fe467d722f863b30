use crate::atom::Atom;
use crate::error::ParseError;
use crate::parser::Parser;
use crate::result::ParseResult;

/// Parser that matches a fixed subsequence of tokens
///
/// Equality is exact, token for token. An empty expected sequence matches
/// anything and consumes nothing.
pub struct LiteralParser<T> {
    expected: Vec<T>,
}

impl<T: Atom> LiteralParser<T> {
    pub fn new(expected: impl AsRef<[T]>) -> Self {
        LiteralParser {
            expected: expected.as_ref().to_vec(),
        }
    }
}

impl<T: Atom> Parser for LiteralParser<T> {
    type Atom = T;
    type Output = Vec<T>;

    fn parse(&self, input: &[T]) -> ParseResult<Vec<T>> {
        if input.len() < self.expected.len() {
            return ParseResult::err(
                0,
                ParseError::InputTooShort {
                    expected: self.expected.len(),
                    available: input.len(),
                },
            );
        }
        if input[..self.expected.len()] == self.expected[..] {
            ParseResult::ok(self.expected.len(), self.expected.clone())
        } else {
            ParseResult::err(
                0,
                ParseError::NoMatch {
                    expected: T::render_slice(&self.expected),
                    found: T::render_slice(&input[..self.expected.len()]),
                },
            )
        }
    }
}

/// Convenience function to create a LiteralParser
pub fn literal<T: Atom>(expected: impl AsRef<[T]>) -> LiteralParser<T> {
    LiteralParser::new(expected)
}
