use crate::atom::Atom;
use crate::error::ParseError;
use crate::parser::Parser;
use crate::result::ParseResult;
use std::marker::PhantomData;

/// Parser that consumes and returns any single token
pub struct AnyParser<T> {
    marker: PhantomData<T>,
}

impl<T: Atom> AnyParser<T> {
    pub fn new() -> Self {
        AnyParser {
            marker: PhantomData,
        }
    }
}

impl<T: Atom> Parser for AnyParser<T> {
    type Atom = T;
    type Output = T;

    fn parse(&self, input: &[T]) -> ParseResult<T> {
        match input.first() {
            Some(&first) => ParseResult::ok(1, first),
            None => ParseResult::err(0, ParseError::EmptyInput),
        }
    }
}

/// Parser that matches one specific token
pub struct TokenParser<T> {
    expected: T,
}

impl<T: Atom> TokenParser<T> {
    pub fn new(expected: T) -> Self {
        TokenParser { expected }
    }
}

impl<T: Atom> Parser for TokenParser<T> {
    type Atom = T;
    type Output = T;

    fn parse(&self, input: &[T]) -> ParseResult<T> {
        match input.first() {
            Some(&first) if first == self.expected => ParseResult::ok(1, first),
            Some(first) => ParseResult::err(
                0,
                ParseError::NoMatch {
                    expected: self.expected.render(),
                    found: first.render(),
                },
            ),
            None => ParseResult::err(0, ParseError::EmptyInput),
        }
    }
}

/// Convenience function to create an AnyParser
pub fn any<T: Atom>() -> AnyParser<T> {
    AnyParser::new()
}

/// Convenience function to create a TokenParser
pub fn token<T: Atom>(expected: T) -> TokenParser<T> {
    TokenParser::new(expected)
}
