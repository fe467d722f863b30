use crate::atom::Atom;
use crate::error::ParseError;
use crate::parser::Parser;
use crate::result::ParseResult;
use std::borrow::Cow;
use std::marker::PhantomData;

/// Parser that matches a single token satisfying a predicate
///
/// The label names what the predicate accepts and feeds the mismatch
/// diagnostic, since a bare closure cannot describe itself.
pub struct SatisfyParser<T, F> {
    predicate: F,
    label: Cow<'static, str>,
    marker: PhantomData<T>,
}

impl<T: Atom, F> SatisfyParser<T, F>
where
    F: Fn(&T) -> bool,
{
    pub fn new(predicate: F, label: impl Into<Cow<'static, str>>) -> Self {
        SatisfyParser {
            predicate,
            label: label.into(),
            marker: PhantomData,
        }
    }
}

impl<T: Atom, F> Parser for SatisfyParser<T, F>
where
    F: Fn(&T) -> bool,
{
    type Atom = T;
    type Output = T;

    fn parse(&self, input: &[T]) -> ParseResult<T> {
        match input.first() {
            Some(&first) if (self.predicate)(&first) => ParseResult::ok(1, first),
            Some(first) => ParseResult::err(
                0,
                ParseError::NoMatch {
                    expected: self.label.to_string(),
                    found: first.render(),
                },
            ),
            None => ParseResult::err(0, ParseError::EmptyInput),
        }
    }
}

/// Convenience function to create a SatisfyParser
pub fn satisfy<T: Atom, F>(predicate: F, label: impl Into<Cow<'static, str>>) -> SatisfyParser<T, F>
where
    F: Fn(&T) -> bool,
{
    SatisfyParser::new(predicate, label)
}
