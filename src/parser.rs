use crate::atom::Atom;
use crate::result::ParseResult;

/// Core parser trait for parser combinators
///
/// A parser is an immutable value wrapping one pure operation: interpret a
/// prefix of the given slice and report how far it got. Given identical
/// slice contents the same parser always returns an identical result; no
/// parser mutates its input or any shared state. Combinators own their
/// child parsers by value, so a composed parser can be shared across
/// threads and invoked concurrently on independent slices.
pub trait Parser {
    /// The element type of the input slice
    type Atom: Atom;
    /// The semantic value produced on success
    type Output;

    /// Attempt to parse a prefix of `input`
    ///
    /// On success the result carries the number of tokens consumed; on
    /// failure it carries the offset, relative to `input`, at which the
    /// mismatch was detected. Failures never consume input.
    fn parse(&self, input: &[Self::Atom]) -> ParseResult<Self::Output>;
}

impl<P: Parser + ?Sized> Parser for &P {
    type Atom = P::Atom;
    type Output = P::Output;

    fn parse(&self, input: &[Self::Atom]) -> ParseResult<Self::Output> {
        (**self).parse(input)
    }
}

impl<P: Parser + ?Sized> Parser for Box<P> {
    type Atom = P::Atom;
    type Output = P::Output;

    fn parse(&self, input: &[Self::Atom]) -> ParseResult<Self::Output> {
        (**self).parse(input)
    }
}
