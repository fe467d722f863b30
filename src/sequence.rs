use crate::parser::Parser;
use crate::result::ParseResult;

/// Parser combinator that runs two parsers back to back and returns both
/// results as a tuple
///
/// The second parser sees the remainder left by the first. A failure of
/// the second is reported at `first.consumed + second.position`, so the
/// offset stays in the coordinate space of the slice this combinator was
/// given; accumulating consumed-so-far at each nesting level keeps the
/// outermost caller's frame authoritative.
///
/// Note: chaining `.then()` produces nested tuples like `(((a, b), c), d)`
/// rather than flat ones. Rust has no variadic generics; the nested shape
/// is general and destructuring makes the parse order explicit.
pub struct Sequence<P1, P2> {
    first: P1,
    second: P2,
}

impl<P1, P2> Sequence<P1, P2> {
    pub fn new(first: P1, second: P2) -> Self {
        Sequence { first, second }
    }
}

impl<P1, P2> Parser for Sequence<P1, P2>
where
    P1: Parser,
    P2: Parser<Atom = P1::Atom>,
{
    type Atom = P1::Atom;
    type Output = (P1::Output, P2::Output);

    fn parse(&self, input: &[Self::Atom]) -> ParseResult<Self::Output> {
        let (consumed, first_value) = match self.first.parse(input) {
            ParseResult::Ok { consumed, value } => (consumed, value),
            ParseResult::Err { position, error } => return ParseResult::err(position, error),
        };

        match self.second.parse(&input[consumed..]) {
            ParseResult::Ok {
                consumed: second_consumed,
                value: second_value,
            } => ParseResult::ok(consumed + second_consumed, (first_value, second_value)),
            ParseResult::Err { position, error } => ParseResult::err(consumed + position, error),
        }
    }
}

/// Convenience function to create a Sequence parser
pub fn sequence<P1, P2>(first: P1, second: P2) -> Sequence<P1, P2>
where
    P1: Parser,
    P2: Parser<Atom = P1::Atom>,
{
    Sequence::new(first, second)
}

/// Extension trait to add .then() method support for parsers
pub trait SequenceExt: Parser + Sized {
    fn then<P>(self, other: P) -> Sequence<Self, P>
    where
        P: Parser<Atom = Self::Atom>,
    {
        Sequence::new(self, other)
    }
}

/// Implement SequenceExt for all parsers
impl<P> SequenceExt for P where P: Parser {}
