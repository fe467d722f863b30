use crate::parser::Parser;
use crate::result::ParseResult;

/// Parser combinator that matches zero or one occurrence of the given parser
///
/// Success wraps the value in `Some`; failure becomes `Ok(0, None)`. An
/// optional parser never fails and never consumes input on the failing
/// branch.
pub struct Optional<P> {
    parser: P,
}

impl<P> Optional<P> {
    pub fn new(parser: P) -> Self {
        Optional { parser }
    }
}

impl<P> Parser for Optional<P>
where
    P: Parser,
{
    type Atom = P::Atom;
    type Output = Option<P::Output>;

    fn parse(&self, input: &[Self::Atom]) -> ParseResult<Self::Output> {
        match self.parser.parse(input) {
            ParseResult::Ok { consumed, value } => ParseResult::ok(consumed, Some(value)),
            ParseResult::Err { .. } => ParseResult::ok(0, None),
        }
    }
}

/// Convenience function to create an Optional parser
pub fn optional<P>(parser: P) -> Optional<P>
where
    P: Parser,
{
    Optional::new(parser)
}

/// Extension trait to add .optional() method support for parsers
pub trait OptionalExt: Parser + Sized {
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }
}

/// Implement OptionalExt for all parsers
impl<P> OptionalExt for P where P: Parser {}
