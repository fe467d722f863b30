use crate::parser::Parser;
use crate::result::ParseResult;

/// Parser combinator that matches once and drops the value
///
/// Consumes what its parser consumes and yields unit. Failure propagates
/// verbatim; use this to require a token whose value is irrelevant.
pub struct Discard<P> {
    parser: P,
}

impl<P> Discard<P> {
    pub fn new(parser: P) -> Self {
        Discard { parser }
    }
}

impl<P> Parser for Discard<P>
where
    P: Parser,
{
    type Atom = P::Atom;
    type Output = ();

    fn parse(&self, input: &[Self::Atom]) -> ParseResult<()> {
        match self.parser.parse(input) {
            ParseResult::Ok { consumed, .. } => ParseResult::ok(consumed, ()),
            ParseResult::Err { position, error } => ParseResult::err(position, error),
        }
    }
}

/// Convenience function to create a Discard parser
pub fn discard<P>(parser: P) -> Discard<P>
where
    P: Parser,
{
    Discard::new(parser)
}

/// Extension trait to add .discard() method support for parsers
pub trait DiscardExt: Parser + Sized {
    fn discard(self) -> Discard<Self> {
        Discard::new(self)
    }
}

/// Implement DiscardExt for all parsers
impl<P> DiscardExt for P where P: Parser {}
