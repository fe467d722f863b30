use crate::parser::Parser;
use crate::result::ParseResult;

/// Parser combinator that greedily matches and drops repeated occurrences
///
/// Runs its parser against successive remainders until it fails, discarding
/// every matched value. Always succeeds; zero matches is a valid outcome
/// consuming nothing. A zero-progress success terminates the repetition the
/// same way it does in `many`.
pub struct Skip<P> {
    parser: P,
}

impl<P> Skip<P> {
    pub fn new(parser: P) -> Self {
        Skip { parser }
    }
}

impl<P> Parser for Skip<P>
where
    P: Parser,
{
    type Atom = P::Atom;
    type Output = ();

    fn parse(&self, input: &[Self::Atom]) -> ParseResult<()> {
        let mut consumed = 0;

        loop {
            match self.parser.parse(&input[consumed..]) {
                ParseResult::Ok { consumed: 0, .. } => break,
                ParseResult::Ok {
                    consumed: advanced, ..
                } => consumed += advanced,
                ParseResult::Err { .. } => break,
            }
        }

        ParseResult::ok(consumed, ())
    }
}

/// Convenience function to create a Skip parser
pub fn skip<P>(parser: P) -> Skip<P>
where
    P: Parser,
{
    Skip::new(parser)
}
