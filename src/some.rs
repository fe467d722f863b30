use crate::parser::Parser;
use crate::result::ParseResult;

/// Parser combinator that matches one or more occurrences of the given parser
///
/// The first attempt must succeed; its failure propagates verbatim. After
/// that the repetition behaves like `many`, including zero-progress
/// termination.
pub struct SomeParser<P> {
    parser: P,
}

impl<P> SomeParser<P> {
    pub fn new(parser: P) -> Self {
        SomeParser { parser }
    }
}

impl<P> Parser for SomeParser<P>
where
    P: Parser,
{
    type Atom = P::Atom;
    type Output = Vec<P::Output>;

    fn parse(&self, input: &[Self::Atom]) -> ParseResult<Self::Output> {
        let (mut consumed, first_value) = match self.parser.parse(input) {
            ParseResult::Ok { consumed, value } => (consumed, value),
            ParseResult::Err { position, error } => return ParseResult::err(position, error),
        };

        let mut values = vec![first_value];

        loop {
            match self.parser.parse(&input[consumed..]) {
                ParseResult::Ok { consumed: 0, .. } => break,
                ParseResult::Ok {
                    consumed: advanced,
                    value,
                } => {
                    values.push(value);
                    consumed += advanced;
                }
                ParseResult::Err { .. } => break,
            }
        }

        ParseResult::ok(consumed, values)
    }
}

/// Convenience function to create a SomeParser
pub fn some<P>(parser: P) -> SomeParser<P>
where
    P: Parser,
{
    SomeParser::new(parser)
}
