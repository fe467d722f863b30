use crate::error::ParseError;
use crate::parser::Parser;
use crate::result::ParseResult;

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Each attempt runs against the remainder left by the previous ones. A
/// failing attempt is discarded and terminates the repetition; it is never
/// an overall error. An attempt that succeeds without consuming anything
/// also terminates the repetition, since primitives like the empty literal
/// can legitimately match zero tokens and would otherwise loop forever.
///
/// With a bound, reaching it before the parser fails is an error: the
/// grammar should be restructured rather than lean on an unbounded loop.
pub struct Many<P> {
    parser: P,
    max: Option<usize>,
}

impl<P> Many<P> {
    pub fn new(parser: P, max: Option<usize>) -> Self {
        Many { parser, max }
    }
}

impl<P> Parser for Many<P>
where
    P: Parser,
{
    type Atom = P::Atom;
    type Output = Vec<P::Output>;

    fn parse(&self, input: &[Self::Atom]) -> ParseResult<Self::Output> {
        let mut values = Vec::new();
        let mut consumed = 0;

        loop {
            if let Some(max) = self.max {
                if values.len() == max {
                    return ParseResult::err(
                        consumed,
                        ParseError::RepetitionLimitExceeded { limit: max },
                    );
                }
            }

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

/// Convenience function to create an unbounded Many parser
pub fn many<P>(parser: P) -> Many<P>
where
    P: Parser,
{
    Many::new(parser, None)
}

/// Convenience function to create a bounded Many parser
pub fn many_bounded<P>(parser: P, max: usize) -> Many<P>
where
    P: Parser,
{
    Many::new(parser, Some(max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::literal;
    use crate::optional::optional;
    use crate::token::{any, token};

    #[test]
    fn test_many_zero_matches() {
        let parser = many(token(b'a'));

        let result = parser.parse(b"xyz");
        assert!(result.is_ok());
        assert_eq!(result.index(), 0);
        assert_eq!(result.unwrap_value(), vec![]);
    }

    #[test]
    fn test_many_multiple_matches() {
        let parser = many(token(b'a'));

        let result = parser.parse(b"aaab");
        assert_eq!(result.index(), 3);
        assert_eq!(result.unwrap_value(), vec![b'a', b'a', b'a']);
    }

    #[test]
    fn test_many_all_matches() {
        let parser = many(token(b'a'));

        let result = parser.parse(b"aaaa");
        assert_eq!(result.index(), 4);
        assert_eq!(result.unwrap_value(), vec![b'a', b'a', b'a', b'a']);
    }

    #[test]
    fn test_many_with_any() {
        let parser = many(any());

        let result = parser.parse(b"hello");
        assert_eq!(result.index(), 5);
        assert_eq!(result.unwrap_value(), b"hello".to_vec());
    }

    #[test]
    fn test_many_empty_input() {
        let parser = many(token(b'a'));

        let result = parser.parse(b"");
        assert_eq!(result, ParseResult::ok(0, vec![]));
    }

    #[test]
    fn test_many_of_literal() {
        let parser = many(literal(b"ab"));

        let result = parser.parse(b"ababx");
        assert_eq!(result.index(), 4);
        assert_eq!(
            result.unwrap_value(),
            vec![b"ab".to_vec(), b"ab".to_vec()]
        );
    }

    #[test]
    fn test_many_zero_progress_terminates() {
        // The empty literal always succeeds consuming nothing; the loop
        // must stop instead of spinning
        let parser = many(literal(b""));

        let result = parser.parse(b"python");
        assert_eq!(result, ParseResult::ok(0, vec![]));
    }

    #[test]
    fn test_many_zero_progress_through_optional_terminates() {
        let parser = many(optional(token(b'a')));

        // optional succeeds consuming 0 once 'a's run out
        let result = parser.parse(b"aab");
        assert_eq!(result.index(), 2);
        assert_eq!(result.unwrap_value(), vec![Some(b'a'), Some(b'a')]);
    }

    #[test]
    fn test_many_bounded_under_limit() {
        let parser = many_bounded(token(b'a'), 5);

        let result = parser.parse(b"aaab");
        assert_eq!(result.index(), 3);
        assert_eq!(result.unwrap_value(), vec![b'a', b'a', b'a']);
    }

    #[test]
    fn test_many_bounded_limit_reached() {
        let parser = many_bounded(token(b'a'), 3);

        let result = parser.parse(b"aaaaa");
        assert!(result.is_err());
        assert_eq!(result.index(), 3);
        assert_eq!(
            result.unwrap_error(),
            ParseError::RepetitionLimitExceeded { limit: 3 }
        );
    }

    #[test]
    fn test_many_bounded_zero_limit() {
        let parser = many_bounded(token(b'a'), 0);

        let result = parser.parse(b"aaa");
        assert_eq!(
            result.unwrap_error(),
            ParseError::RepetitionLimitExceeded { limit: 0 }
        );
    }

    mod properties {
        use super::{Parser, many, token};
        use proptest::prelude::*;

        proptest! {
            // Unbounded many never fails, and consumes one token per
            // collected value for a single-token child
            #[test]
            fn many_is_total(input in proptest::collection::vec(any::<u8>(), 0..16)) {
                let parser = many(token(b'a'));

                let result = parser.parse(&input);
                prop_assert!(result.is_ok());

                let leading = input.iter().take_while(|&&b| b == b'a').count();
                prop_assert_eq!(result.index(), leading);
                prop_assert_eq!(result.unwrap_value().len(), leading);
            }
        }
    }
}
