use crate::atom::Atom;
use crate::error::ParseError;
use crate::parser::Parser;
use crate::result::ParseResult;
use crate::variant::{TypeTag, Variant, dedup_tags};
use std::any::Any;

/// Adapter that erases a branch's output into a [`Variant`]
struct Tagged<P> {
    parser: P,
}

impl<P> Parser for Tagged<P>
where
    P: Parser,
    P::Output: Any,
{
    type Atom = P::Atom;
    type Output = Variant;

    fn parse(&self, input: &[Self::Atom]) -> ParseResult<Variant> {
        match self.parser.parse(input) {
            ParseResult::Ok { consumed, value } => ParseResult::ok(consumed, Variant::wrap(value)),
            ParseResult::Err { position, error } => ParseResult::err(position, error),
        }
    }
}

/// One type-erased alternative of a choice, with its output-type descriptors
struct Branch<T: Atom> {
    parser: Box<dyn Parser<Atom = T, Output = Variant>>,
    tags: Vec<TypeTag>,
}

impl<T: Atom> Branch<T> {
    fn new<P>(parser: P) -> Self
    where
        P: Parser<Atom = T> + 'static,
        P::Output: Any,
    {
        // A branch that is itself a choice contributes its whole flattened
        // tag list; anything else contributes the tag of its output type
        let tags = match (&parser as &dyn Any).downcast_ref::<Choice<T>>() {
            Some(nested) => nested.tags().to_vec(),
            None => vec![TypeTag::of::<P::Output>()],
        };
        Branch {
            tags,
            parser: Box::new(Tagged { parser }),
        }
    }
}

/// Parser combinator that tries alternatives left to right and returns the
/// first success
///
/// The output is a [`Variant`] tagged with the type of whichever branch
/// matched. The choice's set of possible tags is the flattened,
/// deduplicated union of its branches' output types, computed when the
/// choice is built: alternatives sharing an output type appear once, in
/// first-occurrence order, and nested choices contribute their own
/// flattened lists rather than stacking sums. Which alternative matches
/// first depends on the order given; the tag shape does not.
///
/// There is no longest-match or error-priority heuristic: when every
/// branch fails the individual errors are dropped and the choice reports
/// that no alternative matched, at offset 0.
pub struct Choice<T: Atom> {
    branches: Vec<Branch<T>>,
    tags: Vec<TypeTag>,
}

impl<T: Atom> Choice<T> {
    fn from_branches(branches: Vec<Branch<T>>) -> Self {
        let tags = dedup_tags(branches.iter().flat_map(|branch| branch.tags.iter().copied()));
        Choice { branches, tags }
    }

    /// Append one more alternative, tried after the existing ones
    pub fn or<P>(mut self, parser: P) -> Self
    where
        P: Parser<Atom = T> + 'static,
        P::Output: Any,
    {
        self.branches.push(Branch::new(parser));
        Self::from_branches(self.branches)
    }

    /// The deduplicated output-type shape of this choice
    pub fn tags(&self) -> &[TypeTag] {
        &self.tags
    }
}

impl<T: Atom> Parser for Choice<T> {
    type Atom = T;
    type Output = Variant;

    fn parse(&self, input: &[T]) -> ParseResult<Variant> {
        for branch in &self.branches {
            if let ParseResult::Ok { consumed, value } = branch.parser.parse(input) {
                return ParseResult::ok(consumed, value);
            }
        }
        ParseResult::err(0, ParseError::NoAlternativeMatched)
    }
}

/// Convenience function to create a Choice parser from two alternatives
pub fn choice<P1, P2>(first: P1, second: P2) -> Choice<P1::Atom>
where
    P1: Parser + 'static,
    P1::Output: Any,
    P2: Parser<Atom = P1::Atom> + 'static,
    P2::Output: Any,
{
    Choice::from_branches(vec![Branch::new(first), Branch::new(second)])
}

/// Extension trait to add .or() method support for parsers
pub trait ChoiceExt: Parser + Sized {
    fn or<P>(self, other: P) -> Choice<Self::Atom>
    where
        Self: 'static,
        Self::Output: Any,
        P: Parser<Atom = Self::Atom> + 'static,
        P::Output: Any,
    {
        choice(self, other)
    }
}

/// Implement ChoiceExt for all parsers
impl<P> ChoiceExt for P where P: Parser {}
