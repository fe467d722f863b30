//! # Nibble - Parser Combinator Engine
//!
//! A small library of composable parsers over slices of tokens, plus the
//! combinators that build larger parsers out of smaller ones. Composable
//! pieces stay type-safe while failure positions and consumed lengths
//! stay precise across arbitrary nesting. The library emphasizes:
//!
//! - **Results as values**: every parse attempt yields a [`ParseResult`] —
//!   consumed length and value on success, offset and diagnostic on
//!   failure — never a panic on the parse path
//! - **Purity**: parsers are immutable values; the same parser on the same
//!   input always returns the same result, so composed parsers can be
//!   shared freely across threads
//! - **Composability**: primitives ([`token()`], [`literal()`]) combine
//!   through sequencing, choice, repetition, and mapping
//! - **Deduplicated sums**: a choice over alternatives of mixed output
//!   types exposes each distinct type once, however the choice is nested

pub mod atom;
pub mod choice;
pub mod discard;
pub mod error;
pub mod literal;
pub mod many;
pub mod map;
pub mod optional;
pub mod parser;
pub mod result;
pub mod satisfy;
pub mod sequence;
pub mod skip;
pub mod some;
pub mod token;
pub mod variant;

pub use atom::Atom;
pub use choice::{Choice, ChoiceExt, choice};
pub use discard::{Discard, DiscardExt, discard};
pub use error::ParseError;
pub use literal::{LiteralParser, literal};
pub use many::{Many, many, many_bounded};
pub use map::{Map, MapExt, map};
pub use optional::{Optional, OptionalExt, optional};
pub use parser::Parser;
pub use result::ParseResult;
pub use satisfy::{SatisfyParser, satisfy};
pub use sequence::{Sequence, SequenceExt, sequence};
pub use skip::{Skip, skip};
pub use some::{SomeParser, some};
pub use token::{AnyParser, TokenParser, any, token};
pub use variant::{TypeTag, Variant};
