use thiserror::Error;

/// The ways a parse attempt can fail
///
/// Every kind renders to a human-readable diagnostic; the offset at which
/// the failure was detected travels separately, in
/// [`ParseResult::Err`](crate::ParseResult::Err). Unwrapping the wrong
/// variant of a result is a programming error and panics instead of
/// appearing here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A primitive needed at least one token and the slice was empty
    #[error("empty input: expected at least one token")]
    EmptyInput,

    /// A token or subsequence was present but did not equal the expected one
    #[error("no match: expected {expected}, found {found}")]
    NoMatch { expected: String, found: String },

    /// An expected literal is longer than the remaining input
    #[error("input too short: expected {expected} tokens, {available} available")]
    InputTooShort { expected: usize, available: usize },

    /// Every branch of a choice failed
    #[error("no alternative matched")]
    NoAlternativeMatched,

    /// A bounded repetition hit its limit before its parser failed
    #[error("repetition limit of {limit} reached; restructure the grammar instead of relying on an unbounded loop")]
    RepetitionLimitExceeded { limit: usize },
}
