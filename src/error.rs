//! Error types for card and deck operations.

use thiserror::Error;

/// Errors that can occur while dealing cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// More cards were requested than remain undrawn.
    #[error("the deck has no cards left to deal")]
    Empty,
    /// The requested card count is outside the accepted range.
    #[error("requested card count is out of range")]
    OutOfRange,
}

/// Errors that can occur while parsing a card from a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The input was not exactly two characters.
    #[error("card string must be exactly two characters")]
    Length,
    /// The value character was not recognised.
    #[error("unknown card value {0:?}")]
    UnknownValue(char),
    /// The suit character was not recognised.
    #[error("unknown card suit {0:?}")]
    UnknownSuit(char),
}

/// Errors that can occur while building a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PatternError {
    /// A set pattern was built from no sub-patterns.
    #[error("set pattern must contain at least one sub-pattern")]
    EmptySet,
}
