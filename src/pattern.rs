//! Card patterns: predicates over card identity.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::{Card, Suit, Value};
use crate::error::PatternError;

/// A predicate over card identity, used to request a class of card rather
/// than one specific card.
///
/// Patterns are immutable values once built.
///
/// # Example
///
/// ```
/// use deckrs::{Card, Pattern, Value};
///
/// let queens = Pattern::valued(Value::Queen);
/// assert!(queens.matches("Qh".parse::<Card>()?));
/// assert!(!queens.matches("Kh".parse::<Card>()?));
/// # Ok::<(), deckrs::ParseCardError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    /// Matches any card at all.
    Any,
    /// Matches exactly one card.
    Exact(Card),
    /// Matches any suit with a particular value.
    AnySuit(Value),
    /// Matches any value with a particular suit.
    AnyValue(Suit),
    /// Matches when any of the contained sub-patterns match.
    OneOf(Vec<Pattern>),
}

impl Pattern {
    /// Makes a pattern that matches just the given card.
    #[must_use]
    pub const fn exact(card: Card) -> Self {
        Self::Exact(card)
    }

    /// Makes a pattern that matches the given value in any suit.
    #[must_use]
    pub const fn valued(value: Value) -> Self {
        Self::AnySuit(value)
    }

    /// Makes a pattern that matches any card of the given suit.
    #[must_use]
    pub const fn suited(suit: Suit) -> Self {
        Self::AnyValue(suit)
    }

    /// Makes a pattern that matches when any sub-pattern matches.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::EmptySet`] if no sub-patterns are given.
    pub fn one_of(patterns: Vec<Self>) -> Result<Self, PatternError> {
        if patterns.is_empty() {
            return Err(PatternError::EmptySet);
        }
        Ok(Self::OneOf(patterns))
    }

    /// Makes a pattern that matches membership of the given cards.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::EmptySet`] if no cards are given.
    pub fn from_cards(cards: &[Card]) -> Result<Self, PatternError> {
        if cards.is_empty() {
            return Err(PatternError::EmptySet);
        }
        Ok(Self::OneOf(cards.iter().copied().map(Self::Exact).collect()))
    }

    /// Tests whether a card matches this pattern.
    #[must_use]
    pub fn matches(&self, card: Card) -> bool {
        match self {
            Self::Any => true,
            Self::Exact(exact) => card == *exact,
            Self::AnySuit(value) => card.value == *value,
            Self::AnyValue(suit) => card.suit == *suit,
            Self::OneOf(patterns) => patterns.iter().any(|pattern| pattern.matches(card)),
        }
    }

    /// Returns whether the pattern satisfies the construction rules.
    ///
    /// Only a hand-built [`Pattern::OneOf`] can be invalid: an empty set
    /// matches nothing and is rejected by [`Pattern::one_of`].
    #[must_use]
    pub fn is_valid(&self) -> bool {
        match self {
            Self::OneOf(patterns) => !patterns.is_empty() && patterns.iter().all(Self::is_valid),
            _ => true,
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("? of ?"),
            Self::Exact(card) => write!(f, "{card:#}"),
            Self::AnySuit(value) => write!(f, "{value} of ?"),
            Self::AnyValue(suit) => write!(f, "? of {suit}"),
            Self::OneOf(_) => f.write_str("<one of>"),
        }
    }
}
