//! A 52-card deck engine with pattern dealing and optional `no_std` support.
//!
//! The crate provides a [`Deck`] that keeps every card of the standard
//! 52-card pack in a fixed index array split into an undrawn pile and a
//! drawn pile by a single moving boundary. Dealing, removing and restoring
//! specific cards move the boundary (or rotate a short span) in place, so
//! no operation can lose or duplicate a card. [`Pattern`] values request a
//! class of card (a suit, a value, a set of cards) rather than an exact one.
//!
//! # Example
//!
//! ```
//! use deckrs::{Deck, Pattern, Value};
//!
//! let mut deck = Deck::shuffled(42);
//! let ace = deck.deal_one_matching(&Pattern::valued(Value::Ace)).unwrap();
//! assert!(ace.is_some());
//! assert_eq!(deck.len(), 51);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod pattern;
mod shuffle;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit, Value};
pub use deck::Deck;
pub use error::{DealError, ParseCardError, PatternError};
pub use pattern::Pattern;
