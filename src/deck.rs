//! The partitioned deck: a 52-slot index array split by a moving boundary.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE};
use crate::error::DealError;
use crate::pattern::Pattern;
use crate::shuffle;

/// A standard 52-card deck with an undrawn pile and a drawn pile.
///
/// The deck owns a fixed array of card indices that is always a permutation
/// of `0..52`. A single boundary splits the array into the undrawn prefix
/// and the drawn suffix, so dealing and restoring move the boundary (or
/// rotate a short span) instead of allocating. The top of the deck, the
/// next card a plain deal returns, sits just below the boundary.
///
/// A deck is a cheap per-session value and is not safe for concurrent
/// mutation; callers needing shared access must serialize it externally.
///
/// # Example
///
/// ```
/// use deckrs::{Deck, Pattern, Suit};
///
/// let mut deck = Deck::shuffled(42);
/// let hearts = deck.deal_matching(&Pattern::suited(Suit::Hearts), 5)?;
/// assert!(hearts.iter().all(|card| card.is_some_and(|c| c.suit == Suit::Hearts)));
/// # Ok::<(), deckrs::DealError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Deck {
    /// Card indices; always a permutation of `0..52`.
    slots: [u8; DECK_SIZE],
    /// Number of undrawn cards; `slots[..undrawn]` is the undrawn pile.
    undrawn: usize,
    /// Random number generator for shuffling and random deals.
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a fresh deck in catalog order with the given seed.
    ///
    /// Two decks built from the same seed shuffle and deal identically.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a deck with the given seed and shuffles it once.
    #[must_use]
    pub fn shuffled(seed: u64) -> Self {
        let mut deck = Self::new(seed);
        deck.shuffle();
        deck
    }

    /// Creates a fresh deck seeded from the operating system.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::with_rng(ChaCha8Rng::from_rng(&mut rand::rng()))
    }

    fn with_rng(rng: ChaCha8Rng) -> Self {
        Self {
            slots: core::array::from_fn(|i| i as u8),
            undrawn: DECK_SIZE,
            rng,
        }
    }

    /// Returns all drawn cards to the undrawn pile.
    ///
    /// Cards come back in whatever order they currently occupy in the
    /// array, so a reset does not restore the original catalog order.
    /// Idempotent when the deck is already full.
    pub const fn reset(&mut self) {
        self.undrawn = DECK_SIZE;
    }

    /// Shuffles the undrawn pile into a uniformly random order.
    ///
    /// The drawn pile is left untouched.
    pub fn shuffle(&mut self) {
        shuffle::shuffle(&mut self.slots[..self.undrawn], &mut self.rng);
    }

    /// Returns the number of undrawn cards.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.undrawn
    }

    /// Returns whether the undrawn pile is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.undrawn == 0
    }

    /// Returns the undrawn cards, top of the deck first.
    pub fn undrawn(&self) -> impl Iterator<Item = Card> + '_ {
        self.slots[..self.undrawn]
            .iter()
            .rev()
            .map(|&index| Card::from_index(index))
    }

    /// Returns the drawn cards, the slot nearest the boundary first.
    ///
    /// Plain deals file their cards nearest the boundary, so for a deck
    /// used only that way this iterates most recently drawn first.
    pub fn drawn(&self) -> impl Iterator<Item = Card> + '_ {
        self.slots[self.undrawn..]
            .iter()
            .map(|&index| Card::from_index(index))
    }

    /// Deals the top card of the deck.
    ///
    /// The dealt card keeps its array position: it ends up in the drawn
    /// pile adjacent to the new boundary.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::Empty`] if no undrawn cards remain.
    pub fn deal_one(&mut self) -> Result<Card, DealError> {
        if self.undrawn == 0 {
            return Err(DealError::Empty);
        }
        self.undrawn -= 1;
        Ok(Card::from_index(self.slots[self.undrawn]))
    }

    /// Deals the top `count` cards in the order a card-at-a-time deal
    /// would produce them.
    ///
    /// The deal is atomic: on failure the deck is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::OutOfRange`] if `count` is zero and
    /// [`DealError::Empty`] if fewer than `count` cards remain undrawn.
    pub fn deal(&mut self, count: usize) -> Result<Vec<Card>, DealError> {
        if count == 0 {
            return Err(DealError::OutOfRange);
        }
        if self.undrawn < count {
            return Err(DealError::Empty);
        }
        let dealt = self.slots[self.undrawn - count..self.undrawn]
            .iter()
            .rev()
            .map(|&index| Card::from_index(index))
            .collect();
        self.undrawn -= count;
        Ok(dealt)
    }

    /// Deals a uniformly random undrawn card.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::Empty`] if no undrawn cards remain.
    pub fn deal_random(&mut self) -> Result<Card, DealError> {
        if self.undrawn == 0 {
            return Err(DealError::Empty);
        }
        let position = self.rng.random_range(0..self.undrawn);
        Ok(self.extract(position))
    }

    /// Deals the top card and puts it back at the bottom of the undrawn
    /// pile.
    ///
    /// The deck keeps its size, so dealing more cards this way than the
    /// pile holds revisits cards.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::Empty`] if no undrawn cards remain.
    pub fn deal_one_cycled(&mut self) -> Result<Card, DealError> {
        if self.undrawn == 0 {
            return Err(DealError::Empty);
        }
        self.slots[..self.undrawn].rotate_right(1);
        Ok(Card::from_index(self.slots[0]))
    }

    /// Deals the first card matching `pattern`, scanning from the top of
    /// the deck downward.
    ///
    /// A deck holding no matching card returns `Ok(None)` without mutating
    /// state; that is a normal outcome, not an error. The extracted card is
    /// filed at the far end of the drawn pile, like [`Deck::remove_card`].
    ///
    /// # Errors
    ///
    /// Returns [`DealError::Empty`] only for [`Pattern::Any`], which deals
    /// the top card exactly like [`Deck::deal_one`].
    pub fn deal_one_matching(&mut self, pattern: &Pattern) -> Result<Option<Card>, DealError> {
        if matches!(pattern, Pattern::Any) {
            return self.deal_one().map(Some);
        }
        Ok(self.extract_first_match(pattern))
    }

    /// Deals up to `count` cards matching `pattern`.
    ///
    /// [`Pattern::Any`] behaves exactly like [`Deck::deal`]. Any other
    /// pattern is serviced by `count` independent top-down scans, so the
    /// result may contain `None` entries once the matches run out.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::OutOfRange`] if `count` is zero and
    /// [`DealError::Empty`] if [`Pattern::Any`] asks for more cards than
    /// remain undrawn.
    pub fn deal_matching(
        &mut self,
        pattern: &Pattern,
        count: usize,
    ) -> Result<Vec<Option<Card>>, DealError> {
        if count == 0 {
            return Err(DealError::OutOfRange);
        }
        if matches!(pattern, Pattern::Any) {
            return Ok(self.deal(count)?.into_iter().map(Some).collect());
        }
        Ok((0..count)
            .map(|_| self.extract_first_match(pattern))
            .collect())
    }

    /// Deals one card per pattern, servicing patterns in input order.
    ///
    /// Each pattern gets its own top-down scan of the undrawn pile, so an
    /// earlier pattern can consume a card a later, less specific pattern
    /// would also have matched; order exact patterns before wildcards when
    /// exclusivity matters. Slots with no remaining match are `None`.
    #[must_use]
    pub fn deal_each(&mut self, patterns: &[Pattern]) -> Vec<Option<Card>> {
        patterns
            .iter()
            .map(|pattern| self.extract_first_match(pattern))
            .collect()
    }

    /// Removes a specific card from the undrawn pile.
    ///
    /// The removed card is filed at the far end of the drawn pile, away
    /// from the boundary; bulk removal files at the near end instead, see
    /// [`Deck::remove_cards`]. Returns `false` without mutating state when
    /// the card is not undrawn.
    pub fn remove_card(&mut self, card: Card) -> bool {
        let index = card.index();
        let Some(position) = self.slots[..self.undrawn]
            .iter()
            .position(|&slot| slot == index)
        else {
            return false;
        };
        self.extract(position);
        true
    }

    /// Removes every listed card that is still undrawn.
    ///
    /// One pass over the undrawn pile: survivors compact to the front in
    /// order, removed cards land immediately after the new boundary in the
    /// order the scan met them (deck order, not input order), and the drawn
    /// pile follows unchanged. Cards that are not undrawn are skipped.
    /// Returns how many cards were removed.
    pub fn remove_cards(&mut self, cards: &[Card]) -> usize {
        let wanted = index_set(cards);

        let mut kept = [0u8; DECK_SIZE];
        let mut kept_len = 0;
        let mut removed = [0u8; DECK_SIZE];
        let mut removed_len = 0;
        for &index in &self.slots[..self.undrawn] {
            if wanted[index as usize] {
                removed[removed_len] = index;
                removed_len += 1;
            } else {
                kept[kept_len] = index;
                kept_len += 1;
            }
        }

        self.slots[..kept_len].copy_from_slice(&kept[..kept_len]);
        self.slots[kept_len..self.undrawn].copy_from_slice(&removed[..removed_len]);
        self.undrawn = kept_len;
        removed_len
    }

    /// Restores a specific card from the drawn pile.
    ///
    /// The restored card becomes the top of the deck, the next card a
    /// plain deal returns; the rest of the drawn pile keeps its relative
    /// order. Returns `false` without mutating state when the card is not
    /// in the drawn pile.
    pub fn replace_card(&mut self, card: Card) -> bool {
        let index = card.index();
        let Some(offset) = self.slots[self.undrawn..]
            .iter()
            .position(|&slot| slot == index)
        else {
            return false;
        };
        let position = self.undrawn + offset;
        self.slots[self.undrawn..=position].rotate_right(1);
        self.undrawn += 1;
        true
    }

    /// Restores every listed card that is in the drawn pile.
    ///
    /// The drawn pile is scanned from its far end toward the boundary:
    /// survivors compact toward the far end keeping their relative order,
    /// and the matched cards re-enter at the bottom of the undrawn pile in
    /// the order the scan met them. The previously undrawn cards shift up,
    /// so the old top of the deck stays on top. Returns how many cards
    /// were restored.
    pub fn replace_cards(&mut self, cards: &[Card]) -> usize {
        let wanted = index_set(cards);

        let mut matched = [0u8; DECK_SIZE];
        let mut matched_len = 0;
        let mut survivors = [0u8; DECK_SIZE];
        let mut survivors_len = 0;
        for &index in self.slots[self.undrawn..].iter().rev() {
            if wanted[index as usize] {
                matched[matched_len] = index;
                matched_len += 1;
            } else {
                survivors[survivors_len] = index;
                survivors_len += 1;
            }
        }
        if matched_len == 0 {
            return 0;
        }

        self.slots.copy_within(..self.undrawn, matched_len);
        self.slots[..matched_len].copy_from_slice(&matched[..matched_len]);
        for (offset, &index) in survivors[..survivors_len].iter().enumerate() {
            self.slots[DECK_SIZE - 1 - offset] = index;
        }
        self.undrawn += matched_len;
        matched_len
    }

    /// Checks that the slot array is still a permutation of every card
    /// index.
    ///
    /// Intended for tests and debugging, not production control flow.
    ///
    /// # Panics
    ///
    /// Panics if any card index appears twice: a duplicate means a
    /// partition operation is broken, which is unrecoverable.
    pub fn validate(&self) {
        let mut seen = [false; DECK_SIZE];
        for &index in &self.slots {
            assert!(
                !seen[index as usize],
                "card index {index} appears more than once in the deck"
            );
            seen[index as usize] = true;
        }
    }

    /// Removes the undrawn card at `position`, filing it at the far end of
    /// the drawn pile, and returns it.
    fn extract(&mut self, position: usize) -> Card {
        let index = self.slots[position];
        self.slots[position..].rotate_left(1);
        self.undrawn -= 1;
        Card::from_index(index)
    }

    /// Scans the undrawn pile top-down and extracts the first match.
    fn extract_first_match(&mut self, pattern: &Pattern) -> Option<Card> {
        let position = self.slots[..self.undrawn]
            .iter()
            .rposition(|&index| pattern.matches(Card::from_index(index)))?;
        Some(self.extract(position))
    }
}

impl fmt::Display for Deck {
    /// Writes the undrawn pile, one short card code per line, top first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in self.undrawn() {
            writeln!(f, "{card}")?;
        }
        Ok(())
    }
}

/// Builds a membership mask over card indices.
fn index_set(cards: &[Card]) -> [bool; DECK_SIZE] {
    let mut wanted = [false; DECK_SIZE];
    for card in cards {
        wanted[card.index() as usize] = true;
    }
    wanted
}
