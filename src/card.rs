//! Card identity types and the canonical 52-card catalog.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseCardError;

/// Number of cards in a deck.
pub const DECK_SIZE: usize = 52;

/// Card suit.
///
/// The declaration order fixes the suit half of the catalog index and acts
/// as the tiebreak in the canonical card ordering. It is never a gameplay
/// ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
}

impl Suit {
    /// All four suits in catalog order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Spades, Self::Hearts, Self::Diamonds];

    /// Returns the one-character code for this suit.
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Clubs => 'c',
            Self::Spades => 's',
            Self::Hearts => 'h',
            Self::Diamonds => 'd',
        }
    }

    /// Parses a one-character suit code, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns an error if the character is not one of `c`, `s`, `h` or `d`.
    pub const fn from_char(c: char) -> Result<Self, ParseCardError> {
        match c.to_ascii_lowercase() {
            'c' => Ok(Self::Clubs),
            's' => Ok(Self::Spades),
            'h' => Ok(Self::Hearts),
            'd' => Ok(Self::Diamonds),
            _ => Err(ParseCardError::UnknownSuit(c)),
        }
    }

    /// Returns whether the suit is red (hearts or diamonds).
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Self::Hearts | Self::Diamonds)
    }

    /// Returns whether the suit is black (clubs or spades).
    #[must_use]
    pub const fn is_black(self) -> bool {
        !self.is_red()
    }

    const fn from_index(index: u8) -> Self {
        match index {
            0 => Self::Clubs,
            1 => Self::Spades,
            2 => Self::Hearts,
            _ => Self::Diamonds,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Clubs => "Clubs",
            Self::Spades => "Spades",
            Self::Hearts => "Hearts",
            Self::Diamonds => "Diamonds",
        })
    }
}

/// Card value, ordered by rank with two lowest and ace highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Value {
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace. Always high.
    Ace,
}

impl Value {
    /// All thirteen values in ascending rank order.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Returns the relative rank, `0` for two up to `12` for ace.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Returns the one-character code for this value.
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Two => '2',
            Self::Three => '3',
            Self::Four => '4',
            Self::Five => '5',
            Self::Six => '6',
            Self::Seven => '7',
            Self::Eight => '8',
            Self::Nine => '9',
            Self::Ten => 'T',
            Self::Jack => 'J',
            Self::Queen => 'Q',
            Self::King => 'K',
            Self::Ace => 'A',
        }
    }

    /// Parses a one-character value code, case-insensitively.
    ///
    /// `'1'` is accepted as an alias for ace.
    ///
    /// # Errors
    ///
    /// Returns an error if the character names no card value.
    pub const fn from_char(c: char) -> Result<Self, ParseCardError> {
        match c.to_ascii_uppercase() {
            '2' => Ok(Self::Two),
            '3' => Ok(Self::Three),
            '4' => Ok(Self::Four),
            '5' => Ok(Self::Five),
            '6' => Ok(Self::Six),
            '7' => Ok(Self::Seven),
            '8' => Ok(Self::Eight),
            '9' => Ok(Self::Nine),
            'T' => Ok(Self::Ten),
            'J' => Ok(Self::Jack),
            'Q' => Ok(Self::Queen),
            'K' => Ok(Self::King),
            '1' | 'A' => Ok(Self::Ace),
            _ => Err(ParseCardError::UnknownValue(c)),
        }
    }

    const fn from_rank(rank: u8) -> Self {
        match rank {
            0 => Self::Two,
            1 => Self::Three,
            2 => Self::Four,
            3 => Self::Five,
            4 => Self::Six,
            5 => Self::Seven,
            6 => Self::Eight,
            7 => Self::Nine,
            8 => Self::Ten,
            9 => Self::Jack,
            10 => Self::Queen,
            11 => Self::King,
            _ => Self::Ace,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
            Self::Ace => "Ace",
        })
    }
}

/// A playing card.
///
/// Cards order by value rank first, with the suit as a tiebreak so that the
/// ordering is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    /// The value of the card.
    pub value: Value,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Every card in canonical index order.
    pub const ALL: [Self; DECK_SIZE] = {
        let mut all = [Self::new(Value::Two, Suit::Clubs); DECK_SIZE];
        let mut index = 0;
        while index < DECK_SIZE {
            all[index] = Self::from_index(index as u8);
            index += 1;
        }
        all
    };

    /// Creates a new card.
    #[must_use]
    pub const fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }

    /// Returns the dense catalog index of this card.
    ///
    /// Indices run suit-major: clubs `0..13`, spades `13..26`, hearts
    /// `26..39`, diamonds `39..52`, values ascending within each suit. The
    /// mapping is stable for the life of the process.
    #[must_use]
    pub const fn index(self) -> u8 {
        self.suit as u8 * 13 + self.value.rank()
    }

    /// Returns the card with the given dense catalog index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below [`DECK_SIZE`].
    #[must_use]
    pub const fn from_index(index: u8) -> Self {
        assert!((index as usize) < DECK_SIZE, "card index out of range");
        Self {
            value: Value::from_rank(index % 13),
            suit: Suit::from_index(index / 13),
        }
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses a two-character card code.
    ///
    /// The value and suit characters are accepted in either order and any
    /// case, so `"Ah"`, `"ha"` and `"1H"` all name the ace of hearts.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(first), Some(second), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ParseCardError::Length);
        };

        if let (Ok(value), Ok(suit)) = (Value::from_char(first), Suit::from_char(second)) {
            return Ok(Self::new(value, suit));
        }
        let value = Value::from_char(second)?;
        let suit = Suit::from_char(first)?;
        Ok(Self::new(value, suit))
    }
}

impl fmt::Display for Card {
    /// Writes the short code (`"Ah"`), or the long name (`"Ace of Hearts"`)
    /// with the alternate flag.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{} of {}", self.value, self.suit)
        } else {
            write!(f, "{}{}", self.value.to_char(), self.suit.to_char())
        }
    }
}
