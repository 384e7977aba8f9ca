//! Card catalog integration tests.

use deckrs::{Card, DECK_SIZE, ParseCardError, Suit, Value};

fn card(s: &str) -> Card {
    s.parse().expect("valid card string")
}

#[test]
fn parse_accepts_both_character_orders() {
    let ace_clubs = Card::new(Value::Ace, Suit::Clubs);
    for s in ["1c", "Ac", "ac", "aC", "1C", "cA", "c1", "CA"] {
        assert_eq!(card(s), ace_clubs, "failed to parse {s:?}");
    }

    assert_eq!(card("Qd"), Card::new(Value::Queen, Suit::Diamonds));
    assert_eq!(card("dQ"), Card::new(Value::Queen, Suit::Diamonds));
    assert_eq!(card("2s"), Card::new(Value::Two, Suit::Spades));
    assert_eq!(card("Th"), Card::new(Value::Ten, Suit::Hearts));
}

#[test]
fn parse_rejects_junk() {
    for s in ["", "1", "qq", " 1c", "1c ", "1q!", "!", "10h", "xx", "cc"] {
        assert!(s.parse::<Card>().is_err(), "{s:?} should not parse");
    }

    assert_eq!("".parse::<Card>(), Err(ParseCardError::Length));
    assert_eq!("Ahx".parse::<Card>(), Err(ParseCardError::Length));
    assert_eq!("qq".parse::<Card>(), Err(ParseCardError::UnknownSuit('q')));
}

#[test]
fn index_is_a_bijection() {
    assert_eq!(Card::ALL.len(), DECK_SIZE);
    for (expected, card) in Card::ALL.iter().enumerate() {
        assert_eq!(card.index() as usize, expected);
        assert_eq!(Card::from_index(card.index()), *card);
    }
}

#[test]
fn index_runs_suit_major() {
    assert_eq!(card("2c").index(), 0);
    assert_eq!(card("Ac").index(), 12);
    assert_eq!(card("2s").index(), 13);
    assert_eq!(card("2h").index(), 26);
    assert_eq!(card("2d").index(), 39);
    assert_eq!(card("Ad").index(), 51);
}

#[test]
fn canonical_order_ranks_value_first() {
    assert!(card("2s") < card("3c"));
    assert!(card("Tc") < card("Jd"));
    assert!(card("Kh") < card("As"));

    // Suit breaks ties within one value only.
    assert!(card("4c") < card("4s"));
    assert!(card("4s") < card("4h"));
    assert!(card("4h") < card("4d"));
}

#[test]
fn display_forms() {
    let ace = card("Ah");
    assert_eq!(ace.to_string(), "Ah");
    assert_eq!(format!("{ace:#}"), "Ace of Hearts");

    assert_eq!(Value::Ten.to_char(), 'T');
    assert_eq!(Value::Ten.to_string(), "Ten");
    assert_eq!(Suit::Spades.to_char(), 's');
    assert_eq!(Suit::Spades.to_string(), "Spades");
}

#[test]
fn suit_colors() {
    assert!(Suit::Hearts.is_red());
    assert!(Suit::Diamonds.is_red());
    assert!(Suit::Clubs.is_black());
    assert!(Suit::Spades.is_black());
}

#[test]
fn value_ranks_are_ascending() {
    assert_eq!(Value::Two.rank(), 0);
    assert_eq!(Value::Ace.rank(), 12);
    for pair in Value::ALL.windows(2) {
        assert!(pair[0] < pair[1]);
    }
}
