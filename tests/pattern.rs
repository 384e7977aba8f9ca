//! Pattern matching integration tests.

use deckrs::{Card, Pattern, PatternError, Suit, Value};

fn card(s: &str) -> Card {
    s.parse().expect("valid card string")
}

#[test]
fn exact_matches_one_card() {
    let pattern = Pattern::exact(card("8s"));
    for c in Card::ALL {
        assert_eq!(pattern.matches(c), c == card("8s"));
    }
}

#[test]
fn any_matches_every_card() {
    for c in Card::ALL {
        assert!(Pattern::Any.matches(c));
    }
}

#[test]
fn suit_pattern_matches_the_whole_suit() {
    let pattern = Pattern::suited(Suit::Hearts);
    for c in Card::ALL {
        assert_eq!(pattern.matches(c), c.suit == Suit::Hearts);
    }
}

#[test]
fn value_pattern_matches_across_suits() {
    let pattern = Pattern::valued(Value::Jack);
    for c in Card::ALL {
        assert_eq!(pattern.matches(c), c.value == Value::Jack);
    }
}

#[test]
fn set_pattern_matches_its_members() {
    let members = [card("8c"), card("Jh"), card("Tc")];
    let pattern = Pattern::from_cards(&members).expect("non-empty set");
    for c in Card::ALL {
        assert_eq!(pattern.matches(c), members.contains(&c));
    }
}

#[test]
fn sets_match_through_sub_patterns() {
    let pattern = Pattern::one_of(vec![
        Pattern::valued(Value::Ace),
        Pattern::exact(card("2c")),
    ])
    .expect("non-empty set");

    assert!(pattern.matches(card("Ad")));
    assert!(pattern.matches(card("Ac")));
    assert!(pattern.matches(card("2c")));
    assert!(!pattern.matches(card("2s")));
}

#[test]
fn empty_sets_are_rejected() {
    assert_eq!(Pattern::one_of(Vec::new()), Err(PatternError::EmptySet));
    assert_eq!(Pattern::from_cards(&[]), Err(PatternError::EmptySet));

    // A hand-built empty set is invalid and matches nothing.
    let empty = Pattern::OneOf(Vec::new());
    assert!(!empty.is_valid());
    assert!(Card::ALL.iter().all(|&c| !empty.matches(c)));
    assert!(Pattern::suited(Suit::Clubs).is_valid());
}

#[test]
fn display_names_the_wildcard_half() {
    assert_eq!(Pattern::Any.to_string(), "? of ?");
    assert_eq!(Pattern::exact(card("8s")).to_string(), "Eight of Spades");
    assert_eq!(Pattern::valued(Value::Two).to_string(), "Two of ?");
    assert_eq!(Pattern::suited(Suit::Hearts).to_string(), "? of Hearts");
}
