//! Pattern dealing walkthrough.

use std::time::{SystemTime, UNIX_EPOCH};

use deckrs::{Deck, Pattern, Suit, Value};

fn main() {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut deck = Deck::shuffled(seed);

    println!("Top five cards:");
    for card in deck.deal(5).expect("a fresh deck holds five cards") {
        println!("  {card:#}");
    }

    let hearts = Pattern::suited(Suit::Hearts);
    let dealt = deck
        .deal_matching(&hearts, 13)
        .expect("count is positive")
        .into_iter()
        .flatten()
        .collect::<Vec<_>>();
    println!("Pulled {} hearts from the remaining cards:", dealt.len());
    for card in dealt {
        println!("  {card:#}");
    }

    let wishes = [
        Pattern::exact("As".parse().expect("valid card")),
        Pattern::valued(Value::Queen),
        Pattern::Any,
    ];
    println!("Wish list:");
    for (pattern, card) in wishes.iter().zip(deck.deal_each(&wishes)) {
        match card {
            Some(card) => println!("  {pattern} -> {card:#}"),
            None => println!("  {pattern} -> already gone"),
        }
    }

    deck.reset();
    println!("After a reset the deck holds {} cards again.", deck.len());
}
