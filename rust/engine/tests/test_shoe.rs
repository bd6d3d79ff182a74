use showdown_engine::deck::{format_hand, Shoe, MAX_DECKS};
use showdown_engine::errors::ShoeError;
use showdown_engine::parse::{parse_hand, parse_hand_with, DuplicatePolicy};

#[test]
fn deck_count_must_be_in_range() {
    assert_eq!(
        Shoe::new_with_seed(0, 1).unwrap_err(),
        ShoeError::InvalidDeckCount { decks: 0 }
    );
    assert!(Shoe::new_with_seed(MAX_DECKS + 1, 1).is_err());
    assert!(Shoe::new_with_seed(MAX_DECKS, 1).is_ok());
}

#[test]
fn shoe_holds_every_deck() {
    let shoe = Shoe::new_with_seed(3, 7).unwrap();
    assert_eq!(shoe.decks(), 3);
    assert_eq!(shoe.remaining(), 156);
}

#[test]
fn same_seed_deals_same_hands() {
    let mut a = Shoe::new_with_seed(2, 42).unwrap();
    let mut b = Shoe::new_with_seed(2, 42).unwrap();
    a.shuffle();
    b.shuffle();
    for _ in 0..10 {
        assert_eq!(a.deal_hand().unwrap(), b.deal_hand().unwrap());
    }
}

#[test]
fn dealt_hands_parse_back() {
    let mut shoe = Shoe::new_with_seed(1, 9).unwrap();
    shoe.shuffle();
    for _ in 0..10 {
        let cards = shoe.deal_hand().unwrap();
        let text = format_hand(&cards);
        assert_eq!(parse_hand(&text).unwrap(), cards);
        // a single deck never repeats a card
        assert!(parse_hand_with(&text, DuplicatePolicy::Reject).is_ok());
    }
}

#[test]
fn exhausted_shoe_reports_remaining_cards() {
    let mut shoe = Shoe::new_with_seed(1, 3).unwrap();
    for _ in 0..10 {
        shoe.deal_hand().unwrap();
    }
    assert_eq!(shoe.remaining(), 2);
    assert_eq!(
        shoe.deal_hand().unwrap_err(),
        ShoeError::Exhausted { remaining: 2 }
    );
    assert!(shoe.deal_card().is_some());
    assert!(shoe.deal_card().is_some());
    assert!(shoe.deal_card().is_none());
}
