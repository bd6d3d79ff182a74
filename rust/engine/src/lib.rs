//! # showdown-engine: Poker Hand Ranking Core
//!
//! Parses 5 card poker hands, classifies them into categories and picks the
//! winning hand(s) of a batch. Hands may come from several decks shuffled
//! together, so equal categories are further split by their ranks.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card)
//! - [`parse`] - Hand string parsing and duplicate card policy
//! - [`hand`] - Hand classification and strength comparison
//! - [`showdown`] - Batch ranking and winner selection
//! - [`deck`] - Seeded multi-deck shoe for dealing hands
//! - [`errors`] - Error types for parsing and dealing
//!
//! ## Quick Start
//!
//! ```rust
//! use showdown_engine::cards::Rank;
//! use showdown_engine::hand::{classify, Category};
//! use showdown_engine::parse::parse_hand;
//! use showdown_engine::showdown::best_hand;
//!
//! let cards = parse_hand("A♤ 2♡ 3♧ 4♢ 5♤").unwrap();
//! let strength = classify(&cards);
//! assert_eq!(strength.category, Category::Straight);
//! assert_eq!(strength.tie_break, Rank::Five);
//!
//! let winners = best_hand(&["A♤ 2♡ 3♧ 4♢ 5♤", "2♤ 3♡ 4♧ 5♢ 6♤"]).unwrap();
//! assert_eq!(winners, vec!["2♤ 3♡ 4♧ 5♢ 6♤"]);
//! ```
//!
//! ## Multiple Decks
//!
//! Dealing from a shoe of several decks is reproducible with a seed:
//!
//! ```rust
//! use showdown_engine::deck::{format_hand, Shoe};
//!
//! let mut shoe = Shoe::new_with_seed(2, 42).unwrap();
//! shoe.shuffle();
//! let hand = shoe.deal_hand().unwrap();
//! assert_eq!(format_hand(&hand).split(' ').count(), 5);
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod hand;
pub mod parse;
pub mod showdown;
