use thiserror::Error;

use crate::cards::Card;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HandError {
    #[error("Invalid hand length: expected 5 cards, found {found}")]
    InvalidHandLength { found: usize },
    #[error("Invalid suit in card '{token}'")]
    InvalidSuit { token: String },
    #[error("Invalid rank in card '{token}'")]
    InvalidRank { token: String },
    #[error("Duplicate card {card} in hand")]
    DuplicateCard { card: Card },
    #[error("No hands to compare")]
    NoHands,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShoeError {
    #[error("Invalid deck count: {decks}, expected 1 to 8")]
    InvalidDeckCount { decks: u8 },
    #[error("Shoe exhausted: {remaining} cards left")]
    Exhausted { remaining: usize },
}
