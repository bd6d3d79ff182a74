use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::ShoeError;
use crate::parse::HAND_SIZE;

/// Largest number of standard decks a shoe may hold.
pub const MAX_DECKS: u8 = 8;

/// One or more standard decks shuffled together.
///
/// With more than one deck the same card can be dealt twice, which is what
/// makes equal-category hands like 8-8-8-8-9 against 8-8-8-8-7 possible.
#[derive(Debug)]
pub struct Shoe {
    decks: u8,
    cards: Vec<Card>,
    position: usize,
    rng: ChaCha20Rng,
}

impl Shoe {
    pub fn new_with_seed(decks: u8, seed: u64) -> Result<Self, ShoeError> {
        if decks == 0 || decks > MAX_DECKS {
            return Err(ShoeError::InvalidDeckCount { decks });
        }
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep initial order until shuffle is called explicitly
        Ok(Self {
            decks,
            cards: Self::fresh_cards(decks),
            position: 0,
            rng,
        })
    }

    fn fresh_cards(decks: u8) -> Vec<Card> {
        (0..decks).flat_map(|_| full_deck()).collect()
    }

    pub fn decks(&self) -> u8 {
        self.decks
    }

    pub fn shuffle(&mut self) {
        self.cards = Self::fresh_cards(self.decks);
        self.cards.shuffle(&mut self.rng);
        self.position = 0;
    }

    pub fn deal_card(&mut self) -> Option<Card> {
        let c = self.cards.get(self.position).copied()?;
        self.position += 1;
        Some(c)
    }

    /// Deals five cards, or fails without consuming anything when fewer remain.
    pub fn deal_hand(&mut self) -> Result<[Card; HAND_SIZE], ShoeError> {
        if self.remaining() < HAND_SIZE {
            return Err(ShoeError::Exhausted {
                remaining: self.remaining(),
            });
        }
        let hand: [Card; HAND_SIZE] = std::array::from_fn(|i| self.cards[self.position + i]);
        self.position += HAND_SIZE;
        Ok(hand)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}

/// Formats cards in the space separated form accepted by
/// [`parse_hand`](crate::parse::parse_hand).
pub fn format_hand(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
