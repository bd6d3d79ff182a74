//! Hand string parsing.
//!
//! A hand is five whitespace separated `<rank><suit>` tokens, for example
//! `"10♤ J♤ Q♤ K♤ A♤"`. Ranks are `2`..`10`, `J`, `Q`, `K`, `A` and suits
//! are the symbols `♢ ♧ ♡ ♤`.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::HandError;

/// Number of cards in every hand.
pub const HAND_SIZE: usize = 5;

/// Whether a hand may contain the same rank and suit more than once.
///
/// Hands dealt from a multi-deck shoe can legitimately repeat a card, so
/// duplicates are accepted unless the caller asks for single-deck checks.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    #[default]
    Allow,
    Reject,
}

/// Parses a hand accepting duplicate cards.
///
/// # Errors
///
/// - [`HandError::InvalidHandLength`] when there are not exactly 5 tokens
/// - [`HandError::InvalidSuit`] when a token does not end in a suit symbol
/// - [`HandError::InvalidRank`] when a token's rank is not `2`..`10`, `J`, `Q`, `K`, `A`
///
/// The first invalid token, in input order, decides the error.
///
/// # Examples
///
/// ```
/// use showdown_engine::cards::{Rank, Suit};
/// use showdown_engine::parse::parse_hand;
///
/// let cards = parse_hand("10♤ J♤ Q♤ K♤ A♤").unwrap();
/// assert_eq!(cards[0].rank, Rank::Ten);
/// assert_eq!(cards[4].suit, Suit::Spades);
/// ```
pub fn parse_hand(hand: &str) -> Result<[Card; HAND_SIZE], HandError> {
    parse_hand_with(hand, DuplicatePolicy::Allow)
}

/// Parses a hand, rejecting repeated cards when `policy` is [`DuplicatePolicy::Reject`].
pub fn parse_hand_with(hand: &str, policy: DuplicatePolicy) -> Result<[Card; HAND_SIZE], HandError> {
    let tokens: Vec<&str> = hand.split_whitespace().collect();
    let tokens: [&str; HAND_SIZE] = tokens
        .try_into()
        .map_err(|t: Vec<&str>| HandError::InvalidHandLength { found: t.len() })?;

    let mut cards = [tokens[0].parse::<Card>()?; HAND_SIZE];
    for (i, token) in tokens.iter().enumerate().skip(1) {
        let card: Card = token.parse()?;
        if policy == DuplicatePolicy::Reject && cards[..i].contains(&card) {
            return Err(HandError::DuplicateCard { card });
        }
        cards[i] = card;
    }
    Ok(cards)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn keeps_token_order() {
        let cards = parse_hand("K♡ 2♧ 10♢ A♤ 7♡").unwrap();
        let ranks: Vec<Rank> = cards.iter().map(|c| c.rank).collect();
        assert_eq!(
            ranks,
            vec![Rank::King, Rank::Two, Rank::Ten, Rank::Ace, Rank::Seven]
        );
        assert_eq!(cards[2].suit, Suit::Diamonds);
    }

    #[test]
    fn tolerates_extra_whitespace() {
        assert!(parse_hand("  2♤\t3♡  4♧ 5♢ 6♤ ").is_ok());
    }

    #[test]
    fn reject_policy_catches_repeated_card() {
        let err = parse_hand_with("9♤ 3♡ 9♤ 5♢ 6♤", DuplicatePolicy::Reject).unwrap_err();
        assert_eq!(
            err,
            HandError::DuplicateCard {
                card: Card::new(Rank::Nine, Suit::Spades)
            }
        );
        assert!(parse_hand_with("9♤ 3♡ 9♤ 5♢ 6♤", DuplicatePolicy::Allow).is_ok());
    }

    #[test]
    fn same_rank_different_suit_is_not_a_duplicate() {
        assert!(parse_hand_with("9♤ 9♡ 9♧ 9♢ 6♤", DuplicatePolicy::Reject).is_ok());
    }
}
