//! Ranking a batch of hands and picking the winners.
//!
//! Hands are parsed and classified in input order, then compared by
//! [`HandStrength`]. Winners are reported as the caller's original strings,
//! in the order they were given, so formatting is never altered.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::HandError;
use crate::hand::{classify, HandStrength};
use crate::parse::{parse_hand_with, DuplicatePolicy};

/// A classified hand remembering its position in the caller's input.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct EvaluatedHand {
    pub original_index: usize,
    pub strength: HandStrength,
}

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum RankOrder {
    #[default]
    BestFirst,
    WorstFirst,
}

/// Parses and classifies every hand, stopping at the first invalid one.
pub fn evaluate_hands<S: AsRef<str>>(
    hands: &[S],
    policy: DuplicatePolicy,
) -> Result<Vec<EvaluatedHand>, HandError> {
    hands
        .iter()
        .enumerate()
        .map(|(index, hand)| {
            let cards = parse_hand_with(hand.as_ref(), policy).inspect_err(|e| {
                warn!(index, error = %e, "rejected hand");
            })?;
            Ok(EvaluatedHand {
                original_index: index,
                strength: classify(&cards),
            })
        })
        .collect()
}

/// Returns the winning hand(s) among `hands`, accepting duplicate cards.
///
/// # Errors
///
/// Returns the first parse error in input order, or [`HandError::NoHands`]
/// for an empty input. No partial result is returned on error.
///
/// # Examples
///
/// ```
/// use showdown_engine::showdown::best_hand;
///
/// let hands = ["4♤ 5♤ 8♢ 8♤ J♤", "2♤ 4♡ 5♢ 6♢ 8♤", "4♢ 5♤ 8♧ 8♡ J♢"];
/// let winners = best_hand(&hands).unwrap();
/// assert_eq!(winners, vec!["4♤ 5♤ 8♢ 8♤ J♤", "4♢ 5♤ 8♧ 8♡ J♢"]);
/// ```
pub fn best_hand<S: AsRef<str>>(hands: &[S]) -> Result<Vec<&str>, HandError> {
    best_hand_with(hands, DuplicatePolicy::Allow)
}

pub fn best_hand_with<S: AsRef<str>>(
    hands: &[S],
    policy: DuplicatePolicy,
) -> Result<Vec<&str>, HandError> {
    match hands {
        [] => Err(HandError::NoHands),
        // a lone hand wins as long as it parses
        [only] => {
            parse_hand_with(only.as_ref(), policy)?;
            Ok(vec![only.as_ref()])
        }
        _ => {
            let evaluated = evaluate_hands(hands, policy)?;
            let winners = winning_indices(&evaluated);
            debug!(hands = hands.len(), ?winners, "selected winners");
            Ok(winners.into_iter().map(|i| hands[i].as_ref()).collect())
        }
    }
}

/// Original indices of every hand tied with the strongest, ascending.
pub fn winning_indices(hands: &[EvaluatedHand]) -> Vec<usize> {
    let Some(best) = hands.iter().map(|h| h.strength).max() else {
        return Vec::new();
    };
    let mut winners: Vec<usize> = hands
        .iter()
        .filter(|h| h.strength == best)
        .map(|h| h.original_index)
        .collect();
    winners.sort_unstable();
    winners
}

/// Evaluates all hands and sorts them by strength. Equal hands keep their
/// input order in both directions.
pub fn rank_hands<S: AsRef<str>>(
    hands: &[S],
    policy: DuplicatePolicy,
    order: RankOrder,
) -> Result<Vec<EvaluatedHand>, HandError> {
    let mut evaluated = evaluate_hands(hands, policy)?;
    match order {
        RankOrder::BestFirst => evaluated.sort_by(|a, b| b.strength.cmp(&a.strength)),
        RankOrder::WorstFirst => evaluated.sort_by(|a, b| a.strength.cmp(&b.strength)),
    }
    Ok(evaluated)
}
