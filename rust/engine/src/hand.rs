use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::cards::{Card, Rank};
use crate::parse::HAND_SIZE;

/// Hand categories, ordered from worst to best.
///
/// `FiveOfAKind` only occurs when a multi-deck hand repeats a card; it ranks
/// above every standard category.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    FiveOfAKind = 9,
}

impl Category {
    pub fn name(self) -> &'static str {
        match self {
            Category::HighCard => "high card",
            Category::OnePair => "one pair",
            Category::TwoPair => "two pair",
            Category::ThreeOfAKind => "three of a kind",
            Category::Straight => "straight",
            Category::Flush => "flush",
            Category::FullHouse => "full house",
            Category::FourOfAKind => "four of a kind",
            Category::StraightFlush => "straight flush",
            Category::FiveOfAKind => "five of a kind",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Strength of a classified 5 card hand.
///
/// Hands compare by category, then by `tie_break`, then by `rank_sum`.
/// `tie_break` is always a rank present in the hand and `rank_sum` is the sum
/// of the five ranks with Ace counted as 14, also inside a wheel.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct HandStrength {
    pub category: Category,
    pub tie_break: Rank,
    pub rank_sum: u8,
}

impl HandStrength {
    /// Lexicographic ranking key, larger is better.
    pub fn key(&self) -> (Category, Rank, u8) {
        (self.category, self.tie_break, self.rank_sum)
    }
}

impl Ord for HandStrength {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl PartialOrd for HandStrength {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

pub fn compare_hands(a: &HandStrength, b: &HandStrength) -> Ordering {
    a.cmp(b)
}

/// Classifies five cards into a category and its tie-break values.
///
/// Cards are grouped by rank; hands with a repeated rank are categorized by
/// their group sizes, and hands with five distinct ranks by straight and
/// flush detection. Never fails for any five cards.
pub fn classify(cards: &[Card; HAND_SIZE]) -> HandStrength {
    let rank_sum: u8 = cards.iter().map(|c| c.rank.value()).sum();
    let groups = rank_groups(cards);

    let (category, tie_break) = match groups.as_slice() {
        [(5, r)] => (Category::FiveOfAKind, *r),
        [(4, r), _] => (Category::FourOfAKind, *r),
        [(3, r), _] => (Category::FullHouse, *r),
        [(3, r), _, _] => (Category::ThreeOfAKind, *r),
        // pairs are sorted high first, so this is the higher pair
        [(2, r), _, _] => (Category::TwoPair, *r),
        [(2, r), _, _, _] => (Category::OnePair, *r),
        _ => classify_distinct(cards),
    };

    trace!(?category, ?tie_break, rank_sum, "classified hand");
    HandStrength {
        category,
        tie_break,
        rank_sum,
    }
}

/// Groups ranks as `(count, rank)`, largest group first and higher rank
/// first among groups of the same size.
fn rank_groups(cards: &[Card; HAND_SIZE]) -> Vec<(u8, Rank)> {
    let mut groups: Vec<(u8, Rank)> = Vec::with_capacity(HAND_SIZE);
    for card in cards {
        match groups.iter_mut().find(|(_, r)| *r == card.rank) {
            Some((count, _)) => *count += 1,
            None => groups.push((1, card.rank)),
        }
    }
    groups.sort_unstable_by(|a, b| b.cmp(a));
    groups
}

// Five distinct ranks.
fn classify_distinct(cards: &[Card; HAND_SIZE]) -> (Category, Rank) {
    let mut ranks: [Rank; HAND_SIZE] = cards.map(|c| c.rank);
    ranks.sort_unstable();
    let high = ranks[HAND_SIZE - 1];

    match (straight_high(&ranks), is_flush(cards)) {
        (Some(top), true) => (Category::StraightFlush, top),
        (Some(top), false) => (Category::Straight, top),
        (None, true) => (Category::Flush, high),
        (None, false) => (Category::HighCard, high),
    }
}

/// High rank of a straight over ascending, distinct ranks. The wheel
/// A-2-3-4-5 plays the Ace low and tops out at Five.
fn straight_high(sorted: &[Rank; HAND_SIZE]) -> Option<Rank> {
    use crate::cards::Rank::*;
    if *sorted == [Two, Three, Four, Five, Ace] {
        return Some(Five);
    }
    let consecutive = sorted
        .windows(2)
        .all(|w| w[1].value() == w[0].value() + 1);
    consecutive.then_some(sorted[HAND_SIZE - 1])
}

fn is_flush(cards: &[Card; HAND_SIZE]) -> bool {
    cards.iter().all(|c| c.suit == cards[0].suit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank::*;

    #[test]
    fn rank_groups_orders_by_size_then_rank() {
        let cards = crate::parse::parse_hand("3♤ 9♡ 3♧ 9♢ K♤").unwrap();
        assert_eq!(rank_groups(&cards), vec![(2, Nine), (2, Three), (1, King)]);
    }

    #[test]
    fn straight_high_needs_consecutive_ranks() {
        assert_eq!(straight_high(&[Six, Seven, Eight, Nine, Ten]), Some(Ten));
        assert_eq!(straight_high(&[Two, Three, Four, Five, Ace]), Some(Five));
        assert_eq!(straight_high(&[Ten, Jack, Queen, King, Ace]), Some(Ace));
        assert_eq!(straight_high(&[Two, Three, Four, Six, Seven]), None);
        // no wrap around through the Ace
        assert_eq!(straight_high(&[Two, Three, Queen, King, Ace]), None);
    }
}
