use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::HandError;

/// One of the four suits, written with the symbols `♢ ♧ ♡ ♤`.
/// Suits carry no ordering in hand ranking; they only decide flushes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit (♧)
    Clubs,
    /// Diamonds suit (♢)
    Diamonds,
    /// Hearts suit (♡)
    Hearts,
    /// Spades suit (♤)
    Spades,
}

impl Suit {
    /// The symbol used for this suit in hand strings.
    pub fn symbol(self) -> char {
        match self {
            Suit::Clubs => '♧',
            Suit::Diamonds => '♢',
            Suit::Hearts => '♡',
            Suit::Spades => '♤',
        }
    }

    pub fn from_symbol(c: char) -> Option<Suit> {
        match c {
            '♧' => Some(Suit::Clubs),
            '♢' => Some(Suit::Diamonds),
            '♡' => Some(Suit::Hearts),
            '♤' => Some(Suit::Spades),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Represents the rank (face value) of a playing card from Two through Ace.
/// The discriminant is the numeric rank used for ranking and rank sums.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Rank 2
    Two = 2,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13)
    King,
    /// Ace (14)
    Ace,
}

impl Rank {
    /// Numeric value of the rank, Ace counted high.
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn from_u8(v: u8) -> Option<Rank> {
        match v {
            2 => Some(Rank::Two),
            3 => Some(Rank::Three),
            4 => Some(Rank::Four),
            5 => Some(Rank::Five),
            6 => Some(Rank::Six),
            7 => Some(Rank::Seven),
            8 => Some(Rank::Eight),
            9 => Some(Rank::Nine),
            10 => Some(Rank::Ten),
            11 => Some(Rank::Jack),
            12 => Some(Rank::Queen),
            13 => Some(Rank::King),
            14 => Some(Rank::Ace),
            _ => None,
        }
    }

    /// Parses the rank part of a card token: `A`, `J`, `Q`, `K` or `2`..=`10`.
    pub fn from_token(s: &str) -> Option<Rank> {
        match s {
            "A" => Some(Rank::Ace),
            "J" => Some(Rank::Jack),
            "Q" => Some(Rank::Queen),
            "K" => Some(Rank::King),
            _ => {
                // only plain decimal digits, so "+5" or " 5" are rejected
                if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
                    return None;
                }
                match s.parse::<u8>().ok()? {
                    v @ 2..=10 => Rank::from_u8(v),
                    _ => None,
                }
            }
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Jack => write!(f, "J"),
            Rank::Queen => write!(f, "Q"),
            Rank::King => write!(f, "K"),
            Rank::Ace => write!(f, "A"),
            r => write!(f, "{}", r.value()),
        }
    }
}

/// Represents a single playing card with a suit and rank.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// The suit of the card
    pub suit: Suit,
    /// The rank of the card (Two through Ace)
    pub rank: Rank,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { suit, rank }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Parses a single `<rank><suit>` token such as `10♤` or `A♡`.
///
/// The suit is checked first: a token without a trailing suit symbol is an
/// [`HandError::InvalidSuit`] even if its rank is also bad.
impl FromStr for Card {
    type Err = HandError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let mut chars = token.chars();
        let suit = chars
            .next_back()
            .and_then(Suit::from_symbol)
            .ok_or_else(|| HandError::InvalidSuit {
                token: token.to_string(),
            })?;
        let rank = Rank::from_token(chars.as_str()).ok_or_else(|| HandError::InvalidRank {
            token: token.to_string(),
        })?;
        Ok(Card { suit, rank })
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ]
}

/// A standard 52 card deck in suit-major order.
pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &s in &all_suits() {
        for &r in &all_ranks() {
            v.push(Card { suit: s, rank: r });
        }
    }
    v
}
