//! Text formatting of hand strengths for terminal output.

use showdown_engine::hand::{Category, HandStrength};

/// Short description such as `straight, 5 high` or `four of a kind, 8s`.
///
/// # Example
///
/// ```rust
/// use showdown_engine::hand::classify;
/// use showdown_engine::parse::parse_hand;
/// use showdown_cli::formatters::describe_strength;
///
/// let strength = classify(&parse_hand("A♤ 2♡ 3♧ 4♢ 5♤").unwrap());
/// assert_eq!(describe_strength(&strength), "straight, 5 high");
/// ```
pub fn describe_strength(strength: &HandStrength) -> String {
    let rank = strength.tie_break;
    match strength.category {
        Category::HighCard | Category::Straight | Category::Flush | Category::StraightFlush => {
            format!("{}, {} high", strength.category, rank)
        }
        Category::TwoPair => format!("{}, {}s up", strength.category, rank),
        Category::FullHouse => format!("{}, {}s full", strength.category, rank),
        Category::OnePair
        | Category::ThreeOfAKind
        | Category::FourOfAKind
        | Category::FiveOfAKind => format!("{}, {}s", strength.category, rank),
    }
}

/// Description followed by the rank sum, used where ties need explaining.
pub fn describe_with_sum(strength: &HandStrength) -> String {
    format!(
        "{} (rank sum {})",
        describe_strength(strength),
        strength.rank_sum
    )
}
