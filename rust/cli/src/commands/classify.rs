//! Classify command handler.

use crate::error::CliError;
use crate::formatters::describe_strength;
use showdown_engine::hand::classify;
use showdown_engine::parse::{parse_hand_with, DuplicatePolicy};
use std::io::Write;

/// Prints the category, tie-break rank and rank sum of a single hand.
///
/// Text output:
///
/// ```text
/// Hand: A♤ 2♡ 3♧ 4♢ 5♤
/// Category: straight, 5 high
/// Tie-break: 5
/// Rank sum: 28
/// ```
pub fn handle_classify_command(
    hand: &str,
    policy: DuplicatePolicy,
    json: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let cards = parse_hand_with(hand, policy)?;
    let strength = classify(&cards);

    if json {
        let display = serde_json::json!({
            "hand": hand,
            "category": strength.category,
            "tie_break": strength.tie_break.value(),
            "rank_sum": strength.rank_sum,
        });
        let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
        writeln!(out, "{}", json_str)?;
        return Ok(());
    }

    writeln!(out, "Hand: {}", hand)?;
    writeln!(out, "Category: {}", describe_strength(&strength))?;
    writeln!(out, "Tie-break: {}", strength.tie_break)?;
    writeln!(out, "Rank sum: {}", strength.rank_sum)?;
    Ok(())
}
