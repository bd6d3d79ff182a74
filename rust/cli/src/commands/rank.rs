//! Rank command handler.
//!
//! Lists every hand with its place, where tied hands share a place and the
//! next place skips accordingly (1, 2, 2, 4).

use crate::error::CliError;
use crate::formatters::describe_with_sum;
use showdown_engine::parse::DuplicatePolicy;
use showdown_engine::showdown::{rank_hands, EvaluatedHand, RankOrder};
use std::io::Write;

pub fn handle_rank_command(
    hands: &[String],
    policy: DuplicatePolicy,
    order: RankOrder,
    json: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if hands.is_empty() {
        return Err(CliError::InvalidInput("no hands to rank".into()));
    }
    let ranked = rank_hands(hands, policy, order)?;

    if json {
        let rows: Vec<serde_json::Value> = ranked
            .iter()
            .map(|h| {
                serde_json::json!({
                    "place": place_of(h, &ranked),
                    "index": h.original_index,
                    "hand": hands[h.original_index],
                    "category": h.strength.category,
                    "tie_break": h.strength.tie_break.value(),
                    "rank_sum": h.strength.rank_sum,
                })
            })
            .collect();
        let json_str = serde_json::to_string_pretty(&rows).map_err(std::io::Error::other)?;
        writeln!(out, "{}", json_str)?;
        return Ok(());
    }

    for h in &ranked {
        writeln!(
            out,
            "{}. {}  {}",
            place_of(h, &ranked),
            hands[h.original_index],
            describe_with_sum(&h.strength)
        )?;
    }
    Ok(())
}

fn place_of(hand: &EvaluatedHand, all: &[EvaluatedHand]) -> usize {
    1 + all.iter().filter(|o| o.strength > hand.strength).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hands(list: &[&str]) -> Vec<String> {
        list.iter().map(|h| h.to_string()).collect()
    }

    #[test]
    fn ties_share_a_place() {
        let input = hands(&[
            "3♤ 5♡ 7♧ 9♢ J♤",
            "K♤ K♡ 2♧ 3♢ 4♤",
            "J♡ 9♧ 7♤ 5♢ 3♡",
            "2♤ 3♡ 4♧ 5♢ 7♤",
        ]);
        let mut out = Vec::new();
        handle_rank_command(
            &input,
            DuplicatePolicy::Allow,
            RankOrder::BestFirst,
            false,
            &mut out,
        )
        .unwrap();
        let s = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = s.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("1. K♤ K♡ 2♧ 3♢ 4♤"));
        assert!(lines[1].starts_with("2. 3♤ 5♡ 7♧ 9♢ J♤"));
        assert!(lines[2].starts_with("2. J♡ 9♧ 7♤ 5♢ 3♡"));
        assert!(lines[3].starts_with("4. 2♤ 3♡ 4♧ 5♢ 7♤"));
    }

    #[test]
    fn worst_first_keeps_places_from_the_top() {
        let input = hands(&["K♤ K♡ 2♧ 3♢ 4♤", "2♤ 3♡ 4♧ 5♢ 7♤"]);
        let mut out = Vec::new();
        handle_rank_command(
            &input,
            DuplicatePolicy::Allow,
            RankOrder::WorstFirst,
            true,
            &mut out,
        )
        .unwrap();
        let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(v[0]["place"], 2);
        assert_eq!(v[0]["index"], 1);
        assert_eq!(v[1]["place"], 1);
        assert_eq!(v[1]["category"], "one_pair");
    }

    #[test]
    fn empty_input_is_rejected() {
        let mut out = Vec::new();
        let result = handle_rank_command(
            &[],
            DuplicatePolicy::Allow,
            RankOrder::BestFirst,
            false,
            &mut out,
        );
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }
}
