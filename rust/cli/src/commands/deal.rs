//! Deal command handler.
//!
//! Deals hands from a seeded shoe of one or more decks and marks the
//! winners with `*`. The same seed and deck count always deal the same hands.

use crate::error::CliError;
use crate::formatters::describe_with_sum;
use showdown_engine::deck::{format_hand, Shoe};
use showdown_engine::parse::DuplicatePolicy;
use showdown_engine::showdown::{evaluate_hands, winning_indices};
use std::io::Write;

pub fn handle_deal_command(
    hands: usize,
    decks: u8,
    seed: Option<u64>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if hands == 0 {
        return Err(CliError::InvalidInput("hands must be at least 1".into()));
    }
    let seed = seed.unwrap_or_else(rand::random);
    let mut shoe = Shoe::new_with_seed(decks, seed)?;
    shoe.shuffle();

    let dealt = (0..hands)
        .map(|_| shoe.deal_hand().map(|cards| format_hand(&cards)))
        .collect::<Result<Vec<String>, _>>()?;
    let evaluated = evaluate_hands(&dealt, DuplicatePolicy::Allow)?;
    let winners = winning_indices(&evaluated);

    writeln!(out, "Seed: {}", seed)?;
    writeln!(out, "Decks: {}", decks)?;
    for h in &evaluated {
        let mark = if winners.contains(&h.original_index) {
            '*'
        } else {
            ' '
        };
        writeln!(
            out,
            "{} {}: {}  {}",
            mark,
            h.original_index + 1,
            dealt[h.original_index],
            describe_with_sum(&h.strength)
        )?;
    }
    Ok(())
}
