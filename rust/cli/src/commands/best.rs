//! Best command handler.
//!
//! Prints the winning hand(s) exactly as they were given, one per line in
//! input order, or as a JSON array with `--json`.

use crate::error::CliError;
use showdown_engine::parse::DuplicatePolicy;
use showdown_engine::showdown::best_hand_with;
use std::io::Write;

pub fn handle_best_command(
    hands: &[String],
    policy: DuplicatePolicy,
    json: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let winners = best_hand_with(hands, policy)?;
    if json {
        let json_str = serde_json::to_string_pretty(&winners).map_err(std::io::Error::other)?;
        writeln!(out, "{}", json_str)?;
    } else {
        for hand in winners {
            writeln!(out, "{}", hand)?;
        }
    }
    Ok(())
}
