//! Configuration command handler.
//!
//! This module implements the `cfg` command, which displays the current
//! configuration settings with their sources (default, environment, or
//! configuration file).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "duplicates": {
//!     "value": "allow",
//!     "source": "default"
//!   },
//!   "decks": {
//!     "value": 1,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config::{self, ConfigResolved};
use crate::error::CliError;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let resolved =
        config::load_with_sources().map_err(|e| CliError::Config(e.to_string()))?;
    write_resolved(&resolved, out)
}

fn write_resolved(resolved: &ConfigResolved, out: &mut dyn Write) -> Result<(), CliError> {
    let ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "duplicates": {
            "value": config.duplicates,
            "source": sources.duplicates,
        },
        "decks": {
            "value": config.decks,
            "source": sources.decks,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
