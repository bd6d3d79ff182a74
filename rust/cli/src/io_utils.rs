//! Reading hands from command arguments and input files.
//!
//! Input files hold one hand per line. Blank lines are skipped and a leading
//! UTF-8 BOM is stripped, every other line is passed on exactly as written
//! so winners can be echoed back unchanged.

use std::path::Path;

use crate::error::CliError;

/// Reads the hands in `path`, one per line.
pub fn read_hand_lines(path: &Path) -> Result<Vec<String>, CliError> {
    let mut content = std::fs::read_to_string(path).map_err(|e| {
        CliError::InvalidInput(format!("cannot read {}: {}", path.display(), e))
    })?;
    strip_utf8_bom(&mut content);
    Ok(content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect())
}

/// Positional hands followed by the hands read from `input`, if any.
pub fn collect_hands(hands: Vec<String>, input: Option<&Path>) -> Result<Vec<String>, CliError> {
    let mut all = hands;
    if let Some(path) = input {
        all.extend(read_hand_lines(path)?);
    }
    Ok(all)
}

/// Strip UTF-8 BOM (Byte Order Mark) from the beginning of a string if present.
fn strip_utf8_bom(s: &mut String) {
    const UTF8_BOM: &str = "\u{feff}";
    if s.starts_with(UTF8_BOM) {
        s.drain(..UTF8_BOM.len());
    }
}
