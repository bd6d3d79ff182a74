//! Command handler modules for the showdown CLI.
//!
//! Each command lives in its own module with a public
//! `handle_COMMAND_command(...) -> Result<(), CliError>` handler. Output
//! streams are passed in as `&mut dyn Write` so handlers can be tested
//! against in-memory buffers.

mod best;
mod cfg;
mod classify;
mod deal;
mod rank;

pub use best::handle_best_command;
pub use cfg::handle_cfg_command;
pub use classify::handle_classify_command;
pub use deal::handle_deal_command;
pub use rank::handle_rank_command;
