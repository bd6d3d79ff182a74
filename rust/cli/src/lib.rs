//! # Showdown CLI Library
//!
//! Command-line front end for the showdown poker hand ranking engine.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let args = ["showdown", "best", "A♤ 2♡ 3♧ 4♢ 5♤", "2♤ 3♡ 4♧ 5♢ 6♤"];
//! let code = showdown_cli::run(args, &mut out, &mut err);
//! assert_eq!(code, 0);
//! assert_eq!(String::from_utf8(out).unwrap(), "2♤ 3♡ 4♧ 5♢ 6♤\n");
//! ```
//!
//! ## Available Subcommands
//!
//! - `best`: Print the winning hand(s)
//! - `classify`: Show category, tie-break rank and rank sum of one hand
//! - `rank`: Order every hand by strength
//! - `deal`: Deal hands from a seeded multi-deck shoe
//! - `cfg`: Display current configuration settings

#[macro_use]
mod macros;

use clap::{Parser, ValueEnum};
use std::io::Write;
pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;

use cli::{Commands, ShowdownCli};
use commands::{
    handle_best_command, handle_cfg_command, handle_classify_command, handle_deal_command,
    handle_rank_command,
};
use config::Config;
use showdown_engine::parse::DuplicatePolicy;
use showdown_engine::showdown::RankOrder;

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Available Commands
///
/// - `best [HAND]... [--input FILE] [--duplicates allow|reject] [--json]`
/// - `classify HAND [--duplicates allow|reject] [--json]`
/// - `rank [HAND]... [--input FILE] [--duplicates allow|reject] [--worst-first] [--json]`
/// - `deal [--hands N] [--decks K] [--seed S]`
/// - `cfg`
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["best", "classify", "rank", "deal", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match ShowdownCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                if write!(out, "{}", e).is_err() {
                    return exit_code::ERROR;
                }
                return exit_code::SUCCESS;
            }
            write_or_exit!(err, "{}", e);
            write_or_exit!(err, "Usage: showdown <command> [options]\n");
            write_or_exit!(err, "Commands:");
            for c in COMMANDS {
                write_or_exit!(err, "  {}", c);
            }
            write_or_exit!(err, "\nFor full help, run: showdown --help");
            return exit_code::ERROR;
        }
    };

    match dispatch(cli.cmd, out) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            if ui::write_error(err, &e.to_string()).is_err() {
                return exit_code::ERROR;
            }
            exit_code::ERROR
        }
    }
}

fn load_config() -> Result<Config, CliError> {
    config::load().map_err(|e| CliError::Config(e.to_string()))
}

fn dispatch(cmd: Commands, out: &mut dyn Write) -> Result<(), CliError> {
    let policy = |flag: Option<DuplicatesArg>| -> Result<DuplicatePolicy, CliError> {
        match flag {
            Some(flag) => Ok(flag.into()),
            None => Ok(load_config()?.duplicates),
        }
    };
    match cmd {
        Commands::Best {
            hands,
            input,
            duplicates,
            json,
        } => {
            let hands = io_utils::collect_hands(hands, input.as_deref())?;
            handle_best_command(&hands, policy(duplicates)?, json, out)
        }
        Commands::Classify {
            hand,
            duplicates,
            json,
        } => handle_classify_command(&hand, policy(duplicates)?, json, out),
        Commands::Rank {
            hands,
            input,
            duplicates,
            worst_first,
            json,
        } => {
            let hands = io_utils::collect_hands(hands, input.as_deref())?;
            let order = if worst_first {
                RankOrder::WorstFirst
            } else {
                RankOrder::BestFirst
            };
            handle_rank_command(&hands, policy(duplicates)?, order, json, out)
        }
        Commands::Deal { hands, decks, seed } => {
            let cfg = load_config()?;
            handle_deal_command(hands, decks.unwrap_or(cfg.decks), seed.or(cfg.seed), out)
        }
        Commands::Cfg => handle_cfg_command(out),
    }
}

/// Duplicate card policy as accepted on the command line.
#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum DuplicatesArg {
    /// Accept repeated cards, as dealt from several decks.
    Allow,
    /// Reject a hand that repeats a card.
    Reject,
}

impl From<DuplicatesArg> for DuplicatePolicy {
    fn from(arg: DuplicatesArg) -> Self {
        match arg {
            DuplicatesArg::Allow => DuplicatePolicy::Allow,
            DuplicatesArg::Reject => DuplicatePolicy::Reject,
        }
    }
}
