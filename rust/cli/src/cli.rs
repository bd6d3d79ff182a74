//! Command-line argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::DuplicatesArg;

#[derive(Parser, Debug)]
#[command(
    name = "showdown",
    version,
    about = "Rank poker hands and pick the winners"
)]
pub struct ShowdownCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the winning hand(s) among the given hands
    Best {
        /// Hands such as "10♤ J♤ Q♤ K♤ A♤"
        hands: Vec<String>,
        /// File with one hand per line, read after the positional hands
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long, value_enum)]
        duplicates: Option<DuplicatesArg>,
        #[arg(long)]
        json: bool,
    },
    /// Show the category and tie-break values of one hand
    Classify {
        hand: String,
        #[arg(long, value_enum)]
        duplicates: Option<DuplicatesArg>,
        #[arg(long)]
        json: bool,
    },
    /// Print every hand ordered by strength
    Rank {
        hands: Vec<String>,
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long, value_enum)]
        duplicates: Option<DuplicatesArg>,
        #[arg(long)]
        worst_first: bool,
        #[arg(long)]
        json: bool,
    },
    /// Deal hands from a shuffled shoe and mark the winners
    Deal {
        #[arg(long, default_value_t = 2)]
        hands: usize,
        #[arg(long)]
        decks: Option<u8>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Display the resolved configuration
    Cfg,
}
