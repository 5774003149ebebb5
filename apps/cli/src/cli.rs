//! # Command-Line Arguments
//!
//! ```text
//! tipcalc                                     interactive session
//! tipcalc interactive                         same
//! tipcalc calc --bill 100 --people 4 --tip 20
//! tipcalc calc --bill 50 --custom 10 --json
//! ```
//!
//! Field values are taken verbatim (hyphens included) so that the engine's
//! own filters decide what is acceptable.

use clap::{Args, Parser, Subcommand};

/// Split a bill and work out the tip per person.
#[derive(Debug, Parser)]
#[command(name = "tipcalc", version, about)]
pub struct Cli {
    /// Print views as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute once from flags and exit
    Calc(CalcArgs),

    /// Edit the form line by line (default)
    Interactive,
}

#[derive(Debug, Clone, Args)]
pub struct CalcArgs {
    /// Bill amount, e.g. 42.50
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub bill: String,

    /// Number of people splitting the bill
    #[arg(long, default_value = "1", allow_hyphen_values = true)]
    pub people: String,

    /// Preset tip percentage: 15, 18 or 20
    #[arg(long, conflicts_with = "custom")]
    pub tip: Option<u32>,

    /// Custom tip percentage
    #[arg(long, allow_hyphen_values = true)]
    pub custom: Option<String>,
}
