//! # Tipcalc
//!
//! Entry point for the `tipcalc` binary.
//!
//! ```bash
//! tipcalc calc --bill 100 --people 4 --tip 20
//! RUST_LOG=debug tipcalc
//! ```

use std::process::ExitCode;

use clap::Parser;
use tracing::info;

use tipcalc_cli::cli::Cli;
use tipcalc_cli::state::ConfigState;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = ConfigState::from_env()?;

    tipcalc_cli::init_tracing(&config);
    info!(version = env!("CARGO_PKG_VERSION"), "Starting tipcalc");

    tipcalc_cli::run(cli, &config)
}
