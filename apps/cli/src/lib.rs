//! # Tipcalc CLI Library
//!
//! Terminal front end for the tip calculator. The binary in `main.rs` only
//! parses arguments and hands over to [`run`].
//!
//! ## Module Organization
//! ```text
//! tipcalc_cli/
//! ├── lib.rs          ◄─── You are here (startup & dispatch)
//! ├── cli.rs          ◄─── clap argument definitions
//! ├── repl.rs         ◄─── Interactive line loop
//! ├── render.rs       ◄─── Text / JSON output
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   └── config.rs   ◄─── Configuration from environment
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   └── calculator.rs ◄─ Form edits and calculation
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Exit Status
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  0  valid result printed (or interactive session ended)                 │
//! │  1  the form failed validation, message printed                         │
//! │  2  a flag value was refused by the field filters                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod render;
pub mod repl;
pub mod state;

use std::io::Write;
use std::process::ExitCode;

use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{CalcArgs, Cli, Command};
use commands::calculator;
use error::ApiError;
use state::{ConfigState, OutputFormat};
use tipcalc_core::{CalculatorView, TipSession};

/// Runs the command selected on the command line.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. main.rs: parse flags, load ConfigState, init tracing                │
/// │  2. Pick the output format (--json beats TIPCALC_OUTPUT)                │
/// │  3. Create the single TipSession                                        │
/// │  4. calc: apply flags in order, print one view                          │
/// │     interactive: hand stdin/stdout to the repl                          │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run(cli: Cli, config: &ConfigState) -> anyhow::Result<ExitCode> {
    let format = if cli.json { OutputFormat::Json } else { config.output };
    let mut session = TipSession::new();

    match cli.command {
        Some(Command::Calc(args)) => {
            info!("one-shot calculation");
            let stdout = std::io::stdout();
            let mut out = stdout.lock();

            match run_calc(&mut session, &args) {
                Ok(view) => {
                    render::write_view(&mut out, &view, format)?;
                    out.flush()?;
                    Ok(if session.error().is_some() {
                        ExitCode::from(1)
                    } else {
                        ExitCode::SUCCESS
                    })
                }
                Err(err) => {
                    render::write_error(&mut std::io::stderr(), &err, format)?;
                    Ok(ExitCode::from(2))
                }
            }
        }
        Some(Command::Interactive) | None => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            repl::run(stdin.lock(), &mut stdout.lock(), &mut session, config, format)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Applies the `calc` flags to a session as if typed into the form:
/// bill, then people, then the preset or custom tip.
pub fn run_calc(session: &mut TipSession, args: &CalcArgs) -> Result<CalculatorView, ApiError> {
    calculator::set_bill_amount(session, &args.bill)?;
    let mut view = calculator::set_number_of_people(session, &args.people)?;

    if let Some(percentage) = args.tip {
        view = calculator::select_tip(session, percentage)?;
    }
    if let Some(custom) = &args.custom {
        view = calculator::set_custom_tip(session, custom)?;
    }

    Ok(view)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - every command and edit
/// - `RUST_LOG=tipcalc_core=trace` - validation detail
/// - Otherwise `TIPCALC_LOG`, falling back to `warn,tipcalc=info`
///
/// Logs go to stderr so stdout stays clean for results.
pub fn init_tracing(config: &ConfigState) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn args(bill: &str, people: &str, tip: Option<u32>, custom: Option<&str>) -> CalcArgs {
        CalcArgs {
            bill: bill.to_string(),
            people: people.to_string(),
            tip,
            custom: custom.map(str::to_string),
        }
    }

    #[test]
    fn test_calc_with_preset() {
        let mut session = TipSession::new();
        let view = run_calc(&mut session, &args("100", "4", Some(20), None)).unwrap();

        let result = view.result.unwrap();
        assert_eq!(result.tip_amount_per_person, 5.0);
        assert_eq!(result.total_amount_per_person, 30.0);
        assert_eq!(result.effective_tip_percentage, 20.0);
        assert_eq!(session.error(), None);
    }

    #[test]
    fn test_calc_with_custom() {
        let mut session = TipSession::new();
        let view = run_calc(&mut session, &args("50", "1", None, Some("10"))).unwrap();

        let result = view.result.unwrap();
        assert_eq!(result.tip_amount_per_person, 5.0);
        assert_eq!(result.total_amount_per_person, 55.0);
    }

    #[test]
    fn test_calc_without_tip_reports_missing_tip() {
        let mut session = TipSession::new();
        let view = run_calc(&mut session, &args("42", "1", None, None)).unwrap();
        assert_eq!(
            view.error.as_deref(),
            Some("Please select a tip percentage or enter a custom tip")
        );
        assert!(view.result.is_none());
        // exit status 1 is decided from the session's error slot
        assert_eq!(session.error(), Some(tipcalc_core::ValidationError::MissingTip));
    }

    #[test]
    fn test_calc_empty_bill_reports_bill_first() {
        let mut session = TipSession::new();
        let view = run_calc(&mut session, &args("", "0", None, None)).unwrap();
        assert_eq!(view.error.as_deref(), Some("Please enter a valid bill amount"));
    }

    #[test]
    fn test_calc_refuses_negative_custom() {
        let mut session = TipSession::new();
        let err = run_calc(&mut session, &args("20", "1", None, Some("-5"))).unwrap_err();
        assert_eq!(err.code, ErrorCode::InputRejected);
        assert_eq!(session.form().custom_tip, "");
    }

    #[test]
    fn test_calc_unknown_preset() {
        let mut session = TipSession::new();
        let err = run_calc(&mut session, &args("20", "1", Some(25), None)).unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownPreset);
    }
}
