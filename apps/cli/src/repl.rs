//! # Interactive Session
//!
//! Line-oriented front end: each line is one user action on the form.
//!
//! ```text
//! tip> bill 100
//! Error: Please select a tip percentage or enter a custom tip
//! tip> people 4
//! Error: Please select a tip percentage or enter a custom tip
//! tip> tip 20
//! Per Person (20% tip):
//!   Tip Amount:       $5.00
//!   Total per Person: $30.00
//! tip> people abc
//! Rejected input for number of people: "abc"
//! ```

use std::io::{BufRead, Write};
use std::str::FromStr;

use tracing::{debug, info};

use crate::commands::calculator;
use crate::error::ApiError;
use crate::render::{write_error, write_view};
use crate::state::{ConfigState, OutputFormat};
use tipcalc_core::TipSession;

pub const HELP: &str = "\
Commands:
  bill <amount>     set the bill amount (digits and one '.')
  people <count>    set the number of people (digits)
  tip <15|18|20>    pick a preset tip
  custom <percent>  enter a custom tip (clears the preset)
  reset             start over
  show              print the current result
  json              print the current view as JSON
  help              show this message
  quit              leave";

/// One parsed line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Bill(String),
    People(String),
    Tip(u32),
    Custom(String),
    Reset,
    Show,
    Json,
    Help,
    Quit,
    /// Blank line
    Nothing,
}

impl FromStr for ReplCommand {
    type Err = ApiError;

    /// Text after the keyword is passed through untouched (minus the
    /// surrounding whitespace); a missing argument means "clear the field".
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, arg) = match line.split_once(char::is_whitespace) {
            Some((word, arg)) => (word, arg.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "" => ReplCommand::Nothing,
            "bill" => ReplCommand::Bill(arg.to_string()),
            "people" => ReplCommand::People(arg.to_string()),
            "custom" => ReplCommand::Custom(arg.to_string()),
            "tip" => {
                let pct = arg.parse().map_err(|_| {
                    ApiError::invalid_command(format!("tip expects 15, 18 or 20, got {arg:?}"))
                })?;
                ReplCommand::Tip(pct)
            }
            "reset" => ReplCommand::Reset,
            "show" => ReplCommand::Show,
            "json" => ReplCommand::Json,
            "help" | "?" => ReplCommand::Help,
            "quit" | "exit" => ReplCommand::Quit,
            other => {
                return Err(ApiError::invalid_command(format!(
                    "unknown command: {other} (try 'help')"
                )))
            }
        };
        Ok(command)
    }
}

/// Runs the interactive loop until `quit` or end of input.
pub fn run<R, W>(
    input: R,
    out: &mut W,
    session: &mut TipSession,
    config: &ConfigState,
    format: OutputFormat,
) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write,
{
    info!("interactive session started");
    writeln!(out, "Tip calculator. Type 'help' for commands.")?;

    let mut lines = input.lines();
    loop {
        write!(out, "{}", config.prompt)?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let line = line?;

        let command = match line.parse::<ReplCommand>() {
            Ok(command) => command,
            Err(err) => {
                write_error(out, &err, format)?;
                continue;
            }
        };
        debug!(?command, "repl command");

        let outcome = match command {
            ReplCommand::Nothing => continue,
            ReplCommand::Quit => break,
            ReplCommand::Help => {
                writeln!(out, "{HELP}")?;
                continue;
            }
            ReplCommand::Json => {
                write_view(out, &calculator::get_view(session), OutputFormat::Json)?;
                continue;
            }
            ReplCommand::Show => Ok(calculator::get_view(session)),
            ReplCommand::Reset => Ok(calculator::reset(session)),
            ReplCommand::Bill(text) => calculator::set_bill_amount(session, &text),
            ReplCommand::People(text) => calculator::set_number_of_people(session, &text),
            ReplCommand::Custom(text) => calculator::set_custom_tip(session, &text),
            ReplCommand::Tip(pct) => calculator::select_tip(session, pct),
        };

        match outcome {
            Ok(view) => write_view(out, &view, format)?,
            Err(err) => write_error(out, &err, format)?,
        }
    }

    info!("interactive session ended");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use std::io::Cursor;

    fn run_script(script: &str) -> (String, TipSession) {
        let mut session = TipSession::new();
        let mut out = Vec::new();
        run(
            Cursor::new(script.to_string()),
            &mut out,
            &mut session,
            &ConfigState::default(),
            OutputFormat::Text,
        )
        .unwrap();
        (String::from_utf8(out).unwrap(), session)
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!("bill 12.50".parse::<ReplCommand>(), Ok(ReplCommand::Bill("12.50".to_string())));
        assert_eq!("  PEOPLE   3 ".parse::<ReplCommand>(), Ok(ReplCommand::People("3".to_string())));
        assert_eq!("custom".parse::<ReplCommand>(), Ok(ReplCommand::Custom(String::new())));
        assert_eq!("tip 18".parse::<ReplCommand>(), Ok(ReplCommand::Tip(18)));
        assert_eq!("".parse::<ReplCommand>(), Ok(ReplCommand::Nothing));
        assert_eq!("exit".parse::<ReplCommand>(), Ok(ReplCommand::Quit));
    }

    #[test]
    fn test_parse_errors() {
        let err = "tip lots".parse::<ReplCommand>().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidCommand);

        let err = "dance".parse::<ReplCommand>().unwrap_err();
        assert_eq!(err.message, "unknown command: dance (try 'help')");
    }

    #[test]
    fn test_script_reaches_result() {
        let (out, session) = run_script("bill 100\npeople 4\ntip 20\nquit\n");
        assert!(out.contains("Error: Please select a tip percentage or enter a custom tip"));
        assert!(out.contains("Per Person (20% tip):"));
        assert!(out.contains("Total per Person: $30.00"));
        assert_eq!(session.form().bill_amount, "100");
    }

    #[test]
    fn test_script_rejection_keeps_field() {
        let (out, session) = run_script("people 3\npeople abc\n");
        assert!(out.contains("tip> Rejected input for number of people: \"abc\"\n"));
        assert_eq!(session.form().number_of_people, "3");
    }

    #[test]
    fn test_script_reset_and_eof() {
        let (out, session) = run_script("bill 20\ncustom 10\nreset");
        assert!(out.contains("Per Person (10% tip):"));
        assert!(out.ends_with("Error: Please enter a valid bill amount\ntip> \n"));
        assert_eq!(session.form(), &tipcalc_core::FormState::new());
    }

    #[test]
    fn test_unknown_command_does_not_stop_loop() {
        let (out, session) = run_script("nope\nbill 5\n");
        assert!(out.contains("unknown command: nope (try 'help')"));
        assert!(!out.contains("Rejected:"));
        assert_eq!(session.form().bill_amount, "5");
    }
}
