//! # Rendering
//!
//! Turns a `CalculatorView` into terminal output.
//!
//! ```text
//! Per Person (20% tip):
//!   Tip Amount:       $5.00
//!   Total per Person: $30.00
//! ```
//!
//! or, when the form is invalid, a single `Error: ...` line. Amounts are
//! rounded to cents here and nowhere else.

use std::io::Write;

use crate::error::ApiError;
use crate::state::OutputFormat;
use tipcalc_core::{CalculatorView, Money, TipResult};

/// Formats the per-person block for a valid result.
pub fn render_result(result: &TipResult) -> String {
    format!(
        "Per Person ({}% tip):\n  Tip Amount:       {}\n  Total per Person: {}",
        result.effective_tip_percentage,
        Money::from_dollars(result.tip_amount_per_person),
        Money::from_dollars(result.total_amount_per_person),
    )
}

/// Formats a view as text: the error line or the result block.
pub fn render_text(view: &CalculatorView) -> String {
    match (&view.error, &view.result) {
        (Some(error), _) => format!("Error: {error}"),
        (None, Some(result)) => render_result(result),
        (None, None) => String::new(),
    }
}

/// Formats a view as a single-line JSON object.
pub fn render_json(view: &CalculatorView) -> Result<String, ApiError> {
    Ok(serde_json::to_string(view)?)
}

/// Writes a view followed by a newline.
pub fn write_view<W: Write>(
    out: &mut W,
    view: &CalculatorView,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let rendered = match format {
        OutputFormat::Text => render_text(view),
        OutputFormat::Json => render_json(view)?,
    };
    writeln!(out, "{rendered}")?;
    Ok(())
}

/// Writes a command error followed by a newline.
///
/// Text mode prints the message alone; it already says what went wrong.
pub fn write_error<W: Write>(out: &mut W, err: &ApiError, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", err.message)?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(err)?)?,
    }
    Ok(())
}
