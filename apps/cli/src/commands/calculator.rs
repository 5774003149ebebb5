//! # Calculator Commands
//!
//! One function per user action on the form.
//!
//! ## Form Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Form Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐                        │
//! │  │  Fresh   │────►│ Editing  │────►│  Result  │                        │
//! │  │  form    │     │ (error)  │◄────│  shown   │                        │
//! │  └──────────┘     └──────────┘     └──────────┘                        │
//! │        ▲               │                 │                              │
//! │        │          set_bill_amount        │                              │
//! │        │          set_number_of_people   │                              │
//! │        │          set_custom_tip         │                              │
//! │        │          select_tip             │                              │
//! │        │                                 │                              │
//! │        └──────────── reset ◄─────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every edit returns the freshly computed view, so the caller never renders
//! stale output. A refused edit returns an `ApiError` and leaves the form
//! untouched.

use tracing::debug;

use crate::error::ApiError;
use tipcalc_core::{CalculatorView, TipPreset, TipSession};

/// Gets the current view without changing the form.
pub fn get_view(session: &mut TipSession) -> CalculatorView {
    debug!("get_view command");
    session.view()
}

/// Replaces the bill amount text.
pub fn set_bill_amount(session: &mut TipSession, value: &str) -> Result<CalculatorView, ApiError> {
    debug!(value = %value, "set_bill_amount command");
    session.edit_bill_amount(value)?;
    Ok(session.view())
}

/// Replaces the number-of-people text.
pub fn set_number_of_people(
    session: &mut TipSession,
    value: &str,
) -> Result<CalculatorView, ApiError> {
    debug!(value = %value, "set_number_of_people command");
    session.edit_number_of_people(value)?;
    Ok(session.view())
}

/// Replaces the custom tip text, deselecting any preset.
pub fn set_custom_tip(session: &mut TipSession, value: &str) -> Result<CalculatorView, ApiError> {
    debug!(value = %value, "set_custom_tip command");
    session.edit_custom_tip(value)?;
    Ok(session.view())
}

/// Clicks a preset tip button.
///
/// ## Arguments
/// * `percentage` - 15, 18 or 20
pub fn select_tip(session: &mut TipSession, percentage: u32) -> Result<CalculatorView, ApiError> {
    debug!(percentage = %percentage, "select_tip command");
    let preset = TipPreset::try_from(percentage)?;
    session.select_preset(preset);
    Ok(session.view())
}

/// Restores the fresh form.
pub fn reset(session: &mut TipSession) -> CalculatorView {
    debug!("reset command");
    session.reset();
    session.view()
}
