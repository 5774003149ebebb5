//! # Tip Session
//!
//! Owns one calculator form and applies user edits to it.
//!
//! ## Session Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session Operations                                   │
//! │                                                                         │
//! │  User Action             Session Method            Form Change          │
//! │  ───────────             ──────────────            ───────────          │
//! │                                                                         │
//! │  Type in bill ──────────► edit_bill_amount() ────► bill (if filter ok)  │
//! │                                                                         │
//! │  Type in people ────────► edit_number_of_people()► people (if ok)       │
//! │                                                                         │
//! │  Type custom tip ───────► edit_custom_tip() ─────► custom, preset=None  │
//! │                                                                         │
//! │  Click 15/18/20 ────────► select_preset() ───────► preset, custom=""    │
//! │                                                                         │
//! │  Click Reset ───────────► reset() ───────────────► initial form         │
//! │                                                                         │
//! │  Render ────────────────► view() ────────────────► (validate + calc)    │
//! │                                                                         │
//! │  Every accepted edit clears the current error. Rejected edits change   │
//! │  nothing at all.                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, trace};

use crate::calculator::calculate;
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::{CalculatorView, Field, FormState, TipPreset, TipResult};
use crate::validation::{validate, TipInputs, ValidationResult};

/// A single user's calculator session.
///
/// ## Invariants
/// - `selected_preset` and a non-empty `custom_tip` are never both set
/// - every field holds text that passed its filter
#[derive(Debug, Clone, Default)]
pub struct TipSession {
    form: FormState,
    error: Option<ValidationError>,
}

impl TipSession {
    /// Creates a session with the initial form.
    pub fn new() -> Self {
        TipSession::default()
    }

    /// Returns the current form.
    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Returns the error recorded by the last validation, if any.
    pub fn error(&self) -> Option<ValidationError> {
        self.error
    }

    /// Replaces a text field if the new text passes its filter.
    fn edit(&mut self, field: Field, value: &str) -> CoreResult<()> {
        if !field.accepts(value) {
            debug!(%field, value, "edit rejected");
            return Err(CoreError::InputRejected {
                field,
                value: value.to_string(),
            });
        }

        let text = self.form.text_mut(field);
        text.clear();
        text.push_str(value);
        self.error = None;
        debug!(%field, value, "edit accepted");
        Ok(())
    }

    /// Sets the bill amount text.
    pub fn edit_bill_amount(&mut self, value: &str) -> CoreResult<()> {
        self.edit(Field::BillAmount, value)
    }

    /// Sets the number-of-people text.
    pub fn edit_number_of_people(&mut self, value: &str) -> CoreResult<()> {
        self.edit(Field::NumberOfPeople, value)
    }

    /// Sets the custom tip text and deselects any preset.
    ///
    /// The preset is cleared only when the edit is accepted.
    pub fn edit_custom_tip(&mut self, value: &str) -> CoreResult<()> {
        self.edit(Field::CustomTip, value)?;
        self.form.selected_preset = None;
        Ok(())
    }

    /// Activates a preset and clears the custom tip text.
    pub fn select_preset(&mut self, preset: TipPreset) {
        self.form.selected_preset = Some(preset);
        self.form.custom_tip.clear();
        self.error = None;
        debug!(%preset, "preset selected");
    }

    /// Restores the initial form. Calling it again changes nothing.
    pub fn reset(&mut self) {
        self.form = FormState::new();
        self.error = None;
        debug!("session reset");
    }

    /// Runs validation and records the outcome in the error slot.
    pub fn validate(&mut self) -> ValidationResult<TipInputs> {
        let outcome = validate(&self.form);
        self.error = outcome.err();
        outcome
    }

    /// Validates, then computes the per-person amounts.
    pub fn calculate(&mut self) -> ValidationResult<TipResult> {
        self.validate().map(|inputs| calculate(&inputs))
    }

    /// Recomputes everything a presentation layer shows.
    ///
    /// The error message shown is the one left in the error slot.
    pub fn view(&mut self) -> CalculatorView {
        let result = self.calculate().ok();
        let error = self.error.map(|err| err.to_string());
        trace!(?error, ?result, "view computed");

        CalculatorView {
            form: self.form.clone(),
            error,
            result,
        }
    }
}
