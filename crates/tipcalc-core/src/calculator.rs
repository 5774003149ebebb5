//! # Calculator
//!
//! Tip arithmetic for a validated form.
//!
//! ```text
//! tip_amount   = bill × tip% / 100
//! total_amount = bill + tip_amount
//!
//! per person   = amount / people      (no rounding before the split)
//! ```

use crate::types::{FormState, TipResult};
use crate::validation::{validate, TipInputs, ValidationResult};

/// Computes per-person amounts from checked inputs.
///
/// ## Example
/// ```rust
/// use tipcalc_core::calculator::calculate;
/// use tipcalc_core::validation::TipInputs;
///
/// let result = calculate(&TipInputs { bill: 100.0, people: 4.0, tip_percentage: 20.0 });
/// assert_eq!(result.tip_amount_per_person, 5.0);
/// assert_eq!(result.total_amount_per_person, 30.0);
/// ```
pub fn calculate(inputs: &TipInputs) -> TipResult {
    let people = inputs.people;
    let tip_amount = inputs.bill * inputs.tip_percentage / 100.0;
    let total_amount = inputs.bill + tip_amount;

    TipResult {
        tip_amount_per_person: tip_amount / people,
        total_amount_per_person: total_amount / people,
        effective_tip_percentage: inputs.tip_percentage,
    }
}

/// Validates `form` and, if it passes, computes the result.
///
/// This is a pure function of the form; calling it twice with the same
/// form yields the same answer.
pub fn evaluate(form: &FormState) -> ValidationResult<TipResult> {
    validate(form).map(|inputs| calculate(&inputs))
}
