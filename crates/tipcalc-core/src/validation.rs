//! # Validation Module
//!
//! Turns raw form text into checked calculation inputs.
//!
//! ## Rule Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Rules (first failure wins)              │
//! │                                                                         │
//! │  1. Bill amount   non-empty, finite, > 0                               │
//! │     └── "Please enter a valid bill amount"                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  2. People        non-empty, integer >= 1                              │
//! │     └── "Number of people must be at least 1"                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  3. Tip source    preset selected, or custom tip parses                │
//! │     └── "Please select a tip percentage or enter a custom tip"         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  4. Custom tip    if present: parses and >= 0                          │
//! │     └── "Custom tip must be a valid positive number"                   │
//! │                                                                         │
//! │  Rule 3 is happy with "-5" (it parses); only rule 4 rejects negatives. │
//! │  0% passes every rule.                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tipcalc_core::validation::validate;
//! use tipcalc_core::{FormState, TipPreset, ValidationError};
//!
//! let mut form = FormState::new();
//! form.selected_preset = Some(TipPreset::Fifteen);
//! assert_eq!(validate(&form), Err(ValidationError::InvalidBillAmount));
//!
//! form.bill_amount = "80".to_string();
//! let inputs = validate(&form).unwrap();
//! assert_eq!(inputs.tip_percentage, 15.0);
//! ```

use tracing::trace;

use crate::error::ValidationError;
use crate::parse::{parse_decimal, parse_integer};
use crate::types::FormState;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Checked, parsed inputs for the tip arithmetic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TipInputs {
    /// Finite and strictly positive.
    pub bill: f64,
    /// A whole number, at least one. Carried as `f64` so that very long
    /// digit strings keep their magnitude.
    pub people: f64,
    /// Non-negative.
    pub tip_percentage: f64,
}

// =============================================================================
// Field Validators
// =============================================================================

/// Rule 1: bill must be present, finite and strictly positive.
///
/// ## Example
/// ```rust
/// use tipcalc_core::validation::validate_bill_amount;
///
/// assert_eq!(validate_bill_amount("42.50"), Ok(42.5));
/// assert!(validate_bill_amount("0").is_err());
/// assert!(validate_bill_amount("").is_err());
/// ```
pub fn validate_bill_amount(text: &str) -> ValidationResult<f64> {
    if text.is_empty() {
        return Err(ValidationError::InvalidBillAmount);
    }

    match parse_decimal(text) {
        Some(bill) if bill.is_finite() && bill > 0.0 => Ok(bill),
        _ => Err(ValidationError::InvalidBillAmount),
    }
}

/// Rule 2: people must be present and parse to an integer of at least one.
///
/// ## Example
/// ```rust
/// use tipcalc_core::validation::validate_number_of_people;
///
/// assert_eq!(validate_number_of_people("4"), Ok(4.0));
/// assert_eq!(validate_number_of_people("99999999999999999999"), Ok(1e20));
/// assert!(validate_number_of_people("0").is_err());
/// ```
pub fn validate_number_of_people(text: &str) -> ValidationResult<f64> {
    if text.is_empty() {
        return Err(ValidationError::InvalidNumberOfPeople);
    }

    match parse_integer(text) {
        Some(people) if people >= 1.0 => Ok(people),
        _ => Err(ValidationError::InvalidNumberOfPeople),
    }
}

/// Rules 3 and 4: resolves the effective tip percentage.
///
/// A selected preset wins over custom text, but custom text that is present
/// is still checked by rule 4 either way.
pub fn validate_tip(form: &FormState) -> ValidationResult<f64> {
    let custom = &form.custom_tip;
    let parsed_custom = if custom.is_empty() {
        None
    } else {
        parse_decimal(custom)
    };

    // Rule 3
    if form.selected_preset.is_none() && parsed_custom.is_none() {
        return Err(ValidationError::MissingTip);
    }

    // Rule 4
    if !custom.is_empty() {
        match parsed_custom {
            Some(pct) if pct >= 0.0 => {}
            _ => return Err(ValidationError::InvalidCustomTip),
        }
    }

    match (form.selected_preset, parsed_custom) {
        (Some(preset), _) => Ok(f64::from(preset.percentage())),
        (None, Some(pct)) => Ok(pct),
        // Rule 3 has already ruled this out
        (None, None) => Err(ValidationError::MissingTip),
    }
}

// =============================================================================
// Form Validation
// =============================================================================

/// Validates the whole form in rule order.
pub fn validate(form: &FormState) -> ValidationResult<TipInputs> {
    let outcome = validate_bill_amount(&form.bill_amount).and_then(|bill| {
        let people = validate_number_of_people(&form.number_of_people)?;
        let tip_percentage = validate_tip(form)?;
        Ok(TipInputs {
            bill,
            people,
            tip_percentage,
        })
    });

    match &outcome {
        Ok(inputs) => trace!(?inputs, "form valid"),
        Err(err) => trace!(%err, "form invalid"),
    }

    outcome
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TipPreset;

    fn form(bill: &str, people: &str, preset: Option<TipPreset>, custom: &str) -> FormState {
        FormState {
            bill_amount: bill.to_string(),
            number_of_people: people.to_string(),
            selected_preset: preset,
            custom_tip: custom.to_string(),
        }
    }

    #[test]
    fn test_validate_bill_amount() {
        assert_eq!(validate_bill_amount("100"), Ok(100.0));
        assert_eq!(validate_bill_amount("0.01"), Ok(0.01));
        assert_eq!(validate_bill_amount("12abc"), Ok(12.0));

        for bad in ["", "0", "0.0", "-5", ".", "abc", "Infinity", "1e999"] {
            assert_eq!(
                validate_bill_amount(bad),
                Err(ValidationError::InvalidBillAmount),
                "bill {bad:?}"
            );
        }
    }

    #[test]
    fn test_validate_number_of_people() {
        assert_eq!(validate_number_of_people("1"), Ok(1.0));
        assert_eq!(validate_number_of_people("12"), Ok(12.0));
        assert_eq!(validate_number_of_people("2.9"), Ok(2.0));

        for bad in ["", "0", "-1", "abc", ".5"] {
            assert_eq!(
                validate_number_of_people(bad),
                Err(ValidationError::InvalidNumberOfPeople),
                "people {bad:?}"
            );
        }
    }

    #[test]
    fn test_validate_tip_sources() {
        let preset = form("10", "1", Some(TipPreset::Eighteen), "");
        assert_eq!(validate_tip(&preset), Ok(18.0));

        let custom = form("10", "1", None, "12.5");
        assert_eq!(validate_tip(&custom), Ok(12.5));

        let zero = form("10", "1", None, "0");
        assert_eq!(validate_tip(&zero), Ok(0.0));
    }

    #[test]
    fn test_missing_tip() {
        assert_eq!(
            validate_tip(&form("10", "1", None, "")),
            Err(ValidationError::MissingTip)
        );
        // "." does not parse, so rule 3 fires before rule 4
        assert_eq!(
            validate_tip(&form("10", "1", None, ".")),
            Err(ValidationError::MissingTip)
        );
    }

    #[test]
    fn test_negative_custom_tip_hits_rule_four() {
        assert_eq!(
            validate_tip(&form("10", "1", None, "-5")),
            Err(ValidationError::InvalidCustomTip)
        );
    }

    #[test]
    fn test_preset_with_bad_custom_text_still_checked() {
        // Only reachable with a hand-built form; the session never allows it
        assert_eq!(
            validate_tip(&form("10", "1", Some(TipPreset::Fifteen), "abc")),
            Err(ValidationError::InvalidCustomTip)
        );
        assert_eq!(
            validate_tip(&form("10", "1", Some(TipPreset::Fifteen), "25")),
            Ok(15.0)
        );
    }

    #[test]
    fn test_rule_order() {
        // Everything wrong: bill wins
        assert_eq!(
            validate(&form("", "0", None, "-1")),
            Err(ValidationError::InvalidBillAmount)
        );
        // People before tip
        assert_eq!(
            validate(&form("20", "0", None, "")),
            Err(ValidationError::InvalidNumberOfPeople)
        );
        // Tip source before custom sign
        assert_eq!(
            validate(&form("20", "2", None, "")),
            Err(ValidationError::MissingTip)
        );
    }

    #[test]
    fn test_validate_ok() {
        let inputs = validate(&form("100", "4", Some(TipPreset::Twenty), "")).unwrap();
        assert_eq!(
            inputs,
            TipInputs {
                bill: 100.0,
                people: 4.0,
                tip_percentage: 20.0,
            }
        );
    }
}
