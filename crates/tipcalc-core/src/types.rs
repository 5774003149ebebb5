//! # Domain Types
//!
//! Core domain types used throughout Tipcalc.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   FormState     │   │   TipResult     │   │ CalculatorView  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  bill_amount    │   │  tip / person   │   │  form           │       │
//! │  │  people         │──►│  total / person │──►│  error          │       │
//! │  │  selected_preset│   │  tip percentage │   │  result         │       │
//! │  │  custom_tip     │   └─────────────────┘   └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │   TipPreset     │   │     Field       │                             │
//! │  │  15 | 18 | 20   │   │  which text box │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every field of `FormState` is the raw text the user typed. Nothing is
//! parsed until validation runs.

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Default people count shown in a fresh form.
pub const DEFAULT_NUMBER_OF_PEOPLE: &str = "1";

// =============================================================================
// Tip Preset
// =============================================================================

/// One of the quick-select tip buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum TipPreset {
    #[serde(rename = "15")]
    Fifteen,
    #[serde(rename = "18")]
    Eighteen,
    #[serde(rename = "20")]
    Twenty,
}

impl TipPreset {
    /// All presets in button order.
    pub const ALL: [TipPreset; 3] = [TipPreset::Fifteen, TipPreset::Eighteen, TipPreset::Twenty];

    /// Returns the tip percentage this preset stands for.
    #[inline]
    pub const fn percentage(&self) -> u32 {
        match self {
            TipPreset::Fifteen => 15,
            TipPreset::Eighteen => 18,
            TipPreset::Twenty => 20,
        }
    }
}

impl TryFrom<u32> for TipPreset {
    type Error = CoreError;

    fn try_from(pct: u32) -> Result<Self, Self::Error> {
        TipPreset::ALL
            .into_iter()
            .find(|p| p.percentage() == pct)
            .ok_or(CoreError::UnknownPreset(pct))
    }
}

impl fmt::Display for TipPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percentage())
    }
}

// =============================================================================
// Field
// =============================================================================

/// The free-text fields of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    BillAmount,
    NumberOfPeople,
    CustomTip,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::BillAmount => "bill amount",
            Field::NumberOfPeople => "number of people",
            Field::CustomTip => "custom tip",
        };
        f.write_str(name)
    }
}

// =============================================================================
// Form State
// =============================================================================

/// Raw text state of the calculator form.
///
/// ## Invariant
/// At most one tip source is active: either `selected_preset` is set or
/// `custom_tip` holds text, never both. `TipSession` keeps this true; a
/// hand-built `FormState` may break it, and validation still behaves
/// deterministically in that case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    /// Bill amount as typed, e.g. "42.50".
    pub bill_amount: String,

    /// Number of people as typed. Starts at "1".
    pub number_of_people: String,

    /// Active quick-select preset, if any.
    pub selected_preset: Option<TipPreset>,

    /// Custom tip percentage as typed. Empty while a preset is active.
    pub custom_tip: String,
}

impl FormState {
    /// Creates the initial form: empty bill, one person, no tip.
    pub fn new() -> Self {
        FormState {
            bill_amount: String::new(),
            number_of_people: DEFAULT_NUMBER_OF_PEOPLE.to_string(),
            selected_preset: None,
            custom_tip: String::new(),
        }
    }

    /// Returns the raw text of a field.
    pub fn text(&self, field: Field) -> &str {
        match field {
            Field::BillAmount => &self.bill_amount,
            Field::NumberOfPeople => &self.number_of_people,
            Field::CustomTip => &self.custom_tip,
        }
    }

    pub(crate) fn text_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::BillAmount => &mut self.bill_amount,
            Field::NumberOfPeople => &mut self.number_of_people,
            Field::CustomTip => &mut self.custom_tip,
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        FormState::new()
    }
}

// =============================================================================
// Tip Result
// =============================================================================

/// Per-person amounts for a valid form.
///
/// Values are unrounded; currency rounding happens only at display time
/// (see [`crate::money::Money`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TipResult {
    pub tip_amount_per_person: f64,
    pub total_amount_per_person: f64,
    /// The percentage actually applied (preset or custom).
    pub effective_tip_percentage: f64,
}

// =============================================================================
// Calculator View
// =============================================================================

/// Everything a presentation layer needs after one event.
///
/// `error` and `result` are mutually exclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorView {
    pub form: FormState,
    pub error: Option<String>,
    pub result: Option<TipResult>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_state_initial() {
        let form = FormState::default();
        assert_eq!(form.bill_amount, "");
        assert_eq!(form.number_of_people, "1");
        assert_eq!(form.selected_preset, None);
        assert_eq!(form.custom_tip, "");
    }

    #[test]
    fn test_preset_try_from() {
        assert_eq!(TipPreset::try_from(18).unwrap(), TipPreset::Eighteen);
        assert_eq!(TipPreset::try_from(17), Err(CoreError::UnknownPreset(17)));
    }

    #[test]
    fn test_preset_serializes_as_percentage_string() {
        let json = serde_json::to_string(&TipPreset::Twenty).unwrap();
        assert_eq!(json, "\"20\"");

        let preset: TipPreset = serde_json::from_str("\"15\"").unwrap();
        assert_eq!(preset, TipPreset::Fifteen);
    }

    #[test]
    fn test_form_state_camel_case() {
        let form = FormState {
            bill_amount: "100".to_string(),
            number_of_people: "4".to_string(),
            selected_preset: Some(TipPreset::Twenty),
            custom_tip: String::new(),
        };
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["billAmount"], "100");
        assert_eq!(json["numberOfPeople"], "4");
        assert_eq!(json["selectedPreset"], "20");
        assert_eq!(json["customTip"], "");
    }
}
