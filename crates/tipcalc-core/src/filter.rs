//! # Input Filters
//!
//! Character-class filters applied to every edit of a text field.
//!
//! An edit is accepted or rejected as a whole: the filter never strips
//! characters, it only decides whether the resulting text may replace the
//! old one.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Field              Pattern            Accepts         Rejects          │
//! │  ────────────────   ────────────────   ─────────────   ──────────────   │
//! │  Bill amount        ^[0-9]*\.?[0-9]*$  "", "12.5", "." "-5", "1e3"      │
//! │  Custom tip         ^[0-9]*\.?[0-9]*$  "", "18", ".5"  "1.2.3", "5%"    │
//! │  Number of people   ^[0-9]*$           "", "4"         "1.5", "abc"     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::types::Field;

static DECIMAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]*\.?[0-9]*$").expect("decimal filter pattern is valid"));

static DIGITS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]*$").expect("digits filter pattern is valid"));

/// Returns true for "", or ASCII digits with at most one decimal point.
pub fn accepts_decimal(value: &str) -> bool {
    DECIMAL_RE.is_match(value)
}

/// Returns true for "", or ASCII digits only.
pub fn accepts_digits(value: &str) -> bool {
    DIGITS_RE.is_match(value)
}

impl Field {
    /// Checks whether `value` may become this field's new text.
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            Field::BillAmount | Field::CustomTip => accepts_decimal(value),
            Field::NumberOfPeople => accepts_digits(value),
        }
    }
}
