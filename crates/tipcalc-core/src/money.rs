//! # Money Module
//!
//! Provides the `Money` type used when showing amounts to the user.
//!
//! ## Where Rounding Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  The calculator works on unrounded f64 amounts:                        │
//! │    $10.00 × 15% / 3 people = 0.5 tip, 3.8333… total per person         │
//! │                                                                         │
//! │  Rounding to whole cents happens exactly once, at display time:        │
//! │    Money::from_dollars(3.8333…) → 383 cents → "$3.83"                  │
//! │                                                                         │
//! │  Past 2^53 cents an f64 no longer resolves single cents; such amounts  │
//! │  are printed from their exact decimal value, never clamped.            │
//! │                                                                         │
//! │  Nothing downstream of Money ever feeds back into the arithmetic.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tipcalc_core::money::Money;
//!
//! let per_person = Money::from_dollars(30.0);
//! assert_eq!(per_person.cents(), Some(3000));
//! assert_eq!(per_person.to_string(), "$30.00");
//!
//! let big = Money::from_dollars(1.2e20);
//! assert_eq!(big.to_string(), "$120,000,000,000,000,000,000.00");
//! ```

use std::fmt;

/// Cent counts below this are exact integers in an f64 (2^53).
const MAX_EXACT_CENTS: f64 = 9_007_199_254_740_992.0;

// =============================================================================
// Money Type
// =============================================================================

/// A US dollar amount as computed, formatted to cents on display.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Money(f64);

impl Money {
    /// Wraps an unrounded dollar amount.
    #[inline]
    pub fn from_dollars(dollars: f64) -> Self {
        Money(dollars)
    }

    /// Returns the unrounded dollar amount.
    #[inline]
    pub fn dollars(&self) -> f64 {
        self.0
    }

    /// Rounds to whole cents (half away from zero).
    ///
    /// Returns `None` when the amount is not finite or too large for every
    /// cent to be represented.
    ///
    /// ## Example
    /// ```rust
    /// use tipcalc_core::money::Money;
    ///
    /// assert_eq!(Money::from_dollars(3.8333).cents(), Some(383));
    /// assert_eq!(Money::from_dollars(0.125).cents(), Some(13));
    /// assert_eq!(Money::from_dollars(1e20).cents(), None);
    /// ```
    pub fn cents(&self) -> Option<i64> {
        let cents = (self.0 * 100.0).round();
        (cents.abs() < MAX_EXACT_CENTS).then_some(cents as i64)
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }
}

/// Formats a non-negative finite amount as `whole.cc` without grouping.
fn fixed_cents(abs: f64) -> String {
    let cents = (abs * 100.0).round();
    if cents < MAX_EXACT_CENTS {
        let cents = cents as u64;
        format!("{}.{:02}", cents / 100, cents % 100)
    } else {
        format!("{abs:.2}")
    }
}

/// Inserts `,` between every group of three digits.
pub fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// en-US dollars: `$1,234.56`, `-$5.00`, `$∞`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_nan() {
            return f.write_str("$NaN");
        }

        let sign = if self.is_negative() { "-" } else { "" };
        if self.0.is_infinite() {
            return write!(f, "{sign}$∞");
        }

        let fixed = fixed_cents(self.0.abs());
        let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
        write!(f, "{sign}${}.{frac}", group_thousands(whole))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
