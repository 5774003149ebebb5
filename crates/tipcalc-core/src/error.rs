//! # Error Types
//!
//! Domain-specific error types for tipcalc-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tipcalc-core errors (this file)                                       │
//! │  ├── CoreError        - Rejected edits, unknown presets                │
//! │  └── ValidationError  - The four form rules, in evaluation order       │
//! │                                                                         │
//! │  CLI errors (in app)                                                   │
//! │  └── ApiError         - What the terminal renders (code + message)     │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Terminal               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. `ValidationError` display text IS the user-facing message
//! 3. Errors are enum variants, never String

use thiserror::Error;

use crate::types::Field;

// =============================================================================
// Core Error
// =============================================================================

/// Core engine errors.
///
/// Rejected edits are not failures of the form: the field simply keeps its
/// previous value. They are still reported so the caller can log or beep.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// An edit was refused by the field's character filter.
    ///
    /// ## When This Occurs
    /// - Typing a letter, sign or second decimal point into the bill or tip
    /// - Typing anything but digits into the people field
    #[error("Rejected input for {field}: {value:?}")]
    InputRejected { field: Field, value: String },

    /// A preset tip outside the offered quick-select buttons.
    #[error("Tip preset must be one of 15, 18, 20 (got {0})")]
    UnknownPreset(u32),

    /// Validation error (wraps ValidationError).
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Form validation failures.
///
/// Variants are declared in evaluation order. Only the first failing rule is
/// ever reported, so for overlapping violations the earlier variant wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Rule 1: bill must be a finite number strictly greater than zero.
    #[error("Please enter a valid bill amount")]
    InvalidBillAmount,

    /// Rule 2: people must be an integer of at least one.
    #[error("Number of people must be at least 1")]
    InvalidNumberOfPeople,

    /// Rule 3: no preset selected and no parseable custom tip.
    #[error("Please select a tip percentage or enter a custom tip")]
    MissingTip,

    /// Rule 4: custom tip present but negative or unparseable.
    #[error("Custom tip must be a valid positive number")]
    InvalidCustomTip,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
