//! # tipcalc-core: Pure Calculator Engine for Tipcalc
//!
//! This crate is the **heart** of Tipcalc. It turns raw form text (bill,
//! people, tip choice) into either one validation message or per-person
//! amounts, with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Tipcalc Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Presentation (terminal, web form)               │   │
//! │  │    Bill ──► People ──► Tip buttons / custom ──► Result block    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ raw strings in, view out               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tipcalc-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌───────────┐ ┌──────────────────┐ │   │
//! │  │   │  filter  │ │  parse   │ │validation │ │ calculator       │ │   │
//! │  │   │ keystroke│ │ lenient  │ │ 4 ordered │ │ per-person split │ │   │
//! │  │   │ patterns │ │ numbers  │ │   rules   │ │                  │ │   │
//! │  │   └──────────┘ └──────────┘ └───────────┘ └──────────────────┘ │   │
//! │  │              session: FormState + error slot                    │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CONCURRENCY • PURE FUNCTIONS                      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Form state, presets, results, view
//! - [`filter`] - Keystroke filters per field
//! - [`parse`] - Lenient numeric parsing of form text
//! - [`validation`] - The four ordered form rules
//! - [`calculator`] - Tip arithmetic
//! - [`session`] - Stateful form with atomic setters
//! - [`money`] - Display-time cents rounding and formatting
//! - [`error`] - Error types
//!
//! ## Example Usage
//!
//! ```rust
//! use tipcalc_core::{TipPreset, TipSession};
//!
//! let mut session = TipSession::new();
//! session.edit_bill_amount("100").unwrap();
//! session.edit_number_of_people("4").unwrap();
//! session.select_preset(TipPreset::Twenty);
//!
//! let result = session.calculate().unwrap();
//! assert_eq!(result.tip_amount_per_person, 5.0);
//! assert_eq!(result.total_amount_per_person, 30.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calculator;
pub mod error;
pub mod filter;
pub mod money;
pub mod parse;
pub mod session;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use calculator::evaluate;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use session::TipSession;
pub use types::*;
