//! # Commands Module
//!
//! All actions the terminal front end can perform on a session.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs         ◄─── You are here (exports)
//! └── calculator.rs  ◄─── Form edits, preset selection, reset, view
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  repl / one-shot flags                                                  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  fn set_bill_amount(                                                    │
//! │      session: &mut TipSession,  ◄── owned by the caller                │
//! │      value: &str,               ◄── raw text, unfiltered               │
//! │  ) -> Result<CalculatorView, ApiError>                                  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  render::write_view (text or JSON)                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod calculator;
