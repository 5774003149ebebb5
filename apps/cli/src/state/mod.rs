//! # State Module
//!
//! Long-lived state owned by the terminal front end.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Ownership                                      │
//! │                                                                         │
//! │  main ──► ConfigState (read-only after startup)                        │
//! │       └─► TipSession  (tipcalc-core, exclusively owned by the loop)    │
//! │                                                                         │
//! │  One user, one thread: no locks needed.                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;

pub use config::{ConfigError, ConfigState, OutputFormat, DEFAULT_LOG_FILTER};
