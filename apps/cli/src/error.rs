//! # API Error Type
//!
//! Unified error type for calculator commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Tipcalc                                │
//! │                                                                         │
//! │  Terminal                    Rust                                       │
//! │  ────────                    ────                                       │
//! │                                                                         │
//! │  "people abc"                                                           │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Filter refused? ─── CoreError::InputRejected ────┐              │  │
//! │  │         │                                          │              │  │
//! │  │         ▼                                          ▼              │  │
//! │  │  Form invalid? ──── ValidationError ───────────── ApiError ─────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  JSON mode prints: { "code": "INPUT_REJECTED", "message": "..." }      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tipcalc_core::{CoreError, ValidationError};

/// Error returned from calculator commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "Number of people must be at least 1"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// One of the four form rules failed
    ValidationError,

    /// A keystroke filter refused an edit
    InputRejected,

    /// Tip preset is not one of the buttons
    UnknownPreset,

    /// Interactive line could not be understood
    InvalidCommand,

    /// Rendering or I/O failure
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates an invalid command error.
    pub fn invalid_command(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::InvalidCommand, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Validation messages pass through unchanged.
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::new(ErrorCode::ValidationError, err.to_string())
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InputRejected { .. } => {
                ApiError::new(ErrorCode::InputRejected, err.to_string())
            }
            CoreError::UnknownPreset(_) => ApiError::new(ErrorCode::UnknownPreset, err.to_string()),
            CoreError::Validation(e) => e.into(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON rendering failed: {}", err);
        ApiError::internal("Failed to render output")
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use tipcalc_core::Field;

    #[test]
    fn test_validation_error_keeps_message() {
        let err: ApiError = ValidationError::InvalidNumberOfPeople.into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "Number of people must be at least 1");
    }

    #[test]
    fn test_core_error_codes() {
        let rejected: ApiError = CoreError::InputRejected {
            field: Field::BillAmount,
            value: "-1".to_string(),
        }
        .into();
        assert_eq!(rejected.code, ErrorCode::InputRejected);

        let preset: ApiError = CoreError::UnknownPreset(17).into();
        assert_eq!(preset.code, ErrorCode::UnknownPreset);

        let wrapped: ApiError = CoreError::Validation(ValidationError::MissingTip).into();
        assert_eq!(wrapped.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_serialized_shape() {
        let err = ApiError::invalid_command("unknown command: foo");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "INVALID_COMMAND");
        assert_eq!(json["message"], "unknown command: foo");
    }
}
