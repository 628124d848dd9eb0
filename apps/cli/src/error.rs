//! # Application Error Type
//!
//! Unified error type for CLI commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in CraftSense                             │
//! │                                                                         │
//! │  craftsense cart add p99                                               │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  AppResult<Response>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Catalog lookup? ─── CoreError::ProductNotFound ───┐            │  │
//! │  │         │                                          │            │  │
//! │  │         ▼                                          ▼            │  │
//! │  │  Bad input? ──────── CoreError::Validation ────── AppError ────►│  │
//! │  │         │                                          ▲            │  │
//! │  │         ▼                                          │            │  │
//! │  │  Config/storage? ─── ConfigError / StorageError ───┘            │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  stderr: error [NOT_FOUND]: Product not found: p99                      │
//! │  exit status: 3                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Persistence failures during a mutation never reach this type: the stores
//! log and swallow them. Only opening storage can fail a command.

use serde::Serialize;

use craftsense_core::CoreError;
use craftsense_storage::StorageError;

use crate::state::ConfigError;

/// Error returned from CLI commands.
///
/// ## Serialization
/// With `--json`, this is what a failed command prints:
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Product not found: p99"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppError {
    /// Machine-readable error code for scripting
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error categories, each with its own process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Product, workshop or post id not in the catalog/board
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Storage could not be opened
    StorageError,

    /// Configuration file or override is invalid
    ConfigError,

    /// Anything else
    Internal,
}

impl ErrorCode {
    /// Process exit status for this category.
    pub fn exit_code(&self) -> u8 {
        match self {
            ErrorCode::Internal => 1,
            ErrorCode::NotFound => 3,
            ErrorCode::ValidationError => 4,
            ErrorCode::StorageError => 5,
            ErrorCode::ConfigError => 6,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::StorageError => "STORAGE_ERROR",
            ErrorCode::ConfigError => "CONFIG_ERROR",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

impl AppError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        AppError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::ValidationError, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::Internal, message)
    }

    pub fn exit_code(&self) -> u8 {
        self.code.exit_code()
    }
}

/// Converts core errors to application errors.
impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => AppError::not_found("Product", &id),
            CoreError::WorkshopNotFound(id) => AppError::not_found("Workshop", &id),
            CoreError::PostNotFound(id) => AppError::not_found("Post", &id),
            CoreError::QuantityOverflow { .. } => AppError::validation(err.to_string()),
            CoreError::InvalidCatalog(reason) => {
                tracing::error!("Catalog failed to load: {}", reason);
                AppError::new(ErrorCode::ConfigError, format!("Invalid catalog: {}", reason))
            }
            CoreError::Validation(e) => AppError::validation(e.to_string()),
        }
    }
}

/// Converts storage errors to application errors.
impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        tracing::error!(error = %err, "Storage error");
        AppError::new(ErrorCode::StorageError, err.to_string())
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for AppError {}

/// Convenience type alias for command results.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use craftsense_core::ValidationError;

    #[test]
    fn test_core_errors_map_to_codes() {
        let err = AppError::from(CoreError::ProductNotFound("p99".into()));
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Product not found: p99");
        assert_eq!(err.exit_code(), 3);

        let err = AppError::from(CoreError::Validation(ValidationError::MustBePositive {
            field: "quantity".into(),
        }));
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_storage_error_maps_to_storage_code() {
        let err = AppError::from(StorageError::Unavailable("disk gone".into()));
        assert_eq!(err.code, ErrorCode::StorageError);
        assert_eq!(err.exit_code(), 5);
        assert!(err.message.contains("disk gone"));
    }

    #[test]
    fn test_display_and_json() {
        let err = AppError::not_found("Workshop", "9");
        assert_eq!(err.to_string(), "[NOT_FOUND] Workshop not found: 9");

        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, r#"{"code":"NOT_FOUND","message":"Workshop not found: 9"}"#);
    }
}
