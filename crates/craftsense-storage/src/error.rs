//! # Storage Error Types
//!
//! Error types for durable storage operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StorageError (this module) ← Adds key context and categorization      │
//! │       │                                                                 │
//! │       ├──► Store mutations: logged at WARN, swallowed                  │
//! │       │                                                                 │
//! │       └──► Explicit persist()/backend calls: returned to the caller    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Storage operation errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend cannot be reached at all.
    ///
    /// ## When This Occurs
    /// - Storage directory missing and cannot be created
    /// - In-memory backend lock poisoned
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// Writing the value would exceed the backend's capacity.
    #[error("Storage quota exceeded writing '{key}': {needed} bytes needed, {available} available")]
    QuotaExceeded {
        key: String,
        needed: usize,
        available: usize,
    },

    /// Key contains characters the backend cannot store.
    #[error("Invalid storage key '{0}': use letters, digits, '-' or '_'")]
    InvalidKey(String),

    /// Underlying file system failure.
    #[error("I/O error on '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// State could not be encoded to JSON.
    #[error("Failed to serialize '{key}': {source}")]
    Serialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

impl StorageError {
    pub fn io(key: impl Into<String>, source: std::io::Error) -> Self {
        StorageError::Io {
            key: key.into(),
            source,
        }
    }
}

/// Convenience type alias for storage results.
pub type StorageResult<T> = Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = StorageError::QuotaExceeded {
            key: "cart".to_string(),
            needed: 120,
            available: 64,
        };
        assert_eq!(
            err.to_string(),
            "Storage quota exceeded writing 'cart': 120 bytes needed, 64 available"
        );

        let err = StorageError::InvalidKey("../etc".to_string());
        assert!(err.to_string().contains("../etc"));
    }
}
