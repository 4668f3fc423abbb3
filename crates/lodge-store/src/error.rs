//! # Store Error Types
//!
//! Error types for booking store and slot persistence operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  File/JSON Error (std::io, serde_json)                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StorageError (this module) ← Adds slot path context                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← What callers of the store see              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Frontend displays field errors / a rejected-operation message         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Expected conditions (validation failure, not-found, invalid
//! transition) are ordinary result values here, never panics. Only
//! persistence faults are unexpected, and even those are converted to
//! `StoreError::Persistence` at the store boundary rather than crashing.

use std::path::PathBuf;

use thiserror::Error;

use lodge_core::{BookingStatus, ValidationError};

// =============================================================================
// Storage Error
// =============================================================================

/// Slot persistence errors.
///
/// Raised when the durable slot file cannot be read or written. On
/// write, the triggering mutation is rolled back in memory; on load, the
/// store degrades to an empty state instead of failing startup.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The slot file exists but could not be read.
    #[error("failed to read slot file {}: {reason}", .path.display())]
    Read { path: PathBuf, reason: String },

    /// The slot file (or its directory) could not be written.
    #[error("failed to write slot file {}: {reason}", .path.display())]
    Write { path: PathBuf, reason: String },

    /// The slot file's contents are not a valid booking map.
    ///
    /// ## When This Occurs
    /// - Truncated or hand-edited slot file
    /// - A different application wrote the slot
    #[error("slot file {} holds invalid data: {reason}", .path.display())]
    Corrupt { path: PathBuf, reason: String },

    /// The in-memory booking map could not be serialized.
    #[error("failed to serialize booking map: {0}")]
    Serialize(String),
}

// =============================================================================
// Store Error
// =============================================================================

/// Booking store operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The submitted draft failed field validation.
    ///
    /// Carries the complete set of field-scoped errors so the form can
    /// surface every problem at once. The store was not mutated.
    #[error("booking draft rejected with {} validation error(s)", .0.len())]
    Validation(Vec<ValidationError>),

    /// No booking with the given id exists.
    #[error("Booking not found: {id}")]
    NotFound { id: String },

    /// The requested status change is not an edge of the lifecycle
    /// graph. State is unchanged.
    ///
    /// ## When This Occurs
    /// - Skipping a state (Confirmed straight to CheckedOut)
    /// - Leaving a terminal state (CheckedOut, Cancelled)
    /// - Moving backwards (CheckedIn back to Confirmed)
    #[error("booking {id} cannot move from {from:?} to {to:?}")]
    InvalidTransition {
        id: String,
        from: BookingStatus,
        to: BookingStatus,
    },

    /// Durable storage failed; the in-memory mutation was rolled back.
    #[error(transparent)]
    Persistence(#[from] StorageError),
}

impl StoreError {
    /// Creates a NotFound error for a given booking id.
    pub fn not_found(id: impl Into<String>) -> Self {
        StoreError::NotFound { id: id.into() }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = StoreError::not_found("b-123");
        assert_eq!(err.to_string(), "Booking not found: b-123");

        let err = StoreError::InvalidTransition {
            id: "b-123".to_string(),
            from: BookingStatus::CheckedOut,
            to: BookingStatus::Confirmed,
        };
        assert_eq!(
            err.to_string(),
            "booking b-123 cannot move from CheckedOut to Confirmed"
        );
    }

    #[test]
    fn test_validation_error_count_in_message() {
        let err = StoreError::Validation(vec![
            ValidationError::Required {
                field: "guestName".to_string(),
            },
            ValidationError::Required {
                field: "email".to_string(),
            },
        ]);
        assert_eq!(
            err.to_string(),
            "booking draft rejected with 2 validation error(s)"
        );
    }

    #[test]
    fn test_storage_error_converts_to_store_error() {
        let storage_err = StorageError::Serialize("boom".to_string());
        let store_err: StoreError = storage_err.into();
        assert!(matches!(store_err, StoreError::Persistence(_)));
    }
}
