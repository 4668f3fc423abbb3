//! # Error Types
//!
//! Domain-specific error types for lodge-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  lodge-core errors (this file)                                         │
//! │  └── ValidationError  - Field-level input validation failures          │
//! │                                                                         │
//! │  lodge-store errors (separate crate)                                   │
//! │  ├── StoreError       - Store operation failures                       │
//! │  └── StorageError     - Slot persistence failures                      │
//! │                                                                         │
//! │  Flow: ValidationError(s) → StoreError → caller → form UI              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Every variant names the offending field so the UI can scope messages
//! 3. Errors are enum variants, never String
//! 4. Validation reports ALL failing fields at once, so errors travel in a
//!    `Vec<ValidationError>` rather than short-circuiting on the first one

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when a submitted booking draft doesn't meet
/// requirements. One value is produced per failing field; callers receive
/// the complete set so a form can highlight every problem in one pass.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too short.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: String, min: usize },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format (e.g., malformed date, bad email address).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in the allowed set (e.g., unknown room type).
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },

    /// Cross-field ordering violation (check-out before check-in).
    #[error("{field} must be later than {other}")]
    MustFollow { field: String, other: String },
}

impl ValidationError {
    /// The name of the field this error is scoped to.
    ///
    /// ## Usage
    /// The form UI groups error messages under their input widgets by
    /// this name.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::TooShort { field, .. }
            | ValidationError::TooLong { field, .. }
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::NotAllowed { field, .. }
            | ValidationError::MustFollow { field, .. } => field,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
