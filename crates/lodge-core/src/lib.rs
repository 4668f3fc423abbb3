//! # lodge-core: Pure Business Logic for Lodge
//!
//! This crate is the **heart** of Lodge, a reservation manager for a
//! single-property hotel. It contains all business logic as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Lodge Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Frontend (React)                           │   │
//! │  │    Booking Form ──► Guest List ──► Status Lookup               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                ★ lodge-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐   ┌───────────┐   ┌───────────┐                │   │
//! │  │   │   types   │   │validation │   │   error   │                │   │
//! │  │   │  Booking  │   │   rules   │   │  variants │                │   │
//! │  │   │  Status   │   │  checks   │   │  per field│                │   │
//! │  │   └───────────┘   └───────────┘   └───────────┘                │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 lodge-store (Persistence Layer)                 │   │
//! │  │          Booking store, JSON slot file, write-through           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Booking, RoomType, BookingStatus)
//! - [`error`] - Domain error types
//! - [`validation`] - Booking field validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Typed Boundaries**: Only [`validation::ValidatedBooking`] crosses
//!    into the store; raw form strings never do
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use lodge_core::types::BookingStatus;
//! use lodge_core::validation::validate_contact_number;
//!
//! // Field checks are plain functions
//! assert!(validate_contact_number("9876543210").is_ok());
//!
//! // The status lifecycle is encoded on the enum itself
//! assert!(BookingStatus::Confirmed.can_transition_to(BookingStatus::CheckedIn));
//! assert!(!BookingStatus::CheckedOut.can_transition_to(BookingStatus::Confirmed));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use lodge_core::Booking` instead of
// `use lodge_core::types::Booking`

pub use error::ValidationError;
pub use types::{Booking, BookingStatus, RoomType};
pub use validation::{validate_booking, BookingDraft, ValidatedBooking};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Minimum guest name length in characters.
pub const GUEST_NAME_MIN: usize = 2;

/// Maximum guest name length in characters.
///
/// ## Business Reason
/// Matches the width of the name column on printed registration cards.
pub const GUEST_NAME_MAX: usize = 50;

/// Required length of a contact phone number, in digits.
///
/// ## Business Reason
/// The property takes domestic 10-digit numbers only; country codes and
/// separators are rejected rather than stripped.
pub const CONTACT_NUMBER_LEN: usize = 10;
