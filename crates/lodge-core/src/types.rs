//! # Domain Types
//!
//! Core domain types used throughout Lodge.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Booking      │   │    RoomType     │   │  BookingStatus  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  Single         │   │  Pending        │       │
//! │  │  guest_name     │   │  Double         │   │  Confirmed      │       │
//! │  │  room_type      │   │  Deluxe         │   │  CheckedIn      │       │
//! │  │  check_in_date  │   │  Suite          │   │  CheckedOut     │       │
//! │  │  check_out_date │   └─────────────────┘   │  Cancelled      │       │
//! │  │  status         │                         └─────────────────┘       │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Status Lifecycle
//! ```text
//! Pending ──► Confirmed ──► CheckedIn ──► CheckedOut (terminal)
//!    │             │
//!    └──► Cancelled◄┘  (terminal)
//! ```
//! The adjacency is encoded in [`BookingStatus::can_transition_to`]; the
//! store rejects any edge outside it.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Room Type
// =============================================================================

/// The room categories offered by the property.
///
/// A fixed enumeration: an unrecognized value from the form is a
/// validation error, never silently mapped to a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum RoomType {
    Single,
    Double,
    Deluxe,
    Suite,
}

impl RoomType {
    /// Canonical display name, as shown in the room-type dropdown.
    pub const fn as_str(&self) -> &'static str {
        match self {
            RoomType::Single => "Single",
            RoomType::Double => "Double",
            RoomType::Deluxe => "Deluxe",
            RoomType::Suite => "Suite",
        }
    }

    /// All room types, in display order.
    pub const fn all() -> [RoomType; 4] {
        [
            RoomType::Single,
            RoomType::Double,
            RoomType::Deluxe,
            RoomType::Suite,
        ]
    }

    /// Parses a room type from a form value.
    ///
    /// Matching is case-insensitive on the canonical names so that
    /// `"suite"` and `"Suite"` both resolve. Returns `None` for anything
    /// outside the fixed set.
    pub fn parse(value: &str) -> Option<RoomType> {
        let value = value.trim();
        RoomType::all()
            .into_iter()
            .find(|room| room.as_str().eq_ignore_ascii_case(value))
    }
}

// =============================================================================
// Booking Status
// =============================================================================

/// The lifecycle state of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    /// Intake state. Reachable by the lifecycle graph but not produced by
    /// booking creation, which confirms immediately.
    Pending,
    /// Reservation accepted and held for the guest.
    Confirmed,
    /// Guest has arrived and occupies the room.
    CheckedIn,
    /// Guest has departed. Terminal.
    CheckedOut,
    /// Reservation was cancelled. Terminal. Cancelled bookings are kept
    /// for historical lookups, never removed.
    Cancelled,
}

impl BookingStatus {
    /// Whether this status permits a transition to `target`.
    ///
    /// ## Allowed Edges
    /// ```text
    /// Pending   → Confirmed | Cancelled
    /// Confirmed → CheckedIn | Cancelled
    /// CheckedIn → CheckedOut
    /// ```
    /// Everything else is rejected, including every edge out of a
    /// terminal state.
    pub fn can_transition_to(&self, target: BookingStatus) -> bool {
        use BookingStatus::*;

        matches!(
            (self, target),
            (Pending, Confirmed)
                | (Pending, Cancelled)
                | (Confirmed, CheckedIn)
                | (Confirmed, Cancelled)
                | (CheckedIn, CheckedOut)
        )
    }

    /// Whether this status is terminal (no outgoing edges).
    pub fn is_terminal(&self) -> bool {
        matches!(self, BookingStatus::CheckedOut | BookingStatus::Cancelled)
    }
}

impl Default for BookingStatus {
    fn default() -> Self {
        BookingStatus::Confirmed
    }
}

// =============================================================================
// Booking
// =============================================================================

/// A guest reservation record.
///
/// ## Identity & Mutability
/// - `id`: UUID v4, assigned by the store at creation, immutable.
/// - After creation only `status` and `updated_at` ever change, and only
///   through the store's transition operation.
///
/// ## Serialization
/// Field names are camelCase on the wire; that is the casing the booking
/// form submits and the casing of the persisted slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Guest's full name (trimmed, 2 to 50 characters).
    pub guest_name: String,

    /// Booked room category.
    pub room_type: RoomType,

    /// Arrival date (calendar date, no time component).
    #[ts(as = "String")]
    pub check_in_date: NaiveDate,

    /// Departure date. Always strictly after `check_in_date`.
    #[ts(as = "String")]
    pub check_out_date: NaiveDate,

    /// Contact phone number, exactly 10 digits.
    pub contact_number: String,

    /// Guest email address.
    pub email: String,

    /// Optional identity document reference, accepted verbatim.
    pub id_proof: Option<String>,

    /// Lifecycle state.
    pub status: BookingStatus,

    /// When the booking was created. Set once, immutable.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// When the booking was last modified (status transitions only).
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    /// Number of nights in the stay.
    ///
    /// Always at least 1: the date-ordering invariant guarantees
    /// check-out is strictly after check-in.
    pub fn nights(&self) -> i64 {
        (self.check_out_date - self.check_in_date).num_days()
    }

    /// Whether the stay overlaps the half-open window `[from, to)`.
    ///
    /// A stay occupies the nights from check-in (inclusive) to check-out
    /// (exclusive), so two ranges overlap when each starts before the
    /// other ends.
    pub fn stay_overlaps(&self, from: NaiveDate, to: NaiveDate) -> bool {
        self.check_in_date < to && self.check_out_date > from
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn sample_booking() -> Booking {
        let now = Utc::now();
        Booking {
            id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
            guest_name: "Jane Doe".to_string(),
            room_type: RoomType::Suite,
            check_in_date: date("2025-06-01"),
            check_out_date: date("2025-06-05"),
            contact_number: "9876543210".to_string(),
            email: "jane@example.com".to_string(),
            id_proof: None,
            status: BookingStatus::Confirmed,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_room_type_parse() {
        assert_eq!(RoomType::parse("Suite"), Some(RoomType::Suite));
        assert_eq!(RoomType::parse("suite"), Some(RoomType::Suite));
        assert_eq!(RoomType::parse(" Double "), Some(RoomType::Double));

        assert_eq!(RoomType::parse(""), None);
        assert_eq!(RoomType::parse("Penthouse"), None);
    }

    #[test]
    fn test_status_allowed_transitions() {
        use BookingStatus::*;

        assert!(Pending.can_transition_to(Confirmed));
        assert!(Pending.can_transition_to(Cancelled));
        assert!(Confirmed.can_transition_to(CheckedIn));
        assert!(Confirmed.can_transition_to(Cancelled));
        assert!(CheckedIn.can_transition_to(CheckedOut));
    }

    #[test]
    fn test_status_rejected_transitions() {
        use BookingStatus::*;

        // No skipping ahead
        assert!(!Confirmed.can_transition_to(CheckedOut));
        assert!(!Pending.can_transition_to(CheckedIn));

        // No going backwards
        assert!(!CheckedIn.can_transition_to(Confirmed));

        // Terminal states have no outgoing edges
        for target in [Pending, Confirmed, CheckedIn, CheckedOut, Cancelled] {
            assert!(!CheckedOut.can_transition_to(target));
            assert!(!Cancelled.can_transition_to(target));
        }

        // Self-transitions are not edges either
        assert!(!Confirmed.can_transition_to(Confirmed));
    }

    #[test]
    fn test_status_terminal() {
        assert!(BookingStatus::CheckedOut.is_terminal());
        assert!(BookingStatus::Cancelled.is_terminal());
        assert!(!BookingStatus::Pending.is_terminal());
        assert!(!BookingStatus::Confirmed.is_terminal());
        assert!(!BookingStatus::CheckedIn.is_terminal());
    }

    #[test]
    fn test_status_default() {
        assert_eq!(BookingStatus::default(), BookingStatus::Confirmed);
    }

    #[test]
    fn test_nights() {
        assert_eq!(sample_booking().nights(), 4);
    }

    #[test]
    fn test_stay_overlaps() {
        let booking = sample_booking(); // Jun 1 - Jun 5

        assert!(booking.stay_overlaps(date("2025-06-03"), date("2025-06-10")));
        assert!(booking.stay_overlaps(date("2025-05-01"), date("2025-06-02")));
        assert!(booking.stay_overlaps(date("2025-06-01"), date("2025-06-05")));

        // Adjacent windows share no nights
        assert!(!booking.stay_overlaps(date("2025-06-05"), date("2025-06-10")));
        assert!(!booking.stay_overlaps(date("2025-05-01"), date("2025-06-01")));
    }

    #[test]
    fn test_booking_serializes_camel_case() {
        let json = serde_json::to_value(sample_booking()).unwrap();

        assert!(json.get("guestName").is_some());
        assert!(json.get("checkInDate").is_some());
        assert!(json.get("checkOutDate").is_some());
        assert!(json.get("contactNumber").is_some());
        assert!(json.get("idProof").is_some());
        assert!(json.get("createdAt").is_some());

        assert_eq!(json["roomType"], "suite");
        assert_eq!(json["status"], "confirmed");
        assert_eq!(json["checkInDate"], "2025-06-01");
    }
}
