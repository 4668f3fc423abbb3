//! # Validation Module
//!
//! Booking input validation for Lodge.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Booking form (frontend)                                      │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Re-validates every field (the store trusts nothing upstream)      │
//! │  ├── Collects ALL field errors, not just the first                     │
//! │  └── Produces the strongly-typed ValidatedBooking                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Booking store (lodge-store)                                  │
//! │  ├── Identity assignment                                               │
//! │  └── Status lifecycle enforcement                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only [`ValidatedBooking`] crosses into the store; no loosely-typed form
//! data reaches it.
//!
//! ## Usage
//! ```rust
//! use lodge_core::validation::{validate_contact_number, validate_guest_name};
//!
//! assert!(validate_guest_name("Jane Doe").is_ok());
//! assert!(validate_contact_number("9876543210").is_ok());
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use validator::ValidateEmail;

use crate::error::ValidationError;
use crate::types::RoomType;
use crate::{CONTACT_NUMBER_LEN, GUEST_NAME_MAX, GUEST_NAME_MIN};

/// Result type for single-field validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Canonical calendar-date format for the form boundary.
///
/// ISO `YYYY-MM-DD`, independent of the submitting client's timezone or
/// locale.
const DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// Draft & Validated Types
// =============================================================================

/// An unvalidated booking candidate, exactly as submitted by the form.
///
/// Every field is a plain string (or optional string). Nothing here is
/// trusted: the store re-validates all of it regardless of any checks the
/// frontend already ran.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BookingDraft {
    pub guest_name: String,
    pub room_type: String,
    pub check_in_date: String,
    pub check_out_date: String,
    pub contact_number: String,
    pub email: String,
    pub id_proof: Option<String>,
}

/// A booking candidate that passed validation, normalized and ready for
/// the store.
///
/// Dates are parsed calendar dates, the room type is the real enum, and
/// string fields are trimmed. Only the store consumes this.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedBooking {
    pub guest_name: String,
    pub room_type: RoomType,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub contact_number: String,
    pub email: String,
    pub id_proof: Option<String>,
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates the guest name.
///
/// ## Rules
/// - Must not be empty
/// - Must be between 2 and 50 characters after trimming
///
/// ## Returns
/// The trimmed name.
pub fn validate_guest_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "guestName".to_string(),
        });
    }

    let length = name.chars().count();

    if length < GUEST_NAME_MIN {
        return Err(ValidationError::TooShort {
            field: "guestName".to_string(),
            min: GUEST_NAME_MIN,
        });
    }

    if length > GUEST_NAME_MAX {
        return Err(ValidationError::TooLong {
            field: "guestName".to_string(),
            max: GUEST_NAME_MAX,
        });
    }

    Ok(name.to_string())
}

/// Validates the contact phone number.
///
/// ## Rules
/// - Must be exactly 10 ASCII digits, nothing else
///
/// ## Example
/// ```rust
/// use lodge_core::validation::validate_contact_number;
///
/// assert!(validate_contact_number("9876543210").is_ok());
/// assert!(validate_contact_number("12345").is_err());
/// assert!(validate_contact_number("98765-4321").is_err());
/// ```
pub fn validate_contact_number(number: &str) -> ValidationResult<String> {
    let number = number.trim();

    if number.is_empty() {
        return Err(ValidationError::Required {
            field: "contactNumber".to_string(),
        });
    }

    if number.len() != CONTACT_NUMBER_LEN || !number.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "contactNumber".to_string(),
            reason: format!("must be exactly {} digits", CONTACT_NUMBER_LEN),
        });
    }

    Ok(number.to_string())
}

/// Validates the guest email address.
///
/// Uses the `validator` crate's address grammar, the same check the
/// form's validation library applies.
///
/// ## Returns
/// The trimmed address.
pub fn validate_email(email: &str) -> ValidationResult<String> {
    let email = email.trim();

    if email.is_empty() {
        return Err(ValidationError::Required {
            field: "email".to_string(),
        });
    }

    if !email.validate_email() {
        return Err(ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "must be a valid email address".to_string(),
        });
    }

    Ok(email.to_string())
}

// =============================================================================
// Enum & Date Validators
// =============================================================================

/// Parses the room type from its form value.
///
/// ## Rules
/// - Must be present
/// - Must be one of the fixed room categories; an unrecognized value is
///   an error, never a default
pub fn parse_room_type(value: &str) -> ValidationResult<RoomType> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: "roomType".to_string(),
        });
    }

    RoomType::parse(value).ok_or_else(|| ValidationError::NotAllowed {
        field: "roomType".to_string(),
        allowed: RoomType::all()
            .into_iter()
            .map(|room| room.as_str().to_string())
            .collect(),
    })
}

/// Parses a calendar date from its form value.
///
/// ## Rules
/// - Must be present
/// - Must be a valid ISO `YYYY-MM-DD` calendar date
///
/// `field` is the name the error is scoped to (`checkInDate` or
/// `checkOutDate`).
pub fn parse_date(field: &str, value: &str) -> ValidationResult<NaiveDate> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: "must be a calendar date in YYYY-MM-DD format".to_string(),
    })
}

// =============================================================================
// Whole-Draft Validation
// =============================================================================

/// Validates a complete booking draft.
///
/// Runs every field check and collects ALL failures, one error per
/// failing field, so the form can surface every problem at once instead
/// of making the guest fix them one submit at a time.
///
/// ## Cross-Field Rule
/// Check-out must be strictly later than check-in. The rule is reported
/// against `checkOutDate` and is only evaluated once both dates parse.
///
/// ## Side Effects
/// None. Safe to call repeatedly on the same draft.
pub fn validate_booking(draft: &BookingDraft) -> Result<ValidatedBooking, Vec<ValidationError>> {
    let mut errors = Vec::new();

    let guest_name = validate_guest_name(&draft.guest_name)
        .map_err(|e| errors.push(e))
        .ok();
    let room_type = parse_room_type(&draft.room_type)
        .map_err(|e| errors.push(e))
        .ok();
    let check_in_date = parse_date("checkInDate", &draft.check_in_date)
        .map_err(|e| errors.push(e))
        .ok();
    let check_out_date = parse_date("checkOutDate", &draft.check_out_date)
        .map_err(|e| errors.push(e))
        .ok();
    let contact_number = validate_contact_number(&draft.contact_number)
        .map_err(|e| errors.push(e))
        .ok();
    let email = validate_email(&draft.email)
        .map_err(|e| errors.push(e))
        .ok();

    // Date ordering is only meaningful when both dates parsed.
    if let (Some(check_in), Some(check_out)) = (check_in_date, check_out_date) {
        if check_out <= check_in {
            errors.push(ValidationError::MustFollow {
                field: "checkOutDate".to_string(),
                other: "checkInDate".to_string(),
            });
        }
    }

    // Accepted verbatim; a blank entry is treated as absent.
    let id_proof = draft
        .id_proof
        .as_deref()
        .map(str::trim)
        .filter(|proof| !proof.is_empty())
        .map(str::to_string);

    match (
        guest_name,
        room_type,
        check_in_date,
        check_out_date,
        contact_number,
        email,
    ) {
        (
            Some(guest_name),
            Some(room_type),
            Some(check_in_date),
            Some(check_out_date),
            Some(contact_number),
            Some(email),
        ) if errors.is_empty() => Ok(ValidatedBooking {
            guest_name,
            room_type,
            check_in_date,
            check_out_date,
            contact_number,
            email,
            id_proof,
        }),
        _ => Err(errors),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> BookingDraft {
        BookingDraft {
            guest_name: "Jane Doe".to_string(),
            room_type: "Suite".to_string(),
            check_in_date: "2025-06-01".to_string(),
            check_out_date: "2025-06-05".to_string(),
            contact_number: "9876543210".to_string(),
            email: "jane@example.com".to_string(),
            id_proof: None,
        }
    }

    #[test]
    fn test_validate_guest_name() {
        assert_eq!(validate_guest_name("Jane Doe").unwrap(), "Jane Doe");
        assert_eq!(validate_guest_name("  Jane  ").unwrap(), "Jane");

        assert!(validate_guest_name("").is_err());
        assert!(validate_guest_name("   ").is_err());
        assert!(validate_guest_name("J").is_err());
        assert!(validate_guest_name(&"a".repeat(51)).is_err());
        assert!(validate_guest_name(&"a".repeat(50)).is_ok());
    }

    #[test]
    fn test_validate_contact_number() {
        assert!(validate_contact_number("9876543210").is_ok());

        assert!(validate_contact_number("").is_err());
        assert!(validate_contact_number("12345").is_err());
        assert!(validate_contact_number("98765432101").is_err());
        assert!(validate_contact_number("98765abc10").is_err());
        assert!(validate_contact_number("987-654-32").is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("jane@example.com").is_ok());
        assert_eq!(
            validate_email("  jane@example.com ").unwrap(),
            "jane@example.com"
        );

        assert!(validate_email("").is_err());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("jane@").is_err());
    }

    #[test]
    fn test_parse_room_type() {
        assert_eq!(parse_room_type("Suite").unwrap(), RoomType::Suite);
        assert_eq!(parse_room_type("deluxe").unwrap(), RoomType::Deluxe);

        assert!(matches!(
            parse_room_type(""),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            parse_room_type("Penthouse"),
            Err(ValidationError::NotAllowed { .. })
        ));
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("checkInDate", "2025-06-01").unwrap(),
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
        );

        assert!(parse_date("checkInDate", "").is_err());
        assert!(parse_date("checkInDate", "06/01/2025").is_err());
        assert!(parse_date("checkInDate", "2025-02-30").is_err());
    }

    #[test]
    fn test_validate_booking_success() {
        let validated = validate_booking(&valid_draft()).unwrap();

        assert_eq!(validated.guest_name, "Jane Doe");
        assert_eq!(validated.room_type, RoomType::Suite);
        assert_eq!(
            (validated.check_out_date - validated.check_in_date).num_days(),
            4
        );
        assert_eq!(validated.contact_number, "9876543210");
        assert_eq!(validated.email, "jane@example.com");
        assert_eq!(validated.id_proof, None);
    }

    #[test]
    fn test_validate_booking_blank_id_proof_is_absent() {
        let mut draft = valid_draft();
        draft.id_proof = Some("   ".to_string());
        assert_eq!(validate_booking(&draft).unwrap().id_proof, None);

        draft.id_proof = Some("Passport X123".to_string());
        assert_eq!(
            validate_booking(&draft).unwrap().id_proof,
            Some("Passport X123".to_string())
        );
    }

    #[test]
    fn test_validate_booking_date_ordering() {
        let mut draft = valid_draft();
        draft.check_out_date = "2025-06-01".to_string(); // equal to check-in

        let errors = validate_booking(&draft).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field(), "checkOutDate");
        assert!(matches!(errors[0], ValidationError::MustFollow { .. }));

        draft.check_out_date = "2025-05-20".to_string(); // before check-in
        let errors = validate_booking(&draft).unwrap_err();
        assert_eq!(errors[0].field(), "checkOutDate");
    }

    #[test]
    fn test_validate_booking_ordering_skipped_when_date_unparseable() {
        let mut draft = valid_draft();
        draft.check_out_date = "soon".to_string();

        let errors = validate_booking(&draft).unwrap_err();

        // One format error on checkOutDate, and no ordering error on top
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], ValidationError::InvalidFormat { .. }));
    }

    #[test]
    fn test_validate_booking_collects_all_errors() {
        let draft = BookingDraft {
            guest_name: "J".to_string(),
            room_type: "Castle".to_string(),
            check_in_date: "yesterday".to_string(),
            check_out_date: "".to_string(),
            contact_number: "12345".to_string(),
            email: "nope".to_string(),
            id_proof: None,
        };

        let errors = validate_booking(&draft).unwrap_err();
        assert_eq!(errors.len(), 6);

        let fields: Vec<&str> = errors.iter().map(|e| e.field()).collect();
        assert_eq!(
            fields,
            vec![
                "guestName",
                "roomType",
                "checkInDate",
                "checkOutDate",
                "contactNumber",
                "email"
            ]
        );
    }
}
