//! # Booking Store
//!
//! The single source of truth for all bookings.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Booking Store Operations                             │
//! │                                                                         │
//! │  Frontend Action          Store Operation         State Change          │
//! │  ───────────────          ───────────────         ────────────          │
//! │                                                                         │
//! │  Submit Form ────────────► create() ────────────► validate, push,      │
//! │                                                   persist               │
//! │                                                                         │
//! │  View Bookings ──────────► list() ──────────────► (read-only snapshot) │
//! │                                                                         │
//! │  Check Status ───────────► find_by_contact() ───► (read only)          │
//! │                                                                         │
//! │  Check In / Out ─────────► transition() ────────► status + updated_at, │
//! │  Cancel                                           persist               │
//! │                                                                         │
//! │  NOTE: Writes hold the RwLock exclusively across mutate-then-persist,  │
//! │        so no interleaving of two in-flight writes is observable.       │
//! │        A failed persist rolls the in-memory mutation back.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Booking ids are unique across the collection
//! - Status only changes along the lifecycle graph in `lodge-core`
//! - Bookings are never removed; cancellation is a status, preserving
//!   historical lookups
//! - Memory and the persisted slot agree after every successful mutation

use chrono::{NaiveDate, Utc};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::storage::{SlotStorage, StoreConfig};
use lodge_core::{validate_booking, Booking, BookingDraft, BookingStatus};

// =============================================================================
// Load Outcome
// =============================================================================

/// How the store came up at open time.
///
/// Callers surface `Recovered` to an operator; it is the one startup
/// condition worth a warning banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// An existing slot was loaded.
    Loaded { bookings: usize },
    /// No slot file existed; starting empty.
    Fresh,
    /// A slot file existed but was unreadable or corrupt; starting empty
    /// rather than refusing to start.
    Recovered { reason: String },
}

// =============================================================================
// Booking Filter
// =============================================================================

/// Optional criteria for [`BookingStore::list`].
///
/// Every dimension is independent; the default filter matches all
/// bookings. Dimensions combine with AND.
#[derive(Debug, Clone, Default)]
pub struct BookingFilter {
    /// Keep only bookings in this status.
    pub status: Option<BookingStatus>,

    /// Keep only bookings whose guest name contains this substring
    /// (case-insensitive).
    pub guest_name: Option<String>,

    /// Keep only bookings whose stay overlaps this date window
    /// (half-open, check-out night excluded).
    pub window: Option<(NaiveDate, NaiveDate)>,
}

impl BookingFilter {
    /// A filter matching every booking.
    pub fn any() -> Self {
        BookingFilter::default()
    }

    /// Restricts to a status.
    pub fn with_status(mut self, status: BookingStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Restricts to guest names containing `needle` (case-insensitive).
    pub fn guest_name_contains(mut self, needle: impl Into<String>) -> Self {
        self.guest_name = Some(needle.into());
        self
    }

    /// Restricts to stays overlapping `[from, to)`.
    pub fn overlapping(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.window = Some((from, to));
        self
    }

    fn matches(&self, booking: &Booking) -> bool {
        if let Some(status) = self.status {
            if booking.status != status {
                return false;
            }
        }

        if let Some(needle) = &self.guest_name {
            let haystack = booking.guest_name.to_lowercase();
            if !haystack.contains(&needle.to_lowercase()) {
                return false;
            }
        }

        if let Some((from, to)) = self.window {
            if !booking.stay_overlaps(from, to) {
                return false;
            }
        }

        true
    }
}

// =============================================================================
// Booking Store
// =============================================================================

/// The authoritative booking collection with write-through persistence.
///
/// ## Construction
/// Stores are explicitly constructed via [`BookingStore::open`]; there is
/// no process-wide instance. Tests open independent stores on throwaway
/// data directories.
///
/// ## Concurrency
/// One `RwLock` guards the collection. Reads clone snapshots out and
/// never mutate; writes hold the lock exclusively across
/// mutate-then-persist.
#[derive(Debug)]
pub struct BookingStore {
    /// Bookings in insertion order. Ids are unique (checked on insert).
    bookings: RwLock<Vec<Booking>>,

    /// Durable slot backing the collection.
    storage: SlotStorage,

    /// How startup went. Fixed at open time.
    load_outcome: LoadOutcome,
}

impl BookingStore {
    /// Opens a store on the configured data directory.
    ///
    /// ## What This Does
    /// 1. Loads the slot file if one exists
    /// 2. Falls back to an empty collection when the slot is missing
    /// 3. Falls back to an empty collection, with a logged warning and a
    ///    queryable [`LoadOutcome::Recovered`], when the slot is corrupt
    ///    or unreadable
    ///
    /// Opening never fails: a damaged slot must not take the front desk
    /// offline. The damaged file is left in place untouched until the
    /// next successful mutation overwrites it.
    pub async fn open(config: StoreConfig) -> Self {
        let storage = SlotStorage::new(&config);

        let (bookings, load_outcome) = match storage.load().await {
            Ok(Some(bookings)) => {
                info!(
                    count = bookings.len(),
                    path = %storage.path().display(),
                    "Opened booking store"
                );
                let outcome = LoadOutcome::Loaded {
                    bookings: bookings.len(),
                };
                (bookings, outcome)
            }
            Ok(None) => {
                info!(path = %storage.path().display(), "Opened empty booking store");
                (Vec::new(), LoadOutcome::Fresh)
            }
            Err(err) => {
                warn!(
                    path = %storage.path().display(),
                    error = %err,
                    "Booking slot unreadable; starting empty"
                );
                let outcome = LoadOutcome::Recovered {
                    reason: err.to_string(),
                };
                (Vec::new(), outcome)
            }
        };

        BookingStore {
            bookings: RwLock::new(bookings),
            storage,
            load_outcome,
        }
    }

    /// How the last [`open`](BookingStore::open) went.
    pub fn load_outcome(&self) -> &LoadOutcome {
        &self.load_outcome
    }

    // -------------------------------------------------------------------------
    // Write Operations
    // -------------------------------------------------------------------------

    /// Creates a booking from a form draft.
    ///
    /// ## What This Does
    /// 1. Validates every field (the draft is untrusted, whatever the
    ///    frontend already checked); on failure returns the complete set
    ///    of field errors and mutates nothing
    /// 2. Assigns a fresh UUID v4 id and creation timestamp
    /// 3. Sets status Confirmed
    /// 4. Appends to the collection and persists the slot
    ///
    /// On a persistence failure the new booking is removed again and the
    /// error surfaced; the caller may retry the whole operation.
    pub async fn create(&self, draft: BookingDraft) -> StoreResult<Booking> {
        let validated = validate_booking(&draft).map_err(StoreError::Validation)?;

        let mut bookings = self.bookings.write().await;

        let id = Self::fresh_id(&bookings);
        let now = Utc::now();

        let booking = Booking {
            id: id.clone(),
            guest_name: validated.guest_name,
            room_type: validated.room_type,
            check_in_date: validated.check_in_date,
            check_out_date: validated.check_out_date,
            contact_number: validated.contact_number,
            email: validated.email,
            id_proof: validated.id_proof,
            // No intake approval step: new bookings confirm immediately
            status: BookingStatus::Confirmed,
            created_at: now,
            updated_at: now,
        };

        debug!(id = %booking.id, guest = %booking.guest_name, "Creating booking");

        bookings.push(booking.clone());

        if let Err(err) = self.storage.save(&bookings).await {
            bookings.pop();
            return Err(err.into());
        }

        Ok(booking)
    }

    /// Moves a booking to a new lifecycle status.
    ///
    /// Only edges of the lifecycle graph are applied; anything else is
    /// rejected with `InvalidTransition` and state is left unchanged,
    /// never silently clamped. On success `status` and `updated_at`
    /// change, nothing else, and the slot is persisted.
    pub async fn transition(&self, id: &str, target: BookingStatus) -> StoreResult<Booking> {
        let mut bookings = self.bookings.write().await;

        let index = bookings
            .iter()
            .position(|booking| booking.id == id)
            .ok_or_else(|| StoreError::not_found(id))?;

        let from = bookings[index].status;

        if !from.can_transition_to(target) {
            return Err(StoreError::InvalidTransition {
                id: id.to_string(),
                from,
                to: target,
            });
        }

        let prior_updated_at = bookings[index].updated_at;
        bookings[index].status = target;
        bookings[index].updated_at = Utc::now();

        debug!(id = %id, from = ?from, to = ?target, "Transitioning booking");

        if let Err(err) = self.storage.save(&bookings).await {
            bookings[index].status = from;
            bookings[index].updated_at = prior_updated_at;
            return Err(err.into());
        }

        Ok(bookings[index].clone())
    }

    // -------------------------------------------------------------------------
    // Read Operations
    // -------------------------------------------------------------------------

    /// Lists bookings matching the filter, in insertion order.
    ///
    /// Returns a cloned snapshot, not a live view: callers iterating the
    /// result are unaffected by concurrent mutation.
    pub async fn list(&self, filter: &BookingFilter) -> Vec<Booking> {
        let bookings = self.bookings.read().await;

        bookings
            .iter()
            .filter(|booking| filter.matches(booking))
            .cloned()
            .collect()
    }

    /// Looks up a booking by id.
    pub async fn find_by_id(&self, id: &str) -> Option<Booking> {
        let bookings = self.bookings.read().await;
        bookings.iter().find(|booking| booking.id == id).cloned()
    }

    /// Looks up bookings by the guest's email or contact number.
    ///
    /// Powers the guest self-service status check. Matches are exact:
    /// the full contact number, or the full email address compared
    /// case-insensitively.
    pub async fn find_by_contact(&self, contact: &str) -> Vec<Booking> {
        let contact = contact.trim();
        let bookings = self.bookings.read().await;

        bookings
            .iter()
            .filter(|booking| {
                booking.contact_number == contact || booking.email.eq_ignore_ascii_case(contact)
            })
            .cloned()
            .collect()
    }

    /// Number of bookings held.
    pub async fn len(&self) -> usize {
        self.bookings.read().await.len()
    }

    /// Whether the store holds no bookings.
    pub async fn is_empty(&self) -> bool {
        self.bookings.read().await.is_empty()
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    /// Generates an id not present in the collection.
    ///
    /// UUID v4 collisions are not a practical concern, but id uniqueness
    /// is an invariant here, so it is checked rather than assumed.
    fn fresh_id(bookings: &[Booking]) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if !bookings.iter().any(|booking| booking.id == id) {
                return id;
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
