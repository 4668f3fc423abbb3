//! # lodge-store: Booking Store for Lodge
//!
//! This crate holds the authoritative booking state for the reservation
//! manager and persists it to a JSON slot file.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Lodge Data Flow                                 │
//! │                                                                         │
//! │  Booking form / guest list / status lookup                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    lodge-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │ BookingStore  │    │  SlotStorage  │    │ StoreConfig  │  │   │
//! │  │   │  (store.rs)   │    │ (storage.rs)  │    │ (storage.rs) │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ create/list/  │───►│ load / save   │    │ data dir +   │  │   │
//! │  │   │ find/transition│   │ JSON slot     │    │ slot name    │  │   │
//! │  │   └───────┬───────┘    └───────┬───────┘    └──────────────┘  │   │
//! │  │           │                    │                               │   │
//! │  │           └── validation via lodge-core (pure, no I/O)        │   │
//! │  └────────────────────────────────┼───────────────────────────────┘   │
//! │                                   ▼                                    │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                <data_dir>/bookings.json                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - The booking store (create, list, find, transition)
//! - [`storage`] - Slot file configuration and load/save
//! - [`error`] - Store and storage error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use lodge_store::{BookingStore, StoreConfig};
//!
//! // Open the store (loads the slot if one exists)
//! let store = BookingStore::open(StoreConfig::new("./data")).await;
//!
//! // Create a booking from a form draft
//! let booking = store.create(draft).await?;
//!
//! // Guest self-service status lookup
//! let mine = store.find_by_contact("jane@example.com").await;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod storage;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StorageError, StoreError, StoreResult};
pub use storage::{SlotStorage, StoreConfig, DEFAULT_SLOT};
pub use store::{BookingFilter, BookingStore, LoadOutcome};
