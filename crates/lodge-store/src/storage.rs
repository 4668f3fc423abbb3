//! # Slot Storage
//!
//! Durable persistence for the booking map.
//!
//! ## Storage Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Slot Storage                                      │
//! │                                                                         │
//! │  BookingStore startup                                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreConfig::new(data_dir) ← Configure slot location                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SlotStorage::load() ← Read <data_dir>/bookings.json if present        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────┐                           │
//! │  │            bookings.json                 │                           │
//! │  │  {                                       │                           │
//! │  │    "<id>": { "guestName": ..., ... },    │  id → Booking map         │
//! │  │    "<id>": { ... }                       │  (camelCase fields)       │
//! │  │  }                                       │                           │
//! │  └─────────────────────────────────────────┘                           │
//! │       ▲                                                                 │
//! │       │ SlotStorage::save() after EVERY successful mutation            │
//! │       │ (write-through; failures roll the mutation back)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The slot holds the full booking set as one JSON object keyed by
//! booking id. JSON objects carry no ordering guarantee, so `load`
//! restores insertion order by sorting on creation time.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::debug;

use crate::error::StorageError;
use lodge_core::Booking;

/// Default name of the booking slot.
///
/// The persisted file is `<data_dir>/<slot>.json`.
pub const DEFAULT_SLOT: &str = "bookings";

// =============================================================================
// Configuration
// =============================================================================

/// Booking store configuration.
///
/// ## Example
/// ```rust,ignore
/// let config = StoreConfig::new("./data").slot("bookings-staging");
/// let store = BookingStore::open(config).await;
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory holding the slot file. Created on first write if absent.
    pub data_dir: PathBuf,

    /// Name of the slot within the data directory.
    /// Default: "bookings"
    pub slot: String,
}

impl StoreConfig {
    /// Creates a new configuration with the given data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        StoreConfig {
            data_dir: data_dir.into(),
            slot: DEFAULT_SLOT.to_string(),
        }
    }

    /// Overrides the slot name.
    pub fn slot(mut self, name: impl Into<String>) -> Self {
        self.slot = name.into();
        self
    }

    /// Full path of the slot file.
    pub fn slot_path(&self) -> PathBuf {
        self.data_dir.join(format!("{}.json", self.slot))
    }
}

// =============================================================================
// Slot Storage
// =============================================================================

/// Reads and writes the persisted booking map.
///
/// Owned by the store; nothing else touches the slot file.
#[derive(Debug)]
pub struct SlotStorage {
    path: PathBuf,
}

impl SlotStorage {
    /// Creates slot storage for the configured location.
    pub fn new(config: &StoreConfig) -> Self {
        SlotStorage {
            path: config.slot_path(),
        }
    }

    /// Path of the slot file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the persisted booking set.
    ///
    /// ## Returns
    /// * `Ok(None)` - no slot file exists yet (first run)
    /// * `Ok(Some(bookings))` - the persisted set, in insertion order
    /// * `Err(StorageError)` - the file exists but is unreadable or holds
    ///   invalid data; the caller decides how to degrade
    pub async fn load(&self) -> Result<Option<Vec<Booking>>, StorageError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(StorageError::Read {
                    path: self.path.clone(),
                    reason: err.to_string(),
                })
            }
        };

        let map: HashMap<String, Booking> =
            serde_json::from_slice(&bytes).map_err(|err| StorageError::Corrupt {
                path: self.path.clone(),
                reason: err.to_string(),
            })?;

        // The map is keyed by id; order within the JSON object is
        // meaningless. Creation time (tie-broken by id) recovers the
        // original insertion order.
        let mut bookings: Vec<Booking> = map.into_values().collect();
        bookings.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });

        debug!(count = bookings.len(), path = %self.path.display(), "Loaded booking slot");

        Ok(Some(bookings))
    }

    /// Writes the full booking set to the slot.
    ///
    /// Serializes the set as an `id → Booking` JSON object. Creates the
    /// data directory on first write.
    pub async fn save(&self, bookings: &[Booking]) -> Result<(), StorageError> {
        let map: HashMap<&str, &Booking> = bookings
            .iter()
            .map(|booking| (booking.id.as_str(), booking))
            .collect();

        let bytes = serde_json::to_vec_pretty(&map)
            .map_err(|err| StorageError::Serialize(err.to_string()))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|err| StorageError::Write {
                    path: self.path.clone(),
                    reason: err.to_string(),
                })?;
        }

        fs::write(&self.path, &bytes)
            .await
            .map_err(|err| StorageError::Write {
                path: self.path.clone(),
                reason: err.to_string(),
            })?;

        debug!(count = bookings.len(), path = %self.path.display(), "Persisted booking slot");

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use lodge_core::{BookingStatus, RoomType};

    fn booking(id: &str, created_minute: u32) -> Booking {
        let created = Utc
            .with_ymd_and_hms(2025, 5, 1, 12, created_minute, 0)
            .unwrap();
        Booking {
            id: id.to_string(),
            guest_name: "Jane Doe".to_string(),
            room_type: RoomType::Double,
            check_in_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            check_out_date: NaiveDate::from_ymd_opt(2025, 6, 5).unwrap(),
            contact_number: "9876543210".to_string(),
            email: "jane@example.com".to_string(),
            id_proof: None,
            status: BookingStatus::Confirmed,
            created_at: created,
            updated_at: created,
        }
    }

    #[test]
    fn test_config_slot_path() {
        let config = StoreConfig::new("/tmp/lodge");
        assert_eq!(config.slot_path(), PathBuf::from("/tmp/lodge/bookings.json"));

        let config = StoreConfig::new("/tmp/lodge").slot("staging");
        assert_eq!(config.slot_path(), PathBuf::from("/tmp/lodge/staging.json"));
    }

    #[tokio::test]
    async fn test_load_missing_slot_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = SlotStorage::new(&StoreConfig::new(dir.path()));

        assert!(storage.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_then_load_restores_insertion_order() {
        let dir = tempfile::tempdir().unwrap();
        let storage = SlotStorage::new(&StoreConfig::new(dir.path()));

        // Ids deliberately sort against creation order
        let saved = vec![booking("zzz", 0), booking("aaa", 1), booking("mmm", 2)];
        storage.save(&saved).await.unwrap();

        let loaded = storage.load().await.unwrap().unwrap();
        assert_eq!(loaded, saved);
    }

    #[tokio::test]
    async fn test_load_corrupt_slot_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = StoreConfig::new(dir.path());
        std::fs::write(config.slot_path(), b"{ not json").unwrap();

        let storage = SlotStorage::new(&config);
        assert!(matches!(
            storage.load().await,
            Err(StorageError::Corrupt { .. })
        ));
    }

    #[tokio::test]
    async fn test_slot_is_id_keyed_map() {
        let dir = tempfile::tempdir().unwrap();
        let storage = SlotStorage::new(&StoreConfig::new(dir.path()));

        storage.save(&[booking("b-1", 0)]).await.unwrap();

        let raw = std::fs::read(storage.path()).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&raw).unwrap();

        assert!(json.is_object());
        assert_eq!(json["b-1"]["guestName"], "Jane Doe");
        assert_eq!(json["b-1"]["roomType"], "double");
    }
}
