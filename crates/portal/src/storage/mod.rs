//! Per-key JSON persistence.
//!
//! Each record kind lives in a single named slot (`profile`, `payments`,
//! `paymentDraft`, `todos`), JSON-encoded. The adapter never surfaces an
//! error to its callers: a missing slot or malformed data degrades to the
//! caller's fallback value, and write failures are logged and dropped. The
//! worst-case failure mode is silent data loss, never a crash.

pub mod file;
pub mod memory;

pub use file::FileBackend;
pub use memory::MemoryBackend;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Storage slot keys, one per record kind.
pub mod keys {
    /// Single member profile record.
    pub const PROFILE: &str = "profile";
    /// Newest-first list of payment records.
    pub const PAYMENTS: &str = "payments";
    /// Single optional payment draft.
    pub const PAYMENT_DRAFT: &str = "paymentDraft";
    /// Newest-first list of todo records.
    pub const TODOS: &str = "todos";
}

/// Errors a storage backend can produce.
///
/// These stop at the [`Storage`] adapter (logged, degraded to fallbacks)
/// except when opening a backend, where the host genuinely needs to know.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying filesystem operation failed.
    #[error("storage i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// A raw named-slot store.
///
/// Implementations only move strings; JSON encoding belongs to [`Storage`].
pub trait StorageBackend {
    /// Read the raw contents of a slot, `None` when the slot is absent.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write the raw contents of a slot, replacing any previous value.
    fn write(&self, key: &str, raw: &str) -> Result<(), StorageError>;

    /// Remove a slot. Removing an absent slot is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// The storage adapter the typed stores sit on.
pub struct Storage {
    backend: Box<dyn StorageBackend>,
}

impl Storage {
    /// Wrap a backend.
    #[must_use]
    pub fn new(backend: impl StorageBackend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    /// An ephemeral in-memory storage, used by tests and dry runs.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::default())
    }

    /// Serialize `value` and persist it under `key`.
    ///
    /// Failures are logged and swallowed; persisted state is the only
    /// side effect.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!(key, error = %err, "failed to encode record, skipping save");
                return;
            }
        };
        if let Err(err) = self.backend.write(key, &raw) {
            tracing::warn!(key, error = %err, "failed to persist record");
        }
    }

    /// Load and deserialize the value under `key`.
    ///
    /// A missing slot, unreadable backend, or malformed payload all return
    /// `fallback`; corruption degrades silently to "empty".
    pub fn load<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        let raw = match self.backend.read(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return fallback,
            Err(err) => {
                tracing::warn!(key, error = %err, "failed to read record, using fallback");
                return fallback;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(key, error = %err, "malformed record, using fallback");
                fallback
            }
        }
    }

    /// Remove the slot under `key`.
    pub fn remove(&self, key: &str) {
        if let Err(err) = self.backend.remove(key) {
            tracing::warn!(key, error = %err, "failed to remove record");
        }
    }
}
