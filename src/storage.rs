//! Storage
//!
//! The durable local storage seam. The cart persists each of its slots as a
//! string under a named key; anything that can answer `get` and `set` over
//! strings can back it. Backends are injected at store construction, so the
//! lifecycle is explicit and testable without a host environment.

use rustc_hash::FxHashMap;
use thiserror::Error;

/// Errors surfaced by a storage backend.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StorageError {
    /// The backing store could not be read.
    #[error("storage read failed for slot {0:?}")]
    Read(String),

    /// The backing store could not be written.
    #[error("storage write failed for slot {0:?}")]
    Write(String),
}

/// Durable key/value storage for cart state.
///
/// Implementations are synchronous: the cart writes through on every
/// mutation and reads each slot once at construction.
pub trait StorageBackend {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Read`] if the backing store is unavailable.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Write`] if the backing store rejects the write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: StorageBackend + ?Sized> StorageBackend for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

/// An in-memory backend.
///
/// Durable for the lifetime of the value only; used by tests, demos, and
/// hosts that provide their own persistence around it.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: FxHashMap<String, String>,
}

impl MemoryStorage {
    /// Create an empty backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.slots.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
