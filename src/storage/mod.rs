//! Storage - durable string key-value backends.
//!
//! Both stores persist through a [`KeyValueStore`]: the session flag and the
//! product collection each live under a single key. Backends are cheap to
//! clone so the session and inventory stores can share one instance.
//!
//! ## Example
//!
//! ```
//! use padoca_inventory::{InMemoryStorage, KeyValueStore};
//!
//! let storage = InMemoryStorage::new();
//! storage.set("padoca-auth", "true").unwrap();
//! assert_eq!(storage.get("padoca-auth").unwrap().as_deref(), Some("true"));
//! ```

mod file;
mod in_memory;

use crate::error::StorageError;

/// Abstract string key-value storage.
pub trait KeyValueStore {
    /// Get the value stored under `key`. Returns None if absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

pub use file::FileStorage;
pub use in_memory::InMemoryStorage;
