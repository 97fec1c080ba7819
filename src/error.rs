//! Crate-level error types.

/// Error returned by a [`KeyValueStore`](crate::KeyValueStore) backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Disk I/O failure while reading, writing or removing a key.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The lock guarding a shared in-memory map was poisoned.
    #[error("storage lock poisoned during {0}")]
    LockPoisoned(&'static str),

    /// The key cannot be mapped onto the backend (e.g. it contains a path separator).
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),
}

/// A product write rejected before it reached the collection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("product name must not be empty")]
    EmptyName,
}

/// Error returned by the mutating operations of the inventory store.
#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The collection could not be encoded for persistence.
    #[error("failed to encode inventory: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Error returned while loading a [`Config`](crate::Config).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
