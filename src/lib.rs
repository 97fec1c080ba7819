//! Stock tracking core for a small bakery: a shared-password session gate
//! and a persisted product inventory with low-stock alerts, both backed by a
//! local key-value store.

mod app;
mod config;
mod error;
mod inventory;
mod notification;
mod session;
mod storage;

pub use app::Padoca;
pub use config::Config;
pub use error::{ConfigError, InventoryError, StorageError, ValidationError};
pub use inventory::{
    InventoryStore, LowStockAlerts, NewProduct, Product, ProductId, ProductPatch, StockReport,
    DEFAULT_INVENTORY_KEY, SUGGESTED_CATEGORIES, SUGGESTED_UNITS,
};
#[cfg(feature = "emitter")]
pub use notification::EmitterSink;
pub use notification::{Notification, NotificationSink, RecordingSink, Severity, TracingSink};
pub use session::{Route, SessionStore, DEFAULT_PASSWORD, DEFAULT_SESSION_KEY};
pub use storage::{FileStorage, InMemoryStorage, KeyValueStore};

// Re-export the EventEmitter from the event_emitter_rs crate
#[cfg(feature = "emitter")]
pub use event_emitter_rs::EventEmitter;
