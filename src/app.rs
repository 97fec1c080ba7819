//! Composition root: builds both stores over one shared storage handle.

use crate::config::Config;
use crate::error::StorageError;
use crate::inventory::InventoryStore;
use crate::notification::{NotificationSink, TracingSink};
use crate::session::{Route, SessionStore};
use crate::storage::{FileStorage, KeyValueStore};

/// The session gate and the inventory, constructed once at startup and
/// handed by reference to whatever presents them.
#[derive(Debug)]
pub struct Padoca<S> {
    session: SessionStore<S>,
    inventory: InventoryStore<S>,
}

impl Padoca<FileStorage> {
    /// File-backed application rooted at `config.storage_dir`, with
    /// notifications logged through `tracing`, already initialized.
    pub fn open(config: &Config) -> Result<Self, StorageError> {
        let mut app = Self::new(FileStorage::new(&config.storage_dir), config).with_sink(TracingSink);
        app.initialize()?;
        Ok(app)
    }
}

impl<S: KeyValueStore + Clone> Padoca<S> {
    /// Build both stores without reading storage yet.
    pub fn new(storage: S, config: &Config) -> Self {
        let session =
            SessionStore::with_settings(storage.clone(), &config.session_key, &config.password);
        let inventory = InventoryStore::with_key(storage, &config.inventory_key)
            .with_alerts(config.low_stock_alerts);
        Padoca { session, inventory }
    }

    pub fn with_sink(mut self, sink: impl NotificationSink + 'static) -> Self {
        self.inventory.add_sink(sink);
        self
    }

    /// Restore the session flag and load the collection. Returns the view to show first.
    pub fn initialize(&mut self) -> Result<Route, StorageError> {
        self.session.initialize()?;
        self.inventory.initialize()?;
        Ok(self.session.landing_route())
    }

    pub fn route(&self) -> Route {
        self.session.landing_route()
    }

    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut SessionStore<S> {
        &mut self.session
    }

    pub fn inventory(&self) -> &InventoryStore<S> {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut InventoryStore<S> {
        &mut self.inventory
    }
}
