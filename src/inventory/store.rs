use std::collections::HashSet;
use std::fmt;

use super::{LowStockAlerts, NewProduct, Product, ProductId, ProductPatch, StockReport};
use crate::error::{InventoryError, StorageError};
use crate::notification::{Notification, NotificationSink};
use crate::storage::KeyValueStore;

/// Storage key holding the serialized product collection.
pub const DEFAULT_INVENTORY_KEY: &str = "padoca-products";

/// Owns the product collection and persists it after every mutation.
///
/// Insertion order is the display order. Every mutating operation writes the
/// whole collection back to storage before any notification is published; a
/// failed write leaves the in-memory collection as it was.
pub struct InventoryStore<S> {
    storage: S,
    key: String,
    products: Vec<Product>,
    alerts: LowStockAlerts,
    sinks: Vec<Box<dyn NotificationSink>>,
}

impl<S: KeyValueStore> InventoryStore<S> {
    /// Create an empty store using the default key. Call [`initialize`](Self::initialize) to load.
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, DEFAULT_INVENTORY_KEY)
    }

    /// Create an empty store persisting under `key`.
    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        InventoryStore {
            storage,
            key: key.into(),
            products: Vec::new(),
            alerts: LowStockAlerts::default(),
            sinks: Vec::new(),
        }
    }

    /// Choose when low-stock notifications are raised.
    pub fn with_alerts(mut self, alerts: LowStockAlerts) -> Self {
        self.alerts = alerts;
        self
    }

    /// Register a sink while building the store.
    pub fn with_sink(mut self, sink: impl NotificationSink + 'static) -> Self {
        self.add_sink(sink);
        self
    }

    /// Register another sink. Sinks are notified in registration order.
    pub fn add_sink(&mut self, sink: impl NotificationSink + 'static) {
        self.sinks.push(Box::new(sink));
    }

    /// Load the collection from storage, replacing whatever is in memory.
    ///
    /// An absent or unparsable payload yields an empty collection. Loaded
    /// products already at or below their minimum are alerted once.
    pub fn initialize(&mut self) -> Result<(), StorageError> {
        self.products = match self.storage.get(&self.key)? {
            Some(payload) => decode_products(&self.key, &payload),
            None => Vec::new(),
        };
        tracing::debug!(key = %self.key, count = self.products.len(), "inventory loaded");
        self.alert_low_stock(&HashSet::new());
        Ok(())
    }

    /// Append a new product with a fresh id.
    ///
    /// # Errors
    ///
    /// `ValidationError::EmptyName` when the trimmed name is empty, or the
    /// storage error if the collection could not be written.
    pub fn add_product(&mut self, fields: NewProduct) -> Result<Product, InventoryError> {
        fields.validate()?;
        let previously_low = self.low_stock_ids();

        let product = Product::from_new(self.fresh_id(), fields);
        self.products.push(product.clone());
        if let Err(e) = self.persist() {
            self.products.pop();
            return Err(e);
        }

        tracing::info!(id = %product.id, name = %product.name, "product added");
        self.publish(&[Notification::Added {
            name: product.name.clone(),
        }]);
        self.alert_low_stock(&previously_low);
        Ok(product)
    }

    /// Merge `patch` into the product with `id`. Unknown ids leave the
    /// collection untouched but still persist and re-evaluate alerts.
    ///
    /// Returns the updated product, or None when nothing matched.
    pub fn update_product(
        &mut self,
        id: &ProductId,
        patch: ProductPatch,
    ) -> Result<Option<Product>, InventoryError> {
        patch.validate()?;
        let previously_low = self.low_stock_ids();

        let Some(index) = self.position(id) else {
            self.persist()?;
            self.alert_low_stock(&previously_low);
            return Ok(None);
        };

        let Some(product) = self.products.get_mut(index) else {
            return Ok(None);
        };
        let before = product.clone();
        let changed = product.apply(patch);
        let updated = product.clone();

        if let Err(e) = self.persist() {
            if let Some(product) = self.products.get_mut(index) {
                *product = before;
            }
            return Err(e);
        }

        tracing::debug!(id = %id, changed, "product updated");
        self.alert_low_stock(&previously_low);
        Ok(Some(updated))
    }

    /// Delete the product with `id`. Unknown ids leave the collection
    /// untouched but still persist and re-evaluate alerts.
    ///
    /// Returns the removed product, or None when nothing matched.
    pub fn remove_product(&mut self, id: &ProductId) -> Result<Option<Product>, InventoryError> {
        let previously_low = self.low_stock_ids();

        let Some(index) = self.position(id) else {
            self.persist()?;
            self.alert_low_stock(&previously_low);
            return Ok(None);
        };

        let removed = self.products.remove(index);
        if let Err(e) = self.persist() {
            self.products.insert(index, removed);
            return Err(e);
        }

        tracing::info!(id = %removed.id, name = %removed.name, "product removed");
        self.publish(&[Notification::Removed {
            name: removed.name.clone(),
        }]);
        self.alert_low_stock(&previously_low);
        Ok(Some(removed))
    }

    /// Every product with `quantity <= min_quantity`, in collection order.
    pub fn list_low_stock(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_low_stock()).collect()
    }

    /// The full collection in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The product with `id`, if present.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Number of products in the collection.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// True when the collection holds no product.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// The low-stock alert policy in effect.
    pub fn alerts(&self) -> LowStockAlerts {
        self.alerts
    }

    /// Case-insensitive match of `term` against name or category.
    pub fn search(&self, term: &str) -> Vec<&Product> {
        let term = term.to_lowercase();
        self.products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&term) || p.category.to_lowercase().contains(&term)
            })
            .collect()
    }

    /// Summary of the products currently at or below their minimum.
    pub fn stock_report(&self) -> StockReport {
        StockReport::new(self.list_low_stock().into_iter().cloned().collect())
    }

    fn position(&self, id: &ProductId) -> Option<usize> {
        self.products.iter().position(|p| &p.id == id)
    }

    fn fresh_id(&self) -> ProductId {
        loop {
            let id = ProductId::generate();
            if self.position(&id).is_none() {
                return id;
            }
        }
    }

    fn low_stock_ids(&self) -> HashSet<ProductId> {
        self.list_low_stock()
            .into_iter()
            .map(|p| p.id.clone())
            .collect()
    }

    fn persist(&self) -> Result<(), InventoryError> {
        let payload = serde_json::to_string(&self.products)?;
        self.storage.set(&self.key, &payload)?;
        tracing::debug!(key = %self.key, count = self.products.len(), "inventory persisted");
        Ok(())
    }

    fn alert_low_stock(&mut self, previously_low: &HashSet<ProductId>) {
        let alerts: Vec<Notification> = self
            .products
            .iter()
            .filter(|p| p.is_low_stock())
            .filter(|p| match self.alerts {
                LowStockAlerts::EveryChange => true,
                LowStockAlerts::OnTransition => !previously_low.contains(&p.id),
            })
            .map(|p| Notification::LowStock {
                name: p.name.clone(),
                quantity: p.quantity,
                unit: p.unit.clone(),
            })
            .collect();
        self.publish(&alerts);
    }

    fn publish(&mut self, notifications: &[Notification]) {
        for notification in notifications {
            for sink in self.sinks.iter_mut() {
                sink.notify(notification);
            }
        }
    }
}

impl<S: fmt::Debug> fmt::Debug for InventoryStore<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InventoryStore")
            .field("storage", &self.storage)
            .field("key", &self.key)
            .field("products", &self.products)
            .field("alerts", &self.alerts)
            .field("sinks", &self.sinks.len())
            .finish()
    }
}

/// Parse a stored collection. A payload that is not a JSON array yields an
/// empty collection; within an array, records that fail to decode and
/// repeated ids are skipped so the remaining records survive.
fn decode_products(key: &str, payload: &str) -> Vec<Product> {
    let records: Vec<serde_json::Value> = match serde_json::from_str(payload) {
        Ok(records) => records,
        Err(e) => {
            tracing::warn!(
                key,
                error = %e,
                "failed to deserialize inventory; starting empty"
            );
            return Vec::new();
        }
    };

    let mut seen = HashSet::new();
    records
        .into_iter()
        .enumerate()
        .filter_map(|(position, record)| match serde_json::from_value::<Product>(record) {
            Ok(product) => Some(product),
            Err(e) => {
                tracing::warn!(key, position, error = %e, "malformed product record; dropped");
                None
            }
        })
        .filter(|p| {
            let fresh = seen.insert(p.id.clone());
            if !fresh {
                tracing::warn!(key, id = %p.id, "duplicate product id in stored inventory; dropped");
            }
            fresh
        })
        .collect()
}
