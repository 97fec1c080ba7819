//! Inventory - the ordered product collection and its low-stock rule.
//!
//! ## Example
//!
//! ```
//! use padoca_inventory::{InMemoryStorage, InventoryStore, NewProduct, ProductPatch};
//!
//! let mut inventory = InventoryStore::new(InMemoryStorage::new());
//! inventory.initialize()?;
//!
//! let pao = inventory.add_product(
//!     NewProduct::new("Pão Francês").quantity(10).min_quantity(5),
//! )?;
//! assert!(inventory.list_low_stock().is_empty());
//!
//! inventory.update_product(&pao.id, ProductPatch::new().quantity(3))?;
//! assert_eq!(inventory.list_low_stock().len(), 1);
//! # Ok::<(), padoca_inventory::InventoryError>(())
//! ```

mod product;
mod report;
mod store;

use serde::{Deserialize, Serialize};

/// When the store raises low-stock notifications.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LowStockAlerts {
    /// After every mutation, one alert per product currently at or below its minimum.
    #[default]
    EveryChange,
    /// Only for products that just became low (or arrived low).
    OnTransition,
}

pub use product::{
    NewProduct, Product, ProductId, ProductPatch, SUGGESTED_CATEGORIES, SUGGESTED_UNITS,
};
pub use report::StockReport;
pub use store::{InventoryStore, DEFAULT_INVENTORY_KEY};
