use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// Units offered by the product form. The store accepts any string.
pub const SUGGESTED_UNITS: &[&str] = &["unidades", "kg", "g", "l", "ml", "pacotes", "caixas"];

/// Categories offered by the product form. The store accepts any string.
pub const SUGGESTED_CATEGORIES: &[&str] = &[
    "pães",
    "doces",
    "salgados",
    "bolos",
    "matéria-prima",
    "bebidas",
    "outros",
];

/// Opaque product identifier, assigned once at creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// A fresh random identifier.
    pub fn generate() -> Self {
        ProductId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        ProductId(value.to_string())
    }
}

impl From<String> for ProductId {
    fn from(value: String) -> Self {
        ProductId(value)
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A stock-keeping record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub quantity: u32,
    pub min_quantity: u32,
    pub unit: String,
    pub category: String,
}

impl Product {
    pub(crate) fn from_new(id: ProductId, fields: NewProduct) -> Self {
        Product {
            id,
            name: fields.name,
            quantity: fields.quantity,
            min_quantity: fields.min_quantity,
            unit: fields.unit,
            category: fields.category,
        }
    }

    /// At or below the configured minimum.
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.min_quantity
    }

    /// Merge every field set in `patch`. Returns true if anything changed.
    pub(crate) fn apply(&mut self, patch: ProductPatch) -> bool {
        let before = self.clone();
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(quantity) = patch.quantity {
            self.quantity = quantity;
        }
        if let Some(min_quantity) = patch.min_quantity {
            self.min_quantity = min_quantity;
        }
        if let Some(unit) = patch.unit {
            self.unit = unit;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        *self != before
    }
}

/// Fields of a product about to be created. Defaults mirror the empty add form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub quantity: u32,
    pub min_quantity: u32,
    pub unit: String,
    pub category: String,
}

impl Default for NewProduct {
    fn default() -> Self {
        NewProduct {
            name: String::new(),
            quantity: 0,
            min_quantity: 5,
            unit: "unidades".to_string(),
            category: "pães".to_string(),
        }
    }
}

impl NewProduct {
    pub fn new(name: impl Into<String>) -> Self {
        NewProduct {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn min_quantity(mut self, min_quantity: u32) -> Self {
        self.min_quantity = min_quantity;
        self
    }

    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        validate_name(&self.name)
    }
}

/// Partial replacement of a product's fields. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub quantity: Option<u32>,
    pub min_quantity: Option<u32>,
    pub unit: Option<String>,
    pub category: Option<String>,
}

impl ProductPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn quantity(mut self, quantity: u32) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn min_quantity(mut self, min_quantity: u32) -> Self {
        self.min_quantity = Some(min_quantity);
        self
    }

    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        match &self.name {
            Some(name) => validate_name(name),
            None => Ok(()),
        }
    }
}

/// Patch replacing every editable field with the values of `product`, as the edit form submits.
impl From<&Product> for ProductPatch {
    fn from(product: &Product) -> Self {
        ProductPatch {
            name: Some(product.name.clone()),
            quantity: Some(product.quantity),
            min_quantity: Some(product.min_quantity),
            unit: Some(product.unit.clone()),
            category: Some(product.category.clone()),
        }
    }
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(())
}
