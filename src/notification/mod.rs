//! Notifications - transient alerts raised as a side effect of inventory mutations.
//!
//! The inventory store never renders anything itself. It hands each
//! [`Notification`] to the registered [`NotificationSink`]s, and the
//! presentation layer decides how to show it, typically as a toast.

mod sink;

use serde::{Deserialize, Serialize};

/// How prominently a notification should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Destructive,
}

/// An alert emitted by the inventory store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notification {
    /// A product was appended to the collection.
    Added { name: String },
    /// A product was removed from the collection.
    Removed { name: String },
    /// A product is at or below its minimum quantity.
    LowStock {
        name: String,
        quantity: u32,
        unit: String,
    },
}

impl Notification {
    /// Event name used when publishing through an emitter.
    pub fn kind(&self) -> &'static str {
        match self {
            Notification::Added { .. } => "added",
            Notification::Removed { .. } => "removed",
            Notification::LowStock { .. } => "low_stock",
        }
    }

    /// Name of the product the notification is about.
    pub fn subject(&self) -> &str {
        match self {
            Notification::Added { name }
            | Notification::Removed { name }
            | Notification::LowStock { name, .. } => name,
        }
    }

    /// Low-stock alerts are destructive; everything else is informational.
    pub fn severity(&self) -> Severity {
        match self {
            Notification::LowStock { .. } => Severity::Destructive,
            _ => Severity::Info,
        }
    }

    /// Short headline shown above the description.
    pub fn title(&self) -> &'static str {
        match self {
            Notification::Added { .. } => "Produto adicionado",
            Notification::Removed { .. } => "Produto removido",
            Notification::LowStock { .. } => "Estoque Baixo",
        }
    }

    /// Full sentence naming the product.
    pub fn description(&self) -> String {
        match self {
            Notification::Added { name } => format!("{} foi adicionado ao estoque.", name),
            Notification::Removed { name } => format!("{} foi removido do estoque.", name),
            Notification::LowStock {
                name,
                quantity,
                unit,
            } => format!(
                "{} está com estoque baixo ({} {}).",
                name, quantity, unit
            ),
        }
    }
}

#[cfg(feature = "emitter")]
pub use sink::EmitterSink;
pub use sink::{NotificationSink, RecordingSink, TracingSink};
