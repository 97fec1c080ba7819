use super::Product;
use crate::notification::Severity;

/// Summary shown when the user asks to check stock levels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockReport {
    pub low_stock: Vec<Product>,
}

impl StockReport {
    /// Report over the given low-stock products.
    pub fn new(low_stock: Vec<Product>) -> Self {
        StockReport { low_stock }
    }

    /// No product is at or below its minimum.
    pub fn is_healthy(&self) -> bool {
        self.low_stock.is_empty()
    }

    /// Destructive when any product is low.
    pub fn severity(&self) -> Severity {
        if self.is_healthy() {
            Severity::Info
        } else {
            Severity::Destructive
        }
    }

    /// Headline: the count of low products, or that stock is fine.
    pub fn title(&self) -> String {
        if self.is_healthy() {
            "Estoque em dia".to_string()
        } else {
            format!("{} produtos com estoque baixo", self.low_stock.len())
        }
    }

    /// `name: quantity unit` entries joined by commas, or the all-clear text.
    pub fn description(&self) -> String {
        if self.is_healthy() {
            return "Nenhum produto com estoque baixo.".to_string();
        }
        self.low_stock
            .iter()
            .map(|p| format!("{}: {} {}", p.name, p.quantity, p.unit))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
