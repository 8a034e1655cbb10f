use serde::{Deserialize, Serialize};
use shop_pulse_core::{Money, StockStatus};

/// A stocked SKU with its on-hand valuation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: u32,
    pub name: String,
    pub sku: String,
    pub stock: u32,
    /// Value of the units on hand.
    pub value: Money,
    pub category: String,
    /// Reorder threshold.
    pub threshold: u32,
    pub status: StockStatus,
}

impl InventoryItem {
    /// Case-insensitive match against name, SKU or category.
    ///
    /// `needle` must already be lower-cased.
    #[must_use]
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.sku.to_lowercase().contains(needle)
            || self.category.to_lowercase().contains(needle)
    }
}
