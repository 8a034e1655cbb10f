use rust_decimal::Decimal;
use serde::Serialize;
use shop_pulse_core::{Money, StockStatus};

use crate::models::InventoryItem;

/// Stock valuation across the whole inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValuationSummary {
    /// Units on hand.
    pub total_items: u64,
    pub total_value: Money,
    /// Value per unit on hand; zero when nothing is in stock.
    pub average_item_value: Money,
    pub categories: usize,
}

/// Units and value for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryStock {
    pub category: String,
    pub items: usize,
    pub stock: u64,
    pub value: Money,
}

/// Items flagged low or critical but not yet sold out.
#[must_use]
pub fn low_stock_items(items: &[InventoryItem]) -> Vec<&InventoryItem> {
    items.iter().filter(|i| i.status.is_low()).collect()
}

#[must_use]
pub fn out_of_stock_items(items: &[InventoryItem]) -> Vec<&InventoryItem> {
    items
        .iter()
        .filter(|i| i.status == StockStatus::OutOfStock)
        .collect()
}

#[must_use]
pub fn valuation_summary(items: &[InventoryItem]) -> ValuationSummary {
    let total_items: u64 = items.iter().map(|i| u64::from(i.stock)).sum();
    let total_value: Money = items.iter().map(|i| i.value).sum();
    let average_item_value = if total_items == 0 {
        Money::ZERO
    } else {
        Money::new(total_value.amount() / Decimal::from(total_items))
    };

    ValuationSummary {
        total_items,
        total_value,
        average_item_value,
        categories: stock_by_category(items).len(),
    }
}

/// Stock grouped by category, in order of first appearance.
#[must_use]
pub fn stock_by_category(items: &[InventoryItem]) -> Vec<CategoryStock> {
    let mut groups: Vec<CategoryStock> = Vec::new();
    for item in items {
        let index = match groups.iter().position(|g| g.category == item.category) {
            Some(index) => index,
            None => {
                groups.push(CategoryStock {
                    category: item.category.clone(),
                    items: 0,
                    stock: 0,
                    value: Money::ZERO,
                });
                groups.len() - 1
            }
        };
        if let Some(group) = groups.get_mut(index) {
            group.items += 1;
            group.stock += u64::from(item.stock);
            group.value = group.value + item.value;
        }
    }
    groups
}

/// Items whose name, SKU or category contains `query`, ignoring case.
#[must_use]
pub fn search_inventory<'a>(items: &'a [InventoryItem], query: &str) -> Vec<&'a InventoryItem> {
    let needle = query.trim().to_lowercase();
    items.iter().filter(|i| i.matches(&needle)).collect()
}
