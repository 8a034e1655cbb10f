use serde::Serialize;

use crate::models::ProductPerformance;

/// Rows in the best and worst seller lists.
pub const PERFORMER_LIMIT: usize = 6;

/// Stock badge shown next to a product's inventory count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InventoryBadge {
    Critical,
    Low,
    Good,
}

impl InventoryBadge {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::Low => "Low",
            Self::Good => "Good",
        }
    }
}

/// Critical at 5 units or fewer, low at 20 or fewer.
#[must_use]
pub const fn inventory_badge(inventory: u32) -> InventoryBadge {
    match inventory {
        0..=5 => InventoryBadge::Critical,
        6..=20 => InventoryBadge::Low,
        _ => InventoryBadge::Good,
    }
}

/// Best sellers by units sold.
#[must_use]
pub fn top_products(products: &[ProductPerformance], n: usize) -> Vec<&ProductPerformance> {
    let mut ranked: Vec<&ProductPerformance> = products.iter().collect();
    ranked.sort_by(|a, b| b.sales.cmp(&a.sales));
    ranked.truncate(n);
    ranked
}

/// Worst sellers by units sold.
#[must_use]
pub fn bottom_products(products: &[ProductPerformance], n: usize) -> Vec<&ProductPerformance> {
    let mut ranked: Vec<&ProductPerformance> = products.iter().collect();
    ranked.sort_by_key(|p| p.sales);
    ranked.truncate(n);
    ranked
}
