use shop_pulse_core::{Money, StockStatus};

use crate::models::InventoryItem;

const STOCK_LIST: [(&str, &str, u32, i64, &str, u32, StockStatus); 10] = [
    ("Premium T-Shirt", "TSH-001", 145, 2_900, "Apparel", 50, StockStatus::InStock),
    ("Classic Hoodie", "HOD-001", 78, 3_120, "Apparel", 30, StockStatus::InStock),
    ("Yoga Pants", "YP-001", 32, 1_600, "Active Wear", 40, StockStatus::LowStock),
    ("Running Shoes", "RS-001", 18, 2_160, "Footwear", 20, StockStatus::LowStock),
    ("Leather Wallet", "ACC-001", 5, 250, "Accessories", 10, StockStatus::Critical),
    ("Winter Jacket", "WJ-001", 0, 0, "Outerwear", 15, StockStatus::OutOfStock),
    ("Smartwatch", "TECH-001", 12, 3_600, "Electronics", 15, StockStatus::LowStock),
    ("Wireless Earbuds", "TECH-002", 0, 0, "Electronics", 10, StockStatus::OutOfStock),
    ("Sunglasses", "ACC-002", 45, 1_350, "Accessories", 20, StockStatus::InStock),
    ("Baseball Cap", "ACC-003", 67, 1_005, "Accessories", 25, StockStatus::InStock),
];

/// The current stock list, numbered from 1.
#[must_use]
pub fn inventory_items() -> Vec<InventoryItem> {
    (1..)
        .zip(STOCK_LIST)
        .map(
            |(id, (name, sku, stock, value, category, threshold, status))| InventoryItem {
                id,
                name: name.to_string(),
                sku: sku.to_string(),
                stock,
                value: Money::from_dollars(value),
                category: category.to_string(),
                threshold,
                status,
            },
        )
        .collect()
}
