use serde::{Deserialize, Serialize};
use shop_pulse_core::{ProductId, ProductTrend};

/// A row of the product performance table.
///
/// `price` and `profit` are display strings; the table sorts them as
/// currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPerformance {
    pub id: ProductId,
    pub name: String,
    pub price: String,
    /// Units sold in the reporting window.
    pub sales: u32,
    pub status: ProductTrend,
    /// Units on hand.
    pub inventory: u32,
    /// Conversion rate, in percent.
    pub conversion: f64,
    pub profit: String,
    /// Gross margin, in percent.
    pub margin: u32,
    pub category: String,
}
