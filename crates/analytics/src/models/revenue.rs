use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shop_pulse_core::Money;

/// Revenue for a calendar month against the same month last year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyRevenue {
    /// Short month name, e.g. "Jan".
    pub name: String,
    pub this_year: Money,
    pub last_year: Money,
}

/// Gross profit margin for a month, in percent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyMargin {
    pub name: String,
    pub margin: u32,
}

/// Booked and forecast revenue for a month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub name: String,
    /// `None` for months that have not closed yet.
    pub actual: Option<Money>,
    pub forecast: Money,
}

/// A top-earning product line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRevenue {
    pub id: u32,
    pub name: String,
    pub revenue: Money,
    /// Change against the previous period, in percent with one decimal.
    pub growth: Decimal,
}

/// Revenue attributed to a named slice: a customer segment, a marketing
/// channel or a purchase type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueShare {
    pub name: String,
    pub value: Money,
}

/// A per-month money series value (MRR, ARPU).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyAmount {
    pub name: String,
    pub value: Money,
}

/// Subscriber retention for a month, in percent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetentionPoint {
    pub name: String,
    pub retained: u32,
    pub churned: u32,
}

/// Taxes and fees paid in a quarter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuarterlyTaxFees {
    /// Quarter label, e.g. "Q1".
    pub name: String,
    pub tax: Money,
    pub shipping_fees: Money,
    pub platform_fees: Money,
    pub processing_fees: Money,
}

impl QuarterlyTaxFees {
    /// Everything paid in the quarter.
    #[must_use]
    pub fn total(&self) -> Money {
        self.tax + self.shipping_fees + self.platform_fees + self.processing_fees
    }
}

/// Every revenue-page series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueAnalytics {
    pub growth: Vec<MonthlyRevenue>,
    pub margins: Vec<MonthlyMargin>,
    pub forecast: Vec<ForecastPoint>,
    pub top_products: Vec<ProductRevenue>,
    pub customer_segments: Vec<RevenueShare>,
    pub marketing_channels: Vec<RevenueShare>,
    /// Subscription versus one-time purchases.
    pub purchase_types: Vec<RevenueShare>,
    pub arpu: Vec<MonthlyAmount>,
    pub mrr: Vec<MonthlyAmount>,
    pub retention: Vec<RetentionPoint>,
    pub tax_fees: Vec<QuarterlyTaxFees>,
}
