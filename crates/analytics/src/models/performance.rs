use serde::{Deserialize, Serialize};
use shop_pulse_core::Money;

/// Revenue and profit for a month against its revenue target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyPerformance {
    pub month: String,
    pub revenue: Money,
    pub profit: Money,
    pub target: Money,
}

/// Storefront traffic for a weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPerformance {
    /// Short weekday name, e.g. "Mon".
    pub day: String,
    pub visits: u32,
    pub conversions: u32,
    pub orders: u32,
}

/// Every performance-page series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceAnalytics {
    pub monthly: Vec<MonthlyPerformance>,
    /// Monday first.
    pub daily: Vec<DailyPerformance>,
}
