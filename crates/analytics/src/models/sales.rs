use serde::{Deserialize, Serialize};
use shop_pulse_core::Money;

/// Revenue attributed to one sales channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelSales {
    pub name: String,
    pub value: Money,
    pub icon: String,
    /// Published share of total sales, in percent.
    pub percent: u32,
}

/// Sales for a metro area, with map coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationSales {
    pub name: String,
    pub value: Money,
    /// `(longitude, latitude)`.
    pub coordinates: (f64, f64),
}

/// Revenue by device class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceSales {
    pub name: String,
    pub value: Money,
    pub percent: u32,
}

/// Relative order volume for one weekday hour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatmapCell {
    /// Full weekday name, e.g. "Monday".
    pub day: String,
    /// Hour of day, 0-23.
    pub hour: u32,
    pub value: u32,
}

impl HeatmapCell {
    /// Hour label as shown on the heatmap axis, e.g. "9:00".
    #[must_use]
    pub fn hour_label(&self) -> String {
        format!("{}:00", self.hour)
    }
}

/// Usage and revenue for one discount code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountCodePerformance {
    pub code: String,
    pub usage_count: u32,
    /// Average discount per use, in whole dollars.
    pub avg_discount: u32,
    pub total_discount: Money,
    pub revenue_generated: Money,
}

/// Average order value for a calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyAov {
    /// Short month name, e.g. "Jan".
    pub name: String,
    pub value: Money,
}

/// Order count and value for a fulfillment state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FulfillmentOverview {
    pub name: String,
    pub count: u32,
    pub value: Money,
}

/// Checkout abandonment and recovery summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbandonedCheckouts {
    pub total_checkouts: u32,
    pub abandoned_count: u32,
    /// Abandonment rate, in percent.
    pub rate: u32,
    pub value: Money,
    pub recovered: Money,
    /// Share of abandoned value recovered, in percent.
    pub recovery_rate: u32,
    pub potential_lost: Money,
}

/// Average customer lifetime value for a quarter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClvPoint {
    /// Quarter label, e.g. "Q1 2022".
    pub quarter: String,
    pub value: Money,
}

/// Every sales-page series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesAnalytics {
    pub channels: Vec<ChannelSales>,
    pub locations: Vec<LocationSales>,
    pub devices: Vec<DeviceSales>,
    pub peak_times: Vec<HeatmapCell>,
    /// Sorted by revenue generated, highest first.
    pub discount_codes: Vec<DiscountCodePerformance>,
    pub monthly_aov: Vec<MonthlyAov>,
    pub fulfillment: Vec<FulfillmentOverview>,
    pub abandoned_checkouts: AbandonedCheckouts,
}
