//! Record types for every dashboard collection.
//!
//! Records are plain data: they are created once by the generators and only
//! read afterwards. Orders embed snapshots of their customer and product
//! rather than referencing [`Customer`] records.

mod app;
mod customer;
mod inventory;
mod order;
mod performance;
mod product;
mod revenue;
mod sales;

pub use app::AppItem;
pub use customer::Customer;
pub use inventory::InventoryItem;
pub use order::{CustomerSnapshot, Order, ProductSnapshot};
pub use performance::{DailyPerformance, MonthlyPerformance, PerformanceAnalytics};
pub use product::ProductPerformance;
pub use revenue::{
    ForecastPoint, MonthlyAmount, MonthlyMargin, MonthlyRevenue, ProductRevenue,
    QuarterlyTaxFees, RetentionPoint, RevenueAnalytics, RevenueShare,
};
pub use sales::{
    AbandonedCheckouts, ChannelSales, ClvPoint, DeviceSales, DiscountCodePerformance,
    FulfillmentOverview, HeatmapCell, LocationSales, MonthlyAov, SalesAnalytics,
};
