use serde::{Deserialize, Serialize};
use shop_pulse_core::{AppCategory, AppId, Money};

/// An installed third-party store app and what it returns.
///
/// `roi` is stored as published by the vendor report and is not recomputed
/// from `cost` and `revenue`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppItem {
    pub id: AppId,
    pub name: String,
    pub category: AppCategory,
    /// Monthly subscription cost.
    pub cost: Money,
    /// Monthly attributed revenue.
    pub revenue: Money,
    /// Return on investment, in percent.
    pub roi: i64,
    pub description: String,
    pub benefits: Vec<String>,
    pub monthly_cost: String,
    pub active_users: Option<u32>,
    pub time_installed: Option<String>,
    /// Staff hours saved per week (utility apps only).
    pub saves_hours_per_week: Option<u32>,
}
