//! App ecosystem views: rankings, per-category ROI and utility time savings.

use serde::Serialize;
use shop_pulse_core::{AppCategory, Money};

use super::app_roi;
use crate::models::AppItem;

/// Rows shown in the top and low performer lists.
pub const PERFORMER_LIMIT: usize = 5;
/// Weeks per month used to turn weekly hours into monthly savings.
const WEEKS_PER_MONTH: u32 = 4;

/// Summed cost and revenue for a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryRoi {
    pub name: AppCategory,
    pub cost: Money,
    pub revenue: Money,
    pub roi: i64,
}

/// Installed apps and spend per category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub name: AppCategory,
    pub count: usize,
    pub total_cost: Money,
}

/// Monthly value of the time a utility app saves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UtilitySavings {
    pub name: String,
    pub hours_per_week: u32,
    pub monthly_cost: Money,
    pub hourly_value: Money,
    pub monthly_savings: Money,
    pub roi: i64,
}

/// Totals across every utility app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UtilitySummary {
    pub total_hours_per_week: u32,
    pub total_cost: Money,
    pub total_savings: Money,
    pub roi: i64,
}

/// Every app, grouped by category.
#[must_use]
pub fn all_apps(apps: &[AppItem]) -> Vec<&AppItem> {
    let mut grouped: Vec<&AppItem> = apps.iter().collect();
    grouped.sort_by_key(|app| app.category);
    grouped
}

#[must_use]
pub fn apps_in_category(apps: &[AppItem], category: AppCategory) -> Vec<&AppItem> {
    apps.iter().filter(|app| app.category == category).collect()
}

fn earning_apps(apps: &[AppItem]) -> Vec<&AppItem> {
    apps.iter().filter(|app| app.roi > 0).collect()
}

/// Highest reported ROI first. Apps without a positive ROI are excluded.
#[must_use]
pub fn top_performing_apps(apps: &[AppItem], n: usize) -> Vec<&AppItem> {
    let mut ranked = earning_apps(apps);
    ranked.sort_by(|a, b| b.roi.cmp(&a.roi));
    ranked.truncate(n);
    ranked
}

/// Lowest positive reported ROI first.
#[must_use]
pub fn low_performing_apps(apps: &[AppItem], n: usize) -> Vec<&AppItem> {
    let mut ranked = earning_apps(apps);
    ranked.sort_by_key(|app| app.roi);
    ranked.truncate(n);
    ranked
}

/// ROI of each revenue-bearing category from summed cost and revenue.
#[must_use]
pub fn app_category_roi(apps: &[AppItem]) -> Vec<CategoryRoi> {
    AppCategory::REVENUE_BEARING
        .into_iter()
        .map(|category| {
            let members = apps_in_category(apps, category);
            let cost: Money = members.iter().map(|app| app.cost).sum();
            let revenue: Money = members.iter().map(|app| app.revenue).sum();
            CategoryRoi {
                name: category,
                cost,
                revenue,
                roi: app_roi(cost, revenue),
            }
        })
        .collect()
}

/// App count and monthly spend for every category.
#[must_use]
pub fn app_categories(apps: &[AppItem]) -> Vec<CategorySummary> {
    AppCategory::ALL
        .into_iter()
        .map(|category| {
            let members = apps_in_category(apps, category);
            CategorySummary {
                name: category,
                count: members.len(),
                total_cost: members.iter().map(|app| app.cost).sum(),
            }
        })
        .collect()
}

/// Savings from each utility app at `hourly_value` per saved hour.
#[must_use]
pub fn utility_app_savings(apps: &[AppItem], hourly_value: Money) -> Vec<UtilitySavings> {
    apps_in_category(apps, AppCategory::Utility)
        .into_iter()
        .map(|app| {
            let hours_per_week = app.saves_hours_per_week.unwrap_or(0);
            let monthly_savings = hourly_value.times(hours_per_week * WEEKS_PER_MONTH);
            UtilitySavings {
                name: app.name.clone(),
                hours_per_week,
                monthly_cost: app.cost,
                hourly_value,
                monthly_savings,
                roi: app_roi(app.cost, monthly_savings),
            }
        })
        .collect()
}

/// Combined hours, cost and savings, with ROI computed from the totals.
#[must_use]
pub fn utility_summary(rows: &[UtilitySavings]) -> UtilitySummary {
    let total_cost: Money = rows.iter().map(|r| r.monthly_cost).sum();
    let total_savings: Money = rows.iter().map(|r| r.monthly_savings).sum();
    UtilitySummary {
        total_hours_per_week: rows.iter().map(|r| r.hours_per_week).sum(),
        total_cost,
        total_savings,
        roi: app_roi(total_cost, total_savings),
    }
}
