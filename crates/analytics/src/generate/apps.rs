//! The installed app catalog.
//!
//! Unlike the other collections the catalog is fixed: costs, revenue and
//! ROI come from the vendors' monthly reports.

use shop_pulse_core::{AppCategory, AppId, Money};

use crate::models::AppItem;

struct CatalogEntry {
    id: &'static str,
    name: &'static str,
    category: AppCategory,
    cost_cents: i64,
    revenue: i64,
    roi: i64,
    description: &'static str,
    benefits: [&'static str; 3],
    active_users: u32,
    months_installed: u32,
    saves_hours_per_week: Option<u32>,
}

#[allow(clippy::too_many_arguments)]
const fn revenue_app(
    id: &'static str,
    name: &'static str,
    category: AppCategory,
    cost_cents: i64,
    revenue: i64,
    roi: i64,
    description: &'static str,
    benefits: [&'static str; 3],
    active_users: u32,
    months_installed: u32,
) -> CatalogEntry {
    CatalogEntry {
        id,
        name,
        category,
        cost_cents,
        revenue,
        roi,
        description,
        benefits,
        active_users,
        months_installed,
        saves_hours_per_week: None,
    }
}

#[allow(clippy::too_many_arguments)]
const fn utility_app(
    id: &'static str,
    name: &'static str,
    cost_cents: i64,
    description: &'static str,
    benefits: [&'static str; 3],
    saves_hours_per_week: u32,
    active_users: u32,
    months_installed: u32,
) -> CatalogEntry {
    CatalogEntry {
        id,
        name,
        category: AppCategory::Utility,
        cost_cents,
        revenue: 0,
        roi: 0,
        description,
        benefits,
        active_users,
        months_installed,
        saves_hours_per_week: Some(saves_hours_per_week),
    }
}

const CATALOG: [CatalogEntry; 23] = [
    revenue_app(
        "email-marketing-1",
        "EmailFlow Pro",
        AppCategory::Marketing,
        7_999,
        1_200,
        1_400,
        "Automated email marketing platform",
        ["Increased open rates", "Automated sequences", "A/B testing"],
        3,
        9,
    ),
    revenue_app(
        "sms-marketing-1",
        "SMS Connect",
        AppCategory::Marketing,
        5_999,
        850,
        1_317,
        "SMS marketing and notifications",
        ["High engagement", "Automated reminders", "Quick setup"],
        2,
        6,
    ),
    revenue_app(
        "social-ads-1",
        "Social Ad Manager",
        AppCategory::Marketing,
        8_999,
        980,
        989,
        "Social media ad campaign management",
        ["Cross-platform management", "Audience targeting", "Performance tracking"],
        4,
        12,
    ),
    revenue_app(
        "seo-tools-1",
        "SEO Optimizer",
        AppCategory::Marketing,
        4_999,
        320,
        540,
        "Search engine optimization tools",
        ["Keyword research", "On-page recommendations", "Competitor analysis"],
        2,
        8,
    ),
    revenue_app(
        "analytics-1",
        "Advanced Analytics",
        AppCategory::Marketing,
        3_999,
        190,
        375,
        "Comprehensive analytics dashboard",
        ["Customer journey tracking", "Conversion analytics", "Custom reports"],
        5,
        15,
    ),
    revenue_app(
        "product-recs-1",
        "Smart Recommendations",
        AppCategory::Upsell,
        5_999,
        1_350,
        2_150,
        "AI-powered product recommendations",
        ["Personalized suggestions", "Basket analysis", "Conversion optimization"],
        1,
        11,
    ),
    revenue_app(
        "bundle-deals-1",
        "Bundle Builder",
        AppCategory::Upsell,
        4_999,
        890,
        1_680,
        "Create and manage product bundles",
        ["Increased AOV", "Custom bundle creation", "Discount management"],
        2,
        7,
    ),
    revenue_app(
        "checkout-boost-1",
        "Checkout Booster",
        AppCategory::Upsell,
        3_999,
        430,
        975,
        "Checkout page upsell offers",
        ["Last-minute offers", "One-click add", "Smart timing"],
        1,
        5,
    ),
    revenue_app(
        "loyalty-program-1",
        "Points & Rewards",
        AppCategory::Loyalty,
        6_999,
        980,
        1_300,
        "Comprehensive loyalty program management",
        ["Point system", "Tiered rewards", "Member profiles"],
        3,
        14,
    ),
    revenue_app(
        "reviews-1",
        "Review Collector",
        AppCategory::Loyalty,
        2_999,
        320,
        967,
        "Automated review collection and display",
        ["Email follow-ups", "Photo reviews", "Review management"],
        2,
        8,
    ),
    revenue_app(
        "shipping-rates-1",
        "Dynamic Shipping",
        AppCategory::Shipping,
        4_999,
        310,
        520,
        "Real-time carrier rate calculator",
        ["Real-time rates", "Multiple carriers", "Rule-based discounts"],
        2,
        10,
    ),
    revenue_app(
        "tracking-1",
        "Order Tracker",
        AppCategory::Shipping,
        3_999,
        180,
        350,
        "Enhanced order tracking for customers",
        ["Branded tracking", "Notification system", "Delivery estimates"],
        1,
        6,
    ),
    revenue_app(
        "label-printer-1",
        "Label Printer Pro",
        AppCategory::Shipping,
        5_999,
        240,
        300,
        "Batch label printing and management",
        ["Bulk printing", "Label customization", "Carrier integration"],
        3,
        9,
    ),
    revenue_app(
        "returns-1",
        "Returns Manager",
        AppCategory::Shipping,
        2_999,
        120,
        300,
        "Streamlined returns processing",
        ["Self-service returns", "Return label generation", "Refund tracking"],
        2,
        4,
    ),
    revenue_app(
        "helpdesk-1",
        "Help Center Pro",
        AppCategory::Support,
        6_999,
        290,
        314,
        "Comprehensive customer support system",
        ["Ticket management", "Knowledge base", "Customer history"],
        4,
        12,
    ),
    revenue_app(
        "live-chat-1",
        "Live Chat Connect",
        AppCategory::Support,
        3_999,
        210,
        425,
        "Real-time customer chat platform",
        ["Instant support", "Chatbot integration", "Mobile app"],
        3,
        8,
    ),
    revenue_app(
        "faq-builder-1",
        "FAQ Builder",
        AppCategory::Support,
        1_999,
        85,
        325,
        "Create and manage FAQs",
        ["SEO optimization", "Search functionality", "Easy updates"],
        1,
        5,
    ),
    utility_app(
        "inventory-1",
        "Inventory Manager",
        4_999,
        "Advanced inventory control",
        ["Stock alerts", "Forecasting", "Supplier management"],
        8,
        3,
        11,
    ),
    utility_app(
        "tax-calc-1",
        "Tax Calculator",
        2_999,
        "Automated tax calculation",
        ["Multi-jurisdiction", "Real-time updates", "Report generation"],
        4,
        2,
        9,
    ),
    utility_app(
        "backup-1",
        "Store Backup",
        1_999,
        "Automated store backups",
        ["Daily backups", "One-click restore", "Secure storage"],
        2,
        1,
        14,
    ),
    utility_app(
        "translation-1",
        "Store Translator",
        3_999,
        "Automatic store translation",
        ["50+ languages", "SEO optimization", "Content detection"],
        5,
        2,
        7,
    ),
    utility_app(
        "bulk-editor-1",
        "Bulk Editor Pro",
        2_999,
        "Mass update product details",
        ["CSV import/export", "Field mapping", "Scheduling"],
        6,
        2,
        5,
    ),
    utility_app(
        "seo-redirect-1",
        "SEO Redirects",
        1_999,
        "Manage store redirects",
        ["404 monitoring", "Bulk creation", "Analytics integration"],
        3,
        1,
        8,
    ),
];

/// Every installed app, grouped by category in catalog order.
#[must_use]
pub fn app_catalog() -> Vec<AppItem> {
    CATALOG.iter().map(AppItem::from).collect()
}

impl From<&CatalogEntry> for AppItem {
    fn from(entry: &CatalogEntry) -> Self {
        let cost = Money::from_cents(entry.cost_cents);
        Self {
            id: AppId::new(entry.id),
            name: entry.name.to_string(),
            category: entry.category,
            cost,
            revenue: Money::from_dollars(entry.revenue),
            roi: entry.roi,
            description: entry.description.to_string(),
            benefits: entry.benefits.iter().map(ToString::to_string).collect(),
            monthly_cost: cost.display(),
            active_users: Some(entry.active_users),
            time_installed: Some(format!("{} months", entry.months_installed)),
            saves_hours_per_week: entry.saves_hours_per_week,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_shape() {
        let apps = app_catalog();
        assert_eq!(apps.len(), 23);

        let count = |category| apps.iter().filter(|a| a.category == category).count();
        assert_eq!(count(AppCategory::Marketing), 5);
        assert_eq!(count(AppCategory::Upsell), 3);
        assert_eq!(count(AppCategory::Loyalty), 2);
        assert_eq!(count(AppCategory::Shipping), 4);
        assert_eq!(count(AppCategory::Support), 3);
        assert_eq!(count(AppCategory::Utility), 6);
    }

    #[test]
    fn test_entry_conversion() {
        let apps = app_catalog();
        let first = &apps[0];
        assert_eq!(first.id.as_str(), "email-marketing-1");
        assert_eq!(first.monthly_cost, "$79.99");
        assert_eq!(first.time_installed.as_deref(), Some("9 months"));
        assert_eq!(first.benefits.len(), 3);
    }

    #[test]
    fn test_utility_apps_report_hours_not_revenue() {
        for app in app_catalog() {
            let is_utility = app.category == AppCategory::Utility;
            assert_eq!(app.saves_hours_per_week.is_some(), is_utility, "{}", app.name);
            if is_utility {
                assert!(app.revenue.is_zero());
                assert_eq!(app.roi, 0);
            }
        }
    }
}
