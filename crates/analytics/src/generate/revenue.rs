//! Revenue page series.
//!
//! These are fixed reporting figures from the finance exports, so they do
//! not depend on the seed.

use rust_decimal::Decimal;
use shop_pulse_core::Money;

use super::MONTHS;
use crate::models::{
    ForecastPoint, MonthlyAmount, MonthlyMargin, MonthlyRevenue, ProductRevenue,
    QuarterlyTaxFees, RetentionPoint, RevenueAnalytics, RevenueShare,
};

const GROWTH: [(i64, i64); 12] = [
    (4_200, 3_400),
    (3_600, 2_800),
    (2_400, 2_000),
    (3_200, 2_600),
    (2_200, 1_800),
    (2_800, 2_200),
    (4_000, 3_200),
    (4_600, 3_700),
    (5_400, 4_100),
    (6_500, 5_000),
    (7_600, 5_700),
    (9_800, 7_400),
];

const MARGINS: [u32; 12] = [28, 32, 30, 34, 32, 35, 38, 36, 40, 38, 42, 44];

/// Months with booked revenue; the rest of the year is forecast only.
const CLOSED_MONTHS: usize = 8;
const FORECAST: [i64; 12] = [
    4_200, 3_600, 2_400, 3_200, 2_200, 2_800, 4_000, 4_600, 5_200, 5_800, 6_500, 7_200,
];

/// Growth is stored in tenths of a percent.
const TOP_PRODUCTS: [(&str, i64, i64); 5] = [
    ("Premium Subscription", 124_500, 125),
    ("Pro Plan Annual", 98_700, 83),
    ("Enterprise Solution", 87_600, 152),
    ("Basic Plan", 54_300, -21),
    ("Add-on Services", 43_200, 57),
];

const CUSTOMER_SEGMENTS: [(&str, i64); 5] = [
    ("Enterprise", 4_500),
    ("SMB", 3_200),
    ("Startup", 1_800),
    ("Individual", 1_200),
    ("Education", 800),
];

const MARKETING_CHANNELS: [(&str, i64); 6] = [
    ("Direct", 2_800),
    ("Organic Search", 1_900),
    ("Paid Search", 1_600),
    ("Social Media", 1_200),
    ("Email", 900),
    ("Referral", 750),
];

const PURCHASE_TYPES: [(&str, i64); 2] = [("Subscription", 7_500), ("One-time", 2_500)];

const ARPU: [i64; 12] = [42, 43, 45, 44, 46, 48, 52, 55, 58, 60, 63, 65];

const MRR: [i64; 12] = [
    85_000, 87_500, 91_000, 94_500, 98_000, 103_000, 108_000, 114_000, 120_000, 127_000,
    135_000, 145_000,
];

const RETAINED: [u32; 12] = [95, 93, 94, 92, 91, 93, 95, 96, 94, 95, 97, 96];

const TAX_FEES: [(&str, i64, i64, i64, i64); 4] = [
    ("Q1", 2_100, 1_200, 800, 600),
    ("Q2", 2_400, 1_400, 900, 700),
    ("Q3", 2_800, 1_700, 1_100, 850),
    ("Q4", 3_500, 2_200, 1_450, 1_050),
];

/// Build every revenue series.
#[must_use]
pub fn revenue_report() -> RevenueAnalytics {
    RevenueAnalytics {
        growth: MONTHS
            .into_iter()
            .zip(GROWTH)
            .map(|(name, (this_year, last_year))| MonthlyRevenue {
                name: name.to_string(),
                this_year: Money::from_dollars(this_year),
                last_year: Money::from_dollars(last_year),
            })
            .collect(),
        margins: MONTHS
            .into_iter()
            .zip(MARGINS)
            .map(|(name, margin)| MonthlyMargin {
                name: name.to_string(),
                margin,
            })
            .collect(),
        forecast: MONTHS
            .into_iter()
            .zip(FORECAST)
            .enumerate()
            .map(|(index, (name, forecast))| ForecastPoint {
                name: name.to_string(),
                actual: (index < CLOSED_MONTHS).then(|| Money::from_dollars(forecast)),
                forecast: Money::from_dollars(forecast),
            })
            .collect(),
        top_products: (1..)
            .zip(TOP_PRODUCTS)
            .map(|(id, (name, revenue, growth))| ProductRevenue {
                id,
                name: name.to_string(),
                revenue: Money::from_dollars(revenue),
                growth: Decimal::new(growth, 1),
            })
            .collect(),
        customer_segments: shares(&CUSTOMER_SEGMENTS),
        marketing_channels: shares(&MARKETING_CHANNELS),
        purchase_types: shares(&PURCHASE_TYPES),
        arpu: amounts(ARPU),
        mrr: amounts(MRR),
        retention: MONTHS
            .into_iter()
            .zip(RETAINED)
            .map(|(name, retained)| RetentionPoint {
                name: name.to_string(),
                retained,
                churned: 100 - retained,
            })
            .collect(),
        tax_fees: TAX_FEES
            .into_iter()
            .map(|(name, tax, shipping, platform, processing)| QuarterlyTaxFees {
                name: name.to_string(),
                tax: Money::from_dollars(tax),
                shipping_fees: Money::from_dollars(shipping),
                platform_fees: Money::from_dollars(platform),
                processing_fees: Money::from_dollars(processing),
            })
            .collect(),
    }
}

fn shares(table: &[(&str, i64)]) -> Vec<RevenueShare> {
    table
        .iter()
        .map(|&(name, value)| RevenueShare {
            name: name.to_string(),
            value: Money::from_dollars(value),
        })
        .collect()
}

fn amounts(values: [i64; 12]) -> Vec<MonthlyAmount> {
    MONTHS
        .into_iter()
        .zip(values)
        .map(|(name, value)| MonthlyAmount {
            name: name.to_string(),
            value: Money::from_dollars(value),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_series_cover_the_year() {
        let report = revenue_report();
        assert_eq!(report.growth.len(), 12);
        assert_eq!(report.margins.len(), 12);
        assert_eq!(report.arpu.len(), 12);
        assert_eq!(report.mrr.len(), 12);
        assert_eq!(report.retention.len(), 12);
        assert_eq!(report.growth[11].name, "Dec");
    }

    #[test]
    fn test_forecast_has_no_actuals_after_close() {
        let forecast = revenue_report().forecast;
        assert_eq!(forecast[7].actual, Some(Money::from_dollars(4_600)));
        assert!(forecast[8..].iter().all(|p| p.actual.is_none()));
    }

    #[test]
    fn test_retention_months_add_to_one_hundred() {
        for point in revenue_report().retention {
            assert_eq!(point.retained + point.churned, 100);
        }
    }

    #[test]
    fn test_top_product_growth_keeps_sign() {
        let products = revenue_report().top_products;
        assert_eq!(products[0].id, 1);
        assert_eq!(products[3].growth, Decimal::new(-21, 1));
    }
}
