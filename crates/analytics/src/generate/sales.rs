//! Sales page series: channels, locations, devices, peak times, discount
//! codes, monthly AOV, fulfillment and abandoned checkouts.
//!
//! Channel and device splits are fixed reporting figures; everything else is
//! drawn fresh per dataset.

use rand::Rng;
use rust_decimal::{Decimal, RoundingStrategy};
use shop_pulse_core::Money;

use super::pools;
use crate::derive::percent_of;
use crate::models::{
    AbandonedCheckouts, ChannelSales, ClvPoint, DeviceSales, DiscountCodePerformance,
    FulfillmentOverview, HeatmapCell, LocationSales, MonthlyAov, SalesAnalytics,
};

pub const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const CITIES: [&str; 4] = ["New York", "Los Angeles", "Chicago", "Seattle"];

const CLV_QUARTERS: [&str; 8] = [
    "Q1 2022", "Q2 2022", "Q3 2022", "Q4 2022", "Q1 2023", "Q2 2023", "Q3 2023", "Q4 2023",
];
const CLV_START: i64 = 350;

const DISCOUNT_CODE_COUNT: usize = 10;

/// Build every sales series.
pub fn generate_sales<R: Rng + ?Sized>(rng: &mut R) -> SalesAnalytics {
    SalesAnalytics {
        channels: channel_sales(),
        locations: location_sales(rng),
        devices: device_sales(),
        peak_times: peak_sales_times(rng),
        discount_codes: discount_code_performance(rng),
        monthly_aov: monthly_aov(rng),
        fulfillment: fulfillment_overview(rng),
        abandoned_checkouts: abandoned_checkouts(rng),
    }
}

fn channel_sales() -> Vec<ChannelSales> {
    [
        ("Online Store", 68_500, "globe", 52),
        ("POS", 42_300, "store", 32),
        ("Social", 21_200, "smartphone", 16),
    ]
    .into_iter()
    .map(|(name, value, icon, percent)| ChannelSales {
        name: name.to_string(),
        value: Money::from_dollars(value),
        icon: icon.to_string(),
        percent,
    })
    .collect()
}

fn device_sales() -> Vec<DeviceSales> {
    [("Desktop", 83_700, 63), ("Mobile", 39_500, 30), ("Tablet", 8_800, 7)]
        .into_iter()
        .map(|(name, value, percent)| DeviceSales {
            name: name.to_string(),
            value: Money::from_dollars(value),
            percent,
        })
        .collect()
}

fn location_sales<R: Rng + ?Sized>(rng: &mut R) -> Vec<LocationSales> {
    CITIES
        .iter()
        .map(|name| LocationSales {
            name: (*name).to_string(),
            value: Money::from_dollars(rng.random_range(8_000..=35_000)),
            coordinates: (
                rng.random_range(-125.0..=-60.0),
                rng.random_range(25.0..=50.0),
            ),
        })
        .collect()
}

/// Weekday-by-hour volume grid, Monday first.
///
/// Business hours (9-20) draw from 30-100, other hours from 5-30. Lunch and
/// after-work hours get a 1.5x boost; weekend midday hours a further 1.3x.
fn peak_sales_times<R: Rng + ?Sized>(rng: &mut R) -> Vec<HeatmapCell> {
    let mut cells = Vec::with_capacity(WEEKDAYS.len() * 24);
    for (day_index, day) in WEEKDAYS.iter().enumerate() {
        let weekend = day_index >= 5;
        for hour in 0..24_u32 {
            let base: u32 = if (9..=20).contains(&hour) {
                rng.random_range(30..=100)
            } else {
                rng.random_range(5..=30)
            };
            let boost = if (12..=13).contains(&hour) || (17..=19).contains(&hour) { 15 } else { 10 };
            let weekend_boost = if weekend && (11..=16).contains(&hour) { 13 } else { 10 };
            // Factors are tenths; add half the divisor to round half up.
            let value = (base * boost * weekend_boost + 50) / 100;

            cells.push(HeatmapCell {
                day: (*day).to_string(),
                hour,
                value,
            });
        }
    }
    cells
}

fn discount_code_performance<R: Rng + ?Sized>(rng: &mut R) -> Vec<DiscountCodePerformance> {
    let mut codes: Vec<_> = (0..DISCOUNT_CODE_COUNT)
        .map(|_| {
            let usage_count: u32 = rng.random_range(30..=500);
            let avg_discount: u32 = rng.random_range(10..=30);
            let revenue_per_use: u32 = rng.random_range(50..=150);
            let prefix = pools::pick(rng, pools::DISCOUNT_PREFIXES);
            let suffix: u32 = rng.random_range(0..100);

            DiscountCodePerformance {
                code: format!("{prefix}{suffix:02}"),
                usage_count,
                avg_discount,
                total_discount: Money::from_dollars(i64::from(usage_count * avg_discount)),
                revenue_generated: Money::from_dollars(i64::from(usage_count * revenue_per_use)),
            }
        })
        .collect();

    codes.sort_by(|a, b| b.revenue_generated.cmp(&a.revenue_generated));
    codes
}

fn monthly_aov<R: Rng + ?Sized>(rng: &mut R) -> Vec<MonthlyAov> {
    MONTHS
        .iter()
        .map(|month| MonthlyAov {
            name: (*month).to_string(),
            value: Money::from_cents(rng.random_range(8_000..=12_000)),
        })
        .collect()
}

fn fulfillment_overview<R: Rng + ?Sized>(rng: &mut R) -> Vec<FulfillmentOverview> {
    let fulfilled: u32 = rng.random_range(1_200..=1_800);
    let partial: u32 = rng.random_range(300..=500);
    let unfulfilled: u32 = rng.random_range(400..=800);
    let aov = Money::from_cents(rng.random_range(7_000..=9_000)).amount();

    [
        ("Fulfilled", fulfilled, Decimal::ONE),
        ("Partially Fulfilled", partial, Decimal::new(12, 1)),
        ("Unfulfilled", unfulfilled, Decimal::new(9, 1)),
    ]
    .into_iter()
    .map(|(name, count, factor)| FulfillmentOverview {
        name: name.to_string(),
        count,
        value: whole_dollars(Decimal::from(count) * aov * factor),
    })
    .collect()
}

fn abandoned_checkouts<R: Rng + ?Sized>(rng: &mut R) -> AbandonedCheckouts {
    let total_checkouts: u32 = rng.random_range(3_000..=4_000);
    let abandoned_count: u32 = rng.random_range(600..=1_200);
    let avg_value = Money::from_cents(rng.random_range(6_000..=9_000)).amount();
    let recovery_rate: u32 = rng.random_range(15..=30);

    let value = whole_dollars(Decimal::from(abandoned_count) * avg_value);
    let recovered =
        whole_dollars(value.amount() * Decimal::from(recovery_rate) / Decimal::ONE_HUNDRED);

    AbandonedCheckouts {
        total_checkouts,
        abandoned_count,
        rate: percent_of(abandoned_count as usize, total_checkouts as usize),
        value,
        recovered,
        recovery_rate,
        potential_lost: value - recovered,
    }
}

/// Quarterly average CLV as a random walk from $350.
pub fn generate_clv_trend<R: Rng + ?Sized>(rng: &mut R) -> Vec<ClvPoint> {
    let mut clv = CLV_START;
    CLV_QUARTERS
        .iter()
        .map(|quarter| {
            clv += rng.random_range(-30..=50);
            ClvPoint {
                quarter: (*quarter).to_string(),
                value: Money::from_dollars(clv),
            }
        })
        .collect()
}

fn whole_dollars(amount: Decimal) -> Money {
    Money::new(amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
}
