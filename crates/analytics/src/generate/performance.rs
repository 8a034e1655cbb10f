//! Performance page series. Fixed reporting figures like the revenue page.

use shop_pulse_core::Money;

use super::MONTHS;
use crate::models::{DailyPerformance, MonthlyPerformance, PerformanceAnalytics};

/// Revenue, profit and target per month.
const MONTHLY: [(i64, i64, i64); 12] = [
    (12_400, 3_800, 10_000),
    (14_800, 4_500, 10_000),
    (9_800, 2_900, 10_000),
    (16_500, 5_200, 12_000),
    (18_300, 6_100, 12_000),
    (21_000, 7_200, 12_000),
    (19_500, 6_800, 15_000),
    (22_800, 8_100, 15_000),
    (25_400, 9_200, 15_000),
    (27_800, 10_500, 18_000),
    (29_500, 11_800, 18_000),
    (34_200, 13_900, 18_000),
];

/// Visits, conversions and orders per weekday.
const DAILY: [(&str, u32, u32, u32); 7] = [
    ("Mon", 1_200, 85, 72),
    ("Tue", 1_400, 92, 78),
    ("Wed", 1_650, 104, 91),
    ("Thu", 1_500, 98, 84),
    ("Fri", 1_800, 120, 105),
    ("Sat", 2_100, 142, 124),
    ("Sun", 1_800, 115, 95),
];

/// Build every performance series.
#[must_use]
pub fn performance_report() -> PerformanceAnalytics {
    PerformanceAnalytics {
        monthly: MONTHS
            .into_iter()
            .zip(MONTHLY)
            .map(|(month, (revenue, profit, target))| MonthlyPerformance {
                month: month.to_string(),
                revenue: Money::from_dollars(revenue),
                profit: Money::from_dollars(profit),
                target: Money::from_dollars(target),
            })
            .collect(),
        daily: DAILY
            .into_iter()
            .map(|(day, visits, conversions, orders)| DailyPerformance {
                day: day.to_string(),
                visits,
                conversions,
                orders,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_lengths() {
        let report = performance_report();
        assert_eq!(report.monthly.len(), 12);
        assert_eq!(report.daily.len(), 7);
        assert_eq!(report.daily[0].day, "Mon");
    }

    #[test]
    fn test_funnel_narrows() {
        for day in performance_report().daily {
            assert!(day.visits > day.conversions);
            assert!(day.conversions >= day.orders);
        }
    }
}
