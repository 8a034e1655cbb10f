//! Performance page rollups: monthly target attainment and weekday traffic
//! conversion.

use rust_decimal::Decimal;
use serde::Serialize;
use shop_pulse_core::Money;

use super::{percent_tenths, round_half_up};
use crate::models::{DailyPerformance, MonthlyPerformance};

/// A month's revenue measured against its target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetAttainment {
    pub month: String,
    pub revenue: Money,
    pub target: Money,
    /// Revenue as a whole percentage of target. `0` without a target.
    pub attainment: u32,
    pub met: bool,
}

#[must_use]
pub fn target_attainment(months: &[MonthlyPerformance]) -> Vec<TargetAttainment> {
    months
        .iter()
        .map(|m| {
            let attainment = if m.target.is_zero() {
                0
            } else {
                let percent =
                    round_half_up(m.revenue.amount() / m.target.amount() * Decimal::ONE_HUNDRED);
                u32::try_from(percent).unwrap_or(0)
            };
            TargetAttainment {
                month: m.month.clone(),
                revenue: m.revenue,
                target: m.target,
                attainment,
                met: m.revenue >= m.target,
            }
        })
        .collect()
}

/// Year totals for the monthly series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PerformanceTotals {
    pub revenue: Money,
    pub profit: Money,
    /// Profit as a percentage of revenue, one decimal.
    pub margin: Decimal,
    pub months: usize,
    pub months_on_target: usize,
}

#[must_use]
pub fn performance_totals(months: &[MonthlyPerformance]) -> PerformanceTotals {
    let revenue: Money = months.iter().map(|m| m.revenue).sum();
    let profit: Money = months.iter().map(|m| m.profit).sum();
    PerformanceTotals {
        revenue,
        profit,
        margin: percent_tenths(profit.amount(), revenue.amount()),
        months: months.len(),
        months_on_target: months.iter().filter(|m| m.revenue >= m.target).count(),
    }
}

/// Visits converted to sales for a weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyConversion {
    pub day: String,
    pub visits: u32,
    pub conversions: u32,
    pub orders: u32,
    /// Conversions per hundred visits, one decimal.
    pub conversion_rate: Decimal,
}

#[must_use]
pub fn daily_conversion(days: &[DailyPerformance]) -> Vec<DailyConversion> {
    days.iter()
        .map(|d| DailyConversion {
            day: d.day.clone(),
            visits: d.visits,
            conversions: d.conversions,
            orders: d.orders,
            conversion_rate: percent_tenths(Decimal::from(d.conversions), Decimal::from(d.visits)),
        })
        .collect()
}

/// Week totals for the weekday series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrafficTotals {
    pub visits: u64,
    pub conversions: u64,
    pub orders: u64,
    pub conversion_rate: Decimal,
}

#[must_use]
pub fn traffic_totals(days: &[DailyPerformance]) -> TrafficTotals {
    let visits: u64 = days.iter().map(|d| u64::from(d.visits)).sum();
    let conversions: u64 = days.iter().map(|d| u64::from(d.conversions)).sum();
    TrafficTotals {
        visits,
        conversions,
        orders: days.iter().map(|d| u64::from(d.orders)).sum(),
        conversion_rate: percent_tenths(Decimal::from(conversions), Decimal::from(visits)),
    }
}
