//! Sales page rollups and the overview KPI strip.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shop_pulse_core::{Money, OrderStatus};

use super::round_half_up;
use crate::models::{ChannelSales, Customer, DiscountCodePerformance, HeatmapCell, Order};

/// Reporting window selectable on the overview page.
///
/// Figures are derived from the 30-day dataset and scaled by
/// [`RangePreset::multiplier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangePreset {
    Today,
    Yesterday,
    Last7,
    #[default]
    Last30,
    Month,
    Year,
}

impl RangePreset {
    pub const ALL: [Self; 6] = [
        Self::Today,
        Self::Yesterday,
        Self::Last7,
        Self::Last30,
        Self::Month,
        Self::Year,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Yesterday => "yesterday",
            Self::Last7 => "last7",
            Self::Last30 => "last30",
            Self::Month => "month",
            Self::Year => "year",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::Yesterday => "Yesterday",
            Self::Last7 => "Last 7 days",
            Self::Last30 => "Last 30 days",
            Self::Month => "This month",
            Self::Year => "This year",
        }
    }

    /// Scale factor relative to the 30-day baseline.
    #[must_use]
    pub fn multiplier(self) -> Decimal {
        match self {
            Self::Today => Decimal::new(3, 1),
            Self::Yesterday => Decimal::new(25, 2),
            Self::Last7 => Decimal::new(6, 1),
            Self::Last30 => Decimal::ONE,
            Self::Month => Decimal::new(9, 1),
            Self::Year => Decimal::new(15, 1),
        }
    }
}

impl std::fmt::Display for RangePreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RangePreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("invalid range: {s}"))
    }
}

/// Scale a 30-day amount to `preset`, rounded to whole dollars.
#[must_use]
pub fn scale_amount(amount: Money, preset: RangePreset) -> Money {
    Money::from_dollars(round_half_up(amount.amount() * preset.multiplier()))
}

/// Scale a 30-day count to `preset`, rounded to the nearest whole item.
#[must_use]
pub fn scale_count(count: usize, preset: RangePreset) -> usize {
    let scaled = round_half_up(Decimal::from(count) * preset.multiplier());
    usize::try_from(scaled).unwrap_or_default()
}

/// Headline figures for the overview page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverviewKpis {
    pub range: RangePreset,
    /// Order revenue, excluding cancelled orders.
    pub total_revenue: Money,
    pub total_orders: usize,
    pub average_order_value: Money,
    pub active_customers: usize,
}

impl OverviewKpis {
    /// Total the base collections, then scale them to `range`.
    ///
    /// Average order value is recomputed from the scaled totals.
    #[must_use]
    pub fn calculate(orders: &[Order], customers: &[Customer], range: RangePreset) -> Self {
        let revenue: Money = orders
            .iter()
            .filter(|o| o.status != OrderStatus::Cancelled)
            .map(|o| o.total)
            .sum();

        let total_revenue = scale_amount(revenue, range);
        let total_orders = scale_count(orders.len(), range);
        let average_order_value = if total_orders > 0 {
            Money::new(total_revenue.amount() / Decimal::from(total_orders))
        } else {
            Money::ZERO
        };

        Self {
            range,
            total_revenue,
            total_orders,
            average_order_value,
            active_customers: scale_count(customers.len(), range),
        }
    }
}

/// Combined revenue across sales channels.
#[must_use]
pub fn channel_totals(channels: &[ChannelSales]) -> Money {
    channels.iter().map(|c| c.value).sum()
}

/// The busiest hour of a weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeakHour {
    pub day: String,
    pub hour: u32,
    pub value: u32,
}

/// Busiest hour for each day, in the order days first appear.
///
/// Ties go to the earliest hour.
#[must_use]
pub fn peak_hour_by_day(cells: &[HeatmapCell]) -> Vec<PeakHour> {
    let mut peaks: Vec<PeakHour> = Vec::new();
    for cell in cells {
        match peaks.iter_mut().find(|p| p.day == cell.day) {
            Some(peak) if cell.value > peak.value => {
                peak.hour = cell.hour;
                peak.value = cell.value;
            }
            Some(_) => {}
            None => peaks.push(PeakHour {
                day: cell.day.clone(),
                hour: cell.hour,
                value: cell.value,
            }),
        }
    }
    peaks
}

/// Largest heatmap value, used to scale cell intensity. `0` when empty.
#[must_use]
pub fn heatmap_max(cells: &[HeatmapCell]) -> u32 {
    cells.iter().map(|c| c.value).max().unwrap_or(0)
}

/// Totals across all discount codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscountTotals {
    pub codes: usize,
    pub usage_count: u64,
    pub total_discount: Money,
    pub revenue_generated: Money,
}

#[must_use]
pub fn discount_totals(codes: &[DiscountCodePerformance]) -> DiscountTotals {
    DiscountTotals {
        codes: codes.len(),
        usage_count: codes.iter().map(|c| u64::from(c.usage_count)).sum(),
        total_discount: codes.iter().map(|c| c.total_discount).sum(),
        revenue_generated: codes.iter().map(|c| c.revenue_generated).sum(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::derive::orders::tests::order;

    fn cell(day: &str, hour: u32, value: u32) -> HeatmapCell {
        HeatmapCell {
            day: day.to_string(),
            hour,
            value,
        }
    }

    #[test]
    fn test_range_preset_parse() {
        assert_eq!("last7".parse::<RangePreset>(), Ok(RangePreset::Last7));
        assert_eq!(" YEAR ".parse::<RangePreset>(), Ok(RangePreset::Year));
        assert!("decade".parse::<RangePreset>().is_err());
        assert_eq!(RangePreset::default(), RangePreset::Last30);
    }

    #[test]
    fn test_scaling() {
        assert_eq!(
            scale_amount(Money::from_dollars(1_000), RangePreset::Today),
            Money::from_dollars(300)
        );
        assert_eq!(
            scale_amount(Money::from_cents(1_002), RangePreset::Year),
            Money::from_dollars(15)
        );
        assert_eq!(scale_count(10, RangePreset::Yesterday), 3);
        assert_eq!(scale_count(10, RangePreset::Last30), 10);
    }

    #[test]
    fn test_overview_kpis() {
        let orders = vec![
            order("ORD-1", "2024-06-10T10:00:00Z", 100, OrderStatus::Delivered),
            order("ORD-2", "2024-06-10T11:00:00Z", 50, OrderStatus::Cancelled),
            order("ORD-3", "2024-06-11T10:00:00Z", 200, OrderStatus::Shipped),
            order("ORD-4", "2024-06-12T10:00:00Z", 100, OrderStatus::Pending),
        ];

        let kpis = OverviewKpis::calculate(&orders, &[], RangePreset::Last30);
        assert_eq!(kpis.total_revenue, Money::from_dollars(400));
        assert_eq!(kpis.total_orders, 4);
        assert_eq!(kpis.average_order_value, Money::from_dollars(100));
        assert_eq!(kpis.active_customers, 0);

        let year = OverviewKpis::calculate(&orders, &[], RangePreset::Year);
        assert_eq!(year.total_revenue, Money::from_dollars(600));
        assert_eq!(year.total_orders, 6);
    }

    #[test]
    fn test_overview_without_orders() {
        let kpis = OverviewKpis::calculate(&[], &[], RangePreset::Today);
        assert!(kpis.total_revenue.is_zero());
        assert!(kpis.average_order_value.is_zero());
    }

    #[test]
    fn test_peak_hours() {
        let cells = vec![
            cell("Monday", 9, 40),
            cell("Monday", 12, 90),
            cell("Monday", 18, 90),
            cell("Tuesday", 3, 7),
        ];
        let peaks = peak_hour_by_day(&cells);
        assert_eq!(peaks.len(), 2);
        assert_eq!((peaks[0].hour, peaks[0].value), (12, 90));
        assert_eq!(peaks[1].day, "Tuesday");
        assert_eq!(heatmap_max(&cells), 90);
        assert_eq!(heatmap_max(&[]), 0);
    }

    #[test]
    fn test_discount_totals() {
        let codes = vec![
            DiscountCodePerformance {
                code: "SAVE10".to_string(),
                usage_count: 100,
                avg_discount: 10,
                total_discount: Money::from_dollars(1_000),
                revenue_generated: Money::from_dollars(8_000),
            },
            DiscountCodePerformance {
                code: "NEW05".to_string(),
                usage_count: 50,
                avg_discount: 20,
                total_discount: Money::from_dollars(1_000),
                revenue_generated: Money::from_dollars(3_000),
            },
        ];
        let totals = discount_totals(&codes);
        assert_eq!(totals.codes, 2);
        assert_eq!(totals.usage_count, 150);
        assert_eq!(totals.total_discount, Money::from_dollars(2_000));
        assert_eq!(totals.revenue_generated, Money::from_dollars(11_000));
    }
}
