//! Revenue page rollups: year-over-year growth, margins, forecast, revenue
//! splits, subscription health and tax/fee totals.
//!
//! Growth and averages carry one decimal, rounded half away from zero.
//! Revenue splits use whole percentages like the count-based segments.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use shop_pulse_core::Money;

use super::{percent_tenths, round_half_up};
use crate::models::{
    ForecastPoint, MonthlyAmount, MonthlyMargin, MonthlyRevenue, QuarterlyTaxFees,
    RetentionPoint, RevenueShare,
};

/// This year's revenue across every month in the series.
#[must_use]
pub fn total_revenue(months: &[MonthlyRevenue]) -> Money {
    months.iter().map(|m| m.this_year).sum()
}

/// Year totals and growth against last year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RevenueSummary {
    pub total: Money,
    pub last_year: Money,
    /// Percent change, `0` when last year had no revenue.
    pub growth: Decimal,
}

#[must_use]
pub fn revenue_summary(months: &[MonthlyRevenue]) -> RevenueSummary {
    let total = total_revenue(months);
    let last_year: Money = months.iter().map(|m| m.last_year).sum();
    RevenueSummary {
        total,
        last_year,
        growth: percent_tenths((total - last_year).amount(), last_year.amount()),
    }
}

/// Mean monthly margin in percent. `0` for an empty series.
#[must_use]
pub fn average_margin(margins: &[MonthlyMargin]) -> Decimal {
    mean_tenths(margins.iter().map(|m| Decimal::from(m.margin)).sum(), margins.len())
}

/// A revenue split entry with its share of the whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RevenueSlice {
    pub name: String,
    pub value: Money,
    /// Share of the total, in whole percent.
    pub percentage: u32,
}

/// Every share with its percentage, in input order.
#[must_use]
pub fn revenue_slices(shares: &[RevenueShare]) -> Vec<RevenueSlice> {
    let total: Money = shares.iter().map(|s| s.value).sum();
    shares
        .iter()
        .map(|s| RevenueSlice {
            name: s.name.clone(),
            value: s.value,
            percentage: money_share(s.value, total),
        })
        .collect()
}

/// Shares ranked by revenue, largest first. Ties keep input order.
#[must_use]
pub fn segments_by_revenue(shares: &[RevenueShare]) -> Vec<RevenueSlice> {
    let mut ranked = revenue_slices(shares);
    ranked.sort_by(|a, b| b.value.cmp(&a.value));
    ranked
}

/// Whole-percent share of subscription purchases.
///
/// `None` if the split has no "Subscription" entry.
#[must_use]
pub fn subscription_share(purchase_types: &[RevenueShare]) -> Option<u32> {
    revenue_slices(purchase_types)
        .into_iter()
        .find(|s| s.name == "Subscription")
        .map(|s| s.percentage)
}

/// Booked revenue so far and the projected year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForecastSummary {
    pub actual_to_date: Money,
    /// Forecast for months without booked revenue.
    pub remaining_forecast: Money,
    pub projected_total: Money,
}

#[must_use]
pub fn forecast_summary(points: &[ForecastPoint]) -> ForecastSummary {
    let actual_to_date: Money = points.iter().filter_map(|p| p.actual).sum();
    let remaining_forecast: Money = points
        .iter()
        .filter(|p| p.actual.is_none())
        .map(|p| p.forecast)
        .sum();
    ForecastSummary {
        actual_to_date,
        remaining_forecast,
        projected_total: actual_to_date + remaining_forecast,
    }
}

/// Subscription health at the end of the series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubscriptionSummary {
    pub current_mrr: Money,
    /// MRR change from the first month to the last, in percent.
    pub mrr_growth: Decimal,
    pub current_arpu: Money,
    /// Mean monthly churn in percent.
    pub average_churn: Decimal,
}

#[must_use]
pub fn subscription_summary(
    mrr: &[MonthlyAmount],
    arpu: &[MonthlyAmount],
    retention: &[RetentionPoint],
) -> SubscriptionSummary {
    let first_mrr = mrr.first().map_or(Money::ZERO, |m| m.value);
    let current_mrr = mrr.last().map_or(Money::ZERO, |m| m.value);
    SubscriptionSummary {
        current_mrr,
        mrr_growth: percent_tenths((current_mrr - first_mrr).amount(), first_mrr.amount()),
        current_arpu: arpu.last().map_or(Money::ZERO, |a| a.value),
        average_churn: mean_tenths(
            retention.iter().map(|r| Decimal::from(r.churned)).sum(),
            retention.len(),
        ),
    }
}

/// Year totals per tax and fee line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxFeeTotals {
    pub tax: Money,
    pub shipping_fees: Money,
    pub platform_fees: Money,
    pub processing_fees: Money,
    pub total: Money,
}

#[must_use]
pub fn tax_fee_totals(quarters: &[QuarterlyTaxFees]) -> TaxFeeTotals {
    TaxFeeTotals {
        tax: quarters.iter().map(|q| q.tax).sum(),
        shipping_fees: quarters.iter().map(|q| q.shipping_fees).sum(),
        platform_fees: quarters.iter().map(|q| q.platform_fees).sum(),
        processing_fees: quarters.iter().map(|q| q.processing_fees).sum(),
        total: quarters.iter().map(QuarterlyTaxFees::total).sum(),
    }
}

/// Signed growth label, e.g. "+12.5%" or "-2.1%". Zero has no sign.
#[must_use]
pub fn format_growth(growth: Decimal) -> String {
    let sign = if growth > Decimal::ZERO { "+" } else { "" };
    format!("{sign}{growth:.1}%")
}

fn money_share(part: Money, total: Money) -> u32 {
    if total.is_zero() {
        return 0;
    }
    let percent = round_half_up(part.amount() / total.amount() * Decimal::ONE_HUNDRED);
    u32::try_from(percent).unwrap_or(0)
}

fn mean_tenths(sum: Decimal, count: usize) -> Decimal {
    if count == 0 {
        return Decimal::ZERO;
    }
    (sum / Decimal::from(count)).round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::revenue_report;

    fn share(name: &str, value: i64) -> RevenueShare {
        RevenueShare {
            name: name.to_string(),
            value: Money::from_dollars(value),
        }
    }

    #[test]
    fn test_revenue_summary() {
        let summary = revenue_summary(&revenue_report().growth);
        assert_eq!(summary.total, Money::from_dollars(56_300));
        assert_eq!(summary.last_year, Money::from_dollars(43_900));
        assert_eq!(summary.growth, Decimal::new(282, 1));
        assert_eq!(total_revenue(&revenue_report().growth), summary.total);
    }

    #[test]
    fn test_summary_without_last_year() {
        let months = [MonthlyRevenue {
            name: "Jan".to_string(),
            this_year: Money::from_dollars(100),
            last_year: Money::ZERO,
        }];
        assert_eq!(revenue_summary(&months).growth, Decimal::ZERO);
        assert_eq!(total_revenue(&[]), Money::ZERO);
    }

    #[test]
    fn test_average_margin() {
        assert_eq!(average_margin(&revenue_report().margins), Decimal::new(358, 1));
        assert_eq!(average_margin(&[]), Decimal::ZERO);
    }

    #[test]
    fn test_segments_ranked_descending() {
        let shares = [share("Education", 800), share("Enterprise", 4_500), share("SMB", 800)];
        let ranked = segments_by_revenue(&shares);
        let names: Vec<&str> = ranked.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Enterprise", "Education", "SMB"]);
        assert_eq!(ranked[0].percentage, 74);
    }

    #[test]
    fn test_segment_report_shares() {
        let ranked = segments_by_revenue(&revenue_report().customer_segments);
        assert_eq!(ranked[0].name, "Enterprise");
        assert_eq!(ranked[0].percentage, 39);
        assert!(ranked.windows(2).all(|w| w[0].value >= w[1].value));
    }

    #[test]
    fn test_subscription_share() {
        assert_eq!(subscription_share(&revenue_report().purchase_types), Some(75));
        assert_eq!(subscription_share(&[share("One-time", 10)]), None);
        assert_eq!(subscription_share(&[share("Subscription", 0)]), Some(0));
    }

    #[test]
    fn test_forecast_summary() {
        let summary = forecast_summary(&revenue_report().forecast);
        assert_eq!(summary.actual_to_date, Money::from_dollars(27_000));
        assert_eq!(summary.remaining_forecast, Money::from_dollars(24_700));
        assert_eq!(summary.projected_total, Money::from_dollars(51_700));
    }

    #[test]
    fn test_subscription_summary() {
        let report = revenue_report();
        let summary = subscription_summary(&report.mrr, &report.arpu, &report.retention);
        assert_eq!(summary.current_mrr, Money::from_dollars(145_000));
        assert_eq!(summary.mrr_growth, Decimal::new(706, 1));
        assert_eq!(summary.current_arpu, Money::from_dollars(65));
        assert_eq!(summary.average_churn, Decimal::new(58, 1));

        let empty = subscription_summary(&[], &[], &[]);
        assert_eq!(empty.current_mrr, Money::ZERO);
        assert_eq!(empty.mrr_growth, Decimal::ZERO);
    }

    #[test]
    fn test_tax_fee_totals() {
        let totals = tax_fee_totals(&revenue_report().tax_fees);
        assert_eq!(totals.tax, Money::from_dollars(10_800));
        assert_eq!(totals.shipping_fees, Money::from_dollars(6_500));
        assert_eq!(totals.platform_fees, Money::from_dollars(4_250));
        assert_eq!(totals.processing_fees, Money::from_dollars(3_200));
        assert_eq!(totals.total, Money::from_dollars(24_750));
    }

    #[test]
    fn test_format_growth() {
        assert_eq!(format_growth(Decimal::new(125, 1)), "+12.5%");
        assert_eq!(format_growth(Decimal::new(-21, 1)), "-2.1%");
        assert_eq!(format_growth(Decimal::new(706, 1)), "+70.6%");
        assert_eq!(format_growth(Decimal::ZERO), "0.0%");
    }
}
