//! Revenue page reports.

use clap::Subcommand;
use shop_pulse_analytics::Dataset;
use shop_pulse_analytics::derive::revenue::{
    average_margin, forecast_summary, format_growth, revenue_slices, revenue_summary,
    segments_by_revenue, subscription_share, subscription_summary, tax_fee_totals,
};
use shop_pulse_core::Money;

use super::{CommandResult, Report, Section, row};

#[derive(Debug, Clone, Copy, Subcommand)]
pub enum RevenueView {
    /// Year revenue, growth and subscription health
    Summary,
    /// Revenue per month against last year
    Trends,
    /// Profit margin per month
    Margins,
    /// Booked revenue and the year-end projection
    Forecast,
    /// Top products by revenue
    Products,
    /// Revenue per customer segment, largest first
    Segments,
    /// Revenue per marketing channel
    Marketing,
    /// Subscription versus one-time purchases
    PurchaseTypes,
    /// MRR, ARPU and churn per month
    Subscriptions,
    /// Taxes and fees per quarter
    TaxFees,
    /// Revenue per metro area
    Locations,
}

/// Run a revenue report.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn run(dataset: &Dataset, view: RevenueView) -> CommandResult {
    let revenue = &dataset.revenue;
    let report: Report = match view {
        RevenueView::Summary => {
            let summary = revenue_summary(&revenue.growth);
            let subscriptions =
                subscription_summary(&revenue.mrr, &revenue.arpu, &revenue.retention);
            let mut report = Report::from(
                Section::new(&[row([
                    ("total", summary.total.display_whole().into()),
                    ("last_year", summary.last_year.display_whole().into()),
                    ("growth", format_growth(summary.growth).into()),
                    ("margin", format!("{:.1}%", average_margin(&revenue.margins)).into()),
                ])])?
                .titled("Revenue")
                .labels(&[
                    ("total", "This year"),
                    ("last_year", "Last year"),
                    ("growth", "Growth"),
                    ("margin", "Avg margin"),
                ]),
            )
            .with(
                Section::new(&[row([
                    ("mrr", subscriptions.current_mrr.display_whole().into()),
                    ("mrr_growth", format_growth(subscriptions.mrr_growth).into()),
                    ("arpu", subscriptions.current_arpu.display_whole().into()),
                    ("churn", format!("{:.1}%", subscriptions.average_churn).into()),
                ])])?
                .titled("Subscriptions")
                .labels(&[
                    ("mrr", "MRR"),
                    ("mrr_growth", "MRR growth"),
                    ("arpu", "ARPU"),
                    ("churn", "Avg churn"),
                ]),
            );
            if let Some(share) = subscription_share(&revenue.purchase_types) {
                report = report.note(format!("Subscription revenue: {share}%"));
            }
            report
        }
        RevenueView::Trends => {
            let rows: Vec<_> = revenue
                .growth
                .iter()
                .map(|m| {
                    row([
                        ("name", m.name.clone().into()),
                        ("this_year", m.this_year.display_whole().into()),
                        ("last_year", m.last_year.display_whole().into()),
                    ])
                })
                .collect();
            Section::new(&rows)?
                .titled("Revenue growth")
                .labels(&[("name", "Month"), ("this_year", "This year"), ("last_year", "Last year")])
                .into()
        }
        RevenueView::Margins => Report::from(
            Section::new(&revenue.margins)?
                .titled("Profit margin")
                .labels(&[("name", "Month"), ("margin", "Margin %")]),
        )
        .note(format!("Average: {:.1}%", average_margin(&revenue.margins))),
        RevenueView::Forecast => {
            let rows: Vec<_> = revenue
                .forecast
                .iter()
                .map(|p| {
                    row([
                        ("name", p.name.clone().into()),
                        (
                            "actual",
                            p.actual.map_or_else(|| "-".to_string(), Money::display_whole).into(),
                        ),
                        ("forecast", p.forecast.display_whole().into()),
                    ])
                })
                .collect();
            let summary = forecast_summary(&revenue.forecast);
            Report::from(
                Section::new(&rows)?
                    .titled("Forecast")
                    .labels(&[("name", "Month"), ("actual", "Actual"), ("forecast", "Forecast")]),
            )
            .note(format!(
                "Actual to date: {}",
                summary.actual_to_date.display_whole()
            ))
            .note(format!(
                "Projected year: {}",
                summary.projected_total.display_whole()
            ))
        }
        RevenueView::Products => {
            let rows: Vec<_> = revenue
                .top_products
                .iter()
                .map(|p| {
                    row([
                        ("name", p.name.clone().into()),
                        ("revenue", p.revenue.display_whole().into()),
                        ("growth", format_growth(p.growth).into()),
                    ])
                })
                .collect();
            Section::new(&rows)?
                .titled("Top products")
                .labels(&[("name", "Product"), ("revenue", "Revenue"), ("growth", "Growth")])
                .into()
        }
        RevenueView::Segments => Section::new(&segments_by_revenue(&revenue.customer_segments))?
            .titled("Customer segments")
            .labels(&[("name", "Segment"), ("value", "Revenue"), ("percentage", "Share %")])
            .into(),
        RevenueView::Marketing => Section::new(&revenue_slices(&revenue.marketing_channels))?
            .titled("Marketing channels")
            .labels(&[("name", "Channel"), ("value", "Revenue"), ("percentage", "Share %")])
            .into(),
        RevenueView::PurchaseTypes => Section::new(&revenue_slices(&revenue.purchase_types))?
            .titled("Purchase types")
            .labels(&[("name", "Type"), ("value", "Revenue"), ("percentage", "Share %")])
            .into(),
        RevenueView::Subscriptions => {
            let rows: Vec<_> = revenue
                .mrr
                .iter()
                .zip(&revenue.arpu)
                .zip(&revenue.retention)
                .map(|((mrr, arpu), retention)| {
                    row([
                        ("name", mrr.name.clone().into()),
                        ("mrr", mrr.value.display_whole().into()),
                        ("arpu", arpu.value.display_whole().into()),
                        ("retained", retention.retained.into()),
                        ("churned", retention.churned.into()),
                    ])
                })
                .collect();
            Section::new(&rows)?
                .titled("Subscriptions")
                .labels(&[
                    ("name", "Month"),
                    ("mrr", "MRR"),
                    ("arpu", "ARPU"),
                    ("retained", "Retained %"),
                    ("churned", "Churned %"),
                ])
                .into()
        }
        RevenueView::TaxFees => {
            let totals = tax_fee_totals(&revenue.tax_fees);
            Report::from(
                Section::new(&revenue.tax_fees)?
                    .titled("Taxes and fees")
                    .labels(&[
                        ("name", "Quarter"),
                        ("tax", "Tax"),
                        ("shipping_fees", "Shipping"),
                        ("platform_fees", "Platform"),
                        ("processing_fees", "Processing"),
                    ]),
            )
            .with(Section::new(&totals)?.titled("Totals"))
            .note(format!("Total paid: {}", totals.total.display_whole()))
        }
        RevenueView::Locations => Section::new(&dataset.sales.locations)?
            .labels(&[("name", "Location"), ("value", "Revenue")])
            .into(),
    };
    Ok(report)
}
