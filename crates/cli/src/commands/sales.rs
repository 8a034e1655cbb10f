//! Sales page reports.

use clap::Subcommand;
use shop_pulse_analytics::Dataset;
use shop_pulse_analytics::derive::sales::{
    channel_totals, discount_totals, heatmap_max, peak_hour_by_day,
};

use super::{CommandResult, Report, Section, row};

#[derive(Debug, Clone, Copy, Subcommand)]
pub enum SalesView {
    /// Revenue per sales channel
    Channels,
    /// Revenue per metro area
    Locations,
    /// Revenue per device class
    Devices,
    /// Busiest hour of each weekday
    Heatmap,
    /// Discount code usage and revenue
    Discounts,
    /// Average order value per month
    Aov,
    /// Orders per fulfillment state
    Fulfillment,
    /// Checkout abandonment and recovery
    Abandoned,
}

/// Run a sales report.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn run(dataset: &Dataset, view: SalesView) -> CommandResult {
    let sales = &dataset.sales;
    let report: Report = match view {
        SalesView::Channels => Report::from(
            Section::new(&sales.channels)?
                .titled("Channels")
                .labels(&[("name", "Channel"), ("value", "Revenue"), ("percent", "Share %")]),
        )
        .note(format!(
            "Total: {}",
            channel_totals(&sales.channels).display_whole()
        )),
        SalesView::Locations => Section::new(&sales.locations)?
            .labels(&[("name", "Location"), ("value", "Revenue")])
            .into(),
        SalesView::Devices => Section::new(&sales.devices)?
            .labels(&[("name", "Device"), ("value", "Revenue"), ("percent", "Share %")])
            .into(),
        SalesView::Heatmap => {
            let peaks: Vec<_> = peak_hour_by_day(&sales.peak_times)
                .into_iter()
                .map(|peak| {
                    row([
                        ("day", peak.day.into()),
                        ("hour", format!("{}:00", peak.hour).into()),
                        ("value", peak.value.into()),
                    ])
                })
                .collect();
            Report::from(
                Section::new(&peaks)?
                    .titled("Peak hours")
                    .labels(&[("day", "Day"), ("hour", "Peak hour"), ("value", "Orders")]),
            )
            .note(format!("Busiest hour: {} orders", heatmap_max(&sales.peak_times)))
        }
        SalesView::Discounts => Report::from(
            Section::new(&sales.discount_codes)?
                .titled("Discount codes")
                .labels(&[
                    ("code", "Code"),
                    ("usage_count", "Uses"),
                    ("avg_discount", "Avg discount"),
                    ("total_discount", "Total discount"),
                    ("revenue_generated", "Revenue"),
                ]),
        )
        .with(Section::new(&discount_totals(&sales.discount_codes))?.titled("Totals")),
        SalesView::Aov => Section::new(&sales.monthly_aov)?
            .labels(&[("name", "Month"), ("value", "AOV")])
            .into(),
        SalesView::Fulfillment => Section::new(&sales.fulfillment)?
            .labels(&[("name", "State"), ("count", "Orders"), ("value", "Value")])
            .into(),
        SalesView::Abandoned => Section::new(&sales.abandoned_checkouts)?.into(),
    };
    Ok(report)
}
