//! The overview KPI strip.

use shop_pulse_analytics::Dataset;
use shop_pulse_analytics::derive::orders::order_status_distribution;
use shop_pulse_analytics::derive::sales::{OverviewKpis, RangePreset};

use super::{CommandResult, Report, Section};

/// Run the overview report for `range`.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn run(dataset: &Dataset, range: RangePreset) -> CommandResult {
    let kpis = OverviewKpis::calculate(&dataset.orders, &dataset.customers, range);
    let report = Report::from(
        Section::new(&kpis)?
            .titled("Overview")
            .labels(&[
                ("range", "Range"),
                ("total_revenue", "Total revenue"),
                ("total_orders", "Orders"),
                ("average_order_value", "Average order value"),
                ("active_customers", "Active customers"),
            ]),
    )
    .with(
        Section::new(&order_status_distribution(&dataset.orders))?
            .titled("Order status")
            .labels(&[("name", "Status"), ("value", "Orders"), ("percentage", "Share %")]),
    )
    .note(range.label());
    Ok(report)
}
