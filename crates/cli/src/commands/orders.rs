//! Order reports.
//!
//! Every view first narrows the orders with the shared search and filter
//! flags, so `--status shipped by-day` charts shipped orders only.

use chrono::NaiveDate;
use clap::{Args, Subcommand};
use rust_decimal::Decimal;
use serde_json::{Map, Value};
use shop_pulse_analytics::derive::orders::{
    MAX_DAYS, order_counts_by_day, order_status_distribution, search_orders,
};
use shop_pulse_analytics::models::Order;
use shop_pulse_analytics::table::orders_table_config;
use shop_pulse_analytics::{Dataset, OrderFilter, sort_rows};
use shop_pulse_core::Money;
use tracing::debug;

use super::{CommandResult, Report, Section, SortArgs, row};

#[derive(Debug, Clone, Subcommand)]
pub enum OrderView {
    /// Daily order counts, oldest first
    ByDay {
        /// Days to chart, ending at the reference date
        #[arg(
            long,
            default_value_t = 7,
            value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_DAYS))
        )]
        days: u32,
    },
    /// Orders per status
    Status,
    /// The order table
    List,
}

/// Search, filter and sort flags for the order views.
#[derive(Debug, Clone, Default, Args)]
pub struct OrderArgs {
    /// Status to keep, or "all"
    #[arg(long, global = true)]
    pub status: Option<String>,

    /// First day of the date range (YYYY-MM-DD), used with --to
    #[arg(long, global = true)]
    pub from: Option<NaiveDate>,

    /// Last day of the date range (YYYY-MM-DD), used with --from
    #[arg(long, global = true)]
    pub to: Option<NaiveDate>,

    /// Minimum order total in dollars
    #[arg(long, global = true)]
    pub min: Option<Decimal>,

    /// Maximum order total in dollars
    #[arg(long, global = true)]
    pub max: Option<Decimal>,

    /// Match order ID, customer or product
    #[arg(long, global = true)]
    pub search: Option<String>,

    #[command(flatten)]
    pub sort: SortArgs,
}

impl OrderArgs {
    /// Build the order filter from the flags.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown status.
    pub fn filter(&self) -> Result<OrderFilter, shop_pulse_analytics::AnalyticsError> {
        let status = match &self.status {
            Some(value) => OrderFilter::status_from_param(value)?,
            None => None,
        };
        Ok(OrderFilter {
            from: self.from,
            to: self.to,
            status,
            min_price: self.min.map(Money::new),
            max_price: self.max.map(Money::new),
        })
    }
}

/// Run an order report.
///
/// # Errors
///
/// Returns an error if a flag is invalid, the filter can never match, or the
/// sort key is unknown.
pub fn run(dataset: &Dataset, view: &OrderView, args: &OrderArgs) -> CommandResult {
    let filter = args.filter()?;
    let searched = search_orders(&dataset.orders, args.search.as_deref().unwrap_or_default());
    let matched = filter.apply(searched)?;
    debug!(matched = matched.len(), filters = ?filter.active_filters(), "filtered orders");

    let section = match view {
        OrderView::ByDay { days } => Section::new(&order_counts_by_day(
            matched.iter().copied(),
            dataset.reference_date,
            *days,
        )?)?
        .labels(&[("day", "Day"), ("date", "Date"), ("total", "Orders")]),
        OrderView::Status => Section::new(&order_status_distribution(matched.iter().copied()))?
            .labels(&[
                ("name", "Status"),
                ("value", "Orders"),
                ("percentage", "Share %"),
            ]),
        OrderView::List => {
            let sorted = sort_rows(matched.iter().copied(), &args.sort.state::<Order>())?;
            let rows = sorted.iter().map(|o| order_row(o)).collect();
            Section::table(&orders_table_config(), rows)
        }
    };

    let mut report = Report::from(section);
    let active = filter.active_filters();
    if !active.is_empty() {
        report = report.note(format!("Filters: {}", active.join(", ")));
    }
    Ok(report)
}

fn order_row(order: &Order) -> Map<String, Value> {
    row([
        ("id", order.id.as_str().into()),
        ("date", order.date.format("%b %-d, %Y %H:%M").to_string().into()),
        ("customer", order.customer.name.as_str().into()),
        ("product", order.product.name.as_str().into()),
        ("total", order.total.display().into()),
        ("status", order.status.label().into()),
        ("payment_method", order.payment_method.label().into()),
        ("tracking_number", order.tracking_number.clone().into()),
    ])
}
