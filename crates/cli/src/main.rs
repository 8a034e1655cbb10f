//! Shop Pulse CLI - Dashboard reports over a generated store dataset.
//!
//! # Usage
//!
//! ```bash
//! # Top ten customers by lifetime spend
//! pulse-cli customers top-spenders
//!
//! # Shipped orders over $50 in June, largest first
//! pulse-cli orders list --status shipped --min 50 --from 2024-06-01 --to 2024-06-30 --sort total --desc
//!
//! # Reproducible overview as JSON
//! pulse-cli --seed 42 --format json overview --range last7
//! ```
//!
//! # Commands
//!
//! - `customers` - Segments, rankings, cohorts and lifetime value
//! - `orders` - Daily counts, status mix and the order table
//! - `apps` - App ROI and utility time savings
//! - `sales` - Channels, locations, peak hours and discounts
//! - `revenue` - Year growth, forecast, revenue splits and subscriptions
//! - `performance` - Targets and weekday conversion
//! - `inventory` - Stock levels and valuation
//! - `products` - Best and worst sellers
//! - `overview` - Headline KPIs for a date range
//!
//! Environment variables (see `DashboardConfig`) are read after loading
//! `.env`; flags override them.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::Write;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use shop_pulse_analytics::derive::sales::RangePreset;
use shop_pulse_analytics::{DashboardConfig, Dataset};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod render;

use commands::apps::AppView;
use commands::customers::CustomerView;
use commands::inventory::{InventoryArgs, InventoryView};
use commands::orders::{OrderArgs, OrderView};
use commands::performance::PerformanceView;
use commands::products::ProductView;
use commands::revenue::RevenueView;
use commands::sales::SalesView;
use render::OutputFormat;

#[derive(Parser)]
#[command(name = "pulse-cli")]
#[command(author, version, about = "Shop Pulse dashboard reports")]
struct Cli {
    /// Seed for a reproducible dataset
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Number of customers to generate
    #[arg(long = "customers", global = true)]
    customer_count: Option<usize>,

    /// Number of orders to generate
    #[arg(long = "orders", global = true)]
    order_count: Option<usize>,

    /// Day treated as today (YYYY-MM-DD)
    #[arg(long, global = true)]
    reference_date: Option<NaiveDate>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Customer segments and rankings
    Customers {
        #[command(subcommand)]
        view: CustomerView,
    },
    /// Order counts and the order table
    Orders {
        #[command(subcommand)]
        view: OrderView,

        #[command(flatten)]
        args: OrderArgs,
    },
    /// App ecosystem ROI
    Apps {
        #[command(subcommand)]
        view: AppView,
    },
    /// Sales channels, locations and discounts
    Sales {
        #[command(subcommand)]
        view: SalesView,
    },
    /// Revenue growth, forecast and subscriptions
    Revenue {
        #[command(subcommand)]
        view: RevenueView,
    },
    /// Revenue targets and traffic conversion
    Performance {
        #[command(subcommand)]
        view: PerformanceView,
    },
    /// Stock levels and valuation
    Inventory {
        #[command(subcommand)]
        view: InventoryView,

        #[command(flatten)]
        args: InventoryArgs,
    },
    /// Product performance
    Products {
        #[command(subcommand)]
        view: ProductView,
    },
    /// Headline KPIs
    Overview {
        /// Reporting window
        #[arg(long, default_value_t = RangePreset::Last30)]
        range: RangePreset,
    },
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info".into());

    // JSON logs for log shippers, text for terminals
    let json = std::env::var("PULSE_LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json"));
    let json_layer = json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer = (!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn load_config(cli: &Cli) -> Result<DashboardConfig, Box<dyn std::error::Error>> {
    let mut config = DashboardConfig::from_env()?;
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if let Some(date) = cli.reference_date {
        config = config.with_reference_date(date);
    }
    if let Some(count) = cli.customer_count {
        config = config.with_customer_count(count)?;
    }
    if let Some(count) = cli.order_count {
        config = config.with_order_count(count)?;
    }
    Ok(config)
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(&cli)?;
    let dataset = Dataset::generate(&config)?;
    tracing::info!(
        customers = dataset.customers.len(),
        orders = dataset.orders.len(),
        reference_date = %dataset.reference_date,
        "Dataset ready"
    );

    let report = match &cli.command {
        Commands::Customers { view } => commands::customers::run(&dataset, view)?,
        Commands::Orders { view, args } => commands::orders::run(&dataset, view, args)?,
        Commands::Apps { view } => commands::apps::run(&dataset, view, config.hourly_value)?,
        Commands::Sales { view } => commands::sales::run(&dataset, *view)?,
        Commands::Revenue { view } => commands::revenue::run(&dataset, *view)?,
        Commands::Performance { view } => commands::performance::run(&dataset, *view)?,
        Commands::Inventory { view, args } => commands::inventory::run(&dataset, view, args)?,
        Commands::Products { view } => commands::products::run(&dataset, view)?,
        Commands::Overview { range } => commands::overview::run(&dataset, *range)?,
    };

    let text = render::render(&report, cli.format)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{text}")?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_after_view() {
        let cli = Cli::try_parse_from([
            "pulse-cli",
            "--seed",
            "7",
            "orders",
            "list",
            "--status",
            "shipped",
            "--sort",
            "total",
            "--desc",
        ]);
        assert!(cli.is_ok());
    }

    #[test]
    fn test_record_count_flags_are_capped() {
        let cli = Cli::try_parse_from([
            "pulse-cli",
            "--customers",
            "18446744073709551615",
            "overview",
        ])
        .unwrap();
        assert!(load_config(&cli).is_err());

        let cli = Cli::try_parse_from(["pulse-cli", "--orders", "250", "overview"]).unwrap();
        assert_eq!(load_config(&cli).unwrap().order_count, 250);
    }

    #[test]
    fn test_window_flags_are_bounded() {
        for args in [
            ["pulse-cli", "orders", "by-day", "--days", "0"],
            ["pulse-cli", "orders", "by-day", "--days", "200000000"],
            ["pulse-cli", "customers", "cohorts", "--months", "121"],
        ] {
            assert!(Cli::try_parse_from(args).is_err(), "{args:?}");
        }
        assert!(Cli::try_parse_from(["pulse-cli", "orders", "by-day", "--days", "366"]).is_ok());
    }

    #[test]
    fn test_revenue_and_performance_views_parse() {
        for args in [
            ["pulse-cli", "revenue", "purchase-types"],
            ["pulse-cli", "revenue", "tax-fees"],
            ["pulse-cli", "performance", "monthly"],
        ] {
            assert!(Cli::try_parse_from(args).is_ok(), "{args:?}");
        }
        assert!(Cli::try_parse_from(["pulse-cli", "performance", "hourly"]).is_err());
    }

    #[test]
    fn test_bad_range_is_rejected() {
        let cli = Cli::try_parse_from(["pulse-cli", "overview", "--range", "decade"]);
        assert!(cli.is_err());
    }
}
