//! Synthetic dataset generation.
//!
//! Every collection is built once by [`Dataset::generate`] and never mutated.
//! A configured seed makes the whole dataset reproducible; without one the
//! generator is seeded from the OS and each run differs.

mod apps;
mod customers;
mod inventory;
mod orders;
mod performance;
pub mod pools;
mod products;
mod revenue;
mod sales;

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, instrument};

pub use apps::app_catalog;
pub use customers::generate_customers;
pub use inventory::inventory_items;
pub use orders::generate_orders;
pub use performance::performance_report;
pub use products::{PRODUCT_COUNT, generate_products};
pub use revenue::revenue_report;
pub use sales::{MONTHS, WEEKDAYS, generate_clv_trend, generate_sales};

use crate::config::DashboardConfig;
use crate::error::Result;
use crate::models::{
    AppItem, ClvPoint, Customer, InventoryItem, Order, PerformanceAnalytics, ProductPerformance,
    RevenueAnalytics, SalesAnalytics,
};

/// Every base collection the dashboard derives its views from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    /// The day all relative dates were generated against.
    pub reference_date: NaiveDate,
    pub customers: Vec<Customer>,
    /// Newest first.
    pub orders: Vec<Order>,
    pub apps: Vec<AppItem>,
    pub products: Vec<ProductPerformance>,
    pub inventory: Vec<InventoryItem>,
    pub sales: SalesAnalytics,
    pub clv_trend: Vec<ClvPoint>,
    pub revenue: RevenueAnalytics,
    pub performance: PerformanceAnalytics,
}

impl Dataset {
    /// Generate a dataset from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if a generator's weight table is invalid.
    #[instrument(skip(config), fields(seed = ?config.seed, reference_date = %config.reference_date))]
    pub fn generate(config: &DashboardConfig) -> Result<Self> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::generate_with(&mut rng, config)
    }

    /// Generate a dataset drawing from a caller-supplied RNG.
    ///
    /// `config.seed` is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if a generator's weight table is invalid.
    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R, config: &DashboardConfig) -> Result<Self> {
        let reference = config.reference_date;

        let customers = generate_customers(rng, config.customer_count, reference)?;
        let orders = generate_orders(rng, config.order_count, reference)?;
        let apps = app_catalog();
        let products = generate_products(rng);
        let inventory = inventory_items();
        let sales = generate_sales(rng);
        let clv_trend = generate_clv_trend(rng);
        let revenue = revenue_report();
        let performance = performance_report();

        debug!(
            customers = customers.len(),
            orders = orders.len(),
            apps = apps.len(),
            products = products.len(),
            inventory = inventory.len(),
            top_products = revenue.top_products.len(),
            "Generated dataset"
        );

        Ok(Self {
            reference_date: reference,
            customers,
            orders,
            apps,
            products,
            inventory,
            sales,
            clv_trend,
            revenue,
            performance,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn config() -> DashboardConfig {
        DashboardConfig::default()
            .with_seed(42)
            .with_reference_date(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
    }

    #[test]
    fn test_same_seed_same_dataset() {
        let a = Dataset::generate(&config()).unwrap();
        let b = Dataset::generate(&config()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seed_different_dataset() {
        let a = Dataset::generate(&config()).unwrap();
        let b = Dataset::generate(&config().with_seed(43)).unwrap();
        assert_ne!(a.customers, b.customers);
    }

    #[test]
    fn test_default_sizes() {
        let dataset = Dataset::generate(&config()).unwrap();
        assert_eq!(dataset.customers.len(), 100);
        assert_eq!(dataset.orders.len(), 100);
        assert_eq!(dataset.apps.len(), 23);
        assert_eq!(dataset.inventory.len(), 10);
        assert_eq!(dataset.products.len(), PRODUCT_COUNT);
        assert_eq!(dataset.clv_trend.len(), 8);
        assert_eq!(dataset.revenue.top_products.len(), 5);
        assert_eq!(dataset.performance.monthly.len(), 12);
    }

    #[test]
    fn test_empty_collections() {
        let mut config = config();
        config.customer_count = 0;
        config.order_count = 0;
        let dataset = Dataset::generate(&config).unwrap();
        assert!(dataset.customers.is_empty());
        assert!(dataset.orders.is_empty());
    }
}
