use rand::Rng;
use rand::seq::IndexedRandom;
use rust_decimal::Decimal;
use shop_pulse_core::{Money, ProductId, ProductTrend};

use super::pools;
use crate::models::ProductPerformance;

/// Rows in the product performance table.
pub const PRODUCT_COUNT: usize = 12;

/// Generate the product performance rows.
///
/// Profit is price times units sold times margin.
pub fn generate_products<R: Rng + ?Sized>(rng: &mut R) -> Vec<ProductPerformance> {
    (1..=PRODUCT_COUNT)
        .map(|n| {
            let price = Money::from_cents(rng.random_range(1_000..=25_000));
            let sales: u32 = rng.random_range(20..=1_500);
            let margin: u32 = rng.random_range(10..=60);
            let profit = Money::new(
                price.times(sales).amount() * Decimal::from(margin) / Decimal::ONE_HUNDRED,
            );
            let status = [ProductTrend::Trending, ProductTrend::Stable, ProductTrend::Declining]
                .choose(rng)
                .copied()
                .unwrap_or(ProductTrend::Stable);

            ProductPerformance {
                id: ProductId::new(format!("PRD-{n:03}")),
                name: pools::product_name(rng),
                price: price.display(),
                sales,
                status,
                inventory: rng.random_range(0..=200),
                conversion: f64::from(rng.random_range(5_u32..=80)) / 10.0,
                profit: profit.display(),
                margin,
                category: pools::pick(rng, pools::PRODUCT_CATEGORIES).to_string(),
            }
        })
        .collect()
}
