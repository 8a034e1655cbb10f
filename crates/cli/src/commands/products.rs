//! Product performance reports.

use clap::Subcommand;
use serde_json::{Map, Value};
use shop_pulse_analytics::derive::products::{
    PERFORMER_LIMIT, bottom_products, inventory_badge, top_products,
};
use shop_pulse_analytics::models::ProductPerformance;
use shop_pulse_analytics::table::products_table_config;
use shop_pulse_analytics::{Dataset, sort_rows};

use super::{CommandResult, Section, SortArgs, row};

#[derive(Debug, Clone, Subcommand)]
pub enum ProductView {
    /// Best sellers
    Top,
    /// Worst sellers
    Bottom,
    /// The product performance table
    List(SortArgs),
}

/// Run a product report.
///
/// # Errors
///
/// Returns an error if the sort key is unknown.
pub fn run(dataset: &Dataset, view: &ProductView) -> CommandResult {
    let products = &dataset.products;
    let listed = match view {
        ProductView::Top => top_products(products, PERFORMER_LIMIT),
        ProductView::Bottom => bottom_products(products, PERFORMER_LIMIT),
        ProductView::List(sort) => sort_rows(products, &sort.state::<ProductPerformance>())?,
    };
    let rows = listed.iter().map(|p| product_row(p)).collect();
    Ok(Section::table(&products_table_config(), rows).into())
}

fn product_row(product: &ProductPerformance) -> Map<String, Value> {
    row([
        ("name", product.name.as_str().into()),
        ("price", product.price.as_str().into()),
        ("sales", product.sales.into()),
        ("status", product.status.as_str().into()),
        ("inventory", product.inventory.into()),
        ("conversion", format!("{:.1}%", product.conversion).into()),
        ("profit", product.profit.as_str().into()),
        ("margin", format!("{}%", product.margin).into()),
        ("category", product.category.as_str().into()),
        ("badge", inventory_badge(product.inventory).label().into()),
    ])
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use shop_pulse_analytics::DashboardConfig;

    use super::*;

    fn dataset() -> Dataset {
        Dataset::generate(&DashboardConfig::default().with_seed(31)).unwrap()
    }

    #[test]
    fn test_top_products_have_badges() {
        let report = run(&dataset(), &ProductView::Top).unwrap();
        let rows = report.sections[0].data.as_array().unwrap();
        assert_eq!(rows.len(), PERFORMER_LIMIT);
        for row in rows {
            let badge = row["badge"].as_str().unwrap();
            assert!(["Critical", "Low", "Good"].contains(&badge));
        }
    }

    #[test]
    fn test_list_sorted_by_price() {
        let view = ProductView::List(SortArgs {
            sort: Some("price".to_string()),
            desc: false,
        });
        let report = run(&dataset(), &view).unwrap();
        let rows = report.sections[0].data.as_array().unwrap();
        // Products start descending when a new column is chosen.
        let prices: Vec<f64> = rows
            .iter()
            .map(|r| {
                r["price"]
                    .as_str()
                    .unwrap()
                    .replace(['$', ','], "")
                    .parse()
                    .unwrap()
            })
            .collect();
        assert!(prices.windows(2).all(|w| w[0] >= w[1]));
    }
}
