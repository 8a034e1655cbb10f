//! Inventory reports.

use clap::{Args, Subcommand};
use serde_json::{Map, Value};
use shop_pulse_analytics::derive::inventory::{
    low_stock_items, out_of_stock_items, search_inventory, stock_by_category, valuation_summary,
};
use shop_pulse_analytics::models::InventoryItem;
use shop_pulse_analytics::table::inventory_table_config;
use shop_pulse_analytics::{Dataset, sort_rows};

use super::{CommandResult, Report, Section, SortArgs, row};

#[derive(Debug, Clone, Subcommand)]
pub enum InventoryView {
    /// Items running low
    Low,
    /// Sold out items
    Out,
    /// Stock value summary
    Valuation,
    /// Units and value per category
    Categories,
    /// The inventory table
    List,
}

#[derive(Debug, Clone, Default, Args)]
pub struct InventoryArgs {
    /// Match name, SKU or category
    #[arg(long, global = true)]
    pub search: Option<String>,

    #[command(flatten)]
    pub sort: SortArgs,
}

/// Run an inventory report.
///
/// # Errors
///
/// Returns an error if the sort key is unknown or serialization fails.
pub fn run(dataset: &Dataset, view: &InventoryView, args: &InventoryArgs) -> CommandResult {
    let items = &dataset.inventory;
    let report: Report = match view {
        InventoryView::Low => item_table(&low_stock_items(items)).into(),
        InventoryView::Out => item_table(&out_of_stock_items(items))
            .empty_state("Nothing is sold out")
            .into(),
        InventoryView::Valuation => Section::new(&valuation_summary(items))?.into(),
        InventoryView::Categories => Section::new(&stock_by_category(items))?
            .labels(&[
                ("category", "Category"),
                ("items", "Items"),
                ("stock", "Units"),
                ("value", "Value"),
            ])
            .into(),
        InventoryView::List => {
            let matched = search_inventory(items, args.search.as_deref().unwrap_or_default());
            let sorted = sort_rows(matched, &args.sort.state::<InventoryItem>())?;
            item_table(&sorted).into()
        }
    };
    Ok(report)
}

fn item_row(item: &InventoryItem) -> Map<String, Value> {
    row([
        ("name", item.name.as_str().into()),
        ("sku", item.sku.as_str().into()),
        ("stock", item.stock.into()),
        ("value", item.value.display().into()),
        ("category", item.category.as_str().into()),
        ("threshold", item.threshold.into()),
        ("status", item.status.label().into()),
    ])
}

fn item_table(items: &[&InventoryItem]) -> Section {
    let rows = items.iter().map(|i| item_row(i)).collect();
    Section::table(&inventory_table_config(), rows)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use shop_pulse_analytics::DashboardConfig;

    use super::*;

    fn dataset() -> Dataset {
        Dataset::generate(&DashboardConfig::default().with_seed(3)).unwrap()
    }

    #[test]
    fn test_search_then_sort() {
        let args = InventoryArgs {
            search: Some("acc".to_string()),
            sort: SortArgs {
                sort: Some("stock".to_string()),
                desc: false,
            },
        };
        let report = run(&dataset(), &InventoryView::List, &args).unwrap();
        let rows = report.sections[0].data.as_array().unwrap();
        let skus: Vec<&str> = rows.iter().map(|r| r["sku"].as_str().unwrap()).collect();
        assert_eq!(skus, vec!["ACC-001", "ACC-002", "ACC-003"]);
    }

    #[test]
    fn test_out_of_stock() {
        let report = run(&dataset(), &InventoryView::Out, &InventoryArgs::default()).unwrap();
        assert_eq!(report.sections[0].data.as_array().unwrap().len(), 2);
    }
}
