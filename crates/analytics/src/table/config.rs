//! Data table configuration.
//!
//! These types describe the columns, filters and empty state of each
//! dashboard table so that every renderer lays tables out the same way.

use serde::{Deserialize, Serialize};
use shop_pulse_core::OrderStatus;

use super::sort::{SortDirection, Sortable};
use crate::models::{Customer, InventoryItem, Order, ProductPerformance};

/// Column definition for a data table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableColumn {
    /// Unique key for the column; doubles as the sort key.
    pub key: String,
    /// Display label for the column header.
    pub label: String,
    pub sortable: bool,
    /// Whether the column is visible by default.
    pub default_visible: bool,
}

impl TableColumn {
    /// Create a new sortable column.
    #[must_use]
    pub fn sortable(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            sortable: true,
            default_visible: true,
        }
    }

    /// Create a new non-sortable column.
    #[must_use]
    pub fn new(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            sortable: false,
            default_visible: true,
        }
    }

    /// Set whether the column is visible by default.
    #[must_use]
    pub const fn visible(mut self, visible: bool) -> Self {
        self.default_visible = visible;
        self
    }
}

/// Filter type for data tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterType {
    /// Text input filter.
    Text,
    /// Single-select dropdown.
    Select,
    /// Date range picker.
    DateRange,
    /// Number range (min/max).
    NumberRange,
}

/// Filter definition for a data table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableFilter {
    /// Filter parameter key.
    pub key: String,
    pub label: String,
    pub filter_type: FilterType,
    /// Placeholder text (for text inputs).
    pub placeholder: Option<String>,
    /// Available options (for selects).
    pub options: Vec<FilterOption>,
}

/// Option for select filters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

impl FilterOption {
    #[must_use]
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

impl TableFilter {
    fn with_type(key: &str, label: &str, filter_type: FilterType) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            filter_type,
            placeholder: None,
            options: vec![],
        }
    }

    /// Create a text filter.
    #[must_use]
    pub fn text(key: &str, label: &str, placeholder: &str) -> Self {
        Self {
            placeholder: Some(placeholder.to_string()),
            ..Self::with_type(key, label, FilterType::Text)
        }
    }

    /// Create a select filter.
    #[must_use]
    pub fn select(key: &str, label: &str, options: Vec<FilterOption>) -> Self {
        Self {
            options,
            ..Self::with_type(key, label, FilterType::Select)
        }
    }

    /// Create a date range filter.
    #[must_use]
    pub fn date_range(key: &str, label: &str) -> Self {
        Self::with_type(key, label, FilterType::DateRange)
    }

    /// Create a min/max number filter.
    #[must_use]
    pub fn number_range(key: &str, label: &str) -> Self {
        Self::with_type(key, label, FilterType::NumberRange)
    }
}

/// Configuration for a data table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataTableConfig {
    /// Unique table identifier.
    pub table_id: String,
    pub columns: Vec<TableColumn>,
    pub filters: Vec<TableFilter>,
    pub search_placeholder: String,
    /// Initial sort column.
    pub default_sort: String,
    pub default_direction: SortDirection,
    /// Title for empty state.
    pub empty_title: String,
    /// Description for empty state.
    pub empty_description: Option<String>,
    /// Whether to show filter panel.
    pub has_filters: bool,
}

impl DataTableConfig {
    /// Create a configuration for row type `T`, starting from its default sort.
    #[must_use]
    pub fn for_rows<T: Sortable>() -> Self {
        let (key, direction) = T::DEFAULT_SORT;
        Self {
            table_id: T::TABLE.to_string(),
            columns: vec![],
            filters: vec![],
            search_placeholder: "Search...".to_string(),
            default_sort: key.to_string(),
            default_direction: direction,
            empty_title: "No items found".to_string(),
            empty_description: None,
            has_filters: false,
        }
    }

    /// Add a column.
    #[must_use]
    pub fn column(mut self, column: TableColumn) -> Self {
        self.columns.push(column);
        self
    }

    /// Add a filter.
    #[must_use]
    pub fn filter(mut self, filter: TableFilter) -> Self {
        self.has_filters = true;
        self.filters.push(filter);
        self
    }

    /// Set search placeholder.
    #[must_use]
    pub fn search_placeholder(mut self, placeholder: &str) -> Self {
        self.search_placeholder = placeholder.to_string();
        self
    }

    /// Set empty state text.
    #[must_use]
    pub fn empty_state(mut self, title: &str, description: Option<&str>) -> Self {
        self.empty_title = title.to_string();
        self.empty_description = description.map(ToString::to_string);
        self
    }

    /// Get default visible columns.
    #[must_use]
    pub fn default_columns(&self) -> Vec<&TableColumn> {
        self.columns.iter().filter(|c| c.default_visible).collect()
    }

    /// Keys of the sortable columns.
    #[must_use]
    pub fn sortable_keys(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|c| c.sortable)
            .map(|c| c.key.as_str())
            .collect()
    }
}

/// Build the orders table configuration.
#[must_use]
pub fn orders_table_config() -> DataTableConfig {
    let mut statuses = vec![FilterOption::new("all", "All Statuses")];
    statuses.extend(
        OrderStatus::ALL
            .into_iter()
            .map(|s| FilterOption::new(s.as_str(), s.label())),
    );

    DataTableConfig::for_rows::<Order>()
        .column(TableColumn::sortable("id", "Order ID"))
        .column(TableColumn::sortable("date", "Date"))
        .column(TableColumn::sortable("customer", "Customer"))
        .column(TableColumn::sortable("product", "Product"))
        .column(TableColumn::sortable("total", "Total"))
        .column(TableColumn::sortable("status", "Status"))
        .column(TableColumn::sortable("payment_method", "Payment").visible(false))
        .column(TableColumn::new("tracking_number", "Tracking").visible(false))
        .filter(TableFilter::date_range("date", "Date Range"))
        .filter(TableFilter::select("status", "Status", statuses))
        .filter(TableFilter::number_range("price", "Price Range"))
        .search_placeholder("Search orders...")
        .empty_state("No orders found", Some("Try adjusting your search or filters"))
}

/// Build the customers table configuration.
#[must_use]
pub fn customers_table_config() -> DataTableConfig {
    DataTableConfig::for_rows::<Customer>()
        .column(TableColumn::sortable("name", "Customer"))
        .column(TableColumn::sortable("email", "Email").visible(false))
        .column(TableColumn::sortable("total_spent", "Total Spent"))
        .column(TableColumn::sortable("orders", "Orders"))
        .column(TableColumn::sortable("tier", "Type"))
        .column(TableColumn::sortable("last_order", "Last Order"))
        .column(TableColumn::sortable("first_purchase", "First Purchase").visible(false))
        .column(TableColumn::sortable("location", "Location"))
        .search_placeholder("Search customers by name or email...")
        .empty_state(
            "No customers found",
            Some("Try adjusting your search or filters"),
        )
}

/// Build the product performance table configuration.
#[must_use]
pub fn products_table_config() -> DataTableConfig {
    DataTableConfig::for_rows::<ProductPerformance>()
        .column(TableColumn::sortable("name", "Product"))
        .column(TableColumn::sortable("price", "Price"))
        .column(TableColumn::sortable("sales", "Sales"))
        .column(TableColumn::sortable("status", "Trend"))
        .column(TableColumn::sortable("inventory", "Inventory"))
        .column(TableColumn::sortable("conversion", "Conversion"))
        .column(TableColumn::sortable("profit", "Profit"))
        .column(TableColumn::sortable("margin", "Margin"))
        .column(TableColumn::sortable("category", "Category").visible(false))
        .column(TableColumn::new("badge", "Stock Level"))
        .search_placeholder("Search products...")
        .empty_state("No products found", None)
}

/// Build the inventory table configuration.
#[must_use]
pub fn inventory_table_config() -> DataTableConfig {
    DataTableConfig::for_rows::<InventoryItem>()
        .column(TableColumn::sortable("name", "Product"))
        .column(TableColumn::sortable("sku", "SKU"))
        .column(TableColumn::sortable("stock", "Stock"))
        .column(TableColumn::sortable("value", "Value"))
        .column(TableColumn::sortable("category", "Category"))
        .column(TableColumn::sortable("threshold", "Reorder At").visible(false))
        .column(TableColumn::sortable("status", "Status"))
        .filter(TableFilter::text("search", "Search", "Search by name, SKU or category..."))
        .search_placeholder("Search by name, SKU or category...")
        .empty_state("No items found", Some("Try a different search term"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_columns_sortable<T: Sortable>(config: &DataTableConfig) {
        for key in config.sortable_keys() {
            assert!(T::SORT_KEYS.contains(&key), "{} has no sort key {key}", T::TABLE);
        }
    }

    #[test]
    fn test_sortable_columns_have_sort_keys() {
        assert_columns_sortable::<Order>(&orders_table_config());
        assert_columns_sortable::<Customer>(&customers_table_config());
        assert_columns_sortable::<ProductPerformance>(&products_table_config());
        assert_columns_sortable::<InventoryItem>(&inventory_table_config());
    }

    #[test]
    fn test_orders_table() {
        let config = orders_table_config();
        assert_eq!(config.table_id, "orders");
        assert_eq!(config.default_sort, "date");
        assert_eq!(config.default_direction, SortDirection::Desc);
        assert_eq!(config.empty_title, "No orders found");
        assert!(config.has_filters);

        let status = config.filters.iter().find(|f| f.key == "status");
        assert_eq!(status.map(|f| f.options.len()), Some(6));
    }

    #[test]
    fn test_default_columns_skip_hidden() {
        let config = orders_table_config();
        let visible: Vec<&str> = config
            .default_columns()
            .iter()
            .map(|c| c.key.as_str())
            .collect();
        assert!(!visible.contains(&"payment_method"));
        assert_eq!(visible.len(), 6);
    }

    #[test]
    fn test_products_table_has_no_filters() {
        let config = products_table_config();
        assert!(!config.has_filters);
        assert_eq!(config.default_sort, "sales");
    }
}
