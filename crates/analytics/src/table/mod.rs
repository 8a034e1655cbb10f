//! Table logic: column sorting, order filters and per-table layout.

pub mod config;
pub mod filter;
pub mod sort;

pub use config::{
    DataTableConfig, FilterOption, FilterType, TableColumn, TableFilter, customers_table_config,
    inventory_table_config, orders_table_config, products_table_config,
};
pub use filter::OrderFilter;
pub use sort::{SortDirection, SortState, SortValue, Sortable, resolve_key, sort_rows};
