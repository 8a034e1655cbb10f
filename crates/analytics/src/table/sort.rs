//! Column sorting for the dashboard tables.
//!
//! Each row type names its sortable columns and maps a column key to a
//! [`SortValue`]. Sorting is stable, so rows with equal keys keep their
//! incoming order in both directions.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{AnalyticsError, Result};
use crate::models::{Customer, InventoryItem, Order, ProductPerformance};

/// Sort direction for a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// The opposite direction.
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// The active sort column and direction of a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortState {
    pub key: String,
    pub direction: SortDirection,
    /// Direction applied when switching to a different column.
    #[serde(skip)]
    new_key_direction: SortDirection,
}

impl SortState {
    /// Sort by `key` in `direction`, switching columns ascending.
    #[must_use]
    pub fn new(key: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            key: key.into(),
            direction,
            new_key_direction: SortDirection::Asc,
        }
    }

    /// The initial sort of table `T`.
    #[must_use]
    pub fn initial<T: Sortable>() -> Self {
        let (key, direction) = T::DEFAULT_SORT;
        Self {
            key: key.to_string(),
            direction,
            new_key_direction: T::NEW_KEY_DIRECTION,
        }
    }

    /// Handle a header click: the active column flips direction, any other
    /// column becomes active in the table's new-column direction.
    pub fn click(&mut self, key: &str) {
        if self.key.eq_ignore_ascii_case(key) {
            self.direction = self.direction.toggle();
        } else {
            self.key = key.to_string();
            self.direction = self.new_key_direction;
        }
    }
}

/// A cell value as seen by the sorter.
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue<'a> {
    /// No value; sorts before everything else.
    Missing,
    /// Compared case-insensitively.
    Text(&'a str),
    Number(Decimal),
    Date(NaiveDate),
    Timestamp(DateTime<Utc>),
    /// A formatted currency string such as "$1,234.50". Everything except
    /// digits, `.` and `-` is stripped before a numeric comparison; text that
    /// still does not parse counts as zero.
    Currency(&'a str),
}

impl SortValue<'_> {
    fn number(value: impl Into<Decimal>) -> Self {
        SortValue::Number(value.into())
    }

    fn currency_amount(text: &str) -> Decimal {
        text.chars()
            .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
            .collect::<String>()
            .parse()
            .unwrap_or(Decimal::ZERO)
    }

    /// Total order over values of the same kind.
    ///
    /// Values of different kinds compare equal, except that `Missing` is
    /// always first.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Missing, Self::Missing) => Ordering::Equal,
            (Self::Missing, _) => Ordering::Less,
            (_, Self::Missing) => Ordering::Greater,
            (Self::Text(a), Self::Text(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
            (Self::Number(a), Self::Number(b)) => a.cmp(b),
            (Self::Date(a), Self::Date(b)) => a.cmp(b),
            (Self::Timestamp(a), Self::Timestamp(b)) => a.cmp(b),
            (Self::Currency(a), Self::Currency(b)) => {
                Self::currency_amount(a).cmp(&Self::currency_amount(b))
            }
            _ => Ordering::Equal,
        }
    }
}

/// A row type that can be sorted by named columns.
pub trait Sortable {
    /// Table name used in error messages.
    const TABLE: &'static str;
    /// Column keys accepted by [`Sortable::sort_value`].
    const SORT_KEYS: &'static [&'static str];
    /// Column and direction before any header click.
    const DEFAULT_SORT: (&'static str, SortDirection);
    /// Direction a column starts in when first clicked.
    const NEW_KEY_DIRECTION: SortDirection;

    /// The value of column `key`. `key` is one of [`Sortable::SORT_KEYS`].
    fn sort_value(&self, key: &str) -> SortValue<'_>;
}

/// Resolve `key` to the table's canonical column name.
///
/// # Errors
///
/// Returns `AnalyticsError::UnknownSortKey` if the table has no such column.
pub fn resolve_key<T: Sortable>(key: &str) -> Result<&'static str> {
    T::SORT_KEYS
        .iter()
        .copied()
        .find(|k| k.eq_ignore_ascii_case(key.trim()))
        .ok_or_else(|| AnalyticsError::UnknownSortKey {
            table: T::TABLE,
            key: key.to_string(),
        })
}

/// Return `rows` ordered by `state`.
///
/// # Errors
///
/// Returns `AnalyticsError::UnknownSortKey` if `state.key` is not a column of `T`.
pub fn sort_rows<'a, T, I>(rows: I, state: &SortState) -> Result<Vec<&'a T>>
where
    T: Sortable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let key = resolve_key::<T>(&state.key)?;
    let mut sorted: Vec<&T> = rows.into_iter().collect();
    sorted.sort_by(|a, b| {
        let cmp = a.sort_value(key).compare(&b.sort_value(key));
        match state.direction {
            SortDirection::Asc => cmp,
            SortDirection::Desc => cmp.reverse(),
        }
    });
    Ok(sorted)
}

impl Sortable for Order {
    const TABLE: &'static str = "orders";
    const SORT_KEYS: &'static [&'static str] = &[
        "id",
        "date",
        "customer",
        "product",
        "total",
        "status",
        "payment_method",
    ];
    const DEFAULT_SORT: (&'static str, SortDirection) = ("date", SortDirection::Desc);
    const NEW_KEY_DIRECTION: SortDirection = SortDirection::Asc;

    fn sort_value(&self, key: &str) -> SortValue<'_> {
        match key {
            "id" => SortValue::Text(self.id.as_str()),
            "date" => SortValue::Timestamp(self.date),
            "customer" => SortValue::Text(&self.customer.name),
            "product" => SortValue::Text(&self.product.name),
            "total" => SortValue::Number(self.total.amount()),
            "status" => SortValue::Text(self.status.as_str()),
            "payment_method" => SortValue::Text(self.payment_method.label()),
            _ => SortValue::Missing,
        }
    }
}

impl Sortable for Customer {
    const TABLE: &'static str = "customers";
    const SORT_KEYS: &'static [&'static str] = &[
        "name",
        "email",
        "total_spent",
        "orders",
        "tier",
        "last_order",
        "first_purchase",
        "location",
    ];
    const DEFAULT_SORT: (&'static str, SortDirection) = ("total_spent", SortDirection::Desc);
    const NEW_KEY_DIRECTION: SortDirection = SortDirection::Desc;

    fn sort_value(&self, key: &str) -> SortValue<'_> {
        match key {
            "name" => SortValue::Text(&self.name),
            "email" => SortValue::Text(self.email.as_str()),
            "total_spent" => SortValue::Number(self.total_spent.amount()),
            "orders" => SortValue::number(self.orders),
            "tier" => SortValue::Text(self.tier.label()),
            "last_order" => SortValue::Date(self.last_order),
            "first_purchase" => SortValue::Date(self.first_purchase_date),
            "location" => SortValue::Text(self.location.label()),
            _ => SortValue::Missing,
        }
    }
}

impl Sortable for ProductPerformance {
    const TABLE: &'static str = "products";
    const SORT_KEYS: &'static [&'static str] = &[
        "name",
        "price",
        "sales",
        "status",
        "inventory",
        "conversion",
        "profit",
        "margin",
        "category",
    ];
    const DEFAULT_SORT: (&'static str, SortDirection) = ("sales", SortDirection::Desc);
    const NEW_KEY_DIRECTION: SortDirection = SortDirection::Desc;

    fn sort_value(&self, key: &str) -> SortValue<'_> {
        match key {
            "name" => SortValue::Text(&self.name),
            "price" => SortValue::Currency(&self.price),
            "sales" => SortValue::number(self.sales),
            "status" => SortValue::Text(self.status.as_str()),
            "inventory" => SortValue::number(self.inventory),
            "conversion" => {
                SortValue::Number(Decimal::try_from(self.conversion).unwrap_or_default())
            }
            "profit" => SortValue::Currency(&self.profit),
            "margin" => SortValue::number(self.margin),
            "category" => SortValue::Text(&self.category),
            _ => SortValue::Missing,
        }
    }
}

impl Sortable for InventoryItem {
    const TABLE: &'static str = "inventory";
    const SORT_KEYS: &'static [&'static str] = &[
        "name",
        "sku",
        "stock",
        "value",
        "category",
        "threshold",
        "status",
    ];
    const DEFAULT_SORT: (&'static str, SortDirection) = ("name", SortDirection::Asc);
    const NEW_KEY_DIRECTION: SortDirection = SortDirection::Asc;

    fn sort_value(&self, key: &str) -> SortValue<'_> {
        match key {
            "name" => SortValue::Text(&self.name),
            "sku" => SortValue::Text(&self.sku),
            "stock" => SortValue::number(self.stock),
            "value" => SortValue::Number(self.value.amount()),
            "category" => SortValue::Text(&self.category),
            "threshold" => SortValue::number(self.threshold),
            "status" => SortValue::Text(self.status.label()),
            _ => SortValue::Missing,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use shop_pulse_core::OrderStatus;

    use super::*;
    use crate::derive::orders::tests::order;
    use crate::generate::inventory_items;

    #[test]
    fn test_click_toggles_and_resets() {
        let mut state = SortState::initial::<Order>();
        assert_eq!(state.key, "date");
        assert_eq!(state.direction, SortDirection::Desc);

        state.click("date");
        assert_eq!(state.direction, SortDirection::Asc);

        state.click("total");
        assert_eq!(state.key, "total");
        assert_eq!(state.direction, SortDirection::Asc);

        let mut products = SortState::initial::<ProductPerformance>();
        products.click("margin");
        assert_eq!(products.direction, SortDirection::Desc);
    }

    #[test]
    fn test_text_is_case_insensitive() {
        let a = SortValue::Text("apple");
        let b = SortValue::Text("Banana");
        assert_eq!(a.compare(&b), Ordering::Less);
        assert_eq!(SortValue::Text("ABC").compare(&SortValue::Text("abc")), Ordering::Equal);
    }

    #[test]
    fn test_currency_compares_numerically() {
        let small = SortValue::Currency("$999.99");
        let large = SortValue::Currency("$1,200.00");
        assert_eq!(small.compare(&large), Ordering::Less);

        let negative = SortValue::Currency("-$5.00");
        assert_eq!(negative.compare(&SortValue::Currency("$0.00")), Ordering::Less);
        assert_eq!(
            SortValue::Currency("n/a").compare(&SortValue::Currency("$0")),
            Ordering::Equal
        );
    }

    #[test]
    fn test_missing_sorts_first() {
        assert_eq!(
            SortValue::Missing.compare(&SortValue::number(0_u32)),
            Ordering::Less
        );
    }

    #[test]
    fn test_sort_orders_by_total() {
        let orders = vec![
            order("ORD-A", "2024-06-10T10:00:00Z", 30, OrderStatus::Pending),
            order("ORD-B", "2024-06-11T10:00:00Z", 10, OrderStatus::Pending),
            order("ORD-C", "2024-06-12T10:00:00Z", 20, OrderStatus::Pending),
        ];

        let asc = sort_rows(&orders, &SortState::new("total", SortDirection::Asc)).unwrap();
        let ids: Vec<&str> = asc.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["ORD-B", "ORD-C", "ORD-A"]);

        let desc = sort_rows(&orders, &SortState::new("TOTAL", SortDirection::Desc)).unwrap();
        let reversed: Vec<&str> = desc.iter().rev().map(|o| o.id.as_str()).collect();
        assert_eq!(reversed, ids);
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let orders = vec![
            order("ORD-1", "2024-06-10T10:00:00Z", 10, OrderStatus::Shipped),
            order("ORD-2", "2024-06-10T10:00:00Z", 10, OrderStatus::Pending),
            order("ORD-3", "2024-06-10T10:00:00Z", 10, OrderStatus::Shipped),
        ];
        for direction in [SortDirection::Asc, SortDirection::Desc] {
            let sorted = sort_rows(&orders, &SortState::new("total", direction)).unwrap();
            let ids: Vec<&str> = sorted.iter().map(|o| o.id.as_str()).collect();
            assert_eq!(ids, vec!["ORD-1", "ORD-2", "ORD-3"]);
        }
    }

    #[test]
    fn test_unknown_key_is_an_error() {
        let orders: Vec<Order> = Vec::new();
        let err = sort_rows(&orders, &SortState::new("colour", SortDirection::Asc)).unwrap_err();
        assert_eq!(
            err,
            AnalyticsError::UnknownSortKey {
                table: "orders",
                key: "colour".to_string()
            }
        );
    }

    #[test]
    fn test_sort_inventory_by_stock() {
        let items = inventory_items();
        let sorted = sort_rows(&items, &SortState::new("stock", SortDirection::Desc)).unwrap();
        assert_eq!(sorted[0].sku, "TSH-001");
        assert_eq!(sorted.last().unwrap().stock, 0);
    }
}
