//! Order table filters.

use chrono::NaiveDate;
use serde::Serialize;
use shop_pulse_core::{Money, OrderStatus};

use crate::error::{AnalyticsError, Result};
use crate::models::Order;

/// Filters applied to the orders table.
///
/// Every criterion is optional. The date range only takes effect once both
/// ends are set; a single price bound is enough for the price filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrderFilter {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub status: Option<OrderStatus>,
    pub min_price: Option<Money>,
    pub max_price: Option<Money>,
}

impl OrderFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to orders placed between `from` and `to`, inclusive.
    #[must_use]
    pub const fn date_range(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.from = Some(from);
        self.to = Some(to);
        self
    }

    #[must_use]
    pub const fn status(mut self, status: Option<OrderStatus>) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub const fn min_price(mut self, min: Money) -> Self {
        self.min_price = Some(min);
        self
    }

    #[must_use]
    pub const fn max_price(mut self, max: Money) -> Self {
        self.max_price = Some(max);
        self
    }

    /// Parse a status select value. `"all"` clears the status filter.
    ///
    /// # Errors
    ///
    /// Returns `AnalyticsError::InvalidFilter` for an unknown status.
    pub fn status_from_param(value: &str) -> Result<Option<OrderStatus>> {
        if value.trim().eq_ignore_ascii_case("all") {
            return Ok(None);
        }
        value
            .parse::<OrderStatus>()
            .map(Some)
            .map_err(AnalyticsError::InvalidFilter)
    }

    /// Whether no criterion is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active_filters().is_empty()
    }

    fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.from.zip(self.to)
    }

    const fn has_price_filter(&self) -> bool {
        self.min_price.is_some() || self.max_price.is_some()
    }

    /// Reject combinations that can never match.
    ///
    /// # Errors
    ///
    /// Returns `AnalyticsError::InvalidFilter` if the minimum price is above
    /// the maximum or the range starts after it ends.
    pub fn validate(&self) -> Result<()> {
        if let (Some(min), Some(max)) = (self.min_price, self.max_price)
            && min > max
        {
            return Err(AnalyticsError::InvalidFilter(format!(
                "min price {min} is above max price {max}"
            )));
        }
        if let Some((from, to)) = self.date_bounds()
            && from > to
        {
            return Err(AnalyticsError::InvalidFilter(format!(
                "date range starts {from} after it ends {to}"
            )));
        }
        Ok(())
    }

    /// Whether `order` passes every active criterion.
    #[must_use]
    pub fn matches(&self, order: &Order) -> bool {
        if let Some((from, to)) = self.date_bounds() {
            let day = order.date.date_naive();
            if day < from || day > to {
                return false;
            }
        }
        if self.status.is_some_and(|status| order.status != status) {
            return false;
        }
        if self.has_price_filter() {
            let min = self.min_price.unwrap_or(Money::ZERO);
            if order.total < min || self.max_price.is_some_and(|max| order.total > max) {
                return false;
            }
        }
        true
    }

    /// Orders passing the filter, in their incoming order.
    ///
    /// # Errors
    ///
    /// Returns `AnalyticsError::InvalidFilter` if the filter fails [`OrderFilter::validate`].
    pub fn apply<'a, I>(&self, orders: I) -> Result<Vec<&'a Order>>
    where
        I: IntoIterator<Item = &'a Order>,
    {
        self.validate()?;
        Ok(orders.into_iter().filter(|o| self.matches(o)).collect())
    }

    /// Badge labels for the active criteria, e.g. `["Status: shipped"]`.
    #[must_use]
    pub fn active_filters(&self) -> Vec<String> {
        let mut labels = Vec::new();
        if self.date_bounds().is_some() {
            labels.push("Date range".to_string());
        }
        if let Some(status) = self.status {
            labels.push(format!("Status: {status}"));
        }
        if self.has_price_filter() {
            let min = self
                .min_price
                .map_or_else(|| "0".to_string(), |m| m.amount().normalize().to_string());
            let max = self
                .max_price
                .map_or_else(|| "∞".to_string(), |m| m.amount().normalize().to_string());
            labels.push(format!("Price: {min} - {max}"));
        }
        labels
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::derive::orders::tests::order;

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn sample() -> Vec<Order> {
        vec![
            order("ORD-1", "2024-06-01T00:00:00Z", 40, OrderStatus::Shipped),
            order("ORD-2", "2024-06-05T23:59:59Z", 120, OrderStatus::Delivered),
            order("ORD-3", "2024-06-06T00:00:00Z", 75, OrderStatus::Shipped),
            order("ORD-4", "2024-05-31T23:59:59Z", 300, OrderStatus::Pending),
        ]
    }

    fn ids(orders: &[&Order]) -> Vec<String> {
        orders.iter().map(|o| o.id.to_string()).collect()
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let orders = sample();
        let filter = OrderFilter::new();
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&orders).unwrap().len(), 4);
    }

    #[test]
    fn test_date_range_is_inclusive() {
        let orders = sample();
        let filter = OrderFilter::new().date_range(day("2024-06-01"), day("2024-06-05"));
        assert_eq!(ids(&filter.apply(&orders).unwrap()), vec!["ORD-1", "ORD-2"]);
    }

    #[test]
    fn test_half_open_date_range_is_ignored() {
        let orders = sample();
        let filter = OrderFilter {
            from: Some(day("2024-06-03")),
            ..OrderFilter::default()
        };
        assert_eq!(filter.apply(&orders).unwrap().len(), 4);
        assert!(filter.active_filters().is_empty());
    }

    #[test]
    fn test_status_and_price() {
        let orders = sample();
        let status = OrderFilter::status_from_param("shipped").unwrap();
        let filter = OrderFilter::new().status(status).min_price(Money::from_dollars(50));
        assert_eq!(ids(&filter.apply(&orders).unwrap()), vec!["ORD-3"]);

        let capped = OrderFilter::new().max_price(Money::from_dollars(75));
        assert_eq!(ids(&capped.apply(&orders).unwrap()), vec!["ORD-1", "ORD-3"]);
    }

    #[test]
    fn test_status_param() {
        assert_eq!(OrderFilter::status_from_param("all").unwrap(), None);
        assert_eq!(
            OrderFilter::status_from_param("Delivered").unwrap(),
            Some(OrderStatus::Delivered)
        );
        assert!(matches!(
            OrderFilter::status_from_param("lost"),
            Err(AnalyticsError::InvalidFilter(_))
        ));
    }

    #[test]
    fn test_inverted_bounds_are_rejected() {
        let orders = sample();
        let prices = OrderFilter::new()
            .min_price(Money::from_dollars(100))
            .max_price(Money::from_dollars(10));
        assert!(matches!(prices.apply(&orders), Err(AnalyticsError::InvalidFilter(_))));

        let dates = OrderFilter::new().date_range(day("2024-06-05"), day("2024-06-01"));
        assert!(dates.validate().is_err());
    }

    #[test]
    fn test_active_filter_labels() {
        let filter = OrderFilter::new()
            .date_range(day("2024-06-01"), day("2024-06-30"))
            .status(Some(OrderStatus::Shipped))
            .min_price(Money::from_cents(2_550));
        assert_eq!(
            filter.active_filters(),
            vec!["Date range", "Status: shipped", "Price: 25.5 - ∞"]
        );

        let max_only = OrderFilter::new().max_price(Money::from_dollars(200));
        assert_eq!(max_only.active_filters(), vec!["Price: 0 - 200"]);
    }
}
