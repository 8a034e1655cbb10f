use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};
use serde::Serialize;
use shop_pulse_core::OrderStatus;

use super::Segment;
use crate::error::{AnalyticsError, Result};
use crate::models::Order;

/// Longest window [`order_counts_by_day`] accepts.
pub const MAX_DAYS: u32 = 366;

/// Order volume for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyOrderCounts {
    /// Short weekday name, e.g. "Mon".
    pub day: String,
    pub date: NaiveDate,
    pub total: usize,
    pub delivered: usize,
    pub processing: usize,
    pub cancelled: usize,
}

impl DailyOrderCounts {
    fn empty(date: NaiveDate) -> Self {
        Self {
            day: date.format("%a").to_string(),
            date,
            total: 0,
            delivered: 0,
            processing: 0,
            cancelled: 0,
        }
    }

    fn add(&mut self, status: OrderStatus) {
        self.total += 1;
        match status {
            OrderStatus::Delivered => self.delivered += 1,
            OrderStatus::Processing => self.processing += 1,
            OrderStatus::Cancelled => self.cancelled += 1,
            OrderStatus::Pending | OrderStatus::Shipped => {}
        }
    }
}

/// Per-day order counts for the `days` days ending at `reference`, oldest first.
///
/// # Errors
///
/// Returns `AnalyticsError::OutOfRange` if `days` is not within
/// `1..=MAX_DAYS` or the window starts before the earliest representable date.
pub fn order_counts_by_day<'a, I>(
    orders: I,
    reference: NaiveDate,
    days: u32,
) -> Result<Vec<DailyOrderCounts>>
where
    I: IntoIterator<Item = &'a Order>,
{
    if !(1..=MAX_DAYS).contains(&days) {
        return Err(AnalyticsError::OutOfRange(format!(
            "days must be between 1 and {MAX_DAYS}, got {days}"
        )));
    }
    let first = reference
        .checked_sub_days(Days::new(u64::from(days - 1)))
        .ok_or_else(|| {
            AnalyticsError::OutOfRange(format!("{days} days before {reference}"))
        })?;

    let mut counts: Vec<DailyOrderCounts> = (0..u64::from(days))
        .filter_map(|offset| first.checked_add_days(Days::new(offset)))
        .map(DailyOrderCounts::empty)
        .collect();

    for order in orders {
        let offset = (order.date.date_naive() - first).num_days();
        if let Some(day) = usize::try_from(offset).ok().and_then(|i| counts.get_mut(i)) {
            day.add(order.status);
        }
    }
    Ok(counts)
}

/// Orders per status. Every status is present, including empty ones.
#[must_use]
pub fn status_counts<'a, I>(orders: I) -> BTreeMap<OrderStatus, usize>
where
    I: IntoIterator<Item = &'a Order>,
{
    let mut counts: BTreeMap<OrderStatus, usize> =
        OrderStatus::ALL.into_iter().map(|s| (s, 0)).collect();
    for order in orders {
        *counts.entry(order.status).or_default() += 1;
    }
    counts
}

/// Count and share of each status, in pipeline order.
#[must_use]
pub fn order_status_distribution<'a, I>(orders: I) -> Vec<Segment>
where
    I: IntoIterator<Item = &'a Order>,
{
    let counts = status_counts(orders);
    let total = counts.values().sum();
    counts
        .into_iter()
        .map(|(status, count)| Segment::new(status.label(), count, total))
        .collect()
}

/// Orders whose ID, customer name or product name contains `query`,
/// ignoring case. A blank query matches everything.
#[must_use]
pub fn search_orders<'a>(orders: &'a [Order], query: &str) -> Vec<&'a Order> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return orders.iter().collect();
    }
    orders.iter().filter(|o| o.matches(&needle)).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod tests {
    use chrono::{DateTime, Utc};
    use shop_pulse_core::{CustomerId, Email, Money, OrderId, PaymentMethod, ProductId};

    use super::*;
    use crate::models::{CustomerSnapshot, ProductSnapshot};

    pub(crate) fn order(id: &str, date: &str, total_dollars: i64, status: OrderStatus) -> Order {
        let date: DateTime<Utc> = date.parse().unwrap();
        Order {
            id: OrderId::new(id),
            date,
            customer: CustomerSnapshot {
                id: CustomerId::new("cust-1"),
                name: "Grace Hopper".to_string(),
                email: Email::parse("grace.hopper@example.com").unwrap(),
                avatar: String::new(),
            },
            product: ProductSnapshot {
                id: ProductId::new("prod-1"),
                name: "Rustic Steel Lamp".to_string(),
                price: Money::from_dollars(total_dollars),
                quantity: 1,
            },
            total: Money::from_dollars(total_dollars),
            status,
            payment_method: PaymentMethod::PayPal,
            shipping_address: "1 Main St.".to_string(),
            tracking_number: None,
        }
    }

    #[test]
    fn test_status_distribution_example() {
        let orders = vec![
            order("ORD-AAAAAA", "2024-06-10T10:00:00Z", 100, OrderStatus::Delivered),
            order("ORD-BBBBBB", "2024-06-11T10:00:00Z", 50, OrderStatus::Cancelled),
        ];
        let distribution = order_status_distribution(&orders);
        assert_eq!(distribution.len(), 5);

        let delivered = distribution.iter().find(|s| s.name == "Delivered").unwrap();
        assert_eq!((delivered.value, delivered.percentage), (1, 50));
        let cancelled = distribution.iter().find(|s| s.name == "Cancelled").unwrap();
        assert_eq!((cancelled.value, cancelled.percentage), (1, 50));
        let pending = distribution.iter().find(|s| s.name == "Pending").unwrap();
        assert_eq!((pending.value, pending.percentage), (0, 0));
    }

    #[test]
    fn test_status_counts_include_empty_statuses() {
        let counts = status_counts(no_orders());
        assert_eq!(counts.len(), 5);
        assert!(counts.values().all(|&c| c == 0));
    }

    #[test]
    fn test_counts_by_day() {
        let reference = NaiveDate::from_ymd_opt(2024, 6, 16).unwrap();
        let orders = vec![
            order("ORD-1", "2024-06-16T23:59:59Z", 10, OrderStatus::Delivered),
            order("ORD-2", "2024-06-16T00:00:00Z", 10, OrderStatus::Processing),
            order("ORD-3", "2024-06-10T08:00:00Z", 10, OrderStatus::Cancelled),
            order("ORD-4", "2024-06-09T08:00:00Z", 10, OrderStatus::Cancelled),
        ];

        let days = order_counts_by_day(&orders, reference, 7).unwrap();
        assert_eq!(days.len(), 7);
        assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2024, 6, 10).unwrap());
        assert_eq!(days[0].day, "Mon");
        assert_eq!(days[0].cancelled, 1);
        assert_eq!(days[6].day, "Sun");
        assert_eq!(days[6].total, 2);
        assert_eq!(days[6].delivered, 1);
        assert_eq!(days[6].processing, 1);
        assert_eq!(days.iter().map(|d| d.total).sum::<usize>(), 3);
    }

    #[test]
    fn test_search_orders() {
        let orders = vec![
            order("ORD-ABC123", "2024-06-10T10:00:00Z", 10, OrderStatus::Pending),
            order("ORD-XYZ789", "2024-06-10T10:00:00Z", 10, OrderStatus::Pending),
        ];
        assert_eq!(search_orders(&orders, "abc").len(), 1);
        assert_eq!(search_orders(&orders, "HOPPER").len(), 2);
        assert_eq!(search_orders(&orders, "lamp").len(), 2);
        assert_eq!(search_orders(&orders, "  ").len(), 2);
        assert!(search_orders(&orders, "nothing").is_empty());
    }

    #[test]
    fn test_counts_by_day_accept_borrowed_rows() {
        let reference = NaiveDate::from_ymd_opt(2024, 6, 16).unwrap();
        let orders = vec![
            order("ORD-1", "2024-06-16T09:00:00Z", 10, OrderStatus::Delivered),
            order("ORD-2", "2024-06-15T09:00:00Z", 10, OrderStatus::Shipped),
        ];
        let delivered: Vec<&Order> = orders
            .iter()
            .filter(|o| o.status == OrderStatus::Delivered)
            .collect();

        let days = order_counts_by_day(delivered.iter().copied(), reference, 2).unwrap();
        assert_eq!(days.iter().map(|d| d.total).sum::<usize>(), 1);

        let distribution = order_status_distribution(delivered);
        assert_eq!(distribution[3].name, "Delivered");
        assert_eq!(distribution[3].percentage, 100);
    }

    fn no_orders() -> std::iter::Empty<&'static Order> {
        std::iter::empty()
    }

    #[test]
    fn test_day_window_is_bounded() {
        let reference = NaiveDate::from_ymd_opt(2024, 6, 16).unwrap();
        for days in [0, MAX_DAYS + 1, 200_000_000] {
            let err = order_counts_by_day(no_orders(), reference, days).unwrap_err();
            assert!(matches!(err, AnalyticsError::OutOfRange(_)), "{days}");
        }
        let year = order_counts_by_day(no_orders(), reference, MAX_DAYS).unwrap();
        assert_eq!(year.len(), 366);
        assert_eq!(year.last().unwrap().date, reference);
    }

    #[test]
    fn test_day_window_before_calendar_start() {
        let err = order_counts_by_day(no_orders(), NaiveDate::MIN, 2).unwrap_err();
        assert!(matches!(err, AnalyticsError::OutOfRange(_)));
        assert_eq!(order_counts_by_day(no_orders(), NaiveDate::MIN, 1).unwrap().len(), 1);
    }
}
