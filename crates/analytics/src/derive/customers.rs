//! Customer segmentation, value and retention views.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;
use shop_pulse_core::{Money, Region};

use super::{Segment, percent_of, round_half_up};
use crate::error::{AnalyticsError, Result};
use crate::models::Customer;

/// Rows shown in the top-customer tables.
pub const TOP_CUSTOMER_LIMIT: usize = 10;

/// Most months [`cohort_retention`] tracks.
pub const MAX_COHORT_MONTHS: u32 = 120;

/// A money amount for a customer group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupAmount {
    pub name: String,
    pub value: Money,
}

/// Customers in a lifetime-value range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClvBucket {
    pub range: String,
    pub value: u32,
}

/// One first-purchase-month cohort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CohortRow {
    /// Cohort month, e.g. "Jan 2023".
    pub date: String,
    pub customers: usize,
    /// Percent of the cohort still ordering `k` months later. `None` for
    /// months that have not happened yet.
    pub retention: Vec<Option<u32>>,
}

/// Cohort retention grid, oldest cohort first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CohortTable {
    /// Column labels, "Month 1" onwards.
    pub months: Vec<String>,
    pub cohorts: Vec<CohortRow>,
}

/// Highest spenders first.
#[must_use]
pub fn top_customers_by_spending(customers: &[Customer], n: usize) -> Vec<&Customer> {
    let mut sorted: Vec<&Customer> = customers.iter().collect();
    sorted.sort_by(|a, b| b.total_spent.cmp(&a.total_spent));
    sorted.truncate(n);
    sorted
}

/// Most frequent buyers first.
#[must_use]
pub fn top_customers_by_orders(customers: &[Customer], n: usize) -> Vec<&Customer> {
    let mut sorted: Vec<&Customer> = customers.iter().collect();
    sorted.sort_by(|a, b| b.orders.cmp(&a.orders));
    sorted.truncate(n);
    sorted
}

fn split_by_returning(customers: &[Customer]) -> (Vec<&Customer>, Vec<&Customer>) {
    customers.iter().partition(|c| !c.tier.is_returning())
}

/// New versus returning customer counts.
#[must_use]
pub fn user_type_data(customers: &[Customer]) -> Vec<Segment> {
    let (new, returning) = split_by_returning(customers);
    vec![
        Segment::new("New", new.len(), customers.len()),
        Segment::new("Returning", returning.len(), customers.len()),
    ]
}

/// Lifetime spend of new versus returning customers.
#[must_use]
pub fn user_type_revenue(customers: &[Customer]) -> Vec<GroupAmount> {
    let (new, returning) = split_by_returning(customers);
    let revenue = |group: &[&Customer]| group.iter().map(|c| c.total_spent).sum::<Money>();
    vec![
        GroupAmount {
            name: "New".to_string(),
            value: revenue(&new),
        },
        GroupAmount {
            name: "Returning".to_string(),
            value: revenue(&returning),
        },
    ]
}

/// Average order value of new versus returning customers, in whole dollars.
#[must_use]
pub fn user_type_aov(customers: &[Customer]) -> Vec<GroupAmount> {
    let (new, returning) = split_by_returning(customers);
    let aov = |group: &[&Customer]| {
        let spent: Money = group.iter().map(|c| c.total_spent).sum();
        let orders: u64 = group.iter().map(|c| u64::from(c.orders)).sum();
        if orders == 0 {
            Money::ZERO
        } else {
            Money::from_dollars(round_half_up(spent.amount() / Decimal::from(orders)))
        }
    };
    vec![
        GroupAmount {
            name: "New".to_string(),
            value: aov(&new),
        },
        GroupAmount {
            name: "Returning".to_string(),
            value: aov(&returning),
        },
    ]
}

/// Customers per region, in order of first appearance.
#[must_use]
pub fn customers_by_location(customers: &[Customer]) -> Vec<Segment> {
    let mut counts: Vec<(Region, usize)> = Vec::new();
    for customer in customers {
        match counts.iter_mut().find(|(region, _)| *region == customer.location) {
            Some((_, count)) => *count += 1,
            None => counts.push((customer.location, 1)),
        }
    }
    counts
        .into_iter()
        .map(|(region, count)| Segment::new(region.label(), count, customers.len()))
        .collect()
}

/// Spend brackets and their inclusive upper bound in dollars.
const SPEND_BRACKETS: [(&str, Option<i64>); 5] = [
    ("$0-$100", Some(100)),
    ("$101-$500", Some(500)),
    ("$501-$1000", Some(1_000)),
    ("$1001-$2000", Some(2_000)),
    ("$2000+", None),
];

/// Customers per lifetime-spend bracket.
///
/// Each customer lands in the first bracket whose upper bound covers their
/// spend, so bracket counts always add up to the customer count.
#[must_use]
pub fn customers_by_spend_bracket(customers: &[Customer]) -> Vec<Segment> {
    let mut counts = [0_usize; SPEND_BRACKETS.len()];
    for customer in customers {
        let bracket = SPEND_BRACKETS
            .iter()
            .position(|(_, max)| max.is_none_or(|max| customer.total_spent <= Money::from_dollars(max)))
            .unwrap_or(SPEND_BRACKETS.len() - 1);
        if let Some(count) = counts.get_mut(bracket) {
            *count += 1;
        }
    }
    SPEND_BRACKETS
        .iter()
        .zip(counts)
        .map(|((name, _), count)| Segment::new(*name, count, customers.len()))
        .collect()
}

const FREQUENCY_BANDS: [(&str, Option<u32>); 5] = [
    ("One-time", Some(1)),
    ("Occasional (2-3)", Some(3)),
    ("Regular (4-6)", Some(6)),
    ("Frequent (7-12)", Some(12)),
    ("Power (13+)", None),
];

/// Customers per lifetime order-count band.
#[must_use]
pub fn customers_by_purchase_frequency(customers: &[Customer]) -> Vec<Segment> {
    let mut counts = [0_usize; FREQUENCY_BANDS.len()];
    for customer in customers {
        let band = FREQUENCY_BANDS
            .iter()
            .position(|(_, max)| max.is_none_or(|max| customer.orders <= max))
            .unwrap_or(FREQUENCY_BANDS.len() - 1);
        if let Some(count) = counts.get_mut(band) {
            *count += 1;
        }
    }
    FREQUENCY_BANDS
        .iter()
        .zip(counts)
        .map(|((name, _), count)| Segment::new(*name, count, customers.len()))
        .collect()
}

/// Reference lifetime-value distribution from the last customer survey.
#[must_use]
pub fn clv_distribution() -> Vec<ClvBucket> {
    [
        ("$0-$100", 18),
        ("$101-$250", 26),
        ("$251-$500", 23),
        ("$501-$1000", 16),
        ("$1001-$2000", 12),
        ("$2000+", 5),
    ]
    .into_iter()
    .map(|(range, value)| ClvBucket {
        range: range.to_string(),
        value,
    })
    .collect()
}

fn month_index(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 12 + i64::from(date.month0())
}

fn month_label(index: i64) -> String {
    i32::try_from(index.div_euclid(12))
        .ok()
        .zip(u32::try_from(index.rem_euclid(12) + 1).ok())
        .and_then(|(year, month)| NaiveDate::from_ymd_opt(year, month, 1))
        .map(|first| first.format("%b %Y").to_string())
        .unwrap_or_default()
}

fn month_columns(months: u32) -> Vec<String> {
    (1..=months).map(|m| format!("Month {m}")).collect()
}

/// Retention by first-purchase month over the `months` months ending at
/// `reference`.
///
/// Column `k` is the share of a cohort whose last order falls in the
/// cohort's month plus `k` or later. Column 0 is 100 for any non-empty
/// cohort. Cells past `reference` and all cells of empty cohorts are `None`.
///
/// # Errors
///
/// Returns `AnalyticsError::OutOfRange` if `months` is not within
/// `1..=MAX_COHORT_MONTHS`.
pub fn cohort_retention(
    customers: &[Customer],
    reference: NaiveDate,
    months: u32,
) -> Result<CohortTable> {
    if !(1..=MAX_COHORT_MONTHS).contains(&months) {
        return Err(AnalyticsError::OutOfRange(format!(
            "months must be between 1 and {MAX_COHORT_MONTHS}, got {months}"
        )));
    }
    let current = month_index(reference);
    let span = i64::from(months);

    let cohorts = (0..span)
        .map(|offset| {
            let cohort = current - (span - 1 - offset);
            let members: Vec<&Customer> = customers
                .iter()
                .filter(|c| month_index(c.first_purchase_date) == cohort)
                .collect();

            let retention = (0..span)
                .map(|k| {
                    if members.is_empty() || cohort + k > current {
                        return None;
                    }
                    let active = members
                        .iter()
                        .filter(|c| month_index(c.last_order) >= cohort + k)
                        .count();
                    Some(percent_of(active, members.len()))
                })
                .collect();

            CohortRow {
                date: month_label(cohort),
                customers: members.len(),
                retention,
            }
        })
        .collect();

    Ok(CohortTable {
        months: month_columns(months),
        cohorts,
    })
}

/// The January-June 2023 cohort study used as the dashboard's reference table.
#[must_use]
pub fn sample_cohort_retention() -> CohortTable {
    const ROWS: [(&str, usize, [u32; 6]); 6] = [
        ("Jan 2023", 145, [100, 65, 48, 42, 38, 35]),
        ("Feb 2023", 162, [100, 68, 50, 43, 40, 0]),
        ("Mar 2023", 138, [100, 62, 46, 40, 0, 0]),
        ("Apr 2023", 156, [100, 70, 52, 0, 0, 0]),
        ("May 2023", 170, [100, 64, 0, 0, 0, 0]),
        ("Jun 2023", 182, [100, 0, 0, 0, 0, 0]),
    ];

    let cohorts = ROWS
        .iter()
        .enumerate()
        .map(|(row, (date, customers, retention))| CohortRow {
            date: (*date).to_string(),
            customers: *customers,
            // Each later cohort has one fewer elapsed month.
            retention: retention
                .iter()
                .enumerate()
                .map(|(k, pct)| (k + row < ROWS.len()).then_some(*pct))
                .collect(),
        })
        .collect();

    CohortTable {
        months: month_columns(6),
        cohorts,
    }
}
