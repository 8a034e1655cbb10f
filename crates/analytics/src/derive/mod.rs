//! Pure aggregations over dataset slices.
//!
//! Nothing here is cached: every view is recomputed from the base
//! collections on each call. Percentages round half up to whole numbers and
//! are `0` when the total is empty.

pub mod apps;
pub mod customers;
pub mod inventory;
pub mod orders;
pub mod performance;
pub mod products;
pub mod revenue;
pub mod sales;

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;
use shop_pulse_core::Money;

/// A labelled count with its share of the whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub name: String,
    pub value: usize,
    /// Share of the total, in whole percent.
    pub percentage: u32,
}

impl Segment {
    #[must_use]
    pub fn new(name: impl Into<String>, value: usize, total: usize) -> Self {
        Self {
            name: name.into(),
            value,
            percentage: percent_of(value, total),
        }
    }
}

/// `part / total` as a whole percentage, rounded half up.
#[must_use]
pub fn percent_of(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let rounded = (part.saturating_mul(200) + total) / (total * 2);
    u32::try_from(rounded).unwrap_or(u32::MAX)
}

/// `part / whole` as a percentage with one decimal, midpoints away from zero.
///
/// A zero `whole` yields `0`.
#[must_use]
pub fn percent_tenths(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        return Decimal::ZERO;
    }
    (part / whole * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

/// Round to the nearest integer, halves toward positive infinity.
#[must_use]
pub fn round_half_up(value: Decimal) -> i64 {
    (value + Decimal::new(5, 1)).floor().to_i64().unwrap_or_default()
}

/// Return on investment in whole percent: `(revenue - cost) / cost * 100`.
///
/// A zero cost yields `0`.
#[must_use]
pub fn app_roi(cost: Money, revenue: Money) -> i64 {
    if cost.is_zero() {
        return 0;
    }
    round_half_up((revenue.amount() - cost.amount()) / cost.amount() * Decimal::ONE_HUNDRED)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_of_rounds_half_up() {
        assert_eq!(percent_of(1, 2), 50);
        assert_eq!(percent_of(1, 3), 33);
        assert_eq!(percent_of(2, 3), 67);
        assert_eq!(percent_of(1, 8), 13);
        assert_eq!(percent_of(5, 5), 100);
    }

    #[test]
    fn test_percent_of_empty_total() {
        assert_eq!(percent_of(0, 0), 0);
        assert_eq!(percent_of(3, 0), 0);
    }

    #[test]
    fn test_percent_tenths() {
        assert_eq!(percent_tenths(Decimal::from(1), Decimal::from(3)), Decimal::new(333, 1));
        assert_eq!(percent_tenths(Decimal::from(-1), Decimal::from(8)), Decimal::new(-125, 1));
        assert_eq!(percent_tenths(Decimal::from(5), Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(Decimal::new(25, 1)), 3);
        assert_eq!(round_half_up(Decimal::new(24, 1)), 2);
        assert_eq!(round_half_up(Decimal::new(-25, 1)), -2);
        assert_eq!(round_half_up(Decimal::new(-26, 1)), -3);
    }

    #[test]
    fn test_app_roi() {
        // Utility apps: 8h * $25 * 4 weeks against $49.99.
        assert_eq!(app_roi(Money::from_cents(4_999), Money::from_dollars(800)), 1_500);
        assert_eq!(app_roi(Money::ZERO, Money::from_dollars(100)), 0);
        assert_eq!(app_roi(Money::from_dollars(100), Money::from_dollars(50)), -50);
    }
}
