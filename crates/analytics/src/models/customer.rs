use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shop_pulse_core::{CustomerId, CustomerTier, Email, Money, Region};

/// A store customer with lifetime totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: Email,
    pub avatar: String,
    pub total_spent: Money,
    /// Lifetime order count.
    pub orders: u32,
    pub tier: CustomerTier,
    pub last_order: NaiveDate,
    pub first_purchase_date: NaiveDate,
    pub location: Region,
}

impl Customer {
    /// Short last-order label, e.g. "Mar 7".
    #[must_use]
    pub fn last_order_label(&self) -> String {
        self.last_order.format("%b %-d").to_string()
    }

    /// Full first-purchase label, e.g. "Mar 7, 2023".
    #[must_use]
    pub fn first_purchase_label(&self) -> String {
        self.first_purchase_date.format("%b %-d, %Y").to_string()
    }
}
