use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shop_pulse_core::{CustomerId, Email, Money, OrderId, OrderStatus, PaymentMethod, ProductId};

/// Customer details copied into an order at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerSnapshot {
    pub id: CustomerId,
    pub name: String,
    pub email: Email,
    pub avatar: String,
}

/// Product details copied into an order at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSnapshot {
    pub id: ProductId,
    pub name: String,
    /// Unit price.
    pub price: Money,
    pub quantity: u32,
}

/// A single-line store order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub date: DateTime<Utc>,
    pub customer: CustomerSnapshot,
    pub product: ProductSnapshot,
    /// Unit price times quantity.
    pub total: Money,
    pub status: OrderStatus,
    pub payment_method: PaymentMethod,
    pub shipping_address: String,
    /// Carrier tracking number, set once the order has shipped.
    pub tracking_number: Option<String>,
}

impl Order {
    /// Case-insensitive match against the order ID, customer name or product name.
    ///
    /// `needle` must already be lower-cased.
    #[must_use]
    pub fn matches(&self, needle: &str) -> bool {
        self.id.as_str().to_lowercase().contains(needle)
            || self.customer.name.to_lowercase().contains(needle)
            || self.product.name.to_lowercase().contains(needle)
    }
}
