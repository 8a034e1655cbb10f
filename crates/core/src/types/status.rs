//! Status and segment enums for the dashboard entities.

use serde::{Deserialize, Serialize};

/// Order lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    #[default]
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Every status, in pipeline order.
    pub const ALL: [Self; 5] = [
        Self::Pending,
        Self::Processing,
        Self::Shipped,
        Self::Delivered,
        Self::Cancelled,
    ];

    /// Lower-case key used in filters and URLs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }

    /// Capitalized label for charts and badges.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Processing => "Processing",
            Self::Shipped => "Shipped",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Whether a carrier tracking number exists for orders in this status.
    #[must_use]
    pub const fn has_tracking(self) -> bool {
        matches!(self, Self::Shipped | Self::Delivered)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("invalid order status: {s}"))
    }
}

/// Customer segment label driving spend and order-count ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CustomerTier {
    New,
    Regular,
    #[serde(rename = "VIP")]
    Vip,
}

impl CustomerTier {
    /// Every tier, from newest to most valuable.
    pub const ALL: [Self; 3] = [Self::New, Self::Regular, Self::Vip];

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Regular => "Regular",
            Self::Vip => "VIP",
        }
    }

    /// Customers in any tier other than `New` count as returning.
    #[must_use]
    pub const fn is_returning(self) -> bool {
        !matches!(self, Self::New)
    }
}

impl std::fmt::Display for CustomerTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Geographic region a customer buys from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "North America")]
    NorthAmerica,
    Europe,
    Asia,
    #[serde(rename = "South America")]
    SouthAmerica,
    Australia,
    Africa,
}

impl Region {
    pub const ALL: [Self; 6] = [
        Self::NorthAmerica,
        Self::Europe,
        Self::Asia,
        Self::SouthAmerica,
        Self::Australia,
        Self::Africa,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NorthAmerica => "North America",
            Self::Europe => "Europe",
            Self::Asia => "Asia",
            Self::SouthAmerica => "South America",
            Self::Australia => "Australia",
            Self::Africa => "Africa",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Category of an installed store app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AppCategory {
    Marketing,
    Upsell,
    Loyalty,
    Shipping,
    Support,
    Utility,
}

impl AppCategory {
    pub const ALL: [Self; 6] = [
        Self::Marketing,
        Self::Upsell,
        Self::Loyalty,
        Self::Shipping,
        Self::Support,
        Self::Utility,
    ];

    /// Categories whose apps generate attributable revenue.
    ///
    /// Utility apps save time instead and are reported separately.
    pub const REVENUE_BEARING: [Self; 5] = [
        Self::Marketing,
        Self::Upsell,
        Self::Loyalty,
        Self::Shipping,
        Self::Support,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Marketing => "Marketing",
            Self::Upsell => "Upsell",
            Self::Loyalty => "Loyalty",
            Self::Shipping => "Shipping",
            Self::Support => "Support",
            Self::Utility => "Utility",
        }
    }
}

impl std::fmt::Display for AppCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for AppCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("invalid app category: {s}"))
    }
}

/// How an order was paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "Credit Card")]
    CreditCard,
    #[serde(rename = "PayPal")]
    PayPal,
    #[serde(rename = "Apple Pay")]
    ApplePay,
    #[serde(rename = "Google Pay")]
    GooglePay,
    #[serde(rename = "Bank Transfer")]
    BankTransfer,
}

impl PaymentMethod {
    pub const ALL: [Self; 5] = [
        Self::CreditCard,
        Self::PayPal,
        Self::ApplePay,
        Self::GooglePay,
        Self::BankTransfer,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::CreditCard => "Credit Card",
            Self::PayPal => "PayPal",
            Self::ApplePay => "Apple Pay",
            Self::GooglePay => "Google Pay",
            Self::BankTransfer => "Bank Transfer",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Sales trend of a product over the reporting window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductTrend {
    Trending,
    Stable,
    Declining,
}

impl ProductTrend {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trending => "trending",
            Self::Stable => "stable",
            Self::Declining => "declining",
        }
    }
}

/// Stock level classification of an inventory item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StockStatus {
    #[serde(rename = "In Stock")]
    InStock,
    #[serde(rename = "Low Stock")]
    LowStock,
    Critical,
    #[serde(rename = "Out of Stock")]
    OutOfStock,
}

impl StockStatus {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::InStock => "In Stock",
            Self::LowStock => "Low Stock",
            Self::Critical => "Critical",
            Self::OutOfStock => "Out of Stock",
        }
    }

    /// Whether the item needs reordering soon but is not yet sold out.
    #[must_use]
    pub const fn is_low(self) -> bool {
        matches!(self, Self::LowStock | Self::Critical)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_order_status_from_str() {
        assert_eq!("shipped".parse::<OrderStatus>(), Ok(OrderStatus::Shipped));
        assert_eq!(" Delivered ".parse::<OrderStatus>(), Ok(OrderStatus::Delivered));
        assert!("lost".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_tracking_only_after_dispatch() {
        let tracked: Vec<_> = OrderStatus::ALL
            .into_iter()
            .filter(|s| s.has_tracking())
            .collect();
        assert_eq!(tracked, vec![OrderStatus::Shipped, OrderStatus::Delivered]);
    }

    #[test]
    fn test_tier_serializes_as_label() {
        assert_eq!(serde_json::to_string(&CustomerTier::Vip).unwrap(), "\"VIP\"");
        assert!(CustomerTier::Regular.is_returning());
        assert!(!CustomerTier::New.is_returning());
    }

    #[test]
    fn test_region_serializes_with_spaces() {
        assert_eq!(
            serde_json::to_string(&Region::NorthAmerica).unwrap(),
            "\"North America\""
        );
    }

    #[test]
    fn test_app_category_from_str() {
        assert_eq!("upsell".parse::<AppCategory>(), Ok(AppCategory::Upsell));
        assert!(!AppCategory::REVENUE_BEARING.contains(&AppCategory::Utility));
    }
}
