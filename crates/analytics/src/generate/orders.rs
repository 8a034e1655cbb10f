use chrono::{NaiveDate, NaiveTime, TimeDelta};
use rand::Rng;
use rand::seq::IndexedRandom;
use shop_pulse_core::{Money, OrderId, OrderStatus, PaymentMethod, ProductId};

use super::customers::customer_snapshot;
use super::pools;
use crate::error::Result;
use crate::models::{Order, ProductSnapshot};
use crate::weighted::WeightedTable;

const ORDER_WINDOW_DAYS: i64 = 30;
const SECONDS_PER_DAY: i64 = 86_400;
const MIN_PRICE_CENTS: i64 = 1_000;
const MAX_PRICE_CENTS: i64 = 50_000;

fn status_weights() -> Result<WeightedTable<OrderStatus>> {
    WeightedTable::new(
        OrderStatus::ALL
            .into_iter()
            .zip([0.15, 0.25, 0.2, 0.3, 0.1])
            .collect(),
    )
}

/// Generate `count` orders placed in the 30 days up to `reference`, newest first.
///
/// Each order carries its own customer and product snapshot.
///
/// # Errors
///
/// Returns an error if a weight table or generated email is invalid.
pub fn generate_orders<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    reference: NaiveDate,
) -> Result<Vec<Order>> {
    let statuses = status_weights()?;

    let mut orders = (0..count)
        .map(|_| {
            let status = statuses.sample(rng).copied().unwrap_or_default();
            generate_order(rng, status, reference)
        })
        .collect::<Result<Vec<_>>>()?;

    orders.sort_by(|a, b| b.date.cmp(&a.date));
    Ok(orders)
}

fn generate_order<R: Rng + ?Sized>(
    rng: &mut R,
    status: OrderStatus,
    reference: NaiveDate,
) -> Result<Order> {
    let id = OrderId::new(format!("ORD-{}", pools::upper_alphanumeric(rng, 6)));
    let customer = customer_snapshot(rng)?;
    let product = ProductSnapshot {
        id: ProductId::from_uuid(pools::uuid(rng)),
        name: pools::product_name(rng),
        price: Money::from_cents(rng.random_range(MIN_PRICE_CENTS..=MAX_PRICE_CENTS)),
        quantity: rng.random_range(1..=5),
    };
    let total = product.price.times(product.quantity);

    let day = reference - TimeDelta::days(rng.random_range(0..=ORDER_WINDOW_DAYS));
    let date = (day.and_time(NaiveTime::MIN)
        + TimeDelta::seconds(rng.random_range(0..SECONDS_PER_DAY)))
    .and_utc();

    let payment_method = PaymentMethod::ALL
        .choose(rng)
        .copied()
        .unwrap_or(PaymentMethod::CreditCard);
    let shipping_address = pools::street_address(rng);
    let tracking_number = status
        .has_tracking()
        .then(|| format!("TRK{}", pools::upper_alphanumeric(rng, 10)));

    Ok(Order {
        id,
        date,
        customer,
        product,
        total,
        status,
        payment_method,
        shipping_address,
        tracking_number,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn sample() -> Vec<Order> {
        let mut rng = StdRng::seed_from_u64(21);
        let reference = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        generate_orders(&mut rng, 300, reference).unwrap()
    }

    #[test]
    fn test_orders_newest_first() {
        let orders = sample();
        assert_eq!(orders.len(), 300);
        assert!(orders.windows(2).all(|w| w[0].date >= w[1].date));
    }

    #[test]
    fn test_order_fields() {
        let reference = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        for order in sample() {
            let id = order.id.as_str();
            assert!(id.starts_with("ORD-") && id.len() == 10, "{id}");
            assert_eq!(order.total, order.product.price.times(order.product.quantity));
            assert!((1..=5).contains(&order.product.quantity));
            assert!(order.product.price >= Money::from_dollars(10));
            assert!(order.product.price <= Money::from_dollars(500));

            let day = order.date.date_naive();
            assert!(day <= reference && day >= reference - TimeDelta::days(30));
        }
    }

    #[test]
    fn test_tracking_only_when_shipped() {
        for order in sample() {
            match &order.tracking_number {
                Some(code) => {
                    assert!(order.status.has_tracking());
                    assert!(code.starts_with("TRK") && code.len() == 13);
                }
                None => assert!(!order.status.has_tracking()),
            }
        }
    }
}
