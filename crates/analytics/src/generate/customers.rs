use chrono::{NaiveDate, TimeDelta};
use rand::Rng;
use shop_pulse_core::{CustomerId, CustomerTier, Email, Money, Region};

use super::pools;
use crate::error::Result;
use crate::models::{Customer, CustomerSnapshot};
use crate::weighted::WeightedTable;

/// Days back from the reference date a last order can fall.
const LAST_ORDER_WINDOW_DAYS: i64 = 30;
/// Days before the last order a first purchase can fall.
const FIRST_PURCHASE_WINDOW_DAYS: i64 = 730;

fn tier_weights() -> Result<WeightedTable<CustomerTier>> {
    WeightedTable::new(vec![
        (CustomerTier::New, 0.3),
        (CustomerTier::Regular, 0.5),
        (CustomerTier::Vip, 0.2),
    ])
}

fn region_weights() -> Result<WeightedTable<Region>> {
    WeightedTable::new(
        Region::ALL
            .into_iter()
            .zip([0.35, 0.25, 0.2, 0.1, 0.05, 0.05])
            .collect(),
    )
}

/// Inclusive order-count and whole-dollar spend ranges for a tier.
const fn tier_ranges(tier: CustomerTier) -> ((u32, u32), (i64, i64)) {
    match tier {
        CustomerTier::New => ((1, 3), (50, 300)),
        CustomerTier::Regular => ((4, 10), (300, 1_000)),
        CustomerTier::Vip => ((11, 30), (1_000, 5_000)),
    }
}

/// Generate `count` customers relative to `reference`.
///
/// # Errors
///
/// Returns an error if a weight table or generated email is invalid.
pub fn generate_customers<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    reference: NaiveDate,
) -> Result<Vec<Customer>> {
    let tiers = tier_weights()?;
    let regions = region_weights()?;

    (0..count)
        .map(|_| {
            let tier = tiers
                .sample(rng)
                .or_else(|| tiers.first())
                .copied()
                .unwrap_or(CustomerTier::New);
            let location = regions
                .sample(rng)
                .or_else(|| regions.first())
                .copied()
                .unwrap_or(Region::NorthAmerica);
            generate_customer(rng, tier, location, reference)
        })
        .collect()
}

fn generate_customer<R: Rng + ?Sized>(
    rng: &mut R,
    tier: CustomerTier,
    location: Region,
    reference: NaiveDate,
) -> Result<Customer> {
    let snapshot = customer_snapshot(rng)?;
    let ((min_orders, max_orders), (min_spent, max_spent)) = tier_ranges(tier);
    let orders = rng.random_range(min_orders..=max_orders);
    let total_spent = Money::from_dollars(rng.random_range(min_spent..=max_spent));

    let last_order = reference - TimeDelta::days(rng.random_range(0..=LAST_ORDER_WINDOW_DAYS));
    let first_purchase_date =
        last_order - TimeDelta::days(rng.random_range(1..=FIRST_PURCHASE_WINDOW_DAYS));

    Ok(Customer {
        id: snapshot.id,
        name: snapshot.name,
        email: snapshot.email,
        avatar: snapshot.avatar,
        total_spent,
        orders,
        tier,
        last_order,
        first_purchase_date,
        location,
    })
}

/// A random person's identity fields.
pub(super) fn customer_snapshot<R: Rng + ?Sized>(rng: &mut R) -> Result<CustomerSnapshot> {
    let (first, last) = pools::person_name(rng);
    let domain = pools::pick(rng, pools::EMAIL_DOMAINS);
    let id = CustomerId::from_uuid(pools::uuid(rng));
    let avatar = pools::avatar_url(id.as_str());

    Ok(CustomerSnapshot {
        name: format!("{first} {last}"),
        email: Email::for_person(first, last, domain)?,
        avatar,
        id,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn test_tier_ranges_hold() {
        let mut rng = StdRng::seed_from_u64(11);
        let customers = generate_customers(&mut rng, 500, reference()).unwrap();
        assert_eq!(customers.len(), 500);

        for c in &customers {
            let ((min_o, max_o), (min_s, max_s)) = tier_ranges(c.tier);
            assert!((min_o..=max_o).contains(&c.orders), "{c:?}");
            assert!(c.total_spent >= Money::from_dollars(min_s));
            assert!(c.total_spent <= Money::from_dollars(max_s));
        }
    }

    #[test]
    fn test_dates_are_relative_to_reference() {
        let mut rng = StdRng::seed_from_u64(12);
        for c in generate_customers(&mut rng, 200, reference()).unwrap() {
            assert!(c.last_order <= reference());
            assert!(c.last_order >= reference() - TimeDelta::days(30));
            assert!(c.first_purchase_date < c.last_order);
            assert!(c.first_purchase_date >= c.last_order - TimeDelta::days(730));
        }
    }

    #[test]
    fn test_email_matches_name() {
        let mut rng = StdRng::seed_from_u64(13);
        let snapshot = customer_snapshot(&mut rng).unwrap();
        let first = snapshot.name.split(' ').next().unwrap().to_lowercase();
        assert!(snapshot.email.local_part().starts_with(&first));
        assert!(snapshot.avatar.ends_with(snapshot.id.as_str()));
    }

    #[test]
    fn test_all_tiers_appear() {
        let mut rng = StdRng::seed_from_u64(14);
        let customers = generate_customers(&mut rng, 300, reference()).unwrap();
        for tier in CustomerTier::ALL {
            assert!(customers.iter().any(|c| c.tier == tier), "{tier} missing");
        }
    }
}
