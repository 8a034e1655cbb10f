//! Integration tests for dataset generation.
//!
//! Checks reproducibility and the record-level invariants every generated
//! dataset must hold, across several seeds.

#![allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::cast_precision_loss)]

use chrono::TimeDelta;
use rand::SeedableRng;
use rand::rngs::StdRng;
use shop_pulse_analytics::{Dataset, WeightedTable};
use shop_pulse_core::{CustomerTier, Money};
use shop_pulse_integration_tests::{SEEDS, reference_date, seeded_config, seeded_dataset};

// ============================================================================
// Reproducibility
// ============================================================================

#[test]
fn test_same_seed_same_dataset() {
    for seed in SEEDS {
        assert_eq!(seeded_dataset(seed), seeded_dataset(seed));
    }
}

#[test]
fn test_same_seed_same_json() {
    let a = serde_json::to_string(&seeded_dataset(42)).unwrap();
    let b = serde_json::to_string(&seeded_dataset(42)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_different_seeds_differ() {
    assert_ne!(seeded_dataset(1).customers, seeded_dataset(2).customers);
}

#[test]
fn test_caller_rng_matches_seeded_generation() {
    let config = seeded_config(7);
    let mut rng = StdRng::seed_from_u64(7);
    let from_rng = Dataset::generate_with(&mut rng, &config).unwrap();
    assert_eq!(from_rng, seeded_dataset(7));
}

#[test]
fn test_configured_sizes() {
    let mut config = seeded_config(3);
    config.customer_count = 250;
    config.order_count = 40;
    let dataset = Dataset::generate(&config).unwrap();
    assert_eq!(dataset.customers.len(), 250);
    assert_eq!(dataset.orders.len(), 40);
    assert_eq!(dataset.apps.len(), 23);
    assert_eq!(dataset.inventory.len(), 10);
}

// ============================================================================
// Customers
// ============================================================================

#[test]
fn test_customer_ranges_follow_tier() {
    for seed in SEEDS {
        for customer in seeded_dataset(seed).customers {
            let (orders, spent) = match customer.tier {
                CustomerTier::New => (1..=3, 50..=300),
                CustomerTier::Regular => (4..=10, 300..=1_000),
                CustomerTier::Vip => (11..=30, 1_000..=5_000),
            };
            assert!(orders.contains(&customer.orders), "{customer:?}");
            assert!(
                customer.total_spent >= Money::from_dollars(*spent.start())
                    && customer.total_spent <= Money::from_dollars(*spent.end()),
                "{customer:?}"
            );
        }
    }
}

#[test]
fn test_customer_dates() {
    let reference = reference_date();
    for customer in seeded_dataset(11).customers {
        assert!(customer.last_order <= reference);
        assert!(customer.last_order >= reference - TimeDelta::days(30));
        assert!(customer.first_purchase_date < customer.last_order);
        assert!(customer.first_purchase_date >= customer.last_order - TimeDelta::days(730));
    }
}

#[test]
fn test_customer_emails_are_lowercase_names() {
    for customer in seeded_dataset(5).customers {
        let email = customer.email.as_str();
        assert_eq!(email, email.to_lowercase());
        let (first, last) = customer.name.split_once(' ').unwrap();
        let clean = |part: &str| -> String {
            part.chars()
                .filter(char::is_ascii_alphanumeric)
                .collect::<String>()
                .to_lowercase()
        };
        assert_eq!(
            customer.email.local_part(),
            format!("{}.{}", clean(first), clean(last))
        );
        assert!(customer.avatar.contains(customer.id.as_str()));
    }
}

#[test]
fn test_tier_mix_tracks_weights() {
    let mut config = seeded_config(2024);
    config.customer_count = 5_000;
    let customers = Dataset::generate(&config).unwrap().customers;

    let share = |tier: CustomerTier| {
        let n = customers.iter().filter(|c| c.tier == tier).count();
        n as f64 / customers.len() as f64
    };
    assert!((share(CustomerTier::New) - 0.3).abs() < 0.03);
    assert!((share(CustomerTier::Regular) - 0.5).abs() < 0.03);
    assert!((share(CustomerTier::Vip) - 0.2).abs() < 0.03);
}

// ============================================================================
// Orders
// ============================================================================

#[test]
fn test_orders_newest_first_and_in_window() {
    let reference = reference_date();
    for seed in SEEDS {
        let orders = seeded_dataset(seed).orders;
        assert!(orders.windows(2).all(|w| w[0].date >= w[1].date));
        for order in &orders {
            let day = order.date.date_naive();
            assert!(day <= reference && day >= reference - TimeDelta::days(30));
        }
    }
}

#[test]
fn test_order_totals_and_tracking() {
    for order in seeded_dataset(8).orders {
        assert_eq!(order.total, order.product.price.times(order.product.quantity));
        assert!((1..=5).contains(&order.product.quantity));
        assert!(order.product.price >= Money::from_dollars(10));
        assert!(order.product.price <= Money::from_dollars(500));
        assert_eq!(order.tracking_number.is_some(), order.status.has_tracking());
        assert!(order.id.as_str().starts_with("ORD-"));
    }
}

// ============================================================================
// Weighted sampling
// ============================================================================

#[test]
fn test_weighted_sampling_frequencies() {
    let table = WeightedTable::new(vec![("a", 0.1), ("b", 0.6), ("c", 0.3)]).unwrap();
    let mut rng = StdRng::seed_from_u64(99);

    let mut counts = [0_u32; 3];
    for _ in 0..20_000 {
        match table.sample(&mut rng).copied() {
            Some("a") => counts[0] += 1,
            Some("b") => counts[1] += 1,
            _ => counts[2] += 1,
        }
    }

    let expected = [0.1, 0.6, 0.3];
    for (count, weight) in counts.iter().zip(expected) {
        assert!((f64::from(*count) / 20_000.0 - weight).abs() < 0.02);
    }
}

#[test]
fn test_bad_weights_rejected() {
    assert!(WeightedTable::new(vec![("a", 0.5), ("b", 0.4)]).is_err());
    assert!(WeightedTable::<&str>::new(vec![]).is_err());
    assert!(WeightedTable::new(vec![("a", -0.5), ("b", 1.5)]).is_err());
}
