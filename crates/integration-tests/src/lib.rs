//! Integration tests for Shop Pulse.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p shop-pulse-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `generation` - Dataset reproducibility and generator invariants
//! - `derivations` - Segment sums, percentages and ROI formulas
//! - `tables` - Sorting and filtering across the dashboard tables
//!
//! Every test builds its data through [`seeded_dataset`] so failures can be
//! replayed.

#![cfg_attr(not(test), forbid(unsafe_code))]

use chrono::NaiveDate;
use shop_pulse_analytics::{DashboardConfig, Dataset};

/// Reference date shared by the seeded fixtures.
pub const REFERENCE_DATE: (i32, u32, u32) = (2024, 6, 15);

/// Seeds used by tests that check an invariant across several datasets.
pub const SEEDS: [u64; 5] = [1, 7, 42, 1_234, 99_999];

/// The fixed reference date.
#[must_use]
pub fn reference_date() -> NaiveDate {
    let (year, month, day) = REFERENCE_DATE;
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Configuration pinned to `seed` and the fixed reference date.
#[must_use]
pub fn seeded_config(seed: u64) -> DashboardConfig {
    DashboardConfig::default()
        .with_seed(seed)
        .with_reference_date(reference_date())
}

/// Generate a dataset from [`seeded_config`].
///
/// # Panics
///
/// Panics if generation fails, which fails the calling test.
#[must_use]
#[allow(clippy::expect_used)]
pub fn seeded_dataset(seed: u64) -> Dataset {
    Dataset::generate(&seeded_config(seed)).expect("seeded dataset should generate")
}
