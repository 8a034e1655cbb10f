//! Cumulative-weight sampling for categorical fields.
//!
//! A draw `u` in `[0, 1)` selects the first bucket whose running weight total
//! exceeds `u`. Weights are expected to sum to one; floating error can leave a
//! draw just past the final running total, in which case [`WeightedTable::pick`]
//! returns `None` and the caller applies its own fallback.

use rand::Rng;

use crate::error::{AnalyticsError, Result};

const WEIGHT_TOLERANCE: f64 = 1e-9;

/// Ordered buckets with their selection weights.
#[derive(Debug, Clone)]
pub struct WeightedTable<T> {
    buckets: Vec<(T, f64)>,
}

impl<T> WeightedTable<T> {
    /// Build a table from `(value, weight)` pairs.
    ///
    /// # Errors
    ///
    /// Returns `AnalyticsError::InvalidWeights` when the table is empty, any
    /// weight is negative or not finite, or the weights do not sum to one.
    pub fn new(buckets: Vec<(T, f64)>) -> Result<Self> {
        if buckets.is_empty() {
            return Err(AnalyticsError::InvalidWeights(
                "at least one bucket is required".to_string(),
            ));
        }

        if let Some((_, bad)) = buckets.iter().find(|(_, w)| !w.is_finite() || *w < 0.0) {
            return Err(AnalyticsError::InvalidWeights(format!(
                "weight {bad} is not a finite non-negative number"
            )));
        }

        let total: f64 = buckets.iter().map(|(_, w)| w).sum();
        if (total - 1.0).abs() > WEIGHT_TOLERANCE {
            return Err(AnalyticsError::InvalidWeights(format!(
                "weights sum to {total}, expected 1"
            )));
        }

        Ok(Self { buckets })
    }

    /// Select the bucket for a uniform draw in `[0, 1)`.
    #[must_use]
    pub fn pick(&self, draw: f64) -> Option<&T> {
        let mut cumulative = 0.0;
        for (value, weight) in &self.buckets {
            cumulative += weight;
            if draw < cumulative {
                return Some(value);
            }
        }
        None
    }

    /// Draw from `rng` and select a bucket.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&T> {
        self.pick(rng.random::<f64>())
    }

    /// The first bucket's value.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.buckets.first().map(|(value, _)| value)
    }

    /// Iterate over values and weights in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&T, f64)> {
        self.buckets.iter().map(|(value, weight)| (value, *weight))
    }
}
