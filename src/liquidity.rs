//! Deterministic liquidity profile generation.
//!
//! A liquidity profile is a fixed array of [`BIN_COUNT`] buckets spanning a
//! 0–10x multiplier range around a current price. Bucket magnitudes come
//! from an index-keyed blend of three seeded pseudo-random values plus a
//! trigonometric clustering term, so the same inputs always produce the
//! same bars and re-renders never thrash.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// Number of buckets in a full profile.
pub const BIN_COUNT: usize = 100;

/// Display floor for a bucket's bar height.
pub const MIN_BIN_HEIGHT: f64 = 4.0;

/// Span of the multiplier axis: bucket `i` sits at `i / 100 × 10`.
const MULTIPLIER_SPAN: f64 = 10.0;

/// Scale applied to liquidity when deriving the bar height.
const HEIGHT_SCALE: f64 = 0.4;

/// Multiplicative seeds for the three blended pseudo-random streams, each
/// paired with the modulus that folds it into [0, 1). The moduli are
/// distinct primes so the streams stay out of phase over the bucket range.
const SEED_PAIRS: [(usize, usize); 3] = [(12_345, 233), (67_890, 181), (11_111, 157)];

/// One bucket of a liquidity profile.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bin {
    /// Stable bucket index, `0..BIN_COUNT`, usable as a render key.
    pub id: usize,
    /// Price multiplier at this bucket, in `[0, 10)`.
    pub price_multiplier: f64,
    /// Absolute price at this bucket: `current_price × price_multiplier`.
    pub price: f64,
    /// Relative order-book depth, in `[0, 100]`.
    pub liquidity: f64,
    /// Display magnitude for the bar, floored at [`MIN_BIN_HEIGHT`].
    pub height: f64,
}

/// Computes the bucket at `index` for the given current price.
///
/// Pure and total: identical inputs always yield bit-identical output, and
/// no input panics. Only [`profile`] fixes the `0..BIN_COUNT` index range;
/// out-of-range indices still produce a well-defined bucket.
///
/// ### Example
/// ```rust
/// use smd_rs::liquidity;
///
/// let a = liquidity::bin(2_450.5, 42);
/// let b = liquidity::bin(2_450.5, 42);
/// assert_eq!(a, b);
/// ```
pub fn bin(current_price: f64, index: usize) -> Bin {
    let blended = SEED_PAIRS
        .iter()
        .map(|&(seed, modulus)| ((index * seed) % modulus) as f64 / modulus as f64)
        .sum::<f64>()
        / SEED_PAIRS.len() as f64;

    // Whale-like clumping at certain price bands.
    let clustering = (index as f64 * 0.3).sin() * 0.2 + (index as f64 * 0.7).cos() * 0.15;

    let liquidity = (blended + clustering).clamp(0.0, 1.0) * 100.0;
    let price_multiplier = index as f64 / BIN_COUNT as f64 * MULTIPLIER_SPAN;

    Bin {
        id: index,
        price_multiplier,
        price: current_price * price_multiplier,
        liquidity,
        height: (liquidity * HEIGHT_SCALE).max(MIN_BIN_HEIGHT),
    }
}

/// Computes the full [`BIN_COUNT`]-bucket profile for a current price.
///
/// ### Arguments
/// * `current_price` - The price the multiplier axis scales against.
///
/// ### Returns
/// Exactly [`BIN_COUNT`] buckets with stable ids `0..BIN_COUNT`, or
/// [`Error::InvalidPrice`] when the price is not positive and finite —
/// callers holding a loading or errored price feed should render
/// [`placeholder`] instead of reaching for the generator.
pub fn profile(current_price: f64) -> Result<Vec<Bin>> {
    if current_price <= 0.0 || !current_price.is_finite() {
        return Err(Error::InvalidPrice(current_price));
    }

    Ok((0..BIN_COUNT).map(|index| bin(current_price, index)).collect())
}

/// Returns the all-zero stand-in profile for a loading or errored feed.
///
/// Every bucket carries zero liquidity and the floor height, with the same
/// stable ids a real profile would have.
pub fn placeholder() -> Vec<Bin> {
    (0..BIN_COUNT)
        .map(|index| Bin {
            id: index,
            price_multiplier: index as f64 / BIN_COUNT as f64 * MULTIPLIER_SPAN,
            price: 0.0,
            liquidity: 0.0,
            height: MIN_BIN_HEIGHT,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bin_is_deterministic() {
        for index in 0..BIN_COUNT {
            let a = bin(2_450.5, index);
            let b = bin(2_450.5, index);
            assert_eq!(a.liquidity.to_bits(), b.liquidity.to_bits());
            assert_eq!(a.height.to_bits(), b.height.to_bits());
        }
    }

    #[test]
    fn liquidity_and_height_stay_in_range() {
        for index in 0..BIN_COUNT {
            let bucket = bin(43_250.0, index);
            assert!(bucket.liquidity >= 0.0 && bucket.liquidity <= 100.0);
            assert!(bucket.height >= MIN_BIN_HEIGHT);
        }
    }

    #[test]
    fn profile_has_stable_ids_and_scaled_prices() {
        let price = 98.5;
        let buckets = profile(price).unwrap();

        assert_eq!(buckets.len(), BIN_COUNT);
        for (index, bucket) in buckets.iter().enumerate() {
            assert_eq!(bucket.id, index);
            assert_eq!(bucket.price_multiplier, index as f64 / 100.0 * 10.0);
            assert_eq!(bucket.price, price * bucket.price_multiplier);
        }
    }

    #[test]
    fn profile_varies_across_buckets() {
        let buckets = profile(1.0).unwrap();
        let first = buckets[0].liquidity;
        assert!(buckets.iter().any(|b| b.liquidity != first));
    }

    #[test]
    fn profile_rejects_unusable_prices() {
        for price in [0.0, -10.0, f64::NAN, f64::INFINITY] {
            let result = profile(price);
            assert!(matches!(result, Err(Error::InvalidPrice(_))));
        }
    }

    #[test]
    fn placeholder_is_flat() {
        let buckets = placeholder();
        assert_eq!(buckets.len(), BIN_COUNT);
        for bucket in &buckets {
            assert_eq!(bucket.liquidity, 0.0);
            assert_eq!(bucket.height, MIN_BIN_HEIGHT);
        }
    }

    #[test]
    fn out_of_range_index_still_yields_a_bucket() {
        let bucket = bin(10.0, 150);
        assert!(bucket.liquidity >= 0.0 && bucket.liquidity <= 100.0);
        assert_eq!(bucket.id, 150);
    }
}
