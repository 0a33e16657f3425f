//! Weighted random customer selection
//!
//! Tier-1 customers trade and appear in lookups far more often than their
//! 20% population share. Selection draws a "customer weight" and inverts
//! the quadratic cumulative weight of a linearly decaying position profile:
//! within a load unit, position r carries weight proportional to
//! `(1000 - r)`, so the cumulative up to r is `2000r - r^2` out of
//! 1,000,000 and the inverse is one square root. Early positions - the
//! tier-1 region - are drawn about nine times as often per capita as the
//! tier-3 tail.

use crate::rng::Sequence;
use crate::scaling::{Tier, LOAD_UNIT_SIZE};

/// Total cumulative weight of one load unit's positions.
const UNIT_WEIGHT_TOTAL: i64 = 1_000_000;

/// Cumulative weight below the tier-1/tier-2 boundary (r = 200).
const TIER_ONE_WEIGHT: i64 = 360_000;

/// Cumulative weight below the tier-2/tier-3 boundary (r = 800).
const TIER_TWO_WEIGHT: i64 = 960_000;

/// Draw a random customer ordinal, weighted towards tier 1.
///
/// Consumes exactly two draws: one to pick the load unit uniformly, one
/// for the customer weight within the unit. Returns the 1-based ordinal
/// and its tier.
///
/// # Panics
/// Panics if `total_customers` is not a positive multiple of the load
/// unit size.
pub fn random_customer(seq: &mut Sequence, total_customers: u64) -> (u64, Tier) {
    assert!(
        total_customers > 0 && total_customers % LOAD_UNIT_SIZE == 0,
        "total customer count {total_customers} is not unit-aligned"
    );
    let units = (total_customers / LOAD_UNIT_SIZE) as i64;
    let unit = seq.int64_range(0, units - 1) as u64;

    let weight = seq.int64_range(0, UNIT_WEIGHT_TOTAL - 1);
    let position = invert_weight(weight);

    let ordinal = unit * LOAD_UNIT_SIZE + position + 1;
    // The weight bands [0, TIER_ONE_WEIGHT) and [TIER_ONE_WEIGHT,
    // TIER_TWO_WEIGHT) land exactly on the tier boundaries.
    let tier = if weight < TIER_ONE_WEIGHT {
        Tier::One
    } else if weight < TIER_TWO_WEIGHT {
        Tier::Two
    } else {
        Tier::Three
    };
    debug_assert_eq!(tier, Tier::for_position(position));
    (ordinal, tier)
}

/// Position in [0, 999] whose cumulative weight interval contains `w`.
fn invert_weight(w: i64) -> u64 {
    debug_assert!((0..UNIT_WEIGHT_TOTAL).contains(&w));
    let r = 1000.0 - ((UNIT_WEIGHT_TOTAL - w) as f64).sqrt();
    (r as u64).min(LOAD_UNIT_SIZE - 1)
}
