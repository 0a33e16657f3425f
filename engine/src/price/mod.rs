//! Deterministic security price model
//!
//! Every security's price follows a triangular wave: linear rise across
//! the first half of a fixed 15-minute period, linear fall across the
//! second half, bounded to the $20.00-$30.00 band. A per-security phase
//! offset spreads the securities across the period so no two small indices
//! move in lockstep. The function is pure: generators use it for daily
//! closing history, and the run-time workload inverts it to decide how
//! long a pending limit or stop order needs before its trigger price
//! arrives.
//!
//! All wave arithmetic is integer milliseconds and cents, so periodicity
//! is exact and the band is never left.

use crate::core::Money;
use crate::rng::Sequence;

/// Wave period in seconds.
pub const PRICE_PERIOD_SECS: u64 = 900;

/// Wave period in milliseconds.
pub const PRICE_PERIOD_MSECS: u64 = PRICE_PERIOD_SECS * 1000;

/// Bottom of the price band.
pub const MIN_PRICE_CENTS: i64 = 2_000;

/// Top of the price band.
pub const MAX_PRICE_CENTS: i64 = 3_000;

/// Multiplier of the per-security phase offset.
const OFFSET_MULTIPLIER: u64 = 556_237;

/// Additive constant of the per-security phase offset.
const OFFSET_INCREMENT: u64 = 253_791;

/// Half the period: the rising edge length in milliseconds.
const HALF_PERIOD_MSECS: u64 = PRICE_PERIOD_MSECS / 2;

/// Phase offset in milliseconds for a 0-based security index.
pub fn initial_offset_msecs(security_index: u64) -> u64 {
    (security_index
        .wrapping_mul(OFFSET_MULTIPLIER)
        .wrapping_add(OFFSET_INCREMENT))
        % PRICE_PERIOD_MSECS
}

/// Position of a security inside its wave period at a time in ms.
fn wave_position_msecs(security_index: u64, time_msecs: u64) -> u64 {
    (time_msecs.wrapping_add(initial_offset_msecs(security_index))) % PRICE_PERIOD_MSECS
}

/// Price in cents at a wave position.
fn price_cents_at_position(position: u64) -> i64 {
    debug_assert!(position < PRICE_PERIOD_MSECS);
    let range = (MAX_PRICE_CENTS - MIN_PRICE_CENTS) as u64;
    let cents_above_min = if position < HALF_PERIOD_MSECS {
        // Rising edge.
        position * range / HALF_PERIOD_MSECS
    } else {
        // Falling edge.
        (PRICE_PERIOD_MSECS - position) * range / HALF_PERIOD_MSECS
    };
    MIN_PRICE_CENTS + cents_above_min as i64
}

/// Price of a security at a time given in milliseconds.
pub fn price_at_msecs(security_index: u64, time_msecs: u64) -> Money {
    Money::from_cents(price_cents_at_position(wave_position_msecs(
        security_index,
        time_msecs,
    )))
}

/// Price of a security at a time given in whole seconds.
///
/// # Example
/// ```
/// use market_datagen_core_rs::price::{price, PRICE_PERIOD_SECS};
///
/// let now = price(17, 12_345);
/// assert_eq!(now, price(17, 12_345 + PRICE_PERIOD_SECS)); // exactly periodic
/// assert!(now.cents() >= 2_000 && now.cents() <= 3_000);
/// ```
pub fn price(security_index: u64, time_secs: u64) -> Money {
    price_at_msecs(security_index, time_secs * 1000)
}

/// Milliseconds until the wave next touches `target`, travelling from its
/// position at `now_msecs` in the current direction. Zero if the wave is
/// touching `target` right now.
///
/// # Panics
/// Panics if `target` lies outside the price band.
pub fn msecs_to_reach(security_index: u64, now_msecs: u64, target: Money) -> u64 {
    let cents = target.cents();
    assert!(
        (MIN_PRICE_CENTS..=MAX_PRICE_CENTS).contains(&cents),
        "target price {target} outside band"
    );
    let above_min = (cents - MIN_PRICE_CENTS) as u64;
    let range = (MAX_PRICE_CENTS - MIN_PRICE_CENTS) as u64;
    // Positions within the period at which the wave crosses the target:
    // once rising, once falling (they coincide at the peak and trough).
    let rising = above_min * HALF_PERIOD_MSECS / range;
    let falling = PRICE_PERIOD_MSECS - rising;
    let position = wave_position_msecs(security_index, now_msecs);

    let until = |touch: u64| (touch + PRICE_PERIOD_MSECS - position) % PRICE_PERIOD_MSECS;
    if price_cents_at_position(position) == cents {
        return 0;
    }
    until(rising).min(until(falling % PRICE_PERIOD_MSECS))
}

/// Seconds until the wave next touches `target` (rounded down).
pub fn secs_to_reach(security_index: u64, now_secs: u64, target: Money) -> u64 {
    msecs_to_reach(security_index, now_secs * 1000, target) / 1000
}

/// Randomized delay, in seconds, between an order coming in-the-money and
/// its submission. Negative-exponential with the given mean; one draw.
pub fn submission_delay_secs(seq: &mut Sequence, mean_secs: f64) -> f64 {
    seq.neg_exp(mean_secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_are_distinct_for_small_indices() {
        let offsets: Vec<u64> = (0..100).map(initial_offset_msecs).collect();
        let mut unique = offsets.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), offsets.len());
    }

    #[test]
    fn test_price_stays_in_band() {
        for index in [0u64, 1, 17, 684, 9_999] {
            for t in (0..3 * PRICE_PERIOD_SECS).step_by(7) {
                let p = price(index, t);
                assert!(
                    (MIN_PRICE_CENTS..=MAX_PRICE_CENTS).contains(&p.cents()),
                    "price {p} out of band at index={index} t={t}"
                );
            }
        }
    }

    #[test]
    fn test_price_is_exactly_periodic() {
        for index in [0u64, 3, 684] {
            for t in 0..PRICE_PERIOD_SECS {
                assert_eq!(price(index, t), price(index, t + PRICE_PERIOD_SECS));
                assert_eq!(price(index, t), price(index, t + 10 * PRICE_PERIOD_SECS));
            }
        }
    }

    #[test]
    fn test_wave_touches_both_band_edges() {
        let mut saw_min = false;
        let mut saw_max = false;
        for ms in 0..PRICE_PERIOD_MSECS {
            let cents = price_at_msecs(5, ms).cents();
            saw_min |= cents == MIN_PRICE_CENTS;
            saw_max |= cents == MAX_PRICE_CENTS;
        }
        assert!(saw_min && saw_max);
    }

    #[test]
    fn test_msecs_to_reach_lands_on_target() {
        let target = Money::from_cents(2_750);
        for index in [0u64, 9, 123] {
            for now in [0u64, 123_456, 899_999, 1_234_567] {
                let dt = msecs_to_reach(index, now, target);
                assert!(dt < PRICE_PERIOD_MSECS);
                assert_eq!(
                    price_at_msecs(index, now + dt).cents(),
                    target.cents(),
                    "index={index} now={now} dt={dt}"
                );
            }
        }
    }

    #[test]
    fn test_reach_current_price_is_immediate() {
        let now = 42_000;
        let current = price_at_msecs(7, now);
        assert_eq!(msecs_to_reach(7, now, current), 0);
    }

    #[test]
    #[should_panic(expected = "outside band")]
    fn test_reach_outside_band_panics() {
        msecs_to_reach(0, 0, Money::from_cents(1_999));
    }

    #[test]
    fn test_submission_delay_deterministic_and_nonnegative() {
        let mut a = Sequence::new(55);
        let mut b = Sequence::new(55);
        for _ in 0..100 {
            let d = submission_delay_secs(&mut a, 2.0);
            assert!(d >= 0.0);
            assert_eq!(d, submission_delay_secs(&mut b, 2.0));
        }
    }
}
